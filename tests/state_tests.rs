//! Scenario tests for `State`.

use redbook::effect::State;
use rstest::rstest;

// =============================================================================
// Stack
// =============================================================================

fn push(value: i32) -> State<Vec<i32>, ()> {
    State::modify(move |mut stack: Vec<i32>| {
        stack.push(value);
        stack
    })
}

fn pop() -> State<Vec<i32>, Option<i32>> {
    State::new(|mut stack: Vec<i32>| {
        let top = stack.pop();
        (top, stack)
    })
}

#[rstest]
fn stack_operations_thread_the_stack() {
    let program = push(1)
        .then(push(2))
        .then(push(3))
        .then(pop())
        .flat_map(|first| pop().fmap(move |second| (first, second)));

    let ((first, second), stack) = program.run(Vec::new());
    assert_eq!((first, second), (Some(3), Some(2)));
    assert_eq!(stack, vec![1]);
}

#[rstest]
fn pop_on_empty_stack_yields_none() {
    assert_eq!(pop().run(Vec::new()), (None, Vec::new()));
}

#[rstest]
fn sequence_of_pops_preserves_order() {
    let pops = State::replicate(4, pop());
    let (popped, rest) = pops.run(vec![1, 2, 3]);
    assert_eq!(popped, vec![Some(3), Some(2), Some(1), None]);
    assert!(rest.is_empty());
}

// =============================================================================
// Labelling
// =============================================================================

fn fresh_label(prefix: &'static str) -> State<usize, String> {
    State::new(move |next: usize| (format!("{prefix}{next}"), next + 1))
}

#[rstest]
fn traverse_assigns_labels_in_order() {
    let labels = State::traverse(["a", "b", "c"], fresh_label);
    assert_eq!(
        labels.run(0),
        (vec!["a0".to_string(), "b1".to_string(), "c2".to_string()], 3)
    );
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(100)]
fn sequence_and_sequence_left_agree(#[case] count: usize) {
    let steps = || vec![fresh_label("x"); count];
    assert_eq!(
        State::sequence(steps()).run(7),
        State::sequence_left(steps()).run(7)
    );
}

#[rstest]
fn long_sequence_runs_without_growing_results_out_of_order() {
    let (values, last) = State::replicate(1000, State::new(|n: u32| (n, n + 1))).run(0);
    assert_eq!(values, (0..1000).collect::<Vec<_>>());
    assert_eq!(last, 1000);
}

// =============================================================================
// Reuse
// =============================================================================

#[rstest]
fn state_can_be_run_many_times_from_different_states() {
    let double_and_count = State::new(|count: u32| (count * 2, count + 1));
    assert_eq!(double_and_count.run(1), (2, 2));
    assert_eq!(double_and_count.run(10), (20, 11));
    assert_eq!(double_and_count.clone().eval(3), 6);
    assert_eq!(double_and_count.exec(3), 4);
}

#[rstest]
fn and_then_is_flat_map() {
    let via_and_then = fresh_label("n").and_then(|_| fresh_label("m"));
    let via_flat_map = fresh_label("n").flat_map(|_| fresh_label("m"));
    assert_eq!(via_and_then.run(5), via_flat_map.run(5));
}
