//! Scenario and property tests for the candy machine simulation.

use proptest::prelude::*;
use redbook::simulation::{Input, InputError, Machine, simulate_machine};
use rstest::rstest;

use Input::{Coin, Turn};

fn input_strategy() -> impl Strategy<Value = Input> {
    prop_oneof![Just(Coin), Just(Turn)]
}

fn machine_strategy() -> impl Strategy<Value = Machine> {
    (any::<bool>(), 0u32..20, 0u32..100)
        .prop_map(|(locked, candies, coins)| Machine::new(locked, candies, coins))
}

// =============================================================================
// Scenarios
// =============================================================================

#[rstest]
#[case(&[Coin, Turn, Coin, Turn, Coin, Turn, Coin, Turn], (1, 14))]
#[case(&[Turn, Coin, Coin, Turn, Turn], (4, 11))]
#[case(&[Coin; 6], (5, 11))]
#[case(&[Turn; 6], (5, 10))]
#[case(&[], (5, 10))]
fn simulate_from_stocked_machine(#[case] inputs: &[Input], #[case] expected: (u32, u32)) {
    let machine = Machine::new(true, 5, 10);
    assert_eq!(simulate_machine(inputs).eval(machine), expected);
}

#[rstest]
fn buying_every_candy_empties_and_relocks() {
    let inputs: Vec<Input> = std::iter::repeat_n([Coin, Turn], 5).flatten().collect();
    let ((candies, coins), machine) = simulate_machine(&inputs).run(Machine::new(true, 5, 10));

    assert_eq!((candies, coins), (0, 15));
    assert_eq!(machine, Machine::new(true, 0, 15));
}

#[rstest]
fn extra_purchases_after_running_out_are_ignored() {
    let inputs: Vec<Input> = std::iter::repeat_n([Coin, Turn], 10).flatten().collect();
    assert_eq!(simulate_machine(&inputs).eval(Machine::new(true, 5, 10)), (0, 15));
}

#[rstest]
fn unlocked_machine_dispenses_on_first_turn() {
    let ((candies, coins), machine) = simulate_machine(&[Turn, Turn]).run(Machine::new(false, 2, 0));
    assert_eq!((candies, coins), (1, 0));
    assert!(machine.locked);
}

#[rstest]
fn one_simulation_runs_against_many_machines() {
    let simulation = simulate_machine(&[Coin, Turn]);
    assert_eq!(simulation.eval(Machine::new(true, 5, 10)), (4, 11));
    assert_eq!(simulation.eval(Machine::new(true, 0, 10)), (0, 10));
    assert_eq!(simulation.eval(Machine::new(false, 1, 3)), (0, 3));
}

// =============================================================================
// Parsing
// =============================================================================

#[rstest]
#[case("coin", Coin)]
#[case("TURN", Turn)]
#[case("  Coin\t", Coin)]
fn parses_inputs(#[case] text: &str, #[case] expected: Input) {
    assert_eq!(text.parse::<Input>(), Ok(expected));
}

#[rstest]
#[case("", "")]
#[case(" push ", "push")]
#[case("coins", "coins")]
fn rejects_unknown_inputs(#[case] text: &str, #[case] rejected: &str) {
    assert_eq!(
        text.parse::<Input>(),
        Err(InputError::Unrecognized(rejected.to_string()))
    );
}

#[rstest]
fn display_round_trips_through_parse() {
    for input in [Coin, Turn] {
        assert_eq!(input.to_string().parse::<Input>(), Ok(input));
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_simulation_matches_repeated_update(
        machine in machine_strategy(),
        inputs in prop::collection::vec(input_strategy(), 0..40),
    ) {
        let expected = inputs.iter().fold(machine, |machine, &input| machine.update(input));
        let (totals, final_machine) = simulate_machine(&inputs).run(machine);

        prop_assert_eq!(final_machine, expected);
        prop_assert_eq!(totals, expected.totals());
    }

    #[test]
    fn prop_candies_and_coins_are_conserved(
        machine in machine_strategy(),
        inputs in prop::collection::vec(input_strategy(), 0..40),
    ) {
        let (candies, coins) = simulate_machine(&inputs).eval(machine);

        prop_assert!(candies <= machine.candies);
        prop_assert!(coins >= machine.coins);
        prop_assert!(coins - machine.coins <= machine.candies - candies + 1);
    }

    #[test]
    fn prop_empty_machine_never_changes(
        locked in any::<bool>(),
        coins in 0u32..100,
        inputs in prop::collection::vec(input_strategy(), 0..40),
    ) {
        let machine = Machine::new(locked, 0, coins);
        prop_assert_eq!(simulate_machine(&inputs).run(machine), ((0, coins), machine));
    }
}
