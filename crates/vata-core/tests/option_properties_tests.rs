//! Property tests for enumeration ranges and option-string round trips

use proptest::prelude::*;
use vata_core::{
    is_valid_code, Algorithm, CodedEnum, Direction, DirectionOptions, Encoding, EquivalenceOptions,
    InclusionOptions, Operation, OptionBundle, Order,
};

fn encoding() -> impl Strategy<Value = Encoding> {
    prop::sample::select(Encoding::ALL.to_vec())
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn order() -> impl Strategy<Value = Order> {
    prop::sample::select(Order::ALL.to_vec())
}

fn algorithm() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::ALL.to_vec())
}

fn inclusion() -> impl Strategy<Value = InclusionOptions> {
    (
        direction(),
        algorithm(),
        any::<bool>(),
        order(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(d, a, s, o, c, r, t)| InclusionOptions::new(d, a, s, o, c, r, t))
}

proptest! {
    #[test]
    fn valid_code_iff_in_range(code in -20i32..20) {
        prop_assert_eq!(is_valid_code::<Encoding>(code), (0..=3).contains(&code));
        prop_assert_eq!(is_valid_code::<Direction>(code), (0..=1).contains(&code));
        prop_assert_eq!(is_valid_code::<Order>(code), (0..=1).contains(&code));
        prop_assert_eq!(is_valid_code::<Algorithm>(code), (0..=1).contains(&code));
        prop_assert_eq!(is_valid_code::<Operation>(code), (0..=9).contains(&code));
    }

    #[test]
    fn bundle_from_codes_fails_iff_out_of_range(
        dir in -3i32..4,
        alg in -3i32..4,
        ord in -3i32..4,
    ) {
        let built = InclusionOptions::from_codes(dir, alg, false, ord, false, false, true);
        let all_valid = is_valid_code::<Direction>(dir)
            && is_valid_code::<Algorithm>(alg)
            && is_valid_code::<Order>(ord);
        prop_assert_eq!(built.is_ok(), all_valid);

        prop_assert_eq!(DirectionOptions::from_code(dir).is_ok(), is_valid_code::<Direction>(dir));
        prop_assert_eq!(EquivalenceOptions::from_code(ord).is_ok(), is_valid_code::<Order>(ord));
    }

    #[test]
    fn inclusion_round_trip(options in inclusion(), enc in encoding()) {
        let text = OptionBundle::from(options).serialize(enc);
        let parsed = OptionBundle::parse(Operation::Inclusion, enc, &text).unwrap();
        prop_assert_eq!(parsed, OptionBundle::Inclusion(options));
    }

    #[test]
    fn direction_round_trip(dir in direction(), enc in encoding()) {
        let options = DirectionOptions::new(dir);
        for operation in [Operation::Simulation, Operation::Reduction] {
            let text = options.serialize(enc);
            let parsed = OptionBundle::parse(operation, enc, &text).unwrap();
            prop_assert_eq!(parsed, OptionBundle::Direction(options));
        }
    }

    #[test]
    fn equivalence_round_trip(ord in order(), enc in encoding()) {
        let options = EquivalenceOptions::new(ord);
        let text = options.serialize();
        let parsed = OptionBundle::parse(Operation::Equivalence, enc, &text).unwrap();
        prop_assert_eq!(parsed, OptionBundle::Equivalence(options));
    }
}
