//! Option enumerations understood by `vata`
//!
//! Integer codes are stable and match the code ranges used by every client
//! of the tool; tokens are exactly what `vata` parses on its command line.

use super::bundles::BundleKind;
use super::CodedEnum;
use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use vata_errors::VataError;

macro_rules! coded_enum_conversions {
    ($ty:ty) => {
        impl TryFrom<i32> for $ty {
            type Error = VataError;

            fn try_from(code: i32) -> Result<Self> {
                <$ty as CodedEnum>::from_code(code)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.token())
            }
        }
    };
}

macro_rules! token_from_str {
    ($ty:ty) => {
        impl FromStr for $ty {
            type Err = VataError;

            fn from_str(s: &str) -> Result<Self> {
                <$ty as CodedEnum>::from_token(s)
            }
        }
    };
}

/// Internal representation `vata` uses for automata (`-r`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Encoding {
    /// Explicit tree automata
    #[default]
    #[serde(rename = "expl")]
    Explicit,
    /// BDD-based, top-down
    #[serde(rename = "bdd-td")]
    BddTopDown,
    /// BDD-based, bottom-up
    #[serde(rename = "bdd-bu")]
    BddBottomUp,
    /// Explicit finite (word) automata
    #[serde(rename = "expl_fa")]
    ExplicitFa,
}

impl CodedEnum for Encoding {
    const NAME: &'static str = "encoding";
    const MIN: i32 = 0;
    const MAX: i32 = 3;
    const ALL: &'static [Self] = &[
        Encoding::Explicit,
        Encoding::BddTopDown,
        Encoding::BddBottomUp,
        Encoding::ExplicitFa,
    ];

    fn code(self) -> i32 {
        match self {
            Encoding::Explicit => 0,
            Encoding::BddTopDown => 1,
            Encoding::BddBottomUp => 2,
            Encoding::ExplicitFa => 3,
        }
    }

    fn token(self) -> &'static str {
        match self {
            Encoding::Explicit => "expl",
            Encoding::BddTopDown => "bdd-td",
            Encoding::BddBottomUp => "bdd-bu",
            Encoding::ExplicitFa => "expl_fa",
        }
    }
}

coded_enum_conversions!(Encoding);
token_from_str!(Encoding);

/// Direction of simulation, reduction or inclusion checking
///
/// For the `expl_fa` encoding `vata` names the two directions forward and
/// backward; the codes are shared, only the rendering differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Downward (forward for finite automata)
    #[default]
    #[serde(rename = "down", alias = "fwd")]
    Down,
    /// Upward (backward for finite automata)
    #[serde(rename = "up", alias = "bwd")]
    Up,
}

impl Direction {
    /// Forward/backward token used with the `expl_fa` encoding
    pub fn fa_token(self) -> &'static str {
        match self {
            Direction::Down => "fwd",
            Direction::Up => "bwd",
        }
    }

    /// Token table selected by the encoding of the owning command
    pub fn token_for(self, encoding: Encoding) -> &'static str {
        match encoding {
            Encoding::ExplicitFa => self.fa_token(),
            _ => self.token(),
        }
    }

    /// Parse a token from the table selected by `encoding`
    pub fn from_token_for(encoding: Encoding, token: &str) -> Result<Self> {
        match encoding {
            Encoding::ExplicitFa => match token {
                "fwd" => Ok(Direction::Down),
                "bwd" => Ok(Direction::Up),
                _ => Err(VataError::UnknownToken {
                    enumeration: Self::NAME,
                    token: token.to_string(),
                }),
            },
            _ => Self::from_token(token),
        }
    }
}

impl CodedEnum for Direction {
    const NAME: &'static str = "direction";
    const MIN: i32 = 0;
    const MAX: i32 = 1;
    const ALL: &'static [Self] = &[Direction::Down, Direction::Up];

    fn code(self) -> i32 {
        match self {
            Direction::Down => 0,
            Direction::Up => 1,
        }
    }

    fn token(self) -> &'static str {
        match self {
            Direction::Down => "down",
            Direction::Up => "up",
        }
    }
}

coded_enum_conversions!(Direction);

impl FromStr for Direction {
    type Err = VataError;

    /// Accepts both tables: `down`/`up` and `fwd`/`bwd`
    fn from_str(s: &str) -> Result<Self> {
        Self::from_token(s).or_else(|_| Self::from_token_for(Encoding::ExplicitFa, s))
    }
}

/// Search order of the congruence-based algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Breadth,
    #[default]
    Depth,
}

impl CodedEnum for Order {
    const NAME: &'static str = "order";
    const MIN: i32 = 0;
    const MAX: i32 = 1;
    const ALL: &'static [Self] = &[Order::Breadth, Order::Depth];

    fn code(self) -> i32 {
        match self {
            Order::Breadth => 0,
            Order::Depth => 1,
        }
    }

    fn token(self) -> &'static str {
        match self {
            Order::Breadth => "breadth",
            Order::Depth => "depth",
        }
    }
}

coded_enum_conversions!(Order);
token_from_str!(Order);

/// Inclusion checking algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Algorithm {
    #[default]
    #[serde(rename = "antichains")]
    Antichains,
    #[serde(rename = "congr")]
    Congruence,
}

impl CodedEnum for Algorithm {
    const NAME: &'static str = "algorithm";
    const MIN: i32 = 0;
    const MAX: i32 = 1;
    const ALL: &'static [Self] = &[Algorithm::Antichains, Algorithm::Congruence];

    fn code(self) -> i32 {
        match self {
            Algorithm::Antichains => 0,
            Algorithm::Congruence => 1,
        }
    }

    fn token(self) -> &'static str {
        match self {
            Algorithm::Antichains => "antichains",
            Algorithm::Congruence => "congr",
        }
    }
}

coded_enum_conversions!(Algorithm);
token_from_str!(Algorithm);

/// Operation (command name) executed by `vata`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "load")]
    Load,
    #[serde(rename = "witness")]
    Witness,
    #[serde(rename = "cmpl")]
    Complement,
    #[serde(rename = "union")]
    Union,
    #[serde(rename = "isect")]
    Intersection,
    #[serde(rename = "sim")]
    Simulation,
    #[serde(rename = "red")]
    Reduction,
    #[serde(rename = "equiv")]
    Equivalence,
    #[serde(rename = "incl")]
    Inclusion,
    #[serde(rename = "help")]
    Help,
}

impl Operation {
    /// Number of operand files the operation takes
    pub fn arity(self) -> usize {
        match self {
            Operation::Help => 0,
            Operation::Load
            | Operation::Witness
            | Operation::Complement
            | Operation::Simulation
            | Operation::Reduction => 1,
            Operation::Union
            | Operation::Intersection
            | Operation::Equivalence
            | Operation::Inclusion => 2,
        }
    }

    /// The single option bundle variant the operation accepts, if any
    pub fn bundle_kind(self) -> Option<BundleKind> {
        match self {
            Operation::Inclusion => Some(BundleKind::Inclusion),
            Operation::Simulation | Operation::Reduction => Some(BundleKind::Direction),
            Operation::Equivalence => Some(BundleKind::Equivalence),
            Operation::Load
            | Operation::Witness
            | Operation::Complement
            | Operation::Union
            | Operation::Intersection
            | Operation::Help => None,
        }
    }
}

impl CodedEnum for Operation {
    const NAME: &'static str = "operation";
    const MIN: i32 = 0;
    const MAX: i32 = 9;
    const ALL: &'static [Self] = &[
        Operation::Load,
        Operation::Witness,
        Operation::Complement,
        Operation::Union,
        Operation::Intersection,
        Operation::Simulation,
        Operation::Reduction,
        Operation::Equivalence,
        Operation::Inclusion,
        Operation::Help,
    ];

    fn code(self) -> i32 {
        match self {
            Operation::Load => 0,
            Operation::Witness => 1,
            Operation::Complement => 2,
            Operation::Union => 3,
            Operation::Intersection => 4,
            Operation::Simulation => 5,
            Operation::Reduction => 6,
            Operation::Equivalence => 7,
            Operation::Inclusion => 8,
            Operation::Help => 9,
        }
    }

    fn token(self) -> &'static str {
        match self {
            Operation::Load => "load",
            Operation::Witness => "witness",
            Operation::Complement => "cmpl",
            Operation::Union => "union",
            Operation::Intersection => "isect",
            Operation::Simulation => "sim",
            Operation::Reduction => "red",
            Operation::Equivalence => "equiv",
            Operation::Inclusion => "incl",
            Operation::Help => "help",
        }
    }
}

coded_enum_conversions!(Operation);
token_from_str!(Operation);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_codes_and_tokens() {
        let cases = [
            (Encoding::Explicit, 0, "expl"),
            (Encoding::BddTopDown, 1, "bdd-td"),
            (Encoding::BddBottomUp, 2, "bdd-bu"),
            (Encoding::ExplicitFa, 3, "expl_fa"),
        ];
        for (encoding, code, token) in cases {
            assert_eq!(encoding.code(), code);
            assert_eq!(encoding.token(), token);
            assert_eq!(Encoding::try_from(code).unwrap(), encoding);
            assert_eq!(token.parse::<Encoding>().unwrap(), encoding);
        }
    }

    #[test]
    fn test_direction_tables_are_distinct() {
        assert_eq!(Direction::Down.token_for(Encoding::ExplicitFa), "fwd");
        assert_eq!(Direction::Up.token_for(Encoding::ExplicitFa), "bwd");
        for encoding in [
            Encoding::Explicit,
            Encoding::BddTopDown,
            Encoding::BddBottomUp,
        ] {
            assert_eq!(Direction::Down.token_for(encoding), "down");
            assert_eq!(Direction::Up.token_for(encoding), "up");
        }
    }

    #[test]
    fn test_direction_from_token_for_respects_encoding() {
        assert_eq!(
            Direction::from_token_for(Encoding::ExplicitFa, "bwd").unwrap(),
            Direction::Up
        );
        assert!(Direction::from_token_for(Encoding::ExplicitFa, "up").is_err());
        assert!(Direction::from_token_for(Encoding::Explicit, "fwd").is_err());
    }

    #[test]
    fn test_direction_from_str_accepts_both_tables() {
        assert_eq!("fwd".parse::<Direction>().unwrap(), Direction::Down);
        assert_eq!("up".parse::<Direction>().unwrap(), Direction::Up);
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn test_operation_tokens() {
        let tokens: Vec<_> = Operation::ALL.iter().map(|op| op.token()).collect();
        assert_eq!(
            tokens.join(" "),
            "load witness cmpl union isect sim red equiv incl help"
        );
    }

    #[test]
    fn test_operation_arity_and_bundles() {
        assert_eq!(Operation::Help.arity(), 0);
        assert_eq!(Operation::Witness.arity(), 1);
        assert_eq!(Operation::Inclusion.arity(), 2);
        assert_eq!(
            Operation::Reduction.bundle_kind(),
            Some(BundleKind::Direction)
        );
        assert_eq!(Operation::Union.bundle_kind(), None);
    }

    #[test]
    fn test_unknown_token_error() {
        let err = "congruence".parse::<Algorithm>().unwrap_err();
        assert_eq!(
            err,
            VataError::UnknownToken {
                enumeration: "algorithm",
                token: "congruence".to_string(),
            }
        );
    }

    #[test]
    fn test_serde_uses_tokens() {
        assert_eq!(
            serde_json::to_string(&Encoding::BddBottomUp).unwrap(),
            "\"bdd-bu\""
        );
        let d: Direction = serde_json::from_str("\"bwd\"").unwrap();
        assert_eq!(d, Direction::Up);
        let op: Operation = serde_json::from_str("\"isect\"").unwrap();
        assert_eq!(op, Operation::Intersection);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Encoding::default(), Encoding::Explicit);
        assert_eq!(Direction::default(), Direction::Down);
        assert_eq!(Order::default(), Order::Depth);
        assert_eq!(Algorithm::default(), Algorithm::Antichains);
    }
}
