//! Per-operation option bundles
//!
//! A bundle renders to the comma-separated `key=value` string passed after
//! `-o`. Fields are validated when the bundle is built, so a bundle value is
//! always renderable.

use super::enums::{Algorithm, Direction, Encoding, Order};
use super::{bool_token, CodedEnum};
use crate::errors::Result;

pub(crate) const DIR_KEY: &str = "dir";
pub(crate) const ORDER_KEY: &str = "order";
pub(crate) const ALG_KEY: &str = "alg";
pub(crate) const SIM_KEY: &str = "sim";
pub(crate) const OPTC_KEY: &str = "optC";
pub(crate) const REC_KEY: &str = "rec";
pub(crate) const TIMES_KEY: &str = "timeS";

/// Options of the `incl` operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InclusionOptions {
    direction: Direction,
    algorithm: Algorithm,
    simulation: bool,
    order: Order,
    cache_optimization: bool,
    recursion: bool,
    simulation_time: bool,
}

impl InclusionOptions {
    pub fn new(
        direction: Direction,
        algorithm: Algorithm,
        simulation: bool,
        order: Order,
        cache_optimization: bool,
        recursion: bool,
        simulation_time: bool,
    ) -> Self {
        Self {
            direction,
            algorithm,
            simulation,
            order,
            cache_optimization,
            recursion,
            simulation_time,
        }
    }

    /// Build from raw integer codes, failing on the first code outside its
    /// enumeration's range
    pub fn from_codes(
        direction: i32,
        algorithm: i32,
        simulation: bool,
        order: i32,
        cache_optimization: bool,
        recursion: bool,
        simulation_time: bool,
    ) -> Result<Self> {
        Ok(Self::new(
            Direction::from_code(direction)?,
            Algorithm::from_code(algorithm)?,
            simulation,
            Order::from_code(order)?,
            cache_optimization,
            recursion,
            simulation_time,
        ))
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Whether the corresponding simulation is used
    pub fn simulation(&self) -> bool {
        self.simulation
    }

    pub fn order(&self) -> Order {
        self.order
    }

    /// Whether the optimised cache is used (downward direction)
    pub fn cache_optimization(&self) -> bool {
        self.cache_optimization
    }

    pub fn recursion(&self) -> bool {
        self.recursion
    }

    /// Whether simulation computation time is included in the reported time
    pub fn simulation_time(&self) -> bool {
        self.simulation_time
    }

    /// Render as `dir=..,order=..,alg=..,sim=..,optC=..,rec=..,timeS=..`
    ///
    /// Inclusion always uses the `down`/`up` direction table.
    pub fn serialize(&self) -> String {
        format!(
            "{DIR_KEY}={},{ORDER_KEY}={},{ALG_KEY}={},{SIM_KEY}={},{OPTC_KEY}={},{REC_KEY}={},{TIMES_KEY}={}",
            self.direction.token(),
            self.order.token(),
            self.algorithm.token(),
            bool_token(self.simulation),
            bool_token(self.cache_optimization),
            bool_token(self.recursion),
            bool_token(self.simulation_time),
        )
    }
}

impl Default for InclusionOptions {
    fn default() -> Self {
        Self::new(
            Direction::Down,
            Algorithm::Antichains,
            false,
            Order::Depth,
            false,
            false,
            true,
        )
    }
}

/// Options of the `sim` and `red` operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DirectionOptions {
    direction: Direction,
}

impl DirectionOptions {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    pub fn from_code(direction: i32) -> Result<Self> {
        Ok(Self::new(Direction::from_code(direction)?))
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Render as `dir=<token>`, using `fwd`/`bwd` for `expl_fa`
    pub fn serialize(&self, encoding: Encoding) -> String {
        format!("{DIR_KEY}={}", self.direction.token_for(encoding))
    }
}

/// Options of the `equiv` operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EquivalenceOptions {
    order: Order,
}

impl EquivalenceOptions {
    pub fn new(order: Order) -> Self {
        Self { order }
    }

    pub fn from_code(order: i32) -> Result<Self> {
        Ok(Self::new(Order::from_code(order)?))
    }

    pub fn order(&self) -> Order {
        self.order
    }

    /// Render as `order=<token>`
    pub fn serialize(&self) -> String {
        format!("{ORDER_KEY}={}", self.order.token())
    }
}

/// Which bundle variant an operation takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BundleKind {
    Inclusion,
    Direction,
    Equivalence,
}

impl BundleKind {
    pub fn name(self) -> &'static str {
        match self {
            BundleKind::Inclusion => "inclusion",
            BundleKind::Direction => "direction",
            BundleKind::Equivalence => "equivalence",
        }
    }
}

/// Option bundle attached to a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionBundle {
    Inclusion(InclusionOptions),
    Direction(DirectionOptions),
    Equivalence(EquivalenceOptions),
}

impl OptionBundle {
    pub fn kind(&self) -> BundleKind {
        match self {
            OptionBundle::Inclusion(_) => BundleKind::Inclusion,
            OptionBundle::Direction(_) => BundleKind::Direction,
            OptionBundle::Equivalence(_) => BundleKind::Equivalence,
        }
    }

    /// Render the `-o` argument for a command using `encoding`
    pub fn serialize(&self, encoding: Encoding) -> String {
        match self {
            OptionBundle::Inclusion(o) => o.serialize(),
            OptionBundle::Direction(o) => o.serialize(encoding),
            OptionBundle::Equivalence(o) => o.serialize(),
        }
    }
}

impl From<InclusionOptions> for OptionBundle {
    fn from(options: InclusionOptions) -> Self {
        OptionBundle::Inclusion(options)
    }
}

impl From<DirectionOptions> for OptionBundle {
    fn from(options: DirectionOptions) -> Self {
        OptionBundle::Direction(options)
    }
}

impl From<EquivalenceOptions> for OptionBundle {
    fn from(options: EquivalenceOptions) -> Self {
        OptionBundle::Equivalence(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vata_errors::VataError;

    #[test]
    fn test_inclusion_serialize_all_fields() {
        let options = InclusionOptions::new(
            Direction::Up,
            Algorithm::Congruence,
            true,
            Order::Breadth,
            false,
            true,
            false,
        );
        assert_eq!(
            options.serialize(),
            "dir=up,order=breadth,alg=congr,sim=yes,optC=no,rec=yes,timeS=no"
        );
    }

    #[test]
    fn test_inclusion_defaults() {
        assert_eq!(
            InclusionOptions::default().serialize(),
            "dir=down,order=depth,alg=antichains,sim=no,optC=no,rec=no,timeS=yes"
        );
    }

    #[test]
    fn test_inclusion_ignores_fa_table() {
        let options = InclusionOptions::default();
        let bundle = OptionBundle::from(options);
        let rendered = bundle.serialize(Encoding::ExplicitFa);
        assert!(rendered.starts_with("dir=down,"));
    }

    #[test]
    fn test_inclusion_from_codes_validates_each_field() {
        assert!(InclusionOptions::from_codes(0, 1, false, 0, false, false, true).is_ok());

        let err = InclusionOptions::from_codes(2, 0, false, 0, false, false, true).unwrap_err();
        assert!(matches!(
            err,
            VataError::InvalidCode {
                enumeration: "direction",
                ..
            }
        ));

        let err = InclusionOptions::from_codes(0, 5, false, 0, false, false, true).unwrap_err();
        assert!(matches!(
            err,
            VataError::InvalidCode {
                enumeration: "algorithm",
                ..
            }
        ));

        let err = InclusionOptions::from_codes(0, 0, false, -1, false, false, true).unwrap_err();
        assert!(matches!(
            err,
            VataError::InvalidCode {
                enumeration: "order",
                ..
            }
        ));
    }

    #[test]
    fn test_direction_serialize_by_encoding() {
        let options = DirectionOptions::new(Direction::Down);
        assert_eq!(options.serialize(Encoding::ExplicitFa), "dir=fwd");
        assert_eq!(options.serialize(Encoding::Explicit), "dir=down");
        assert_eq!(
            DirectionOptions::new(Direction::Up).serialize(Encoding::BddTopDown),
            "dir=up"
        );
    }

    #[test]
    fn test_direction_from_code() {
        assert_eq!(
            DirectionOptions::from_code(1).unwrap().direction(),
            Direction::Up
        );
        assert!(DirectionOptions::from_code(2).is_err());
    }

    #[test]
    fn test_equivalence_serialize() {
        assert_eq!(EquivalenceOptions::default().serialize(), "order=depth");
        assert_eq!(
            EquivalenceOptions::from_code(0).unwrap().serialize(),
            "order=breadth"
        );
        assert!(EquivalenceOptions::from_code(3).is_err());
    }

    #[test]
    fn test_bundle_kind() {
        assert_eq!(
            OptionBundle::from(EquivalenceOptions::default()).kind(),
            BundleKind::Equivalence
        );
        assert_eq!(BundleKind::Direction.name(), "direction");
    }
}
