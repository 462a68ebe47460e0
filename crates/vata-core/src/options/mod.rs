//! Option enumerations and per-operation option bundles
//!
//! Every enumeration is a closed set of integer codes in `[MIN, MAX]`, each
//! with exactly one canonical token understood by `vata`.

pub mod bundles;
pub mod enums;
pub mod parse;

pub use bundles::{
    BundleKind, DirectionOptions, EquivalenceOptions, InclusionOptions, OptionBundle,
};
pub use enums::{Algorithm, Direction, Encoding, Operation, Order};

use crate::errors::Result;
use vata_errors::VataError;

/// Closed enumeration with a contiguous integer code range and a total
/// code-to-token mapping.
pub trait CodedEnum: Sized + Copy + 'static {
    /// Name used in error messages
    const NAME: &'static str;
    /// Smallest legal code
    const MIN: i32;
    /// Largest legal code
    const MAX: i32;
    /// Every variant, in code order
    const ALL: &'static [Self];

    /// Integer code of this variant
    fn code(self) -> i32;

    /// Canonical token of this variant
    fn token(self) -> &'static str;

    /// Decode an integer code, failing when it lies outside `[MIN, MAX]`
    fn from_code(code: i32) -> Result<Self> {
        if !is_valid_code::<Self>(code) {
            return Err(VataError::InvalidCode {
                enumeration: Self::NAME,
                code,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.code() == code)
            .ok_or_else(|| VataError::Internal {
                message: format!("{} code {} has no variant", Self::NAME, code),
            })
    }

    /// Decode a canonical token
    fn from_token(token: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.token() == token)
            .ok_or_else(|| VataError::UnknownToken {
                enumeration: Self::NAME,
                token: token.to_string(),
            })
    }
}

/// True iff `E::MIN <= code <= E::MAX`
pub fn is_valid_code<E: CodedEnum>(code: i32) -> bool {
    (E::MIN..=E::MAX).contains(&code)
}

pub(crate) const YES: &str = "yes";
pub(crate) const NO: &str = "no";

/// `yes`/`no` rendering of a boolean option
pub fn bool_token(value: bool) -> &'static str {
    if value {
        YES
    } else {
        NO
    }
}
