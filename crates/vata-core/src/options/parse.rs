//! Parser for the `-o` option-string grammar
//!
//! `key=value` items separated by commas. Keys may come in any order and
//! missing keys keep the bundle default. Empty items, items without a value,
//! duplicate keys and keys the bundle does not know are rejected, matching
//! how `vata` itself reads `-o`.

use super::bundles::{
    BundleKind, DirectionOptions, EquivalenceOptions, InclusionOptions, OptionBundle, ALG_KEY,
    DIR_KEY, OPTC_KEY, ORDER_KEY, REC_KEY, SIM_KEY, TIMES_KEY,
};
use super::enums::{Algorithm, Direction, Encoding, Operation, Order};
use super::{CodedEnum, NO, YES};
use crate::errors::{malformed, Result};
use std::collections::HashSet;
use vata_errors::VataError;

fn split_items(text: &str) -> Result<Vec<(&str, &str)>> {
    if text.is_empty() {
        return Err(malformed(text, "empty option string"));
    }

    let mut seen = HashSet::new();
    let mut items = Vec::new();
    for item in text.split(',') {
        if item.is_empty() {
            return Err(malformed(text, "empty option item"));
        }
        let (key, value) = item
            .split_once('=')
            .ok_or_else(|| malformed(text, format!("option '{}' has no value", item)))?;
        if key.is_empty() || value.is_empty() {
            return Err(malformed(text, format!("malformed option '{}'", item)));
        }
        if !seen.insert(key) {
            return Err(malformed(text, format!("option '{}' specified more than once", key)));
        }
        items.push((key, value));
    }
    Ok(items)
}

fn parse_bool(text: &str, key: &str, value: &str) -> Result<bool> {
    match value {
        YES => Ok(true),
        NO => Ok(false),
        _ => Err(malformed(
            text,
            format!("option '{}' expects yes or no, got '{}'", key, value),
        )),
    }
}

fn parse_token<E: CodedEnum>(text: &str, value: &str) -> Result<E> {
    E::from_token(value).map_err(|e| malformed(text, e.to_string()))
}

fn unknown_key(text: &str, key: &str, kind: BundleKind) -> VataError {
    malformed(
        text,
        format!("unknown option '{}' for {} options", key, kind.name()),
    )
}

impl InclusionOptions {
    /// Parse an `incl` option string; direction uses the `down`/`up` table
    pub fn parse(text: &str) -> Result<Self> {
        let defaults = Self::default();
        let mut direction = defaults.direction();
        let mut algorithm = defaults.algorithm();
        let mut simulation = defaults.simulation();
        let mut order = defaults.order();
        let mut cache_optimization = defaults.cache_optimization();
        let mut recursion = defaults.recursion();
        let mut simulation_time = defaults.simulation_time();

        for (key, value) in split_items(text)? {
            match key {
                DIR_KEY => direction = parse_token::<Direction>(text, value)?,
                ORDER_KEY => order = parse_token::<Order>(text, value)?,
                ALG_KEY => algorithm = parse_token::<Algorithm>(text, value)?,
                SIM_KEY => simulation = parse_bool(text, key, value)?,
                OPTC_KEY => cache_optimization = parse_bool(text, key, value)?,
                REC_KEY => recursion = parse_bool(text, key, value)?,
                TIMES_KEY => simulation_time = parse_bool(text, key, value)?,
                _ => return Err(unknown_key(text, key, BundleKind::Inclusion)),
            }
        }

        Ok(Self::new(
            direction,
            algorithm,
            simulation,
            order,
            cache_optimization,
            recursion,
            simulation_time,
        ))
    }
}

impl DirectionOptions {
    /// Parse a `sim`/`red` option string with the direction table of `encoding`
    pub fn parse(encoding: Encoding, text: &str) -> Result<Self> {
        let mut direction = Direction::default();
        for (key, value) in split_items(text)? {
            match key {
                DIR_KEY => {
                    direction = Direction::from_token_for(encoding, value)
                        .map_err(|e| malformed(text, e.to_string()))?
                }
                _ => return Err(unknown_key(text, key, BundleKind::Direction)),
            }
        }
        Ok(Self::new(direction))
    }
}

impl EquivalenceOptions {
    /// Parse an `equiv` option string
    pub fn parse(text: &str) -> Result<Self> {
        let mut order = Order::default();
        for (key, value) in split_items(text)? {
            match key {
                ORDER_KEY => order = parse_token::<Order>(text, value)?,
                _ => return Err(unknown_key(text, key, BundleKind::Equivalence)),
            }
        }
        Ok(Self::new(order))
    }
}

impl OptionBundle {
    /// Parse `text` into the bundle variant `operation` takes
    pub fn parse(operation: Operation, encoding: Encoding, text: &str) -> Result<Self> {
        match operation.bundle_kind() {
            Some(BundleKind::Inclusion) => InclusionOptions::parse(text).map(Self::from),
            Some(BundleKind::Direction) => DirectionOptions::parse(encoding, text).map(Self::from),
            Some(BundleKind::Equivalence) => EquivalenceOptions::parse(text).map(Self::from),
            None => Err(VataError::OptionsMismatch {
                operation: operation.token().to_string(),
                expected: "no",
                found: "parsed",
            }),
        }
    }
}
