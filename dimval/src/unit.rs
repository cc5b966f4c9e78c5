use std::fmt::{self, Display};

use compact_str::CompactString;
use itertools::Itertools;
use thiserror::Error;

use crate::arithmetic::{pretty_exponent, Exponent, Power};
use crate::dimension::PhysicalQuantity;
use crate::number::Number;
use crate::product::{Canonicalize, Product};
use crate::system::MeasurementSystem;

pub type ConversionFactor = Number;

#[derive(Clone, Error, Debug, PartialEq, Eq)]
pub enum UnitError {
    #[error("cannot zip {units} unit(s) with {powers} power(s)")]
    MismatchedParts { units: usize, powers: usize },
}

/// A unit is either fundamental (indivisible, tied to one quantity and one
/// measurement system) or a named alias for a compound expansion. Aliases
/// are treated as atomic terms until explicitly expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitKind {
    Fundamental {
        quantity: PhysicalQuantity,
        system: MeasurementSystem,
        /// Multiplier taking a magnitude in this unit into the system's base
        /// unit for the quantity.
        to_base: ConversionFactor,
    },
    Named(Unit),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitIdentifier {
    symbol: CompactString,
    kind: UnitKind,
}

impl UnitIdentifier {
    pub fn fundamental(
        symbol: &str,
        quantity: PhysicalQuantity,
        system: MeasurementSystem,
        to_base: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            kind: UnitKind::Fundamental {
                quantity,
                system,
                to_base: Number::from_f64(to_base),
            },
        }
    }

    pub fn named(symbol: &str, expansion: Unit) -> Self {
        Self {
            symbol: symbol.into(),
            kind: UnitKind::Named(expansion),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn kind(&self) -> &UnitKind {
        &self.kind
    }

    pub fn is_fundamental(&self) -> bool {
        matches!(self.kind, UnitKind::Fundamental { .. })
    }

    pub fn as_fundamental(
        &self,
    ) -> Option<(PhysicalQuantity, MeasurementSystem, ConversionFactor)> {
        match self.kind {
            UnitKind::Fundamental {
                quantity,
                system,
                to_base,
            } => Some((quantity, system, to_base)),
            UnitKind::Named(_) => None,
        }
    }

    /// Takes a magnitude expressed in this unit into the owning system's
    /// base unit. Inverse of [`UnitIdentifier::from_system_base`]. Named
    /// aliases expand with factor one and pass magnitudes through.
    pub fn to_system_base(&self, magnitude: Number) -> Number {
        match self.kind {
            UnitKind::Fundamental { to_base, .. } => magnitude * to_base,
            UnitKind::Named(_) => magnitude,
        }
    }

    pub fn from_system_base(&self, magnitude: Number) -> Number {
        match self.kind {
            UnitKind::Fundamental { to_base, .. } => magnitude / to_base,
            UnitKind::Named(_) => magnitude,
        }
    }

    fn sort_key(&self) -> (PhysicalQuantity, MeasurementSystem, &CompactString) {
        match &self.kind {
            UnitKind::Fundamental {
                quantity, system, ..
            } => (*quantity, *system, &self.symbol),
            UnitKind::Named(_) => (PhysicalQuantity::None, MeasurementSystem::None, &self.symbol),
        }
    }
}

impl PartialOrd for UnitIdentifier {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UnitIdentifier {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

/// A unit raised to an integer power, the atomic term of a compound unit.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitPowerPair {
    pub unit: UnitIdentifier,
    pub power: Exponent,
}

impl UnitPowerPair {
    /// The factor taking a magnitude in this term into the term's system
    /// base representation, with the power applied.
    pub fn base_factor(&self) -> ConversionFactor {
        match self.unit.kind {
            UnitKind::Fundamental { to_base, .. } => to_base.powi(self.power),
            UnitKind::Named(_) => Number::from_f64(1.0),
        }
    }
}

impl Canonicalize for UnitPowerPair {
    type MergeKey = UnitIdentifier;

    fn merge_key(&self) -> Self::MergeKey {
        self.unit.clone()
    }

    fn merge(self, other: Self) -> Self {
        UnitPowerPair {
            unit: self.unit,
            power: self.power + other.power,
        }
    }

    fn is_trivial(&self) -> bool {
        self.power == 0
    }
}

impl Power for UnitPowerPair {
    fn powi(self, e: Exponent) -> Self {
        UnitPowerPair {
            unit: self.unit,
            power: self.power * e,
        }
    }
}

impl Display for UnitPowerPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.unit.symbol(), pretty_exponent(self.power))
    }
}

/// A compound unit: an auto-simplifying product of unit-power pairs. The
/// empty product is the canonical no-unit; a single pair with power one is
/// the atomic form of that unit.
pub type Unit = Product<UnitPowerPair, true>;

impl Unit {
    pub fn unitless() -> Self {
        Self::unity()
    }

    pub fn is_unitless(&self) -> bool {
        self == &Self::unitless()
    }

    pub fn from_identifier(unit: UnitIdentifier) -> Self {
        Unit::from_factor(UnitPowerPair { unit, power: 1 })
    }

    pub fn fundamental(
        symbol: &str,
        quantity: PhysicalQuantity,
        system: MeasurementSystem,
        to_base: f64,
    ) -> Self {
        Unit::from_identifier(UnitIdentifier::fundamental(symbol, quantity, system, to_base))
    }

    pub fn named(symbol: &str, expansion: Unit) -> Self {
        Unit::from_identifier(UnitIdentifier::named(symbol, expansion))
    }

    /// Zips units with powers into their product. The slices must have the
    /// same length; the mismatch is reported here, at construction.
    pub fn try_from_parts(units: &[Unit], powers: &[Exponent]) -> Result<Unit, UnitError> {
        if units.len() != powers.len() {
            return Err(UnitError::MismatchedParts {
                units: units.len(),
                powers: powers.len(),
            });
        }
        Ok(units
            .iter()
            .zip(powers)
            .map(|(unit, &power)| unit.clone().powi(power))
            .product())
    }

    /// Recursively expands named aliases into fundamental pairs, multiplying
    /// nested powers, and canonicalizes the result. Fundamental pairs expand
    /// to themselves.
    pub fn expanded(&self) -> Unit {
        self.iter()
            .map(|pair| match pair.unit.kind() {
                UnitKind::Fundamental { .. } => Unit::from_factor(pair.clone()),
                UnitKind::Named(expansion) => expansion.expanded().powi(pair.power),
            })
            .product()
    }

    /// Dimensional equality: the fully expanded fundamental-pair multisets
    /// match exactly. Insensitive to term order and to named aliases, so
    /// "N" and "kg m s⁻²" compare equal, while "m" and "ft" do not.
    pub fn dims_equal(&self, other: &Unit) -> bool {
        self.expanded() == other.expanded()
    }

    /// The (quantity, power) multiset of the expansion, the system-blind
    /// shape conversion compatibility is decided on.
    pub fn quantity_signature(&self) -> Vec<(PhysicalQuantity, Exponent)> {
        self.expanded()
            .iter()
            .map(|pair| {
                let (quantity, _, _) = pair
                    .unit
                    .as_fundamental()
                    .expect("expansion contains only fundamental units");
                (quantity, pair.power)
            })
            .sorted()
            .chunk_by(|&(quantity, _)| quantity)
            .into_iter()
            .map(|(quantity, group)| (quantity, group.map(|(_, power)| power).sum()))
            .filter(|&(_, power)| power != 0)
            .collect()
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iter().join(" "))
    }
}
