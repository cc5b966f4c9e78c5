use std::fmt::{self, Display};

use log::debug;
use thiserror::Error;

use crate::arithmetic::{Exponent, Power};
use crate::number::Number;
use crate::system::{self, SystemError};
use crate::unit::Unit;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValueError {
    #[error("dimension mismatch: unit '{0}' is not compatible with unit '{1}'")]
    DimensionMismatch(Unit, Unit),

    #[error("{0}")]
    ConversionUndefined(#[from] SystemError),
}

pub type Result<T> = std::result::Result<T, ValueError>;

/// A magnitude paired with a unit. Operations return new values; addition
/// and subtraction require dimensionally equal units, multiplication and
/// division always succeed and simplify the combined unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    magnitude: Number,
    unit: Unit,
}

impl Value {
    pub fn new(magnitude: Number, unit: Unit) -> Self {
        Value { magnitude, unit }
    }

    pub fn new_f64(magnitude: f64, unit: Unit) -> Self {
        Value::new(Number::from_f64(magnitude), unit)
    }

    pub fn from_magnitude(magnitude: f64) -> Self {
        Value::new_f64(magnitude, Unit::unitless())
    }

    pub fn from_unit(unit: Unit) -> Self {
        Value::new_f64(1.0, unit)
    }

    pub fn magnitude(&self) -> Number {
        self.magnitude
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude.to_f64() == 0.0
    }

    pub fn abs(self) -> Self {
        Value::new(self.magnitude.abs(), self.unit)
    }

    /// Addition requires dimensionally equal units; the left operand's unit
    /// is retained verbatim.
    pub fn checked_add(&self, rhs: &Value) -> Result<Value> {
        if !self.unit.dims_equal(&rhs.unit) {
            return Err(ValueError::DimensionMismatch(
                self.unit.clone(),
                rhs.unit.clone(),
            ));
        }
        Ok(Value::new(
            self.magnitude + rhs.magnitude,
            self.unit.clone(),
        ))
    }

    pub fn checked_sub(&self, rhs: &Value) -> Result<Value> {
        if !self.unit.dims_equal(&rhs.unit) {
            return Err(ValueError::DimensionMismatch(
                self.unit.clone(),
                rhs.unit.clone(),
            ));
        }
        Ok(Value::new(
            self.magnitude - rhs.magnitude,
            self.unit.clone(),
        ))
    }

    /// Raises magnitude and unit to an integer power. A negative power is
    /// the reciprocal; power zero yields magnitude one with no unit.
    pub fn powi(self, exp: Exponent) -> Value {
        Value::new(self.magnitude.powi(exp), self.unit.powi(exp))
    }

    /// Converts into an equivalent unit, possibly across measurement
    /// systems: the magnitude is routed through each source pair's system
    /// base, cross-system factors are applied per quantity where the
    /// systems differ, and the target pairs' base factors are divided out.
    pub fn convert_to(&self, target: &Unit) -> Result<Value> {
        if self.unit == *target {
            return Ok(Value::new(self.magnitude, target.clone()));
        }

        let source = self.unit.expanded();
        let dest = target.expanded();
        if source.quantity_signature() != dest.quantity_signature() {
            return Err(ValueError::DimensionMismatch(
                self.unit.clone(),
                target.clone(),
            ));
        }

        // Zero is zero in every compatible unit.
        if self.is_zero() {
            return Ok(Value::new(self.magnitude, target.clone()));
        }

        debug!("converting from '{}' to '{}'", self.unit, target);

        let mut magnitude = self.magnitude;
        for pair in source.iter() {
            magnitude = magnitude * pair.base_factor();
        }

        for pair in dest.iter() {
            let (quantity, to_system, _) = pair
                .unit
                .as_fundamental()
                .expect("expansion contains only fundamental units");
            let from_system = source
                .iter()
                .find_map(|p| {
                    p.unit
                        .as_fundamental()
                        .filter(|&(q, _, _)| q == quantity)
                        .map(|(_, s, _)| s)
                })
                .unwrap_or(to_system);
            if from_system != to_system {
                let factor = system::conversion_factor(quantity, from_system, to_system)?;
                magnitude = magnitude * factor.powi(pair.power);
            }
        }

        for pair in dest.iter() {
            magnitude = magnitude / pair.base_factor();
        }

        Ok(Value::new(magnitude, target.clone()))
    }

    /// Rounds the magnitude half away from zero to `digits` decimal places;
    /// the unit is unchanged.
    pub fn round(&self, digits: i32) -> Value {
        Value::new(self.magnitude.round_digits(digits), self.unit.clone())
    }
}

impl std::ops::Add for &Value {
    type Output = Result<Value>;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl std::ops::Sub for &Value {
    type Output = Result<Value>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs)
    }
}

impl std::ops::Mul for Value {
    type Output = Value;

    fn mul(self, rhs: Self) -> Self::Output {
        Value::new(self.magnitude * rhs.magnitude, self.unit * rhs.unit)
    }
}

impl std::ops::Div for Value {
    type Output = Value;

    fn div(self, rhs: Self) -> Self::Output {
        Value::new(self.magnitude / rhs.magnitude, self.unit / rhs.unit)
    }
}

impl std::ops::Neg for Value {
    type Output = Value;

    fn neg(self) -> Self::Output {
        Value::new(-self.magnitude, self.unit)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.unit.to_string();
        if unit.is_empty() {
            write!(f, "{}", self.magnitude.pretty_print())
        } else {
            write!(f, "{} {}", self.magnitude.pretty_print(), unit)
        }
    }
}
