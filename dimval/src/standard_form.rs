use std::fmt::{self, Display};

use crate::arithmetic::{superscript, Exponent, Power};
use crate::number::Number;
use crate::unit::Unit;
use crate::value::{Result, Value};

/// A value kept in standard form: mantissa × 10^exponent with a unit, where
/// the mantissa stays in [1, 10) (or is exactly 0 with exponent 0). Every
/// constructor and every mutating result re-normalises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardFormValue {
    mantissa: Number,
    exponent: i32,
    unit: Unit,
}

impl StandardFormValue {
    pub fn new(mantissa: f64, exponent: i32, unit: Unit) -> Self {
        let mut value = StandardFormValue {
            mantissa: Number::from_f64(mantissa),
            exponent,
            unit,
        };
        value.normalise();
        value
    }

    pub fn from_value(value: &Value) -> Self {
        StandardFormValue::new(value.magnitude().to_f64(), 0, value.unit().clone())
    }

    pub fn to_value(&self) -> Value {
        Value::new(self.magnitude(), self.unit.clone())
    }

    pub fn mantissa(&self) -> Number {
        self.mantissa
    }

    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// The represented magnitude, always recomputed from the parts.
    pub fn magnitude(&self) -> Number {
        self.mantissa * Number::from_f64(10.0f64.powi(self.exponent))
    }

    fn normalise(&mut self) {
        let mut mantissa = self.mantissa.to_f64();
        if mantissa == 0.0 {
            self.mantissa = Number::from_f64(0.0);
            self.exponent = 0;
            return;
        }
        while mantissa.abs() >= 10.0 {
            mantissa /= 10.0;
            self.exponent += 1;
        }
        while mantissa.abs() < 1.0 {
            mantissa *= 10.0;
            self.exponent -= 1;
        }
        self.mantissa = Number::from_f64(mantissa);
    }

    pub fn checked_add(&self, rhs: &StandardFormValue) -> Result<StandardFormValue> {
        let sum = self.to_value().checked_add(&rhs.to_value())?;
        Ok(StandardFormValue::from_value(&sum))
    }

    pub fn checked_sub(&self, rhs: &StandardFormValue) -> Result<StandardFormValue> {
        let difference = self.to_value().checked_sub(&rhs.to_value())?;
        Ok(StandardFormValue::from_value(&difference))
    }

    /// Raises mantissa and unit to the power and scales the exponent; the
    /// mantissa may leave [1, 10) in the process, so the result is
    /// re-normalised.
    pub fn powi(self, exp: Exponent) -> StandardFormValue {
        let mut value = StandardFormValue {
            mantissa: self.mantissa.powi(exp),
            exponent: self.exponent * exp,
            unit: self.unit.powi(exp),
        };
        value.normalise();
        value
    }
}

impl std::ops::Mul for StandardFormValue {
    type Output = StandardFormValue;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut value = StandardFormValue {
            mantissa: self.mantissa * rhs.mantissa,
            exponent: self.exponent + rhs.exponent,
            unit: self.unit * rhs.unit,
        };
        value.normalise();
        value
    }
}

impl std::ops::Div for StandardFormValue {
    type Output = StandardFormValue;

    fn div(self, rhs: Self) -> Self::Output {
        let mut value = StandardFormValue {
            mantissa: self.mantissa / rhs.mantissa,
            exponent: self.exponent - rhs.exponent,
            unit: self.unit / rhs.unit,
        };
        value.normalise();
        value
    }
}

impl Display for StandardFormValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mantissa.pretty_print())?;
        if self.exponent != 0 {
            write!(f, " x 10{}", superscript(self.exponent))?;
        }
        let unit = self.unit.to_string();
        if !unit.is_empty() {
            write!(f, " {unit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units;
    use approx::assert_relative_eq;

    fn assert_normalised(value: &StandardFormValue) {
        let mantissa = value.mantissa().to_f64();
        if mantissa == 0.0 {
            assert_eq!(value.exponent(), 0);
        } else {
            assert!((1.0..10.0).contains(&mantissa.abs()), "mantissa {mantissa}");
        }
    }

    #[test]
    fn standard_form_round_trip() {
        let length = Value::new_f64(10.25, units::meter());

        let standard = StandardFormValue::from_value(&length);
        assert_relative_eq!(standard.mantissa().to_f64(), 1.025, epsilon = 1e-12);
        assert_eq!(standard.exponent(), 1);
        assert_eq!(standard.unit(), &units::meter());

        let back = standard.to_value();
        assert_relative_eq!(back.magnitude().to_f64(), 10.25, epsilon = 1e-12);
        assert_eq!(back.unit(), &units::meter());
    }

    #[test]
    fn construction_normalises() {
        let value = StandardFormValue::new(10.23, 2, units::kilometer() / units::hour());
        assert_relative_eq!(value.mantissa().to_f64(), 1.023, epsilon = 1e-12);
        assert_eq!(value.exponent(), 3);

        let small = StandardFormValue::new(0.004, 0, units::meter());
        assert_relative_eq!(small.mantissa().to_f64(), 4.0, epsilon = 1e-12);
        assert_eq!(small.exponent(), -3);

        let negative = StandardFormValue::new(-250.0, 0, units::meter());
        assert_relative_eq!(negative.mantissa().to_f64(), -2.5, epsilon = 1e-12);
        assert_eq!(negative.exponent(), 2);

        let zero = StandardFormValue::new(0.0, 5, units::meter());
        assert_eq!(zero.mantissa().to_f64(), 0.0);
        assert_eq!(zero.exponent(), 0);
    }

    #[test]
    fn operations_keep_the_invariant() {
        let a = StandardFormValue::new(9.5, 3, units::meter());
        let b = StandardFormValue::new(8.5, 1, units::second());

        let product = a.clone() * b.clone();
        assert_normalised(&product);
        assert_relative_eq!(product.magnitude().to_f64(), 9.5e3 * 8.5e1, epsilon = 1e-6);

        let quotient = a.clone() / b;
        assert_normalised(&quotient);

        let sum = a.clone().checked_add(&a).unwrap();
        assert_normalised(&sum);

        let difference = a.clone().checked_sub(&a).unwrap();
        assert_normalised(&difference);
        assert_eq!(difference.magnitude().to_f64(), 0.0);
    }

    #[test]
    fn powers_renormalise() {
        // 9.0^2 = 81 leaves [1, 10) and must be folded back
        let value = StandardFormValue::new(9.0, 1, units::meter());
        let squared = value.powi(2);
        assert_normalised(&squared);
        assert_relative_eq!(squared.mantissa().to_f64(), 8.1, epsilon = 1e-12);
        assert_eq!(squared.exponent(), 3);
        assert_eq!(squared.unit(), &units::meter().powi(2));

        let identity = StandardFormValue::new(5.0, 7, units::meter()).powi(0);
        assert_eq!(identity.mantissa().to_f64(), 1.0);
        assert_eq!(identity.exponent(), 0);
        assert!(identity.unit().is_unitless());
    }

    #[test]
    fn display() {
        let speed = StandardFormValue::new(10.23, 2, units::kilometer() / units::hour());
        assert_eq!(speed.to_string(), "1.023 x 10³ km h⁻¹");

        // exponent zero omits the power-of-ten clause
        let plain = StandardFormValue::new(5.0, 0, units::meter());
        assert_eq!(plain.to_string(), "5 m");

        // no-unit omits the unit clause
        let scalar = StandardFormValue::new(2500.0, 0, Unit::unitless());
        assert_eq!(scalar.to_string(), "2.5 x 10³");

        let one_exponent = StandardFormValue::new(1.025, 1, units::meter());
        assert_eq!(one_exponent.to_string(), "1.025 x 10¹ m");
    }
}
