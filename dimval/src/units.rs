//! The predefined unit catalogue.
//!
//! Base units are drawn from the owning [`System`](crate::System) so each
//! (quantity, system) base exists exactly once; every other fundamental unit
//! carries its factor into that base.

use std::f64::consts::PI;

use crate::arithmetic::Power;
use crate::dimension::PhysicalQuantity::*;
use crate::system::MeasurementSystem::{Imperial, Si};
use crate::unit::Unit;

fn base(
    quantity: crate::dimension::PhysicalQuantity,
    system: crate::system::MeasurementSystem,
) -> Unit {
    Unit::from_identifier(
        system
            .descriptor()
            .base_unit(quantity)
            .expect("base unit registered for quantity")
            .clone(),
    )
}

// SI base units

pub fn kilogram() -> Unit {
    base(Mass, Si)
}

pub fn meter() -> Unit {
    base(Length, Si)
}

pub fn second() -> Unit {
    base(Time, Si)
}

pub fn ampere() -> Unit {
    base(ElectricCurrent, Si)
}

pub fn kelvin() -> Unit {
    base(Temperature, Si)
}

pub fn mole() -> Unit {
    base(AmountOfSubstance, Si)
}

pub fn candela() -> Unit {
    base(LuminousIntensity, Si)
}

pub fn radian() -> Unit {
    base(Angle, Si)
}

// SI scaled units

pub fn gram() -> Unit {
    Unit::fundamental("g", Mass, Si, 1e-3)
}

pub fn kilometer() -> Unit {
    Unit::fundamental("km", Length, Si, 1e3)
}

pub fn centimeter() -> Unit {
    Unit::fundamental("cm", Length, Si, 1e-2)
}

pub fn millimeter() -> Unit {
    Unit::fundamental("mm", Length, Si, 1e-3)
}

pub fn minute() -> Unit {
    Unit::fundamental("min", Time, Si, 60.0)
}

pub fn hour() -> Unit {
    Unit::fundamental("h", Time, Si, 3600.0)
}

pub fn degree() -> Unit {
    Unit::fundamental("°", Angle, Si, PI / 180.0)
}

// Imperial units

pub fn pound() -> Unit {
    base(Mass, Imperial)
}

pub fn foot() -> Unit {
    base(Length, Imperial)
}

pub fn rankine() -> Unit {
    base(Temperature, Imperial)
}

pub fn inch() -> Unit {
    Unit::fundamental("in", Length, Imperial, 1.0 / 12.0)
}

pub fn yard() -> Unit {
    Unit::fundamental("yd", Length, Imperial, 3.0)
}

pub fn mile() -> Unit {
    Unit::fundamental("mi", Length, Imperial, 5280.0)
}

pub fn ounce() -> Unit {
    Unit::fundamental("oz", Mass, Imperial, 1.0 / 16.0)
}

// Named compound units

pub fn newton() -> Unit {
    Unit::named("N", kilogram() * meter() / second().powi(2))
}

pub fn pascal() -> Unit {
    Unit::named("Pa", newton() * meter().powi(-2))
}

pub fn joule() -> Unit {
    Unit::named("J", newton() * meter())
}

pub fn watt() -> Unit {
    Unit::named("W", joule() / second())
}

pub fn hertz() -> Unit {
    Unit::named("Hz", second().powi(-1))
}
