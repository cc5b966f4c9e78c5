use std::fmt::{self, Display};

/// The physical quantity a fundamental unit measures.
///
/// The enum order is the canonical term order of compound units (mass before
/// length before time, the conventional way derived SI units are written).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PhysicalQuantity {
    Mass,
    Length,
    Time,
    ElectricCurrent,
    Temperature,
    AmountOfSubstance,
    LuminousIntensity,
    Angle,
    None,
}

impl PhysicalQuantity {
    pub const ALL: [PhysicalQuantity; 9] = [
        PhysicalQuantity::Mass,
        PhysicalQuantity::Length,
        PhysicalQuantity::Time,
        PhysicalQuantity::ElectricCurrent,
        PhysicalQuantity::Temperature,
        PhysicalQuantity::AmountOfSubstance,
        PhysicalQuantity::LuminousIntensity,
        PhysicalQuantity::Angle,
        PhysicalQuantity::None,
    ];
}

impl Display for PhysicalQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PhysicalQuantity::Mass => "mass",
            PhysicalQuantity::Length => "length",
            PhysicalQuantity::Time => "time",
            PhysicalQuantity::ElectricCurrent => "electric current",
            PhysicalQuantity::Temperature => "temperature",
            PhysicalQuantity::AmountOfSubstance => "amount of substance",
            PhysicalQuantity::LuminousIntensity => "luminous intensity",
            PhysicalQuantity::Angle => "angle",
            PhysicalQuantity::None => "none",
        };
        f.write_str(name)
    }
}
