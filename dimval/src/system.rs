use std::collections::HashMap;
use std::fmt::{self, Display};

use log::debug;
use once_cell::sync::Lazy;
use thiserror::Error;

use crate::dimension::PhysicalQuantity;
use crate::number::Number;
use crate::unit::{ConversionFactor, UnitIdentifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MeasurementSystem {
    Si,
    Imperial,
    None,
}

impl MeasurementSystem {
    /// The read-only descriptor owning this system's base units and
    /// conversion table. Built on first access, shared afterwards.
    pub fn descriptor(self) -> &'static System {
        match self {
            MeasurementSystem::Si => &SI,
            MeasurementSystem::Imperial => &IMPERIAL,
            MeasurementSystem::None => &NONE,
        }
    }
}

impl Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MeasurementSystem::Si => "SI",
            MeasurementSystem::Imperial => "imperial",
            MeasurementSystem::None => "none",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Error, Debug, PartialEq, Eq)]
pub enum SystemError {
    #[error("no conversion registered for {quantity} from {from} to {to}")]
    ConversionUndefined {
        quantity: PhysicalQuantity,
        from: MeasurementSystem,
        to: MeasurementSystem,
    },
}

/// A measurement system: one base fundamental unit per physical quantity,
/// plus the factors converting magnitudes in this system's base units into
/// other systems' base units for overlapping quantities.
#[derive(Debug)]
pub struct System {
    name: MeasurementSystem,
    base_units: HashMap<PhysicalQuantity, UnitIdentifier>,
    conversions: HashMap<(PhysicalQuantity, MeasurementSystem), ConversionFactor>,
}

impl System {
    fn new(
        name: MeasurementSystem,
        bases: &[(PhysicalQuantity, &str)],
        cross_conversions: &[(PhysicalQuantity, MeasurementSystem, f64)],
    ) -> System {
        let mut base_units = HashMap::new();
        for &(quantity, symbol) in bases {
            base_units.insert(
                quantity,
                UnitIdentifier::fundamental(symbol, quantity, name, 1.0),
            );
        }

        let mut conversions = HashMap::new();
        for quantity in PhysicalQuantity::ALL {
            conversions.insert((quantity, name), Number::from_f64(1.0));
        }
        for &(quantity, to, factor) in cross_conversions {
            conversions.insert((quantity, to), Number::from_f64(factor));
        }

        debug!(
            "registered measurement system {name}: {} base unit(s), {} cross-system conversion(s)",
            base_units.len(),
            cross_conversions.len()
        );

        System {
            name,
            base_units,
            conversions,
        }
    }

    pub fn name(&self) -> MeasurementSystem {
        self.name
    }

    pub fn base_unit(&self, quantity: PhysicalQuantity) -> Option<&UnitIdentifier> {
        self.base_units.get(&quantity)
    }

    /// The factor taking a magnitude in this system's base unit for
    /// `quantity` into `to`'s base unit. Missing entries are a hard error,
    /// never approximated.
    pub fn conversion_to(
        &self,
        quantity: PhysicalQuantity,
        to: MeasurementSystem,
    ) -> Result<ConversionFactor, SystemError> {
        self.conversions
            .get(&(quantity, to))
            .copied()
            .ok_or(SystemError::ConversionUndefined {
                quantity,
                from: self.name,
                to,
            })
    }
}

pub fn conversion_factor(
    quantity: PhysicalQuantity,
    from: MeasurementSystem,
    to: MeasurementSystem,
) -> Result<ConversionFactor, SystemError> {
    from.descriptor().conversion_to(quantity, to)
}

static SI: Lazy<System> = Lazy::new(|| {
    use PhysicalQuantity::*;
    System::new(
        MeasurementSystem::Si,
        &[
            (Mass, "kg"),
            (Length, "m"),
            (Time, "s"),
            (ElectricCurrent, "A"),
            (Temperature, "K"),
            (AmountOfSubstance, "mol"),
            (LuminousIntensity, "cd"),
            (Angle, "rad"),
        ],
        &[
            (Length, MeasurementSystem::Imperial, 1.0 / 0.3048),
            (Mass, MeasurementSystem::Imperial, 1.0 / 0.45359237),
            (Temperature, MeasurementSystem::Imperial, 9.0 / 5.0),
        ],
    )
});

static IMPERIAL: Lazy<System> = Lazy::new(|| {
    use PhysicalQuantity::*;
    System::new(
        MeasurementSystem::Imperial,
        &[(Mass, "lb"), (Length, "ft"), (Temperature, "°R")],
        &[
            (Length, MeasurementSystem::Si, 0.3048),
            (Mass, MeasurementSystem::Si, 0.45359237),
            (Temperature, MeasurementSystem::Si, 5.0 / 9.0),
        ],
    )
});

static NONE: Lazy<System> = Lazy::new(|| System::new(MeasurementSystem::None, &[], &[]));
