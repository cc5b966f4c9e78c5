use approx::assert_relative_eq;
use dimval::{units, Power, StandardFormValue, Unit, Value, ValueError};

#[test]
fn standard_form_of_a_length() {
    let length = Value::new_f64(10.25, units::meter());

    let standard = StandardFormValue::from_value(&length);
    assert_relative_eq!(standard.mantissa().to_f64(), 1.025, epsilon = 1e-12);
    assert_eq!(standard.exponent(), 1);

    let back = standard.to_value();
    assert_relative_eq!(back.magnitude().to_f64(), 10.25, epsilon = 1e-12);
    assert_eq!(back.unit(), &units::meter());
}

#[test]
fn density_times_volume_reduces_to_mass() {
    let density = Value::new_f64(1.0 / 8.0, units::kilogram() / units::meter().powi(3));
    let volume = Value::new_f64(8.0, units::meter().powi(3));

    let mass = density * volume;
    assert_relative_eq!(mass.magnitude().to_f64(), 1.0, epsilon = 1e-12);
    assert!(mass.unit().dims_equal(&units::kilogram()));
}

#[test]
fn like_units_cancel_on_division() {
    let ratio = Value::new_f64(2.0, units::meter()) / Value::new_f64(1.0, units::meter());
    assert_eq!(ratio.magnitude().to_f64(), 2.0);
    assert!(ratio.unit().is_unitless());
}

#[test]
fn acceleration_renders_with_superscripts() {
    let speed = Value::new_f64(2.0, units::meter() / units::second());
    let duration = Value::new_f64(1.0, units::second());
    let acceleration = speed.clone() / duration.clone();

    assert_eq!(
        format!("{speed} / {duration} = {acceleration}"),
        "2 m s⁻¹ / 1 s = 2 m s⁻²"
    );
}

#[test]
fn standard_form_rendering() {
    let speed = StandardFormValue::new(10.23, 2, units::kilometer() / units::hour());
    assert_eq!(speed.to_string(), "1.023 x 10³ km h⁻¹");
}

#[test]
fn adding_incompatible_units_fails() {
    let length = Value::new_f64(1.0, units::meter());
    let duration = Value::new_f64(1.0, units::second());

    let error = length.checked_add(&duration).unwrap_err();
    assert_eq!(
        error,
        ValueError::DimensionMismatch(units::meter(), units::second())
    );
    let message = error.to_string();
    assert!(message.contains("'m'"));
    assert!(message.contains("'s'"));
}

#[test]
fn named_units_are_dimensionally_transparent() {
    let explicit = units::kilogram() * units::meter() / units::second().powi(2);
    assert!(units::newton().dims_equal(&explicit));

    let force = Value::new_f64(1.0, units::newton());
    let other = Value::new_f64(0.5, explicit);
    let total = force.checked_add(&other).unwrap();
    assert_relative_eq!(total.magnitude().to_f64(), 1.5, epsilon = 1e-12);
    assert_eq!(total.unit(), &units::newton());
}

#[test]
fn cross_system_conversion_round_trip() {
    let length = Value::new_f64(5.0, units::mile());

    let in_km = length.convert_to(&units::kilometer()).unwrap();
    assert_relative_eq!(in_km.magnitude().to_f64(), 8.04672, epsilon = 1e-9);

    let back = in_km.convert_to(&units::mile()).unwrap();
    assert_relative_eq!(back.magnitude().to_f64(), 5.0, epsilon = 1e-9);
}

#[test]
fn compound_cross_system_conversion() {
    // 60 mi/h in m/s
    let speed = Value::new_f64(60.0, units::mile() / units::hour());
    let in_si = speed
        .convert_to(&(units::meter() / units::second()))
        .unwrap();
    assert_relative_eq!(in_si.magnitude().to_f64(), 26.8224, epsilon = 1e-9);
}

#[test]
fn simplification_is_stable_under_repetition() {
    let unit = units::newton() * units::meter() / units::second()
        * Unit::unitless()
        * units::meter().powi(0);
    assert_eq!(unit.canonicalized(), unit.canonicalized().canonicalized());
}
