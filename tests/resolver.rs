//! 입력 모드 → 질의 해석 회귀 테스트.
use flight_condition_toolbox::mode::{AirspeedMode, AltitudeMode, LengthMode, ModeGroup};
use flight_condition_toolbox::quantity::{QuantityKind, UnitTaggedValue};
use flight_condition_toolbox::query::{
    resolve, resolve_labels, AirspeedInput, AltitudeInput, LengthInput, QueryKey, QueryValue,
    ResolveError,
};

fn tagged(kind: QuantityKind, magnitude: f64, unit: &str) -> UnitTaggedValue {
    UnitTaggedValue::new(kind, magnitude, unit).unwrap()
}

#[test]
fn geometric_altitude_mach_length() {
    let query = resolve(
        AltitudeMode::GeometricAltitude,
        10.0,
        "kft",
        AirspeedMode::MachNumber,
        0.8,
        "knots",
        LengthMode::Length,
        1.0,
        "ft",
    )
    .expect("resolve");

    assert_eq!(
        query.altitude,
        AltitudeInput::Geometric(tagged(QuantityKind::Length, 10.0, "kft"))
    );
    assert_eq!(query.airspeed, AirspeedInput::Mach(0.8));
    assert_eq!(
        query.length,
        LengthInput::Length(tagged(QuantityKind::Length, 1.0, "ft"))
    );

    let keys: Vec<&str> = query.entries().iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["h", "M", "L"]);
    assert_eq!(query.get(QueryKey::Mach), Some(QueryValue::Dimensionless(0.8)));
    assert_eq!(query.to_string(), "h=10 kft, M=0.8, L=1 ft");
}

#[test]
fn pressure_altitude_true_airspeed_reynolds() {
    let query = resolve(
        AltitudeMode::PressureAltitude,
        500.0,
        "lbf/ft^2",
        AirspeedMode::TrueAirspeed,
        300.0,
        "knots",
        LengthMode::ReynoldsNumber,
        1e6,
        "",
    )
    .expect("resolve");

    let entries = query.entries();
    assert_eq!(entries[0].0, QueryKey::Pressure);
    assert_eq!(entries[0].1.unit(), Some("lbf/ft^2"));
    assert_eq!(entries[0].1.magnitude(), 500.0);
    assert_eq!(entries[1].0, QueryKey::TrueAirspeed);
    assert_eq!(entries[1].1.unit(), Some("knots"));
    assert_eq!(entries[1].1.magnitude(), 300.0);
    assert_eq!(entries[2], (QueryKey::Reynolds, QueryValue::Dimensionless(1e6)));
    assert_eq!(query.get(QueryKey::GeometricAltitude), None);
}

#[test]
fn every_mode_combination_yields_one_key_per_group() {
    for alt in AltitudeMode::ALL {
        for speed in AirspeedMode::ALL {
            for len in LengthMode::ALL {
                let alt_unit = alt.units()[1];
                let query = resolve(alt, 5.0, alt_unit, speed, 150.0, "ft/s", len, 2.0, "m")
                    .unwrap_or_else(|e| panic!("{alt:?} {speed:?} {len:?}: {e}"));
                let entries = query.entries();
                assert_eq!(entries.len(), 3);
                assert_eq!(entries[0].0, alt.key());
                assert_eq!(entries[1].0, speed.key());
                assert_eq!(entries[2].0, len.key());
            }
        }
    }
}

#[test]
fn geopotential_altitude_uses_h_upper() {
    let query = resolve(
        AltitudeMode::GeopotentialAltitude,
        3.0,
        "km",
        AirspeedMode::EquivalentAirspeed,
        120.0,
        "m/s",
        LengthMode::Length,
        250.0,
        "mm",
    )
    .unwrap();
    let keys: Vec<QueryKey> = query.entries().iter().map(|(k, _)| *k).collect();
    assert_eq!(
        keys,
        [
            QueryKey::GeopotentialAltitude,
            QueryKey::EquivalentAirspeed,
            QueryKey::Length
        ]
    );
    assert_eq!(keys[0].as_str(), "H");
}

#[test]
fn pressure_altitude_rejects_length_units() {
    let err = resolve(
        AltitudeMode::PressureAltitude,
        10.0,
        "kft",
        AirspeedMode::MachNumber,
        0.8,
        "",
        LengthMode::Length,
        1.0,
        "ft",
    )
    .unwrap_err();
    assert_eq!(
        err,
        ResolveError::UnitNotAllowed {
            key: QueryKey::Pressure,
            unit: "kft".into()
        }
    );
}

#[test]
fn geometric_altitude_rejects_pressure_units() {
    let err = resolve(
        AltitudeMode::GeometricAltitude,
        500.0,
        "lbf/ft^2",
        AirspeedMode::MachNumber,
        0.8,
        "",
        LengthMode::Length,
        1.0,
        "ft",
    )
    .unwrap_err();
    assert!(matches!(err, ResolveError::UnitNotAllowed { key: QueryKey::GeometricAltitude, .. }));
}

#[test]
fn vocabulary_unit_outside_mode_set_is_rejected() {
    // atm 은 압력 어휘에는 있지만 기압고도 입력 선택지에는 없다
    let err = resolve(
        AltitudeMode::PressureAltitude,
        0.5,
        "atm",
        AirspeedMode::MachNumber,
        0.8,
        "",
        LengthMode::ReynoldsNumber,
        1e6,
        "",
    )
    .unwrap_err();
    assert!(matches!(err, ResolveError::UnitNotAllowed { .. }));
}

#[test]
fn aliases_are_canonicalized() {
    let query = resolve(
        AltitudeMode::PressureAltitude,
        500.0,
        "psf",
        AirspeedMode::CalibratedAirspeed,
        250.0,
        "kts",
        LengthMode::Length,
        3.0,
        "feet",
    )
    .unwrap();
    let units: Vec<Option<&str>> = query.entries().iter().map(|(_, v)| v.unit()).collect();
    assert_eq!(units, [Some("lbf/ft^2"), Some("knots"), Some("ft")]);
}

#[test]
fn negative_and_non_finite_inputs_are_rejected() {
    let err = resolve(
        AltitudeMode::GeometricAltitude,
        -1.0,
        "ft",
        AirspeedMode::MachNumber,
        0.8,
        "",
        LengthMode::Length,
        1.0,
        "ft",
    )
    .unwrap_err();
    assert_eq!(
        err,
        ResolveError::NegativeValue {
            key: QueryKey::GeometricAltitude,
            value: -1.0
        }
    );

    let err = resolve(
        AltitudeMode::GeometricAltitude,
        0.0,
        "ft",
        AirspeedMode::MachNumber,
        -0.1,
        "",
        LengthMode::Length,
        1.0,
        "ft",
    )
    .unwrap_err();
    assert!(matches!(err, ResolveError::NegativeValue { key: QueryKey::Mach, .. }));

    let err = resolve(
        AltitudeMode::GeometricAltitude,
        0.0,
        "ft",
        AirspeedMode::MachNumber,
        0.1,
        "",
        LengthMode::ReynoldsNumber,
        f64::INFINITY,
        "",
    )
    .unwrap_err();
    assert!(matches!(err, ResolveError::NegativeValue { key: QueryKey::Reynolds, .. }));
}

#[test]
fn zero_inputs_are_accepted() {
    let query = resolve(
        AltitudeMode::GeometricAltitude,
        0.0,
        "m",
        AirspeedMode::TrueAirspeed,
        0.0,
        "m/s",
        LengthMode::Length,
        0.0,
        "m",
    )
    .unwrap();
    assert!(query.entries().iter().all(|(_, v)| v.magnitude() == 0.0));
}

#[test]
fn host_labels_resolve_and_bad_labels_fail() {
    let query = resolve_labels(
        "Geometric Altitude",
        10.0,
        "kft",
        "Mach Number",
        0.8,
        "knots",
        "Length",
        1.0,
        "ft",
    )
    .unwrap();
    assert_eq!(query.get(QueryKey::GeometricAltitude).unwrap().magnitude(), 10.0);

    let err = resolve_labels(
        "Geometric Altitude",
        10.0,
        "kft",
        "Ground Speed",
        120.0,
        "knots",
        "Length",
        1.0,
        "ft",
    )
    .unwrap_err();
    match err {
        ResolveError::InvalidMode(e) => {
            assert_eq!(e.group, ModeGroup::Airspeed);
            assert_eq!(e.value, "Ground Speed");
        }
        other => panic!("unexpected error: {other}"),
    }
}
