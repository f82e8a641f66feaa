//! 세션 저장소 ↔ 선택 레코드 변환 테스트.
use flight_condition_toolbox::config::UnitSystem;
use flight_condition_toolbox::mode::{AirspeedMode, AltitudeMode, LengthMode};
use flight_condition_toolbox::session::{
    keys, DisplayUnitSelection, MemorySession, Selection, SelectionError, SessionStore,
};

#[test]
fn empty_session_reads_defaults() {
    let defaults = Selection::defaults(UnitSystem::US);
    let selection = Selection::read(&MemorySession::new(), &defaults).unwrap();
    assert_eq!(selection, defaults);
    assert_eq!(selection.altitude_unit, "kft");
    assert_eq!(selection.airspeed_unit, "knots");
    assert_eq!(selection.length_unit, "ft");

    let si = Selection::defaults(UnitSystem::SI);
    assert_eq!(si.altitude_unit, "km");
    assert_eq!(si.airspeed_unit, "m/s");
    assert_eq!(si.length_unit, "m");
}

#[test]
fn write_then_read_round_trips() {
    let mut selection = Selection::defaults(UnitSystem::SI);
    selection.altitude_mode = AltitudeMode::GeopotentialAltitude;
    selection.altitude = 11.0;
    selection.airspeed_mode = AirspeedMode::CalibratedAirspeed;
    selection.airspeed = 140.5;
    selection.length_mode = LengthMode::ReynoldsNumber;
    selection.length = 2.5e7;
    selection.full_output = true;

    let mut store = MemorySession::new();
    selection.write(&mut store);
    assert_eq!(store.get(keys::ALTITUDE_TYPE).as_deref(), Some("Geopotential Altitude"));
    assert_eq!(store.get(keys::UNITS).as_deref(), Some("SI"));

    let read = Selection::read(&store, &Selection::defaults(UnitSystem::US)).unwrap();
    assert_eq!(read, selection);
}

#[test]
fn geopotential_altitude_shares_altitude_keys() {
    let store = MemorySession::new()
        .with(keys::ALTITUDE_TYPE, "Geopotential Altitude")
        .with(keys::ALTITUDE, "5")
        .with(keys::ALTITUDE_UNIT, "km");
    let selection = Selection::read(&store, &Selection::defaults(UnitSystem::US)).unwrap();
    let query = selection.resolve().unwrap();
    assert_eq!(query.entries()[0].0.as_str(), "H");
    assert_eq!(query.entries()[0].1.unit(), Some("km"));
    assert!(store.get("H").is_none() && store.get("H_unit").is_none());
}

#[test]
fn switching_to_pressure_altitude_swaps_unit_set() {
    let store = MemorySession::new()
        .with(keys::ALTITUDE_TYPE, "Pressure Altitude")
        .with(keys::ALTITUDE, "500")
        .with(keys::ALTITUDE_UNIT, "kft")
        .with(keys::UNITS, "US");
    let selection = Selection::read(&store, &Selection::defaults(UnitSystem::US)).unwrap();
    assert_eq!(selection.altitude_unit, "lbf/ft^2");
    assert!(selection.resolve().is_ok());

    let store = store.with(keys::UNITS, "si");
    let selection = Selection::read(&store, &Selection::defaults(UnitSystem::US)).unwrap();
    assert_eq!(selection.unit_system, UnitSystem::SI);
    assert_eq!(selection.altitude_unit, "Pa");
}

#[test]
fn missing_unit_keys_follow_stored_unit_system() {
    let store = MemorySession::new().with(keys::UNITS, "SI");
    let selection = Selection::read(&store, &Selection::defaults(UnitSystem::US)).unwrap();
    assert_eq!(selection.unit_system, UnitSystem::SI);
    assert_eq!(selection.altitude_unit, "km");
    assert_eq!(selection.airspeed_unit, "m/s");
    assert_eq!(selection.length_unit, "m");

    let store = store.with(keys::ALTITUDE_TYPE, "Pressure Altitude");
    let selection = Selection::read(&store, &Selection::defaults(UnitSystem::US)).unwrap();
    assert_eq!(selection.altitude_unit, "Pa");
}

#[test]
fn bad_session_values_are_reported() {
    let defaults = Selection::defaults(UnitSystem::US);

    let store = MemorySession::new().with(keys::SPEED_TYPE, "Ground Speed");
    assert!(matches!(
        Selection::read(&store, &defaults),
        Err(SelectionError::InvalidMode(_))
    ));

    let store = MemorySession::new().with(keys::ALTITUDE, "ten");
    assert_eq!(
        Selection::read(&store, &defaults),
        Err(SelectionError::InvalidNumber {
            key: keys::ALTITUDE.into(),
            value: "ten".into()
        })
    );

    let store = MemorySession::new().with(keys::FULL_OUTPUT, "maybe");
    assert!(matches!(
        Selection::read(&store, &defaults),
        Err(SelectionError::InvalidValue { .. })
    ));

    let store = MemorySession::new().with(keys::UNITS, "imperial");
    assert!(matches!(
        Selection::read(&store, &defaults),
        Err(SelectionError::InvalidValue { .. })
    ));
}

#[test]
fn display_units_round_trip_and_drop_invalid_entries() {
    let mut display = DisplayUnitSelection::new();
    display.select("p", "kPa").unwrap();
    display.select("a", "knots").unwrap();

    let mut store = MemorySession::new().with("display_unit.T", "furlongs");
    display.write(&mut store);
    assert_eq!(store.get("display_unit.p").as_deref(), Some("kPa"));
    // 선택이 없는 항목의 키는 지워진다
    assert_eq!(store.get("display_unit.T"), None);

    let store = store.with("display_unit.rho", "parsecs");
    let read = DisplayUnitSelection::read(&store);
    assert_eq!(read, display);
    assert_eq!(read.get("rho"), None);
}
