//! UI 호스트 세션(키/값 저장소)과 불변 선택 레코드 사이의 연결부.
//!
//! 핵심 로직은 [`Selection`]만 받으며, 세션 저장소의 형식은 이 모듈만 안다.
use std::collections::{BTreeMap, HashMap};

use crate::config::UnitSystem;
use crate::conversion;
use crate::evaluator::EvalOptions;
use crate::fields::{self, UnitChoices, FIELDS};
use crate::mode::{AirspeedMode, AltitudeMode, InvalidMode, LengthMode};
use crate::quantity::QuantityKind;
use crate::query::{self, Query, ResolveError};

/// 세션 키 이름.
pub mod keys {
    pub const ALTITUDE_TYPE: &str = "altitude_type";
    pub const ALTITUDE: &str = "altitude";
    pub const ALTITUDE_UNIT: &str = "altitude_unit";
    pub const SPEED_TYPE: &str = "speed_type";
    pub const SPEED: &str = "speed";
    pub const SPEED_UNIT: &str = "speed_unit";
    pub const LENGTH_TYPE: &str = "length_type";
    pub const LENGTH: &str = "length";
    pub const LENGTH_UNIT: &str = "length_unit";
    pub const UNITS: &str = "units";
    pub const FULL_OUTPUT: &str = "full_output";
    pub const TEXT_OUTPUT: &str = "text_output";
    /// 출력 항목별 표시 단위 키의 접두사. `display_unit.<field>`
    pub const DISPLAY_UNIT_PREFIX: &str = "display_unit.";
}

/// UI 호스트가 관리하는 세션 범위 키/값 저장소.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// 메모리 기반 세션 저장소.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySession {
    values: HashMap<String, String>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// 체이닝용 저장.
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

/// 세션 값 해석 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionError {
    InvalidMode(InvalidMode),
    /// 숫자로 해석할 수 없는 입력
    InvalidNumber { key: String, value: String },
    /// 불리언/단위계 등 그 밖의 잘못된 값
    InvalidValue { key: String, value: String },
    /// 항목이 제공하지 않는 표시 단위
    UnitNotOffered { key: String, unit: String },
    /// 출력 표에 없는 항목
    UnknownField(String),
}

impl std::fmt::Display for SelectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionError::InvalidMode(e) => write!(f, "{e}"),
            SelectionError::InvalidNumber { key, value } => {
                write!(f, "{key} 값을 숫자로 해석할 수 없음: {value}")
            }
            SelectionError::InvalidValue { key, value } => {
                write!(f, "{key} 값이 올바르지 않음: {value}")
            }
            SelectionError::UnitNotOffered { key, unit } => {
                write!(f, "{key} 항목이 제공하지 않는 단위: {unit}")
            }
            SelectionError::UnknownField(key) => write!(f, "알 수 없는 출력 항목: {key}"),
        }
    }
}

impl std::error::Error for SelectionError {}

impl From<InvalidMode> for SelectionError {
    fn from(value: InvalidMode) -> Self {
        SelectionError::InvalidMode(value)
    }
}

/// 한 번의 상호작용에서 사용자가 고른 입력 전체. 매 패스마다 새로 만든다.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub altitude_mode: AltitudeMode,
    pub altitude: f64,
    pub altitude_unit: String,
    pub airspeed_mode: AirspeedMode,
    pub airspeed: f64,
    /// 마하수 모드에서도 마지막 속도 단위를 유지한다.
    pub airspeed_unit: String,
    pub length_mode: LengthMode,
    pub length: f64,
    pub length_unit: String,
    pub unit_system: UnitSystem,
    pub full_output: bool,
    pub text_output: bool,
}

impl Selection {
    /// 기본 선택값: 기하고도 10, 마하 0.8, 길이 1 (단위는 단위계 기본값).
    pub fn defaults(unit_system: UnitSystem) -> Self {
        let altitude_mode = AltitudeMode::GeometricAltitude;
        Self {
            altitude_mode,
            altitude: 10.0,
            altitude_unit: altitude_mode.default_unit(unit_system).to_string(),
            airspeed_mode: AirspeedMode::MachNumber,
            airspeed: 0.8,
            airspeed_unit: default_speed_unit(AirspeedMode::TrueAirspeed, unit_system),
            length_mode: LengthMode::Length,
            length: 1.0,
            length_unit: default_length_unit(LengthMode::Length, unit_system),
            unit_system,
            full_output: false,
            text_output: false,
        }
    }

    /// 세션 저장소에서 선택값을 읽는다. 없는 키는 `defaults`의 값을 쓰되,
    /// 단위 키가 없으면 읽어 들인 단위계의 기본 단위를 쓴다.
    ///
    /// 모드가 바뀌어 저장된 단위가 새 모드의 단위 집합에 없으면 해당 모드의 기본 단위로 바꾼다.
    pub fn read(store: &dyn SessionStore, defaults: &Selection) -> Result<Selection, SelectionError> {
        let unit_system = match store.get(keys::UNITS) {
            Some(s) => UnitSystem::parse(&s).ok_or_else(|| invalid_value(keys::UNITS, &s))?,
            None => defaults.unit_system,
        };

        let altitude_mode = match store.get(keys::ALTITUDE_TYPE) {
            Some(s) => s.parse()?,
            None => defaults.altitude_mode,
        };
        let airspeed_mode = match store.get(keys::SPEED_TYPE) {
            Some(s) => s.parse()?,
            None => defaults.airspeed_mode,
        };
        let length_mode = match store.get(keys::LENGTH_TYPE) {
            Some(s) => s.parse()?,
            None => defaults.length_mode,
        };

        let mut altitude_unit = store
            .get(keys::ALTITUDE_UNIT)
            .unwrap_or_else(|| altitude_mode.default_unit(unit_system).to_string());
        if !offered_by(altitude_mode.units(), altitude_mode.kind(), &altitude_unit) {
            log::debug!("{altitude_unit}: {} 모드 단위가 아님", altitude_mode.label());
            altitude_unit = altitude_mode.default_unit(unit_system).to_string();
        }

        let mut airspeed_unit = store
            .get(keys::SPEED_UNIT)
            .unwrap_or_else(|| default_speed_unit(AirspeedMode::TrueAirspeed, unit_system));
        if !offered_by(
            AirspeedMode::TrueAirspeed.units(),
            QuantityKind::Velocity,
            &airspeed_unit,
        ) {
            airspeed_unit = default_speed_unit(AirspeedMode::TrueAirspeed, unit_system);
        }

        let mut length_unit = store
            .get(keys::LENGTH_UNIT)
            .unwrap_or_else(|| default_length_unit(LengthMode::Length, unit_system));
        if !offered_by(
            LengthMode::Length.units(),
            QuantityKind::Length,
            &length_unit,
        ) {
            length_unit = default_length_unit(LengthMode::Length, unit_system);
        }

        Ok(Selection {
            altitude_mode,
            altitude: read_number(store, keys::ALTITUDE, defaults.altitude)?,
            altitude_unit,
            airspeed_mode,
            airspeed: read_number(store, keys::SPEED, defaults.airspeed)?,
            airspeed_unit,
            length_mode,
            length: read_number(store, keys::LENGTH, defaults.length)?,
            length_unit,
            unit_system,
            full_output: read_bool(store, keys::FULL_OUTPUT, defaults.full_output)?,
            text_output: read_bool(store, keys::TEXT_OUTPUT, defaults.text_output)?,
        })
    }

    /// 선택값 전체를 세션 저장소에 기록한다.
    pub fn write(&self, store: &mut dyn SessionStore) {
        store.set(keys::ALTITUDE_TYPE, self.altitude_mode.label().to_string());
        store.set(keys::ALTITUDE, self.altitude.to_string());
        store.set(keys::ALTITUDE_UNIT, self.altitude_unit.clone());
        store.set(keys::SPEED_TYPE, self.airspeed_mode.label().to_string());
        store.set(keys::SPEED, self.airspeed.to_string());
        store.set(keys::SPEED_UNIT, self.airspeed_unit.clone());
        store.set(keys::LENGTH_TYPE, self.length_mode.label().to_string());
        store.set(keys::LENGTH, self.length.to_string());
        store.set(keys::LENGTH_UNIT, self.length_unit.clone());
        store.set(keys::UNITS, self.unit_system.as_str().to_string());
        store.set(keys::FULL_OUTPUT, self.full_output.to_string());
        store.set(keys::TEXT_OUTPUT, self.text_output.to_string());
    }

    /// 입력 해석기에 넘겨 질의를 만든다.
    pub fn resolve(&self) -> Result<Query, ResolveError> {
        query::resolve(
            self.altitude_mode,
            self.altitude,
            &self.altitude_unit,
            self.airspeed_mode,
            self.airspeed,
            &self.airspeed_unit,
            self.length_mode,
            self.length,
            &self.length_unit,
        )
    }

    pub fn eval_options(&self) -> EvalOptions {
        EvalOptions {
            full_output: self.full_output,
            unit_system: self.unit_system,
        }
    }
}

fn default_speed_unit(mode: AirspeedMode, system: UnitSystem) -> String {
    mode.default_unit(system).unwrap_or_default().to_string()
}

fn default_length_unit(mode: LengthMode, system: UnitSystem) -> String {
    mode.default_unit(system).unwrap_or_default().to_string()
}

fn offered_by(units: &[&str], kind: QuantityKind, unit: &str) -> bool {
    conversion::canonical_unit(kind, unit).is_ok_and(|u| units.contains(&u))
}

fn invalid_value(key: &str, value: &str) -> SelectionError {
    SelectionError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn read_number(store: &dyn SessionStore, key: &str, default: f64) -> Result<f64, SelectionError> {
    match store.get(key) {
        Some(s) => s.trim().parse().map_err(|_| SelectionError::InvalidNumber {
            key: key.to_string(),
            value: s.clone(),
        }),
        None => Ok(default),
    }
}

fn read_bool(store: &dyn SessionStore, key: &str, default: bool) -> Result<bool, SelectionError> {
    match store.get(key) {
        Some(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "on" => Ok(true),
            "false" | "0" | "off" => Ok(false),
            _ => Err(invalid_value(key, &s)),
        },
        None => Ok(default),
    }
}

/// 출력 항목별 사용자 표시 단위 선택. 없는 항목은 단위계 기본값을 쓴다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayUnitSelection {
    units: BTreeMap<&'static str, &'static str>,
}

impl DisplayUnitSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 항목의 표시 단위를 고른다. 항목이 제공하지 않는 단위는 거부한다.
    pub fn select(&mut self, key: &str, unit: &str) -> Result<(), SelectionError> {
        let spec = fields::field(key).ok_or_else(|| SelectionError::UnknownField(key.to_string()))?;
        let not_offered = || SelectionError::UnitNotOffered {
            key: key.to_string(),
            unit: unit.to_string(),
        };
        let UnitChoices::Units { kind, units } = spec.choices else {
            return Err(not_offered());
        };
        let canonical = conversion::canonical_unit(kind, unit).map_err(|_| not_offered())?;
        let unit = units
            .iter()
            .copied()
            .find(|u| *u == canonical)
            .ok_or_else(not_offered)?;
        self.units.insert(spec.key, unit);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.units.get(key).copied()
    }

    pub fn clear(&mut self, key: &str) {
        self.units.remove(key);
    }

    /// 모든 선택을 지워 단위계 기본값으로 되돌린다.
    pub fn reset(&mut self) {
        self.units.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// 세션에서 표시 단위 선택을 읽는다. 잘못 저장된 값은 경고 후 버린다.
    pub fn read(store: &dyn SessionStore) -> Self {
        let mut selection = Self::new();
        for spec in FIELDS {
            let key = format!("{}{}", keys::DISPLAY_UNIT_PREFIX, spec.key);
            if let Some(unit) = store.get(&key) {
                if let Err(e) = selection.select(spec.key, &unit) {
                    log::warn!("표시 단위 무시: {e}");
                }
            }
        }
        selection
    }

    /// 세션에 기록한다. 선택이 없는 항목의 키는 지운다.
    pub fn write(&self, store: &mut dyn SessionStore) {
        for spec in FIELDS {
            let key = format!("{}{}", keys::DISPLAY_UNIT_PREFIX, spec.key);
            match self.get(spec.key) {
                Some(unit) => store.set(&key, unit.to_string()),
                None => store.remove(&key),
            }
        }
    }
}
