//! 출력 항목 표: 물리량 이름 → (단위 후보, US 기본 인덱스, SI 기본 인덱스, 부가 출력 여부).
use crate::config::UnitSystem;
use crate::conversion::{
    ACCELERATION_UNITS, CONDUCTIVITY_UNITS, DENSITY_UNITS, INVERSE_LENGTH_UNITS,
    KINEMATIC_VISCOSITY_UNITS,
};
use crate::mode::{
    AIRSPEED_INPUT_UNITS, ALTITUDE_INPUT_UNITS, LENGTH_INPUT_UNITS, PRESSURE_ALTITUDE_INPUT_UNITS,
};
use crate::quantity::{QuantityKind, QuantityKind as Q};

/// 대기층 이름 항목. 단위 변환과 수치 서식을 거치지 않는다.
pub const LAYER_NAME: &str = "layer_name";

// 입력과 같은 물리량은 입력 단위 후보를 그대로 쓴다.
const ALTITUDE: &[&str] = ALTITUDE_INPUT_UNITS;
const PRESSURE: &[&str] = PRESSURE_ALTITUDE_INPUT_UNITS;
const TEMPERATURE: &[&str] = &["degR", "degF", "K", "degC"];
const SPEED: &[&str] = AIRSPEED_INPUT_UNITS;
const VISCOSITY: &[&str] = &["lbf*s/ft^2", "N*s/m^2"];
const LENGTH: &[&str] = LENGTH_INPUT_UNITS;

/// 항목의 단위 선택 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitChoices {
    /// 단위 선택지를 제공하는 물리량
    Units {
        kind: QuantityKind,
        units: &'static [&'static str],
    },
    /// 단위 없음. 선택지를 만들지 않는다.
    Dimensionless,
    /// 문자열 라벨
    Label,
}

impl UnitChoices {
    pub fn units(&self) -> Option<&'static [&'static str]> {
        match self {
            UnitChoices::Units { units, .. } => Some(*units),
            UnitChoices::Dimensionless | UnitChoices::Label => None,
        }
    }
}

/// 출력 항목 하나의 정의.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// 계산기 결과의 물리량 이름
    pub key: &'static str,
    /// 영문 표시 이름. 번역은 `i18n`에서 `field.<key>`로 찾는다.
    pub label: &'static str,
    pub choices: UnitChoices,
    pub us_index: usize,
    pub si_index: usize,
    pub full_output_only: bool,
}

impl FieldSpec {
    /// 단위계에 따른 기본 표시 단위. 무차원/라벨 항목은 `None`.
    pub fn default_unit(&self, system: UnitSystem) -> Option<&'static str> {
        let units = self.choices.units()?;
        let index = match system {
            UnitSystem::US => self.us_index,
            UnitSystem::SI => self.si_index,
        };
        units.get(index).copied()
    }

    pub fn offers(&self, unit: &str) -> bool {
        self.choices
            .units()
            .is_some_and(|units| units.contains(&unit))
    }

    pub fn is_visible(&self, full_output: bool) -> bool {
        full_output || !self.full_output_only
    }
}

const fn quantity(
    key: &'static str,
    label: &'static str,
    kind: QuantityKind,
    units: &'static [&'static str],
    us_index: usize,
    si_index: usize,
    full_output_only: bool,
) -> FieldSpec {
    FieldSpec {
        key,
        label,
        choices: UnitChoices::Units { kind, units },
        us_index,
        si_index,
        full_output_only,
    }
}

const fn scalar(key: &'static str, label: &'static str, full_output_only: bool) -> FieldSpec {
    FieldSpec {
        key,
        label,
        choices: UnitChoices::Dimensionless,
        us_index: 0,
        si_index: 0,
        full_output_only,
    }
}

/// 표시 순서대로 정렬된 전체 출력 항목.
pub static FIELDS: &[FieldSpec] = &[
    quantity("h", "Geometric Altitude", Q::Length, ALTITUDE, 0, 2, false),
    quantity("H", "Geopotential Altitude", Q::Length, ALTITUDE, 0, 2, true),
    quantity("p", "Pressure", Q::Pressure, PRESSURE, 0, 2, false),
    quantity("T", "Temperature", Q::Temperature, TEMPERATURE, 0, 2, false),
    quantity("rho", "Density", Q::Density, DENSITY_UNITS, 0, 2, false),
    quantity("a", "Sound Speed", Q::Velocity, SPEED, 1, 3, false),
    quantity("mu", "Dynamic Viscosity", Q::Viscosity, VISCOSITY, 0, 1, true),
    quantity("nu", "Kinematic Viscosity", Q::KinematicViscosity, KINEMATIC_VISCOSITY_UNITS, 0, 1, false),
    quantity("k", "Thermal Conductivity", Q::ThermalConductivity, CONDUCTIVITY_UNITS, 0, 1, true),
    quantity("g", "Gravitational Acceleration", Q::Acceleration, ACCELERATION_UNITS, 0, 1, true),
    quantity("MFP", "Mean Free Path", Q::Length, LENGTH, 0, 2, true),
    FieldSpec {
        key: LAYER_NAME,
        label: "Atmospheric Layer",
        choices: UnitChoices::Label,
        us_index: 0,
        si_index: 0,
        full_output_only: true,
    },
    scalar("M", "Mach Number", false),
    quantity("TAS", "True Airspeed", Q::Velocity, SPEED, 0, 3, false),
    quantity("CAS", "Calibrated Airspeed", Q::Velocity, SPEED, 0, 3, false),
    quantity("EAS", "Equivalent Airspeed", Q::Velocity, SPEED, 0, 3, false),
    quantity("q_inf", "Dynamic Pressure", Q::Pressure, PRESSURE, 0, 2, true),
    quantity("q_c", "Impact Pressure", Q::Pressure, PRESSURE, 0, 2, true),
    quantity("p0", "Stagnation Pressure", Q::Pressure, PRESSURE, 0, 2, true),
    quantity("T0", "Stagnation Temperature", Q::Temperature, TEMPERATURE, 0, 2, true),
    quantity("Tr_lamr", "Recovery Temperature (laminar)", Q::Temperature, TEMPERATURE, 0, 2, true),
    quantity("Tr_turb", "Recovery Temperature (turbulent)", Q::Temperature, TEMPERATURE, 0, 2, true),
    quantity("Re_by_L", "Reynolds Number per Length", Q::InverseLength, INVERSE_LENGTH_UNITS, 1, 3, false),
    quantity("L", "Length", Q::Length, LENGTH, 0, 2, false),
    scalar("Re", "Reynolds Number", false),
    quantity("h_BL_lamr", "Boundary Layer Thickness (laminar)", Q::Length, LENGTH, 1, 3, true),
    quantity("h_BL_turb", "Boundary Layer Thickness (turbulent)", Q::Length, LENGTH, 1, 3, true),
    scalar("Cf_lamr", "Skin Friction Coefficient (laminar)", true),
    scalar("Cf_turb", "Skin Friction Coefficient (turbulent)", true),
    quantity("h_yplus1", "Wall Distance for y+ = 1", Q::Length, LENGTH, 1, 3, true),
];

/// 부가 출력 여부와 관계없이 항상 표시되는 항목.
pub const ALWAYS_SHOWN: [&str; 13] = [
    "h", "p", "T", "rho", "a", "nu", "M", "TAS", "CAS", "EAS", "Re_by_L", "L", "Re",
];

/// 부가 출력을 켰을 때만 표시되는 항목.
pub const FULL_OUTPUT_ONLY: [&str; 17] = [
    "H", "mu", "k", "g", "MFP", LAYER_NAME, "q_inf", "q_c", "p0", "T0", "Tr_lamr", "Tr_turb",
    "h_BL_lamr", "h_BL_turb", "Cf_lamr", "Cf_turb", "h_yplus1",
];

/// 이름으로 항목 정의를 찾는다.
pub fn field(key: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|f| f.key == key)
}

/// 부가 출력 여부에 따라 표시할 항목을 표시 순서대로 반환한다.
pub fn visible_fields(full_output: bool) -> impl Iterator<Item = &'static FieldSpec> {
    FIELDS.iter().filter(move |f| f.is_visible(full_output))
}
