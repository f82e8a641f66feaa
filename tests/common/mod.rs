//! 외부 비행 조건 계산기를 대신하는 고정값 계산기.
#![allow(dead_code)]

use std::cell::RefCell;

use flight_condition_toolbox::evaluator::{
    ConditionEvaluator, EvalOptions, EvaluatorError, FlightResult, ResultValue,
};
use flight_condition_toolbox::fields::LAYER_NAME;
use flight_condition_toolbox::quantity::{QuantityKind, UnitTaggedValue};
use flight_condition_toolbox::query::{AirspeedInput, AltitudeInput, LengthInput, Query};

/// 10 kft 표준대기 근방의 기록값. 단위 환산 검증용이며 물리적으로 정확할 필요는 없다.
pub const RE_PER_M: f64 = 6.5e6;
pub const SOUND_SPEED_MPS: f64 = 328.38;

pub fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.9} got {actual:.9} (diff {diff:.3e}, tol {rel_tol})"
    );
}

/// 크기와 무관한 상대 오차 비교. 기대값이 0이면 정확히 0이어야 한다.
pub fn assert_relative(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * expected.abs(),
        "{label} expected {expected:e} got {actual:e} (rel diff {:.3e}, tol {rel_tol})",
        diff / expected.abs()
    );
}

pub fn qty(kind: QuantityKind, magnitude: f64, unit: &str) -> ResultValue {
    ResultValue::Quantity(UnitTaggedValue::new(kind, magnitude, unit).unwrap())
}

#[derive(Default)]
pub struct FixtureEvaluator {
    /// 호출 순서대로 받은 질의
    pub seen: RefCell<Vec<Query>>,
    pub fail_with: Option<String>,
}

impl FixtureEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self {
            seen: RefCell::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn last_query(&self) -> Option<Query> {
        self.seen.borrow().last().cloned()
    }

    fn record(&self, query: &Query) -> Result<(), EvaluatorError> {
        self.seen.borrow_mut().push(query.clone());
        match &self.fail_with {
            Some(msg) => Err(EvaluatorError::new(msg.clone())),
            None => Ok(()),
        }
    }
}

impl ConditionEvaluator for FixtureEvaluator {
    fn evaluate(&self, query: &Query, options: EvalOptions) -> Result<FlightResult, EvaluatorError> {
        use QuantityKind::*;
        self.record(query)?;

        let h = match &query.altitude {
            AltitudeInput::Geometric(v) => ResultValue::Quantity(v.clone()),
            _ => qty(Length, 3048.0, "m"),
        };
        let mach = match &query.airspeed {
            AirspeedInput::Mach(m) => *m,
            _ => 0.5,
        };
        let (length_m, re) = match &query.length {
            LengthInput::Length(v) => {
                let m = v.to("m").unwrap();
                (m, m * RE_PER_M)
            }
            LengthInput::Reynolds(re) => (re / RE_PER_M, *re),
        };
        let tas = mach * SOUND_SPEED_MPS;

        let mut result = FlightResult::new()
            .with("h", h)
            .with("p", qty(Pressure, 69_681.7, "Pa"))
            .with("T", qty(Temperature, 268.338, "K"))
            .with("rho", qty(Density, 0.904_637, "kg/m^3"))
            .with("a", qty(Velocity, SOUND_SPEED_MPS, "m/s"))
            .with("nu", qty(KinematicViscosity, 1.862e-5, "m^2/s"))
            .with("M", ResultValue::Scalar(mach))
            .with("TAS", qty(Velocity, tas, "m/s"))
            .with("CAS", qty(Velocity, tas * 0.84, "m/s"))
            .with("EAS", qty(Velocity, tas * 0.85, "m/s"))
            .with("Re_by_L", qty(InverseLength, RE_PER_M, "1/m"))
            .with("L", qty(Length, length_m, "m"))
            .with("Re", ResultValue::Scalar(re));

        if options.full_output {
            result = result
                .with("H", qty(Length, 3046.5, "m"))
                .with("mu", qty(Viscosity, 1.6847e-5, "N*s/m^2"))
                .with("k", qty(ThermalConductivity, 0.023_758, "W/m/K"))
                .with("g", qty(Acceleration, 9.7973, "m/s^2"))
                .with("MFP", qty(Length, 9.5e-8, "m"))
                .with(LAYER_NAME, ResultValue::Label("troposphere".to_string()))
                .with("q_inf", qty(Pressure, 31_218.0, "Pa"))
                .with("q_c", qty(Pressure, 36_052.0, "Pa"))
                .with("p0", qty(Pressure, 105_733.7, "Pa"))
                .with("T0", qty(Temperature, 302.68, "K"))
                .with("Tr_lamr", qty(Temperature, 296.8, "K"))
                .with("Tr_turb", qty(Temperature, 299.1, "K"))
                .with("h_BL_lamr", qty(Length, 1.8e-3, "m"))
                .with("h_BL_turb", qty(Length, 1.2e-2, "m"))
                .with("Cf_lamr", ResultValue::Scalar(2.6e-4))
                .with("Cf_turb", ResultValue::Scalar(2.9e-3))
                .with("h_yplus1", qty(Length, 2.1e-6, "m"));
        }
        Ok(result)
    }

    fn to_text(&self, query: &Query, options: EvalOptions) -> Result<String, EvaluatorError> {
        self.record(query)?;
        Ok(format!(
            "Flight Condition ({} units, full_output={})\n{query}",
            options.unit_system.as_str(),
            options.full_output
        ))
    }
}
