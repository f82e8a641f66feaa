//! 단위 정의 및 변환 모듈 모음.

pub mod acceleration;
pub mod conductivity;
pub mod density;
pub mod inverse_length;
pub mod kinematic_viscosity;
pub mod length;
pub mod pressure;
pub mod temperature;
pub mod velocity;
pub mod viscosity;

pub use acceleration::{convert_acceleration, AccelerationUnit};
pub use conductivity::{convert_conductivity, ConductivityUnit};
pub use density::{convert_density, DensityUnit};
pub use inverse_length::{convert_inverse_length, InverseLengthUnit};
pub use kinematic_viscosity::{convert_kinematic_viscosity, KinematicViscosityUnit};
pub use length::{convert_length, LengthUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use temperature::{convert_temperature, TemperatureUnit};
pub use velocity::{convert_velocity, VelocityUnit};
pub use viscosity::{convert_viscosity, ViscosityUnit};

/// 국제 피트(m).
pub(crate) const FOOT_M: f64 = 0.3048;
/// 인치(m).
pub(crate) const INCH_M: f64 = 0.0254;
/// 파운드힘(N).
pub(crate) const POUND_FORCE_N: f64 = 4.448_221_615_260_5;
/// 슬러그(kg). 1 lbf·s²/ft.
pub(crate) const SLUG_KG: f64 = POUND_FORCE_N / FOOT_M;
