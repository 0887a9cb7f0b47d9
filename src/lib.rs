//! LuckSpin - a weighted prize-wheel game engine
//!
//! Core modules:
//! - `sim`: Deterministic draw-and-landing engine (selection, rotation)
//! - `app`: Application state threaded through explicit update functions
//! - `config`: Operator wheel configuration
//! - `roster`: Participant eligibility list and win records
//! - `generator`: Text-to-configuration service boundary

pub mod app;
pub mod config;
pub mod error;
pub mod generator;
pub mod roster;
pub mod sim;

pub use config::{DisplayMode, WheelConfig};
pub use error::{Error, Result};
pub use roster::Roster;
pub use sim::{Sector, SectorKind, SpinAnimator};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed timestep the demo loop drives the wheel at (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;

    /// Angle the physical pointer sits at, in the convention where 0 degrees
    /// is to the right and angles increase clockwise (270 = top of the wheel)
    pub const POINTER_ANGLE: f32 = 270.0;
    /// Full revolutions added to every spin before the landing leg
    pub const FULL_EXTRA_TURNS: u32 = 5;
    /// Spin transition duration in seconds
    pub const SPIN_DURATION: f32 = 5.0;
    /// Jitter bound as a fraction of sector width; must stay below 0.5 so a
    /// landing never drifts into a neighboring sector
    pub const JITTER_FRACTION: f32 = 0.4;

    /// Label anchor distance from center, as a fraction of the wheel radius
    pub const LABEL_RADIUS: f32 = 0.65;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(mut angle: f32) -> f32 {
    while angle >= 360.0 {
        angle -= 360.0;
    }
    while angle < 0.0 {
        angle += 360.0;
    }
    angle
}

/// Convert a wheel-space position (radius, clockwise degrees) to cartesian
/// screen space (+y down)
#[inline]
pub fn wheel_point(radius: f32, angle_deg: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(radius * rad.cos(), radius * rad.sin())
}
