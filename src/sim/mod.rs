//! Deterministic draw-and-landing engine
//!
//! All draw logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Rotation advances on a fixed timestep
//! - No rendering or platform dependencies

pub mod animator;
pub mod sector;
pub mod select;

pub use animator::{SpinAnimator, SpinEvent, SpinPhase};
pub use sector::{
    Sector, SectorKind, default_wheel, label_anchor, sector_center_angle, sector_start_angle,
    sector_width, total_weight, validate_sectors,
};
pub use select::{index_for_draw, rigged_index, select};
