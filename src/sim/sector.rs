//! Sector model and wheel slice geometry
//!
//! Sector order is significant: index 0 starts at angle 0 and slices proceed
//! clockwise, each with equal angular width 360/N. Weights shape the draw,
//! never the geometry.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::LABEL_RADIUS;
use crate::error::{Error, Result};
use crate::wheel_point;

/// Prize classification. Presentation only; selection never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SectorKind {
    Physical,
    Currency,
    Empty,
}

/// One wheel slice / prize
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sector {
    /// Stable for the lifetime of the configuration list
    pub id: u32,
    pub name: String,
    pub kind: SectorKind,
    /// Payout, meaningful only for `Currency` sectors
    #[serde(default)]
    pub amount: Option<f32>,
    /// Unnormalized probability mass; the list is not required to sum to 100
    pub weight: f32,
    /// Display color (hex string)
    pub color: String,
    /// Icon name for text display mode
    #[serde(default)]
    pub icon: Option<String>,
    /// Image URL for image display mode
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Sector {
    pub fn physical(id: u32, name: &str, weight: f32, color: &str, icon: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            kind: SectorKind::Physical,
            amount: None,
            weight,
            color: color.to_string(),
            icon: Some(icon.to_string()),
            image_url: None,
        }
    }

    pub fn currency(id: u32, name: &str, amount: f32, weight: f32, color: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            kind: SectorKind::Currency,
            amount: Some(amount),
            weight,
            color: color.to_string(),
            icon: Some("Coins".to_string()),
            image_url: None,
        }
    }

    pub fn empty(id: u32, name: &str, weight: f32, color: &str, icon: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            kind: SectorKind::Empty,
            amount: None,
            weight,
            color: color.to_string(),
            icon: Some(icon.to_string()),
            image_url: None,
        }
    }
}

/// Angular width of each slice on an N-sector wheel (degrees)
#[inline]
pub fn sector_width(sector_count: usize) -> f32 {
    360.0 / sector_count as f32
}

/// Start angle of slice `index` (degrees)
#[inline]
pub fn sector_start_angle(index: usize, sector_count: usize) -> f32 {
    index as f32 * sector_width(sector_count)
}

/// Center angle of slice `index` (degrees)
#[inline]
pub fn sector_center_angle(index: usize, sector_count: usize) -> f32 {
    sector_start_angle(index, sector_count) + sector_width(sector_count) / 2.0
}

/// Anchor point for a slice's label on the unit wheel
pub fn label_anchor(index: usize, sector_count: usize) -> Vec2 {
    wheel_point(LABEL_RADIUS, sector_center_angle(index, sector_count))
}

/// Sum of all sector weights
pub fn total_weight(sectors: &[Sector]) -> f32 {
    sectors.iter().map(|s| s.weight).sum()
}

/// Check the invariants a draw depends on: a non-empty list with finite,
/// non-negative weights. The weight sum is deliberately not checked here.
pub fn validate_sectors(sectors: &[Sector]) -> Result<()> {
    if sectors.is_empty() {
        return Err(Error::InvalidConfiguration("sector list is empty".into()));
    }
    for sector in sectors {
        if !sector.weight.is_finite() || sector.weight < 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "sector '{}' has invalid weight {}",
                sector.name, sector.weight
            )));
        }
    }
    Ok(())
}

/// The wheel the app ships with
pub fn default_wheel() -> Vec<Sector> {
    vec![
        Sector::physical(1, "Hair Dryer", 0.2, "#fcd34d", "Zap"),
        Sector::currency(2, "1000 Gold", 1000.0, 5.0, "#0ea5e9"),
        Sector::physical(3, "Controller", 0.5, "#fcd34d", "Gamepad"),
        Sector::currency(4, "500 Gold", 500.0, 15.0, "#0ea5e9"),
        Sector::physical(5, "Sneakers", 0.2, "#fcd34d", "Footprints"),
        Sector::currency(6, "100 Gold", 100.0, 30.0, "#0ea5e9"),
        Sector::empty(7, "Try Again", 49.1, "#fcd34d", "Frown"),
        Sector::currency(8, "Bonus", 50.0, 0.0, "#0ea5e9"),
    ]
}
