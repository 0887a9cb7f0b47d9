//! Operator wheel configuration
//!
//! The configuration store boundary: the sector list plus the presentation
//! flags a renderer reads. Weight sums are advised, never enforced; the draw
//! treats weights as unnormalized masses either way.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sim::{Sector, default_wheel, total_weight, validate_sectors};

/// How sectors are drawn on the wheel face. Rendering only; selection and
/// rotation math never look at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisplayMode {
    Image,
    #[default]
    Text,
}

/// Advisory notice that the configured weights do not sum to 100
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfigWarning {
    pub total_weight: f32,
}

/// Tolerance for the weight-sum advisory
const SUM_TOLERANCE: f32 = 0.01;

/// Operator configuration for the wheel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WheelConfig {
    /// Title shown above the wheel
    pub title: String,
    /// Logo image (URL or data URI)
    #[serde(default)]
    pub logo_url: Option<String>,
    /// IPs allowed to open the admin surface
    #[serde(default)]
    pub ip_whitelist: Vec<String>,
    /// Customer service link shown with results
    #[serde(default)]
    pub customer_service_url: String,
    /// Sector rendering mode
    #[serde(default)]
    pub display_mode: DisplayMode,
    /// The wheel itself, in angular order
    pub sectors: Vec<Sector>,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            title: "LuckSpin".to_string(),
            logo_url: None,
            ip_whitelist: Vec::new(),
            customer_service_url: String::new(),
            display_mode: DisplayMode::Text,
            sectors: default_wheel(),
        }
    }
}

impl WheelConfig {
    /// Replace the sector list, enforcing the invariants a draw depends on.
    /// Rejection leaves the current wheel untouched.
    pub fn replace_sectors(&mut self, sectors: Vec<Sector>) -> Result<()> {
        validate_sectors(&sectors)?;
        self.sectors = sectors;
        Ok(())
    }

    /// Advisory check that the weights form percentages. Never blocks a
    /// draw; the selection operates on unnormalized masses regardless.
    pub fn weight_warning(&self) -> Option<ConfigWarning> {
        let total = total_weight(&self.sectors);
        if (total - 100.0).abs() > SUM_TOLERANCE {
            Some(ConfigWarning {
                total_weight: total,
            })
        } else {
            None
        }
    }

    /// Serialize for the configuration store
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load from the configuration store, re-checking the draw invariants
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        validate_sectors(&config.sectors)?;
        log::info!(
            "Loaded wheel config '{}' with {} sectors",
            config.title,
            config.sectors.len()
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Sector;

    #[test]
    fn test_default_config_has_no_warning() {
        let config = WheelConfig::default();
        assert_eq!(config.sectors.len(), 8);
        assert!(config.weight_warning().is_none());
    }

    #[test]
    fn test_weight_warning_when_sum_off() {
        let mut config = WheelConfig::default();
        config.sectors[0].weight += 5.0;
        let warning = config.weight_warning().expect("sum is off by 5");
        assert!((warning.total_weight - 105.0).abs() < 0.01);
    }

    #[test]
    fn test_replace_sectors_rejects_empty() {
        let mut config = WheelConfig::default();
        assert!(config.replace_sectors(Vec::new()).is_err());
        // Rejection left the wheel untouched
        assert_eq!(config.sectors.len(), 8);
    }

    #[test]
    fn test_replace_sectors_accepts_valid_list() {
        let mut config = WheelConfig::default();
        let sectors = vec![
            Sector::empty(1, "Nothing", 60.0, "#64748b", "Frown"),
            Sector::currency(2, "10 Gold", 10.0, 40.0, "#0ea5e9"),
        ];
        config.replace_sectors(sectors).unwrap();
        assert_eq!(config.sectors.len(), 2);
    }

    #[test]
    fn test_json_round_trip() {
        let config = WheelConfig::default();
        let json = config.to_json().unwrap();
        let loaded = WheelConfig::from_json(&json).unwrap();
        assert_eq!(loaded.title, config.title);
        assert_eq!(loaded.display_mode, config.display_mode);
        assert_eq!(loaded.sectors.len(), config.sectors.len());
        assert_eq!(loaded.sectors[6].name, "Try Again");
    }

    #[test]
    fn test_from_json_rejects_empty_wheel() {
        let json = r#"{"title": "Broken", "sectors": []}"#;
        assert!(WheelConfig::from_json(json).is_err());
    }
}
