//! Text-to-configuration service boundary
//!
//! An external generator proposes a sector list from an operator prompt.
//! Candidates only become the wheel after the same invariant checks a draw
//! needs; ids and colors are assigned on this side.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sim::{Sector, SectorKind, validate_sectors};

/// Colors assigned to generated sectors
pub const COLOR_PALETTE: [&str; 11] = [
    "#ef4444", "#f97316", "#f59e0b", "#84cc16", "#10b981", "#06b6d4", "#3b82f6", "#6366f1",
    "#8b5cf6", "#d946ef", "#f43f5e",
];

/// A sector as proposed by the generator service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateSector {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SectorKind,
    #[serde(default)]
    pub amount: Option<f32>,
    pub probability: f32,
    #[serde(default)]
    pub icon: Option<String>,
}

/// The external text-to-configuration service, interface only.
///
/// Implementations call out to a text-generation API. Failures are reported
/// to the caller as-is; retry policy belongs to the implementation, never to
/// the acceptance path below.
pub trait ConfigGenerator {
    fn generate(&self, prompt: &str) -> Result<Vec<CandidateSector>>;
}

/// Parse the generator service's JSON response
pub fn parse_candidates(json: &str) -> Result<Vec<CandidateSector>> {
    Ok(serde_json::from_str(json)?)
}

/// Accept a candidate list: assign ids and palette colors, then enforce the
/// sector invariants. Rejection leaves the current wheel untouched.
pub fn accept<R: Rng + ?Sized>(
    candidates: Vec<CandidateSector>,
    rng: &mut R,
) -> Result<Vec<Sector>> {
    if candidates.is_empty() {
        return Err(Error::RejectedCandidate(
            "generator returned no sectors".into(),
        ));
    }

    let sectors: Vec<Sector> = candidates
        .into_iter()
        .enumerate()
        .map(|(i, candidate)| Sector {
            id: i as u32 + 1,
            name: candidate.name,
            kind: candidate.kind,
            amount: candidate.amount,
            weight: candidate.probability,
            color: COLOR_PALETTE[rng.random_range(0..COLOR_PALETTE.len())].to_string(),
            icon: candidate.icon,
            image_url: None,
        })
        .collect();

    validate_sectors(&sectors).map_err(|e| Error::RejectedCandidate(e.to_string()))?;

    log::info!("Accepted {} generated sectors", sectors.len());
    Ok(sectors)
}
