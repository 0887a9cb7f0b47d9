//! Weighted random sector selection
//!
//! The normal path draws a uniform value in [0, total_weight) and walks the
//! cumulative distribution in sector order. The rigged path skips the draw
//! entirely and returns the rarest sector, so flagged internal accounts can
//! be pointed at a known outcome.

use rand::Rng;

use super::sector::{Sector, total_weight, validate_sectors};
use crate::error::Result;

/// Walk the cumulative distribution for a given draw value.
///
/// Returns the first index whose accumulated weight reaches `r`. A draw that
/// lands exactly on a cumulative boundary goes to the earlier sector; any
/// reimplementation must keep this tie-break for reproducible draws.
pub fn index_for_draw(sectors: &[Sector], r: f32) -> usize {
    let mut cum = 0.0;
    for (i, sector) in sectors.iter().enumerate() {
        cum += sector.weight;
        if r <= cum {
            return i;
        }
    }
    // Float accumulation can leave r a hair above the final sum
    sectors.len() - 1
}

/// Deterministic override: the strictly lowest-weight sector, ties broken by
/// the lowest original index.
pub fn rigged_index(sectors: &[Sector]) -> usize {
    sectors
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.weight.total_cmp(&b.weight))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Pick one winning sector index from the wheel.
///
/// `rigged` bypasses the random draw entirely. If every weight is zero the
/// draw degenerates to index 0; callers must not treat that as a fair
/// outcome. Weights are unnormalized masses and are never rescaled.
pub fn select<R: Rng + ?Sized>(sectors: &[Sector], rigged: bool, rng: &mut R) -> Result<usize> {
    validate_sectors(sectors)?;

    if rigged {
        return Ok(rigged_index(sectors));
    }

    let total = total_weight(sectors);
    if total <= 0.0 {
        return Ok(0);
    }

    let r = rng.random_range(0.0..total);
    Ok(index_for_draw(sectors, r))
}
