//! Application state and update functions
//!
//! One explicit state value threaded through reducer-style calls: login,
//! draw, tick, reset. Selection always completes and is recorded before the
//! animator starts, so the rendered landing is derived from the decided
//! winner, never the other way around.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::WheelConfig;
use crate::error::{Error, Result};
use crate::roster::{AccountKind, Roster};
use crate::sim::{Sector, SpinAnimator, SpinEvent, select};

/// Where the current visitor is in the login -> spin -> result cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    /// No verified participant
    LoggedOut,
    /// Verified and able to draw
    Ready { name: String },
    /// Draw decided and recorded, wheel in flight
    Spinning { name: String, winning_index: usize },
    /// Wheel settled; the result panel shows the winning sector
    Result { name: String, winning_index: usize },
}

/// Emitted by `tick`. Carries no payload; callers re-read the winner through
/// `winning_sector`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    SpinFinished,
}

/// Complete application state
#[derive(Debug, Clone)]
pub struct App {
    pub config: WheelConfig,
    pub roster: Roster,
    pub animator: SpinAnimator,
    session: Session,
    rng: Pcg32,
}

impl App {
    pub fn new(config: WheelConfig, roster: Roster, seed: u64) -> Self {
        Self {
            config,
            roster,
            animator: SpinAnimator::new(),
            session: Session::LoggedOut,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Verify a visitor against the eligibility list
    pub fn login(&mut self, name: &str) -> Result<()> {
        if self.animator.is_spinning() {
            return Err(Error::SpinInProgress);
        }
        let participant = self
            .roster
            .find(name)
            .ok_or_else(|| Error::UnknownParticipant(name.to_string()))?;
        if participant.played {
            return Err(Error::AlreadyPlayed(participant.name.clone()));
        }
        log::info!("Participant '{}' verified", participant.name);
        self.session = Session::Ready {
            name: participant.name.clone(),
        };
        Ok(())
    }

    /// Run one draw: select the winner, record it against the participant,
    /// then start the wheel.
    ///
    /// Returns whether a spin actually started. Calls with no verified
    /// visitor, or while the wheel is already in flight, are no-ops — the
    /// triggering control is disabled in those states, so a stray call is
    /// not an error.
    pub fn start_spin(&mut self, now_ms: f64) -> Result<bool> {
        let name = match &self.session {
            Session::Ready { name } => name.clone(),
            _ => return Ok(false),
        };

        let rigged = matches!(
            self.roster.find(&name).map(|p| p.account),
            Some(AccountKind::Privileged)
        );

        // The winner is fixed and recorded before the wheel ever moves
        let winning_index = select(&self.config.sectors, rigged, &mut self.rng)?;
        let prize = self.config.sectors[winning_index].name.clone();
        self.roster.record_win(&name, &prize, now_ms)?;

        log::info!(
            "'{name}' drew sector {winning_index} ('{prize}'){}",
            if rigged { " [rigged]" } else { "" }
        );

        self.animator
            .spin(winning_index, self.config.sectors.len(), &mut self.rng);
        self.session = Session::Spinning {
            name,
            winning_index,
        };
        Ok(true)
    }

    /// Advance the wheel; forwards the animator's single completion event
    pub fn tick(&mut self, dt: f32) -> Option<AppEvent> {
        match self.animator.tick(dt) {
            Some(SpinEvent::Completed) => {
                if let Session::Spinning {
                    name,
                    winning_index,
                } = self.session.clone()
                {
                    self.session = Session::Result {
                        name,
                        winning_index,
                    };
                }
                Some(AppEvent::SpinFinished)
            }
            None => None,
        }
    }

    /// The already-decided winning sector, readable from the moment the draw
    /// starts. The landing position is derived from this, never the reverse.
    pub fn winning_sector(&self) -> Option<&Sector> {
        match &self.session {
            Session::Spinning { winning_index, .. } | Session::Result { winning_index, .. } => {
                self.config.sectors.get(*winning_index)
            }
            _ => None,
        }
    }

    /// Dismiss the result panel and return to the login screen. The wheel's
    /// rotation is retained for the next spin.
    pub fn reset(&mut self) {
        self.session = Session::LoggedOut;
    }
}
