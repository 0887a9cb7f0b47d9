//! Participant eligibility roster
//!
//! Imported names, the at-most-one-draw flag, and the record of what each
//! participant won. An entry is mutated exactly once, when its draw is
//! recorded; removal is an operator action the draw path never performs.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Account classification. Privileged accounts receive the deterministic
/// lowest-weight outcome instead of a random draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AccountKind {
    #[default]
    Standard,
    Privileged,
}

/// Outcome stored the moment a draw is decided
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WinRecord {
    /// Name of the sector won
    pub prize: String,
    /// Unix timestamp (ms) of the draw
    pub timestamp_ms: f64,
}

/// One eligible participant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: u32,
    pub name: String,
    pub account: AccountKind,
    pub played: bool,
    pub outcome: Option<WinRecord>,
}

/// The eligibility list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    entries: Vec<Participant>,
    next_id: u32,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    fn next_entry_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn entries(&self) -> &[Participant] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add one participant by name. Returns the new entry's id.
    pub fn add(&mut self, name: &str) -> u32 {
        let id = self.next_entry_id();
        self.entries.push(Participant {
            id,
            name: name.trim().to_string(),
            account: AccountKind::Standard,
            played: false,
            outcome: None,
        });
        id
    }

    /// Bulk import, one name per line. Blank lines are skipped.
    /// Returns the number of entries added.
    pub fn import_lines(&mut self, text: &str) -> usize {
        let mut added = 0;
        for line in text.lines() {
            let name = line.trim();
            if !name.is_empty() {
                self.add(name);
                added += 1;
            }
        }
        log::info!("Imported {added} participants from text");
        added
    }

    /// Bulk import from spreadsheet-style rows: the first cell of each row
    /// is the name. Blank cells and `name`/`username` header cells are
    /// skipped. The actual file parsing happens upstream.
    pub fn import_rows(&mut self, rows: &[Vec<String>]) -> usize {
        let mut added = 0;
        for row in rows {
            let Some(cell) = row.first() else { continue };
            let name = cell.trim();
            if name.is_empty() {
                continue;
            }
            let lower = name.to_lowercase();
            if lower == "name" || lower == "username" {
                continue;
            }
            self.add(name);
            added += 1;
        }
        log::info!("Imported {added} participants from rows");
        added
    }

    /// Case-insensitive lookup by name
    pub fn find(&self, name: &str) -> Option<&Participant> {
        let needle = name.trim().to_lowercase();
        self.entries.iter().find(|p| p.name.to_lowercase() == needle)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Participant> {
        let needle = name.trim().to_lowercase();
        self.entries
            .iter_mut()
            .find(|p| p.name.to_lowercase() == needle)
    }

    /// Record a completed draw: the single permitted mutation of an entry.
    /// Sets the played flag and stores the outcome.
    pub fn record_win(&mut self, name: &str, prize: &str, timestamp_ms: f64) -> Result<()> {
        let participant = self
            .find_mut(name)
            .ok_or_else(|| Error::UnknownParticipant(name.to_string()))?;
        if participant.played {
            return Err(Error::AlreadyPlayed(participant.name.clone()));
        }
        participant.played = true;
        participant.outcome = Some(WinRecord {
            prize: prize.to_string(),
            timestamp_ms,
        });
        Ok(())
    }

    /// Flag an account for the deterministic outcome path
    pub fn set_privileged(&mut self, name: &str) -> Result<()> {
        let participant = self
            .find_mut(name)
            .ok_or_else(|| Error::UnknownParticipant(name.to_string()))?;
        participant.account = AccountKind::Privileged;
        Ok(())
    }

    /// Operator removal. Returns whether an entry was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let needle = name.trim().to_lowercase();
        let before = self.entries.len();
        self.entries.retain(|p| p.name.to_lowercase() != needle);
        self.entries.len() != before
    }
}
