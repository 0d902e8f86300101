//! Intents for the try-on phase machine.

use crate::mvi::Intent;
use crate::tryon::state::TryOnPhase;

/// Intents that can be dispatched to the try-on reducer.
#[derive(Debug, Clone, Copy)]
pub enum TryOnIntent {
    /// Universal reset edge back to Idle, valid from any phase.
    Reset,

    /// The try-on room opened: skip straight to garment selection.
    OpenSelection,

    /// The external workflow collaborator reported progress. The
    /// collaborator may write any phase; the orchestrator never
    /// originates these.
    Report(TryOnPhase),
}

impl Intent for TryOnIntent {}
