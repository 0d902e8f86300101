//! State for the garment-fitting workflow.

use serde::{Deserialize, Serialize};

use crate::mvi::AppState;

/// Phase of the try-on workflow, independent of which screen is visible.
///
/// Happy path: Idle → Uploading → Selecting → Processing → Result, with
/// a universal reset edge back to Idle. The orchestrator only ever
/// writes Idle or Selecting; Uploading/Processing/Result are reported
/// by the external workflow collaborator. Result is terminal for a run
/// and only an explicit reset leaves it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TryOnPhase {
    #[default]
    Idle,
    Uploading,
    Selecting,
    Processing,
    Result,
}

impl AppState for TryOnPhase {}

impl TryOnPhase {
    /// True once a run has produced its result.
    pub fn is_result(self) -> bool {
        matches!(self, TryOnPhase::Result)
    }

    /// True while the external collaborator is synthesizing the image.
    pub fn is_processing(self) -> bool {
        matches!(self, TryOnPhase::Processing)
    }
}
