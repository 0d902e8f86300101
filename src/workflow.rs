//! Event boundary between the core and the external try-on collaborator.
//!
//! The collaborator (photo capture, garment selection, image synthesis)
//! runs outside this core and reports progress through a channel rather
//! than a shared mutable field. Reports are applied only when the
//! orchestrator pumps the channel, so the ordering between an
//! orchestrator reset and a collaborator report is always well-defined.

use std::sync::mpsc::{self, Receiver, Sender};

use thiserror::Error;

use crate::tryon::TryOnPhase;

/// A report from the external try-on workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowEvent {
    /// The workflow advanced (or aborted, by reporting Idle).
    PhaseChanged(TryOnPhase),
    /// The shopper saved a generated result.
    WorkSaved,
}

/// The orchestrator side of the boundary has been dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("try-on workflow channel closed")]
pub struct WorkflowClosed;

/// Cloneable handle given to the external collaborator.
#[derive(Debug, Clone)]
pub struct WorkflowHandle {
    tx: Sender<WorkflowEvent>,
}

impl WorkflowHandle {
    /// Report a phase transition. Each report is one indivisible state
    /// write once the orchestrator applies it.
    pub fn report_phase(&self, phase: TryOnPhase) -> Result<(), WorkflowClosed> {
        self.tx
            .send(WorkflowEvent::PhaseChanged(phase))
            .map_err(|_| WorkflowClosed)
    }

    /// Notify that a generated result was saved.
    pub fn work_saved(&self) -> Result<(), WorkflowClosed> {
        self.tx
            .send(WorkflowEvent::WorkSaved)
            .map_err(|_| WorkflowClosed)
    }
}

pub(crate) fn channel() -> (WorkflowHandle, Receiver<WorkflowEvent>) {
    let (tx, rx) = mpsc::channel();
    (WorkflowHandle { tx }, rx)
}
