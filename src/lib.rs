//! State orchestration core for the FitLoom mobile try-on demo.
//!
//! Owns the single source of truth for the active screen, the try-on
//! workflow phase, the product catalog and favorites, placed orders,
//! and the shopper profile, and derives a contextual background theme
//! from all of the above via a priority cascade.
//!
//! The presentation layer drives the core through [`App`]'s operations
//! and reads back a consistent [`Snapshot`] after each one. The
//! external try-on workflow (photo capture, garment selection, image
//! synthesis) reports progress through a [`workflow::WorkflowHandle`].
//!
//! All state is ephemeral: a fresh [`App`] always starts from the same
//! seed catalog and profile.

pub mod app;
pub mod catalog;
pub mod model;
pub mod mvi;
pub mod orders;
pub mod profile;
pub mod seed;
pub mod theme;
pub mod tryon;
pub mod view;
pub mod workflow;

pub use app::{App, Snapshot};
pub use theme::Theme;
pub use tryon::TryOnPhase;
pub use view::Screen;
