//! Try-on pipeline: the garment-fitting phase machine.

mod intent;
mod reducer;
mod state;

pub use intent::TryOnIntent;
pub use reducer::TryOnReducer;
pub use state::TryOnPhase;
