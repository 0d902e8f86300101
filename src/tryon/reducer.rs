use crate::mvi::Reducer;
use crate::tryon::intent::TryOnIntent;
use crate::tryon::state::TryOnPhase;

pub struct TryOnReducer;

impl Reducer for TryOnReducer {
    type State = TryOnPhase;
    type Intent = TryOnIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TryOnIntent::Reset => TryOnPhase::Idle,
            TryOnIntent::OpenSelection => TryOnPhase::Selecting,
            TryOnIntent::Report(phase) => phase,
        }
    }
}
