use crate::mvi::Reducer;
use crate::view::intent::ViewIntent;
use crate::view::state::{Screen, ViewState};

pub struct ViewReducer;

impl Reducer for ViewReducer {
    type State = ViewState;
    type Intent = ViewIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ViewIntent::SelectProduct(product) => ViewState {
                screen: Screen::ProductDetail,
                selected_product: Some(product),
                style_context: state.style_context,
            },
            ViewIntent::Navigate(target) => {
                // Style context survives entering the try-on room; any
                // other destination clears it. The selection is only
                // valid on the detail screen.
                let style_context = if target == Screen::TryOn {
                    state.style_context
                } else {
                    None
                };
                ViewState {
                    screen: target,
                    selected_product: None,
                    style_context,
                }
            }
            ViewIntent::GoBackFromDetail => ViewState {
                screen: Screen::Explore,
                selected_product: None,
                style_context: None,
            },
            ViewIntent::SetStyleContext(style) => ViewState {
                style_context: style,
                ..state
            },
        }
    }
}
