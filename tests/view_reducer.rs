mod common;

use common::product;
use fitloom_core::model::FashionStyle;
use fitloom_core::mvi::Reducer;
use fitloom_core::view::{Screen, ViewIntent, ViewReducer, ViewState};

#[test]
fn select_product_switches_to_detail() {
    let p = product("p1", 100, FashionStyle::Casual);
    let state = ViewReducer::reduce(ViewState::default(), ViewIntent::SelectProduct(p.clone()));

    assert_eq!(state.screen, Screen::ProductDetail);
    assert_eq!(state.selected_product, Some(p));
}

#[test]
fn select_product_preserves_style_context() {
    let before = ViewState {
        style_context: Some(FashionStyle::Party),
        ..ViewState::default()
    };
    let p = product("p1", 100, FashionStyle::Casual);
    let state = ViewReducer::reduce(before, ViewIntent::SelectProduct(p));
    assert_eq!(state.style_context, Some(FashionStyle::Party));
}

#[test]
fn navigate_drops_selection() {
    let before = ViewState {
        screen: Screen::ProductDetail,
        selected_product: Some(product("p1", 100, FashionStyle::Casual)),
        style_context: None,
    };
    let state = ViewReducer::reduce(before, ViewIntent::Navigate(Screen::Profile));
    assert_eq!(state.screen, Screen::Profile);
    assert!(state.selected_product.is_none());
}

#[test]
fn navigate_clears_style_except_for_try_on() {
    let styled = || ViewState {
        style_context: Some(FashionStyle::Sport),
        ..ViewState::default()
    };

    let state = ViewReducer::reduce(styled(), ViewIntent::Navigate(Screen::TryOn));
    assert_eq!(state.style_context, Some(FashionStyle::Sport));

    let state = ViewReducer::reduce(styled(), ViewIntent::Navigate(Screen::Explore));
    assert_eq!(state.style_context, None);
}

#[test]
fn go_back_from_detail_clears_everything() {
    let before = ViewState {
        screen: Screen::ProductDetail,
        selected_product: Some(product("p1", 100, FashionStyle::Party)),
        style_context: Some(FashionStyle::Party),
    };
    let state = ViewReducer::reduce(before, ViewIntent::GoBackFromDetail);
    assert_eq!(
        state,
        ViewState {
            screen: Screen::Explore,
            selected_product: None,
            style_context: None,
        }
    );
}

#[test]
fn set_style_context_touches_nothing_else() {
    let before = ViewState {
        screen: Screen::TryOn,
        ..ViewState::default()
    };
    let state = ViewReducer::reduce(before, ViewIntent::SetStyleContext(Some(FashionStyle::Business)));
    assert_eq!(state.screen, Screen::TryOn);
    assert_eq!(state.style_context, Some(FashionStyle::Business));
}
