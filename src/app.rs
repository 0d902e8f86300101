//! The orchestrator: single mutation surface and source of truth.
//!
//! Every public operation runs to completion, then the theme is
//! re-resolved from post-mutation state. The presentation layer only
//! reads snapshots and issues operation calls; it never mutates entity
//! state directly.

use std::sync::mpsc::Receiver;

use serde::Serialize;

use crate::catalog::CatalogStore;
use crate::model::{FashionStyle, Order, Product, ProductDraft, UserProfile};
use crate::mvi::Reducer;
use crate::orders::OrderStore;
use crate::profile::ProfileStore;
use crate::seed;
use crate::theme::{self, Theme, ThemeInputs};
use crate::tryon::{TryOnIntent, TryOnPhase, TryOnReducer};
use crate::view::{Screen, ViewIntent, ViewReducer, ViewState};
use crate::workflow::{self, WorkflowEvent, WorkflowHandle};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Read-only state snapshot handed to the presentation layer after
/// every operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub screen: Screen,
    pub phase: TryOnPhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_context: Option<FashionStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_product: Option<Product>,
    pub products: Vec<Product>,
    pub favorites: Vec<Product>,
    pub orders: Vec<Order>,
    /// Profile with the live-computed orders stat.
    pub user: UserProfile,
    pub navigation_visible: bool,
    pub theme: Theme,
    pub background: &'static str,
}

impl Snapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

pub struct App {
    view: ViewState,
    phase: TryOnPhase,
    catalog: CatalogStore,
    orders: OrderStore,
    profile: ProfileStore,
    theme: Theme,
    workflow_handle: WorkflowHandle,
    workflow_rx: Receiver<WorkflowEvent>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Fresh core with the fixed starter catalog and profile.
    pub fn new() -> Self {
        let (workflow_handle, workflow_rx) = workflow::channel();
        let mut app = Self {
            view: ViewState::default(),
            phase: TryOnPhase::default(),
            catalog: CatalogStore::new(seed::seed_products()),
            orders: OrderStore::default(),
            profile: ProfileStore::new(seed::seed_profile()),
            theme: Theme::DefaultGradient,
            workflow_handle,
            workflow_rx,
        };
        app.refresh_theme();
        app
    }

    // ── Navigation ──

    /// Show a product's detail screen. Entering detail view always
    /// starts from a clean workflow state, even mid-flight.
    pub fn select_product(&mut self, product: Product) {
        dispatch_mvi!(self, view, ViewReducer, ViewIntent::SelectProduct(product));
        dispatch_mvi!(self, phase, TryOnReducer, TryOnIntent::Reset);
        self.refresh_theme();
    }

    /// Tab-bar navigation. The try-on room always opens ready for
    /// garment selection; any other destination resets the workflow
    /// and clears the style context.
    pub fn navigate(&mut self, target: Screen) {
        dispatch_mvi!(self, view, ViewReducer, ViewIntent::Navigate(target));
        let phase_intent = if target == Screen::TryOn {
            TryOnIntent::OpenSelection
        } else {
            TryOnIntent::Reset
        };
        dispatch_mvi!(self, phase, TryOnReducer, phase_intent);
        self.refresh_theme();
    }

    /// Return from product detail to explore, clearing the style
    /// context and dropping the selection.
    pub fn go_back_from_detail(&mut self) {
        dispatch_mvi!(self, view, ViewReducer, ViewIntent::GoBackFromDetail);
        self.refresh_theme();
    }

    /// A style-browsing screen reported the style currently in focus.
    pub fn set_style_context(&mut self, style: Option<FashionStyle>) {
        dispatch_mvi!(self, view, ViewReducer, ViewIntent::SetStyleContext(style));
        self.refresh_theme();
    }

    // ── Catalog ──

    pub fn create_product(&mut self, draft: ProductDraft) -> Product {
        let owner = self.profile.profile().name.clone();
        let product = self.catalog.create_product(draft, &owner);
        self.refresh_theme();
        product
    }

    pub fn update_product(&mut self, product: Product) {
        self.catalog.update_product(product);
        self.refresh_theme();
    }

    pub fn delete_product(&mut self, id: &str) {
        self.catalog.delete_product(id);
        self.refresh_theme();
    }

    pub fn toggle_favorite(&mut self, product: &Product) {
        self.catalog.toggle_favorite(product);
        self.refresh_theme();
    }

    // ── Orders ──

    pub fn create_order(&mut self, order: Order) {
        self.orders.create_order(order);
        self.refresh_theme();
    }

    pub fn update_order(&mut self, order: Order) {
        self.orders.update_order(order);
        self.refresh_theme();
    }

    // ── Profile ──

    /// Flip the one-way merchant flag and force navigation to the
    /// merchant dashboard, as one composed operation.
    pub fn become_merchant(&mut self) {
        self.profile.become_merchant();
        self.navigate(Screen::Merchant);
    }

    pub fn update_user_profile(&mut self, profile: UserProfile) {
        self.profile.update_profile(profile);
        self.refresh_theme();
    }

    // ── Workflow boundary ──

    /// Handle for the external try-on collaborator to report progress.
    pub fn workflow_handle(&self) -> WorkflowHandle {
        self.workflow_handle.clone()
    }

    /// Apply all pending collaborator reports, each as one indivisible
    /// write followed by theme re-resolution. Returns the number of
    /// reports applied.
    pub fn pump_workflow(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.workflow_rx.try_recv() {
            match event {
                WorkflowEvent::PhaseChanged(phase) => {
                    dispatch_mvi!(self, phase, TryOnReducer, TryOnIntent::Report(phase));
                }
                WorkflowEvent::WorkSaved => self.profile.record_work_saved(),
            }
            self.refresh_theme();
            applied += 1;
        }
        applied
    }

    // ── Reads ──

    pub fn screen(&self) -> Screen {
        self.view.screen
    }

    pub fn phase(&self) -> TryOnPhase {
        self.phase
    }

    pub fn style_context(&self) -> Option<FashionStyle> {
        self.view.style_context
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.view.selected_product.as_ref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn navigation_visible(&self) -> bool {
        self.view.navigation_visible()
    }

    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    pub fn favorites(&self) -> &[Product] {
        self.catalog.favorites()
    }

    pub fn orders(&self) -> &[Order] {
        self.orders.orders()
    }

    /// Profile with the live-computed orders stat, also served to the
    /// collaborator for personalization.
    pub fn user_profile(&self) -> UserProfile {
        self.profile.profile_with_orders(self.orders.len())
    }

    /// Consistent read-only snapshot of the whole core.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            screen: self.view.screen,
            phase: self.phase,
            style_context: self.view.style_context,
            selected_product: self.view.selected_product.clone(),
            products: self.catalog.products().to_vec(),
            favorites: self.catalog.favorites().to_vec(),
            orders: self.orders.orders().to_vec(),
            user: self.user_profile(),
            navigation_visible: self.view.navigation_visible(),
            theme: self.theme,
            background: self.theme.background(),
        }
    }

    /// Re-derive the theme from post-mutation state.
    fn refresh_theme(&mut self) {
        self.theme = theme::resolve(&ThemeInputs {
            screen: self.view.screen,
            phase: self.phase,
            style_context: self.view.style_context,
            selected_product: self.view.selected_product.as_ref(),
        });
    }
}
