//! Catalog store: the product list and its favorites subset.
//!
//! Favorites mirror the catalog. Every mutation that could make the two
//! diverge (update, delete) touches both collections in one method, so
//! a dangling or stale favorite is structurally impossible rather than
//! a caller convention.

use crate::model::{Product, ProductDraft};

#[derive(Debug, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    favorites: Vec<Product>,
    /// Last issued id, for monotonic tiebreaking within one millisecond.
    last_id: i64,
}

impl CatalogStore {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            favorites: Vec::new(),
            last_id: 0,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn favorites(&self) -> &[Product] {
        &self.favorites
    }

    /// Look up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Time-based id, unique and monotonically increasing even when two
    /// products are created within the same millisecond.
    fn next_id(&mut self) -> String {
        let now = chrono::Utc::now().timestamp_millis();
        self.last_id = now.max(self.last_id + 1);
        self.last_id.to_string()
    }

    /// Create a product from partial merchant data, filling unset fields
    /// with declared defaults, and prepend it to the list. Returns a
    /// clone of the stored product.
    pub fn create_product(&mut self, draft: ProductDraft, owner_name: &str) -> Product {
        let id = self.next_id();
        let product = draft.into_product(id, owner_name);
        tracing::debug!(id = %product.id, title = %product.title, "product created");
        self.products.insert(0, product.clone());
        product
    }

    /// Replace the product matching `id`, propagating the same
    /// replacement into favorites. Unknown id is a silent no-op.
    pub fn update_product(&mut self, product: Product) {
        let Some(slot) = self.products.iter_mut().find(|p| p.id == product.id) else {
            tracing::debug!(id = %product.id, "update for unknown product ignored");
            return;
        };
        *slot = product.clone();
        if let Some(favorite) = self.favorites.iter_mut().find(|p| p.id == product.id) {
            *favorite = product;
        }
    }

    /// Remove the product from both the list and favorites. Unknown id
    /// is a silent no-op.
    pub fn delete_product(&mut self, id: &str) {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        self.favorites.retain(|p| p.id != id);
        if self.products.len() == before {
            tracing::debug!(id, "delete for unknown product ignored");
        } else {
            tracing::debug!(id, "product deleted");
        }
    }

    /// Insert-or-remove by id. Removing restores the prior list exactly;
    /// inserting places the catalog's current version of the product at
    /// the front, so a stale caller copy cannot diverge favorites from
    /// the catalog. Toggling an id absent from the catalog is refused.
    pub fn toggle_favorite(&mut self, product: &Product) {
        if self.favorites.iter().any(|p| p.id == product.id) {
            self.favorites.retain(|p| p.id != product.id);
            return;
        }
        match self.get(&product.id) {
            Some(current) => {
                let current = current.clone();
                self.favorites.insert(0, current);
            }
            None => {
                tracing::warn!(id = %product.id, "favorite toggle for unknown product refused");
            }
        }
    }
}
