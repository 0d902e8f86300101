//! Order store: append and in-place update only, never deletes.

use crate::model::Order;

#[derive(Debug, Default)]
pub struct OrderStore {
    orders: Vec<Order>,
}

impl OrderStore {
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Prepend a new order. The caller promises a unique id; a
    /// duplicate is refused as a no-op.
    pub fn create_order(&mut self, order: Order) {
        if self.orders.iter().any(|o| o.id == order.id) {
            tracing::warn!(id = %order.id, "order with duplicate id refused");
            return;
        }
        tracing::debug!(id = %order.id, total = order.total, "order placed");
        self.orders.insert(0, order);
    }

    /// Replace the order matching `id` (status/tracking changes).
    /// Unknown id is a silent no-op.
    pub fn update_order(&mut self, order: Order) {
        match self.orders.iter_mut().find(|o| o.id == order.id) {
            Some(slot) => *slot = order,
            None => {
                tracing::debug!(id = %order.id, "update for unknown order ignored");
            }
        }
    }
}
