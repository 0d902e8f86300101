//! Shared test utilities.

#![allow(dead_code)]

use std::sync::Once;

use chrono::{TimeZone, Utc};
use fitloom_core::model::{FashionStyle, Order, OrderItem, OrderStatus, Product, ShippingInfo};

static INIT: Once = Once::new();

/// Initialize tracing once for the whole test binary. Respects
/// RUST_LOG so noisy debug output stays opt-in.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Minimal product for store tests.
pub fn product(id: &str, price: u32, style: FashionStyle) -> Product {
    Product {
        id: id.to_string(),
        title: format!("item-{id}"),
        price,
        image: "https://picsum.photos/300/400".to_string(),
        tags: vec![style],
        category: None,
        description: None,
        stock: None,
        sales: None,
        store_name: None,
        store_address: None,
    }
}

/// Single-item order snapshotting the given product.
pub fn order(id: &str, product: &Product) -> Order {
    Order {
        id: id.to_string(),
        items: vec![OrderItem {
            product_id: product.id.clone(),
            title: product.title.clone(),
            image: product.image.clone(),
            price: product.price,
        }],
        total: product.price,
        status: OrderStatus::Pending,
        shipping_info: ShippingInfo {
            name: "测试用户".to_string(),
            phone: "13800000000".to_string(),
            address: "上海市某区某路1号".to_string(),
        },
        tracking_number: None,
        date: Utc.with_ymd_and_hms(2026, 8, 26, 12, 0, 0).unwrap(),
    }
}
