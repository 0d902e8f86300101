//! Domain entities shared across the stores and state machines.

mod order;
mod product;
mod profile;
mod style;

pub use order::{Order, OrderItem, OrderStatus, ShippingInfo};
pub use product::{Product, ProductDraft, DEFAULT_TITLE, PLACEHOLDER_IMAGE};
pub use profile::{BodyStats, ProfileStats, UserProfile};
pub use style::{FashionStyle, ProductCategory};
