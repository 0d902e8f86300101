//! The shopper's profile.

use serde::{Deserialize, Serialize};

/// Aggregate counters shown on the profile screen.
///
/// `orders` is always derived from the order list length when the
/// profile is exposed; the stored value is never authoritative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub works: u32,
    pub likes: u32,
    pub orders: u32,
}

/// Body measurements in centimeters/kilograms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyStats {
    pub height: u32,
    pub weight: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bust: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waist: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hips: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub avatar: String,
    /// One-way flag: false → true only. No revoke operation exists.
    pub is_merchant: bool,
    pub stats: ProfileStats,
    pub body_stats: BodyStats,
}
