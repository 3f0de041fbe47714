//! Store-owned flat records read and written by the client.
//!
//! The hosted document store is authoritative for all of these; the client
//! only snapshots them through live subscriptions and writes individual
//! field updates back. Fields are permissive (`#[serde(default)]`) because
//! the store enforces no schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One line in a user's cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Store-assigned document id.
    pub id: String,
    /// Id of the catalog product this line refers to.
    pub product_id: String,
    pub title: String,
    /// Unit price snapshotted at add-to-cart time.
    pub unit_price: f64,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub image_url: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

impl CartItem {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Sum of line totals across a cart snapshot.
#[must_use]
pub fn cart_subtotal(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::line_total).sum()
}

/// Lifecycle of a placed order, advanced only by the store backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Processing => write!(f, "processing"),
            OrderStatus::Shipped => write!(f, "shipped"),
            OrderStatus::Delivered => write!(f, "delivered"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A placed order as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub items: Vec<CartItem>,
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Returns `true` once the order has reached a terminal status.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.status, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

/// Loyalty tier derived from accumulated points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoyaltyTier {
    Bronze,
    Silver,
    Gold,
}

impl std::fmt::Display for LoyaltyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoyaltyTier::Bronze => write!(f, "bronze"),
            LoyaltyTier::Silver => write!(f, "silver"),
            LoyaltyTier::Gold => write!(f, "gold"),
        }
    }
}

/// Points threshold at which an account reaches Silver.
pub const SILVER_THRESHOLD: u64 = 500;
/// Points threshold at which an account reaches Gold.
pub const GOLD_THRESHOLD: u64 = 2000;

/// A user's loyalty balance as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoyaltyAccount {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub points: u64,
}

impl LoyaltyAccount {
    /// Tier implied by the current points balance.
    #[must_use]
    pub fn tier(&self) -> LoyaltyTier {
        if self.points >= GOLD_THRESHOLD {
            LoyaltyTier::Gold
        } else if self.points >= SILVER_THRESHOLD {
            LoyaltyTier::Silver
        } else {
            LoyaltyTier::Bronze
        }
    }
}

/// Points earned for an order: one point per whole currency unit spent.
/// Negative totals (refund adjustments) earn nothing.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn points_for_order(order_total: f64) -> u64 {
    if order_total <= 0.0 {
        0
    } else {
        order_total.floor() as u64
    }
}

/// An in-app notification document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Number of unread notifications in a snapshot, for the badge counter.
#[must_use]
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}
