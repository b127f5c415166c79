//! # Shipping
//!
//! Wraps an [`Order`] with a ship date and a delivery cost picked from two
//! fixed tiers.
//!
//! ## Cost Selection
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  set_ship_cost(is_urgent)                                               │
//! │       │                                                                 │
//! │       ├── true  ──► cost = 5.45, count_urgent += 1                     │
//! │       │                                                                 │
//! │       └── false ──► cost = 3.95, count_urgent unchanged                │
//! │                                                                         │
//! │  Before the first call the cost is unset and reads as 0.00.            │
//! │  Every call overwrites the previous cost.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::Order;

/// Fixed cost of standard delivery (3.95).
pub const STANDARD_COST: Money = Money::from_major_minor(3, 95);

/// Fixed cost of urgent delivery (5.45).
pub const URGENT_COST: Money = Money::from_major_minor(5, 45);

// =============================================================================
// Shipping Tier
// =============================================================================

/// The two delivery options a customer can choose between.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingTier {
    #[default]
    Standard,
    Urgent,
}

impl ShippingTier {
    /// Maps the "urgent shipping" checkbox onto a tier.
    #[inline]
    pub const fn from_urgent(is_urgent: bool) -> Self {
        if is_urgent {
            ShippingTier::Urgent
        } else {
            ShippingTier::Standard
        }
    }

    #[inline]
    pub const fn cost(&self) -> Money {
        match self {
            ShippingTier::Standard => STANDARD_COST,
            ShippingTier::Urgent => URGENT_COST,
        }
    }
}

// =============================================================================
// Shipping
// =============================================================================

/// Delivery details for one order.
#[derive(Debug, Clone)]
pub struct Shipping {
    order: Order,
    ship_date: DateTime<Utc>,
    /// `None` until `set_ship_cost` is first called.
    tier: Option<ShippingTier>,
    /// Urgent selections made on this instance over its whole life.
    count_urgent: u32,
}

impl Shipping {
    pub fn new(order: Order, ship_date: DateTime<Utc>) -> Self {
        Shipping {
            order,
            ship_date,
            tier: None,
            count_urgent: 0,
        }
    }

    /// Selects the delivery cost.
    ///
    /// Urgent sets 5.45 and bumps the urgent counter; otherwise 3.95 and the
    /// counter is left alone. Calling again overwrites the cost and, when
    /// urgent, counts again.
    pub fn set_ship_cost(&mut self, is_urgent: bool) {
        let tier = ShippingTier::from_urgent(is_urgent);
        if tier == ShippingTier::Urgent {
            self.count_urgent += 1;
        }
        self.tier = Some(tier);
    }

    /// Current delivery cost; zero if no tier has been selected yet.
    pub fn calc_ship_cost(&self) -> Money {
        self.ship_cost().unwrap_or_default()
    }

    /// Current delivery cost, or `None` if no tier has been selected yet.
    pub fn ship_cost(&self) -> Option<Money> {
        self.tier.map(|tier| tier.cost())
    }

    /// The tier picked by the most recent `set_ship_cost`.
    pub fn tier(&self) -> Option<ShippingTier> {
        self.tier
    }

    pub fn count_urgent(&self) -> u32 {
        self.count_urgent
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn ship_date(&self) -> DateTime<Utc> {
        self.ship_date
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
