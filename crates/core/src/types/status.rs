//! Status and grading enums.

use serde::{Deserialize, Serialize};

/// Refurbishment-quality grade attached to a product.
///
/// Wire format is the capitalized English word (`"Excellent"`), both in
/// product JSON and in the `condition` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    Excellent,
    Good,
    Fair,
}

impl Condition {
    /// The wire string for this grade.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
        }
    }
}

impl core::fmt::Display for Condition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`Condition`] from its wire string.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown condition grade {0:?}")]
pub struct ParseConditionError(String);

impl core::str::FromStr for Condition {
    type Err = ParseConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Excellent" => Ok(Self::Excellent),
            "Good" => Ok(Self::Good),
            "Fair" => Ok(Self::Fair),
            other => Err(ParseConditionError(other.to_owned())),
        }
    }
}

/// Order fulfillment status.
///
/// Status transitions are driven by a fulfillment process outside this
/// service; the storefront only ever creates orders as `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Shipped,
    #[serde(rename = "Out for delivery")]
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    /// The wire string for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Shipped => "Shipped",
            Self::OutForDelivery => "Out for delivery",
            Self::Delivered => "Delivered",
        }
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
