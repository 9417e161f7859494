use serde::{Deserialize, Serialize};

/// Quantifier kind for a line item: a bare count or a weight quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Unit,
    Kilos,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Unit => "unit",
            Unit::Kilos => "kilos",
        }
    }
}

impl core::fmt::Display for Unit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(quantity, unit, product)` triple extracted from an order body.
///
/// Invariants: `quantity > 0`; `product` is non-empty, lowercase and
/// whitespace-collapsed, so downstream grouping by product string is exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub quantity: u32,
    pub unit: Unit,
    pub product: String,
}

/// Structured order derived from one free-text message body.
///
/// Created fresh per parse call and owned by the caller. An empty `items`
/// list means "not an order", never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedOrder {
    pub client: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl ParsedOrder {
    pub fn is_order(&self) -> bool {
        !self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Unit::Unit).unwrap(), "\"unit\"");
        assert_eq!(serde_json::to_string(&Unit::Kilos).unwrap(), "\"kilos\"");
    }

    #[test]
    fn default_order_is_not_an_order() {
        let order = ParsedOrder::default();
        assert_eq!(order.client, None);
        assert!(order.items.is_empty());
        assert!(!order.is_order());
    }
}
