//! Product normalizer: raw `(quantity, description)` pairs into order items.

use crate::order::{OrderItem, Unit};

/// Normalize one raw candidate into an [`OrderItem`].
///
/// Returns `None` (candidate discarded, never an error) when the quantity
/// does not parse or is zero, or when no product name remains after the
/// quantifier is stripped. Quantities must be strictly positive; a typed
/// `0` is treated as noise rather than a zero-quantity line item.
pub fn normalize_item(quantity_text: &str, description_text: &str) -> Option<OrderItem> {
    let quantity: u32 = quantity_text.parse().ok()?;
    if quantity == 0 {
        return None;
    }

    let normalized = normalize_product(description_text);
    let unit = if has_kilo_token(&normalized) {
        Unit::Kilos
    } else {
        Unit::Unit
    };
    let product = match unit {
        Unit::Kilos => strip_quantifier(&normalized),
        Unit::Unit => normalized.as_str(),
    };
    if product.is_empty() {
        return None;
    }

    Some(OrderItem {
        quantity,
        unit,
        product: product.to_string(),
    })
}

/// Lowercase a description and collapse internal whitespace runs to a single
/// space, trimming the ends. Idempotent.
pub fn normalize_product(raw: &str) -> String {
    raw.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}

fn has_kilo_token(normalized: &str) -> bool {
    normalized.split(' ').any(|token| token == "kilo" || token == "kilos")
}

/// Strip a leading `kilo(s) de ` quantifier, leaving only the product name.
///
/// A description that is nothing but the quantifier strips to empty and the
/// candidate is discarded by the caller.
fn strip_quantifier(normalized: &str) -> &str {
    if let Some(rest) = normalized
        .strip_prefix("kilos de ")
        .or_else(|| normalized.strip_prefix("kilo de "))
    {
        rest
    } else if matches!(normalized, "kilo" | "kilos" | "kilo de" | "kilos de") {
        ""
    } else {
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_description_is_a_unit_item() {
        let item = normalize_item("2", "Arroz").unwrap();
        assert_eq!(item.quantity, 2);
        assert_eq!(item.unit, Unit::Unit);
        assert_eq!(item.product, "arroz");
    }

    #[test]
    fn kilos_prefix_sets_unit_and_strips_quantifier() {
        let item = normalize_item("5", "kilos de queso").unwrap();
        assert_eq!(item.unit, Unit::Kilos);
        assert_eq!(item.product, "queso");
    }

    #[test]
    fn singular_kilo_is_recognized() {
        let item = normalize_item("1", "kilo de papa").unwrap();
        assert_eq!(item.unit, Unit::Kilos);
        assert_eq!(item.product, "papa");
    }

    #[test]
    fn whitespace_is_collapsed_and_lowercased() {
        let item = normalize_item("3", "  Queso   Fresco ").unwrap();
        assert_eq!(item.product, "queso fresco");
    }

    #[test]
    fn zero_quantity_is_discarded() {
        assert_eq!(normalize_item("0", "arroz"), None);
    }

    #[test]
    fn overflowing_quantity_is_discarded() {
        assert_eq!(normalize_item("99999999999999999999", "arroz"), None);
    }

    #[test]
    fn bare_quantifier_leaves_no_product() {
        assert_eq!(normalize_item("5", "kilos"), None);
        assert_eq!(normalize_item("5", "kilos de"), None);
    }

    #[test]
    fn kilo_token_elsewhere_keeps_description_as_product() {
        // Only a leading `kilo(s) de ` is stripped; the unit still flips.
        let item = normalize_item("2", "queso en kilos").unwrap();
        assert_eq!(item.unit, Unit::Kilos);
        assert_eq!(item.product, "queso en kilos");
    }

    #[test]
    fn kilo_as_substring_of_a_word_is_not_a_token() {
        let item = normalize_item("2", "kilometros de cable").unwrap();
        assert_eq!(item.unit, Unit::Unit);
        assert_eq!(item.product, "kilometros de cable");
    }

    #[test]
    fn normalize_product_is_idempotent() {
        let once = normalize_product("  Kilos   De  QUESO ");
        assert_eq!(normalize_product(&once), once);
    }
}
