//! `pedidos-parser` — free-text order parser.
//!
//! Extracts a customer name and a list of `(quantity, unit, product)` line
//! items from loosely structured chat text, tolerating missing delimiters,
//! inconsistent casing and multi-item lines. The parser is pure, synchronous
//! and stateless: no I/O, no shared state, safe to call concurrently, and it
//! never fails — malformed input degrades to partial or empty results.

pub mod header;
pub mod lines;
pub mod matcher;
pub mod normalize;
pub mod order;

pub use order::{OrderItem, ParsedOrder, Unit};

/// Parse one message body into a [`ParsedOrder`].
///
/// Pipeline: tokenize into lines, extract the optional `cliente:` header from
/// the first line, then run the item matcher and product normalizer over the
/// header's leftover text and every remaining line, concatenating items in
/// line order then match order.
pub fn parse_order(body: &str) -> ParsedOrder {
    let lines = lines::tokenize(body);
    let Some((first, rest)) = lines.split_first() else {
        return ParsedOrder::default();
    };

    let header = header::extract(first);
    let mut items = Vec::new();
    for line in header.leftover.into_iter().chain(rest.iter().copied()) {
        for raw in matcher::match_items(line) {
            if let Some(item) = normalize::normalize_item(raw.quantity, raw.description) {
                items.push(item);
            }
        }
    }

    ParsedOrder {
        client: header.client,
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: u32, unit: Unit, product: &str) -> OrderItem {
        OrderItem {
            quantity,
            unit,
            product: product.to_string(),
        }
    }

    #[test]
    fn client_header_with_single_item() {
        let order = parse_order("cliente: Ana pedido: 2 arroz");
        assert_eq!(order.client.as_deref(), Some("Ana"));
        assert_eq!(order.items, vec![item(2, Unit::Unit, "arroz")]);
    }

    #[test]
    fn multiple_lines_without_header() {
        let order = parse_order("2 centro\n5 kilos de queso");
        assert_eq!(order.client, None);
        assert_eq!(
            order.items,
            vec![item(2, Unit::Unit, "centro"), item(5, Unit::Kilos, "queso")]
        );
    }

    #[test]
    fn empty_body_is_not_an_order() {
        let order = parse_order("");
        assert_eq!(order, ParsedOrder::default());
        assert!(!order.is_order());
    }

    #[test]
    fn prose_without_digits_is_not_an_order() {
        let order = parse_order("hola, ¿cómo estás?");
        assert_eq!(order.client, None);
        assert!(order.items.is_empty());
    }

    #[test]
    fn multi_item_header_line_with_unit_detection() {
        let order = parse_order("cliente: Luis pedido: 3 kilos de papa 1 pan");
        assert_eq!(order.client.as_deref(), Some("Luis"));
        assert_eq!(
            order.items,
            vec![item(3, Unit::Kilos, "papa"), item(1, Unit::Unit, "pan")]
        );
    }

    #[test]
    fn header_leftover_precedes_following_lines() {
        let order = parse_order("cliente: Ana pedido: 2 arroz\n1 pan");
        assert_eq!(
            order.items,
            vec![item(2, Unit::Unit, "arroz"), item(1, Unit::Unit, "pan")]
        );
    }

    #[test]
    fn first_line_without_markers_is_still_scanned() {
        // A failed client match must not drop the line.
        let order = parse_order("2 arroz\n1 pan");
        assert_eq!(order.client, None);
        assert_eq!(
            order.items,
            vec![item(2, Unit::Unit, "arroz"), item(1, Unit::Unit, "pan")]
        );
    }

    #[test]
    fn reversed_markers_scan_the_whole_line() {
        let order = parse_order("pedido: 2 arroz cliente: Ana");
        assert_eq!(order.client, None);
        // "arroz cliente: ana" is the description run up to the end of line.
        assert_eq!(order.items, vec![item(2, Unit::Unit, "arroz cliente: ana")]);
    }

    #[test]
    fn client_only_header_with_items_on_later_lines() {
        let order = parse_order("cliente: Ana\n4 tortillas");
        assert_eq!(order.client.as_deref(), Some("Ana"));
        assert_eq!(order.items, vec![item(4, Unit::Unit, "tortillas")]);
    }

    #[test]
    fn zero_quantities_are_dropped() {
        let order = parse_order("0 arroz\n2 pan");
        assert_eq!(order.items, vec![item(2, Unit::Unit, "pan")]);
    }

    #[test]
    fn mixed_prose_and_order_lines_degrade_to_partial_result() {
        let order = parse_order("buenas tardes\n3 huevos\ngracias!");
        assert_eq!(order.items, vec![item(3, Unit::Unit, "huevos")]);
    }

    #[test]
    fn parse_is_deterministic() {
        let body = "cliente: Luis pedido: 3 kilos de papa 1 pan\n2 centro";
        assert_eq!(parse_order(body), parse_order(body));
    }

    #[test]
    fn line_independence() {
        let a = "2 centro";
        let b = "5 kilos de queso";
        let joined = parse_order(&format!("{a}\n{b}"));
        let mut expected = parse_order(a).items;
        expected.extend(parse_order(b).items);
        assert_eq!(joined.items, expected);
    }

    #[test]
    fn parsed_products_are_already_normalized() {
        let order = parse_order("2  Queso   FRESCO\n1 KILOS  DE  Papa");
        for item in &order.items {
            assert_eq!(normalize::normalize_product(&item.product), item.product);
        }
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: the parser never panics and is deterministic on
            /// arbitrary input.
            #[test]
            fn parse_never_panics_and_is_deterministic(body in any::<String>()) {
                let first = parse_order(&body);
                let second = parse_order(&body);
                prop_assert_eq!(first, second);
            }

            /// Property: every produced item satisfies the output invariants
            /// (positive quantity, non-empty pre-normalized product).
            #[test]
            fn items_satisfy_invariants(body in any::<String>()) {
                let order = parse_order(&body);
                for item in &order.items {
                    prop_assert!(item.quantity > 0);
                    prop_assert!(!item.product.is_empty());
                    prop_assert_eq!(
                        normalize::normalize_product(&item.product),
                        item.product.clone()
                    );
                }
            }

            /// Property: concatenating two simple order lines yields the union
            /// of their items, in original order.
            #[test]
            fn line_independence(
                qty_a in 1u32..1000,
                qty_b in 1u32..1000,
                product_a in "[a-z]{1,12}",
                product_b in "[a-z]{1,12}"
            ) {
                let a = format!("{qty_a} {product_a}");
                let b = format!("{qty_b} {product_b}");
                let joined = parse_order(&format!("{a}\n{b}"));
                let mut expected = parse_order(&a).items;
                expected.extend(parse_order(&b).items);
                prop_assert_eq!(joined.items, expected);
            }
        }
    }
}
