use std::collections::BTreeMap;

use serde::Serialize;

use pedidos_messaging::Message;
use pedidos_parser::Unit;

/// Aggregated demand for one `(product, unit)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductTotal {
    pub product: String,
    pub unit: Unit,
    pub total_quantity: u64,
    /// Number of line items contributing to the total.
    pub entries: u64,
}

/// Sum order items across messages, grouped by `(product, unit)`.
///
/// Callers pass the message set they want counted (the store already filters
/// by direction and date range). The same product ordered by count and by
/// weight yields two rows. Output is sorted by product then unit so report
/// responses are stable.
pub fn summarize<'a>(messages: impl IntoIterator<Item = &'a Message>) -> Vec<ProductTotal> {
    let mut totals: BTreeMap<(String, Unit), (u64, u64)> = BTreeMap::new();

    for message in messages {
        for item in &message.items {
            let slot = totals
                .entry((item.product.clone(), item.unit))
                .or_insert((0, 0));
            slot.0 += u64::from(item.quantity);
            slot.1 += 1;
        }
    }

    totals
        .into_iter()
        .map(|((product, unit), (total_quantity, entries))| ProductTotal {
            product,
            unit,
            total_quantity,
            entries,
        })
        .collect()
}
