//! Item matcher: scans one line for repeated `<quantity> <description>` runs.
//!
//! Hand-written scan over the line rather than a regex, which keeps the
//! handling of adjacent digit/description runs explicit and easy to
//! property-test.

/// Raw candidate emitted by the matcher, before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawItem<'a> {
    pub quantity: &'a str,
    pub description: &'a str,
}

/// Scan a line left to right for `<digit run> <description>` pairs.
///
/// A description runs from the whitespace after the digits up to the next
/// digit run or the end of the line, so multiple items on one line are all
/// captured. A digit run not followed by whitespace, or followed by no
/// description text, is skipped. Lines without digits yield an empty
/// sequence; that is expected for prose lines, not an error.
pub fn match_items(line: &str) -> Vec<RawItem<'_>> {
    let bytes = line.as_bytes();
    let mut items = Vec::new();
    let mut pos = 0;

    while let Some(start) = next_digit(bytes, pos) {
        let mut end = start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }

        let Some(first) = line[end..].chars().next() else {
            // Trailing digit run with nothing after it.
            break;
        };
        if !first.is_whitespace() {
            pos = end;
            continue;
        }

        let desc_end = next_digit(bytes, end).unwrap_or(bytes.len());
        let description = line[end..desc_end].trim();
        pos = desc_end;
        if description.is_empty() {
            continue;
        }

        items.push(RawItem {
            quantity: &line[start..end],
            description,
        });
    }

    items
}

/// Index of the next ASCII digit at or after `from`.
///
/// UTF-8 continuation bytes are never ASCII digits, so the returned index is
/// always a char boundary.
fn next_digit(bytes: &[u8], from: usize) -> Option<usize> {
    bytes
        .get(from..)?
        .iter()
        .position(|b| b.is_ascii_digit())
        .map(|p| from + p)
}
