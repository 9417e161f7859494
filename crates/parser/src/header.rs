//! Header extractor: optional `cliente:` / `pedido:` markers on the first line.

/// Literal keyword token opening the client field.
pub const CLIENT_MARKER: &str = "cliente:";

/// Literal keyword token opening the order field on the same line.
pub const ORDER_MARKER: &str = "pedido:";

/// Result of inspecting the first line of a message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header<'a> {
    /// Client name between the markers, trimmed, original casing preserved.
    pub client: Option<String>,
    /// Remaining text to feed to the item matcher: the tail after the order
    /// marker, or the entire first line when no client marker matched.
    pub leftover: Option<&'a str>,
}

/// Inspect the first line of a message.
///
/// Marker matching is ASCII-case-insensitive. The client marker is only
/// recognized at the start of the line, so a line with the markers reversed
/// extracts no client and is scanned whole for items; a second `cliente:`
/// further into the line is ordinary text.
pub fn extract(first_line: &str) -> Header<'_> {
    if !starts_with_ignore_ascii_case(first_line, CLIENT_MARKER) {
        return Header {
            client: None,
            leftover: Some(first_line),
        };
    }

    let after_client = &first_line[CLIENT_MARKER.len()..];
    match find_ignore_ascii_case(after_client, ORDER_MARKER) {
        Some(at) => {
            let name = after_client[..at].trim();
            let leftover = after_client[at + ORDER_MARKER.len()..].trim();
            Header {
                client: some_nonempty(name),
                leftover: if leftover.is_empty() { None } else { Some(leftover) },
            }
        }
        None => Header {
            client: some_nonempty(after_client.trim()),
            leftover: None,
        },
    }
}

fn some_nonempty(s: &str) -> Option<String> {
    if s.is_empty() { None } else { Some(s.to_string()) }
}

fn starts_with_ignore_ascii_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len() && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// Byte offset of the first ASCII-case-insensitive occurrence of `needle`.
///
/// The needle is pure ASCII, so a match can only start on an ASCII byte and
/// the returned offset is always a char boundary of `haystack`.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if n.is_empty() || h.len() < n.len() {
        return None;
    }
    h.windows(n.len()).position(|w| w.eq_ignore_ascii_case(n))
}
