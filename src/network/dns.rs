//! Text form of a DNS search order.
//!
//! Servers are joined with `" - "`. The delimiter is matched exactly so
//! that lists copied from earlier sessions keep parsing the same way.

/// Separator between DNS servers in the text form.
pub const DNS_DELIMITER: &str = " - ";

/// Splits a DNS list on [`DNS_DELIMITER`].
///
/// Items are not trimmed or validated; an empty input yields an empty list.
///
/// # Examples
///
/// ```
/// use ipchanger::network::parse_dns_list;
///
/// assert_eq!(parse_dns_list("8.8.8.8 - 8.8.4.4"), vec!["8.8.8.8", "8.8.4.4"]);
/// ```
#[must_use]
pub fn parse_dns_list(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(DNS_DELIMITER).map(str::to_string).collect()
}

/// Joins DNS servers with [`DNS_DELIMITER`].
#[must_use]
pub fn format_dns_list<S: AsRef<str>>(servers: &[S]) -> String {
    servers
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(DNS_DELIMITER)
}
