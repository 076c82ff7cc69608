//! Domain name labels.
//!
//! This is a private module. Its public items are re-exported by the crate
//! root.

use crate::config::Config;

/// Domain name labels have a maximum length of 63 octets.
pub const MAX_LABEL_LEN: usize = 63;

//------------ Validation ----------------------------------------------------

/// Validates a single domain name label under the default configuration.
///
/// A label is one dot-delimited component of a domain name: one to 63 ASCII
/// alphanumeric characters, with hyphens permitted in the interior but not
/// at either end. Returns the input unchanged on success.
///
/// ```
/// use domain_validate::is_domain_label;
///
/// assert_eq!(is_domain_label("example"), Some("example"));
/// assert_eq!(is_domain_label("-example"), None);
/// ```
pub fn is_domain_label(value: &str) -> Option<&str> {
    validate_label(value, &Config::default())
}

/// Validates a label under the given configuration.
///
/// The checks run on raw bytes. Anything outside ASCII fails the character
/// classes, so multi-byte input never gets further than the first offending
/// octet.
pub(crate) fn validate_label<'a>(
    text: &'a str,
    config: &Config,
) -> Option<&'a str> {
    let bytes = text.as_bytes();

    // Reject embedded newlines outright. In particular, a label that is
    // valid except for a trailing newline must not slip through.
    if bytes.contains(&b'\n') {
        return None;
    }
    // Labels are dot-free by definition. A dotted string passed here is a
    // name, not a label.
    if bytes.contains(&b'.') {
        return None;
    }

    match bytes {
        [] => None,
        &[only] => accepts_edge(only, config).then_some(text),
        &[first, ref middle @ .., last] if bytes.len() <= MAX_LABEL_LEN => {
            (accepts_edge(first, config)
                && accepts_edge(last, config)
                && middle.iter().all(|&octet| accepts_inner(octet, config)))
            .then_some(text)
        }
        _ => None,
    }
}

/// Whether `octet` may appear as the first or last octet of a label.
fn accepts_edge(octet: u8, config: &Config) -> bool {
    octet.is_ascii_alphanumeric()
        || (config.allow_underscore && octet == b'_')
}

/// Whether `octet` may appear in the interior of a label.
fn accepts_inner(octet: u8, config: &Config) -> bool {
    octet == b'-' || accepts_edge(octet, config)
}

//============ Tests =========================================================
