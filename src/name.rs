//! Domain names and hostnames.
//!
//! This is a private module. Its public items are re-exported by the crate
//! root.
//!
//! A name is a sequence of labels separated by dots. Both operations here
//! split the input on `.` and run every component through label validation;
//! they differ only in the cross-label policy applied afterwards. Splitting
//! keeps empty components, so leading, trailing, and doubled dots are not
//! special-cased anywhere: each produces an empty label, and an empty label
//! never validates.

use crate::config::Config;
use crate::{label, tld};
use tracing::trace;

/// Domain names have a maximum length of 255 octets.
pub const MAX_NAME_LEN: usize = 255;

//------------ Validation ----------------------------------------------------

/// Validates a domain name under the default configuration.
///
/// The input must split into at least two well-formed labels, and its final
/// label must be a registered top-level domain. Returns the input unchanged
/// on success and `None` on any failure; the reason for a failure is not
/// reported.
///
/// ```
/// use domain_validate::is_domain;
///
/// assert_eq!(is_domain("example.com"), Some("example.com"));
/// assert_eq!(is_domain("example.com."), None); // trailing dot
/// assert_eq!(is_domain("216.17.184.1"), None); // "1" is not a TLD
/// ```
pub fn is_domain(value: &str) -> Option<&str> {
    validate_domain(value, &Config::default())
}

/// Validates a hostname under the default configuration.
///
/// Hostnames follow the same per-label rules as domain names but carry no
/// cross-label policy: a single bare label is acceptable and the final
/// label need not be a registered top-level domain.
///
/// ```
/// use domain_validate::is_hostname;
///
/// assert_eq!(is_hostname("aa"), Some("aa"));
/// assert_eq!(is_hostname("myhost.example"), Some("myhost.example"));
/// ```
pub fn is_hostname(value: &str) -> Option<&str> {
    validate_hostname(value, &Config::default())
}

pub(crate) fn validate_domain<'a>(
    value: &'a str,
    config: &Config,
) -> Option<&'a str> {
    let count = validate_labels(value, config)?;
    if count < 2 && !config.allow_single_label {
        trace!("rejecting {:?}: single-label domains not allowed", value);
        return None;
    }
    let tld = value.rsplit('.').next()?;
    if !tld::tld_is_valid(tld, config) {
        return None;
    }
    Some(value)
}

pub(crate) fn validate_hostname<'a>(
    value: &'a str,
    config: &Config,
) -> Option<&'a str> {
    validate_labels(value, config)?;
    Some(value)
}

/// Checks the aggregate length and every label, returning the label count.
///
/// The length ceiling applies to the raw string before splitting, so a
/// delimiter-only string of acceptable length is not rejected here; its
/// empty labels fail individually instead.
fn validate_labels(value: &str, config: &Config) -> Option<usize> {
    if value.is_empty() || value.len() > MAX_NAME_LEN {
        trace!("rejecting name of {} octets", value.len());
        return None;
    }
    let mut count = 0;
    for part in value.split('.') {
        label::validate_label(part, config)?;
        count += 1;
    }
    Some(count)
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::TldMatcher;
    use regex::Regex;
    use rstest::rstest;

    #[rstest]
    #[case("example.com")]
    #[case("www.example.com")]
    #[case("EXAMPLE.COM")]
    #[case("a.b.c.d.e.f.example.org")]
    #[case("3com.com")]
    #[case("example.xn--p1ai")]
    fn accepts_valid_domains(#[case] name: &str) {
        assert_eq!(is_domain(name), Some(name));
    }

    #[rstest]
    #[case("")]
    #[case("example")]
    #[case("example.com.")]
    #[case(".example.com")]
    #[case("example..com")]
    #[case("example...com")]
    #[case("-example.com")]
    #[case("example-.com")]
    #[case("exa mple.com")]
    #[case("example.c-m")]
    #[case("example.neely")]
    #[case("216.17.184.1")]
    fn rejects_invalid_domains(#[case] name: &str) {
        assert_eq!(is_domain(name), None);
    }

    #[test]
    fn aggregate_length_ceiling() {
        // 63 + 1 + 63 + 1 + 63 + 1 + 59 + 1 + 3 = 255 octets.
        let ok = format!(
            "{}.{}.{}.{}.com",
            "a".repeat(63),
            "b".repeat(63),
            "c".repeat(63),
            "d".repeat(59)
        );
        assert_eq!(ok.len(), MAX_NAME_LEN);
        assert_eq!(is_domain(&ok), Some(ok.as_str()));

        let long = format!("{}com", "a.".repeat(128));
        assert!(long.len() > MAX_NAME_LEN);
        assert_eq!(is_domain(&long), None);

        // Well over the ceiling even with valid labels throughout.
        let very_long = format!("{}info", "aaa.".repeat(64));
        assert_eq!(very_long.len(), 260);
        assert_eq!(is_domain(&very_long), None);
    }

    #[test]
    fn single_label_policy() {
        assert_eq!(is_domain("com"), None);
        let permissive = Config::new().with_allow_single_label(true);
        // The TLD check still applies to the one label there is.
        assert_eq!(validate_domain("com", &permissive), Some("com"));
        assert_eq!(validate_domain("myhost", &permissive), None);
    }

    #[test]
    fn private_tld_set() {
        assert_eq!(is_domain("myhost.neely"), None);
        let config = Config::new().with_private_tld(TldMatcher::set(["neely"]));
        assert_eq!(
            validate_domain("myhost.neely", &config),
            Some("myhost.neely")
        );
        // The built-in table still works alongside the private set.
        assert_eq!(
            validate_domain("example.com", &config),
            Some("example.com")
        );
    }

    #[test]
    fn private_tld_pattern() {
        let config = Config::new()
            .with_private_tld(Regex::new(r"^(neely|lab)$").unwrap());
        assert_eq!(
            validate_domain("myhost.neely", &config),
            Some("myhost.neely")
        );
        assert_eq!(validate_domain("myhost.lab", &config), Some("myhost.lab"));
        // Patterns see the original case.
        assert_eq!(validate_domain("myhost.NEELY", &config), None);
        assert_eq!(validate_domain("myhost.dev-lab", &config), None);
    }

    #[test]
    fn hostnames_skip_cross_label_policy() {
        assert_eq!(is_hostname("aa"), Some("aa"));
        assert_eq!(is_hostname("myhost.neely"), Some("myhost.neely"));
        assert_eq!(is_hostname("www.example.com"), Some("www.example.com"));
        // Per-label rules still apply.
        assert_eq!(is_hostname(""), None);
        assert_eq!(is_hostname("my host"), None);
        assert_eq!(is_hostname("host."), None);
        assert_eq!(is_hostname("_spf"), None);
    }

    #[test]
    fn hostname_underscore_policy() {
        let permissive = Config::new().with_allow_underscore(true);
        assert_eq!(validate_hostname("_spf", &permissive), Some("_spf"));
        assert_eq!(
            validate_hostname("_spf.example.com", &permissive),
            Some("_spf.example.com")
        );
    }

    #[test]
    fn success_is_identity_and_idempotent() {
        let first = is_domain("Www.Example.Com");
        assert_eq!(first, Some("Www.Example.Com"));
        let second = first.and_then(is_domain);
        assert_eq!(second, first);
    }
}
