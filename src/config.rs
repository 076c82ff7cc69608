//! Validation options.
//!
//! This is a private module. Its public types are re-exported by the crate
//! root.

use crate::{label, name};
use regex::Regex;
use std::collections::HashSet;

//------------ Config --------------------------------------------------------

/// Options controlling domain, hostname, and label validation.
///
/// A value of this type is a pure, immutable bundle of policy: construct it
/// once, then run any number of validations through it, from any number of
/// threads. The free functions [`is_domain`][crate::is_domain],
/// [`is_hostname`][crate::is_hostname], and
/// [`is_domain_label`][crate::is_domain_label] are equivalent to calling the
/// methods on a default configuration.
///
/// ```
/// use domain_validate::Config;
///
/// let config = Config::new().with_allow_underscore(true);
/// assert_eq!(config.is_hostname("_spf"), Some("_spf"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Permit underscores anywhere an alphanumeric character may appear.
    ///
    /// Disabled by default. Underscore labels occur in practice in service
    /// and TXT-style records such as `_spf.example.com`.
    pub allow_underscore: bool,

    /// Permit domains consisting of a single label.
    ///
    /// Disabled by default. Even a single-label domain must still pass the
    /// top-level-domain check, so enabling this accepts `"com"` but not
    /// `"myhost"`.
    pub allow_single_label: bool,

    /// Additional top-level domains to treat as valid.
    ///
    /// Consulted before the built-in table; see [`TldMatcher`].
    pub private_tld: Option<TldMatcher>,
}

impl Config {
    /// Creates a configuration with all options at their defaults.
    #[must_use]
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns the configuration with underscore permission set to `yes`.
    #[must_use]
    pub fn with_allow_underscore(mut self, yes: bool) -> Self {
        self.allow_underscore = yes;
        self
    }

    /// Returns the configuration with single-label permission set to `yes`.
    #[must_use]
    pub fn with_allow_single_label(mut self, yes: bool) -> Self {
        self.allow_single_label = yes;
        self
    }

    /// Returns the configuration with the given private TLD matcher.
    #[must_use]
    pub fn with_private_tld(mut self, matcher: impl Into<TldMatcher>) -> Self {
        self.private_tld = Some(matcher.into());
        self
    }
}

/// # Validation
///
impl Config {
    /// Validates a domain name under this configuration.
    ///
    /// Returns the input unchanged if it is a well-formed domain name whose
    /// final label is a valid top-level domain, and `None` otherwise.
    pub fn is_domain<'a>(&self, value: &'a str) -> Option<&'a str> {
        name::validate_domain(value, self)
    }

    /// Validates a hostname under this configuration.
    ///
    /// Like [`is_domain`][Self::is_domain] but without the top-level-domain
    /// check and without a minimum label count: a single bare label is an
    /// acceptable hostname.
    pub fn is_hostname<'a>(&self, value: &'a str) -> Option<&'a str> {
        name::validate_hostname(value, self)
    }

    /// Validates a single domain name label under this configuration.
    pub fn is_domain_label<'a>(&self, value: &'a str) -> Option<&'a str> {
        label::validate_label(value, self)
    }
}

//------------ TldMatcher ----------------------------------------------------

/// Caller-supplied top-level domains accepted in addition to the registry.
///
/// This lets internal or otherwise non-public zones such as `.internal`
/// validate without forking the built-in table. A label that the matcher
/// accepts is a valid TLD outright; a label it rejects still gets the
/// built-in table as a fallback.
///
/// The two variants treat case differently: [`Set`][Self::Set] membership
/// lower-cases the candidate label before lookup (members must be stored
/// lower-case, which [`TldMatcher::set`] takes care of), while
/// [`Pattern`][Self::Pattern] tests the label in its original case. This
/// asymmetry is long-standing behavior that callers depend on; anchor
/// patterns and use `(?i)` where case folding is wanted.
#[derive(Clone, Debug)]
pub enum TldMatcher {
    /// A fixed set of acceptable TLDs, stored lower-case.
    Set(HashSet<String>),

    /// A regular expression tested against the original-case label.
    Pattern(Regex),
}

impl TldMatcher {
    /// Creates a set matcher from anything yielding string-like members.
    ///
    /// Members are ASCII-lower-cased on insertion so that lookups, which
    /// fold the candidate label, behave case-insensitively.
    pub fn set<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        TldMatcher::Set(
            members
                .into_iter()
                .map(|member| member.as_ref().to_ascii_lowercase())
                .collect(),
        )
    }

    /// Returns whether the matcher accepts `label` as a top-level domain.
    pub fn matches(&self, label: &str) -> bool {
        match self {
            TldMatcher::Set(set) => {
                set.contains(label.to_ascii_lowercase().as_str())
            }
            TldMatcher::Pattern(pattern) => pattern.is_match(label),
        }
    }
}

//--- From

impl From<HashSet<String>> for TldMatcher {
    /// Wraps an existing set. Members must already be lower-case.
    fn from(set: HashSet<String>) -> Self {
        TldMatcher::Set(set)
    }
}

impl From<Regex> for TldMatcher {
    fn from(pattern: Regex) -> Self {
        TldMatcher::Pattern(pattern)
    }
}

//============ Tests =========================================================
