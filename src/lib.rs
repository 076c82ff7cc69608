//! Syntactic validation of domain names, hostnames, and labels.
//!
//! This crate decides whether a string is a well-formed DNS domain name,
//! hostname, or single label by the conventions of RFC 952, RFC 1035, and
//! RFC 1123, and hands back the input unchanged on success. Validation is
//! purely syntactic: nothing is ever resolved, IP addresses are not
//! recognized, and non-ASCII input is rejected rather than IDNA-converted.
//! Internationalized names must be given in their punycode form.
//!
//! The three operations are [`is_domain`], [`is_hostname`], and
//! [`is_domain_label`]. Each returns `Option<&str>`: `Some` with the
//! validated input on success, `None` on failure. Absence is the only
//! failure signal; the operations deliberately do not report *why* a string
//! was rejected.
//!
//! ```
//! use domain_validate::is_domain;
//!
//! assert_eq!(is_domain("www.example.com"), Some("www.example.com"));
//! assert_eq!(is_domain("www.example..com"), None);
//! ```
//!
//! Policy beyond the defaults goes through a [`Config`], which carries the
//! same three operations as methods:
//!
//! ```
//! use domain_validate::{Config, TldMatcher};
//!
//! let config = Config::new()
//!     .with_allow_underscore(true)
//!     .with_private_tld(TldMatcher::set(["internal"]));
//! assert_eq!(
//!     config.is_domain("_ldap.corp.internal"),
//!     Some("_ldap.corp.internal"),
//! );
//! ```
//!
//! Whether a label is a registered public top-level domain can also be
//! asked directly via [`is_tld`], which consults a built-in snapshot of the
//! IANA root zone database.

pub use self::config::{Config, TldMatcher};
pub use self::label::{is_domain_label, MAX_LABEL_LEN};
pub use self::name::{is_domain, is_hostname, MAX_NAME_LEN};
pub use self::tld::is_tld;

mod config;
mod label;
mod name;
mod tld;
