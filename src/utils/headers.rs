// Start of file: /src/utils/headers.rs

// * Selection of the inbound headers that must follow a request into every
// * downstream call (request id plus the platform identity headers).

use std::collections::BTreeMap;

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use tracing::warn;

/// Headers always forwarded, regardless of configuration.
pub const PLATFORM_HEADERS: [&str; 6] = [
    "x-request-id",
    "miauserid",
    "miausergroups",
    "client-type",
    "isbackoffice",
    "miauserproperties",
];

/// Headers picked from an inbound request, keyed by the configured name.
///
/// A `BTreeMap` keeps the iteration order stable, so two selections over the
/// same input always serialize identically.
pub type ProxyHeaders = BTreeMap<String, String>;

/// One configured header name: the casing used in the output plus the
/// lowercase form used for lookups.
#[derive(Clone, Debug)]
struct ForwardedName {
    configured: String,
    lookup: String,
}

/// Decides which headers of an inbound request get forwarded downstream.
///
/// Built once from configuration and read-only afterwards, so a single
/// instance can be shared across requests without locking.
#[derive(Clone, Debug)]
pub struct HeaderSelector {
    names: Vec<ForwardedName>,
}

impl Default for HeaderSelector {
    fn default() -> Self {
        Self::new(std::iter::empty::<&str>())
    }
}

impl HeaderSelector {
    /// Builds a selector from the platform headers plus `additional` names.
    ///
    /// Names are trimmed, blanks are ignored and duplicates (compared
    /// case-insensitively) keep their first spelling.
    pub fn new<I, S>(additional: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<ForwardedName> = Vec::with_capacity(PLATFORM_HEADERS.len());

        let candidates = PLATFORM_HEADERS
            .iter()
            .map(|name| name.to_string())
            .chain(additional.into_iter().map(|name| name.as_ref().trim().to_string()));

        for configured in candidates {
            if configured.is_empty() {
                continue;
            }

            let lookup: String = configured.to_ascii_lowercase();
            if HeaderName::from_bytes(lookup.as_bytes()).is_err() {
                warn!("Ignoring invalid header name to proxy: '{configured}'");
                continue;
            }
            if names.iter().any(|known| known.lookup == lookup) {
                continue;
            }

            names.push(ForwardedName { configured, lookup });
        }

        Self { names }
    }

    /// Builds a selector from a delimited list such as the
    /// `ADDITIONAL_HEADERS_TO_PROXY` variable. Commas, semicolons and
    /// whitespace all separate names; an empty string adds nothing.
    pub fn from_delimited(additional: &str) -> Self {
        Self::new(
            additional
                .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
                .filter(|name| !name.is_empty()),
        )
    }

    /// The forwarding set, in configuration order and original casing.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|name| name.configured.as_str())
    }

    /// Returns the forwarded subset of `headers`.
    ///
    /// Lookups are case-insensitive, output keys use the configured casing.
    /// Only the first value of a repeated header is kept and values that are
    /// not visible ASCII are skipped.
    pub fn select(&self, headers: &HeaderMap) -> ProxyHeaders {
        self.names
            .iter()
            .filter_map(|name| {
                let value: &HeaderValue = headers.get(name.lookup.as_str())?;
                let value: &str = value.to_str().ok()?;
                Some((name.configured.clone(), value.to_owned()))
            })
            .collect()
    }
}

/// Turns a selection back into an `http` header map for an outbound request.
/// Entries that are not valid header names or values are dropped.
pub fn to_header_map(headers: &ProxyHeaders) -> HeaderMap {
    headers
        .iter()
        .filter_map(|(name, value)| {
            let name: HeaderName = HeaderName::from_bytes(name.as_bytes()).ok()?;
            let value: HeaderValue = HeaderValue::from_str(value).ok()?;
            Some((name, value))
        })
        .collect()
}


// End of file: /src/utils/headers.rs
