//! URL state codec.
//!
//! Decomposes the page URL into its path and query parameters and composes
//! new URLs that keep every non-reserved parameter (pagination, filters,
//! `_popup`, ...) while replacing the reserved `o`/`item`/`items` keys.
//!
//! Parsing never fails: a segment without `=` is a parameter with an empty
//! value, empty segments (`a=1&&b=2`) carry no parameter and are dropped,
//! and a `#fragment` is not part of the query protocol.

use crate::model::query::{ITEM_KEY, OPERATION_KEY};
use crate::model::{ItemId, Navigation, Operation, QueryParameter};
use std::borrow::Cow;

/// Parsed form of one page URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlStateCodec {
    path: String,
    params: Vec<QueryParameter>,
}

impl UrlStateCodec {
    /// Decompose a relative or absolute URL.
    pub fn parse(url: &str) -> Self {
        let url = url.split_once('#').map_or(url, |(before, _)| before);
        let (path, query) = url.split_once('?').unwrap_or((url, ""));
        Self {
            path: path.to_string(),
            params: parse_query(query),
        }
    }

    /// Everything before the query string.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// All parameters in URL order, reserved ones included.
    pub fn params(&self) -> &[QueryParameter] {
        &self.params
    }

    /// First value of `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.name() == name)
            .map(QueryParameter::value)
    }

    /// Every value of `name`, in URL order.
    pub fn values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.params
            .iter()
            .filter(move |p| p.name() == name)
            .map(QueryParameter::value)
    }

    /// Whether `name` occurs at all, with or without a value.
    pub fn has_param(&self, name: &str) -> bool {
        self.params.iter().any(|p| p.name() == name)
    }

    /// Operation of this page load (first recognised `o` value).
    pub fn operation(&self) -> Option<Operation> {
        self.values(OPERATION_KEY).find_map(Operation::parse)
    }

    /// Raw `item` value of this page load.
    pub fn target_item(&self) -> Option<&str> {
        self.get(ITEM_KEY)
    }

    /// Percent-decoded `item` value as an id.
    ///
    /// A value that does not decode to UTF-8 is taken as is.
    pub fn target_id(&self) -> Option<ItemId> {
        let raw = self.target_item()?;
        let decoded = urlencoding::decode(raw).map_or_else(|_| raw.to_string(), Cow::into_owned);
        ItemId::new(decoded).ok()
    }

    /// Parameters that survive into every composed URL.
    pub fn preserved_params(&self) -> impl Iterator<Item = &QueryParameter> {
        self.params.iter().filter(|p| !p.is_reserved())
    }

    /// Path plus all non-reserved parameters, original order and bytes.
    ///
    /// `?` is only added when at least one parameter survives.
    pub fn base_url(&self) -> String {
        let mut url = self.path.clone();
        for (i, param) in self.preserved_params().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(param.as_raw());
        }
        url
    }

    /// Base URL followed by `extra` segments.
    ///
    /// The segments are appended verbatim; callers encode values. The first
    /// separator is `?` when the base URL has no query, `&` otherwise.
    pub fn compose_url<S: AsRef<str>>(&self, extra: &[S]) -> String {
        let mut url = self.base_url();
        let mut has_query = url.contains('?');
        for segment in extra {
            url.push(if has_query { '&' } else { '?' });
            url.push_str(segment.as_ref());
            has_query = true;
        }
        url
    }

    /// URL of a navigation request relative to this page.
    pub fn url_for(&self, navigation: &Navigation) -> String {
        self.compose_url(&navigation.query_params())
    }
}

/// Split a query string (without the leading `?`) into parameters.
pub fn parse_query(query: &str) -> Vec<QueryParameter> {
    query
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(QueryParameter::parse)
        .collect()
}

/// Operation-less form of `url`.
pub fn base_url(url: &str) -> String {
    UrlStateCodec::parse(url).base_url()
}

/// `url` with its reserved keys replaced by `extra`.
pub fn compose_url<S: AsRef<str>>(url: &str, extra: &[S]) -> String {
    UrlStateCodec::parse(url).compose_url(extra)
}

// ===== Tests =====

#[cfg(test)]
#[path = "url_codec_tests.rs"]
mod tests;
