//! Wire envelopes shared by every back-office endpoint.
//!
//! List endpoints answer `{ "data": { "data": [..], "total": n,
//! "totalPages": n } }`; action endpoints answer `{ "message": "..",
//! "data": .. }`; failures carry `{ "message": ".." }` with a non-2xx
//! status.

use serde::Deserialize;

/// Outer success envelope: `{ "message"?, "data"? }`.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    /// Human-readable outcome, surfaced in notifications.
    #[serde(default)]
    pub message: Option<String>,
    /// Payload; some mutation acknowledgements omit it.
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

/// Body of a non-2xx response.
#[derive(Debug, Clone, Deserialize)]
pub struct FailureBody {
    /// Server-provided failure message.
    #[serde(default)]
    pub message: Option<String>,
}

/// Inner list payload carried in [`Envelope::data`] by list endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBody<T> {
    /// Rows for the requested page, in server order.
    #[serde(default = "Vec::default")]
    pub data: Vec<T>,
    /// Total matching rows across all pages.
    #[serde(default)]
    pub total: u64,
    /// Server-computed page count; older endpoints send it as `pages`.
    #[serde(default, alias = "pages")]
    pub total_pages: Option<u32>,
}

/// One fetched page, normalized for the result cache.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<R> {
    /// Rows in server order.
    pub items: Vec<R>,
    /// Total matching rows across all pages.
    pub total_items: u64,
    /// Page count, always at least 1.
    pub total_pages: u32,
}

impl<R> ListPage<R> {
    /// Normalizes a decoded list body against the requested page size.
    ///
    /// Prefers the server's page count when it is nonzero, otherwise
    /// derives `ceil(total / page_size)`; the result is clamped to at
    /// least 1.
    pub fn from_body(body: ListBody<R>, page_size: u32) -> Self {
        let total_pages = match body.total_pages {
            Some(n) if n > 0 => n,
            _ => total_pages_for(body.total, page_size),
        };
        Self {
            items: body.data,
            total_items: body.total,
            total_pages,
        }
    }
}

/// `ceil(total / page_size)`, clamped to at least 1.
pub fn total_pages_for(total: u64, page_size: u32) -> u32 {
    if total == 0 || page_size == 0 {
        return 1;
    }
    total.div_ceil(u64::from(page_size)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_canonical_list_envelope() {
        let raw = r#"{"data":{"data":["a","b"],"total":12,"totalPages":2}}"#;
        let envelope: Envelope<ListBody<String>> = serde_json::from_str(raw).unwrap();
        let page = ListPage::from_body(envelope.data.unwrap(), 10);
        assert_eq!(page.items, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(page.total_items, 12);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn legacy_pages_key_is_accepted() {
        let raw = r#"{"data":[],"total":30,"pages":3}"#;
        let body: ListBody<String> = serde_json::from_str(raw).unwrap();
        assert_eq!(body.total_pages, Some(3));
    }

    #[test]
    fn missing_total_pages_is_derived_from_total() {
        let raw = r#"{"data":[],"total":25}"#;
        let body: ListBody<String> = serde_json::from_str(raw).unwrap();
        let page = ListPage::from_body(body, 10);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn zero_total_pages_clamps_to_one() {
        let raw = r#"{"data":[],"total":0,"totalPages":0}"#;
        let body: ListBody<String> = serde_json::from_str(raw).unwrap();
        let page = ListPage::from_body(body, 10);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn exact_multiple_does_not_round_up() {
        assert_eq!(total_pages_for(30, 10), 3);
        assert_eq!(total_pages_for(31, 10), 4);
        assert_eq!(total_pages_for(0, 10), 1);
    }

    #[test]
    fn mutation_ack_without_payload_decodes() {
        let raw = r#"{"message":"Seller approved"}"#;
        let envelope: Envelope<serde_json::Value> = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.message.as_deref(), Some("Seller approved"));
        assert!(envelope.data.is_none());
    }
}
