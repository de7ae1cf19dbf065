use crate::ClipboardChangeOrigin;
use async_trait::async_trait;
use std::time::Duration;

/// Tags an expected clipboard change with the component that caused it.
///
/// A mark names the text the change will carry. Only a change observing
/// exactly that text is attributed to the mark; any other change keeps its
/// default origin and leaves the mark in place.
#[async_trait]
pub trait ClipboardChangeOriginPort: Send + Sync {
    /// Expect a change to `expected_text` caused by `origin`. The mark expires after `ttl`.
    async fn set_next_origin(
        &self,
        origin: ClipboardChangeOrigin,
        expected_text: &str,
        ttl: Duration,
    );

    /// Takes the pending mark if `observed` is the text it expects, otherwise
    /// returns `default_origin`.
    async fn consume_origin_or_default(
        &self,
        observed: Option<&str>,
        default_origin: ClipboardChangeOrigin,
    ) -> ClipboardChangeOrigin;

    /// Drops the pending mark, if any.
    async fn clear_next_origin(&self);
}
