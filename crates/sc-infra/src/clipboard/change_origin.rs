use async_trait::async_trait;
use sc_core::ports::ClipboardChangeOriginPort;
use sc_core::ClipboardChangeOrigin;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

pub struct InMemoryClipboardChangeOrigin {
    state: Mutex<Option<OriginState>>,
}

struct OriginState {
    origin: ClipboardChangeOrigin,
    expected_text: String,
    expires_at: Instant,
}

impl InMemoryClipboardChangeOrigin {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(None),
        }
    }
}

impl Default for InMemoryClipboardChangeOrigin {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipboardChangeOriginPort for InMemoryClipboardChangeOrigin {
    async fn set_next_origin(
        &self,
        origin: ClipboardChangeOrigin,
        expected_text: &str,
        ttl: Duration,
    ) {
        let now = Instant::now();
        let expires_at = now.checked_add(ttl).unwrap_or(now);
        let mut state = self.state.lock().await;
        *state = Some(OriginState {
            origin,
            expected_text: expected_text.to_string(),
            expires_at,
        });
    }

    async fn consume_origin_or_default(
        &self,
        observed: Option<&str>,
        default_origin: ClipboardChangeOrigin,
    ) -> ClipboardChangeOrigin {
        let mut state = self.state.lock().await;
        let Some(stored) = state.as_ref() else {
            return default_origin;
        };

        if Instant::now() > stored.expires_at {
            tracing::debug!(origin = stored.origin.as_str(), "change origin mark expired");
            *state = None;
            return default_origin;
        }

        if observed != Some(stored.expected_text.as_str()) {
            return default_origin;
        }

        let origin = stored.origin;
        *state = None;
        origin
    }

    async fn clear_next_origin(&self) {
        self.state.lock().await.take();
    }
}
