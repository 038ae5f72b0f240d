//! Executor: sends a request with a fixed, bounded retry.

use std::sync::Arc;

use crate::api::response::{is_good_response, RawResponse};
use crate::api::transport::{Transport, TransportRequest};

/// Maximum number of transport calls per request (the first try plus one retry).
pub const MAX_ATTEMPTS: u32 = 2;

/// Sends requests through a [`Transport`].
///
/// A bad response is retried once, immediately, whatever made it bad. The
/// last response is always returned, good or not.
#[derive(Clone)]
pub struct Executor {
    transport: Arc<dyn Transport>,
}

impl Executor {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn execute(&self, request: &TransportRequest) -> RawResponse {
        let mut attempt = 1;
        loop {
            let response = self.transport.execute(request).await;
            if is_good_response(&response) || attempt >= MAX_ATTEMPTS {
                return response;
            }

            tracing::debug!(
                attempt,
                max_attempts = MAX_ATTEMPTS,
                status = response.status_code,
                url = %request.url(),
                "Retrying request after bad response"
            );
            attempt += 1;
        }
    }
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::Method;
    use async_trait::async_trait;
    use std::collections::{BTreeMap, VecDeque};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Replays a script of responses, repeating the last one.
    struct ScriptedTransport {
        script: Mutex<VecDeque<RawResponse>>,
        last: RawResponse,
        calls: AtomicUsize,
    }

    impl ScriptedTransport {
        fn new(script: Vec<RawResponse>) -> Arc<Self> {
            let last = script.last().cloned().unwrap_or_default();
            Arc::new(Self {
                script: Mutex::new(script.into()),
                last,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn execute(&self, _request: &TransportRequest) -> RawResponse {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| self.last.clone())
        }
    }

    fn request() -> TransportRequest {
        TransportRequest {
            base_url: "https://inventory.test".to_string(),
            path: "api/v4/products".to_string(),
            method: Method::Get,
            headers: Vec::new(),
            url_segments: BTreeMap::new(),
            query: BTreeMap::new(),
            body: None,
            authenticator: None,
        }
    }

    #[tokio::test]
    async fn test_always_bad_is_attempted_twice() {
        let transport = ScriptedTransport::new(vec![RawResponse::new(500, "")]);
        let executor = Executor::new(transport.clone());
        let response = executor.execute(&request()).await;
        assert_eq!(transport.calls(), 2);
        assert_eq!(response.status_code, 500);
    }

    #[tokio::test]
    async fn test_transport_failure_is_retried() {
        let transport = ScriptedTransport::new(vec![RawResponse::transport_failure("connection refused")]);
        let executor = Executor::new(transport.clone());
        let response = executor.execute(&request()).await;
        assert_eq!(transport.calls(), 2);
        assert!(response.error_exception.is_some());
    }

    #[tokio::test]
    async fn test_good_first_response_is_not_retried() {
        let transport = ScriptedTransport::new(vec![RawResponse::new(200, "{}")]);
        let executor = Executor::new(transport.clone());
        let response = executor.execute(&request()).await;
        assert_eq!(transport.calls(), 1);
        assert_eq!(response.status_code, 200);
    }

    #[tokio::test]
    async fn test_retry_returns_second_response() {
        let transport = ScriptedTransport::new(vec![
            RawResponse::new(503, ""),
            RawResponse::new(200, "ok"),
        ]);
        let executor = Executor::new(transport.clone());
        let response = executor.execute(&request()).await;
        assert_eq!(transport.calls(), 2);
        assert_eq!(response.body, "ok");
    }

    // 201 is outside the allow-list, so it is retried like a failure.
    #[tokio::test]
    async fn test_unlisted_success_code_is_retried() {
        let transport = ScriptedTransport::new(vec![RawResponse::new(201, "")]);
        let executor = Executor::new(transport.clone());
        executor.execute(&request()).await;
        assert_eq!(transport.calls(), 2);
    }
}
