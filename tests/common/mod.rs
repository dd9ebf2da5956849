#![allow(dead_code)]

use riskscan::models::{ChatRequest, RawResponse};
use riskscan::{ErrorKind, Transport};
use serde_json::json;
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use tokio::time::Instant;

/// Replays canned responses in order and records every call.
pub struct SpyTransport {
    responses: Mutex<VecDeque<RawResponse>>,
    repeat_last: bool,
    calls: Mutex<Vec<Instant>>,
    requests: Mutex<Vec<(String, ChatRequest)>>,
}

impl SpyTransport {
    pub fn new(responses: Vec<RawResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            repeat_last: false,
            calls: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Always answers with the same response.
    pub fn always(response: RawResponse) -> Self {
        Self {
            repeat_last: true,
            ..Self::new(vec![response])
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn call_times(&self) -> Vec<Instant> {
        self.calls.lock().unwrap().clone()
    }

    pub fn requests(&self) -> Vec<(String, ChatRequest)> {
        self.requests.lock().unwrap().clone()
    }

    fn next_response(&self) -> Option<RawResponse> {
        let mut responses = self.responses.lock().unwrap();
        if self.repeat_last && responses.len() == 1 {
            return responses.front().cloned();
        }
        responses.pop_front()
    }
}

impl Transport for SpyTransport {
    fn send<'a>(
        &'a self,
        api_key: &'a str,
        request: &'a ChatRequest,
    ) -> Pin<Box<dyn Future<Output = Result<RawResponse, ErrorKind>> + Send + 'a>> {
        Box::pin(async move {
            self.calls.lock().unwrap().push(Instant::now());
            self.requests
                .lock()
                .unwrap()
                .push((api_key.to_string(), request.clone()));

            self.next_response().ok_or_else(|| ErrorKind::Transport {
                status: None,
                message: "connection refused".to_string(),
            })
        })
    }
}

pub fn completion(content: &str) -> RawResponse {
    RawResponse::new(
        200,
        json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "model": "mixtral-8x7b-32768",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }]
        })
        .to_string(),
    )
}

pub fn status(code: u16) -> RawResponse {
    RawResponse::new(code, "")
}
