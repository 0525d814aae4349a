//! Scripted transport for unit tests.

use crate::{
    api::{HttpResponse, HttpTransport},
    error::{ClientError, Result},
};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

enum Reply {
    Response(HttpResponse),
    Error(String),
    /// Never completes.
    Pending,
}

/// Answers GETs and POSTs from separate queues and records every call.
#[derive(Default)]
pub struct FakeTransport {
    get_replies: Mutex<VecDeque<Reply>>,
    post_replies: Mutex<VecDeque<Reply>>,
    gets: Mutex<Vec<String>>,
    posts: Mutex<Vec<(String, Value)>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_get(&self, status: u16, body: &str) {
        self.get_replies
            .lock()
            .unwrap()
            .push_back(Reply::Response(HttpResponse::new(status, body)));
    }

    pub fn push_get_error(&self, message: &str) {
        self.get_replies
            .lock()
            .unwrap()
            .push_back(Reply::Error(message.to_string()));
    }

    pub fn push_post(&self, status: u16, body: &str) {
        self.post_replies
            .lock()
            .unwrap()
            .push_back(Reply::Response(HttpResponse::new(status, body)));
    }

    pub fn push_post_error(&self, message: &str) {
        self.post_replies
            .lock()
            .unwrap()
            .push_back(Reply::Error(message.to_string()));
    }

    pub fn push_post_pending(&self) {
        self.post_replies.lock().unwrap().push_back(Reply::Pending);
    }

    pub fn gets(&self) -> Vec<String> {
        self.gets.lock().unwrap().clone()
    }

    pub fn posts(&self) -> Vec<(String, Value)> {
        self.posts.lock().unwrap().clone()
    }

    async fn next(queue: &Mutex<VecDeque<Reply>>) -> Result<HttpResponse> {
        let reply = queue.lock().unwrap().pop_front();
        match reply {
            Some(Reply::Response(response)) => Ok(response),
            Some(Reply::Error(message)) => Err(ClientError::Transport(message)),
            Some(Reply::Pending) => std::future::pending().await,
            None => Err(ClientError::Transport("no scripted reply".into())),
        }
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        self.gets.lock().unwrap().push(url.to_string());
        Self::next(&self.get_replies).await
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse> {
        self.posts
            .lock()
            .unwrap()
            .push((url.to_string(), body.clone()));
        Self::next(&self.post_replies).await
    }
}
