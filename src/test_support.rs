use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::{ports::LlmService, DomainError, Message};

enum Reply {
    Text(String),
    Fail(fn() -> DomainError),
    Hang,
}

/// Scripted provider that records every conversation it is sent.
pub struct FakeLlm {
    reply: Reply,
    calls: Mutex<Vec<Vec<Message>>>,
}

impl FakeLlm {
    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_reply(Reply::Text(text.into()))
    }

    pub fn failing(err: fn() -> DomainError) -> Self {
        Self::with_reply(Reply::Fail(err))
    }

    pub fn hanging() -> Self {
        Self::with_reply(Reply::Hang)
    }

    pub fn calls(&self) -> Vec<Vec<Message>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmService for FakeLlm {
    async fn chat(&self, messages: &[Message]) -> Result<String, DomainError> {
        self.calls.lock().unwrap().push(messages.to_vec());
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Fail(err) => Err(err()),
            Reply::Hang => std::future::pending().await,
        }
    }
}

/// In-memory sink for `tracing` output. `install` makes it the subscriber
/// for the current thread until the guard drops.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
