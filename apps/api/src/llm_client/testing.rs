//! In-process `TextGenerator` for tests: scripted replies, call counting.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{GenerationError, Provider, TextGenerator};

type Responder = Box<dyn Fn(&str, &str) -> Result<String, GenerationError> + Send + Sync>;

pub struct ScriptedGenerator {
    responder: Responder,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    /// Replies with `f(system, prompt)`.
    pub fn with<F>(f: F) -> Arc<Self>
    where
        F: Fn(&str, &str) -> Result<String, GenerationError> + Send + Sync + 'static,
    {
        Arc::new(Self {
            responder: Box::new(f),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn replying(text: &str) -> Arc<Self> {
        let text = text.to_string();
        Self::with(move |_, _| Ok(text.clone()))
    }

    pub fn failing(status: u16) -> Arc<Self> {
        Self::with(move |_, _| {
            Err(GenerationError::Api {
                status,
                message: "provider unavailable".to_string(),
            })
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, system: &str, prompt: &str) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        (self.responder)(system, prompt)
    }

    fn provider(&self) -> Provider {
        Provider::OpenAi
    }

    fn model(&self) -> &str {
        "scripted"
    }
}
