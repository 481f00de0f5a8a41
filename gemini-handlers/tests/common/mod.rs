//! Shared test doubles: a recording [`Bot`] and a scripted [`GenerativeModel`] that write into
//! one event log, so tests can assert the interleaving of outbound messages and backend calls.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use gbot_core::{Bot, Chat, Message, Result as GbotResult, User};
use gemini_client::{GeminiError, GenerationRequest, GenerationResponse, GenerativeModel};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Text(String),
    Photo(Vec<u8>),
    BackendCall(GenerationRequest),
}

pub type EventLog = Arc<Mutex<Vec<Event>>>;

pub fn event_log() -> EventLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Bot that records every outbound text and photo; never touches the network.
pub struct RecordingBot {
    log: EventLog,
}

impl RecordingBot {
    pub fn new(log: EventLog) -> Self {
        Self { log }
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, _chat: &Chat, text: &str) -> GbotResult<()> {
        self.log.lock().unwrap().push(Event::Text(text.to_string()));
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> GbotResult<()> {
        self.send_message(&message.chat, text).await
    }

    async fn send_photo(&self, _chat: &Chat, photo: Vec<u8>) -> GbotResult<()> {
        self.log.lock().unwrap().push(Event::Photo(photo));
        Ok(())
    }
}

/// Model that records each request and answers from a queue; an empty queue yields an empty response.
pub struct ScriptedModel {
    log: EventLog,
    responses: Mutex<VecDeque<Result<GenerationResponse, GeminiError>>>,
}

impl ScriptedModel {
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            responses: Mutex::new(VecDeque::new()),
        }
    }

    pub fn respond(self, response: GenerationResponse) -> Self {
        self.responses.lock().unwrap().push_back(Ok(response));
        self
    }

    pub fn fail(self, error: GeminiError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }
}

#[async_trait]
impl GenerativeModel for ScriptedModel {
    async fn generate_content(
        &self,
        request: &GenerationRequest,
    ) -> gemini_client::Result<GenerationResponse> {
        self.log
            .lock()
            .unwrap()
            .push(Event::BackendCall(request.clone()));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(GenerationResponse::default()))
    }
}

pub fn backend_calls(log: &EventLog) -> Vec<GenerationRequest> {
    log.lock()
        .unwrap()
        .iter()
        .filter_map(|e| match e {
            Event::BackendCall(r) => Some(r.clone()),
            _ => None,
        })
        .collect()
}

pub fn outbound(log: &EventLog) -> Vec<Event> {
    log.lock()
        .unwrap()
        .iter()
        .filter(|e| !matches!(e, Event::BackendCall(_)))
        .cloned()
        .collect()
}

pub fn make_message(content: &str) -> Message {
    Message {
        id: "msg_1".to_string(),
        user: User {
            id: 123,
            username: Some("user".to_string()),
            first_name: Some("User".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 456,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        message_type: "text".to_string(),
        created_at: Utc::now(),
    }
}

pub fn api_error() -> GeminiError {
    GeminiError::Api {
        status: 503,
        message: "overloaded".to_string(),
    }
}
