//! Tests for [`gbot_telegram::dispatch`]: addressed-command filtering and the in-flight limit.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use gbot_core::{Chat, Handler, HandlerResponse, Message, User};
use gbot_telegram::dispatch;
use handler_chain::HandlerChain;
use tokio::sync::Semaphore;

fn create_test_message(content: &str) -> Message {
    Message {
        id: "1".to_string(),
        user: User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: None,
            last_name: None,
        },
        chat: Chat {
            id: 456,
            chat_type: "group".to_string(),
        },
        content: content.to_string(),
        message_type: "text".to_string(),
        created_at: Utc::now(),
    }
}

/// Counts `/gemini` invocations.
struct GeminiCounter {
    hits: Arc<AtomicUsize>,
}

#[async_trait]
impl Handler for GeminiCounter {
    async fn handle(&self, message: &Message) -> gbot_core::Result<HandlerResponse> {
        match message.command() {
            Some(cmd) if cmd.is("gemini") => {
                self.hits.fetch_add(1, Ordering::SeqCst);
                Ok(HandlerResponse::Stop)
            }
            _ => Ok(HandlerResponse::Continue),
        }
    }
}

/// Sleeps while tracking how many invocations run at once.
struct SlowHandler {
    active: Arc<AtomicUsize>,
    peak: Arc<AtomicUsize>,
}

#[async_trait]
impl Handler for SlowHandler {
    async fn handle(&self, _message: &Message) -> gbot_core::Result<HandlerResponse> {
        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(50)).await;
        self.active.fetch_sub(1, Ordering::SeqCst);
        Ok(HandlerResponse::Stop)
    }
}

fn counting_chain() -> (HandlerChain, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let chain = HandlerChain::new().add_handler(Arc::new(GeminiCounter { hits: hits.clone() }));
    (chain, hits)
}

async fn peak_concurrency(limiter: Option<Arc<Semaphore>>) -> usize {
    let active = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));
    let chain = HandlerChain::new().add_handler(Arc::new(SlowHandler {
        active: active.clone(),
        peak: peak.clone(),
    }));

    let handles: Vec<_> = (0..2)
        .map(|_| {
            dispatch(
                chain.clone(),
                create_test_message("/imgen a cat"),
                Some("me_bot"),
                limiter.clone(),
            )
            .unwrap()
        })
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }

    peak.load(Ordering::SeqCst)
}

/// **Test: A command addressed to another bot never reaches the chain.**
#[tokio::test]
async fn test_command_for_other_bot_dropped() {
    let (chain, hits) = counting_chain();

    let handle = dispatch(chain, create_test_message("/gemini@other_bot hi"), Some("me_bot"), None);

    assert!(handle.is_none());
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

/// **Test: Commands addressed to this bot (any case) or to no bot are handled.**
#[tokio::test]
async fn test_command_for_this_bot_handled() {
    let (chain, hits) = counting_chain();

    for text in ["/gemini@me_bot hi", "/gemini@ME_BOT hi", "/gemini hi"] {
        dispatch(chain.clone(), create_test_message(text), Some("me_bot"), None)
            .unwrap()
            .await
            .unwrap();
    }

    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

/// **Test: Without a known bot username, addressed commands are not filtered.**
#[tokio::test]
async fn test_unknown_username_does_not_filter() {
    let (chain, hits) = counting_chain();

    dispatch(chain, create_test_message("/gemini@other_bot hi"), None, None)
        .unwrap()
        .await
        .unwrap();

    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

/// **Test: With a limit of one, two slow invocations never overlap.**
#[tokio::test]
async fn test_in_flight_limit_serializes_invocations() {
    let peak = peak_concurrency(Some(Arc::new(Semaphore::new(1)))).await;
    assert_eq!(peak, 1);
}

/// **Test: Without a limit, slow invocations run concurrently.**
#[tokio::test]
async fn test_unbounded_invocations_overlap() {
    let peak = peak_concurrency(None).await;
    assert_eq!(peak, 2);
}
