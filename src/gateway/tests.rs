use super::*;
use crate::dispatch::Dispatcher;
use crate::replies;
use async_trait::async_trait;
use chuck_core::{error::ChuckError, traits::Translator, LanguageCode};
use chuck_memory::MemorySessions;
use std::time::Duration;

/// Channel that records everything sent through it.
#[derive(Default)]
struct RecordingChannel {
    sent: Mutex<Vec<OutgoingMessage>>,
}

#[async_trait]
impl Channel for RecordingChannel {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn start(&self) -> Result<mpsc::Receiver<IncomingMessage>, ChuckError> {
        let (_tx, rx) = mpsc::channel(1);
        Ok(rx)
    }

    async fn send(&self, message: OutgoingMessage) -> Result<(), ChuckError> {
        self.sent.lock().await.push(message);
        Ok(())
    }

    async fn stop(&self) -> Result<(), ChuckError> {
        Ok(())
    }
}

/// Prefixes with the target code after a short delay, so queued work overlaps.
struct SlowTranslator;

#[async_trait]
impl Translator for SlowTranslator {
    fn name(&self) -> &str {
        "slow"
    }

    async fn translate(&self, text: &str, target: LanguageCode) -> Result<String, ChuckError> {
        tokio::time::sleep(Duration::from_millis(5)).await;
        Ok(format!("{target}: {text}"))
    }
}

fn gateway(channel: Arc<RecordingChannel>) -> Arc<Gateway> {
    let jokes = (1..=10).map(|i| format!("joke {i}")).collect();
    let catalog = Arc::new(JokeCatalog::from_jokes(jokes).unwrap());
    let pipeline = Pipeline::new(
        Arc::new(MemorySessions::new()),
        Arc::new(SlowTranslator),
        Dispatcher::new(catalog.clone()),
    );
    let mut channels: HashMap<String, Arc<dyn Channel>> = HashMap::new();
    channels.insert("telegram".to_string(), channel);
    Arc::new(Gateway::new(channels, pipeline, catalog))
}

fn incoming(user: &str, chat: &str, text: &str) -> IncomingMessage {
    let mut msg = IncomingMessage::new("telegram", user, text);
    msg.reply_target = Some(chat.to_string());
    msg
}

#[tokio::test]
async fn test_reply_goes_to_reply_target() {
    let channel = Arc::new(RecordingChannel::default());
    let gw = gateway(channel.clone());

    gw.dispatch_message(incoming("7", "100", "3")).await;

    let sent = channel.sent.lock().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].text, "en: joke 3");
    assert_eq!(sent[0].reply_target.as_deref(), Some("100"));
}

#[tokio::test]
async fn test_same_user_messages_keep_order() {
    let channel = Arc::new(RecordingChannel::default());
    let gw = gateway(channel.clone());

    let a = {
        let gw = gw.clone();
        tokio::spawn(async move { gw.dispatch_message(incoming("7", "100", "set language french")).await })
    };
    // Let the first message claim the sender slot before queueing the second.
    tokio::time::sleep(Duration::from_millis(1)).await;
    let b = {
        let gw = gw.clone();
        tokio::spawn(async move { gw.dispatch_message(incoming("7", "100", "2")).await })
    };
    a.await.unwrap();
    b.await.unwrap();

    let sent = channel.sent.lock().await;
    let texts: Vec<&str> = sent.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["fr: No problem", "fr: joke 2"]);
    assert!(gw.active_senders.lock().await.is_empty());
}

#[tokio::test]
async fn test_unknown_channel_is_dropped_quietly() {
    let channel = Arc::new(RecordingChannel::default());
    let gw = gateway(channel.clone());

    let mut msg = incoming("7", "100", "hello there");
    msg.channel = "whatsapp".to_string();
    gw.dispatch_message(msg).await;

    assert!(channel.sent.lock().await.is_empty());
}

#[tokio::test]
async fn test_invalid_request_reply() {
    let channel = Arc::new(RecordingChannel::default());
    let gw = gateway(channel.clone());

    gw.dispatch_message(incoming("7", "100", "hello there")).await;

    let sent = channel.sent.lock().await;
    assert_eq!(sent[0].text, format!("en: {}", replies::INVALID_REQUEST));
}
