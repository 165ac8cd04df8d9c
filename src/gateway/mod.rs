//! Gateway: the main event loop connecting channels to the reply pipeline.
//!
//! Messages from different users are handled concurrently; messages from the
//! same user are handled one at a time, in arrival order.

#[cfg(test)]
mod tests;

use crate::pipeline::Pipeline;
use chuck_core::{
    message::{IncomingMessage, OutgoingMessage},
    traits::Channel,
};
use chuck_jokes::{CatalogStatus, JokeCatalog, JokeFetcher};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tracing::{error, info, warn};

/// The central gateway that routes messages between channels and the pipeline.
pub struct Gateway {
    channels: HashMap<String, Arc<dyn Channel>>,
    pipeline: Pipeline,
    catalog: Arc<JokeCatalog>,
    /// Senders with a message in flight. Later messages queue here.
    active_senders: Mutex<HashMap<String, Vec<IncomingMessage>>>,
}

impl Gateway {
    pub fn new(
        channels: HashMap<String, Arc<dyn Channel>>,
        pipeline: Pipeline,
        catalog: Arc<JokeCatalog>,
    ) -> Self {
        Self {
            channels,
            pipeline,
            catalog,
            active_senders: Mutex::new(HashMap::new()),
        }
    }

    /// Run the main event loop until Ctrl-C.
    ///
    /// Catalog population starts in the background; messages are served
    /// while it is still in flight.
    pub async fn run(self: Arc<Self>, fetcher: JokeFetcher) -> anyhow::Result<()> {
        info!(
            "chuckbot gateway running | channels: {}",
            self.channels.keys().cloned().collect::<Vec<_>>().join(", "),
        );

        let population = chuck_jokes::spawn_population(self.catalog.clone(), fetcher);

        let (tx, mut rx) = mpsc::channel::<IncomingMessage>(256);

        for (name, channel) in &self.channels {
            let mut channel_rx = channel
                .start()
                .await
                .map_err(|e| anyhow::anyhow!("failed to start channel {name}: {e}"))?;
            let tx = tx.clone();
            let channel_name = name.clone();

            tokio::spawn(async move {
                while let Some(msg) = channel_rx.recv().await {
                    if tx.send(msg).await.is_err() {
                        info!("gateway receiver dropped, stopping {channel_name} forwarder");
                        break;
                    }
                }
            });

            info!("Channel started: {name}");
        }

        drop(tx);

        loop {
            tokio::select! {
                maybe = rx.recv() => {
                    let Some(incoming) = maybe else {
                        info!("all channels closed");
                        break;
                    };
                    let gw = self.clone();
                    tokio::spawn(async move {
                        gw.dispatch_message(incoming).await;
                    });
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Received shutdown signal");
                    break;
                }
            }
        }

        self.shutdown(&population).await;
        Ok(())
    }

    /// Queue the message if its sender is busy, otherwise handle it and drain the queue.
    pub(crate) async fn dispatch_message(&self, incoming: IncomingMessage) {
        let sender_key = format!("{}:{}", incoming.channel, incoming.sender_id);

        {
            let mut active = self.active_senders.lock().await;
            if let Some(queue) = active.get_mut(&sender_key) {
                queue.push(incoming);
                return;
            }
            active.insert(sender_key.clone(), Vec::new());
        }

        self.handle_message(incoming).await;

        loop {
            let next = {
                let mut active = self.active_senders.lock().await;
                match active.get_mut(&sender_key) {
                    Some(queue) if !queue.is_empty() => Some(queue.remove(0)),
                    _ => {
                        active.remove(&sender_key);
                        None
                    }
                }
            };

            match next {
                Some(queued) => self.handle_message(queued).await,
                None => break,
            }
        }
    }

    /// Compute the reply for one message and send it back.
    async fn handle_message(&self, incoming: IncomingMessage) {
        let reply = self.pipeline.respond(&incoming).await;
        self.send_text(&incoming, &reply).await;
    }

    async fn shutdown(&self, population: &tokio::task::JoinHandle<()>) {
        info!("Shutting down...");

        if let CatalogStatus::Loading = self.catalog.status() {
            warn!("joke catalog still loading at shutdown");
        }
        population.abort();

        for (name, channel) in &self.channels {
            if let Err(e) = channel.stop().await {
                warn!("failed to stop channel {name}: {e}");
            }
        }

        info!("Shutdown complete.");
    }

    /// Send a plain text message back to the sender.
    async fn send_text(&self, incoming: &IncomingMessage, text: &str) {
        let msg = OutgoingMessage {
            text: text.to_string(),
            reply_target: incoming.reply_target.clone(),
        };

        match self.channels.get(&incoming.channel) {
            Some(channel) => {
                if let Err(e) = channel.send(msg).await {
                    error!("failed to send message: {e}");
                }
            }
            None => warn!("no channel named {} for reply", incoming.channel),
        }
    }
}
