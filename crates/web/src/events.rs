use async_trait::async_trait;
use storage::models::Runner;
use thiserror::Error;
use tokio::sync::mpsc;

/// Output channel name for runner registration events, matching the broker
/// binding this service feeds.
pub const NEW_RUNNER_REGISTRATION: &str = "new_runner_registration";

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Event channel closed")]
    ChannelClosed,
}

/// Fire-and-forget notification of "runner registered" events. No
/// acknowledgment or delivery guarantee is consumed by the service.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish_runner_registered(&self, runner: &Runner) -> Result<(), PublishError>;
}

/// Publisher backed by a bounded in-process channel. The receiving half is
/// drained by [`forward_to_binding`], which hands each payload to the outbound
/// binding; the broker behind the binding is an external collaborator.
pub struct ChannelPublisher {
    tx: mpsc::Sender<Runner>,
}

impl ChannelPublisher {
    pub fn new(buffer: usize) -> (Self, mpsc::Receiver<Runner>) {
        let (tx, rx) = mpsc::channel(buffer);
        (Self { tx }, rx)
    }
}

#[async_trait]
impl EventPublisher for ChannelPublisher {
    async fn publish_runner_registered(&self, runner: &Runner) -> Result<(), PublishError> {
        self.tx
            .send(runner.clone())
            .await
            .map_err(|_| PublishError::ChannelClosed)
    }
}

/// Drains the registration channel and emits each event payload on the
/// outbound binding.
pub async fn forward_to_binding(mut rx: mpsc::Receiver<Runner>) {
    while let Some(runner) = rx.recv().await {
        match serde_json::to_string(&runner) {
            Ok(payload) => {
                tracing::info!(channel = NEW_RUNNER_REGISTRATION, %payload, "runner registered")
            }
            Err(e) => tracing::error!("Failed to serialize registration event: {}", e),
        }
    }
}


#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;

    /// Records every published event, for asserting on side effects in tests.
    #[derive(Default)]
    pub struct RecordingPublisher {
        pub events: Mutex<Vec<Runner>>,
    }

    #[async_trait]
    impl EventPublisher for RecordingPublisher {
        async fn publish_runner_registered(&self, runner: &Runner) -> Result<(), PublishError> {
            self.events.lock().unwrap().push(runner.clone());
            Ok(())
        }
    }
}
