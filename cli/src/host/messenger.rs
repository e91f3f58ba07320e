use tokio::sync::{mpsc, oneshot};

use super::client::ClientError;

pub(crate) enum HostMessage {
    Call {
        channel: String,
        payload: String,
        reply: oneshot::Sender<String>,
    },
    Shutdown,
}

/// Sends raw encoded messages to the host on a named channel.
#[derive(Clone)]
pub struct Messenger {
    tx: mpsc::Sender<HostMessage>,
}

impl Messenger {
    pub(crate) fn new(tx: mpsc::Sender<HostMessage>) -> Self {
        Self { tx }
    }

    pub async fn send(&self, channel: &str, payload: String) -> Result<String, ClientError> {
        let (reply, reply_rx) = oneshot::channel();
        self.tx
            .send(HostMessage::Call {
                channel: channel.to_string(),
                payload,
                reply,
            })
            .await
            .map_err(|_| ClientError::Disconnected)?;

        reply_rx.await.map_err(|_| ClientError::Disconnected)
    }

    pub(crate) async fn request_shutdown(&self) {
        let _ = self.tx.send(HostMessage::Shutdown).await;
    }
}
