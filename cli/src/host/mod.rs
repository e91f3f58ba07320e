//! In-process message channel between the UI and the battery host.
//!
//! The host owns a [`BatteryApi`] implementation and serves one call at a
//! time from a local task. Callers talk to it through [`BatteryApiClient`],
//! which only ever sees JSON-encoded requests and replies.

mod client;
mod messenger;
mod server;

pub use client::BatteryApiClient;
pub use messenger::Messenger;
pub use server::{BatteryApi, ReaderHost};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use messenger::HostMessage;

const QUEUE_DEPTH: usize = 64;

pub struct HostHandle {
    messenger: Messenger,
    task: JoinHandle<()>,
}

/// Register the Battery API handlers and start serving.
///
/// Must be called from within a [`tokio::task::LocalSet`].
pub fn spawn_host<A: BatteryApi + 'static>(api: A) -> HostHandle {
    let (tx, rx) = mpsc::channel::<HostMessage>(QUEUE_DEPTH);
    let task = tokio::task::spawn_local(server::run_host(api, rx));
    HostHandle {
        messenger: Messenger::new(tx),
        task,
    }
}

impl HostHandle {
    pub fn messenger(&self) -> Messenger {
        self.messenger.clone()
    }

    /// Stop the host and wait for it to finish the call in progress.
    pub async fn shutdown(self) {
        self.messenger.request_shutdown().await;
        if let Err(e) = self.task.await {
            debug!(error = %e, "Host task ended abnormally");
        }
    }
}
