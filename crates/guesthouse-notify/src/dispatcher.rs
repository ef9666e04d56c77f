//! Best-effort dispatch queue for post-booking notifications.
//!
//! The booking flow commits independently; the alert is handed to this
//! queue afterwards and processed by a background worker task. A full
//! queue drops the alert with a warning - notification loss is accepted,
//! booking loss is not.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use guesthouse_entity::notification::BookingNotification;

use crate::push::PushForwarder;
use crate::whatsapp::WhatsAppForwarder;

/// Queues booking notifications for asynchronous delivery.
#[derive(Debug, Clone)]
pub struct NotificationDispatcher {
    /// Producer side of the dispatch queue.
    tx: mpsc::Sender<BookingNotification>,
}

impl NotificationDispatcher {
    /// Spawn the worker task and return the dispatcher handle.
    ///
    /// The worker runs until every dispatcher clone is dropped.
    pub fn spawn(
        whatsapp: WhatsAppForwarder,
        push: PushForwarder,
        capacity: usize,
    ) -> (Self, JoinHandle<()>) {
        let (tx, mut rx) = mpsc::channel::<BookingNotification>(capacity);

        let handle = tokio::spawn(async move {
            while let Some(payload) = rx.recv().await {
                let reference = payload.reference();

                match whatsapp.send(&payload).await {
                    Ok(outcome) => {
                        info!(booking = %reference, outcome = ?outcome, "WhatsApp forwarder finished")
                    }
                    Err(e) => warn!(booking = %reference, error = %e, "WhatsApp forwarder failed"),
                }

                match push.send(&payload).await {
                    Ok(outcome) => {
                        info!(booking = %reference, outcome = ?outcome, "Push forwarder finished")
                    }
                    Err(e) => warn!(booking = %reference, error = %e, "Push forwarder failed"),
                }
            }
            info!("Notification dispatcher stopped");
        });

        (Self { tx }, handle)
    }

    /// Enqueue an alert without waiting for delivery.
    ///
    /// Never blocks and never errors toward the caller; a full or closed
    /// queue only logs a warning.
    pub fn enqueue(&self, payload: BookingNotification) {
        if let Err(e) = self.tx.try_send(payload) {
            warn!(error = %e, "Notification queue full or closed; dropping alert");
        }
    }
}
