//! Drives a [`NotificationQueue`] on the tokio clock.
//!
//! The queue runs inside a spawned task; callers talk to it through a cheap
//! cloneable handle and receive [`NotificationEvent`]s on a channel.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};
use wildora_core::achievement::Achievement;
use wildora_core::notification::{NotificationEvent, NotificationQueue, NotificationTiming};

enum Command {
    Enqueue(Vec<Achievement>),
    Dismiss,
}

#[derive(Clone)]
pub struct NotificationCenter {
    commands: mpsc::UnboundedSender<Command>,
}

impl NotificationCenter {
    /// Spawns the driver task. The task ends once every handle is dropped
    /// and the queue has drained.
    pub fn spawn(timing: NotificationTiming) -> (Self, mpsc::UnboundedReceiver<NotificationEvent>) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        tokio::spawn(run(NotificationQueue::new(timing), command_rx, event_tx));
        (
            Self {
                commands: command_tx,
            },
            event_rx,
        )
    }

    /// Queues one evaluation pass worth of unlocks.
    pub fn enqueue(&self, achievements: Vec<Achievement>) {
        if achievements.is_empty() {
            return;
        }
        if self.commands.send(Command::Enqueue(achievements)).is_err() {
            tracing::warn!("[NotificationCenter] Driver stopped, notifications dropped");
        }
    }

    /// User closed the visible notification.
    pub fn dismiss(&self) {
        let _ = self.commands.send(Command::Dismiss);
    }
}

async fn run(
    mut queue: NotificationQueue,
    mut commands: mpsc::UnboundedReceiver<Command>,
    events: mpsc::UnboundedSender<NotificationEvent>,
) {
    let origin = Instant::now();
    let mut open = true;

    loop {
        let deadline = queue.next_deadline();
        if !open && deadline.is_none() {
            break;
        }

        tokio::select! {
            command = commands.recv(), if open => {
                let now = origin.elapsed();
                match command {
                    Some(Command::Enqueue(batch)) => {
                        tracing::debug!("[NotificationCenter] Queued {} unlock(s)", batch.len());
                        queue.enqueue_batch(now, batch);
                    }
                    Some(Command::Dismiss) => {
                        if let Some(event) = queue.dismiss(now) {
                            forward(&events, event);
                        }
                    }
                    None => open = false,
                }
                for event in queue.advance(now) {
                    forward(&events, event);
                }
            }
            _ = sleep_until(origin + deadline.unwrap_or(Duration::ZERO)), if deadline.is_some() => {
                for event in queue.advance(origin.elapsed()) {
                    forward(&events, event);
                }
            }
        }
    }
    tracing::debug!("[NotificationCenter] Driver finished");
}

fn forward(events: &mpsc::UnboundedSender<NotificationEvent>, event: NotificationEvent) {
    // Receiver gone means nobody is rendering; keep draining the queue.
    let _ = events.send(event);
}
