use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::JoinHandle;

use scc_core::config::DeliveryMode;
use scc_core::config::RelayConfig;
use scc_core::contact::ContactMessage;
use thiserror::Error;

use super::mailto::mailto_url;
use super::opener::open_url;
use super::opener::OpenError;
use super::relay::RelayClient;
use super::relay::RelayError;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error(transparent)]
    Relay(#[from] RelayError),
    #[error(transparent)]
    Open(#[from] OpenError),
}

pub trait ContactDelivery: Send + Sync {
    fn mode(&self) -> DeliveryMode;
    fn deliver(&self, message: &ContactMessage, recipient: &str) -> Result<(), DeliveryError>;
}

pub struct RelayDelivery {
    client: RelayClient,
}

impl RelayDelivery {
    pub fn new(client: RelayClient) -> Self {
        Self { client }
    }
}

impl ContactDelivery for RelayDelivery {
    fn mode(&self) -> DeliveryMode {
        DeliveryMode::Relay
    }

    fn deliver(&self, message: &ContactMessage, recipient: &str) -> Result<(), DeliveryError> {
        Ok(self.client.send(message, recipient)?)
    }
}

#[derive(Debug, Default)]
pub struct MailtoDelivery;

impl ContactDelivery for MailtoDelivery {
    fn mode(&self) -> DeliveryMode {
        DeliveryMode::Mailto
    }

    fn deliver(&self, message: &ContactMessage, recipient: &str) -> Result<(), DeliveryError> {
        Ok(open_url(&mailto_url(recipient, message))?)
    }
}

pub fn delivery_for(mode: DeliveryMode, relay: &RelayConfig) -> Arc<dyn ContactDelivery> {
    match mode {
        DeliveryMode::Relay => Arc::new(RelayDelivery::new(RelayClient::new(relay.clone()))),
        DeliveryMode::Mailto => Arc::new(MailtoDelivery),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    pub submission_id: u64,
    pub outcome: Result<(), String>,
}

pub fn spawn_delivery(
    delivery: Arc<dyn ContactDelivery>,
    submission_id: u64,
    message: ContactMessage,
    recipient: String,
    tx: Sender<DeliveryReport>,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let outcome = delivery
            .deliver(&message, &recipient)
            .map_err(|err| err.to_string());
        if let Err(reason) = &outcome {
            log::warn!(
                "event=contact_delivery_failed submission_id={submission_id} mode={} reason={reason}",
                delivery.mode().label()
            );
        }
        let _ = tx.send(DeliveryReport {
            submission_id,
            outcome,
        });
    })
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;

    use super::*;

    struct Recording {
        seen: Mutex<Vec<String>>,
        fail: bool,
    }

    impl ContactDelivery for Recording {
        fn mode(&self) -> DeliveryMode {
            DeliveryMode::Relay
        }

        fn deliver(&self, message: &ContactMessage, recipient: &str) -> Result<(), DeliveryError> {
            if let Ok(mut seen) = self.seen.lock() {
                seen.push(format!("{} -> {recipient}", message.subject));
            }
            if self.fail {
                Err(RelayError::Status {
                    status: 500,
                    body: "boom".to_string(),
                }
                .into())
            } else {
                Ok(())
            }
        }
    }

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Let's talk.".to_string(),
        }
    }

    #[test]
    fn worker_reports_tagged_outcome() {
        let delivery = Arc::new(Recording {
            seen: Mutex::new(Vec::new()),
            fail: false,
        });
        let (tx, rx) = mpsc::channel();
        spawn_delivery(delivery.clone(), 7, message(), "owner@example.com".to_string(), tx)
            .join()
            .unwrap();

        assert_eq!(
            rx.recv().unwrap(),
            DeliveryReport {
                submission_id: 7,
                outcome: Ok(()),
            }
        );
        assert_eq!(
            *delivery.seen.lock().unwrap(),
            vec!["Hello -> owner@example.com".to_string()]
        );
    }

    #[test]
    fn worker_reports_failure_reason() {
        let delivery = Arc::new(Recording {
            seen: Mutex::new(Vec::new()),
            fail: true,
        });
        let (tx, rx) = mpsc::channel();
        spawn_delivery(delivery, 3, message(), "owner@example.com".to_string(), tx)
            .join()
            .unwrap();
        assert_eq!(
            rx.recv().unwrap().outcome,
            Err("mail relay answered 500: boom".to_string())
        );
    }

    #[test]
    fn dropped_receiver_does_not_panic_the_worker() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let delivery = Arc::new(Recording {
            seen: Mutex::new(Vec::new()),
            fail: false,
        });
        assert!(
            spawn_delivery(delivery, 1, message(), "owner@example.com".to_string(), tx)
                .join()
                .is_ok()
        );
    }

    #[test]
    fn mode_selects_strategy() {
        let relay = RelayConfig::default();
        assert_eq!(delivery_for(DeliveryMode::Relay, &relay).mode(), DeliveryMode::Relay);
        assert_eq!(delivery_for(DeliveryMode::Mailto, &relay).mode(), DeliveryMode::Mailto);
    }

    #[test]
    fn unconfigured_relay_fails_with_readable_reason() {
        let delivery = RelayDelivery::new(RelayClient::new(RelayConfig::default()));
        let err = delivery.deliver(&message(), "owner@example.com").unwrap_err();
        assert_eq!(err.to_string(), "mail relay is not configured");
    }
}
