use std::time::Duration;

use scc_core::config::RelayConfig;
use scc_core::contact::ContactMessage;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("mail relay is not configured")]
    MissingCredentials,
    #[error("mail relay answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("mail relay unreachable: {0}")]
    Transport(String),
    #[error("failed to encode relay request: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: TemplateParams,
}

impl RelayRequest {
    pub fn new(config: &RelayConfig, message: &ContactMessage, recipient: &str) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            user_id: config.public_key.clone(),
            template_params: TemplateParams {
                from_name: message.name.clone(),
                from_email: message.email.clone(),
                subject: message.subject.clone(),
                message: message.message.clone(),
                to_email: recipient.to_string(),
            },
        }
    }
}

pub struct RelayClient {
    agent: ureq::Agent,
    config: RelayConfig,
}

impl RelayClient {
    pub fn new(config: RelayConfig) -> Self {
        let timeout = Duration::from_secs(config.timeout_secs.max(1));
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout(timeout)
            .build();
        Self { agent, config }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Posts one message. Only a 200 answer counts as delivered.
    pub fn send(&self, message: &ContactMessage, recipient: &str) -> Result<(), RelayError> {
        if !self.config.has_credentials() {
            return Err(RelayError::MissingCredentials);
        }
        let request = RelayRequest::new(&self.config, message, recipient);
        let body = serde_json::to_string(&request)?;
        log::info!(
            "event=relay_send endpoint={} template={}",
            self.config.endpoint,
            self.config.template_id
        );

        match self
            .agent
            .post(&self.config.endpoint)
            .set("Content-Type", "application/json")
            .send_string(&body)
        {
            Ok(response) if response.status() == 200 => Ok(()),
            Ok(response) => Err(RelayError::Status {
                status: response.status(),
                body: response.into_string().unwrap_or_default(),
            }),
            Err(ureq::Error::Status(status, response)) => Err(RelayError::Status {
                status,
                body: response.into_string().unwrap_or_default(),
            }),
            Err(err) => Err(RelayError::Transport(err.to_string())),
        }
    }
}
