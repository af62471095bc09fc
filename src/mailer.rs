use serde::Serialize;
use thiserror::Error;

use crate::contact::LeadPayload;

const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// The four opaque identifiers the EmailJS collaborator needs. They are baked
/// in at compile time from the build environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MailConfig {
    pub service_id: &'static str,
    pub owner_template: &'static str,
    pub confirmation_template: &'static str,
    pub public_key: &'static str,
}

impl MailConfig {
    /// Returns `None` if any identifier is missing, so a submission can fail
    /// fast without attempting a send.
    pub fn from_build_env() -> Option<MailConfig> {
        Some(MailConfig {
            service_id: option_env!("EMAILJS_SERVICE_ID")?,
            owner_template: option_env!("EMAILJS_TEMPLATE_OWNER")?,
            confirmation_template: option_env!("EMAILJS_TEMPLATE_CONFIRMATION")?,
            public_key: option_env!("EMAILJS_PUBLIC_KEY")?,
        })
    }
}

#[derive(Error, Debug)]
pub enum MailError {
    #[error("mail delivery is not configured")]
    NotConfigured,
    #[error("mail transport failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("mail service rejected the send with status {0}")]
    Rejected(u16),
}

/// Narrow seam over the transactional-email collaborator: one call per
/// template, same payload for both.
pub trait Mailer {
    fn send(
        &self,
        template_id: &str,
        params: &LeadPayload,
    ) -> impl std::future::Future<Output = Result<(), MailError>>;
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a LeadPayload,
}

/// Production mailer speaking the EmailJS REST contract.
#[derive(Debug, Clone)]
pub struct EmailJsMailer {
    client: reqwest::Client,
    config: MailConfig,
}

impl EmailJsMailer {
    pub fn new(config: MailConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

impl Mailer for EmailJsMailer {
    async fn send(&self, template_id: &str, params: &LeadPayload) -> Result<(), MailError> {
        let body = SendRequest {
            service_id: self.config.service_id,
            template_id,
            user_id: self.config.public_key,
            template_params: params,
        };
        let response = self.client.post(EMAILJS_SEND_URL).json(&body).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            log::warn!("emailjs rejected template {template_id}: {status}");
            Err(MailError::Rejected(status.as_u16()))
        }
    }
}
