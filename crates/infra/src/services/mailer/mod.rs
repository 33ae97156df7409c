use crate::config::SmtpConfig;
use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

/// A rendered notification email, ready for the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

#[async_trait::async_trait]
pub trait IMailer: Send + Sync {
    async fn send(&self, email: &EmailMessage) -> anyhow::Result<()>;
}

/// SMTP mailer over a STARTTLS relay.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();
        let sender = config
            .sender
            .parse::<Mailbox>()
            .map_err(|e| anyhow::anyhow!("Invalid SMTP sender address {}: {}", config.sender, e))?;

        Ok(Self { transport, sender })
    }
}

#[async_trait::async_trait]
impl IMailer for SmtpMailer {
    async fn send(&self, email: &EmailMessage) -> anyhow::Result<()> {
        let message = Message::builder()
            .from(self.sender.clone())
            .to(email
                .to
                .parse::<Mailbox>()
                .map_err(|e| anyhow::anyhow!("Invalid recipient address {}: {}", email.to, e))?)
            .subject(&email.subject)
            .multipart(MultiPart::alternative_plain_html(
                email.text_body.clone(),
                email.html_body.clone(),
            ))?;

        self.transport.send(message).await?;
        Ok(())
    }
}
