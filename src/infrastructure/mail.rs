// src/infrastructure/mail.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::notifier::{ContactNotification, ContactNotifier},
};
use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};

#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from: String,
    pub recipient: String,
}

/// Delivers contact submissions to the site owner over SMTP (STARTTLS).
pub struct SmtpContactNotifier {
    from: Mailbox,
    to: Mailbox,
    transport: SmtpTransport,
}

impl SmtpContactNotifier {
    pub fn new(settings: SmtpSettings) -> ApplicationResult<Self> {
        let mut builder = SmtpTransport::starttls_relay(&settings.host)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .port(settings.port);

        if let (Some(username), Some(password)) = (settings.username, settings.password) {
            builder = builder.credentials(Credentials::new(username, password));
        }

        Ok(Self {
            from: parse_mailbox(&settings.from)?,
            to: parse_mailbox(&settings.recipient)?,
            transport: builder.build(),
        })
    }

    fn build_message(&self, notification: &ContactNotification) -> ApplicationResult<Message> {
        build_message(self.from.clone(), self.to.clone(), notification)
    }
}

fn parse_mailbox(value: &str) -> ApplicationResult<Mailbox> {
    value
        .parse::<Mailbox>()
        .map_err(|err| ApplicationError::infrastructure(format!("invalid mailbox '{value}': {err}")))
}

fn build_message(
    from: Mailbox,
    to: Mailbox,
    notification: &ContactNotification,
) -> ApplicationResult<Message> {
    let mut builder = Message::builder()
        .from(from)
        .to(to)
        .subject(format!("[contact] {}", notification.name))
        .header(ContentType::TEXT_PLAIN);

    match notification.email.parse::<Mailbox>() {
        Ok(reply_to) => builder = builder.reply_to(reply_to),
        Err(err) => tracing::debug!(error = %err, "visitor address unusable as reply-to"),
    }

    let body = format!(
        "Name: {}\nEmail: {}\n\n{}\n",
        notification.name, notification.email, notification.message
    );
    builder
        .body(body)
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))
}

#[async_trait]
impl ContactNotifier for SmtpContactNotifier {
    async fn notify(&self, notification: ContactNotification) -> ApplicationResult<()> {
        let message = self.build_message(&notification)?;
        let transport = self.transport.clone();
        // lettre's SmtpTransport is blocking.
        tokio::task::spawn_blocking(move || transport.send(&message))
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .map_err(|err| {
                tracing::error!(error = %err, "contact mail delivery failed");
                ApplicationError::infrastructure("failed to deliver contact message")
            })?;
        Ok(())
    }
}

/// Fallback when SMTP is not configured: the submission is only logged.
#[derive(Default, Clone)]
pub struct LogContactNotifier;

#[async_trait]
impl ContactNotifier for LogContactNotifier {
    async fn notify(&self, notification: ContactNotification) -> ApplicationResult<()> {
        tracing::info!(
            name = %notification.name,
            email = %notification.email,
            length = notification.message.chars().count(),
            "contact message received (smtp disabled)"
        );
        Ok(())
    }
}
