use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use super::compose::build_notification;
use crate::core::CotizaError;

/// Content identifier the HTML body uses to reference the inline logo.
const LOGO_CID: &str = "idImage";

/// Authenticated STARTTLS SMTP sender for alert mail.
///
/// Thin synchronous adapter: composes the notification body, attaches the
/// logo inline under [`LOGO_CID`], and sends. No retries — failures surface
/// to the caller as [`CotizaError::Mail`].
pub struct Mailer {
    host: String,
    port: u16,
    user: String,
    password: String,
}

impl Mailer {
    pub fn new(
        host: impl Into<String>,
        port: u16,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            user: user.into(),
            password: password.into(),
        }
    }

    /// Send one alert to every recipient in a single message.
    pub fn send_alert(
        &self,
        from: &str,
        to: &[String],
        subject: &str,
        title: &str,
        logo_png: &[u8],
        lines: &[String],
    ) -> Result<(), CotizaError> {
        let html = build_notification(title, LOGO_CID, lines)?;

        let from_mailbox: Mailbox = from
            .parse()
            .map_err(|e| CotizaError::Mail(format!("invalid from address `{from}`: {e}")))?;

        let mut builder = Message::builder().from(from_mailbox).subject(subject);
        for recipient in to {
            let mailbox: Mailbox = recipient.parse().map_err(|e| {
                CotizaError::Mail(format!("invalid recipient `{recipient}`: {e}"))
            })?;
            builder = builder.to(mailbox);
        }

        let png_type = ContentType::parse("image/png")
            .map_err(|e| CotizaError::Mail(format!("content type: {e}")))?;
        let message = builder
            .multipart(
                MultiPart::related()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(html),
                    )
                    .singlepart(
                        Attachment::new_inline(LOGO_CID.to_string())
                            .body(logo_png.to_vec(), png_type),
                    ),
            )
            .map_err(|e| CotizaError::Mail(format!("failed to build message: {e}")))?;

        let transport = SmtpTransport::starttls_relay(&self.host)
            .map_err(|e| CotizaError::Mail(format!("failed to create SMTP relay: {e}")))?
            .port(self.port)
            .credentials(Credentials::new(self.user.clone(), self.password.clone()))
            .build();

        transport
            .send(&message)
            .map_err(|e| CotizaError::Mail(format!("failed to send email: {e}")))?;

        tracing::info!(
            recipients = to.len(),
            subject = %subject,
            "alert email sent"
        );
        Ok(())
    }
}
