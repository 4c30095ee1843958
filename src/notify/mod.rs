//! Notification configuration and message assembly.
//!
//! The core only supplies the four dispatch values per generated
//! invoice and assembles the message text; the SMTP transport itself
//! lives behind [`NotificationSender`], implemented out of tree.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::InvoiceError;

const LINE_BREAK: &str = "<br/>";
const DOUBLE_LINE_BREAK: &str = "<br/><br/>";

/// MIME content type of the assembled message body.
pub const CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Notification settings, matching `notification.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    pub email: MailAccount,
}

/// SMTP account, transport options, and message template strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailAccount {
    pub address: String,
    pub password: String,
    pub host: String,
    pub port: String,
    pub tls: bool,
    pub auth: bool,
    pub debug: bool,
    pub protocol: String,
    pub trust: String,
    /// Display name of the sender.
    pub from: String,
    /// Subject prefix; the invoice identifier is appended.
    pub subject: String,
    /// Salutation prefix; the customer's last name is appended.
    pub salutation: String,
    pub message: String,
    pub greetings: String,
    pub signature: String,
}

/// The four values handed to the sender per generated invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDispatch {
    pub recipient: String,
    pub last_name: String,
    pub invoice_id: String,
    pub attachment: PathBuf,
}

/// Transport contract. Implementations own SMTP details,
/// authentication, and attachment handling.
pub trait NotificationSender {
    fn send(&self, dispatch: &InvoiceDispatch) -> Result<(), InvoiceError>;
}

impl NotificationConfig {
    /// Subject line for one invoice.
    pub fn subject_for(&self, invoice_id: &str) -> String {
        format!("{}{}", self.email.subject, invoice_id)
    }

    /// HTML message body for one customer.
    pub fn body_for(&self, last_name: &str) -> String {
        format!(
            "{}{},{}{}{}{}{}{}",
            self.email.salutation,
            last_name,
            DOUBLE_LINE_BREAK,
            self.email.message,
            DOUBLE_LINE_BREAK,
            self.email.greetings,
            LINE_BREAK,
            self.email.signature
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> NotificationConfig {
        NotificationConfig {
            email: MailAccount {
                address: "rechnung@musterfirma.de".into(),
                password: "secret".into(),
                host: "smtp.musterfirma.de".into(),
                port: "587".into(),
                tls: true,
                auth: true,
                debug: false,
                protocol: "TLSv1.2".into(),
                trust: "smtp.musterfirma.de".into(),
                from: "Musterfirma GbR".into(),
                subject: "Ihre Rechnung ".into(),
                salutation: "Sehr geehrte/r Frau/Herr ".into(),
                message: "anbei erhalten Sie Ihre Rechnung.".into(),
                greetings: "Mit freundlichen Grüßen".into(),
                signature: "Musterfirma GbR".into(),
            },
        }
    }

    #[test]
    fn subject_appends_invoice_id() {
        assert_eq!(
            config().subject_for("20240302-1007"),
            "Ihre Rechnung 20240302-1007"
        );
    }

    #[test]
    fn body_mirrors_the_mime_template() {
        let body = config().body_for("Beispiel");
        assert_eq!(
            body,
            "Sehr geehrte/r Frau/Herr Beispiel,<br/><br/>\
             anbei erhalten Sie Ihre Rechnung.<br/><br/>\
             Mit freundlichen Grüßen<br/>Musterfirma GbR"
        );
    }
}
