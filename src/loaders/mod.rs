//! JSON loaders for company data, order exports, and configuration.
//!
//! Loaders produce already-validated, strongly-typed records; nothing
//! downstream of this module parses raw JSON. Unreadable files map to
//! [`InvoiceError::Resource`], malformed content to
//! [`InvoiceError::Data`].

mod woocommerce;

use std::fs;
use std::path::Path;

use crate::core::{Company, InvoiceConfig, InvoiceError};
#[cfg(feature = "notify")]
use crate::notify::NotificationConfig;

pub use woocommerce::{OrdersLoader, load_orders};

/// Load the issuing company from its JSON file.
pub fn load_company(path: impl AsRef<Path>) -> Result<Company, InvoiceError> {
    let path = path.as_ref();
    serde_json::from_str(&read(path)?).map_err(|e| data_error(path, e))
}

/// Load and validate the invoice layout configuration.
pub fn load_invoice_config(path: impl AsRef<Path>) -> Result<InvoiceConfig, InvoiceError> {
    let path = path.as_ref();
    let config: InvoiceConfig = serde_json::from_str(&read(path)?).map_err(|e| data_error(path, e))?;
    let issues = config.validate();
    if !issues.is_empty() {
        return Err(InvoiceError::from_validation(&issues));
    }
    Ok(config)
}

/// Load the notification settings.
#[cfg(feature = "notify")]
pub fn load_notification_config(path: impl AsRef<Path>) -> Result<NotificationConfig, InvoiceError> {
    let path = path.as_ref();
    serde_json::from_str(&read(path)?).map_err(|e| data_error(path, e))
}

pub(crate) fn read(path: &Path) -> Result<String, InvoiceError> {
    fs::read_to_string(path)
        .map_err(|e| InvoiceError::Resource(format!("cannot read {}: {e}", path.display())))
}

pub(crate) fn data_error(path: &Path, e: serde_json::Error) -> InvoiceError {
    InvoiceError::Data(format!("{}: {e}", path.display()))
}
