//! Batch generation over a list of orders.
//!
//! One orchestrator per order, no state shared between invoices. A
//! failing order never stops its siblings; failures are collected with
//! enough context to locate the offending record.

use chrono::NaiveDate;

use crate::core::{Company, InvoiceConfig, InvoiceError, Order};
use crate::document::{InvoiceArtifact, InvoiceGenerator, RenderBackend};
#[cfg(feature = "notify")]
use crate::notify::{InvoiceDispatch, NotificationSender};

/// One failed order with the error that stopped it.
#[derive(Debug)]
pub struct BatchFailure {
    pub order_number: String,
    pub error: InvoiceError,
}

/// The collected result of a batch run.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub artifacts: Vec<InvoiceArtifact>,
    pub failures: Vec<BatchFailure>,
}

impl BatchOutcome {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Generate one invoice per order, continuing past failures.
pub fn generate_all(
    config: &InvoiceConfig,
    company: &Company,
    orders: &[Order],
    performance_date: NaiveDate,
    backend: &dyn RenderBackend,
) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    for order in orders {
        match generate_one(config, company, order, performance_date, backend) {
            Ok(artifact) => outcome.artifacts.push(artifact),
            Err(error) => outcome.failures.push(BatchFailure {
                order_number: order.number.clone(),
                error,
            }),
        }
    }
    outcome
}

/// Generate one invoice per order and dispatch each written file.
///
/// A dispatch failure is reported alongside the artifact: the file
/// exists on disk even when the notification could not be sent.
#[cfg(feature = "notify")]
pub fn generate_and_notify(
    config: &InvoiceConfig,
    company: &Company,
    orders: &[Order],
    performance_date: NaiveDate,
    backend: &dyn RenderBackend,
    sender: &dyn NotificationSender,
) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    for order in orders {
        let artifact = match generate_one(config, company, order, performance_date, backend) {
            Ok(artifact) => artifact,
            Err(error) => {
                outcome.failures.push(BatchFailure {
                    order_number: order.number.clone(),
                    error,
                });
                continue;
            }
        };

        let dispatch = InvoiceDispatch {
            recipient: order.customer.party.contact.email.clone(),
            last_name: order.customer.party.last_name.clone(),
            invoice_id: artifact.id.clone(),
            attachment: artifact.path.clone(),
        };
        if let Err(error) = sender.send(&dispatch) {
            outcome.failures.push(BatchFailure {
                order_number: order.number.clone(),
                error,
            });
        }
        outcome.artifacts.push(artifact);
    }
    outcome
}

fn generate_one(
    config: &InvoiceConfig,
    company: &Company,
    order: &Order,
    performance_date: NaiveDate,
    backend: &dyn RenderBackend,
) -> Result<InvoiceArtifact, InvoiceError> {
    let mut generator = InvoiceGenerator::new(config, company, order, performance_date)?;
    generator.generate(backend)
}
