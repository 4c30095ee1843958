//! End-to-end batch run over JSON inputs, mirroring a production setup:
//! load company, orders, and configuration, generate every invoice, and
//! hand each written file to a notification sender.
//!
//! Usage: batch_run <COMPANY_JSON> <ORDERS_JSON> <INVOICE_JSON> <NOTIFICATION_JSON>

use std::process::ExitCode;

use chrono::Local;
use rechnung::batch;
use rechnung::core::InvoiceError;
use rechnung::document::TextRenderer;
use rechnung::loaders;
use rechnung::notify::{InvoiceDispatch, NotificationConfig, NotificationSender};

/// Stand-in transport that prints the assembled message instead of
/// speaking SMTP.
struct ConsoleSender {
    config: NotificationConfig,
}

impl NotificationSender for ConsoleSender {
    fn send(&self, dispatch: &InvoiceDispatch) -> Result<(), InvoiceError> {
        println!("to:      {}", dispatch.recipient);
        println!("subject: {}", self.config.subject_for(&dispatch.invoice_id));
        println!("body:    {}", self.config.body_for(&dispatch.last_name));
        println!("attach:  {}", dispatch.attachment.display());
        Ok(())
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [company_path, orders_path, invoice_path, notification_path] = args.as_slice() else {
        eprintln!(
            "usage: batch_run <COMPANY_JSON> <ORDERS_JSON> <INVOICE_JSON> <NOTIFICATION_JSON>"
        );
        return ExitCode::FAILURE;
    };

    let run = || -> Result<(), InvoiceError> {
        let company = loaders::load_company(company_path)?;
        let orders = loaders::load_orders(orders_path)?;
        let config = loaders::load_invoice_config(invoice_path)?;
        let notification = loaders::load_notification_config(notification_path)?;

        let sender = ConsoleSender {
            config: notification,
        };
        let outcome = batch::generate_and_notify(
            &config,
            &company,
            &orders,
            Local::now().date_naive(),
            &TextRenderer::new(),
            &sender,
        );

        for artifact in &outcome.artifacts {
            println!("generated {} -> {}", artifact.id, artifact.path.display());
        }
        for failure in &outcome.failures {
            eprintln!("order {} failed: {}", failure.order_number, failure.error);
        }
        Ok(())
    };

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
