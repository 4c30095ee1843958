//! Per-invoice orchestration.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::core::{Company, InvoiceConfig, InvoiceError, Order};

use super::compose::Composer;
use super::model::Document;
use super::render::RenderBackend;

/// The result of a completed generation: the invoice identifier and the
/// path of the written file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceArtifact {
    pub id: String,
    pub path: PathBuf,
}

#[derive(Debug)]
enum State {
    Initialized,
    Done(InvoiceArtifact),
    Failed,
}

/// Owns the lifecycle of one invoice.
///
/// Construction validates the configuration, checks the shareholder
/// precondition, parses all format patterns, and derives the invoice
/// identity; an invalid configuration never reaches rendering.
/// [`generate`](Self::generate) composes the document model and hands
/// it to the rendering backend as one scoped operation. There is no
/// shared state across invoices and no retry logic; batch policy
/// belongs to the caller.
#[derive(Debug)]
pub struct InvoiceGenerator<'a> {
    composer: Composer<'a>,
    state: State,
}

impl<'a> InvoiceGenerator<'a> {
    pub fn new(
        config: &'a InvoiceConfig,
        company: &'a Company,
        order: &'a Order,
        performance_date: NaiveDate,
    ) -> Result<Self, InvoiceError> {
        Ok(Self {
            composer: Composer::new(config, company, order, performance_date)?,
            state: State::Initialized,
        })
    }

    /// The derived invoice identifier, e.g. `20240302-1007`.
    pub fn invoice_id(&self) -> &str {
        self.composer.identity().id()
    }

    /// The derived output file path.
    pub fn output_path(&self) -> &Path {
        self.composer.identity().path()
    }

    /// Compose the document model without rendering. Pure; repeated
    /// calls yield identical models.
    pub fn document(&self) -> Result<Document, InvoiceError> {
        self.composer.document()
    }

    /// Compose the model and render it to the derived output path.
    ///
    /// Re-running overwrites the same file. On failure no partial
    /// output is considered valid; the error is surfaced unchanged and
    /// no cleanup of a partially written file is attempted.
    pub fn generate(
        &mut self,
        backend: &dyn RenderBackend,
    ) -> Result<InvoiceArtifact, InvoiceError> {
        let document = self.composer.document().inspect_err(|_| {
            self.state = State::Failed;
        })?;
        backend
            .render(&document, self.composer.identity().path())
            .inspect_err(|_| {
                self.state = State::Failed;
            })?;

        let artifact = InvoiceArtifact {
            id: self.composer.identity().id().to_string(),
            path: self.composer.identity().path().to_path_buf(),
        };
        self.state = State::Done(artifact.clone());
        Ok(artifact)
    }

    /// The artifact of a completed generation.
    ///
    /// Asking before [`generate`](Self::generate) succeeded is a
    /// sequencing fault and yields [`InvoiceError::NotGenerated`].
    pub fn artifact(&self) -> Result<&InvoiceArtifact, InvoiceError> {
        match &self.state {
            State::Done(artifact) => Ok(artifact),
            State::Initialized => Err(InvoiceError::NotGenerated(format!(
                "invoice {} has not been generated yet",
                self.invoice_id()
            ))),
            State::Failed => Err(InvoiceError::NotGenerated(format!(
                "generation of invoice {} failed",
                self.invoice_id()
            ))),
        }
    }
}
