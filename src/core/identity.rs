use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::format::DatePattern;

const FILE_TYPE: &str = ".pdf";

/// The derived identity of one invoice: its human identifier and the
/// output file path.
///
/// `id = compact-date + "-" + order number`. Derivation is pure and
/// deterministic, so re-running the same order against an unchanged
/// configuration targets the same file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceIdentity {
    id: String,
    path: PathBuf,
}

impl InvoiceIdentity {
    pub fn derive(
        order_number: &str,
        order_date: NaiveDate,
        compact_pattern: &DatePattern,
        output_prefix: &str,
    ) -> Self {
        let id = format!("{}-{}", compact_pattern.format(order_date), order_number);
        let path = PathBuf::from(format!("{output_prefix}{id}{FILE_TYPE}"));
        Self { id, path }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
