//! Rendering backend contract and the plain-text reference backend.

use std::fs;
use std::path::Path;

use crate::core::InvoiceError;

use super::model::{Block, CellContent, Document, Table};

/// Contract between the composition core and a concrete renderer.
///
/// The backend creates or overwrites the file at `path`, laying out
/// pages honoring the model's proportions, fonts, and spacing. It must
/// not leave a corrupt file behind on error (best effort) and must
/// release the output handle on every exit path.
pub trait RenderBackend {
    fn render(&self, document: &Document, path: &Path) -> Result<(), InvoiceError>;
}

/// Deterministic plain-text renderer.
///
/// Ships as the in-crate reference backend for tests, demos, and dry
/// runs; a PDF adapter implements the same trait out of tree. Verifies
/// that every referenced image exists before writing, and writes the
/// whole rendition in one scoped call.
#[derive(Debug, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the document to its textual form without touching the
    /// filesystem.
    pub fn render_to_string(&self, document: &Document) -> String {
        let mut out = String::new();
        for block in &document.blocks {
            match block {
                Block::Paragraph(p) => {
                    out.push_str(&p.text);
                    out.push('\n');
                }
                Block::Blank => out.push('\n'),
                Block::Rule(_) => {
                    out.push_str(&"-".repeat(40));
                    out.push('\n');
                }
                Block::Image(image) => {
                    out.push_str(&format!(
                        "[image {} @{}%]\n",
                        image.path.display(),
                        image.scale_percent
                    ));
                }
                Block::Table(table) => render_table(table, 0, &mut out),
            }
        }
        out
    }

    fn check_images(&self, document: &Document) -> Result<(), InvoiceError> {
        for block in &document.blocks {
            match block {
                Block::Image(image) => check_image(&image.path)?,
                Block::Table(table) => check_table_images(table)?,
                _ => {}
            }
        }
        Ok(())
    }
}

fn check_image(path: &Path) -> Result<(), InvoiceError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(InvoiceError::Resource(format!(
            "image file not readable: {}",
            path.display()
        )))
    }
}

fn check_table_images(table: &Table) -> Result<(), InvoiceError> {
    for row in table.rows() {
        for cell in row {
            match &cell.content {
                CellContent::Image(image) => check_image(&image.path)?,
                CellContent::Table(inner) => check_table_images(inner)?,
                CellContent::Text(_) => {}
            }
        }
    }
    Ok(())
}

fn render_table(table: &Table, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    for row in table.rows() {
        out.push_str(&indent);
        out.push('|');
        let mut nested: Vec<&Table> = Vec::new();
        for cell in row {
            match &cell.content {
                CellContent::Text(p) => {
                    out.push(' ');
                    out.push_str(&p.text);
                    out.push_str(" |");
                }
                CellContent::Image(image) => {
                    out.push_str(&format!(
                        " [image {} @{}%] |",
                        image.path.display(),
                        image.scale_percent
                    ));
                }
                CellContent::Table(inner) => {
                    out.push_str(" <table> |");
                    nested.push(inner);
                }
            }
        }
        out.push('\n');
        for inner in nested {
            render_table(inner, depth + 1, out);
        }
    }
}

impl RenderBackend for TextRenderer {
    fn render(&self, document: &Document, path: &Path) -> Result<(), InvoiceError> {
        self.check_images(document)?;
        let rendition = self.render_to_string(document);
        fs::write(path, rendition)
            .map_err(|e| InvoiceError::Resource(format!("cannot write {}: {e}", path.display())))
    }
}
