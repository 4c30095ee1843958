//! Document composition: layout model, composer, orchestrator, and the
//! rendering backend contract.

mod compose;
mod generator;
pub mod model;
mod render;

pub use compose::compose;
pub use generator::{InvoiceArtifact, InvoiceGenerator};
pub use model::{
    Block, Cell, CellContent, Document, FontSpec, FontTone, HAlign, ImageNode, Paragraph, Rule,
    Table, VAlign,
};
pub use render::{RenderBackend, TextRenderer};
