//! Backend-agnostic document layout nodes.
//!
//! The composer produces an immutable tree of these nodes; a rendering
//! backend consumes the tree and emits the paginated binary file. All
//! nodes compare by value so generated documents can be asserted
//! identical, and serialize so any backend can consume them.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::InvoiceError;

/// A fully composed document: an ordered sequence of block-level nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Paragraph(Paragraph),
    Rule(Rule),
    Table(Table),
    Image(ImageNode),
    /// An empty line between paragraphs.
    Blank,
}

/// A run of text in one font.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
    pub font: FontSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing_before: Option<u32>,
}

impl Paragraph {
    pub fn new(text: impl Into<String>, font: FontSpec) -> Self {
        Self {
            text: text.into(),
            font,
            spacing_before: None,
        }
    }

    pub fn spacing_before(mut self, spacing: u32) -> Self {
        self.spacing_before = Some(spacing);
        self
    }
}

/// Font size and tone. The concrete family and colors belong to the
/// rendering backend; the model only distinguishes the primary text
/// tone from the muted secondary tone used in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSpec {
    pub size: u32,
    pub tone: FontTone,
}

impl FontSpec {
    pub fn primary(size: u32) -> Self {
        Self {
            size,
            tone: FontTone::Primary,
        }
    }

    pub fn secondary(size: u32) -> Self {
        Self {
            size,
            tone: FontTone::Secondary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontTone {
    Primary,
    Secondary,
}

/// A thin horizontal rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub thickness: u32,
    /// Width as a percentage of the content area.
    pub width_percent: u32,
    /// Vertical offset relative to the text baseline.
    pub offset: i32,
}

/// A referenced image, scaled by a percentage of its natural size.
/// The backend loads the bytes; the model only carries the path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageNode {
    pub path: PathBuf,
    pub scale_percent: u32,
}

impl ImageNode {
    pub fn new(path: impl Into<PathBuf>, scale_percent: u32) -> Self {
        Self {
            path: path.into(),
            scale_percent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VAlign {
    #[default]
    Top,
    Middle,
}

/// A table with fixed column-width proportions.
///
/// Constructed through [`Table::new`], which chunks a flat cell list
/// into rows and refuses lists that do not fill whole rows, so a table
/// with a ragged last row is unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    proportions: Vec<u32>,
    rows: Vec<Vec<Cell>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_percent: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing_before: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing_after: Option<u32>,
    /// Leading rows repeated on every page the table spans.
    #[serde(default)]
    pub header_rows: usize,
}

impl Table {
    /// Build a table from column proportions and a flat, row-major cell
    /// list. The column count is the proportion count.
    pub fn new(proportions: Vec<u32>, cells: Vec<Cell>) -> Result<Self, InvoiceError> {
        let columns = proportions.len();
        if columns == 0 {
            return Err(InvoiceError::Config(
                "a table needs at least one column".into(),
            ));
        }
        if cells.len() % columns != 0 {
            return Err(InvoiceError::Config(format!(
                "{} cells do not fill rows of {} columns",
                cells.len(),
                columns
            )));
        }
        let mut rows = Vec::with_capacity(cells.len() / columns);
        let mut iter = cells.into_iter();
        loop {
            let row: Vec<Cell> = iter.by_ref().take(columns).collect();
            if row.is_empty() {
                break;
            }
            rows.push(row);
        }
        Ok(Self {
            proportions,
            rows,
            width_percent: None,
            spacing_before: None,
            spacing_after: None,
            header_rows: 0,
        })
    }

    pub fn width_percent(mut self, percent: u32) -> Self {
        self.width_percent = Some(percent);
        self
    }

    pub fn spacing_before(mut self, spacing: u32) -> Self {
        self.spacing_before = Some(spacing);
        self
    }

    pub fn spacing_after(mut self, spacing: u32) -> Self {
        self.spacing_after = Some(spacing);
        self
    }

    pub fn header_rows(mut self, rows: usize) -> Self {
        self.header_rows = rows;
        self
    }

    pub fn columns(&self) -> usize {
        self.proportions.len()
    }

    pub fn proportions(&self) -> &[u32] {
        &self.proportions
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }
}

/// One table cell. Borders default on, matching the product table;
/// the informational tables switch them off per cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub content: CellContent,
    #[serde(default)]
    pub h_align: HAlign,
    #[serde(default)]
    pub v_align: VAlign,
    pub border: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellContent {
    Text(Paragraph),
    Image(ImageNode),
    Table(Table),
}

impl Cell {
    pub fn text(text: impl Into<String>, font: FontSpec) -> Self {
        Self {
            content: CellContent::Text(Paragraph::new(text, font)),
            h_align: HAlign::Left,
            v_align: VAlign::Top,
            border: true,
        }
    }

    pub fn image(image: ImageNode) -> Self {
        Self {
            content: CellContent::Image(image),
            h_align: HAlign::Left,
            v_align: VAlign::Top,
            border: true,
        }
    }

    pub fn table(table: Table) -> Self {
        Self {
            content: CellContent::Table(table),
            h_align: HAlign::Left,
            v_align: VAlign::Top,
            border: true,
        }
    }

    pub fn h_align(mut self, align: HAlign) -> Self {
        self.h_align = align;
        self
    }

    pub fn v_align(mut self, align: VAlign) -> Self {
        self.v_align = align;
        self
    }

    pub fn borderless(mut self) -> Self {
        self.border = false;
        self
    }
}
