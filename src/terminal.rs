// Standard library
use std::fmt;
use std::io::Write;

// External libraries
use crossterm::{
    queue,
    style::{ContentStyle, PrintStyledContent, StyledContent},
};

// RIBBON
use crate::cell::Cell;

const CELL_PAYLOAD: char = ' ';

/// Styles a cell as a blank painted with the cell's color.
pub fn style<C: Cell>(cell: &C) -> StyledContent<char> {
    let mut content_style = ContentStyle::new();
    content_style.background_color = Some(cell.color().into());
    StyledContent::new(content_style, CELL_PAYLOAD)
}

/// Renders a cell to text: a color-set sequence, the payload and a reset.
pub fn render<C: Cell>(cell: &C) -> String {
    style(cell).to_string()
}

/// StyledRow

#[derive(Clone)]
pub struct StyledRow {
    cells: Vec<StyledContent<char>>,
}

impl StyledRow {
    pub fn new<C: Cell>(row: &[C]) -> Self {
        Self {
            cells: row.iter().map(style).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Queues the row on the writer without flushing it.
    pub fn draw<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for cell in &self.cells {
            queue!(out, PrintStyledContent(cell.clone()))?;
        }
        Ok(())
    }
}

impl fmt::Display for StyledRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell)?;
        }
        Ok(())
    }
}
