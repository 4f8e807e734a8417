use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, BlockExt, Widget},
};
use tetrad_engine::{Board, Piece};

use super::style;

/// Terminal columns per grid cell (two columns make cells roughly square).
const CELL_WIDTH: u16 = 2;

/// Renders the grid, the falling piece, and the advisor's landing previews.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    figure: Option<Piece>,
    previews: &'a [Piece],
    block: Option<Block<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            figure: None,
            previews: &[],
            block: None,
        }
    }

    pub fn figure(self, figure: Option<Piece>) -> Self {
        Self { figure, ..self }
    }

    pub fn previews(self, previews: &'a [Piece]) -> Self {
        Self { previews, ..self }
    }

    pub fn block(self, block: Block<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        grid_extent(self.board.width()) * CELL_WIDTH
            + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        grid_extent(self.board.height()) + super::block_vertical_margin(self.block.as_ref())
    }
}

fn grid_extent(cells: usize) -> u16 {
    u16::try_from(cells).unwrap_or(u16::MAX)
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let inner = self.block.inner_if_some(area);

        for (y, row) in self.board.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let style = match cell.color() {
                    Some(color) => style::filled(color),
                    None => style::EMPTY,
                };
                let text = if cell.is_empty() { " ." } else { "  " };
                paint_cell(inner, buf, x, y, text, style);
            }
        }

        // Previews go under the falling piece so the real piece stays visible
        // when a suggested landing overlaps it.
        for preview in self.previews {
            paint_piece(inner, buf, *preview, "::", style::PREVIEW);
        }
        if let Some(figure) = self.figure {
            paint_piece(inner, buf, figure, "  ", style::filled(figure.color()));
        }
    }
}

fn paint_piece(inner: Rect, buf: &mut Buffer, piece: Piece, text: &str, style: Style) {
    for (x, y) in piece.occupied_cells() {
        if let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) {
            paint_cell(inner, buf, x, y, text, style);
        }
    }
}

fn paint_cell(inner: Rect, buf: &mut Buffer, x: usize, y: usize, text: &str, style: Style) {
    let cell_x = inner.x.saturating_add(grid_extent(x) * CELL_WIDTH);
    let cell_y = inner.y.saturating_add(grid_extent(y));
    if cell_x + CELL_WIDTH > inner.right() || cell_y >= inner.bottom() {
        return;
    }
    buf.set_string(cell_x, cell_y, text, style);
}
