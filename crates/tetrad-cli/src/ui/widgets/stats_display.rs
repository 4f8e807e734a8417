use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Text},
    widgets::{Block, BlockExt, Widget},
};
use tetrad_engine::Game;

use super::style;

/// Score, level, and lifecycle readout.
#[derive(Debug)]
pub struct StatsDisplay<'a> {
    game: &'a Game,
    block: Option<Block<'a>>,
}

impl<'a> StatsDisplay<'a> {
    pub fn new(game: &'a Game) -> Self {
        Self { game, block: None }
    }

    pub fn block(self, block: Block<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        16 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        3 + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for StatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &StatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let inner = self.block.inner_if_some(area);

        let state_line = if self.game.state().is_game_over() {
            Line::styled("GAME OVER", style::GAME_OVER)
        } else {
            Line::styled("PLAYING", style::DEFAULT)
        };
        let text = Text::from(vec![
            Line::raw(format!("Score  {}", self.game.score())),
            Line::raw(format!("Level  {}", self.game.level())),
            state_line,
        ])
        .style(style::DEFAULT);
        text.render(inner, buf);
    }
}
