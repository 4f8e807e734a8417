use ratatui::{layout::Rect, widgets::Block};

pub use self::{board_display::*, stats_display::*};

mod board_display;
mod stats_display;

pub mod color {
    use ratatui::style::Color;

    /// Frozen-cell palette, indexed by color id minus one.
    pub const PALETTE: [Color; 6] = [
        Color::Rgb(120, 37, 179),
        Color::Rgb(100, 179, 179),
        Color::Rgb(80, 34, 22),
        Color::Rgb(80, 134, 22),
        Color::Rgb(180, 34, 22),
        Color::Rgb(180, 34, 122),
    ];

    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const GRAY: Color = Color::Rgb(128, 128, 128);
    pub const GREEN: Color = Color::Rgb(0, 160, 0);
    pub const ORANGE: Color = Color::Rgb(255, 125, 0);
    pub const YELLOW: Color = Color::Rgb(255, 215, 0);
}

pub mod style {
    use ratatui::style::{Color, Style};
    use tetrad_engine::ColorId;

    use super::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const EMPTY: Style = fg_bg(color::GRAY, color::BLACK);
    pub const PREVIEW: Style = fg_bg(color::GREEN, color::BLACK);
    pub const ADVICE: Style = fg_bg(color::GREEN, color::BLACK);
    pub const HELP: Style = fg_bg(color::GRAY, color::BLACK);
    pub const GAME_OVER: Style = fg_bg(color::ORANGE, color::BLACK);
    pub const GAME_OVER_HINT: Style = fg_bg(color::YELLOW, color::BLACK);

    /// Solid style for a frozen or falling cell of the given color.
    #[must_use]
    pub fn filled(color: ColorId) -> Style {
        let color = color::PALETTE[usize::from(color.get() - 1)];
        fg_bg(color, color)
    }
}

fn block_horizontal_margin(block: Option<&Block>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner.width
}

fn block_vertical_margin(block: Option<&Block>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner.height
}
