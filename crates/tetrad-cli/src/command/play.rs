use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    text::{Line, Text},
    widgets::{Block, Clear},
};
use tetrad_advisor::{Suggestion, suggest};
use tetrad_engine::{Game, Piece, PieceStream};

use crate::{
    command::CommandArgs,
    tui::{App, Tui},
    ui::widgets::{BoardDisplay, StatsDisplay, color, style},
};

// Board dimensions and frame rate are fixed constants, not flags.
const BOARD_HEIGHT: usize = 20;
const BOARD_WIDTH: usize = 10;
const FPS: usize = 30;

pub(crate) fn run(args: &CommandArgs) -> anyhow::Result<()> {
    let mut app = PlayApp::new(args.clone());
    Tui::new().run(&mut app)
}

#[derive(Debug)]
struct PlayApp {
    args: CommandArgs,
    game: Game,
    advice: Vec<Suggestion>,
    frame: usize,
    is_exiting: bool,
}

impl PlayApp {
    fn new(args: CommandArgs) -> Self {
        let game = new_game(&args);
        Self {
            args,
            game,
            advice: Vec::new(),
            frame: 0,
            is_exiting: false,
        }
    }

    /// Full reset: the game is reconstructed with the same dimensions (and
    /// the same seed, when one was given).
    fn reset(&mut self) {
        self.game = new_game(&self.args);
        self.advice.clear();
        self.frame = 0;
    }

    /// Frames between gravity steps: faster at higher levels, never zero.
    fn drop_interval(&self) -> usize {
        (FPS / self.game.level().max(1)).max(1)
    }

    fn update_game(&mut self) {
        if self.game.figure().is_none() {
            self.game.spawn_piece();
        }
        self.frame = self.frame.wrapping_add(1);
        if self.game.state().is_active() && self.frame % self.drop_interval() == 0 {
            self.game.soft_drop();
        }
        self.advice = if self.args.no_advice || !self.game.state().is_active() {
            Vec::new()
        } else {
            suggest(&self.game, self.args.advice)
        };
    }

    /// The advisor's suggested landings as ghost pieces for the board
    /// overlay.
    fn preview_pieces(&self) -> Vec<Piece> {
        let Some(figure) = self.game.figure() else {
            return Vec::new();
        };
        self.advice
            .iter()
            .map(|suggestion| {
                figure
                    .with_rotation(suggestion.rotation)
                    .moved_to(suggestion.x, suggestion.y)
            })
            .collect()
    }
}

fn new_game(args: &CommandArgs) -> Game {
    let pieces = match args.seed {
        Some(seed) => PieceStream::seeded(seed),
        None => PieceStream::from_os_rng(),
    };
    let mut game = Game::with_piece_stream(BOARD_HEIGHT, BOARD_WIDTH, pieces);
    game.set_level(args.level.max(1));
    game
}

impl App for PlayApp {
    #[expect(clippy::cast_precision_loss)]
    fn init(&mut self, tui: &mut Tui) {
        tui.set_tick_rate(FPS as f64);
        tui.set_render_rate(FPS as f64);
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, _tui: &mut Tui, event: Event) {
        let is_active = self.game.state().is_active();
        if let Some(event) = event.as_key_event() {
            match event.code {
                KeyCode::Left if is_active => self.game.move_horizontal(-1),
                KeyCode::Right if is_active => self.game.move_horizontal(1),
                KeyCode::Up if is_active => self.game.rotate(),
                KeyCode::Down if is_active => self.game.soft_drop(),
                KeyCode::Char(' ') if is_active => self.game.hard_drop(),
                KeyCode::Esc => self.reset(),
                KeyCode::Char('q') => self.is_exiting = true,
                _ => {}
            }
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let previews = self.preview_pieces();
        let border_color = if self.game.state().is_game_over() {
            color::ORANGE
        } else {
            color::WHITE
        };
        let board_display = BoardDisplay::new(self.game.board())
            .figure(self.game.figure())
            .previews(&previews)
            .block(
                Block::bordered()
                    .border_style(border_color)
                    .style(style::DEFAULT),
            );
        let stats_display = StatsDisplay::new(&self.game).block(
            Block::bordered()
                .title(Line::from("STATS").centered())
                .border_style(border_color)
                .style(style::DEFAULT),
        );

        let [main_area, advice_area, help_area] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let [stats_column, board_column] = Layout::horizontal([
            Constraint::Length(stats_display.width()),
            Constraint::Length(board_display.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(main_area);
        let [stats_area] = Layout::vertical([Constraint::Length(stats_display.height())])
            .areas(stats_column);
        let [board_area] = Layout::vertical([Constraint::Length(board_display.height())])
            .areas(board_column);

        frame.render_widget(&stats_display, stats_area);
        frame.render_widget(&board_display, board_area);

        if let Some(best) = self.advice.first() {
            let advice = Text::from(format!(
                "AI: move to x={} (rotation {})",
                best.x, best.rotation
            ))
            .style(style::ADVICE)
            .centered();
            frame.render_widget(advice, advice_area);
        }

        let help = Text::from(
            "Controls: ← → (Move) | ↑ (Rotate) | ↓ (Soft Drop) | Space (Hard Drop) | Esc (Reset) | Q (Quit)",
        )
        .style(style::HELP)
        .centered();
        frame.render_widget(help, help_area);

        if self.game.state().is_game_over() {
            let popup_area = board_area.centered(
                Constraint::Length(board_display.width()),
                Constraint::Length(4),
            );
            let popup = Text::from(vec![
                Line::styled("GAME OVER", style::GAME_OVER).centered(),
                Line::styled("Press ESC", style::GAME_OVER_HINT).centered(),
            ]);
            let block = Block::bordered().border_style(color::ORANGE).style(style::DEFAULT);
            let inner = block.inner(popup_area);
            frame.render_widget(Clear, popup_area);
            frame.render_widget(block, popup_area);
            frame.render_widget(popup, inner);
        }
    }

    fn update(&mut self, _tui: &mut Tui) {
        self.update_game();
    }
}
