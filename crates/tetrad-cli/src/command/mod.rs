use clap::Parser;

mod play;

/// Falling-block puzzle with a built-in move advisor.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Seed for the piece sequence (random when omitted)
    #[clap(long)]
    seed: Option<u64>,
    /// Starting level (gravity speed multiplier)
    #[clap(long, default_value_t = 1)]
    level: usize,
    /// Number of advisor suggestions previewed on the board
    #[clap(long, default_value_t = 3)]
    advice: usize,
    /// Disable the move advisor overlay
    #[clap(long, default_value_t = false)]
    no_advice: bool,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    play::run(&args)
}
