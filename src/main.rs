//! Terminal Chess UCI Engine

use clap::Parser;
use terminal_chess::game::Difficulty;
use terminal_chess::uci::UCI;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "terminal_chess", version, about = "Minimax chess engine speaking UCI")]
struct Args {
    /// Search difficulty used when `go` has no depth
    #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
    difficulty: Difficulty,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    println!("Terminal Chess v{} - UCI Chess Engine", env!("CARGO_PKG_VERSION"));
    println!("Type 'uci' to start UCI mode, 'd' to display board, 'quit' to exit");

    let mut uci = UCI::new(args.difficulty);
    uci.run()
}
