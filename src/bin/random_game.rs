use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use plum_rules::moves::piece_reach::pseudo_legal_moves;
use plum_rules::utils::algebraic::square_label;
use plum_rules::utils::render_board::render_board;
use plum_rules::{Chess, ChessError, RulesConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play seeded random moves through the rules layer", long_about = None)]
struct Args {
    /// JSON rules configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Starting FEN position (overrides the config file)
    #[arg(long)]
    fen: Option<String>,

    /// Reject moves a piece cannot geometrically make
    #[arg(long)]
    enforce_geometry: bool,

    /// Number of half-moves to attempt
    #[arg(long, default_value_t = 40)]
    plies: usize,

    /// Take back one move after every N committed moves (0 disables)
    #[arg(long, default_value_t = 0)]
    undo_every: usize,

    /// RNG seed
    #[arg(long, default_value_t = 7)]
    seed: u64,
}

fn load_config(args: &Args) -> Result<RulesConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            RulesConfig::from_json_str(&text)?
        }
        None => RulesConfig::default(),
    };

    if let Some(fen) = &args.fen {
        config.starting_fen = fen.clone();
    }
    config.enforce_piece_geometry |= args.enforce_geometry;
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut chess = Chess::with_config(load_config(&args)?)?;
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut committed = 0usize;

    println!("{}\n", render_board(chess.board()));

    for ply in 0..args.plies {
        let mut candidates = pseudo_legal_moves(chess.board());
        candidates.shuffle(&mut rng);

        let mut played = None;
        for (origin, destination) in candidates {
            match chess.move_piece(origin, destination) {
                Ok(()) => played = Some((origin, destination, false)),
                Err(ChessError::Check { .. }) => played = Some((origin, destination, true)),
                Err(ChessError::InvalidMove(_)) => continue,
                Err(other) => return Err(other.into()),
            }
            break;
        }

        let Some((origin, destination, check)) = played else {
            println!("{} has no move that keeps its king safe", chess.side_to_move());
            break;
        };

        committed += 1;
        println!(
            "{:>3}. {}{}{}",
            ply + 1,
            square_label(&origin),
            square_label(&destination),
            if check { " +" } else { "" }
        );

        if args.undo_every > 0 && committed % args.undo_every == 0 {
            chess.undo()?;
            println!("     undo -> {}", chess.fen());
        }
    }

    info!("{committed} moves committed, {} undoable", chess.undo_depth());
    println!("\n{}", render_board(chess.board()));
    Ok(())
}
