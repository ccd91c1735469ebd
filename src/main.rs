use clap::Parser;
use pgn_clean::chess::console::{Console, games_noun};
use pgn_clean::chess::log;
use pgn_clean::{
    CleanOptions, CompressionMode, EloRange, InputOptions, Stage, YearRange, load_input,
    parse_pgn, run_pipeline, save_pgn,
};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "pgn-clean")]
#[command(about = "Filter and clean up PGN game collections")]
#[command(version)]
struct Args {
    /// Input PGN file, or the directory to search with --concat
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file
    #[arg(short = 'o', long = "output", default_value = "output.pgn")]
    output: PathBuf,

    /// Keep headers that are empty or contain only question marks or whitespace
    #[arg(short = 'e', long = "keep-empty")]
    keep_empty: bool,

    /// Extra fields to remove along with ECO, PlyCount and Variation (repeatable, comma-separated)
    #[arg(short = 'r', long = "remove-field", value_name = "FIELD", value_delimiter = ',')]
    remove_fields: Vec<String>,

    /// Filter out games before the specified year
    #[arg(long, value_name = "YEAR", default_value_t = 0)]
    filter_before: i64,

    /// Filter out games after the specified year
    #[arg(long, value_name = "YEAR", default_value_t = 0)]
    filter_after: i64,

    /// Filter out games that do not have a year
    #[arg(long)]
    filter_yearless_games: bool,

    /// Filter out games with ELO below this value
    #[arg(long, value_name = "ELO", default_value_t = 0)]
    filter_elo_below: i64,

    /// Filter out games with ELO above this value
    #[arg(long, value_name = "ELO", default_value_t = 0)]
    filter_elo_above: i64,

    /// Filter out games that do not have an ELO for both players
    #[arg(long)]
    filter_eloless_games: bool,

    /// Keep games where both players are unknown
    #[arg(short = 'k', long = "keep-playerless-games")]
    keep_playerless: bool,

    /// Remove {comments} from the game moves
    #[arg(long)]
    remove_comments: bool,

    /// Recursively search INPUT for PGN files and concatenate them
    #[arg(short = 'c', long = "concat")]
    concat: bool,

    /// Decompress inputs (supported: zstd)
    #[arg(long, value_name = "MODE", value_parser = CompressionMode::parse)]
    compression: Option<CompressionMode>,
}

impl Args {
    fn options(&self) -> CleanOptions {
        CleanOptions {
            keep_empty_headers: self.keep_empty,
            extra_fields: self
                .remove_fields
                .iter()
                .map(|f| f.trim().to_string())
                .filter(|f| !f.is_empty())
                .collect(),
            keep_playerless: self.keep_playerless,
            years: YearRange {
                before: self.filter_before,
                after: self.filter_after,
                drop_yearless: self.filter_yearless_games,
            },
            elo: EloRange {
                below: self.filter_elo_below,
                above: self.filter_elo_above,
                drop_eloless: self.filter_eloless_games,
            },
        }
    }

    fn input_options(&self) -> InputOptions {
        InputOptions {
            concat: self.concat,
            compression: self.compression.unwrap_or_default(),
            remove_comments: self.remove_comments,
        }
    }
}

fn main() {
    let args = Args::parse();
    let console = Console::new();
    let input_options = args.input_options();
    let options = args.options();

    let loaded = match load_input(&args.input, &input_options) {
        Ok(loaded) => loaded,
        Err(e) => {
            console.failure(format!("Error reading input: {}", e));
            process::exit(1);
        }
    };
    if let Some(count) = loaded.file_count {
        console.success(format!("Concatenated {} PGN files", count));
    }

    let games = parse_pgn(&loaded.content, input_options.remove_comments);
    console.success(format!("Parsed {} {}", games.len(), games_noun(games.len())));

    let outcome = run_pipeline(games, &options);
    for report in &outcome.stages {
        let noun = games_noun(report.removed);
        match report.stage {
            Stage::PlayerPresence => console.success(format!(
                "Removed {} {} without player names",
                report.removed, noun
            )),
            Stage::YearFilter => console.success(format!(
                "Filtered out {} {} based on year range",
                report.removed, noun
            )),
            Stage::EloFilter => console.success(format!(
                "Filtered out {} {} based on ELO range",
                report.removed, noun
            )),
            Stage::FieldRemoval | Stage::HeaderCleanup => {
                log::info(format!("Stage {} done", report.stage))
            }
        }
    }

    if let Err(e) = save_pgn(&args.output, &outcome.games) {
        console.failure(format!("Error saving file: {}", e));
        process::exit(1);
    }

    console.success(format!(
        "Saved {} {} to {}",
        outcome.games.len(),
        games_noun(outcome.games.len()),
        args.output.display()
    ));
}
