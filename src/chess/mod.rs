pub mod console;
pub mod error;
pub mod filter;
pub mod input;
pub mod log;
pub mod pipeline;
pub mod reader;
pub mod types;
pub mod writer;

pub use error::{CleanError, Result};
pub use filter::{
    DEFAULT_REMOVED_FIELDS, EloRange, YearRange, clean_empty_headers, filter_by_elo,
    filter_by_year, filter_playerless, remove_fields,
};
pub use input::{
    CompressionMode, InputOptions, LoadedInput, concatenate_pgn_files, find_pgn_files, load_input,
    read_input,
};
pub use pipeline::{CleanOptions, CleanOutcome, Stage, StageReport, run_pipeline};
pub use reader::{parse_pgn, strip_comments};
pub use types::GameRecord;
pub use writer::{save_pgn, write_games};
