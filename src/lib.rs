//! Cleanup and filtering for PGN game collections.
//!
//! Games are parsed line by line into byte-level tag maps plus raw movetext, run through
//! a fixed sequence of cleanup and filter stages, and written back as PGN.
//!
//! ```
//! use pgn_clean::{CleanOptions, parse_pgn, run_pipeline};
//!
//! let pgn = "[White \"?\"]\n[Black \"?\"]\n1. e4 *\n\n[White \"Tal\"]\n1. e4 *\n";
//! let outcome = run_pipeline(parse_pgn(pgn, false), &CleanOptions::default());
//!
//! assert_eq!(outcome.games.len(), 1);
//! assert_eq!(outcome.games[0].tag("White"), Some(b"Tal".as_slice()));
//! ```

pub mod chess;

pub use chess::*;
