use super::{
    error::{CleanError, Result},
    types::GameRecord,
};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes games as PGN: tag lines, then the trimmed movetext on one line,
/// with a single blank line between games and none after the last.
///
/// Tag values and movetext are written back byte for byte.
pub fn write_games<W: Write>(writer: &mut W, games: &[GameRecord]) -> io::Result<()> {
    for (idx, game) in games.iter().enumerate() {
        for (name, value) in &game.tags {
            writer.write_all(b"[")?;
            writer.write_all(name)?;
            writer.write_all(b" \"")?;
            writer.write_all(value)?;
            writer.write_all(b"\"]\n")?;
        }
        writer.write_all(game.movetext.trim_ascii())?;
        writeln!(writer)?;
        if idx + 1 < games.len() {
            writeln!(writer)?;
        }
    }
    Ok(())
}

/// Creates or truncates `path` and writes `games` to it, creating missing
/// parent directories first.
pub fn save_pgn(path: &Path, games: &[GameRecord]) -> Result<()> {
    let failed = |source: io::Error| CleanError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(failed)?;
    }

    let mut writer = BufWriter::new(File::create(path).map_err(failed)?);
    write_games(&mut writer, games).map_err(failed)?;
    writer.flush().map_err(failed)
}
