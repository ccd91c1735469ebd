use super::{log, types::GameRecord};
use regex::bytes::Regex;
use std::borrow::Cow;
use std::mem;
use std::sync::LazyLock;

/// A `{` up to the first `}` after it. Nested braces are not balanced, and
/// bytes that are not UTF-8 still count as comment content.
static COMMENT_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)\{[^}]*\}").expect("comment pattern is valid"));

/// Removes every `{...}` comment span from `movetext` in a single pass.
pub fn strip_comments(movetext: &[u8]) -> Cow<'_, [u8]> {
    COMMENT_SPAN.replace_all(movetext, &b""[..])
}

fn trim_bytes(bytes: &[u8], strip: impl Fn(u8) -> bool) -> &[u8] {
    let start = bytes.iter().position(|&b| !strip(b)).unwrap_or(bytes.len());
    let end = bytes.iter().rposition(|&b| !strip(b)).map_or(start, |idx| idx + 1);
    &bytes[start..end]
}

/// Splits a tag line such as `[White "Kasparov, Garry"]` into name and value.
///
/// Returns `None` when there is no space separating a value from the name.
fn parse_tag_line(line: &[u8]) -> Option<(&[u8], &[u8])> {
    let inner = trim_bytes(line, |b| b == b'[' || b == b']');
    let space = inner.iter().position(|&b| b == b' ')?;
    let (name, value) = (&inner[..space], &inner[space + 1..]);
    Some((name, trim_bytes(value, |b| b == b'"')))
}

/// Line-oriented PGN reader building [`GameRecord`]s.
///
/// Tag lines start a game once the game in progress has movetext; blank lines
/// are ignored and never end a game. Lines are handled as bytes, so input in
/// any ASCII-compatible encoding passes through untouched.
pub struct GameReader {
    strip_comments: bool,
    current: GameRecord,
    games: Vec<GameRecord>,
    line_no: usize,
}

impl GameReader {
    pub fn new(strip_comments: bool) -> Self {
        Self {
            strip_comments,
            current: GameRecord::new(),
            games: Vec::new(),
            line_no: 0,
        }
    }

    pub fn read_line(&mut self, raw: &[u8]) {
        self.line_no += 1;
        let line = raw.trim_ascii();
        if line.is_empty() {
            return;
        }

        if line.starts_with(b"[") {
            if !self.current.movetext.is_empty() {
                self.finish_game();
            }
            match parse_tag_line(line) {
                Some((name, value)) => self.current.set_tag(name, value),
                None => log::warn(format!(
                    "Ignored malformed tag line {}: {}",
                    self.line_no,
                    String::from_utf8_lossy(line)
                )),
            }
        } else {
            self.current.push_movetext_line(line);
        }
    }

    fn finish_game(&mut self) {
        let mut game = mem::take(&mut self.current);
        if self.strip_comments {
            game.movetext = strip_comments(&game.movetext).into_owned();
        }
        self.games.push(game);
    }

    /// Flushes the game in progress, if it collected anything, and returns
    /// every game read so far in source order.
    pub fn finish(mut self) -> Vec<GameRecord> {
        if !self.current.is_empty() {
            self.finish_game();
        }
        self.games
    }
}

/// Parses PGN content into games, optionally removing `{...}` comments from
/// the movetext of each game.
pub fn parse_pgn(content: impl AsRef<[u8]>, remove_comments: bool) -> Vec<GameRecord> {
    let mut reader = GameReader::new(remove_comments);
    for line in content.as_ref().split(|&b| b == b'\n') {
        reader.read_line(line);
    }
    let games = reader.finish();
    log::debug(format!("Parsed {} games", games.len()));
    games
}
