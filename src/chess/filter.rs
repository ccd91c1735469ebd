use super::types::GameRecord;
use regex::bytes::Regex;
use std::sync::LazyLock;

/// Tags removed by the field removal stage in addition to caller-supplied names.
pub const DEFAULT_REMOVED_FIELDS: [&str; 3] = ["ECO", "PlyCount", "Variation"];

static BLANK_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\s?]*$").expect("blank pattern is valid"));

/// True for values made only of whitespace and `?`, including the empty string.
pub fn is_blank_value(value: &[u8]) -> bool {
    BLANK_VALUE.is_match(value.trim_ascii())
}

/// Deletes every tag whose value is blank or question marks only.
pub fn clean_empty_headers(game: &mut GameRecord) {
    game.tags.retain(|_, value| !is_blank_value(value));
}

pub fn remove_fields<S: AsRef<str>>(game: &mut GameRecord, fields: &[S]) {
    for field in fields {
        game.remove_tag(field.as_ref());
    }
}

/// Default fields followed by `extra`, without duplicates.
pub fn fields_to_remove(extra: &[String]) -> Vec<String> {
    let mut fields: Vec<String> = DEFAULT_REMOVED_FIELDS.iter().map(|f| f.to_string()).collect();
    for field in extra {
        if !fields.contains(field) {
            fields.push(field.clone());
        }
    }
    fields
}

/// Drops games where neither side has a usable player name.
///
/// A missing `White` or `Black` tag counts as blank, so a game survives only
/// when at least one side is present and not blank.
pub fn filter_playerless(games: Vec<GameRecord>) -> Vec<GameRecord> {
    games.into_iter().filter(has_players).collect()
}

fn has_players(game: &GameRecord) -> bool {
    let white = game.tag("White");
    let black = game.tag("Black");
    if white.is_none() && black.is_none() {
        return false;
    }
    !(is_blank_value(white.unwrap_or_default()) && is_blank_value(black.unwrap_or_default()))
}

/// Year bounds for [`filter_by_year`]. A zero bound is disabled.
///
/// `before` keeps games from that year onwards and `after` keeps games up to
/// that year, matching the `--filter-before`/`--filter-after` flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YearRange {
    pub before: i64,
    pub after: i64,
    pub drop_yearless: bool,
}

impl YearRange {
    pub fn is_active(&self) -> bool {
        self.before != 0 || self.after != 0 || self.drop_yearless
    }

    fn keeps(&self, year: Option<i64>) -> bool {
        match year {
            None => !self.drop_yearless,
            Some(year) => {
                (self.before == 0 || year >= self.before) && (self.after == 0 || year <= self.after)
            }
        }
    }
}

/// The integer before the first `.` of the `Date` tag, e.g. `1999` for `1999.01.01`.
pub fn extract_year(game: &GameRecord) -> Option<i64> {
    let date = game.tag("Date")?;
    let year = date.split(|&b| b == b'.').next().unwrap_or_default();
    parse_number(year)
}

pub fn filter_by_year(games: Vec<GameRecord>, range: YearRange) -> Vec<GameRecord> {
    games
        .into_iter()
        .filter(|game| range.keeps(extract_year(game)))
        .collect()
}

/// Rating bounds for [`filter_by_elo`]. A zero bound is disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EloRange {
    pub below: i64,
    pub above: i64,
    pub drop_eloless: bool,
}

impl EloRange {
    pub fn is_active(&self) -> bool {
        self.below != 0 || self.above != 0 || self.drop_eloless
    }

    fn keeps(&self, white: Option<i64>, black: Option<i64>) -> bool {
        if self.drop_eloless && (white.is_none() || black.is_none()) {
            return false;
        }
        let sides = [white, black];
        let mut rated = sides.iter().flatten();
        let too_low = self.below != 0 && rated.clone().any(|&elo| elo < self.below);
        let too_high = self.above != 0 && rated.any(|&elo| elo > self.above);
        !(too_low || too_high)
    }
}

fn parse_elo(game: &GameRecord, tag: &str) -> Option<i64> {
    parse_number(game.tag(tag)?)
}

fn parse_number(bytes: &[u8]) -> Option<i64> {
    std::str::from_utf8(bytes).ok()?.parse().ok()
}

/// Drops games outside the rating bounds. Each side is judged on its own; a
/// side without a numeric rating only matters when `drop_eloless` is set.
pub fn filter_by_elo(games: Vec<GameRecord>, range: EloRange) -> Vec<GameRecord> {
    games
        .into_iter()
        .filter(|game| range.keeps(parse_elo(game, "WhiteElo"), parse_elo(game, "BlackElo")))
        .collect()
}
