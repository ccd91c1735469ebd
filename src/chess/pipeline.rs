use super::{
    filter::{
        EloRange, YearRange, clean_empty_headers, fields_to_remove, filter_by_elo, filter_by_year,
        filter_playerless, remove_fields,
    },
    log,
    types::GameRecord,
};
use std::fmt;
use std::time::Instant;

/// Which stages run over the parsed games and with what bounds. Reading and
/// parsing are configured separately through `InputOptions`.
///
/// The default value is the no-flags configuration: empty headers are
/// cleaned and playerless games are dropped, nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanOptions {
    pub keep_empty_headers: bool,
    /// Names removed on top of the default fields.
    pub extra_fields: Vec<String>,
    pub keep_playerless: bool,
    pub years: YearRange,
    pub elo: EloRange,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    FieldRemoval,
    HeaderCleanup,
    PlayerPresence,
    YearFilter,
    EloFilter,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Self::FieldRemoval => "field removal",
            Self::HeaderCleanup => "header cleanup",
            Self::PlayerPresence => "player presence",
            Self::YearFilter => "year range",
            Self::EloFilter => "elo range",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Games removed by one stage that ran. In-place stages always report zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageReport {
    pub stage: Stage,
    pub removed: usize,
}

#[derive(Debug, Clone, Default)]
pub struct CleanOutcome {
    pub games: Vec<GameRecord>,
    pub stages: Vec<StageReport>,
}

impl CleanOutcome {
    pub fn removed_by(&self, stage: Stage) -> Option<usize> {
        self.stages
            .iter()
            .find(|report| report.stage == stage)
            .map(|report| report.removed)
    }
}

/// Runs the enabled stages in their fixed order over `games`.
pub fn run_pipeline(games: Vec<GameRecord>, options: &CleanOptions) -> CleanOutcome {
    let mut runner = StageRunner {
        games,
        stages: Vec::new(),
    };

    if !options.extra_fields.is_empty() {
        let fields = fields_to_remove(&options.extra_fields);
        runner.run(Stage::FieldRemoval, |mut games| {
            for game in &mut games {
                remove_fields(game, fields.as_slice());
            }
            games
        });
    }

    if !options.keep_empty_headers {
        runner.run(Stage::HeaderCleanup, |mut games| {
            games.iter_mut().for_each(clean_empty_headers);
            games
        });
    }

    if !options.keep_playerless {
        runner.run(Stage::PlayerPresence, filter_playerless);
    }

    if options.years.is_active() {
        let years = options.years;
        runner.run(Stage::YearFilter, |games| filter_by_year(games, years));
    }

    if options.elo.is_active() {
        let elo = options.elo;
        runner.run(Stage::EloFilter, |games| filter_by_elo(games, elo));
    }

    CleanOutcome {
        games: runner.games,
        stages: runner.stages,
    }
}

struct StageRunner {
    games: Vec<GameRecord>,
    stages: Vec<StageReport>,
}

impl StageRunner {
    fn run(&mut self, stage: Stage, apply: impl FnOnce(Vec<GameRecord>) -> Vec<GameRecord>) {
        let started = Instant::now();
        let before = self.games.len();
        self.games = apply(std::mem::take(&mut self.games));
        let removed = before - self.games.len();

        log::debug(format!(
            "Stage {}: {} -> {} games in {:?}",
            stage,
            before,
            self.games.len(),
            started.elapsed()
        ));
        self.stages.push(StageReport { stage, removed });
    }
}
