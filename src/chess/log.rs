use std::env;
use std::sync::LazyLock;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
enum Level {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
}

impl Level {
    fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" | "err" => Self::Error,
            "warn" | "warning" => Self::Warn,
            "info" => Self::Info,
            "debug" | "trace" => Self::Debug,
            _ => Self::Error,
        }
    }
}

/// Verbosity of the stderr log, read once from `PGN_CLEAN_LOG`.
static PGN_CLEAN_LOG: LazyLock<Level> = LazyLock::new(|| {
    env::var("PGN_CLEAN_LOG")
        .map(|s| Level::from_str(&s))
        .unwrap_or(Level::Error)
});

macro_rules! log {
    ($level:expr, $prefix:expr, $msg:expr) => {
        if *PGN_CLEAN_LOG >= $level {
            eprintln!(concat!($prefix, ": {}"), $msg.as_ref());
        }
    };
}

pub fn warn(msg: impl AsRef<str>) {
    log!(Level::Warn, "WARN", msg);
}
pub fn info(msg: impl AsRef<str>) {
    log!(Level::Info, "INFO", msg);
}
pub fn debug(msg: impl AsRef<str>) {
    log!(Level::Debug, "DEBUG", msg);
}
