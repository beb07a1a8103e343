use std::env;

use log::{self, LevelFilter, Metadata, Record};

/// Plain stdout logger tagged with the emitting module, so engine traffic
/// (`seabattle::targeting`, `seabattle::game`) can be told apart when
/// watching a game at debug level.
struct GameLogger;

impl log::Log for GameLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let target = record.target();
            if target.is_empty() {
                println!("{:5} {}", record.level(), record.args());
            } else {
                println!("{:5} [{}] {}", record.level(), target, record.args());
            }
        }
    }

    fn flush(&self) {}
}

static LOGGER: GameLogger = GameLogger;

/// Initialize logging with a level taken from the `SEABATTLE_LOG` environment
/// variable. Defaults to `info` if the variable is not set or invalid.
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging() {
    let level = env::var("SEABATTLE_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
