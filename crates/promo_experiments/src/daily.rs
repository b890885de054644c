//! Cron-style daily play driver.
//!
//! One invocation resolves one play against a day-long window, persisting the
//! running play/win counts through a [`CounterStore`] so the process can exit
//! between plays. This is the live-deployment shape of the engine: a request
//! handler or cron job calls [`run_daily_play`] once per play.

use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

use rand::Rng;

use promo_core::{CounterStore, EngineError, EvenOverTime, PlayCounters, Player, TimeWindow};

/// File-backed counter store: one plain-integer text file per key.
///
/// Durable across invocations; a missing file reads as an unwritten key.
#[derive(Debug, Clone)]
pub struct FileCounterStore {
    dir: PathBuf,
}

impl FileCounterStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.txt"))
    }
}

impl CounterStore for FileCounterStore {
    fn read(&self, key: &str) -> io::Result<Option<u64>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => {
                let value = contents.trim().parse::<u64>().map_err(|err| {
                    io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("counter file for {key} is not an integer: {err}"),
                    )
                })?;
                Ok(Some(value))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn write(&mut self, key: &str, value: u64) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value.to_string())
    }
}

/// Errors from a daily play: either the counter store or the engine.
#[derive(Debug)]
pub enum DailyPlayError {
    Store(io::Error),
    Engine(EngineError),
}

impl From<io::Error> for DailyPlayError {
    fn from(err: io::Error) -> Self {
        DailyPlayError::Store(err)
    }
}

impl From<EngineError> for DailyPlayError {
    fn from(err: EngineError) -> Self {
        DailyPlayError::Engine(err)
    }
}

impl fmt::Display for DailyPlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DailyPlayError::Store(err) => write!(f, "counter store: {err}"),
            DailyPlayError::Engine(err) => write!(f, "engine: {err}"),
        }
    }
}

impl std::error::Error for DailyPlayError {}

/// Configuration for the daily driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyPlayConfig {
    /// Prize pool for the day.
    pub wins_per_day: u32,
    /// Win-model sparsity factor.
    pub sparsity_factor: f64,
    /// Value the play counter is charged with the first time a day's file is
    /// created. A fresh day with zero plays would otherwise look like a lot
    /// of elapsed time with no plays, and the model would hand out a burst of
    /// wins to the first players.
    pub seed_play_count: u64,
}

impl Default for DailyPlayConfig {
    fn default() -> Self {
        Self {
            wins_per_day: 10,
            sparsity_factor: EvenOverTime::DEFAULT_SPARSITY_FACTOR,
            seed_play_count: 100,
        }
    }
}

/// Outcome of one daily play, with the persisted counters after the write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyPlayOutcome {
    pub won: bool,
    pub play_count: u64,
    pub win_count: u64,
}

/// Counter keys for the day containing the window start.
fn day_keys(window: &TimeWindow) -> (String, String) {
    let day = (window.start() / 86_400.0).floor() as i64;
    (format!("play-count.{day}"), format!("win-count.{day}"))
}

/// Resolve one play for the day's window, reading and writing the counters
/// through `store`. Writes back `play_count + 1` always and `win_count + 1`
/// on a win.
pub fn run_daily_play<S, R>(
    store: &mut S,
    window: &TimeWindow,
    config: &DailyPlayConfig,
    rng: &mut R,
) -> Result<DailyPlayOutcome, DailyPlayError>
where
    S: CounterStore,
    R: Rng + ?Sized,
{
    let (play_key, win_key) = day_keys(window);
    let play_count = store.read_or_seed(&play_key, config.seed_play_count)?;
    let win_count = store.read_or_seed(&win_key, 0)?;

    let model =
        EvenOverTime::new(config.wins_per_day)?.with_sparsity_factor(config.sparsity_factor)?;
    let player = Player::new(model);
    let counters = PlayCounters::new(play_count, win_count);

    let won = player.play(window, &counters, rng);

    store.write(&play_key, play_count + 1)?;
    if won {
        store.write(&win_key, win_count + 1)?;
    }

    Ok(DailyPlayOutcome {
        won,
        play_count: play_count + 1,
        win_count: win_count + u64::from(won),
    })
}
