use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::{MapGrid, Position};
use crate::error::{LoadError, SaveError};

/// Best-known result for a level. `time` and `steps` are minimized
/// independently and may come from different runs; zero means "no result
/// recorded yet".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub time: u32,
    pub steps: u32,
}

impl Score {
    /// Per-field best-of accumulator: each field is replaced only when it is
    /// still the zero sentinel or the new value is strictly smaller.
    pub fn record(&mut self, time: u32, steps: u32) {
        if self.time == 0 || time < self.time {
            self.time = time;
        }
        if self.steps == 0 || steps < self.steps {
            self.steps = steps;
        }
    }
}

/// On-disk shape of a level: the map text and the best score.
#[derive(Serialize, Deserialize)]
struct LevelRecord {
    map: String,
    score: Score,
}

/// A level template as loaded from its source file. Gameplay never mutates a
/// template; it runs on a [`PlayState`](crate::session::PlayState) clone.
/// The template receives persisted best scores when a run is won.
#[derive(Clone, Debug)]
pub struct Level {
    pub grid: MapGrid,
    pub score: Score,
    pub source: PathBuf,
    player_start: Position,
}

impl Level {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Level, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let record: LevelRecord =
            serde_json::from_str(&text).map_err(|source| LoadError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        let (grid, player_start) =
            MapGrid::parse(&record.map).map_err(|source| LoadError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Level {
            grid,
            score: record.score,
            source: path.to_path_buf(),
            player_start,
        })
    }

    /// Loads every regular file in `directory` as a level, sorted by path.
    /// Files that fail to load are logged and skipped rather than aborting
    /// the whole set.
    pub fn load_directory(directory: impl AsRef<Path>) -> Result<Vec<Level>, LoadError> {
        let directory = directory.as_ref();
        let entries = fs::read_dir(directory).map_err(|source| LoadError::Io {
            path: directory.to_path_buf(),
            source,
        })?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        paths.sort();

        let mut levels = Vec::with_capacity(paths.len());
        for path in paths {
            match Level::load_from_file(&path) {
                Ok(level) => {
                    info!(path = %level.source.display(), "loaded level");
                    levels.push(level);
                }
                Err(error) => warn!(error = %error, "skipping unloadable level"),
            }
        }
        Ok(levels)
    }

    pub fn player_start(&self) -> Position {
        self.player_start
    }

    /// Folds a finished run into the best score and persists the level back
    /// to its source file. The in-memory score stays updated even when the
    /// write fails; the caller decides how to surface the [`SaveError`].
    pub fn update_score(&mut self, time_seconds: u32, steps: u32) -> Result<(), SaveError> {
        self.score.record(time_seconds, steps);
        self.save()
    }

    pub fn save(&self) -> Result<(), SaveError> {
        let record = LevelRecord {
            map: self.grid.format()?,
            score: self.score,
        };
        let json =
            serde_json::to_string_pretty(&record).map_err(|source| SaveError::Json {
                path: self.source.clone(),
                source,
            })?;
        fs::write(&self.source, json).map_err(|source| SaveError::Io {
            path: self.source.clone(),
            source,
        })?;
        Ok(())
    }
}
