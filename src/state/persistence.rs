use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::Result;
use crate::models::{CalorieGoal, DietSettings, UserProfile};

/// Storage key for the user profile.
pub const USER_DATA_KEY: &str = "bmiCalculatorUserData";

/// Storage key for target calories and the macro split.
pub const DIET_SETTINGS_KEY: &str = "bmiCalculatorDietSettings";

/// Storage key for the calorie goal.
pub const CALORIE_GOAL_KEY: &str = "bmiCalculatorCalorieGoal";

/// Everything a planner session keeps between runs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub profile: UserProfile,
    pub diet: DietSettings,
    pub goal: CalorieGoal,
}

/// Durable storage for session state.
pub trait SplitStore {
    /// Load saved state, falling back to defaults for anything missing.
    fn load(&self) -> Result<SessionState>;

    fn save(&mut self, state: &SessionState) -> Result<()>;
}

/// Key-value JSON file, one top-level key per stored entry.
///
/// Entries that fail to parse are logged and replaced by their default.
/// Keys this store does not own are left untouched on save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "state file not found, starting fresh");
            return Ok(Map::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        Ok(serde_json::from_str(&content)?)
    }
}

fn entry_or_default<T: DeserializeOwned + Default>(entries: &Map<String, Value>, key: &str) -> T {
    match entries.get(key) {
        None => T::default(),
        Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|e| {
            warn!(key, error = %e, "failed to parse stored entry, using default");
            T::default()
        }),
    }
}

fn put<T: Serialize>(entries: &mut Map<String, Value>, key: &str, value: &T) -> Result<()> {
    entries.insert(key.to_string(), serde_json::to_value(value)?);
    Ok(())
}

impl SplitStore for JsonFileStore {
    fn load(&self) -> Result<SessionState> {
        let entries = self.read_entries()?;
        Ok(SessionState {
            profile: entry_or_default(&entries, USER_DATA_KEY),
            diet: entry_or_default(&entries, DIET_SETTINGS_KEY),
            goal: entry_or_default(&entries, CALORIE_GOAL_KEY),
        })
    }

    fn save(&mut self, state: &SessionState) -> Result<()> {
        // A corrupt file is overwritten rather than blocking the save.
        let mut entries = self.read_entries().unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "discarding unreadable state file");
            Map::new()
        });

        put(&mut entries, USER_DATA_KEY, &state.profile)?;
        put(&mut entries, DIET_SETTINGS_KEY, &state.diet)?;
        put(&mut entries, CALORIE_GOAL_KEY, &state.goal)?;

        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), "state saved");
        Ok(())
    }
}

/// In-memory store, mainly for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Option<SessionState>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: SessionState) -> Self {
        Self {
            state: Some(state),
            saves: 0,
        }
    }

    /// Number of times `save` has been called.
    pub fn saves(&self) -> usize {
        self.saves
    }

    pub fn saved(&self) -> Option<&SessionState> {
        self.state.as_ref()
    }
}

impl SplitStore for MemoryStore {
    fn load(&self) -> Result<SessionState> {
        Ok(self.state.clone().unwrap_or_default())
    }

    fn save(&mut self, state: &SessionState) -> Result<()> {
        self.state = Some(state.clone());
        self.saves += 1;
        Ok(())
    }
}
