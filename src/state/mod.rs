mod manager;
mod persistence;

pub use manager::PlannerSession;
pub use persistence::{
    CALORIE_GOAL_KEY, DIET_SETTINGS_KEY, JsonFileStore, MemoryStore, SessionState, SplitStore,
    USER_DATA_KEY,
};
