use tracing::{debug, info, warn};

use crate::error::Result;
use crate::models::{CalorieGoal, MacroSplit, RebalanceRequest, UserProfile};
use crate::planner::{
    BodyMetrics, DietOutcome, MacroBreakdown, MacroRebalancer, RebalanceOutcome, classify_outcome,
    resolve_target,
};
use crate::state::persistence::{SessionState, SplitStore};

/// One planner session: the loaded state, the rebalancer and the store that
/// receives every change.
pub struct PlannerSession<S: SplitStore> {
    store: S,
    rebalancer: MacroRebalancer,
    state: SessionState,
}

impl<S: SplitStore> PlannerSession<S> {
    /// Load state from `store` and bring it up to date.
    ///
    /// A stored split that breaks the sum or floor rules is normalized, and
    /// the target calories are re-derived from the profile. Either change is
    /// saved straight away.
    pub fn open(store: S, rebalancer: MacroRebalancer) -> Result<Self> {
        let state = store.load()?;
        let mut session = Self {
            store,
            rebalancer,
            state,
        };

        let mut dirty = false;
        let split = session.state.diet.split;
        if !split.is_balanced(rebalancer.floor()) {
            let fixed = rebalancer.normalize(split);
            warn!(stored = %split, normalized = %fixed, "stored macro split was out of balance");
            session.state.diet.split = fixed;
            dirty = true;
        }
        dirty |= session.sync_target();

        if dirty {
            session.persist()?;
        }
        Ok(session)
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn split(&self) -> MacroSplit {
        self.state.diet.split
    }

    pub fn target_calories(&self) -> u32 {
        self.state.diet.target_calories
    }

    pub fn rebalancer(&self) -> &MacroRebalancer {
        &self.rebalancer
    }

    /// Metrics for the current profile, or `None` if it fails validation.
    pub fn metrics(&self) -> Option<BodyMetrics> {
        BodyMetrics::compute(&self.state.profile).ok()
    }

    pub fn breakdown(&self) -> MacroBreakdown {
        MacroBreakdown::compute(&self.state.diet.split, f64::from(self.target_calories()))
    }

    pub fn outcome(&self) -> Option<DietOutcome> {
        self.metrics()
            .map(|m| classify_outcome(self.target_calories(), m.tdee))
    }

    /// Apply one slider edit. The store is only written when the split moved.
    pub fn apply(&mut self, request: RebalanceRequest) -> Result<RebalanceOutcome> {
        let outcome = self.rebalancer.rebalance(&self.state.diet.split, request);

        if outcome.changed {
            info!(
                field = %request.field,
                requested = request.value,
                split = %outcome.split,
                "macro split rebalanced"
            );
            self.state.diet.split = outcome.split;
            self.persist()?;
        } else {
            debug!(field = %request.field, requested = request.value, "edit left split unchanged");
        }

        Ok(outcome)
    }

    /// Select a calorie goal and re-derive the target from it.
    pub fn set_goal(&mut self, goal: CalorieGoal) -> Result<()> {
        self.state.goal = goal;
        self.sync_target();
        info!(goal = %goal, calories = self.target_calories(), "calorie goal set");
        self.persist()
    }

    /// Set the calorie target by hand. Negative values become zero and the
    /// goal switches to custom.
    ///
    /// Returns true if anything changed.
    pub fn set_target_calories(&mut self, kcal: i64) -> Result<bool> {
        let target = kcal.clamp(0, i64::from(u32::MAX)) as u32;
        let changed = target != self.state.diet.target_calories
            || self.state.goal != CalorieGoal::Custom;

        if changed {
            self.state.diet.target_calories = target;
            self.state.goal = CalorieGoal::Custom;
            info!(calories = target, "custom calorie target set");
            self.persist()?;
        }
        Ok(changed)
    }

    /// Replace the profile after validating it, then re-derive the target.
    pub fn update_profile(&mut self, profile: UserProfile) -> Result<BodyMetrics> {
        let metrics = BodyMetrics::compute(&profile)?;
        self.state.profile = profile;
        self.sync_target();
        info!(bmi = metrics.bmi, tdee = metrics.tdee, "profile updated");
        self.persist()?;
        Ok(metrics)
    }

    /// Restore the selected parts of the state to their defaults.
    pub fn reset(&mut self, split: bool, profile: bool, goal: bool) -> Result<()> {
        if split {
            self.state.diet.split = MacroSplit::default();
        }
        if profile {
            self.state.profile = UserProfile::default();
        }
        if goal {
            self.state.goal = CalorieGoal::default();
        }
        self.sync_target();
        self.persist()
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Recompute the target from TDEE and the goal. Returns true if it moved.
    fn sync_target(&mut self) -> bool {
        let Some(metrics) = self.metrics() else {
            return false;
        };

        let current = self.state.diet.target_calories;
        let target = resolve_target(self.state.goal, metrics.tdee, current);
        if target == current {
            return false;
        }

        debug!(from = current, to = target, "target calories re-derived");
        self.state.diet.target_calories = target;
        true
    }

    fn persist(&mut self) -> Result<()> {
        self.store.save(&self.state)
    }
}
