//! Shift window configuration, mirroring the roster session shape: mutate
//! the in-memory plan, write the whole table back, reload.

use crate::errors::AppResult;
use crate::models::day::Day;
use crate::models::hours::HourRange;
use crate::models::shift::{ShiftPlan, ShiftType};
use crate::store::shifts::ShiftStore;

pub struct ShiftPlanner {
    store: ShiftStore,
    plan: ShiftPlan,
}

impl ShiftPlanner {
    pub fn open(store: ShiftStore) -> AppResult<Self> {
        store.ensure_initialized()?;
        let plan = store.load_all()?;
        Ok(Self { store, plan })
    }

    pub fn plan(&self) -> &ShiftPlan {
        &self.plan
    }

    pub fn reload(&mut self) -> AppResult<()> {
        self.plan = self.store.load_all()?;
        Ok(())
    }

    /// Set one window and persist. Setting an off range removes the pair.
    pub fn set(&mut self, day: Day, shift: ShiftType, hours: HourRange) -> AppResult<()> {
        self.plan.set(day, shift, hours);
        self.store.save_all(&self.plan)?;
        self.reload()
    }

    /// Remove one window and persist. Returns false when the pair was not
    /// configured (nothing is written in that case).
    pub fn clear(&mut self, day: Day, shift: ShiftType) -> AppResult<bool> {
        if !self.plan.clear(day, shift) {
            return Ok(false);
        }
        self.store.save_all(&self.plan)?;
        self.reload()?;
        Ok(true)
    }
}
