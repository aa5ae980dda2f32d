use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::availability::{self, AvailabilityDecision, LockReason, TimeMode};
use crate::catalog::{Catalog, RewardItem, Wheel};
use crate::constants::{SPIN_DURATION_MS, STORAGE_KEY};
use crate::error::SpinError;
use crate::inventory::{Inventory, SessionState, SpinRecord};
use crate::rotation;
use crate::selector;
use crate::storage::{self, KeyValueStore};

/// Everything the animation needs to play one spin to completion.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinPlan {
    pub wheel_id: String,
    pub slot_index: usize,
    pub item: RewardItem,
    pub from_rotation: f64,
    pub to_rotation: f64,
    pub duration_ms: u32,
}

/// Per-wheel state held only in memory.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WheelRuntime {
    /// Total degrees turned this session. Only ever grows.
    pub cumulative_rotation: f64,
    pending: Option<SpinPlan>,
}

impl WheelRuntime {
    pub fn is_spinning(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&SpinPlan> {
        self.pending.as_ref()
    }

    fn start_spin(&mut self, plan: SpinPlan) {
        self.cumulative_rotation = plan.to_rotation;
        self.pending = Some(plan);
    }

    fn complete_spin(&mut self) -> Option<SpinPlan> {
        self.pending.take()
    }
}

/// Result of asking for a spin. Only `Started` changes anything.
#[derive(Debug, Clone, PartialEq)]
pub enum SpinRequest {
    Started(SpinPlan),
    Busy,
    Locked(LockReason),
}

/// The app's single owner of session state.
///
/// Every mutation goes through here and is written back to the store before returning.
#[derive(Debug, Clone)]
pub struct RewardSession<S: KeyValueStore> {
    catalog: Catalog,
    store: S,
    state: SessionState,
    runtimes: HashMap<String, WheelRuntime>,
    hour: u32,
    mode: TimeMode,
    selected: String,
    /// Clock-driven switch held back until the selected wheel stops.
    deferred_switch: Option<String>,
    bypass: bool,
}

impl<S: KeyValueStore> RewardSession<S> {
    /// Reads the stored session once and derives the starting selection from `hour`.
    pub fn new(catalog: Catalog, store: S, hour: u32) -> Self {
        let state = storage::load_session(&store, STORAGE_KEY);
        let mode = TimeMode::from_hour(hour, catalog.schedule());
        let selected = availability::initial_selection(mode, catalog.schedule());
        let runtimes = catalog
            .wheels()
            .iter()
            .map(|wheel| (wheel.id.clone(), WheelRuntime::default()))
            .collect();
        log::info!(
            "Session loaded: {} rewards held, starting in {} on {}",
            state.inventory.len(),
            mode.label(),
            selected
        );

        Self {
            catalog,
            store,
            state,
            runtimes,
            hour,
            mode,
            selected,
            deferred_switch: None,
            bypass: false,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn inventory(&self) -> &Inventory {
        &self.state.inventory
    }

    pub fn special_task_complete(&self) -> bool {
        self.state.special_task_complete
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn mode(&self) -> TimeMode {
        self.mode
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn selected_wheel(&self) -> Option<&Wheel> {
        self.catalog.wheel(&self.selected)
    }

    pub fn bypass(&self) -> bool {
        self.bypass
    }

    pub fn runtime(&self, wheel_id: &str) -> Option<&WheelRuntime> {
        self.runtimes.get(wheel_id)
    }

    pub fn rotation(&self, wheel_id: &str) -> f64 {
        self.runtime(wheel_id)
            .map(|runtime| runtime.cumulative_rotation)
            .unwrap_or(0.0)
    }

    pub fn is_spinning(&self, wheel_id: &str) -> bool {
        self.runtime(wheel_id).is_some_and(WheelRuntime::is_spinning)
    }

    pub fn pending_plan(&self, wheel_id: &str) -> Option<&SpinPlan> {
        self.runtime(wheel_id).and_then(WheelRuntime::pending)
    }

    pub fn availability(&self) -> AvailabilityDecision {
        availability::derive_availability(
            self.hour,
            self.catalog.schedule(),
            &self.selected,
            self.state.special_task_complete,
            self.bypass,
        )
    }

    pub fn is_locked(&self) -> bool {
        self.availability().is_locked()
    }

    /// Feeds a fresh clock sample. Returns true when the time mode changed.
    pub fn tick(&mut self, hour: u32) -> bool {
        self.hour = hour;
        let previous = self.mode;
        let current = TimeMode::from_hour(hour, self.catalog.schedule());
        if previous == current {
            return false;
        }
        self.mode = current;
        log::debug!("Time mode {} -> {}", previous.label(), current.label());

        let next = availability::next_selection(
            previous,
            current,
            &self.selected,
            self.catalog.schedule(),
        );
        if self.is_spinning(&self.selected) {
            log::debug!("Holding the switch to {:?} until {} stops", next, self.selected);
            self.deferred_switch = next;
        } else if let Some(next) = next {
            log::debug!("Following the clock from {} to {}", self.selected, next);
            self.selected = next;
        }
        true
    }

    /// Clock-driven switch waiting for the current spin to finish.
    pub fn deferred_switch(&self) -> Option<&str> {
        self.deferred_switch.as_deref()
    }

    /// Switches wheels. Ignored while the current wheel is mid-spin.
    pub fn select(&mut self, wheel_id: &str) -> Result<bool, SpinError> {
        if self.catalog.wheel(wheel_id).is_none() {
            return Err(SpinError::UnknownWheel(wheel_id.to_string()));
        }
        if self.is_spinning(&self.selected) {
            log::debug!("Ignoring switch to {} while {} spins", wheel_id, self.selected);
            return Ok(false);
        }
        self.selected = wheel_id.to_string();
        self.deferred_switch = None;
        Ok(true)
    }

    pub fn set_bypass(&mut self, bypass: bool) {
        self.bypass = bypass;
    }

    pub fn set_special_task(&mut self, complete: bool) {
        self.state.special_task_complete = complete;
        self.persist();
    }

    pub fn toggle_special_task(&mut self) {
        self.set_special_task(!self.state.special_task_complete);
    }

    /// Starts a spin on the selected wheel.
    ///
    /// Draws the reward and plans the rotation up front; nothing is awarded until
    /// [`complete_spin`](Self::complete_spin) is called once the animation has finished.
    pub fn request_spin<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<SpinRequest, SpinError> {
        let wheel_id = self.selected.clone();
        if self.is_spinning(&wheel_id) {
            log::debug!("Spin on {} ignored: already spinning", wheel_id);
            return Ok(SpinRequest::Busy);
        }
        if let Some(reason) = self.availability().lock {
            log::debug!("Spin on {} ignored: {:?}", wheel_id, reason);
            return Ok(SpinRequest::Locked(reason));
        }

        let wheel = self
            .catalog
            .wheel(&wheel_id)
            .ok_or_else(|| SpinError::UnknownWheel(wheel_id.clone()))?;
        let slot_index = selector::pick_slot(&wheel.items, rng)?;
        let from_rotation = self.rotation(&wheel_id);
        let to_rotation =
            rotation::plan_rotation(slot_index, wheel.slot_count(), from_rotation, rng)?;

        let plan = SpinPlan {
            wheel_id: wheel_id.clone(),
            slot_index,
            item: wheel.items[slot_index].clone(),
            from_rotation,
            to_rotation,
            duration_ms: SPIN_DURATION_MS,
        };
        log::debug!(
            "Planned {} on {}: slot {} at {:.1} degrees",
            plan.item.id,
            wheel_id,
            slot_index,
            to_rotation
        );
        self.runtimes
            .entry(wheel_id)
            .or_default()
            .start_spin(plan.clone());
        Ok(SpinRequest::Started(plan))
    }

    /// Commits the reward of the spin in flight on `wheel_id`.
    ///
    /// Returns `None` when no spin was in flight, so a repeated completion signal awards nothing.
    pub fn complete_spin(&mut self, wheel_id: &str, earned_at: DateTime<Utc>) -> Option<SpinRecord> {
        let Some(plan) = self.runtimes.get_mut(wheel_id).and_then(WheelRuntime::complete_spin) else {
            log::warn!("Completion for {} without a spin in flight", wheel_id);
            return None;
        };

        let record = SpinRecord::new(&plan.item, &plan.wheel_id, earned_at);
        self.state.inventory.add(record.clone());
        if plan.wheel_id == self.catalog.schedule().reward_wheel {
            self.state.special_task_complete = false;
        }
        self.persist();
        log::info!("🎡 {} landed on {}", plan.wheel_id, record.label);

        if plan.wheel_id == self.selected {
            if let Some(next) = self.deferred_switch.take() {
                log::debug!("Following the clock from {} to {}", self.selected, next);
                self.selected = next;
            }
        }
        Some(record)
    }

    /// Uses up the reward at `index`.
    pub fn redeem(&mut self, index: usize) -> Option<SpinRecord> {
        let Some(record) = self.state.inventory.remove(index) else {
            log::warn!("Nothing to redeem at index {}", index);
            return None;
        };
        self.persist();
        log::info!("Redeemed {}", record.label);
        Some(record)
    }

    fn persist(&mut self) {
        if let Err(e) = storage::save_session(&mut self.store, STORAGE_KEY, &self.state) {
            log::warn!("Failed to save session: {}", e);
        }
    }
}
