use serde::{Deserialize, Serialize};

use crate::catalog::Schedule;
use crate::constants::{LOCKED_TASK_MESSAGE, LOCKED_TIME_MESSAGE};

/// Part of the day, derived from the clock on every tick. Never persisted.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TimeMode {
    Morning,
    Evening,
    Sleep,
}

impl TimeMode {
    pub fn from_hour(hour: u32, schedule: &Schedule) -> Self {
        if schedule.morning.window.contains(hour) {
            Self::Morning
        } else if schedule.evening.window.contains(hour) {
            Self::Evening
        } else {
            Self::Sleep
        }
    }

    /// The wheel the clock points at, if any.
    pub fn wheel<'a>(&self, schedule: &'a Schedule) -> Option<&'a str> {
        match self {
            Self::Morning => Some(schedule.morning.wheel.as_str()),
            Self::Evening => Some(schedule.evening.wheel.as_str()),
            Self::Sleep => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Evening => "evening",
            Self::Sleep => "sleep",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum LockReason {
    TaskIncomplete,
    OutsideWindow,
}

impl LockReason {
    pub fn message(&self) -> &'static str {
        match self {
            Self::TaskIncomplete => LOCKED_TASK_MESSAGE,
            Self::OutsideWindow => LOCKED_TIME_MESSAGE,
        }
    }
}

/// Why `selected` cannot be spun right now, or `None` when it can.
///
/// Unknown wheel ids are never locked.
pub fn lock_reason(
    mode: TimeMode,
    selected: &str,
    schedule: &Schedule,
    special_task_complete: bool,
    bypass: bool,
) -> Option<LockReason> {
    if selected == schedule.reward_wheel {
        return (!special_task_complete).then_some(LockReason::TaskIncomplete);
    }
    if !schedule.is_time_gated(selected) || mode.wheel(schedule) == Some(selected) || bypass {
        return None;
    }
    Some(LockReason::OutsideWindow)
}

pub fn is_locked(
    mode: TimeMode,
    selected: &str,
    schedule: &Schedule,
    special_task_complete: bool,
    bypass: bool,
) -> bool {
    lock_reason(mode, selected, schedule, special_task_complete, bypass).is_some()
}

#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilityDecision {
    pub mode: TimeMode,
    pub active_wheel: Option<String>,
    pub lock: Option<LockReason>,
}

impl AvailabilityDecision {
    pub fn is_locked(&self) -> bool {
        self.lock.is_some()
    }
}

pub fn derive_availability(
    hour: u32,
    schedule: &Schedule,
    selected: &str,
    special_task_complete: bool,
    bypass: bool,
) -> AvailabilityDecision {
    let mode = TimeMode::from_hour(hour, schedule);
    AvailabilityDecision {
        mode,
        active_wheel: mode.wheel(schedule).map(str::to_string),
        lock: lock_reason(mode, selected, schedule, special_task_complete, bypass),
    }
}

/// Selection shown at startup: the clock's wheel, or the morning wheel while asleep.
pub fn initial_selection(mode: TimeMode, schedule: &Schedule) -> String {
    mode.wheel(schedule)
        .unwrap_or(schedule.morning.wheel.as_str())
        .to_string()
}

/// Selection after the clock moves from `previous` to `current`.
///
/// Follows the clock unless the reward wheel is selected or the new mode has no wheel.
pub fn next_selection(
    previous: TimeMode,
    current: TimeMode,
    selected: &str,
    schedule: &Schedule,
) -> Option<String> {
    if previous == current || selected == schedule.reward_wheel {
        return None;
    }
    current
        .wheel(schedule)
        .filter(|wheel| *wheel != selected)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{OWL, REWARD, SPARROW};

    #[test]
    fn test_mode_from_hour() {
        let schedule = Schedule::default();
        assert_eq!(TimeMode::from_hour(5, &schedule), TimeMode::Sleep);
        assert_eq!(TimeMode::from_hour(6, &schedule), TimeMode::Morning);
        assert_eq!(TimeMode::from_hour(14, &schedule), TimeMode::Morning);
        assert_eq!(TimeMode::from_hour(15, &schedule), TimeMode::Evening);
        assert_eq!(TimeMode::from_hour(19, &schedule), TimeMode::Evening);
        assert_eq!(TimeMode::from_hour(20, &schedule), TimeMode::Sleep);
        assert_eq!(TimeMode::from_hour(0, &schedule), TimeMode::Sleep);
    }

    #[test]
    fn test_lock_table() {
        use TimeMode::*;
        let schedule = Schedule::default();
        let table: [(&str, TimeMode, bool, bool); 11] = [
            (SPARROW, Morning, false, false),
            (SPARROW, Evening, false, true),
            (SPARROW, Evening, true, false),
            (SPARROW, Sleep, false, true),
            (SPARROW, Sleep, true, false),
            (OWL, Evening, false, false),
            (OWL, Morning, false, true),
            (OWL, Morning, true, false),
            (OWL, Sleep, false, true),
            (OWL, Sleep, true, false),
            (SPARROW, Morning, true, false),
        ];
        for (wheel, mode, bypass, locked) in table {
            // the task flag never matters for the time-gated wheels
            for task in [false, true] {
                assert_eq!(
                    is_locked(mode, wheel, &schedule, task, bypass),
                    locked,
                    "{} {:?} bypass={}",
                    wheel,
                    mode,
                    bypass
                );
            }
        }
        assert!(!is_locked(Evening, OWL, &schedule, false, true));

        for mode in [Morning, Evening, Sleep] {
            for bypass in [false, true] {
                assert_eq!(
                    lock_reason(mode, REWARD, &schedule, false, bypass),
                    Some(LockReason::TaskIncomplete)
                );
                assert_eq!(lock_reason(mode, REWARD, &schedule, true, bypass), None);
            }
        }
    }

    #[test]
    fn test_unknown_wheel_is_open() {
        let schedule = Schedule::default();
        assert!(!is_locked(TimeMode::Sleep, "mystery", &schedule, false, false));
    }

    #[test]
    fn test_derive_availability() {
        let schedule = Schedule::default();
        let decision = derive_availability(21, &schedule, SPARROW, false, false);
        assert_eq!(decision.mode, TimeMode::Sleep);
        assert_eq!(decision.active_wheel, None);
        assert_eq!(decision.lock, Some(LockReason::OutsideWindow));
        assert_eq!(decision.lock.unwrap().message(), "Not available right now.");

        let decision = derive_availability(16, &schedule, OWL, false, false);
        assert_eq!(decision.active_wheel.as_deref(), Some(OWL));
        assert!(!decision.is_locked());
    }

    #[test]
    fn test_selection_follows_clock() {
        use TimeMode::*;
        let schedule = Schedule::default();
        assert_eq!(
            next_selection(Morning, Evening, SPARROW, &schedule),
            Some(OWL.to_string())
        );
        assert_eq!(next_selection(Morning, Evening, REWARD, &schedule), None);
        assert_eq!(next_selection(Evening, Sleep, OWL, &schedule), None);
        assert_eq!(next_selection(Evening, Evening, SPARROW, &schedule), None);
        // a manual pick of the evening wheel in the morning is dropped at the next change
        assert_eq!(
            next_selection(Sleep, Morning, OWL, &schedule),
            Some(SPARROW.to_string())
        );

        assert_eq!(initial_selection(Sleep, &schedule), SPARROW);
        assert_eq!(initial_selection(Evening, &schedule), OWL);
    }
}
