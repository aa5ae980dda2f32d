use std::rc::Rc;

use chrono::Utc;
use shared::catalog::Catalog;
use shared::inventory::SpinRecord;
use shared::shared_wheel_game::{RewardSession, SpinRequest};
use shared::storage::KeyValueStore;
use yew::prelude::*;

use crate::storage::LocalStore;

pub enum SpinnerAction {
    Tick(u32),
    Select(String),
    Spin,
    SpinFinished(String),
    Redeem(usize),
    ToggleSpecialTask,
    ToggleBypass,
}

#[derive(Debug, Clone)]
pub struct SpinnerState<S: KeyValueStore = LocalStore> {
    pub session: RewardSession<S>,
    /// Reward from the most recent completed spin, shown until the next action.
    pub last_reward: Option<SpinRecord>,
    pub error: Option<String>,
}

impl SpinnerState<LocalStore> {
    pub fn load(hour: u32) -> Self {
        Self::from_session(RewardSession::new(Catalog::builtin(), LocalStore, hour))
    }
}

impl<S: KeyValueStore> SpinnerState<S> {
    pub fn from_session(session: RewardSession<S>) -> Self {
        Self {
            session,
            last_reward: None,
            error: None,
        }
    }
}

impl<S: KeyValueStore + Clone + 'static> Reducible for SpinnerState<S> {
    type Action = SpinnerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            SpinnerAction::Tick(hour) => {
                next.session.tick(hour);
            }
            SpinnerAction::Select(wheel_id) => match next.session.select(&wheel_id) {
                Ok(true) => {
                    next.last_reward = None;
                    next.error = None;
                }
                Ok(false) => return self,
                Err(e) => {
                    log::error!("Cannot select wheel: {}", e);
                    next.error = Some(e.to_string());
                }
            },
            SpinnerAction::Spin => match next.session.request_spin(&mut rand::thread_rng()) {
                Ok(SpinRequest::Started(_)) => {
                    next.last_reward = None;
                    next.error = None;
                }
                Ok(SpinRequest::Busy) | Ok(SpinRequest::Locked(_)) => return self,
                Err(e) => {
                    log::error!("Spin aborted: {}", e);
                    next.error = Some(e.to_string());
                }
            },
            SpinnerAction::SpinFinished(wheel_id) => {
                match next.session.complete_spin(&wheel_id, Utc::now()) {
                    Some(record) => next.last_reward = Some(record),
                    None => return self,
                }
            }
            SpinnerAction::Redeem(index) => {
                if next.session.redeem(index).is_none() {
                    return self;
                }
            }
            SpinnerAction::ToggleSpecialTask => next.session.toggle_special_task(),
            SpinnerAction::ToggleBypass => {
                let bypass = !next.session.bypass();
                next.session.set_bypass(bypass);
            }
        }

        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::catalog::{OWL, SPARROW};
    use shared::storage::MemoryStore;

    fn state() -> Rc<SpinnerState<MemoryStore>> {
        Rc::new(SpinnerState::from_session(RewardSession::new(
            Catalog::builtin(),
            MemoryStore::new(),
            9,
        )))
    }

    #[test]
    fn test_successful_select_clears_error() {
        let state = state().reduce(SpinnerAction::Select("mystery".to_string()));
        assert!(state.error.is_some());
        assert_eq!(state.session.selected(), SPARROW);

        let state = state.reduce(SpinnerAction::Select(OWL.to_string()));
        assert_eq!(state.error, None);
        assert_eq!(state.session.selected(), OWL);
    }

    #[test]
    fn test_reward_shown_after_spin_finishes() {
        let state = state().reduce(SpinnerAction::Spin);
        assert!(state.session.is_spinning(SPARROW));
        assert_eq!(state.last_reward, None);

        let state = state.reduce(SpinnerAction::SpinFinished(SPARROW.to_string()));
        assert!(state.last_reward.is_some());
        assert_eq!(state.session.inventory().len(), 1);

        let state = state.reduce(SpinnerAction::Redeem(0));
        assert!(state.session.inventory().is_empty());
    }
}
