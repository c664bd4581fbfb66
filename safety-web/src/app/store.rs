//! Reducer store wrapping the quiz session for the Yew tree.

use std::rc::Rc;

use super::toasts::ToastQueue;
use crate::game::{QuizAction, ScenarioCatalog, SessionState, transition};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAction {
    Quiz(QuizAction),
    DismissToast(u64),
}

impl From<QuizAction> for StoreAction {
    fn from(action: QuizAction) -> Self {
        Self::Quiz(action)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizStore {
    pub catalog: Rc<ScenarioCatalog>,
    pub state: SessionState,
    pub toasts: ToastQueue,
}

impl QuizStore {
    #[must_use]
    pub fn new(catalog: Rc<ScenarioCatalog>) -> Self {
        Self {
            catalog,
            state: SessionState::new(),
            toasts: ToastQueue::default(),
        }
    }

    /// Apply one action, returning `None` when nothing changed.
    #[must_use]
    pub fn apply(&self, action: StoreAction) -> Option<Self> {
        match action {
            StoreAction::Quiz(action) => {
                let step = transition(&self.state, &self.catalog, action);
                if !step.outcome.is_applied() {
                    return None;
                }
                let mut next = self.clone();
                next.state = step.state;
                if let Some(notice) = step.notice {
                    next.toasts.push(notice);
                }
                Some(next)
            }
            StoreAction::DismissToast(id) => {
                let mut next = self.clone();
                next.toasts.dismiss(id).then_some(next)
            }
        }
    }
}

impl Reducible for QuizStore {
    type Action = StoreAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.apply(action) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}
