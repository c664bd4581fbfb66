//! `window.__safetyQuizTest` hooks for browser automation.
//!
//! Only installed when the page is opened with `?test=1`.

#[cfg(any(test, target_arch = "wasm32"))]
mod shared;
#[cfg(not(target_arch = "wasm32"))]
mod stub;
#[cfg(target_arch = "wasm32")]
mod wasm;

use std::cell::RefCell;
use std::rc::Rc;

use crate::app::store::QuizStore;
use crate::game::{ScenarioCatalog, SessionState};
use yew::prelude::*;

#[cfg(any(test, target_arch = "wasm32"))]
pub use shared::{BridgeSnapshot, answer_action, snapshot_json, track_action};

/// What the bridge needs from the app: a live view of the state and a way to dispatch.
#[derive(Clone)]
pub struct BridgeHandles {
    pub snapshot: Rc<RefCell<SessionState>>,
    pub catalog: Rc<ScenarioCatalog>,
    pub dispatcher: UseReducerDispatcher<QuizStore>,
}

#[cfg(not(target_arch = "wasm32"))]
#[hook]
pub fn use_test_bridge(handles: &BridgeHandles) {
    stub::use_test_bridge(handles);
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_test_bridge(handles: &BridgeHandles) {
    wasm::use_test_bridge(handles);
}
