use super::BridgeHandles;
use yew::prelude::*;

#[hook]
pub fn use_test_bridge(handles: &BridgeHandles) {
    let _ = handles;
}
