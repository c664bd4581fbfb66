use super::BridgeHandles;
use super::shared::{BridgeSnapshot, answer_action, snapshot_json, track_action};
use crate::app::store::StoreAction;
use crate::dom;
use crate::game::QuizAction;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

const BRIDGE_NAME: &str = "__safetyQuizTest";

struct BridgeBindings {
    _state: Closure<dyn FnMut() -> JsValue>,
    _state_json: Closure<dyn FnMut() -> JsValue>,
    _track: Closure<dyn FnMut(JsValue)>,
    _answer: Closure<dyn FnMut(JsValue)>,
    _next: Closure<dyn FnMut()>,
    _reset: Closure<dyn FnMut()>,
}

fn dispatch(handles: &BridgeHandles, action: Option<QuizAction>) {
    if let Some(action) = action {
        handles.dispatcher.dispatch(StoreAction::Quiz(action));
    }
}

fn build_bridge(handles: &BridgeHandles) -> BridgeBindings {
    let state_handles = handles.clone();
    let state = Closure::wrap(Box::new(move || {
        let snapshot =
            BridgeSnapshot::capture(&state_handles.snapshot.borrow(), &state_handles.catalog);
        serde_wasm_bindgen::to_value(&snapshot).unwrap_or(JsValue::NULL)
    }) as Box<dyn FnMut() -> JsValue>);

    let json_handles = handles.clone();
    let state_json = Closure::wrap(Box::new(move || {
        JsValue::from_str(&snapshot_json(
            &json_handles.snapshot.borrow(),
            &json_handles.catalog,
        ))
    }) as Box<dyn FnMut() -> JsValue>);

    let track_handles = handles.clone();
    let track = Closure::wrap(Box::new(move |value: JsValue| {
        let action = value.as_string().and_then(|raw| track_action(&raw));
        dispatch(&track_handles, action);
    }) as Box<dyn FnMut(JsValue)>);

    let answer_handles = handles.clone();
    let answer = Closure::wrap(Box::new(move |value: JsValue| {
        let action = value.as_f64().and_then(answer_action);
        dispatch(&answer_handles, action);
    }) as Box<dyn FnMut(JsValue)>);

    let next_handles = handles.clone();
    let next = Closure::wrap(Box::new(move || {
        dispatch(&next_handles, Some(QuizAction::Advance));
    }) as Box<dyn FnMut()>);

    let reset_handles = handles.clone();
    let reset = Closure::wrap(Box::new(move || {
        dispatch(&reset_handles, Some(QuizAction::Reset));
    }) as Box<dyn FnMut()>);

    BridgeBindings {
        _state: state,
        _state_json: state_json,
        _track: track,
        _answer: answer,
        _next: next,
        _reset: reset,
    }
}

fn attach_bridge(bindings: &BridgeBindings) {
    let Some(window) = dom::window() else {
        return;
    };
    let bridge = js_sys::Object::new();
    let entries: [(&str, &JsValue); 6] = [
        ("state", bindings._state.as_ref()),
        ("stateJson", bindings._state_json.as_ref()),
        ("track", bindings._track.as_ref()),
        ("answer", bindings._answer.as_ref()),
        ("next", bindings._next.as_ref()),
        ("reset", bindings._reset.as_ref()),
    ];
    for (name, func) in entries {
        if !matches!(js_sys::Reflect::set(&bridge, &JsValue::from_str(name), func), Ok(true)) {
            log::error!("failed to attach test bridge method {name}");
        }
    }
    if matches!(js_sys::Reflect::set(&window, &JsValue::from_str(BRIDGE_NAME), &bridge), Ok(true)) {
        log::info!("test bridge installed as window.{BRIDGE_NAME}");
    } else {
        log::error!("failed to install test bridge");
    }
}

#[hook]
pub fn use_test_bridge(handles: &BridgeHandles) {
    let bridge_handle = use_mut_ref(|| None::<BridgeBindings>);
    let handles = handles.clone();

    use_effect_with((), move |()| {
        if dom::query_flag("test") {
            let bindings = build_bridge(&handles);
            attach_bridge(&bindings);
            *bridge_handle.borrow_mut() = Some(bindings);
        }
        || {}
    });
}
