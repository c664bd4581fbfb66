//! Thin browser helpers. Everything here degrades to a no-op off wasm so
//! components stay renderable in native SSR tests.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys::Window;

#[must_use]
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Best-effort text for a rejected promise or thrown value.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => format!("{value:?}"),
    }
}

/// Current page query string without the leading `?`.
#[must_use]
pub fn query_string() -> String {
    window()
        .and_then(|win| win.location().search().ok())
        .map(|search| search.trim_start_matches('?').to_string())
        .unwrap_or_default()
}

/// Whether `name=1` (or a bare `name`) is present in the query string.
#[must_use]
pub fn query_flag(name: &str) -> bool {
    has_flag(&query_string(), name)
}

fn has_flag(query: &str, name: &str) -> bool {
    query.split('&').any(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, "1"));
        key == name && matches!(value, "1" | "true" | "")
    })
}

/// Resolve after `duration_ms` via `setTimeout`.
///
/// # Errors
/// Fails when there is no window or the timer cannot be scheduled.
#[cfg(target_arch = "wasm32")]
#[allow(clippy::future_not_send)] // JsFuture is not Send.
pub async fn delay_ms(duration_ms: u32) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let timeout = i32::try_from(duration_ms).unwrap_or(i32::MAX);
    let mut scheduled = Ok(0);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        scheduled = win.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout);
    });
    scheduled?;
    wasm_bindgen_futures::JsFuture::from(promise).await?;
    Ok(())
}
