//! Queue of on-screen notices and their dismissal timers.

use crate::components::daisy_ui::{DaisyColor, ToastItem};
use crate::game::{Notice, NoticeKind};
use yew::prelude::*;

/// Older toasts are dropped once this many are on screen.
pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastEntry {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    entries: Vec<ToastEntry>,
    next_id: u64,
}

impl ToastQueue {
    /// Enqueue a notice and return its id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push(ToastEntry { id, notice });
        if self.entries.len() > MAX_VISIBLE {
            let overflow = self.entries.len() - MAX_VISIBLE;
            self.entries.drain(..overflow);
        }
        id
    }

    /// Remove a toast. Returns `false` when it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    #[must_use]
    pub fn entries(&self) -> &[ToastEntry] {
        &self.entries
    }

    /// Most recently pushed toast still on screen.
    #[must_use]
    pub fn latest(&self) -> Option<&ToastEntry> {
        self.entries.last()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

const fn variant(kind: NoticeKind) -> DaisyColor {
    match kind {
        NoticeKind::Success => DaisyColor::Success,
        NoticeKind::Failure => DaisyColor::Error,
        NoticeKind::Summary => DaisyColor::Info,
    }
}

#[must_use]
pub fn toast_item(entry: &ToastEntry) -> ToastItem {
    ToastItem {
        id: AttrValue::from(entry.id.to_string()),
        variant: variant(entry.notice.kind),
        title: AttrValue::from(entry.notice.title.clone()),
        body: AttrValue::from(entry.notice.description.clone()),
    }
}

/// Dismiss the toast `latest` after its display duration.
///
/// Each toast gets its own timer; earlier timers keep running when a newer
/// toast arrives.
#[hook]
pub fn use_auto_dismiss(latest: Option<(u64, u32)>, on_expire: Callback<u64>) {
    use_effect_with(latest, move |latest| {
        #[cfg(target_arch = "wasm32")]
        if let Some((id, duration_ms)) = *latest {
            wasm_bindgen_futures::spawn_local(async move {
                match crate::dom::delay_ms(duration_ms).await {
                    Ok(()) => on_expire.emit(id),
                    Err(err) => log::warn!(
                        "toast timer failed: {}",
                        crate::dom::describe_js_error(&err)
                    ),
                }
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = (latest, on_expire);
        || {}
    });
}
