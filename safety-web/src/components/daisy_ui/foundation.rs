//! Shared imports and class helpers for the DaisyUI wrappers.

pub use web_sys::MouseEvent;
pub use yew::function_component;
pub use yew::prelude::{AttrValue, Callback, Children, Classes, Html, Properties, html};

fn daisy_class(prefix: &str, suffix: &str) -> String {
    format!("{prefix}-{suffix}")
}

/// Semantic DaisyUI colours the quiz uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DaisyColor {
    #[default]
    Primary,
    Info,
    Success,
    Warning,
    Error,
}

impl DaisyColor {
    /// `btn` + `Error` becomes `btn-error`.
    #[must_use]
    pub fn class(self, prefix: &str) -> String {
        let suffix = match self {
            Self::Primary => "primary",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        };
        daisy_class(prefix, suffix)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DaisySize {
    Sm,
    Md,
    Lg,
}

impl DaisySize {
    #[must_use]
    pub fn class(self, prefix: &str) -> String {
        let suffix = match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        };
        daisy_class(prefix, suffix)
    }
}

/// Base classes followed by whatever the caller passed in `extra`.
#[must_use]
pub fn class_list(base: &[&'static str], extra: &Classes) -> Classes {
    let mut classes: Classes = base.iter().copied().collect();
    classes.push(extra.clone());
    classes
}

/// Push `prefix-<color>` and `prefix-<size>` when set.
pub fn push_modifiers(
    classes: &mut Classes,
    prefix: &str,
    color: Option<DaisyColor>,
    size: Option<DaisySize>,
) {
    if let Some(color) = color {
        classes.push(color.class(prefix));
    }
    if let Some(size) = size {
        classes.push(size.class(prefix));
    }
}
