use crate::components::daisy_ui::foundation as f;

#[derive(Clone, PartialEq)]
pub struct ToastItem {
    pub id: f::AttrValue,
    pub variant: f::DaisyColor,
    pub title: f::AttrValue,
    pub body: f::AttrValue,
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct ToastProps {
    pub toasts: Vec<ToastItem>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub dismiss_label: Option<f::AttrValue>,
    #[prop_or_default]
    pub on_dismiss: Option<f::Callback<f::AttrValue>>,
}

#[f::function_component(Toast)]
pub fn toast(props: &ToastProps) -> f::Html {
    let class = f::class_list(&["toast", "toast-end", "toast-top", "z-50"], &props.class);
    let dismiss_label = props
        .dismiss_label
        .clone()
        .unwrap_or_else(|| f::AttrValue::from("Dismiss"));
    f::html! {
        <div class={class} role="status" aria-live="polite">
            { for props.toasts.iter().map(|toast| {
                let dismiss_btn = props.on_dismiss.as_ref().map(|cb| {
                    let id = toast.id.clone();
                    let cb = cb.clone();
                    let on_click = f::Callback::from(move |_: f::MouseEvent| cb.emit(id.clone()));
                    f::html! {
                        <button class="btn btn-ghost btn-xs" aria-label={dismiss_label.clone()} onclick={on_click}>{"✕"}</button>
                    }
                }).unwrap_or_default();
                let alert = f::class_list(&["alert", "flex", "items-start", "gap-2", "max-w-sm"], &f::Classes::from(toast.variant.class("alert")));
                f::html! {
                    <div class={alert} data-toast-id={toast.id.clone()}>
                        <div class="flex-1">
                            <p class="font-bold">{ toast.title.clone() }</p>
                            <p class="text-sm">{ toast.body.clone() }</p>
                        </div>
                        { dismiss_btn }
                    </div>
                }
            }) }
        </div>
    }
}
