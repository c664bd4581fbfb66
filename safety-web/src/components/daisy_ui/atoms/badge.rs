use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct BadgeProps {
    pub label: f::AttrValue,
    #[prop_or_default]
    pub variant: Option<f::DaisyColor>,
    #[prop_or_default]
    pub size: Option<f::DaisySize>,
    #[prop_or_default]
    pub class: f::Classes,
}

#[f::function_component(Badge)]
pub fn badge(props: &BadgeProps) -> f::Html {
    let mut classes = f::class_list(&["badge", "font-bold"], &props.class);
    f::push_modifiers(&mut classes, "badge", props.variant, props.size);
    f::html! {
        <span class={classes} aria-live="polite">{ props.label.clone() }</span>
    }
}
