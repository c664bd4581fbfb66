use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct ButtonProps {
    #[prop_or_default]
    pub label: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub variant: Option<f::DaisyColor>,
    #[prop_or_default]
    pub size: Option<f::DaisySize>,
    #[prop_or_default]
    pub outline: bool,
    /// Stretch to the full width of the parent.
    #[prop_or_default]
    pub block: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub testid: Option<f::AttrValue>,
    #[prop_or_default]
    pub onclick: Option<f::Callback<f::MouseEvent>>,
    #[prop_or_default]
    pub children: f::Children,
}

fn button_classes(props: &ButtonProps) -> f::Classes {
    let mut classes = f::class_list(&["btn"], &props.class);
    f::push_modifiers(&mut classes, "btn", props.variant, props.size);
    if props.outline {
        classes.push("btn-outline");
    }
    if props.block {
        classes.push("btn-block");
    }
    classes
}

#[f::function_component(Button)]
pub fn button(props: &ButtonProps) -> f::Html {
    let content = if props.children.is_empty() {
        f::html! { { props.label.clone().unwrap_or_default() } }
    } else {
        f::html! { { for props.children.iter() } }
    };
    f::html! {
        <button
            type="button"
            class={button_classes(props)}
            data-testid={props.testid.clone()}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
        >
            { content }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(props: ButtonProps) -> String {
        block_on(LocalServerRenderer::<Button>::with_props(props).render())
    }

    fn props() -> ButtonProps {
        ButtonProps {
            label: Some("Дальше".into()),
            class: f::Classes::new(),
            variant: None,
            size: None,
            outline: false,
            block: false,
            disabled: false,
            testid: None,
            onclick: None,
            children: f::Children::default(),
        }
    }

    #[test]
    fn modifiers_become_daisy_classes() {
        let html = render(ButtonProps {
            variant: Some(f::DaisyColor::Info),
            size: Some(f::DaisySize::Lg),
            block: true,
            testid: Some("next".into()),
            ..props()
        });
        assert!(html.contains("btn btn-info btn-lg btn-block"), "{html}");
        assert!(html.contains("data-testid=\"next\""));
        assert!(html.contains("Дальше"));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn disabled_outline_button() {
        let html = render(ButtonProps {
            outline: true,
            disabled: true,
            ..props()
        });
        assert!(html.contains("btn-outline"));
        assert!(html.contains("disabled"));
    }
}
