use crate::components::daisy_ui::foundation as f;

/// Progress bar with a caption row above it.
#[derive(f::Properties, PartialEq, Clone)]
pub struct ProgressProps {
    /// 0-100; values outside are clamped.
    pub percent: f32,
    #[prop_or_default]
    pub caption_start: Option<f::AttrValue>,
    #[prop_or_default]
    pub caption_end: Option<f::AttrValue>,
    #[prop_or_default]
    pub variant: Option<f::DaisyColor>,
    #[prop_or_default]
    pub class: f::Classes,
}

#[f::function_component(Progress)]
pub fn progress(props: &ProgressProps) -> f::Html {
    let mut bar = f::Classes::from("progress h-3 w-full");
    f::push_modifiers(&mut bar, "progress", props.variant, None);
    let percent = if props.percent.is_finite() {
        props.percent.clamp(0.0, 100.0)
    } else {
        0.0
    };
    let value = f::AttrValue::from(format!("{percent:.0}"));
    let has_captions = props.caption_start.is_some() || props.caption_end.is_some();
    f::html! {
        <section class={f::class_list(&["w-full"], &props.class)}>
            if has_captions {
                <div class="flex justify-between text-sm text-base-content/70 mb-2">
                    <span>{ props.caption_start.clone().unwrap_or_default() }</span>
                    <span>{ props.caption_end.clone().unwrap_or_default() }</span>
                </div>
            }
            <progress class={bar} value={value.clone()} max="100" aria-valuenow={value.clone()} aria-valuemin="0" aria-valuemax="100"></progress>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(percent: f32, captions: bool) -> String {
        block_on(
            LocalServerRenderer::<Progress>::with_props(ProgressProps {
                percent,
                caption_start: captions.then(|| "Вопрос 2 из 3".into()),
                caption_end: captions.then(|| "33% пройдено".into()),
                variant: Some(f::DaisyColor::Primary),
                class: f::Classes::new(),
            })
            .render(),
        )
    }

    #[test]
    fn progress_rounds_and_clamps_percent() {
        let html = render(33.333, false);
        assert!(html.contains("value=\"33\""));
        assert!(html.contains("aria-valuenow=\"33\""));
        assert!(render(140.0, false).contains("value=\"100\""));
        assert!(render(-3.0, false).contains("value=\"0\""));
        assert!(render(f32::NAN, false).contains("value=\"0\""));
    }

    #[test]
    fn captions_render_only_when_given() {
        let with = render(33.3, true);
        assert!(with.contains("Вопрос 2 из 3"));
        assert!(with.contains("33% пройдено"));
        assert!(with.contains("progress-primary"));
        let without = render(33.3, false);
        assert!(!without.contains("justify-between"));
    }
}
