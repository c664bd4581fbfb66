use super::view_model::{OptionStatus, OptionView};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct QuizOptionProps {
    pub option: OptionView,
    pub on_pick: Callback<usize>,
}

fn option_classes(status: OptionStatus) -> Classes {
    let mut classes = classes!(
        "btn",
        "w-full",
        "h-auto",
        "min-h-16",
        "justify-start",
        "text-left",
        "normal-case",
        "text-lg",
        "border-2",
    );
    match status {
        OptionStatus::Idle => classes.push("btn-outline"),
        OptionStatus::Chosen { correct: true } => {
            classes.push(classes!("bg-green-100", "border-green-500", "text-green-800"));
        }
        OptionStatus::Chosen { correct: false } => {
            classes.push(classes!("bg-red-100", "border-red-500", "text-red-800"));
        }
    }
    classes
}

#[function_component(QuizOptionButton)]
pub fn quiz_option_button(p: &QuizOptionProps) -> Html {
    let index = p.option.index;
    let disabled = p.option.disabled;
    let on_click = {
        let on = p.on_pick.clone();
        Callback::from(move |_: MouseEvent| {
            if !disabled {
                on.emit(index);
            }
        })
    };
    let marker = match p.option.status {
        OptionStatus::Idle => None,
        OptionStatus::Chosen { correct: true } => Some("✅"),
        OptionStatus::Chosen { correct: false } => Some("❌"),
    };

    html! {
        <button
            type="button"
            class={option_classes(p.option.status)}
            data-option={index.to_string()}
            aria-pressed={ if marker.is_some() { "true" } else { "false" } }
            {disabled}
            onclick={on_click}
        >
            <span class="font-bold mr-3">{ format!("{}.", p.option.letter) }</span>
            <span class="flex-1">{ p.option.text.clone() }</span>
            { marker.map(|m| html! { <span class="text-2xl ml-2">{ m }</span> }).unwrap_or_default() }
        </button>
    }
}
