use std::rc::Rc;

use super::option::QuizOptionButton;
use super::view_model::build_quiz_view_model;
use crate::components::daisy_ui::{Badge, Button, Card, DaisyColor, DaisySize, Progress};
use crate::game::{ScenarioCatalog, SessionState};
use crate::text;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct QuizScreenProps {
    pub state: SessionState,
    pub catalog: Rc<ScenarioCatalog>,
    pub on_answer: Callback<usize>,
    pub on_next: Callback<()>,
    pub on_menu: Callback<()>,
}

#[function_component(QuizScreen)]
pub fn quiz_screen(p: &QuizScreenProps) -> Html {
    let Some(vm) = build_quiz_view_model(&p.state, &p.catalog) else {
        return Html::default();
    };
    let color = vm.track.theme().color();
    let on_menu = {
        let on = p.on_menu.clone();
        Callback::from(move |_: MouseEvent| on.emit(()))
    };
    let on_next = {
        let on = p.on_next.clone();
        Callback::from(move |_: MouseEvent| on.emit(()))
    };

    let explanation = vm.explanation.as_ref().map(|exp| {
        let class = if exp.correct {
            classes!("bg-green-50", "border-2", "border-green-300")
        } else {
            classes!("bg-red-50", "border-2", "border-red-400")
        };
        html! {
            <div data-testid="explanation">
                <Card class={class}>
                    <p class="text-lg font-bold mb-2">{ exp.heading }</p>
                    <p class="text-lg">{ exp.text.clone() }</p>
                    <Button
                        class={classes!("mt-4")}
                        block=true
                        variant={DaisyColor::Primary}
                        size={DaisySize::Lg}
                        testid={AttrValue::from("advance")}
                        onclick={on_next}
                        label={AttrValue::from(vm.advance_label)}
                    />
                </Card>
            </div>
        }
    });

    html! {
        <main class={classes!("min-h-screen", "p-4", format!("bg-{color}-50"))} data-screen="quiz" data-track={vm.track.key()}>
            <div class="max-w-4xl mx-auto">
                <header class="flex justify-between items-center mb-6">
                    <Button outline=true testid={AttrValue::from("back-to-menu")} onclick={on_menu} label={AttrValue::from(text::BACK_TO_MENU)} />
                    <Badge variant={DaisyColor::Warning} size={DaisySize::Lg} label={AttrValue::from(format!("⭐ {}", vm.score_label))} />
                </header>

                <Progress
                    class={classes!("mb-6")}
                    percent={vm.percent}
                    caption_start={AttrValue::from(vm.counter_label.clone())}
                    caption_end={AttrValue::from(vm.progress_label.clone())}
                    variant={DaisyColor::Primary}
                />

                <Card class={classes!("mb-6", "border-4", format!("border-{color}-300"))}>
                    <div class="text-center mb-4">
                        <div class="text-6xl mb-4" aria-hidden="true">{ vm.track.emoji() }</div>
                        <h2 class="text-2xl md:text-3xl font-bold" data-testid="question">{ vm.question.clone() }</h2>
                    </div>
                    <div class="space-y-4">
                        { for vm.options.iter().map(|option| html! {
                            <QuizOptionButton key={option.index} option={option.clone()} on_pick={p.on_answer.clone()} />
                        }) }
                    </div>
                </Card>

                { explanation.unwrap_or_default() }

                <div class="alert alert-info mt-6">
                    <span>{ text::HINT }</span>
                </div>
            </div>
        </main>
    }
}
