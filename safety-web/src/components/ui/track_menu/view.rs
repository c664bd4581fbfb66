use super::card::TrackCard;
use crate::components::daisy_ui::{Card, Hero};
use crate::game::Track;
use crate::text;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TrackMenuProps {
    pub on_select: Callback<Track>,
}

#[function_component(TrackMenu)]
pub fn track_menu(p: &TrackMenuProps) -> Html {
    html! {
        <main class="min-h-screen p-4" data-screen="menu">
            <div class="max-w-4xl mx-auto">
                <Hero title={text::APP_TITLE} subtitle={AttrValue::from(text::APP_SUBTITLE)} />
                <div class="grid md:grid-cols-2 gap-8 mb-8">
                    { for Track::ALL.iter().map(|track| html! {
                        <TrackCard key={track.key()} track={*track} on_select={p.on_select.clone()} />
                    }) }
                </div>
                <Card title={AttrValue::from(text::HOW_TO_PLAY_TITLE)} class={classes!("bg-base-100", "border-2", "border-purple-200")}>
                    <ol class="grid md:grid-cols-3 gap-4 text-center">
                        { for text::HOW_TO_PLAY_STEPS.iter().map(|(marker, step)| html! {
                            <li class="p-4">
                                <div class="text-4xl mb-2" aria-hidden="true">{ *marker }</div>
                                <p class="text-base-content/80">{ *step }</p>
                            </li>
                        }) }
                    </ol>
                </Card>
            </div>
        </main>
    }
}
