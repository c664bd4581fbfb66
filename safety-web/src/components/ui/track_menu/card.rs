use crate::components::daisy_ui::{Button, Card, DaisyColor, DaisySize};
use crate::game::Track;
use crate::text;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TrackCardProps {
    pub track: Track,
    pub on_select: Callback<Track>,
}

const fn button_color(track: Track) -> DaisyColor {
    match track {
        Track::Flood => DaisyColor::Info,
        Track::Fire => DaisyColor::Warning,
    }
}

#[function_component(TrackCard)]
pub fn track_card(p: &TrackCardProps) -> Html {
    let track = p.track;
    let on_click = {
        let on = p.on_select.clone();
        Callback::from(move |_: MouseEvent| on.emit(track))
    };
    // The whole card is the click target; the button click bubbles up to it.
    let color = track.theme().color();
    let class = classes!(
        "border-4",
        format!("border-{color}-300"),
        format!("bg-{color}-50"),
        "hover:scale-105",
        "transition-all",
    );

    html! {
        <div data-track={track.key()}>
            <Card class={class} onclick={on_click}>
                <div class="text-center">
                    <div class="text-8xl mb-4" aria-hidden="true">{ track.emoji() }</div>
                    <h2 class={classes!("text-3xl", "font-bold", format!("text-{color}-700"))}>{ track.title() }</h2>
                    <p class="text-lg text-base-content/70 mt-2">{ track.blurb() }</p>
                </div>
                <Button
                    class={classes!("mt-4")}
                    block=true
                    variant={button_color(track)}
                    size={DaisySize::Lg}
                    testid={AttrValue::from(format!("start-{}", track.key()))}
                    label={AttrValue::from(text::START_GAME)}
                />
            </Card>
        </div>
    }
}
