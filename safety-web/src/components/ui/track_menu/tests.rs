use super::{TrackMenu, TrackMenuProps};
use futures::executor::block_on;
use yew::LocalServerRenderer;
use yew::prelude::*;

fn render_menu() -> String {
    block_on(
        LocalServerRenderer::<TrackMenu>::with_props(TrackMenuProps {
            on_select: Callback::noop(),
        })
        .render(),
    )
}

#[test]
fn menu_renders_title_and_both_tracks() {
    let html = render_menu();
    assert!(html.contains("Школа Безопасности 🎓"), "missing title: {html}");
    for key in ["data-track=\"flood\"", "data-track=\"fire\""] {
        assert!(html.contains(key), "expected {key} in {html}");
    }
    assert!(html.contains("🌊"));
    assert!(html.contains("🔥"));
    assert!(html.contains("Наводнение"));
    assert!(html.contains("Пожар"));
    assert_eq!(html.matches("Начать игру").count(), 2);
}

#[test]
fn menu_uses_track_theme_colours() {
    let html = render_menu();
    assert!(html.contains("border-blue-300"));
    assert!(html.contains("border-orange-300"));
    assert!(html.contains("data-testid=\"start-flood\""));
}

#[test]
fn menu_lists_three_how_to_play_steps() {
    let html = render_menu();
    assert!(html.contains("✨ Как играть?"));
    for marker in ["1️⃣", "2️⃣", "3️⃣"] {
        assert!(html.contains(marker), "missing step {marker}");
    }
    assert!(html.contains("10 баллов"));
}
