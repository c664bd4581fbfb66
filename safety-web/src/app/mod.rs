use std::rc::Rc;

use crate::components::daisy_ui::{Card, Toast};
use crate::components::ui::{QuizScreen, TrackMenu};
use crate::game::{CatalogError, QuizAction, ScenarioCatalog, Track};
use crate::text;
use yew::prelude::*;

pub mod bootstrap;
pub mod store;
pub mod test_bridge;
pub mod toasts;

pub use store::{QuizStore, StoreAction};
pub use toasts::{ToastEntry, ToastQueue};

#[function_component(App)]
pub fn app() -> Html {
    let loaded = use_memo((), |()| bootstrap::load_catalog());
    html! { <AppShell catalog={(*loaded).clone()} /> }
}

#[derive(Properties, PartialEq, Clone)]
pub struct AppShellProps {
    pub catalog: Result<Rc<ScenarioCatalog>, CatalogError>,
}

/// Quiz when the catalog loaded, error card otherwise.
#[function_component(AppShell)]
pub fn app_shell(p: &AppShellProps) -> Html {
    match &p.catalog {
        Ok(catalog) => html! { <QuizApp catalog={Rc::clone(catalog)} /> },
        Err(err) => html! {
            <main class="min-h-screen p-4 flex items-center justify-center" data-screen="error">
                <Card title={AttrValue::from(text::LOAD_FAILED)} class={classes!("bg-error", "text-error-content", "max-w-lg")}>
                    <p class="font-mono text-sm">{ err.to_string() }</p>
                </Card>
            </main>
        },
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct QuizAppProps {
    pub catalog: Rc<ScenarioCatalog>,
}

#[function_component(QuizApp)]
pub fn quiz_app(p: &QuizAppProps) -> Html {
    let store = {
        let catalog = Rc::clone(&p.catalog);
        use_reducer(move || QuizStore::new(catalog))
    };

    // The bridge closures outlive renders, so they read the state through a shared cell.
    let snapshot = use_mut_ref(|| store.state);
    *snapshot.borrow_mut() = store.state;
    test_bridge::use_test_bridge(&test_bridge::BridgeHandles {
        snapshot,
        catalog: Rc::clone(&p.catalog),
        dispatcher: store.dispatcher(),
    });

    let dismiss = {
        let dispatcher = store.dispatcher();
        Callback::from(move |id: u64| dispatcher.dispatch(StoreAction::DismissToast(id)))
    };
    let latest = store
        .toasts
        .latest()
        .map(|entry| (entry.id, entry.notice.duration_ms));
    toasts::use_auto_dismiss(latest, dismiss.clone());

    let on_select = {
        let dispatcher = store.dispatcher();
        Callback::from(move |track: Track| {
            dispatcher.dispatch(QuizAction::SelectTrack(track).into());
        })
    };
    let on_answer = {
        let dispatcher = store.dispatcher();
        Callback::from(move |index: usize| {
            dispatcher.dispatch(QuizAction::SubmitAnswer(index).into());
        })
    };
    let on_next = {
        let dispatcher = store.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(QuizAction::Advance.into()))
    };
    let on_menu = {
        let dispatcher = store.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(QuizAction::Reset.into()))
    };
    let on_dismiss = Callback::from(move |id: AttrValue| match id.parse::<u64>() {
        Ok(id) => dismiss.emit(id),
        Err(_) => log::warn!("unknown toast id {id}"),
    });

    let screen = if store.state.mode.is_menu() {
        html! { <TrackMenu {on_select} /> }
    } else {
        html! {
            <QuizScreen
                state={store.state}
                catalog={Rc::clone(&store.catalog)}
                {on_answer}
                {on_next}
                {on_menu}
            />
        }
    };
    let toasts: Vec<_> = store.toasts.entries().iter().map(toasts::toast_item).collect();

    html! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 via-purple-50 to-pink-50">
            { screen }
            <Toast {toasts} dismiss_label={AttrValue::from(text::DISMISS)} on_dismiss={on_dismiss} />
        </div>
    }
}
