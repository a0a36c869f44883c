//! Application root: contexts, routing and toasts.
//!
//! # Design
//! - Build the API client, translation bundle and notifier once and provide them as contexts.
//! - Route to a conference shell; everything below reads role and tracks from the AppStore.

use crate::components::atoms::EmptyState;
use crate::components::toast::{NotifyCtx, ToastHost};
use crate::core::notify::{Notice, ToastAction, ToastQueue};
use crate::i18n::{LocaleCode, TranslationBundle};
use api::ApiCtx;
use preferences::{api_base_url, load_access_token, load_locale, persist_locale};
pub(crate) use routes::Route;
use shell::{ConferenceShell, Section};
use yew::prelude::*;
use yew_router::prelude::*;

pub(crate) mod api;
mod preferences;
mod routes;
mod shell;

#[function_component(ConfhubApp)]
pub(crate) fn confhub_app() -> Html {
    let locale = use_state(load_locale);
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url(), load_access_token()), ());
    let bundle = {
        let locale = *locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };
    let toasts = use_reducer(ToastQueue::default);

    let notify = {
        let dispatcher = toasts.dispatcher();
        let bundle = bundle.clone();
        use_memo(
            move |_| {
                NotifyCtx::new(Callback::from(move |notice: Notice| {
                    dispatcher.dispatch(ToastAction::Push(notice.kind, notice.message(&bundle)));
                }))
            },
            *locale,
        )
    };

    let on_dismiss = {
        let dispatcher = toasts.dispatcher();
        Callback::from(move |id: u64| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    let on_locale = {
        let locale = locale.clone();
        Callback::from(move |next: LocaleCode| {
            persist_locale(next);
            locale.set(next);
        })
    };

    let current_locale = *locale;
    let bundle_routes = bundle.clone();

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
                <ContextProvider<NotifyCtx> context={(*notify).clone()}>
                    <BrowserRouter>
                        <Switch<Route> render={move |route: Route| {
                            match (route.conference_id(), Section::for_route(&route)) {
                                (Some(conference_id), Some(section)) => html! {
                                    <ConferenceShell
                                        conference_id={conference_id.to_string()}
                                        section={section}
                                        locale={current_locale}
                                        on_locale={on_locale.clone()}
                                    />
                                },
                                _ => html! {
                                    <main class="app-main">
                                        <EmptyState title={bundle_routes.text("not_found.title", "Page not found")} />
                                    </main>
                                },
                            }
                        }} />
                        <ToastHost toasts={toasts.items().to_vec()} on_dismiss={on_dismiss} />
                    </BrowserRouter>
                </ContextProvider<NotifyCtx>>
            </ContextProvider<TranslationBundle>>
        </ContextProvider<ApiCtx>>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<ConfhubApp>::with_root(root).render();
    } else {
        yew::Renderer::<ConfhubApp>::new().render();
    }
}
