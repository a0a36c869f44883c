//! Conference shell: session loading, navigation and section routing.
//!
//! # Design
//! - The session is fetched once per conference id; a new id cancels the previous request.
//! - Role and track resolution happen here, and pages receive plain properties.

use super::api::ApiCtx;
use super::routes::Route;
use crate::components::atoms::EmptyState;
use crate::core::cancel::CancelToken;
use crate::core::context::SessionStatus;
use crate::core::store::{AppStore, app_dispatch};
use crate::features::camera_ready::view::CameraReadyPage;
use crate::features::tracks::view::TracksPage;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode, TranslationBundle};
use confhub_api_models::TrackId;
use gloo::console;
use web_sys::{AbortController, HtmlSelectElement};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// Page shown inside a conference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Section {
    CameraReady,
    Tracks,
}

impl Section {
    pub(crate) const fn for_route(route: &Route) -> Option<Self> {
        match route {
            Route::CameraReady { .. } => Some(Self::CameraReady),
            Route::Tracks { .. } => Some(Self::Tracks),
            Route::NotFound => None,
        }
    }

    fn route(self, conference_id: &str) -> Route {
        let conference_id = conference_id.to_string();
        match self {
            Self::CameraReady => Route::CameraReady { conference_id },
            Self::Tracks => Route::Tracks { conference_id },
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ConferenceShellProps {
    pub conference_id: String,
    pub section: Section,
    pub locale: LocaleCode,
    pub on_locale: Callback<LocaleCode>,
}

#[function_component(ConferenceShell)]
pub(crate) fn conference_shell(props: &ConferenceShellProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str, default: &str| bundle.text(key, default);
    let api_ctx = use_context::<ApiCtx>();
    let dispatch = app_dispatch();
    let status = use_selector(|store: &AppStore| store.conference.status);
    let settings_track = use_selector(|store: &AppStore| store.conference.settings_track());
    let tracks = use_selector(|store: &AppStore| store.conference.tracks().to_vec());
    let can_pick = use_selector(|store: &AppStore| store.conference.can_pick_track());

    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |conference_id: &String| {
                let cancel = CancelToken::new();
                if let Some(api_ctx) = api_ctx {
                    let conference_id = conference_id.clone();
                    dispatch.reduce_mut(|store| store.conference.begin_session(&conference_id));
                    let controller = AbortController::new().ok();
                    let signal = controller.as_ref().map(AbortController::signal);
                    if let Some(controller) = controller {
                        cancel.on_cancel(move || controller.abort());
                    }
                    let task_cancel = cancel.clone();
                    spawn_local(async move {
                        let result = api_ctx
                            .client
                            .fetch_session(&conference_id, signal.as_ref())
                            .await;
                        if task_cancel.is_cancelled() {
                            return;
                        }
                        match result {
                            Ok(session) => {
                                dispatch.reduce_mut(|store| {
                                    store.conference.apply_session(&conference_id, session);
                                });
                            }
                            Err(err) if err.is_cancelled() => {}
                            Err(err) => {
                                console::error!(
                                    "conference session load failed",
                                    conference_id.clone(),
                                    err.to_string()
                                );
                                dispatch.reduce_mut(|store| {
                                    store.conference.fail_session(&conference_id);
                                });
                            }
                        }
                    });
                }
                move || cancel.cancel()
            },
            props.conference_id.clone(),
        );
    }

    let on_select_track = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: TrackId| {
            dispatch.reduce_mut(|store| {
                store.conference.select_track(&id);
            });
        })
    };

    let on_locale_change = {
        let on_locale = props.on_locale.clone();
        Callback::from(move |event: Event| {
            let code = event.target_unchecked_into::<HtmlSelectElement>().value();
            if let Some(next) = LocaleCode::from_lang_tag(&code) {
                on_locale.emit(next);
            }
        })
    };

    let nav_link = |section: Section, key: &str, default: &str| {
        let classes = classes!("nav-link", (props.section == section).then_some("active"));
        html! {
            <Link<Route> to={section.route(&props.conference_id)} classes={classes}>
                {t(key, default)}
            </Link<Route>>
        }
    };

    let content = match *status {
        SessionStatus::Idle | SessionStatus::Loading => html! {
            <div class="panel loading" role="status" aria-busy="true">
                <p class="muted">{t("shell.loading", "Loading conference...")}</p>
            </div>
        },
        SessionStatus::Failed => html! {
            <EmptyState live={true} title={t("shell.load_failed", "Could not load this conference.")} />
        },
        SessionStatus::Ready => match props.section {
            Section::CameraReady => html! {
                <CameraReadyPage
                    track_id={(*settings_track).clone()}
                    tracks={(*tracks).clone()}
                    on_select_track={can_pick.then_some(on_select_track)}
                />
            },
            Section::Tracks => html! { <TracksPage /> },
        },
    };

    html! {
        <div class="app-shell">
            <header class="app-header">
                <nav class="app-nav">
                    {nav_link(Section::CameraReady, "shell.nav_camera_ready", "Camera Ready")}
                    {nav_link(Section::Tracks, "shell.nav_tracks", "Tracks")}
                </nav>
                <label class="locale-select">
                    <span class="sr-only">{t("shell.locale", "Language")}</span>
                    <select onchange={on_locale_change}>
                        {for LocaleCode::all().iter().map(|code| html! {
                            <option value={code.code()} selected={*code == props.locale}>{code.label()}</option>
                        })}
                    </select>
                </label>
            </header>
            <main class="app-main">{content}</main>
        </div>
    }
}
