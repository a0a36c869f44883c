//! Track list and track management page.
//!
//! # Design
//! - `TrackList` is a pure projection of its props.
//! - `TracksPage` owns editing, confirmation and API calls, and writes confirmed
//!   changes back to the AppStore track cache.

use crate::app::api::ApiCtx;
use crate::components::atoms::icons::{IconPencil, IconXCircle};
use crate::components::atoms::{EmptyState, IconButton};
use crate::components::toast::NotifyCtx;
use crate::core::cancel::CancelToken;
use crate::core::store::{AppStore, app_dispatch};
use crate::features::tracks::actions::TrackAction;
use crate::features::tracks::api::{delete_track, rename_track};
use crate::features::tracks::logic::{
    ACTION_FAILED, REMOVE_SUCCEEDED, RENAME_SUCCEEDED, TrackRow, normalize_track_name, track_name,
    track_rows,
};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use confhub_api_models::{TrackId, TrackSummary};
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct TrackListProps {
    pub tracks: Vec<TrackSummary>,
    #[prop_or_default]
    pub active: Option<TrackId>,
    pub on_edit: Callback<TrackId>,
    pub on_remove: Callback<TrackId>,
}

#[function_component(TrackList)]
pub(crate) fn track_list(props: &TrackListProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let edit_label = bundle.text("tracks.edit", "Edit track");
    let remove_label = bundle.text("tracks.remove", "Remove track");
    let on_action = {
        let on_edit = props.on_edit.clone();
        let on_remove = props.on_remove.clone();
        Callback::from(move |action: TrackAction| match action {
            TrackAction::Edit(id) => on_edit.emit(id),
            TrackAction::Remove(id) => on_remove.emit(id),
        })
    };

    html! {
        <ul class="track-list">
            {for track_rows(&props.tracks, props.active.as_ref())
                .iter()
                .map(|row| render_row(row, &edit_label, &remove_label, &on_action))}
        </ul>
    }
}

fn render_row(
    row: &TrackRow,
    edit_label: &str,
    remove_label: &str,
    on_action: &Callback<TrackAction>,
) -> Html {
    let on_edit = {
        let action = row.edit_action();
        on_action.reform(move |_: MouseEvent| action.clone())
    };
    let on_remove = {
        let action = row.remove_action();
        on_action.reform(move |_: MouseEvent| action.clone())
    };
    html! {
        <li
            key={row.id.as_str().to_string()}
            class={classes!("track-row", row.tone().class())}
            aria-current={row.active.then_some(AttrValue::Static("true"))}
        >
            <span class="track-label">{row.label.clone()}</span>
            <div class="track-actions">
                <IconButton aria_label={edit_label.to_string()} onclick={on_edit}>
                    <IconPencil size="4" />
                </IconButton>
                <IconButton aria_label={remove_label.to_string()} danger={true} onclick={on_remove}>
                    <IconXCircle size="4" />
                </IconButton>
            </div>
        </li>
    }
}

#[function_component(TracksPage)]
pub(crate) fn tracks_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str, default: &str| bundle.text(key, default);
    let api_ctx = use_context::<ApiCtx>();
    let notify = use_context::<NotifyCtx>();
    let tracks = use_selector(|store: &AppStore| store.conference.tracks().to_vec());
    let dispatch = app_dispatch();
    let editing = use_state(|| None as Option<TrackId>);
    let draft = use_state(String::new);
    let draft_error = use_state(|| false);
    let pending_delete = use_state(|| None as Option<TrackId>);
    let busy = use_state(|| false);
    let lifetime = use_memo(|_| CancelToken::new(), ());

    {
        let lifetime = lifetime.clone();
        use_effect_with_deps(move |_| move || lifetime.cancel(), ());
    }

    let Some(api_ctx) = api_ctx else {
        return html! {
            <div class="panel">
                <p class="text-sm text-error">{"Missing API context."}</p>
            </div>
        };
    };

    let on_edit = {
        let tracks = tracks.clone();
        let editing = editing.clone();
        let draft = draft.clone();
        let draft_error = draft_error.clone();
        Callback::from(move |id: TrackId| {
            draft.set(track_name(&tracks, &id).unwrap_or_default());
            draft_error.set(false);
            editing.set(Some(id));
        })
    };

    let on_remove = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |id: TrackId| pending_delete.set(Some(id)))
    };

    let on_draft = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            draft.set(event.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_cancel_edit = {
        let editing = editing.clone();
        let draft_error = draft_error.clone();
        Callback::from(move |_: MouseEvent| {
            editing.set(None);
            draft_error.set(false);
        })
    };

    let on_rename = {
        let api_ctx = api_ctx.clone();
        let notify = notify.clone();
        let dispatch = dispatch.clone();
        let editing = editing.clone();
        let draft = draft.clone();
        let draft_error = draft_error.clone();
        let busy = busy.clone();
        let lifetime = lifetime.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(id) = (*editing).clone() else {
                return;
            };
            let Some(name) = normalize_track_name(&draft) else {
                draft_error.set(true);
                return;
            };
            draft_error.set(false);
            busy.set(true);
            let client = api_ctx.client.clone();
            let notify = notify.clone();
            let dispatch = dispatch.clone();
            let editing = editing.clone();
            let busy = busy.clone();
            let lifetime = (*lifetime).clone();
            spawn_local(async move {
                let result = rename_track(&client, &id, &name).await;
                if lifetime.is_cancelled() {
                    return;
                }
                let notice = match result {
                    Ok(()) => {
                        dispatch.reduce_mut(|store| store.conference.rename_track(&id, &name));
                        editing.set(None);
                        RENAME_SUCCEEDED
                    }
                    Err(_) => ACTION_FAILED,
                };
                if let Some(notify) = notify {
                    notify.notify(notice);
                }
                busy.set(false);
            });
        })
    };

    let on_cancel_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_: MouseEvent| pending_delete.set(None))
    };

    let on_confirm_delete = {
        let notify = notify.clone();
        let editing = editing.clone();
        let pending_delete = pending_delete.clone();
        let busy = busy.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(id) = (*pending_delete).clone() else {
                return;
            };
            pending_delete.set(None);
            busy.set(true);
            let client = api_ctx.client.clone();
            let notify = notify.clone();
            let dispatch = dispatch.clone();
            let editing = editing.clone();
            let busy = busy.clone();
            let lifetime = (*lifetime).clone();
            spawn_local(async move {
                let result = delete_track(&client, &id).await;
                if lifetime.is_cancelled() {
                    return;
                }
                let notice = match result {
                    Ok(()) => {
                        dispatch.reduce_mut(|store| store.conference.remove_track(&id));
                        if (*editing).as_ref() == Some(&id) {
                            editing.set(None);
                        }
                        REMOVE_SUCCEEDED
                    }
                    Err(_) => ACTION_FAILED,
                };
                if let Some(notify) = notify {
                    notify.notify(notice);
                }
                busy.set(false);
            });
        })
    };

    let rename_form = (*editing).as_ref().map(|_| {
        html! {
            <form class="panel track-rename" onsubmit={on_rename}>
                <label>
                    <span>{t("tracks.rename_label", "Track name")}</span>
                    <input
                        type="text"
                        value={(*draft).clone()}
                        disabled={*busy}
                        aria-invalid={draft_error.then_some(AttrValue::Static("true"))}
                        oninput={on_draft}
                    />
                </label>
                if *draft_error {
                    <p class="text-sm text-error">{t("tracks.name_required", "Track name is required.")}</p>
                }
                <div class="form-actions">
                    <button class="btn primary" type="submit" disabled={*busy}>
                        {t("tracks.rename_save", "Save")}
                    </button>
                    <button class="btn ghost" type="button" onclick={on_cancel_edit}>
                        {t("tracks.rename_cancel", "Cancel")}
                    </button>
                </div>
            </form>
        }
    });

    let confirm_dialog = (*pending_delete).as_ref().map(|id| {
        let name = track_name(&tracks, id).unwrap_or_else(|| id.to_string());
        html! {
            <div class="modal-backdrop">
                <div class="modal" role="alertdialog" aria-modal="true">
                    <h3>{t("tracks.confirm_title", "Remove track?")}</h3>
                    <p><strong>{name}</strong></p>
                    <p class="muted">{t("tracks.confirm_body", "The track and its configuration will be removed.")}</p>
                    <div class="form-actions">
                        <button class="btn danger" type="button" disabled={*busy} onclick={on_confirm_delete}>
                            {t("tracks.confirm", "Remove")}
                        </button>
                        <button class="btn ghost" type="button" onclick={on_cancel_delete}>
                            {t("tracks.cancel", "Cancel")}
                        </button>
                    </div>
                </div>
            </div>
        }
    });

    html! {
        <div class="tracks-page">
            <header class="page-header">
                <div>
                    <h2>{t("tracks.title", "Tracks")}</h2>
                    <p class="muted">{t("tracks.subtitle", "")}</p>
                </div>
            </header>
            if tracks.is_empty() {
                <EmptyState title={t("tracks.empty", "No tracks yet.")} />
            } else {
                <TrackList
                    tracks={(*tracks).clone()}
                    active={(*editing).clone()}
                    on_edit={on_edit}
                    on_remove={on_remove}
                />
            }
            {rename_form.unwrap_or_default()}
            {confirm_dialog.unwrap_or_default()}
        </div>
    }
}
