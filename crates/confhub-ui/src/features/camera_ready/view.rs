//! Camera-ready settings page.
//!
//! # Design
//! - The track arrives as a property; changing it cancels the previous fetch and starts a new one.
//! - Every async continuation checks its cancel token before dispatching.
//! - Both lists render through one editor component parameterized by `FileList`.

use crate::app::api::ApiCtx;
use crate::components::atoms::icons::{IconPlus, IconSave, IconTrash};
use crate::components::atoms::{EmptyState, IconButton};
use crate::components::toast::NotifyCtx;
use crate::core::cancel::CancelToken;
use crate::features::camera_ready::actions::{CameraReadyAction, EntryEdit};
use crate::features::camera_ready::logic::{
    SettingsSource, load_error, load_notice, load_settings, rename_edit, save_notice,
    save_settings,
};
use crate::features::camera_ready::state::{CameraReadyState, FileList, LoadPhase, LoadSequencer};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use confhub_api_models::{FileRequirement, TrackId, TrackSummary};
use gloo::console;
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::platform::spawn_local;
use yew::prelude::*;

impl Reducible for CameraReadyState {
    type Action = CameraReadyAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct CameraReadyPageProps {
    /// Track whose settings are edited; `None` until one is resolved.
    #[prop_or_default]
    pub track_id: Option<TrackId>,
    /// Tracks offered by the picker.
    #[prop_or_default]
    pub tracks: Vec<TrackSummary>,
    /// Present only when the user may switch tracks.
    #[prop_or_default]
    pub on_select_track: Option<Callback<TrackId>>,
}

#[function_component(CameraReadyPage)]
pub(crate) fn camera_ready_page(props: &CameraReadyPageProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str, default: &str| bundle.text(key, default);
    let api_ctx = use_context::<ApiCtx>();
    let notify = use_context::<NotifyCtx>();
    let state = use_reducer(CameraReadyState::default);
    let sequencer = use_mut_ref(LoadSequencer::default);
    let lifetime = use_memo(|_| CancelToken::new(), ());

    {
        let lifetime = lifetime.clone();
        use_effect_with_deps(move |_| move || lifetime.cancel(), ());
    }

    {
        let api_ctx = api_ctx.clone();
        let notify = notify.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |track: &Option<TrackId>| {
                let cancel = CancelToken::new();
                match (track.clone(), api_ctx) {
                    (Some(track), Some(api_ctx)) => {
                        let ticket = sequencer.borrow_mut().issue(track.clone());
                        state.dispatch(CameraReadyAction::BeginLoad(ticket.clone()));
                        let task_cancel = cancel.clone();
                        spawn_local(async move {
                            let outcome =
                                load_settings(api_ctx.client.as_ref(), &track, &task_cancel).await;
                            if task_cancel.is_cancelled() {
                                return;
                            }
                            if let Some(err) = load_error(&outcome) {
                                console::error!(
                                    "camera-ready load failed",
                                    track.to_string(),
                                    err.to_string()
                                );
                            }
                            if let (Some(notice), Some(notify)) = (load_notice(&outcome), notify) {
                                notify.notify(notice);
                            }
                            state.dispatch(CameraReadyAction::LoadSettled { ticket, outcome });
                        });
                    }
                    _ => state.dispatch(CameraReadyAction::Reset),
                }
                move || cancel.cancel()
            },
            props.track_id.clone(),
        );
    }

    let on_edit = {
        let state = state.clone();
        Callback::from(move |(list, edit): (FileList, EntryEdit)| {
            state.dispatch(CameraReadyAction::Edit { list, edit });
        })
    };

    let on_save = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let Some((track, settings)) = state.save_request() else {
                return;
            };
            let Some(api_ctx) = api_ctx.clone() else {
                return;
            };
            state.dispatch(CameraReadyAction::SaveStarted);
            let state = state.clone();
            let notify = notify.clone();
            let lifetime = (*lifetime).clone();
            spawn_local(async move {
                let result = save_settings(api_ctx.client.as_ref(), &track, &settings).await;
                if let Err(err) = &result {
                    console::warn!("camera-ready save failed", track.to_string(), err.to_string());
                }
                if lifetime.is_cancelled() {
                    return;
                }
                if let (Some(notice), Some(notify)) = (save_notice(&result), notify) {
                    notify.notify(notice);
                }
                state.dispatch(CameraReadyAction::SaveSettled);
            });
        })
    };

    let picker = props.on_select_track.clone().and_then(|on_select| {
        (!props.tracks.is_empty()).then(|| {
            track_picker(
                &props.tracks,
                props.track_id.as_ref(),
                &t("camera_ready.track_picker", "Track"),
                on_select,
            )
        })
    });

    let body = match state.phase {
        LoadPhase::Idle => html! {
            <EmptyState title={t("camera_ready.no_track", "Select a track to configure camera-ready submissions.")} />
        },
        LoadPhase::Loading => html! {
            <div class="panel loading" role="status" aria-busy="true">
                <p class="muted">{t("camera_ready.loading", "Loading settings...")}</p>
            </div>
        },
        LoadPhase::Failed => html! {
            <EmptyState
                live={true}
                title={t("camera_ready.failed", "Settings could not be loaded.")}
                description={Some(AttrValue::from(t("camera_ready.failed_hint", "Reload the page or pick another track to try again.")))}
            />
        },
        LoadPhase::Ready => {
            let save_label = if state.saving {
                t("camera_ready.saving", "Saving...")
            } else {
                t("camera_ready.save", "Save Changes")
            };
            html! {
                <>
                    if state.source == Some(SettingsSource::Defaults) {
                        <p class="hint muted">{t("camera_ready.defaults_hint", "Nothing has been saved for this track yet; showing the default requirements.")}</p>
                    }
                    <FileRequirementsEditor
                        list={FileList::CameraReady}
                        title={t("camera_ready.camera_ready_title", "Camera-ready files")}
                        description={t("camera_ready.camera_ready_body", "")}
                        entries={state.list(FileList::CameraReady).to_vec()}
                        disabled={state.saving}
                        on_edit={on_edit.clone()}
                    />
                    <FileRequirementsEditor
                        list={FileList::Copyright}
                        title={t("camera_ready.copyright_title", "Copyright files")}
                        description={t("camera_ready.copyright_body", "")}
                        entries={state.list(FileList::Copyright).to_vec()}
                        disabled={state.saving}
                        on_edit={on_edit}
                    />
                    <div class="form-actions">
                        <button
                            class="btn primary"
                            type="button"
                            disabled={!state.can_save()}
                            aria-busy={state.saving.to_string()}
                            onclick={on_save}
                        >
                            <IconSave size="4" />
                            <span>{save_label}</span>
                        </button>
                    </div>
                </>
            }
        }
    };

    html! {
        <div class="camera-ready-page">
            <header class="page-header">
                <div>
                    <h2>{t("camera_ready.title", "Camera Ready Submissions")}</h2>
                    <p class="muted">{t("camera_ready.subtitle", "")}</p>
                </div>
                {picker.unwrap_or_default()}
            </header>
            {body}
        </div>
    }
}

fn track_picker(
    tracks: &[TrackSummary],
    selected: Option<&TrackId>,
    label: &str,
    on_select: Callback<TrackId>,
) -> Html {
    let onchange = Callback::from(move |event: Event| {
        let value = event.target_unchecked_into::<HtmlSelectElement>().value();
        if !value.is_empty() {
            on_select.emit(TrackId::new(value));
        }
    });
    html! {
        <label class="track-picker">
            <span>{label.to_string()}</span>
            <select {onchange}>
                {for tracks.iter().map(|track| html! {
                    <option
                        key={track.id.as_str().to_string()}
                        value={track.id.as_str().to_string()}
                        selected={selected == Some(&track.id)}
                    >
                        {track.name.clone()}
                    </option>
                })}
            </select>
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct FileRequirementsEditorProps {
    pub list: FileList,
    pub title: AttrValue,
    #[prop_or_default]
    pub description: AttrValue,
    pub entries: Vec<FileRequirement>,
    #[prop_or_default]
    pub disabled: bool,
    pub on_edit: Callback<(FileList, EntryEdit)>,
}

/// Editable list of file requirements; add, rename, toggle and remove entries.
#[function_component(FileRequirementsEditor)]
pub(crate) fn file_requirements_editor(props: &FileRequirementsEditorProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str, default: &str| bundle.text(key, default);
    let draft = use_state(String::new);
    let list = props.list;

    let on_draft = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            draft.set(event.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_add = {
        let draft = draft.clone();
        let on_edit = props.on_edit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if draft.trim().is_empty() {
                return;
            }
            on_edit.emit((list, EntryEdit::Add((*draft).clone())));
            draft.set(String::new());
        })
    };

    let required_label = t("camera_ready.required", "Required");
    let remove_label = t("camera_ready.remove", "Remove requirement");
    let unnamed = t("camera_ready.unnamed", "Untitled requirement");

    html! {
        <section class="panel file-requirements">
            <header>
                <h3>{props.title.clone()}</h3>
                if !props.description.is_empty() {
                    <p class="muted">{props.description.clone()}</p>
                }
            </header>
            if props.entries.is_empty() {
                <p class="muted">{t("camera_ready.empty", "No requirements yet.")}</p>
            } else {
                <ul class="requirement-list">
                    {for props.entries.iter().enumerate().map(|(index, entry)| {
                        requirement_row(
                            index,
                            entry,
                            &RowLabels { required: &required_label, remove: &remove_label, unnamed: &unnamed },
                            props.disabled,
                            &props.on_edit.reform(move |edit: EntryEdit| (list, edit)),
                        )
                    })}
                </ul>
            }
            <form class="requirement-add" onsubmit={on_add}>
                <input
                    type="text"
                    value={(*draft).clone()}
                    placeholder={t("camera_ready.add_placeholder", "New requirement name")}
                    disabled={props.disabled}
                    oninput={on_draft}
                />
                <button class="btn" type="submit" disabled={props.disabled || draft.trim().is_empty()}>
                    <IconPlus size="4" />
                    <span>{t("camera_ready.add", "Add")}</span>
                </button>
            </form>
        </section>
    }
}

struct RowLabels<'a> {
    required: &'a str,
    remove: &'a str,
    unnamed: &'a str,
}

fn requirement_row(
    index: usize,
    entry: &FileRequirement,
    labels: &RowLabels<'_>,
    disabled: bool,
    on_edit: &Callback<EntryEdit>,
) -> Html {
    let stored_label = entry.label().unwrap_or_default().to_string();
    let on_rename = {
        let on_edit = on_edit.clone();
        let stored_label = stored_label.clone();
        Callback::from(move |event: Event| {
            let input = event.target_unchecked_into::<HtmlInputElement>();
            match rename_edit(index, &input.value()) {
                Some(edit) => on_edit.emit(edit),
                None => input.set_value(&stored_label),
            }
        })
    };
    let on_required = on_edit.reform(move |event: Event| {
        EntryEdit::SetRequired(index, event.target_unchecked_into::<HtmlInputElement>().checked())
    });
    let on_remove = on_edit.reform(move |_: MouseEvent| EntryEdit::Remove(index));

    html! {
        <li key={index.to_string()} class="requirement-row">
            <input
                type="text"
                class="requirement-label"
                value={stored_label}
                placeholder={labels.unnamed.to_string()}
                disabled={disabled}
                onchange={on_rename}
            />
            <label class="requirement-required">
                <input
                    type="checkbox"
                    checked={entry.is_required()}
                    disabled={disabled}
                    onchange={on_required}
                />
                <span>{labels.required.to_string()}</span>
            </label>
            <IconButton aria_label={labels.remove.to_string()} danger={true} disabled={disabled} onclick={on_remove}>
                <IconTrash size="4" />
            </IconButton>
        </li>
    }
}
