//! Toast host and notification context.
//!
//! # Design
//! - Views push [`Notice`]s through `NotifyCtx`; the app resolves copy and queues toasts.
//! - Each visible toast dismisses itself after a fixed delay.

use crate::core::notify::{Notice, Toast, ToastKind};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use gloo::timers::callback::Timeout;
use yew::prelude::*;

const AUTO_DISMISS_MS: u32 = 4000;

/// Context handle for raising notices from any view.
#[derive(Clone, PartialEq)]
pub(crate) struct NotifyCtx {
    on_notice: Callback<Notice>,
}

impl NotifyCtx {
    pub(crate) const fn new(on_notice: Callback<Notice>) -> Self {
        Self { on_notice }
    }

    pub(crate) fn notify(&self, notice: Notice) {
        self.on_notice.emit(notice);
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let dismiss_label = bundle.text("toast.dismiss", "Dismiss");
    {
        let toasts = props.toasts.clone();
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |list: &Vec<Toast>| {
                let handles: Vec<Timeout> = list
                    .iter()
                    .map(|toast| {
                        let on_dismiss = on_dismiss.clone();
                        let id = toast.id;
                        Timeout::new(AUTO_DISMISS_MS, move || on_dismiss.emit(id))
                    })
                    .collect();
                move || drop(handles)
            },
            toasts,
        );
    }

    html! {
        <div class={classes!("toast-host", props.class.clone())} aria-live="polite" aria-atomic="true">
            {for props.toasts.iter().map(|toast| render_toast(toast, &props.on_dismiss, &dismiss_label))}
        </div>
    }
}

fn render_toast(toast: &Toast, on_dismiss: &Callback<u64>, dismiss_label: &str) -> Html {
    let class = match toast.kind {
        ToastKind::Success => "success",
        ToastKind::Error => "error",
    };
    let id = toast.id;
    let on_close = {
        let on_dismiss = on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(id))
    };

    html! {
        <div key={id.to_string()} class={classes!("toast", class)} role="status">
            <span>{toast.message.clone()}</span>
            <button class="ghost" type="button" aria-label={dismiss_label.to_string()} onclick={on_close}>{"✕"}</button>
        </div>
    }
}
