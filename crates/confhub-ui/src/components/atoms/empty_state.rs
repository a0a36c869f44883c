//! Placeholder panel for views with nothing to show.
//!
//! # Design
//! - Copy and actions are entirely prop-driven.
//! - Optional actions render only when provided.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    /// Announce the panel to assistive tech when it replaces content.
    #[prop_or_default]
    pub live: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    let role = props.live.then_some(AttrValue::Static("status"));
    html! {
        <section class={classes!("empty-state", props.class.clone())} role={role}>
            <h4>{props.title.clone()}</h4>
            {props.description.clone().map(|text| html! {
                <p class="muted">{text}</p>
            }).unwrap_or_default()}
            if !props.children.is_empty() {
                <div class="empty-actions">{ for props.children.iter() }</div>
            }
        </section>
    }
}
