use yew::prelude::*;

/// Props for icon-only row controls.
#[derive(Properties, PartialEq)]
pub(crate) struct IconButtonProps {
    /// Accessible label, also shown as the tooltip.
    pub aria_label: AttrValue,
    /// Additional CSS classes.
    #[prop_or_default]
    pub class: Classes,
    /// Render with destructive styling.
    #[prop_or_default]
    pub danger: bool,
    /// Whether the button is disabled.
    #[prop_or_default]
    pub disabled: bool,
    /// Click handler.
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    /// Icon content.
    #[prop_or_default]
    pub children: Children,
}

#[function_component(IconButton)]
pub(crate) fn icon_button(props: &IconButtonProps) -> Html {
    let classes = classes!(
        "icon-btn",
        "ghost",
        props.danger.then_some("danger"),
        props.class.clone()
    );
    html! {
        <button
            class={classes}
            type="button"
            title={props.aria_label.clone()}
            aria-label={props.aria_label.clone()}
            onclick={props.onclick.clone()}
            disabled={props.disabled}
        >
            {for props.children.iter()}
        </button>
    }
}
