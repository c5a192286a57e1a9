//! The "Save Changes" button.
//!
//! Stateless: the parent owns whatever happens on save and hands it in as `on_click`.
//! Styling comes from `styles/save_button.css`, which targets the `save-btn`,
//! `icon-square` and `save-text` classes.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;

/// Text rendered next to the save glyph.
pub const SAVE_LABEL: &str = "Save Changes";

#[component]
pub fn SaveButton(
    /// Called once per click with the event as the browser delivered it.
    /// Without it the button still renders and clicks do nothing.
    #[prop(optional, into)]
    on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let forward_click = move |ev: MouseEvent| {
        if let Some(on_click) = on_click.as_ref() {
            on_click.run(ev);
        }
    };

    view! {
        <button class="save-btn" on:click=forward_click>
            <span class="icon-square">
                <Icon width="16" height="16" icon=icondata::FaFloppyDiskSolid />
            </span>
            <span class="save-text">{SAVE_LABEL}</span>
        </button>
    }
}
