use crate::components::save_button::SaveButton;
use anyhow::anyhow;
use leptos::ev::MouseEvent;
use leptos::leptos_dom::logging::console_log;
use leptos::mount::{mount_to, mount_to_body};
use leptos::prelude::*;
use leptos::web_sys::HtmlElement;
use wasm_bindgen::JsCast;

/// Text in front of the save counter.
pub const SAVES_PREFIX: &str = "Saves requested: ";

#[component]
pub fn App() -> impl IntoView {
    let save_count = RwSignal::new(0u32);
    let on_save = Callback::new(move |_: MouseEvent| {
        save_count.update(|count| *count += 1);
        console_log(&format!(
            "save requested, {} so far",
            save_count.get_untracked()
        ));
    });

    view! {
        <div class="flex flex-col items-center p-6 space-y-4">
            <SaveButton on_click=on_save />
            <p class="save-count text-gray-700 font-medium">{SAVES_PREFIX}{move || save_count.get()}</p>
        </div>
    }
}

/// Mounts [`App`] into the element with `mount_point_id`, or into `<body>` when the page has no
/// such element. The app stays mounted for the life of the page.
pub fn mount_app(mount_point_id: &str) -> anyhow::Result<()> {
    match document().get_element_by_id(mount_point_id) {
        Some(element) => {
            let parent = element
                .dyn_into::<HtmlElement>()
                .map_err(|_| anyhow!("#{mount_point_id} is not an HTML element"))?;
            mount_to(parent, || view! { <App /> }).forget();
        }
        None => mount_to_body(|| view! { <App /> }),
    }
    Ok(())
}
