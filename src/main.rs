use leptos::leptos_dom::logging::console_error;
use save_button_ui::app::mount_app;

const MOUNT_POINT_ID: &str = "app";

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = mount_app(MOUNT_POINT_ID) {
        console_error(&format!("failed to mount app: {e:#}"));
    }
}
