//! Browser entry point: logging setup and mounting the root component.

fn main() {
    #[cfg(feature = "web")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        leptos::mount::mount_to_body(client::app::App);
    }
}
