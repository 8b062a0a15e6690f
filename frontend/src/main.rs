use log::{info, Level};
use starshine_frontend::Landing;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if console_log::init_with_level(Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }

    info!("Starting StarShine landing page");
    yew::Renderer::<Landing>::new().render();
}
