#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::prelude::mount_to_body(selah_web::app::App);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {}
