//! Browser entry point: logging setup and mounting the root component.

#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        leptos::logging::error!("console logger init failed: {e}");
    }

    leptos::mount::mount_to_body(namebank::app::App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    eprintln!("namebank runs in the browser; build it with `trunk serve --features csr`");
}
