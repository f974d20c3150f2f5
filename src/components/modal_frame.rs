//! Overlay + header chrome shared by the dashboard modals.

use leptos::prelude::*;

/// Backdrop click, Escape, and the × button all route through
/// `on_request_close`; the modal decides whether closing is allowed.
#[component]
pub fn ModalFrame(
    title: &'static str,
    busy: Signal<bool>,
    on_request_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_request_close.run(());
        }
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_request_close.run(())>
            <div
                class="modal-content"
                role="dialog"
                aria-label=title
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <div class="modal-header">
                    <h2>{title}</h2>
                    <button
                        type="button"
                        class="modal-close-button"
                        disabled=move || busy.get()
                        on:click=move |_| on_request_close.run(())
                    >
                        "×"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
