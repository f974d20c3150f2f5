//! Alert banner with optional retry and dismiss actions.

use leptos::prelude::*;

#[component]
pub fn ErrorMessage(
    message: String,
    #[prop(optional)] on_retry: Option<Callback<()>>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="error-message error" role="alert">
            <div class="error-content">
                <span class="error-icon" aria-hidden="true">"⚠️"</span>
                <span class="error-text">{message}</span>
            </div>
            <div class="error-actions">
                {on_retry.map(|retry| {
                    view! {
                        <button class="error-button retry-button" type="button" on:click=move |_| retry.run(())>
                            "Retry"
                        </button>
                    }
                })}
                {on_dismiss.map(|dismiss| {
                    view! {
                        <button
                            class="error-button dismiss-button"
                            type="button"
                            aria-label="Dismiss error message"
                            on:click=move |_| dismiss.run(())
                        >
                            "×"
                        </button>
                    }
                })}
            </div>
        </div>
    }
}
