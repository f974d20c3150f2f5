//! Loading indicator used for first load and refreshes.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinnerSize {
    #[default]
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(self) -> &'static str {
        match self {
            Self::Medium => "loading-spinner spinner-medium",
            Self::Large => "loading-spinner spinner-large",
        }
    }
}

/// Spinner with an optional caption.
#[component]
pub fn LoadingSpinner(
    #[prop(optional)] size: SpinnerSize,
    #[prop(optional, into)] message: Option<String>,
) -> impl IntoView {
    view! {
        <div class="loading-container">
            <div class=size.class() role="status" aria-label="Loading"></div>
            {message.map(|text| view! { <p class="loading-message" aria-live="polite">{text}</p> })}
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}
