//! Advanced search modal filtering by category and feature flags.

use leptos::prelude::*;

use super::form_fields::{CategorySelect, FeatureCheckboxes};
use super::modal_frame::ModalFrame;
use crate::net::api::ApiClient;
use crate::net::types::NameRecord;
use crate::state::search_form::SearchFormState;

/// Search form. On success `on_results` receives the normalized results;
/// failures keep the modal open.
#[component]
pub fn SearchNamesModal(
    on_close: Callback<()>,
    on_results: Callback<Vec<NameRecord>>,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let state = RwSignal::new(SearchFormState::default());
    let busy = Signal::derive(move || state.with(|s| s.busy));

    let request_close = Callback::new(move |()| {
        if state.try_update(SearchFormState::close).unwrap_or(false) {
            on_close.run(());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(criteria) = state.try_update(SearchFormState::begin_submit).flatten() else {
            return;
        };
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.search_names(&criteria).await;
            if let Err(e) = &result {
                log::error!("Error searching names: {e}");
            }
            if let Some(results) = state.try_update(|s| s.finish(result)).flatten() {
                log::info!("search {criteria:?} matched {} names", results.len());
                on_results.run(results);
            }
        });
    };

    view! {
        <ModalFrame title="Search Names" busy=busy on_request_close=request_close>
            <form class="modal-form" on:submit=on_submit>
                <Show when=move || state.with(|s| s.error.is_some())>
                    <div class="error-message">{move || state.with(|s| s.error.clone().unwrap_or_default())}</div>
                </Show>

                <div class="form-group">
                    <label for="search-category">"Category"</label>
                    <CategorySelect
                        id="search-category"
                        placeholder="All categories..."
                        value=Signal::derive(move || state.with(|s| s.form.category.clone()))
                        disabled=busy
                        on_change=Callback::new(move |category| state.update(|s| s.form.category = category))
                    />
                </div>

                <div class="form-group">
                    <label>"Features"</label>
                    <FeatureCheckboxes
                        id_prefix="search"
                        checked=Signal::derive(move || state.with(|s| s.form.features.clone()))
                        disabled=busy
                        on_toggle=Callback::new(move |key: String| state.update(|s| s.form.toggle_feature(&key)))
                    />
                </div>

                <div class="modal-actions">
                    <button
                        type="button"
                        class="button button-secondary"
                        disabled=move || busy.get()
                        on:click=move |_| state.update(SearchFormState::clear_filters)
                    >
                        "Clear Filters"
                    </button>
                    <button
                        type="button"
                        class="button button-secondary"
                        disabled=move || busy.get()
                        on:click=move |_| request_close.run(())
                    >
                        "Cancel"
                    </button>
                    <button type="submit" class="button button-primary" disabled=move || busy.get()>
                        {move || if busy.get() { "Searching..." } else { "Search Names" }}
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}
