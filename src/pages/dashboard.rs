//! Name bank dashboard: table, quick filter, and the create/update/search
//! modals.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route with content. It fetches the listing on mount,
//! refetches after every create/update, and swaps in search results when
//! the advanced search completes.

use leptos::prelude::*;

use crate::components::create_name_modal::CreateNameModal;
use crate::components::error_message::ErrorMessage;
use crate::components::loading_spinner::{LoadingSpinner, SpinnerSize};
use crate::components::name_table::NameTable;
use crate::components::search_names_modal::SearchNamesModal;
use crate::components::update_name_modal::UpdateNameModal;
use crate::net::api::ApiClient;
use crate::net::types::{NameRecord, SearchCriteria};
use crate::state::dashboard::{DashboardState, FETCH_LIMIT};
use crate::state::modal::{ModalEvent, ModalState};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let dashboard = RwSignal::new(DashboardState::default());
    let modal = RwSignal::new(ModalState::default());

    let dispatch = Callback::new(move |event: ModalEvent| {
        modal.update(|m| *m = std::mem::take(m).apply(event));
    });

    let fetch_names = Callback::new({
        let api = api.clone();
        move |()| {
            let seq = dashboard.try_update(DashboardState::begin_fetch).unwrap_or_default();
            spawn_fetch(api.clone(), dashboard, seq);
        }
    });

    let clear_search = Callback::new({
        let api = api.clone();
        move |()| {
            let seq = dashboard.try_update(DashboardState::clear_search).unwrap_or_default();
            spawn_fetch(api.clone(), dashboard, seq);
        }
    });

    let dismiss_error = Callback::new(move |()| dashboard.update(DashboardState::dismiss_error));
    let close_modal = Callback::new(move |()| dispatch.run(ModalEvent::Close));
    let on_saved = Callback::new(move |()| {
        dispatch.run(ModalEvent::Close);
        fetch_names.run(());
    });
    let on_search_results = Callback::new(move |results: Vec<NameRecord>| {
        dashboard.update(|s| s.apply_search_results(results));
        dispatch.run(ModalEvent::Close);
    });
    let on_edit = Callback::new(move |record: NameRecord| dispatch.run(ModalEvent::OpenUpdate(record)));

    let visible = Memo::new(move |_| dashboard.with(DashboardState::visible_names));
    let refreshing = Signal::derive(move || dashboard.with(DashboardState::is_refreshing));
    let empty_message = Signal::derive(move || dashboard.with(DashboardState::empty_message));

    fetch_names.run(());

    let active_modal = move || match modal.get() {
        ModalState::Closed => ().into_any(),
        ModalState::CreateOpen => view! { <CreateNameModal on_close=close_modal on_created=on_saved/> }.into_any(),
        ModalState::UpdateOpen(record) => {
            view! { <UpdateNameModal record=record on_close=close_modal on_updated=on_saved/> }.into_any()
        }
        ModalState::SearchOpen => {
            view! { <SearchNamesModal on_close=close_modal on_results=on_search_results/> }.into_any()
        }
    };

    view! {
        <div class="name-bank-dashboard">
            <div class="dashboard-header">
                <div class="dashboard-actions">
                    <div class="search-container">
                        <input
                            type="text"
                            class="search-input"
                            placeholder="Search by name or category..."
                            prop:value=move || dashboard.with(|s| s.search_text.clone())
                            on:input=move |ev| dashboard.update(|s| s.search_text = event_target_value(&ev))
                        />
                        <Show when=move || dashboard.with(|s| !s.search_text.is_empty())>
                            <button
                                type="button"
                                class="clear-search-icon"
                                aria-label="Clear search"
                                on:click=move |_| dashboard.update(|s| s.search_text.clear())
                            >
                                "✕"
                            </button>
                        </Show>
                    </div>
                    <div class="button-group">
                        <button class="search-button" on:click=move |_| dispatch.run(ModalEvent::OpenSearch)>
                            "Advanced Search"
                        </button>
                        <button class="create-button" on:click=move |_| dispatch.run(ModalEvent::OpenCreate)>
                            "Create New Name"
                        </button>
                    </div>
                </div>
            </div>

            {move || {
                dashboard
                    .with(|s| s.search_status.clone())
                    .map(|status| {
                        view! {
                            <div class="search-status">
                                <span class="search-status-text">{status}</span>
                                <button class="clear-search-button" on:click=move |_| clear_search.run(())>
                                    "Clear Search"
                                </button>
                            </div>
                        }
                    })
            }}

            {move || {
                dashboard
                    .with(|s| s.error.clone())
                    .map(|message| {
                        view! { <ErrorMessage message=message on_retry=fetch_names on_dismiss=dismiss_error/> }
                    })
            }}

            <div class="table-container">
                <Show
                    when=move || !dashboard.with(DashboardState::is_initial_load)
                    fallback=|| view! { <LoadingSpinner size=SpinnerSize::Large message="Loading names..."/> }
                >
                    <NameTable
                        rows=visible
                        refreshing=refreshing
                        empty_message=empty_message
                        on_edit=on_edit
                    />
                </Show>
            </div>

            {active_modal}
        </div>
    }
}

fn spawn_fetch(api: ApiClient, dashboard: RwSignal<DashboardState>, seq: u64) {
    leptos::task::spawn_local(async move {
        let result = api.search_names(&SearchCriteria::all(FETCH_LIMIT)).await;
        match &result {
            Ok(names) => log::debug!("fetched {} names", names.len()),
            Err(e) => log::error!("Error fetching names: {e}"),
        }
        if !dashboard.try_update(|s| s.finish_fetch(seq, result)).unwrap_or(false) {
            log::debug!("discarding stale fetch #{seq}");
        }
    });
}
