//! Sortable, paginated table of name records.
//!
//! DESIGN
//! ======
//! The table owns only presentation state (sort column, page, page size).
//! Rows arrive already filtered from the dashboard.

use leptos::prelude::*;

use super::loading_spinner::{LoadingSpinner, SpinnerSize};
use crate::net::types::NameRecord;
use crate::state::table::{PAGE_SIZES, SortColumn, TableState};
use crate::util::display::{feature_summary, notes_preview, notes_title};

const COLUMN_COUNT: &str = "6";

#[component]
pub fn NameTable(
    #[prop(into)] rows: Signal<Vec<NameRecord>>,
    refreshing: Signal<bool>,
    empty_message: Signal<String>,
    on_edit: Callback<NameRecord>,
) -> impl IntoView {
    let table = RwSignal::new(TableState::default());
    let total = move || rows.with(Vec::len);

    let sortable_header = move |label: &'static str, column: SortColumn| {
        view! {
            <th class="name-table__sortable" on:click=move |_| table.update(|t| t.toggle_sort(column))>
                {label}
                " "
                <span class="name-table__sort-icon">{move || table.with(|t| t.sort_indicator(column))}</span>
            </th>
        }
    };

    let body = move || {
        let page = rows.with(|all| table.with(|t| t.page_rows(all)));
        if page.is_empty() {
            return view! {
                <tr>
                    <td class="name-table__empty" colspan=COLUMN_COUNT>{empty_message.get()}</td>
                </tr>
            }
            .into_any();
        }
        page.into_iter()
            .map(|record| view! { <NameRow record=record on_edit=on_edit/> })
            .collect_view()
            .into_any()
    };

    let go_to = move |delta: isize| {
        let total = rows.with_untracked(Vec::len);
        table.update(|t| {
            let current = t.current_page(total);
            t.set_page(current.saturating_add_signed(delta));
        });
    };

    view! {
        <div class="name-table">
            <Show when=move || refreshing.get()>
                <LoadingSpinner size=SpinnerSize::Medium message="Refreshing data..."/>
            </Show>
            <table class="name-table__grid">
                <thead>
                    <tr>
                        {sortable_header("Name ID", SortColumn::NameId)}
                        {sortable_header("Name", SortColumn::Name)}
                        {sortable_header("Category", SortColumn::Category)}
                        <th>"Features"</th>
                        <th>"Notes"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
            <div class="name-table__pagination">
                <label class="name-table__page-size">
                    "Rows per page: "
                    <select on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                            table.update(|t| t.set_page_size(size));
                        }
                    }>
                        {PAGE_SIZES
                            .iter()
                            .map(|size| {
                                let size = *size;
                                view! {
                                    <option
                                        value=size.to_string()
                                        prop:selected=move || table.with(|t| t.page_size == size)
                                    >
                                        {size.to_string()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <span class="name-table__range">{move || table.with(|t| t.range_label(total()))}</span>
                <button
                    type="button"
                    class="name-table__page-button"
                    aria-label="Previous page"
                    disabled=move || table.with(|t| t.current_page(total()) <= 1)
                    on:click=move |_| go_to(-1)
                >
                    "‹"
                </button>
                <button
                    type="button"
                    class="name-table__page-button"
                    aria-label="Next page"
                    disabled=move || table.with(|t| t.current_page(total()) >= t.page_count(total()))
                    on:click=move |_| go_to(1)
                >
                    "›"
                </button>
            </div>
        </div>
    }
}

#[component]
fn NameRow(record: NameRecord, on_edit: Callback<NameRecord>) -> impl IntoView {
    let nameid = record.identifier().map(ToString::to_string).unwrap_or_default();
    let features = feature_summary(record.feature_value());
    let notes_cell = notes_preview(record.notes_text());
    let title = notes_title(record.notes.as_deref());
    let edit_label = format!("Edit {}", record.name);
    let name = record.name.clone();
    let category = record.category.clone();

    view! {
        <tr class="name-table__row">
            <td>{nameid}</td>
            <td>{name}</td>
            <td>{category}</td>
            <td class="features-cell">{features}</td>
            <td class="notes-cell" title=title>{notes_cell}</td>
            <td class="name-table__actions">
                <button
                    type="button"
                    class="action-button"
                    title="Edit Name"
                    aria-label=edit_label
                    on:click=move |_| on_edit.run(record.clone())
                >
                    "✎"
                </button>
            </td>
        </tr>
    }
}
