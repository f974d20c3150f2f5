//! Modal form for editing an existing name record.
//!
//! The form is derived from `record` when the modal mounts; opening the modal
//! for a different record mounts a fresh instance.

use leptos::prelude::*;

use super::form_fields::{CategorySelect, FeatureCheckboxes};
use super::modal_frame::ModalFrame;
use crate::net::api::ApiClient;
use crate::net::types::NameRecord;
use crate::state::name_form::{CloseOutcome, NameFormState, SUCCESS_CLOSE_DELAY, UPDATE_FAILED_MESSAGE};
use crate::util::timer::sleep;
use crate::util::vocabulary::unlisted_category;

#[component]
pub fn UpdateNameModal(record: NameRecord, on_close: Callback<()>, on_updated: Callback<()>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let state = RwSignal::new(NameFormState::for_record(&record));
    let busy = Signal::derive(move || state.with(|s| s.busy));
    let extra_category = unlisted_category(&record.category);

    let request_close = Callback::new(move |()| {
        match state.try_update(NameFormState::close) {
            Some(CloseOutcome::Dismissed) => on_close.run(()),
            Some(CloseOutcome::Saved) => on_updated.run(()),
            Some(CloseOutcome::Ignored) | None => {}
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !state.try_update(NameFormState::begin_submit).unwrap_or(false) {
            return;
        }
        let Some(request) = state.with_untracked(|s| s.form.to_update_request()) else {
            log::error!("Error updating name: record has no nameid");
            state.update(|s| {
                s.busy = false;
                s.error = Some(UPDATE_FAILED_MESSAGE.to_owned());
            });
            return;
        };
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.update_name(&request).await;
            if let Err(e) = &result {
                log::error!("Error updating name {}: {e}", request.nameid);
            }
            if state.try_update(|s| s.finish_update(&result)).unwrap_or(false) {
                sleep(SUCCESS_CLOSE_DELAY).await;
                // The modal may have been closed or replaced meanwhile.
                if state.try_update(NameFormState::take_saved).unwrap_or(false) {
                    on_updated.run(());
                }
            }
        });
    };

    let nameid_text = move || {
        state.with(|s| s.form.nameid.as_ref().map(ToString::to_string).unwrap_or_default())
    };

    view! {
        <ModalFrame title="Update Name" busy=busy on_request_close=request_close>
            <form class="modal-form" on:submit=on_submit>
                <Show when=move || state.with(|s| s.error.is_some())>
                    <div class="error-message">{move || state.with(|s| s.error.clone().unwrap_or_default())}</div>
                </Show>
                <Show when=move || state.with(|s| s.success.is_some())>
                    <div class="success-message">{move || state.with(|s| s.success.clone().unwrap_or_default())}</div>
                </Show>

                <div class="form-group">
                    <label for="update-nameid">"Name ID"</label>
                    <input type="text" id="update-nameid" class="form-input" readonly=true prop:value=nameid_text/>
                </div>

                <div class="form-group">
                    <label for="update-name">"Name *"</label>
                    <input
                        type="text"
                        id="update-name"
                        name="name"
                        class="form-input"
                        required=true
                        disabled=move || busy.get()
                        prop:value=move || state.with(|s| s.form.name.clone())
                        on:input=move |ev| state.update(|s| s.form.name = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="update-category">"Category *"</label>
                    <CategorySelect
                        id="update-category"
                        placeholder="Select a category..."
                        value=Signal::derive(move || state.with(|s| s.form.category.clone()))
                        disabled=busy
                        required=true
                        extra=extra_category
                        on_change=Callback::new(move |category| state.update(|s| s.form.category = category))
                    />
                </div>

                <div class="form-group">
                    <label for="update-notes">"Notes"</label>
                    <textarea
                        id="update-notes"
                        name="notes"
                        class="form-textarea"
                        rows="4"
                        placeholder="Additional notes about this name..."
                        disabled=move || busy.get()
                        prop:value=move || state.with(|s| s.form.notes.clone())
                        on:input=move |ev| state.update(|s| s.form.notes = event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="form-group">
                    <label>"Features"</label>
                    <FeatureCheckboxes
                        id_prefix="update"
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
                        on:click=move |_| request_close.run(())
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="button button-primary"
                        disabled=move || !state.with(NameFormState::can_submit)
                    >
                        {move || if busy.get() { "Updating..." } else { "Update Name" }}
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}
