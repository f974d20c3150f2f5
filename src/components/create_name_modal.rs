//! Modal form for creating a name record.

use leptos::prelude::*;

use super::form_fields::{CategorySelect, FeatureCheckboxes};
use super::modal_frame::ModalFrame;
use crate::net::api::ApiClient;
use crate::state::name_form::{CloseOutcome, NameFormState, SUCCESS_CLOSE_DELAY};
use crate::util::timer::sleep;

/// Create form. `on_created` fires once per save: after
/// [`SUCCESS_CLOSE_DELAY`], or earlier if the user closes the modal during
/// the delay. `on_close` fires when the user dismisses it unsaved.
#[component]
pub fn CreateNameModal(on_close: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let state = RwSignal::new(NameFormState::default());
    let busy = Signal::derive(move || state.with(|s| s.busy));

    let request_close = Callback::new(move |()| {
        match state.try_update(NameFormState::close) {
            Some(CloseOutcome::Dismissed) => on_close.run(()),
            Some(CloseOutcome::Saved) => on_created.run(()),
            Some(CloseOutcome::Ignored) | None => {}
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !state.try_update(NameFormState::begin_submit).unwrap_or(false) {
            return;
        }
        let request = state.with_untracked(|s| s.form.to_create_request());
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.create_name(&request).await;
            if let Err(e) = &result {
                log::error!("Error creating name: {e}");
            }
            if state.try_update(|s| s.finish_create(&result)).unwrap_or(false) {
                sleep(SUCCESS_CLOSE_DELAY).await;
                // The modal may have been closed or replaced meanwhile.
                if state.try_update(NameFormState::take_saved).unwrap_or(false) {
                    on_created.run(());
                }
            }
        });
    };

    view! {
        <ModalFrame title="Create New Name" busy=busy on_request_close=request_close>
            <form class="modal-form" on:submit=on_submit>
                <Show when=move || state.with(|s| s.error.is_some())>
                    <div class="error-message">{move || state.with(|s| s.error.clone().unwrap_or_default())}</div>
                </Show>
                <Show when=move || state.with(|s| s.success.is_some())>
                    <div class="success-message">{move || state.with(|s| s.success.clone().unwrap_or_default())}</div>
                </Show>

                <div class="form-group">
                    <label for="create-name">"Name *"</label>
                    <input
                        type="text"
                        id="create-name"
                        name="name"
                        class="form-input"
                        placeholder="Enter the name"
                        required=true
                        disabled=move || busy.get()
                        prop:value=move || state.with(|s| s.form.name.clone())
                        on:input=move |ev| state.update(|s| s.form.name = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="create-category">"Category *"</label>
                    <CategorySelect
                        id="create-category"
                        placeholder="Select a category..."
                        value=Signal::derive(move || state.with(|s| s.form.category.clone()))
                        disabled=busy
                        required=true
                        on_change=Callback::new(move |category| state.update(|s| s.form.category = category))
                    />
                </div>

                <div class="form-group">
                    <label for="create-notes">"Notes"</label>
                    <textarea
                        id="create-notes"
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
                        id_prefix="create"
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
                        {move || if busy.get() { "Creating..." } else { "Create Name" }}
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}
