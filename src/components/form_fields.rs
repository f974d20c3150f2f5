//! Form controls shared by the create, update and search modals.

use leptos::prelude::*;

use crate::util::vocabulary::{CATEGORIES, FEATURES, feature_label};

/// Category dropdown over the fixed category list.
///
/// `extra` adds one more option ahead of the known categories, used to keep a
/// record's out-of-vocabulary category selectable while editing.
#[component]
pub fn CategorySelect(
    id: &'static str,
    placeholder: &'static str,
    value: Signal<String>,
    disabled: Signal<bool>,
    on_change: Callback<String>,
    #[prop(optional)] required: bool,
    #[prop(default = None)] extra: Option<String>,
) -> impl IntoView {
    let extra_option = extra.map(|category| {
        let selected = category.clone();
        let option_value = category.clone();
        view! {
            <option value=option_value prop:selected=move || value.get() == selected>
                {category}
            </option>
        }
    });

    view! {
        <select
            id=id
            name="category"
            class="form-input"
            required=required
            disabled=move || disabled.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="" prop:selected=move || value.get().is_empty()>
                {placeholder}
            </option>
            {extra_option}
            {CATEGORIES
                .iter()
                .map(|category| {
                    let category = *category;
                    view! {
                        <option value=category prop:selected=move || value.get() == category>
                            {category}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

/// One checkbox per known feature flag, labelled with its display name.
#[component]
pub fn FeatureCheckboxes(
    id_prefix: &'static str,
    checked: Signal<Vec<String>>,
    disabled: Signal<bool>,
    on_toggle: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="features-grid">
            {FEATURES
                .iter()
                .map(|flag| {
                    let key = flag.key;
                    let label = feature_label(key);
                    let id = format!("{id_prefix}-feature-{key}");
                    view! {
                        <div class="feature-checkbox">
                            <input
                                type="checkbox"
                                id=id.clone()
                                prop:checked=move || checked.with(|keys| keys.iter().any(|k| k == key))
                                disabled=move || disabled.get()
                                on:change=move |_| on_toggle.run(key.to_owned())
                            />
                            <label for=id>{label}</label>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
