use super::*;
use serde_json::json;

fn record_from(value: serde_json::Value) -> NameRecord {
    serde_json::from_value(value).unwrap()
}

fn filled_form() -> NameForm {
    NameForm {
        nameid: None,
        name: "Zenith".to_owned(),
        category: "technology".to_owned(),
        notes: String::new(),
        features: vec!["hightech".to_owned(), "trusted".to_owned()],
    }
}

// =============================================================
// NameForm::from_record
// =============================================================

#[test]
fn from_record_uses_true_namefeature_keys() {
    let record = record_from(json!({
        "nameid": 5,
        "name": "Vale",
        "category": "wellness",
        "namefeatures": { "realword": true, "coined": false }
    }));
    let form = NameForm::from_record(&record);
    assert_eq!(form.features, ["realword"]);
    assert_eq!(form.nameid, Some(NameId::from(5)));
    assert_eq!(form.name, "Vale");
    assert_eq!(form.category, "wellness");
    assert_eq!(form.notes, "");
}

#[test]
fn from_record_namefeatures_mapping_wins_over_features() {
    let record = record_from(json!({
        "namefeatures": { "sensory": true },
        "features": ["playful"]
    }));
    assert_eq!(NameForm::from_record(&record).features, ["sensory"]);
}

#[test]
fn from_record_uses_features_list() {
    let record = record_from(json!({ "features": ["coined", "playful"] }));
    assert_eq!(NameForm::from_record(&record).features, ["coined", "playful"]);
}

#[test]
fn from_record_splits_features_string() {
    let record = record_from(json!({ "features": "coined, playful, " }));
    assert_eq!(NameForm::from_record(&record).features, ["coined", "playful"]);
}

#[test]
fn from_record_without_features_is_empty() {
    let record = record_from(json!({ "id": "n-2", "name": "Orbit", "notes": "short" }));
    let form = NameForm::from_record(&record);
    assert!(form.features.is_empty());
    assert_eq!(form.nameid, Some(NameId::Text("n-2".to_owned())));
    assert_eq!(form.notes, "short");
}

// =============================================================
// Feature toggling and requests
// =============================================================

#[test]
fn toggle_feature_adds_then_removes() {
    let mut form = NameForm::default();
    form.toggle_feature("coined");
    assert!(form.has_feature("coined"));
    form.toggle_feature("coined");
    assert!(!form.has_feature("coined"));
}

#[test]
fn is_complete_requires_name_and_category() {
    let mut form = filled_form();
    assert!(form.is_complete());
    form.category.clear();
    assert!(!form.is_complete());
    form.category = "pets".to_owned();
    form.name.clear();
    assert!(!form.is_complete());
}

#[test]
fn create_request_sets_full_feature_mapping() {
    let body = serde_json::to_value(filled_form().to_create_request()).unwrap();
    let flags = body["namefeatures"].as_object().unwrap();
    assert_eq!(flags.len(), 17);
    assert_eq!(flags["hightech"], json!(true));
    assert_eq!(flags["trusted"], json!(true));
    let others_false = flags
        .iter()
        .filter(|(k, _)| *k != "hightech" && *k != "trusted")
        .all(|(_, v)| *v == json!(false));
    assert!(others_false);
    assert_eq!(body["name"], json!("Zenith"));
    assert_eq!(body["category"], json!("technology"));
    assert_eq!(body["notes"], json!(""));
    assert!(body.get("nameid").is_none());
}

#[test]
fn update_request_requires_identifier() {
    assert!(filled_form().to_update_request().is_none());

    let form = NameForm { nameid: Some(NameId::from(9)), ..filled_form() };
    let request = form.to_update_request().unwrap();
    assert_eq!(request.nameid, NameId::from(9));
    assert_eq!(request.namefeatures.len(), 17);
}

#[test]
fn update_request_drops_unknown_features() {
    let record = record_from(json!({ "nameid": 1, "namefeatures": { "vintage": true, "coined": true } }));
    let request = NameForm::from_record(&record).to_update_request().unwrap();
    assert!(!request.namefeatures.contains_key("vintage"));
    assert_eq!(request.namefeatures["coined"], json!(true));
}

// =============================================================
// NameFormState transitions
// =============================================================

#[test]
fn begin_submit_requires_complete_form() {
    let mut state = NameFormState::default();
    assert!(!state.can_submit());
    assert!(!state.begin_submit());
    assert!(!state.busy);
}

#[test]
fn begin_submit_blocks_double_submit() {
    let mut state = NameFormState { form: filled_form(), ..NameFormState::default() };
    assert!(state.begin_submit());
    assert!(state.busy);
    assert!(!state.can_submit());
    assert!(!state.begin_submit());
}

#[test]
fn create_success_resets_fields_and_shows_message() {
    let mut state = NameFormState { form: filled_form(), ..NameFormState::default() };
    state.begin_submit();
    assert!(state.finish_create(&Ok(json!({ "nameid": 10 }))));
    assert!(!state.busy);
    assert_eq!(state.success.as_deref(), Some(CREATE_SUCCESS_MESSAGE));
    assert_eq!(state.form, NameForm::default());
}

#[test]
fn create_failure_keeps_fields_and_shows_error() {
    let mut state = NameFormState { form: filled_form(), ..NameFormState::default() };
    state.begin_submit();
    assert!(!state.finish_create(&Err(ApiError::Network("offline".to_owned()))));
    assert!(!state.busy);
    assert_eq!(state.error.as_deref(), Some(CREATE_FAILED_MESSAGE));
    assert!(state.success.is_none());
    assert_eq!(state.form, filled_form());
}

#[test]
fn update_success_keeps_fields() {
    let form = NameForm { nameid: Some(NameId::from(2)), ..filled_form() };
    let mut state = NameFormState { form: form.clone(), ..NameFormState::default() };
    state.begin_submit();
    assert!(state.finish_update(&Ok(Value::Null)));
    assert_eq!(state.success.as_deref(), Some(UPDATE_SUCCESS_MESSAGE));
    assert_eq!(state.form, form);
}

#[test]
fn update_failure_shows_error() {
    let mut state = NameFormState { form: filled_form(), ..NameFormState::default() };
    state.begin_submit();
    assert!(!state.finish_update(&Err(ApiError::Status(500))));
    assert_eq!(state.error.as_deref(), Some(UPDATE_FAILED_MESSAGE));
}

#[test]
fn close_is_ignored_while_busy() {
    let mut state = NameFormState { form: filled_form(), ..NameFormState::default() };
    state.begin_submit();
    assert_eq!(state.close(), CloseOutcome::Ignored);
    assert_eq!(state.form, filled_form());
}

#[test]
fn close_resets_form_and_status() {
    let mut state = NameFormState {
        form: filled_form(),
        error: Some(CREATE_FAILED_MESSAGE.to_owned()),
        ..NameFormState::default()
    };
    assert_eq!(state.close(), CloseOutcome::Dismissed);
    assert_eq!(state, NameFormState::default());
}

#[test]
fn update_success_blocks_resubmit_during_close_delay() {
    let form = NameForm { nameid: Some(NameId::from(2)), ..filled_form() };
    let mut state = NameFormState { form, ..NameFormState::default() };
    state.begin_submit();
    assert!(state.finish_update(&Ok(Value::Null)));
    assert!(!state.busy);
    assert!(!state.can_submit());
    assert!(!state.begin_submit());
}

#[test]
fn save_is_reported_once_after_delay() {
    let mut state = NameFormState { form: filled_form(), ..NameFormState::default() };
    state.begin_submit();
    assert!(state.finish_create(&Ok(json!({}))));
    assert!(state.take_saved());
    assert!(!state.take_saved());
}

#[test]
fn close_during_delay_reports_save_and_cancels_delayed_notice() {
    let form = NameForm { nameid: Some(NameId::from(2)), ..filled_form() };
    let mut state = NameFormState { form, ..NameFormState::default() };
    state.begin_submit();
    assert!(state.finish_update(&Ok(Value::Null)));
    assert_eq!(state.close(), CloseOutcome::Saved);
    assert!(!state.take_saved());
    assert_eq!(state.close(), CloseOutcome::Dismissed);
}

#[test]
fn failed_save_leaves_nothing_to_report() {
    let mut state = NameFormState { form: filled_form(), ..NameFormState::default() };
    state.begin_submit();
    assert!(!state.finish_create(&Err(ApiError::Status(500))));
    assert!(!state.take_saved());
    assert!(state.can_submit());
}

#[test]
fn for_record_starts_idle() {
    let record = record_from(json!({ "nameid": 3, "name": "Vale", "category": "wellness" }));
    let state = NameFormState::for_record(&record);
    assert!(!state.busy);
    assert!(state.error.is_none());
    assert!(state.can_submit());
}
