//! End-to-end integration tests for the response builder
//!
//! These tests exercise the public API the way an application would: the
//! `respond` helper, chained overrides, language selection, configuration
//! injection, and every output representation.

use std::sync::Arc;

use serde_json::{json, Value};

use responsify_core::{
    respond, Language, MapConfig, Respond, TextField, Translator, APP_LOCALE, DEFAULT_LANGUAGE,
};

#[test]
fn test_response_with_status_only() {
    let envelope = respond(200).build();
    assert_eq!(envelope.status, 200);
    assert_eq!(envelope.message, "OK");
    assert_eq!(envelope.details, "The request was successful.");
    assert_eq!(envelope.data, json!({}));
}

#[test]
fn test_chained_message() {
    let envelope = respond(201).with_message("User created successfully").build();
    assert_eq!(envelope.status, 201);
    assert_eq!(envelope.message, "User created successfully");
    assert_eq!(envelope.details, "The resource was successfully created.");
}

#[test]
fn test_chained_details() {
    let envelope = respond(400).with_details("Invalid input provided").build();
    assert_eq!(envelope.message, "Bad Request");
    assert_eq!(envelope.details, "Invalid input provided");
}

#[test]
fn test_chained_data() {
    let data = json!({"id": 1, "name": "John Doe"});
    let envelope = respond(200).with_data(data.clone()).build();
    assert_eq!(envelope.data, data);
}

#[test]
fn test_full_chain() {
    let data = json!({"user": {"id": 1, "name": "John"}});
    let envelope = respond(201)
        .with_message("User created")
        .with_details("Account created successfully")
        .with_data(data.clone())
        .with_language("en")
        .build();

    assert_eq!(envelope.status, 201);
    assert_eq!(envelope.message, "User created");
    assert_eq!(envelope.details, "Account created successfully");
    assert_eq!(envelope.data, data);
}

#[test]
fn test_arabic_translations_differ_from_english() {
    let envelope = respond(200).with_language("ar").build();
    assert_eq!(envelope.status, 200);
    assert_ne!(envelope.message, "OK");
    assert!(!envelope.message.is_empty());
}

#[test]
fn test_invalid_language_code_falls_back_to_english() {
    let envelope = respond(200).with_language("invalid_language_code").build();
    assert_eq!(envelope.message, "OK");
}

#[test]
fn test_every_supported_language_yields_text() {
    for language in Language::ALL {
        let envelope = respond(200).with_language(language.code()).build();
        assert_eq!(envelope.status, 200);
        assert!(!envelope.message.is_empty());
        assert!(!envelope.details.is_empty());
    }
}

#[test]
fn test_unknown_status_code() {
    let envelope = respond(999).build();
    assert_eq!(envelope.status, 999);
    assert_eq!(envelope.message, "Unknown Status");
    assert_eq!(envelope.details, "No additional details available");
    assert_eq!(envelope.data, json!({}));
}

#[test]
fn test_common_status_codes_have_text() {
    for status in [100, 200, 201, 204, 301, 400, 401, 403, 404, 422, 500] {
        let envelope = respond(status).build();
        assert_eq!(envelope.status, status);
        assert!(!envelope.message.is_empty());
        assert!(!envelope.details.is_empty());
    }
}

#[test]
fn test_null_and_empty_data() {
    assert_eq!(respond(204).build().data, json!({}));
    assert_eq!(respond(200).with_data(Value::Null).build().data, json!({}));
    assert_eq!(respond(200).with_data(json!([])).build().data, json!([]));
}

#[test]
fn test_complex_data_round_trips() {
    let complex = json!({
        "users": [
            {"id": 1, "name": "John"},
            {"id": 2, "name": "Jane"}
        ],
        "meta": {"total": 2, "page": 1}
    });
    let builder = respond(200).with_data(complex.clone());

    assert_eq!(builder.build().data, complex);
    let decoded: Value = serde_json::from_str(&builder.to_json_string()).unwrap();
    assert_eq!(decoded["data"], complex);
}

#[test]
fn test_mixed_data_types_survive_serialization() {
    let mixed = json!({
        "string": "test",
        "integer": 42,
        "float": 3.14,
        "boolean": true,
        "null_value": null,
        "array": [1, 2, 3],
        "nested": {"deep": {"value": "found"}}
    });
    let builder = respond(200).with_data(mixed.clone());
    let decoded: Value = serde_json::from_str(&builder.to_json_string()).unwrap();
    assert_eq!(decoded["data"], mixed);
}

#[test]
fn test_special_characters_pass_through() {
    let message = "Message with spécial çháráctérs: àáâãäå";
    let details = "Details with émôjis 🚀 and números: 123";
    let builder = respond(200).with_message(message).with_details(details);

    let envelope = builder.build();
    assert_eq!(envelope.message, message);
    assert_eq!(envelope.details, details);

    let decoded: Value = serde_json::from_str(&builder.to_json_string()).unwrap();
    assert_eq!(decoded["message"], message);
    assert_eq!(decoded["details"], details);
}

#[test]
fn test_all_output_formats_agree() {
    let builder = respond(201)
        .with_message("Created successfully")
        .with_data(json!({"id": 123}));

    let from_struct = serde_json::to_value(builder.build()).unwrap();
    let from_map = Value::Object(builder.to_map());
    let from_string: Value = serde_json::from_str(&builder.to_json_string()).unwrap();
    let http_response = builder.to_http().unwrap();
    let from_http: Value = serde_json::from_str(http_response.body()).unwrap();

    assert_eq!(from_struct, from_map);
    assert_eq!(from_struct, from_string);
    assert_eq!(from_struct, from_http);
    assert_eq!(http_response.status().as_u16(), 201);
}

#[test]
fn test_json_string_key_order() {
    let json_string = respond(200).to_json_string();
    let status_pos = json_string.find("\"status\"").unwrap();
    let message_pos = json_string.find("\"message\"").unwrap();
    let details_pos = json_string.find("\"details\"").unwrap();
    let data_pos = json_string.find("\"data\"").unwrap();
    assert!(status_pos < message_pos);
    assert!(message_pos < details_pos);
    assert!(details_pos < data_pos);
}

#[test]
fn test_language_switching_mid_chain() {
    // The last language set wins for translated fields; overrides still win
    // over translation regardless of position.
    let envelope = respond(200)
        .with_language("en")
        .with_details("custom details")
        .with_language("de")
        .build();

    assert_eq!(envelope.message, "OK");
    assert_eq!(envelope.details, "custom details");

    let envelope = respond(404).with_language("en").with_language("de").build();
    assert_eq!(envelope.message, "Nicht gefunden");
}

#[test]
fn test_app_locale_config_drives_language() {
    let config = Arc::new(MapConfig::new().set(APP_LOCALE, "de"));
    let envelope = respond(200).with_config(config).build();
    assert_eq!(envelope.details, "Die Anfrage war erfolgreich.");
}

#[test]
fn test_package_default_config_used_when_locale_unsupported() {
    let config = Arc::new(MapConfig::new().set(APP_LOCALE, "xx").set(DEFAULT_LANGUAGE, "es"));
    let envelope = respond(200).with_config(config).build();
    assert_eq!(envelope.details, "La solicitud se realizó con éxito.");
}

#[test]
fn test_explicit_language_beats_config() {
    let config = Arc::new(MapConfig::new().set(APP_LOCALE, "de"));
    let envelope = respond(200).with_config(config).with_language("it").build();
    assert_eq!(envelope.details, "La richiesta è stata completata con successo.");
}

#[test]
fn test_custom_translator_is_consulted() {
    struct Uppercase;

    impl Translator for Uppercase {
        fn lookup(&self, _language: Language, status: u16, field: TextField) -> Option<String> {
            (status == 200 && field == TextField::Message).then(|| "EVERYTHING FINE".to_string())
        }
    }

    let envelope = respond(200).with_translator(Arc::new(Uppercase)).build();
    assert_eq!(envelope.message, "EVERYTHING FINE");
    // Details miss in every language and degrade to the fixed literal.
    assert_eq!(envelope.details, "No additional details available");
}

#[test]
fn test_helper_equals_factory() {
    assert_eq!(respond(200).build(), Respond::status(200).build());
    assert_eq!(respond(404).status_code(), 404);
}

#[test]
fn test_send_writes_the_json_form() {
    // Test output is captured by the harness; this only asserts the write
    // path succeeds.
    assert!(respond(200).send().is_ok());
}

#[test]
fn test_display_is_valid_json() {
    let text = respond(200).to_string();
    let decoded: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(decoded["status"], 200);
}
