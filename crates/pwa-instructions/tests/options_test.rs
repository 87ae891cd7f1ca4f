//! Instruction options as they arrive from JSON

use pwa_instructions::{get_install_instructions, InstructionOptions, Platform};
use serde_json::json;

fn options(value: serde_json::Value) -> InstructionOptions {
    serde_json::from_value(value).unwrap_or_default()
}

#[test]
fn test_locale_key_selects_localized_shape() {
    let parsed = options(json!({"locale": "es", "overrides": {"gotItText": "Vale"}}));
    assert!(matches!(parsed, InstructionOptions::Localized { ref locale, .. } if locale == "es"));

    let instructions = get_install_instructions(Platform::Android, Some(&parsed));
    assert_eq!(instructions.got_it_text, "Vale");
    assert_eq!(instructions.steps[0].title, "Abre el menú del navegador");
}

#[test]
fn test_bare_bundle_is_legacy_overrides() {
    let parsed = options(json!({
        "title": "Get the app",
        "android": {"step2Desc": "Tap install"}
    }));
    assert!(matches!(parsed, InstructionOptions::Legacy(_)));

    let instructions = get_install_instructions(Platform::Android, Some(&parsed));
    assert_eq!(instructions.title, "Get the app");
    assert_eq!(instructions.steps[1].title, "Install app");
    assert_eq!(instructions.steps[1].description, "Tap install");
}

#[test]
fn test_unknown_locale_from_json_falls_back() {
    let parsed = options(json!({"locale": "fr"}));
    let instructions = get_install_instructions("ios", Some(&parsed));
    assert_eq!(instructions.title, "Install App");
    assert_eq!(instructions.steps.len(), 3);
}

#[test]
fn test_instructions_serialize_with_camel_case_keys() {
    let instructions = get_install_instructions(Platform::MacosSafari, None);
    let value = serde_json::to_value(&instructions).unwrap_or_default();
    assert_eq!(value["platform"], "macos_safari");
    assert_eq!(value["buttonText"], "Install App");
    assert_eq!(value["gotItText"], "Got it!");
    assert_eq!(value["steps"][1]["number"], 2);
}

#[test]
fn test_every_known_tag_string_resolves() {
    for (tag, count) in [
        ("ios", 3),
        ("android", 2),
        ("macos_safari", 2),
        ("desktop", 2),
        ("other", 2),
        ("symbian", 0),
    ] {
        assert_eq!(get_install_instructions(tag, None).steps.len(), count, "{tag}");
    }
}
