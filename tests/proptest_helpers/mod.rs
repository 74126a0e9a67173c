#![allow(dead_code)]

use figedit::Record;
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Record names in canonical form: non-empty, no separator, trimmed.
pub fn arb_name() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_ .-]{0,12}[A-Za-z0-9_]?".prop_map(|name| name.trim().to_string())
}

/// Record names as they may appear in files: any colon-free text with at
/// least one non-whitespace character, possibly padded.
pub fn arb_padded_name() -> impl Strategy<Value = String> {
    ("[ \t]{0,3}", "[^:\\s]", "[^:]{0,10}", "[ \t]{0,3}")
        .prop_map(|(lead, first, rest, trail)| format!("{lead}{first}{rest}{trail}"))
}

pub fn arb_padded_records(max_len: usize) -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(
        (arb_padded_name(), any::<i64>(), any::<i64>())
            .prop_map(|(name, width, height)| Record::new(name, width, height)),
        0..=max_len,
    )
}

pub fn arb_record() -> impl Strategy<Value = Record> {
    (arb_name(), any::<i64>(), any::<i64>())
        .prop_map(|(name, width, height)| Record::new(name, width, height))
}

pub fn arb_records(max_len: usize) -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(arb_record(), 0..=max_len)
}

/// Arbitrary raw lines without line breaks.
pub fn arb_text_lines(max_len: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[^\r\n]{0,40}", 0..=max_len)
}

/// Legal XML element names.
pub fn arb_xml_key() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_.-]{0,12}"
}

/// Trimmed values free of markup characters.
pub fn arb_xml_value() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 :;,.!?'\"()*+/=_#%$@-]{0,24}".prop_map(|value| value.trim().to_string())
}

/// `key: value` raw lines in canonical form.
pub fn arb_xml_lines(max_len: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        (arb_xml_key(), arb_xml_value()).prop_map(|(key, value)| format!("{key}: {value}")),
        0..=max_len,
    )
}

/// `key:value` raw lines with arbitrary spacing around key and value,
/// paired with their canonical `key: value` form.
pub fn arb_loose_xml_lines(max_len: usize) -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(
        (
            "[ \t]{0,2}",
            arb_xml_key(),
            "[ \t]{0,2}",
            "[ \t]{0,3}",
            arb_xml_value(),
            "[ \t]{0,3}",
        )
            .prop_map(|(k_lead, key, k_trail, v_lead, value, v_trail)| {
                (
                    format!("{k_lead}{key}{k_trail}:{v_lead}{value}{v_trail}"),
                    format!("{key}: {value}"),
                )
            }),
        0..=max_len,
    )
}

pub fn to_lines(records: &[Record]) -> Vec<String> {
    records.iter().map(ToString::to_string).collect()
}
