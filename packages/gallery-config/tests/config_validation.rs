use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use toml::Value;

use gallery_config::{Config, Error};

const SAMPLE_CONFIG_TEMPLATE_TOML: &str = include_str!("fixtures/sample_config.template.toml");

fn sample_toml_with(section: &str, key: &str, value: Value) -> String {
	let mut root: Value =
		toml::from_str(SAMPLE_CONFIG_TEMPLATE_TOML).expect("Failed to parse template config.");
	let table = root
		.as_table_mut()
		.expect("Template config must be a table.")
		.get_mut(section)
		.and_then(Value::as_table_mut)
		.unwrap_or_else(|| panic!("Template config must include [{section}]."));

	table.insert(key.to_string(), value);

	toml::to_string(&root).expect("Failed to render template config.")
}

fn write_temp_config(payload: String) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System time must be valid.")
		.as_nanos();
	let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
	let pid = std::process::id();
	let mut path = env::temp_dir();

	path.push(format!("gallery_config_test_{nanos}_{pid}_{ordinal}.toml"));

	fs::write(&path, payload).expect("Failed to write test config.");

	path
}

fn load_payload(payload: String) -> gallery_config::Result<Config> {
	let path = write_temp_config(payload);
	let result = gallery_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	result
}

fn expect_validation(payload: String, expected: &str) {
	let err = load_payload(payload).expect_err("Expected a validation error.");

	assert!(matches!(err, Error::Validation { .. }), "Unexpected error kind: {err:?}");
	assert!(err.to_string().contains(expected), "Unexpected error message: {err}");
}

#[test]
fn sample_config_loads() {
	let cfg = load_payload(SAMPLE_CONFIG_TEMPLATE_TOML.to_string())
		.expect("Sample config should be valid.");

	assert_eq!(cfg.feed.default_limit, 20);
	assert_eq!(cfg.feed.max_limit, 100);
	assert_eq!(cfg.feed.rank_depth_cap, 100);
	assert_eq!(cfg.ranking.text_search_config, "english");
	assert!(cfg.service.bind_localhost_only);
}

#[test]
fn feed_and_ranking_sections_are_optional() {
	let mut root: Value =
		toml::from_str(SAMPLE_CONFIG_TEMPLATE_TOML).expect("Failed to parse template config.");
	let table = root.as_table_mut().expect("Template config must be a table.");

	table.remove("feed");
	table.remove("ranking");

	let cfg = load_payload(toml::to_string(&root).expect("Failed to render config."))
		.expect("Config without optional sections should be valid.");

	assert_eq!(cfg.feed.default_limit, 20);
	assert_eq!(cfg.feed.max_limit, 100);
	assert_eq!(cfg.ranking.text_search_config, "english");
}

#[test]
fn blank_text_search_config_falls_back_to_english() {
	let payload = sample_toml_with("ranking", "text_search_config", Value::String("  ".into()));
	let cfg = load_payload(payload).expect("Blank text search config should normalize.");

	assert_eq!(cfg.ranking.text_search_config, "english");
}

#[test]
fn text_search_config_must_be_an_identifier() {
	let payload = sample_toml_with(
		"ranking",
		"text_search_config",
		Value::String("english'; DROP TABLE x".into()),
	);

	expect_validation(payload, "ranking.text_search_config must be a plain identifier.");
}

#[test]
fn default_limit_must_be_positive() {
	let payload = sample_toml_with("feed", "default_limit", Value::Integer(0));

	expect_validation(payload, "feed.default_limit must be greater than zero.");
}

#[test]
fn max_limit_must_cover_default_limit() {
	let payload = sample_toml_with("feed", "max_limit", Value::Integer(10));

	expect_validation(
		payload,
		"feed.max_limit must be greater than or equal to feed.default_limit.",
	);
}

#[test]
fn rank_depth_cap_must_be_positive() {
	let payload = sample_toml_with("feed", "rank_depth_cap", Value::Integer(0));

	expect_validation(payload, "feed.rank_depth_cap must be greater than zero.");
}

#[test]
fn http_bind_must_be_non_empty() {
	let payload = sample_toml_with("service", "http_bind", Value::String(String::new()));

	expect_validation(payload, "service.http_bind must be non-empty.");
}

#[test]
fn missing_file_reports_read_error() {
	let path = env::temp_dir().join("gallery_config_test_missing_file.toml");
	let err = gallery_config::load(&path).expect_err("Expected a read error.");

	assert!(matches!(err, Error::ReadConfig { .. }), "Unexpected error kind: {err:?}");
}

#[test]
fn malformed_toml_reports_parse_error() {
	let err = load_payload("[service\nhttp_bind = ".to_string()).expect_err("Expected parse error.");

	assert!(matches!(err, Error::ParseConfig { .. }), "Unexpected error kind: {err:?}");
}
