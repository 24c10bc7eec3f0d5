use time::macros::datetime;
use uuid::Uuid;

use gallery_domain::{
	cursor::{self, CursorKey, DecodedCursor},
	predicate::{self, Constraint, UnsupportedFilter},
	request::{FeedContext, FeedFilters, FeedScope},
};

#[test]
fn cursor_round_trips_plain_fields() {
	for (primary, tie_break) in [
		("2024-05-01T10:00:00Z", "9b2e0c56-0d1f-4a59-9a8e-0c3b6c2f8f11"),
		("a", "b"),
		("", "id-1"),
		("2024-05-01T10:00:00Z", ""),
		("", ""),
		("with space", "ünïcödé"),
		("2024-05-01T10:00:00.123456Z", "id,with,commas"),
	] {
		let token = cursor::encode(primary, tie_break);

		assert_eq!(
			cursor::decode(&token),
			Some(DecodedCursor { primary: primary.to_string(), tie_break: tie_break.to_string() })
		);
	}
}

#[test]
fn cursor_is_url_safe() {
	let token = cursor::encode("2024-05-01T10:00:00+02:00", "???>>>~~~");

	assert!(
		token.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'),
		"Token is not URL-safe: {token}"
	);
}

#[test]
fn comma_in_primary_key_corrupts_round_trip() {
	let token = cursor::encode("2024,05", "id");
	let decoded = cursor::decode(&token).expect("Token should still decode.");

	assert_eq!(decoded.primary, "2024");
	assert_eq!(decoded.tie_break, "05,id");
}

#[test]
fn malformed_cursors_decode_to_none() {
	assert_eq!(cursor::decode(""), None);
	assert_eq!(cursor::decode("   "), None);
	assert_eq!(cursor::decode("!!!not base64!!!"), None);
	// Valid base64 of "no-delimiter".
	assert_eq!(cursor::decode("bm8tZGVsaW1pdGVy"), None);
	// Valid base64 of invalid UTF-8 bytes.
	assert_eq!(cursor::decode("_-8"), None);
}

#[test]
fn cursor_key_round_trips() {
	let key = CursorKey::new(
		datetime!(2024-05-01 10:00:00.123456 UTC),
		Uuid::parse_str("9b2e0c56-0d1f-4a59-9a8e-0c3b6c2f8f11").expect("uuid"),
	);
	let token = key.encode().expect("Key should encode.");

	assert_eq!(CursorKey::decode(&token), Some(key));
}

#[test]
fn cursor_key_rejects_foreign_payloads() {
	let bad_time = cursor::encode("yesterday", &Uuid::new_v4().to_string());
	let bad_id = cursor::encode("2024-05-01T10:00:00Z", "not-a-uuid");

	assert_eq!(CursorKey::decode(&bad_time), None);
	assert_eq!(CursorKey::decode(&bad_id), None);
	assert_eq!(CursorKey::decode(&cursor::encode("", &Uuid::new_v4().to_string())), None);
	assert_eq!(CursorKey::decode(&cursor::encode("2024-05-01T10:00:00Z", "")), None);
}

#[test]
fn global_context_without_filters_has_no_constraints() {
	let constraints = predicate::build(&FeedContext::Global, &FeedFilters::default());

	assert!(constraints.is_empty());
	assert!(constraints.unsupported.is_empty());
}

#[test]
fn saved_and_collection_contexts_become_membership_constraints() {
	let user_id = Uuid::new_v4();
	let collection_id = Uuid::new_v4();
	let saved = predicate::build(&FeedContext::Saved { user_id }, &FeedFilters::default());
	let collection =
		predicate::build(&FeedContext::Collection { collection_id }, &FeedFilters::default());

	assert_eq!(saved.constraints, vec![Constraint::SavedBy { user_id }]);
	assert_eq!(collection.constraints, vec![Constraint::InCollection { collection_id }]);
}

#[test]
fn filters_combine_with_context() {
	let user_id = Uuid::new_v4();
	let author_id = Uuid::new_v4();
	let filters = FeedFilters {
		domain: Some(" architecture ".to_string()),
		author_id: Some(author_id),
		canonical_category: Some("interior".to_string()),
		..Default::default()
	};
	let constraints = predicate::build(&FeedContext::Saved { user_id }, &filters);

	assert_eq!(
		constraints.constraints,
		vec![
			Constraint::SavedBy { user_id },
			Constraint::Topic("architecture".to_string()),
			Constraint::Author(author_id),
			Constraint::Category("interior".to_string()),
		]
	);
}

#[test]
fn blank_string_filters_are_ignored() {
	let filters = FeedFilters {
		domain: Some("   ".to_string()),
		canonical_category: Some(String::new()),
		canonical_tag: Some(" ".to_string()),
		..Default::default()
	};
	let constraints = predicate::build(&FeedContext::Global, &filters);

	assert!(constraints.is_empty());
	assert!(constraints.unsupported.is_empty());
}

#[test]
fn unimplemented_filters_are_reported() {
	let filters = FeedFilters {
		canonical_tag: Some("brutalism".to_string()),
		saved_by_user_id: Some(Uuid::new_v4()),
		..Default::default()
	};
	let constraints = predicate::build(&FeedContext::Global, &filters);

	assert!(constraints.is_empty());
	assert_eq!(
		constraints.unsupported,
		vec![UnsupportedFilter::CanonicalTag, UnsupportedFilter::SavedByUser]
	);
}

#[test]
fn builder_is_deterministic() {
	let context = FeedContext::Collection { collection_id: Uuid::new_v4() };
	let filters = FeedFilters {
		domain: Some("nature".to_string()),
		author_id: Some(Uuid::new_v4()),
		..Default::default()
	};

	assert_eq!(predicate::build(&context, &filters), predicate::build(&context, &filters));
}

#[test]
fn blank_queries_have_no_text_query() {
	assert_eq!(FeedScope::default().text_query(), None);
	assert_eq!(FeedScope { query: Some("  \t".to_string()) }.text_query(), None);
	assert_eq!(FeedScope { query: Some(" moody light ".to_string()) }.text_query(), Some("moody light"));
}

#[test]
fn context_uses_tagged_json() {
	let collection_id = Uuid::parse_str("9b2e0c56-0d1f-4a59-9a8e-0c3b6c2f8f11").expect("uuid");
	let value = serde_json::to_value(FeedContext::Collection { collection_id })
		.expect("Failed to serialize context.");

	assert_eq!(
		value,
		serde_json::json!({
			"type": "collection",
			"collection_id": "9b2e0c56-0d1f-4a59-9a8e-0c3b6c2f8f11",
		})
	);

	let global: FeedContext =
		serde_json::from_value(serde_json::json!({ "type": "global" })).expect("global");

	assert_eq!(global, FeedContext::Global);
}
