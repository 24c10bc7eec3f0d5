//! Opaque resumption tokens for the chronological feed.
//!
//! A cursor is the URL-safe base64 form of `"<primary>,<tie_break>"`. Fields are not escaped, so a
//! primary key containing a comma does not survive a round trip.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use uuid::Uuid;

pub const DELIMITER: char = ',';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedCursor {
	pub primary: String,
	pub tie_break: String,
}

/// Typed ordering key of the chronological feed, `(created_at, item_id)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorKey {
	pub created_at: OffsetDateTime,
	pub item_id: Uuid,
}
impl CursorKey {
	pub fn new(created_at: OffsetDateTime, item_id: Uuid) -> Self {
		Self { created_at, item_id }
	}

	/// Returns `None` when the timestamp cannot be rendered as RFC 3339 (years outside 0..=9999).
	pub fn encode(&self) -> Option<String> {
		let primary = self.created_at.format(&Rfc3339).ok()?;

		Some(encode(&primary, &self.item_id.to_string()))
	}

	/// Decodes and parses a cursor. Anything malformed or foreign yields `None`.
	pub fn decode(cursor: &str) -> Option<Self> {
		let DecodedCursor { primary, tie_break } = decode(cursor)?;
		let created_at = OffsetDateTime::parse(&primary, &Rfc3339).ok()?;
		let item_id = Uuid::parse_str(&tie_break).ok()?;

		Some(Self { created_at, item_id })
	}
}

pub fn encode(primary: &str, tie_break: &str) -> String {
	let raw = format!("{primary}{DELIMITER}{tie_break}");

	URL_SAFE_NO_PAD.encode(raw.as_bytes())
}

pub fn decode(cursor: &str) -> Option<DecodedCursor> {
	let trimmed = cursor.trim();

	if trimmed.is_empty() {
		return None;
	}

	let bytes = URL_SAFE_NO_PAD.decode(trimmed).ok()?;
	let raw = String::from_utf8(bytes).ok()?;
	let (primary, tie_break) = raw.split_once(DELIMITER)?;

	Some(DecodedCursor { primary: primary.to_string(), tie_break: tie_break.to_string() })
}
