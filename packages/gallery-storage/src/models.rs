use time::OffsetDateTime;
use uuid::Uuid;

/// A gallery item joined with its author's profile, as read by the feed queries.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ItemRow {
	pub item_id: Uuid,
	pub url: String,
	pub title: String,
	pub topic: String,
	pub category: Option<String>,
	pub author_id: Uuid,
	pub author_name: Option<String>,
	pub author_avatar: Option<String>,
	pub width: Option<i32>,
	pub height: Option<i32>,
	pub like_count: i64,
	pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, sqlx::FromRow)]
pub struct RankedRow {
	pub item_id: Uuid,
	pub score: f32,
}

#[derive(Debug, Clone)]
pub struct NewItem {
	pub item_id: Uuid,
	pub url: String,
	pub title: String,
	pub topic: String,
	pub category: Option<String>,
	pub author_id: Uuid,
	pub width: Option<i32>,
	pub height: Option<i32>,
	pub like_count: i64,
	pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct Profile {
	pub user_id: Uuid,
	pub display_name: Option<String>,
	pub avatar_url: Option<String>,
}
