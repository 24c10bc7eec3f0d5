use uuid::Uuid;

use gallery_storage::models::ItemRow;

pub const UNKNOWN_AUTHOR: &str = "Unknown";
pub const DEFAULT_ASPECT_RATIO: f32 = 1.0;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GalleryItem {
	pub id: Uuid,
	pub url: String,
	pub title: String,
	pub topic: String,
	pub category: Option<String>,
	pub author_id: Uuid,
	pub author_name: String,
	pub author_avatar: Option<String>,
	pub like_count: u64,
	/// Width over height.
	pub aspect_ratio: f32,
	#[serde(with = "crate::time_serde")]
	pub created_at: time::OffsetDateTime,
}
impl GalleryItem {
	/// Missing secondary attributes fall back to defaults instead of dropping the row.
	pub fn from_row(row: ItemRow) -> Self {
		let aspect_ratio = match (row.width, row.height) {
			(Some(width), Some(height)) if width > 0 && height > 0 => width as f32 / height as f32,
			_ => DEFAULT_ASPECT_RATIO,
		};
		let author_name = row
			.author_name
			.as_deref()
			.map(str::trim)
			.filter(|name| !name.is_empty())
			.unwrap_or(UNKNOWN_AUTHOR)
			.to_string();
		let author_avatar = row.author_avatar.filter(|url| !url.trim().is_empty());

		Self {
			id: row.item_id,
			url: row.url,
			title: row.title,
			topic: row.topic,
			category: row.category,
			author_id: row.author_id,
			author_name,
			author_avatar,
			like_count: u64::try_from(row.like_count).unwrap_or(0),
			aspect_ratio,
			created_at: row.created_at,
		}
	}
}
