use uuid::Uuid;

/// Which slice of the gallery a feed request walks.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeedContext {
	#[default]
	Global,
	/// Items the user has saved. The user id comes from the caller's resolved identity.
	Saved { user_id: Uuid },
	Collection { collection_id: Uuid },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FeedScope {
	/// Free-text search query. Blank means chronological browsing.
	#[serde(default)]
	pub query: Option<String>,
}
impl FeedScope {
	/// The trimmed query, if it has any content.
	pub fn text_query(&self) -> Option<&str> {
		self.query.as_deref().map(str::trim).filter(|query| !query.is_empty())
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FeedFilters {
	/// Exact match on the item topic.
	pub domain: Option<String>,
	pub author_id: Option<Uuid>,
	pub canonical_tag: Option<String>,
	pub saved_by_user_id: Option<Uuid>,
	pub canonical_category: Option<String>,
}
