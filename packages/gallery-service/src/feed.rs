mod chronological;
mod item;
mod ranked;

pub use item::GalleryItem;

use gallery_config::Feed;
use gallery_domain::{
	cursor::CursorKey,
	predicate,
	request::{FeedContext, FeedFilters, FeedScope},
};

use crate::{GalleryService, ranking};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct FeedRequest {
	#[serde(default)]
	pub context: FeedContext,
	#[serde(default)]
	pub scope: FeedScope,
	#[serde(default)]
	pub filters: FeedFilters,
	#[serde(default)]
	pub cursor: Option<String>,
	#[serde(default)]
	pub limit: Option<u32>,
}

/// One page of a feed. `next_cursor` is set exactly when `has_more` is true.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Page {
	pub items: Vec<GalleryItem>,
	pub next_cursor: Option<String>,
	pub has_more: bool,
}
impl Page {
	pub fn empty() -> Self {
		Self::default()
	}
}

/// How a request is served. Recency and relevance are separate total orders and never share a
/// code path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedMode<'a> {
	Chronological { after: Option<CursorKey> },
	Ranked { query: &'a str },
}
impl<'a> FeedMode<'a> {
	pub fn select(req: &'a FeedRequest) -> Self {
		if let Some(query) = req.scope.text_query() {
			return Self::Ranked { query };
		}

		let after = req.cursor.as_deref().and_then(|cursor| {
			let key = CursorKey::decode(cursor);

			if key.is_none() {
				tracing::debug!("Ignoring malformed feed cursor; starting from the newest item.");
			}

			key
		});

		Self::Chronological { after }
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Chronological { .. } => "chronological",
			Self::Ranked { .. } => "ranked",
		}
	}
}

impl GalleryService {
	/// Serves one page of the feed. Failures never escape: they surface as an empty, terminal
	/// page.
	pub async fn fetch_page(&self, req: FeedRequest) -> Page {
		let limit = resolve_limit(&self.feed, req.limit);
		let constraints = predicate::build(&req.context, &req.filters);

		for filter in &constraints.unsupported {
			tracing::warn!(filter = filter.as_str(), "Feed filter is not supported; ignoring it.");
		}

		let mode = FeedMode::select(&req);
		let result = match &mode {
			FeedMode::Chronological { after } =>
				chronological::assemble(
					self.backends.store.as_ref(),
					&constraints,
					after.as_ref(),
					limit,
				)
				.await,
			FeedMode::Ranked { query } => {
				let ranked_ids = ranking::resolve(
					self.backends.ranker.as_ref(),
					query,
					self.feed.rank_depth_cap,
				)
				.await;

				if ranked_ids.is_empty() {
					return Page::empty();
				}

				ranked::assemble(self.backends.store.as_ref(), &ranked_ids, &constraints, limit)
					.await
			},
		};

		match result {
			Ok(page) => {
				tracing::debug!(
					mode = mode.as_str(),
					item_count = page.items.len(),
					has_more = page.has_more,
					"Feed page served."
				);

				page
			},
			Err(err) => {
				tracing::warn!(
					error = %err,
					mode = mode.as_str(),
					"Feed page fetch failed; returning an empty page."
				);

				Page::empty()
			},
		}
	}
}

/// Requested page size, defaulted and clamped to `[1, max_limit]`.
pub fn resolve_limit(cfg: &Feed, requested: Option<u32>) -> u32 {
	requested.unwrap_or(cfg.default_limit).clamp(1, cfg.max_limit.max(1))
}
