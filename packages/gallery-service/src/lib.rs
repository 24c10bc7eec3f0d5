pub mod feed;
pub mod time_serde;

mod error;
mod ranking;

pub use error::{Error, Result};
pub use feed::{FeedMode, FeedRequest, GalleryItem, Page};

use std::{future::Future, pin::Pin, sync::Arc};

use uuid::Uuid;

use gallery_config::{Config, Feed};
use gallery_domain::{cursor::CursorKey, predicate::Constraints};
use gallery_storage::{
	db::Db,
	models::{ItemRow, RankedRow},
	queries,
};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Source of gallery rows. Implementations filter and order, but never paginate.
pub trait ItemStore
where
	Self: Send + Sync,
{
	/// Rows matching `constraints`, ordered by `(created_at DESC, item_id DESC)`, strictly after
	/// `after` in that order, at most `limit` of them.
	fn fetch_recent<'a>(
		&'a self,
		constraints: &'a Constraints,
		after: Option<&'a CursorKey>,
		limit: u32,
	) -> BoxFuture<'a, Result<Vec<ItemRow>>>;

	/// Rows whose id is in `item_ids` and which match `constraints`, in any order.
	fn fetch_by_ids<'a>(
		&'a self,
		item_ids: &'a [Uuid],
		constraints: &'a Constraints,
	) -> BoxFuture<'a, Result<Vec<ItemRow>>>;
}

/// Relevance scoring for free-text queries.
pub trait RankProvider
where
	Self: Send + Sync,
{
	/// Item ids by descending relevance, at most `depth` of them.
	fn rank<'a>(&'a self, query: &'a str, depth: u32) -> BoxFuture<'a, Result<Vec<RankedRow>>>;
}

#[derive(Clone)]
pub struct Backends {
	pub store: Arc<dyn ItemStore>,
	pub ranker: Arc<dyn RankProvider>,
}
impl Backends {
	pub fn new(store: Arc<dyn ItemStore>, ranker: Arc<dyn RankProvider>) -> Self {
		Self { store, ranker }
	}

	/// Postgres serves both rows and full-text ranking.
	pub fn postgres(db: Db, text_search_config: impl Into<String>) -> Self {
		let backend = Arc::new(PgBackend { db, text_search_config: text_search_config.into() });

		Self { store: backend.clone(), ranker: backend }
	}
}

pub struct GalleryService {
	pub feed: Feed,
	pub backends: Backends,
}
impl GalleryService {
	pub fn new(cfg: &Config, db: Db) -> Self {
		Self::with_backends(
			cfg.feed.clone(),
			Backends::postgres(db, cfg.ranking.text_search_config.as_str()),
		)
	}

	pub fn with_backends(feed: Feed, backends: Backends) -> Self {
		Self { feed, backends }
	}
}

struct PgBackend {
	db: Db,
	text_search_config: String,
}
impl ItemStore for PgBackend {
	fn fetch_recent<'a>(
		&'a self,
		constraints: &'a Constraints,
		after: Option<&'a CursorKey>,
		limit: u32,
	) -> BoxFuture<'a, Result<Vec<ItemRow>>> {
		Box::pin(async move {
			Ok(queries::fetch_recent(&self.db, constraints, after, limit).await?)
		})
	}

	fn fetch_by_ids<'a>(
		&'a self,
		item_ids: &'a [Uuid],
		constraints: &'a Constraints,
	) -> BoxFuture<'a, Result<Vec<ItemRow>>> {
		Box::pin(async move { Ok(queries::fetch_by_ids(&self.db, item_ids, constraints).await?) })
	}
}
impl RankProvider for PgBackend {
	fn rank<'a>(&'a self, query: &'a str, depth: u32) -> BoxFuture<'a, Result<Vec<RankedRow>>> {
		Box::pin(async move {
			queries::rank_by_text(&self.db, &self.text_search_config, query, depth)
				.await
				.map_err(|err| Error::Ranking { message: err.to_string() })
		})
	}
}
