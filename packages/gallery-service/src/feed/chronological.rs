use gallery_domain::{cursor::CursorKey, predicate::Constraints};

use crate::{ItemStore, Result, feed::{GalleryItem, Page}};

/// Newest-first page after `after`. One extra row is fetched to learn whether another page exists;
/// it is never returned.
pub(crate) async fn assemble(
	store: &dyn ItemStore,
	constraints: &Constraints,
	after: Option<&CursorKey>,
	limit: u32,
) -> Result<Page> {
	let mut rows = store.fetch_recent(constraints, after, limit.saturating_add(1)).await?;
	let overflow = rows.len() > limit as usize;

	rows.truncate(limit as usize);

	let items: Vec<GalleryItem> = rows.into_iter().map(GalleryItem::from_row).collect();
	let next_cursor = if overflow {
		let cursor = items.last().and_then(|item| CursorKey::new(item.created_at, item.id).encode());

		if cursor.is_none() {
			tracing::warn!(limit, "Cannot encode a cursor for the last item; ending the feed early.");
		}

		cursor
	} else {
		None
	};

	Ok(Page { has_more: next_cursor.is_some(), items, next_cursor })
}
