use std::collections::HashMap;

use uuid::Uuid;

use gallery_domain::predicate::Constraints;
use gallery_storage::models::ItemRow;

use crate::{ItemStore, Result, feed::{GalleryItem, Page}};

/// Single page of the best-ranked items that survive `constraints`, in rank order.
pub(crate) async fn assemble(
	store: &dyn ItemStore,
	ranked_ids: &[Uuid],
	constraints: &Constraints,
	limit: u32,
) -> Result<Page> {
	let rows = store.fetch_by_ids(ranked_ids, constraints).await?;
	let mut by_id: HashMap<Uuid, ItemRow> = rows.into_iter().map(|row| (row.item_id, row)).collect();
	// The id-set fetch loses rank order; walk the ranked list to restore it.
	let items = ranked_ids
		.iter()
		.filter_map(|item_id| by_id.remove(item_id))
		.take(limit as usize)
		.map(GalleryItem::from_row)
		.collect();

	Ok(Page { items, next_cursor: None, has_more: false })
}
