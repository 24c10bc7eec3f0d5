use std::collections::HashSet;

use uuid::Uuid;

use crate::RankProvider;

/// Ranked candidate ids for `query`, best first, at most `depth_cap`, without repeats. Scoring
/// failures resolve to no candidates.
pub(crate) async fn resolve(ranker: &dyn RankProvider, query: &str, depth_cap: u32) -> Vec<Uuid> {
	let ranked = match ranker.rank(query, depth_cap).await {
		Ok(ranked) => ranked,
		Err(err) => {
			tracing::warn!(error = %err, depth_cap, "Ranking failed; treating query as unmatched.");

			return Vec::new();
		},
	};
	let mut seen = HashSet::with_capacity(ranked.len());
	let ids: Vec<Uuid> = ranked
		.into_iter()
		.map(|row| row.item_id)
		.filter(|item_id| seen.insert(*item_id))
		.take(depth_cap as usize)
		.collect();

	if ids.is_empty() {
		tracing::debug!("Ranking returned no candidates.");
	}

	ids
}
