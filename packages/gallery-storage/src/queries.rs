use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

use gallery_domain::{
	cursor::CursorKey,
	predicate::{Constraint, Constraints},
};

use crate::{
	Error, Result,
	db::Db,
	models::{ItemRow, NewItem, Profile, RankedRow},
};

const ITEM_SELECT: &str = "\
SELECT
	i.item_id,
	i.url,
	i.title,
	i.topic,
	i.category,
	i.author_id,
	p.display_name AS author_name,
	p.avatar_url AS author_avatar,
	i.width,
	i.height,
	i.like_count,
	i.created_at
FROM gallery_items i
LEFT JOIN profiles p ON p.user_id = i.author_id
WHERE TRUE";

/// Rows ordered by `(created_at DESC, item_id DESC)`, resuming strictly after `after` when set.
pub async fn fetch_recent(
	db: &Db,
	constraints: &Constraints,
	after: Option<&CursorKey>,
	limit: u32,
) -> Result<Vec<ItemRow>> {
	let mut builder = QueryBuilder::<Postgres>::new(ITEM_SELECT);

	push_constraints(&mut builder, constraints);

	if let Some(key) = after {
		builder.push(" AND (i.created_at < ");
		builder.push_bind(key.created_at);
		builder.push(" OR (i.created_at = ");
		builder.push_bind(key.created_at);
		builder.push(" AND i.item_id < ");
		builder.push_bind(key.item_id);
		builder.push("))");
	}

	builder.push(" ORDER BY i.created_at DESC, i.item_id DESC LIMIT ");
	builder.push_bind(i64::from(limit));

	let rows = builder.build_query_as::<ItemRow>().fetch_all(&db.pool).await?;

	Ok(rows)
}

/// Rows for the given ids that also satisfy `constraints`. The result order is unspecified.
pub async fn fetch_by_ids(
	db: &Db,
	item_ids: &[Uuid],
	constraints: &Constraints,
) -> Result<Vec<ItemRow>> {
	if item_ids.is_empty() {
		return Ok(Vec::new());
	}

	let mut builder = QueryBuilder::<Postgres>::new(ITEM_SELECT);

	builder.push(" AND i.item_id = ANY(");
	builder.push_bind(item_ids.to_vec());
	builder.push(")");

	push_constraints(&mut builder, constraints);

	let rows = builder.build_query_as::<ItemRow>().fetch_all(&db.pool).await?;

	Ok(rows)
}

/// Full-text relevance over title, topic and category, best match first.
pub async fn rank_by_text(
	db: &Db,
	text_search_config: &str,
	query: &str,
	depth: u32,
) -> Result<Vec<RankedRow>> {
	if depth == 0 {
		return Err(Error::InvalidArgument("Rank depth must be greater than zero.".to_string()));
	}

	let rows = sqlx::query_as::<_, RankedRow>(
		"\
WITH q AS (
	SELECT websearch_to_tsquery($1::text::regconfig, $2) AS query
),
docs AS (
	SELECT
		i.item_id,
		setweight(to_tsvector($1::text::regconfig, i.title), 'A')
			|| setweight(to_tsvector($1::text::regconfig, i.topic), 'B')
			|| setweight(to_tsvector($1::text::regconfig, coalesce(i.category, '')), 'C') AS doc
	FROM gallery_items i
)
SELECT
	docs.item_id,
	ts_rank_cd(docs.doc, q.query)::real AS score
FROM docs, q
WHERE docs.doc @@ q.query
ORDER BY score DESC, docs.item_id DESC
LIMIT $3",
	)
	.bind(text_search_config)
	.bind(query)
	.bind(i64::from(depth))
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

pub async fn insert_profile(db: &Db, profile: &Profile) -> Result<()> {
	sqlx::query(
		"\
INSERT INTO profiles (user_id, display_name, avatar_url)
VALUES ($1, $2, $3)
ON CONFLICT (user_id) DO UPDATE
SET display_name = EXCLUDED.display_name, avatar_url = EXCLUDED.avatar_url",
	)
	.bind(profile.user_id)
	.bind(profile.display_name.as_deref())
	.bind(profile.avatar_url.as_deref())
	.execute(&db.pool)
	.await?;

	Ok(())
}

pub async fn insert_item(db: &Db, item: &NewItem) -> Result<()> {
	sqlx::query(
		"\
INSERT INTO gallery_items (
	item_id,
	url,
	title,
	topic,
	category,
	author_id,
	width,
	height,
	like_count,
	created_at
)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
	)
	.bind(item.item_id)
	.bind(item.url.as_str())
	.bind(item.title.as_str())
	.bind(item.topic.as_str())
	.bind(item.category.as_deref())
	.bind(item.author_id)
	.bind(item.width)
	.bind(item.height)
	.bind(item.like_count)
	.bind(item.created_at)
	.execute(&db.pool)
	.await?;

	Ok(())
}

pub async fn save_item(db: &Db, user_id: Uuid, item_id: Uuid) -> Result<()> {
	sqlx::query("INSERT INTO saved_items (user_id, item_id) VALUES ($1, $2) ON CONFLICT DO NOTHING")
		.bind(user_id)
		.bind(item_id)
		.execute(&db.pool)
		.await?;

	Ok(())
}

pub async fn add_to_collection(db: &Db, collection_id: Uuid, item_id: Uuid) -> Result<()> {
	sqlx::query(
		"INSERT INTO collection_items (collection_id, item_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
	)
	.bind(collection_id)
	.bind(item_id)
	.execute(&db.pool)
	.await?;

	Ok(())
}

fn push_constraints(builder: &mut QueryBuilder<'_, Postgres>, constraints: &Constraints) {
	for constraint in constraints.iter() {
		match constraint {
			Constraint::SavedBy { user_id } => {
				builder.push(
					" AND EXISTS (SELECT 1 FROM saved_items s WHERE s.item_id = i.item_id AND s.user_id = ",
				);
				builder.push_bind(*user_id);
				builder.push(")");
			},
			Constraint::InCollection { collection_id } => {
				builder.push(
					" AND EXISTS (SELECT 1 FROM collection_items c WHERE c.item_id = i.item_id AND c.collection_id = ",
				);
				builder.push_bind(*collection_id);
				builder.push(")");
			},
			Constraint::Topic(topic) => {
				builder.push(" AND i.topic = ");
				builder.push_bind(topic.clone());
			},
			Constraint::Author(author_id) => {
				builder.push(" AND i.author_id = ");
				builder.push_bind(*author_id);
			},
			Constraint::Category(category) => {
				builder.push(" AND i.category = ");
				builder.push_bind(category.clone());
			},
		}
	}
}
