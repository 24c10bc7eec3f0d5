//! Row constraints derived from a feed context and its filters.
//!
//! The builder is pure: it never touches the store, and the same input always yields the same
//! constraints in the same order. Store adapters translate each [`Constraint`] into their own
//! predicate language.

use uuid::Uuid;

use crate::request::{FeedContext, FeedFilters};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
	/// A saved relation exists for this user and the item.
	SavedBy { user_id: Uuid },
	/// A membership relation exists for this collection and the item.
	InCollection { collection_id: Uuid },
	Topic(String),
	Author(Uuid),
	Category(String),
}

/// Filters that are part of the request model but have no matching predicate yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedFilter {
	CanonicalTag,
	SavedByUser,
}
impl UnsupportedFilter {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::CanonicalTag => "canonical_tag",
			Self::SavedByUser => "saved_by_user_id",
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
	pub constraints: Vec<Constraint>,
	/// Filters the caller set that did not narrow the result.
	pub unsupported: Vec<UnsupportedFilter>,
}
impl Constraints {
	pub fn is_empty(&self) -> bool {
		self.constraints.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Constraint> {
		self.constraints.iter()
	}
}

pub fn build(context: &FeedContext, filters: &FeedFilters) -> Constraints {
	let mut out = Constraints::default();

	match context {
		FeedContext::Global => {},
		FeedContext::Saved { user_id } =>
			out.constraints.push(Constraint::SavedBy { user_id: *user_id }),
		FeedContext::Collection { collection_id } =>
			out.constraints.push(Constraint::InCollection { collection_id: *collection_id }),
	}

	if let Some(domain) = non_blank(filters.domain.as_deref()) {
		out.constraints.push(Constraint::Topic(domain.to_string()));
	}
	if let Some(author_id) = filters.author_id {
		out.constraints.push(Constraint::Author(author_id));
	}
	if let Some(category) = non_blank(filters.canonical_category.as_deref()) {
		out.constraints.push(Constraint::Category(category.to_string()));
	}
	if non_blank(filters.canonical_tag.as_deref()).is_some() {
		out.unsupported.push(UnsupportedFilter::CanonicalTag);
	}
	if filters.saved_by_user_id.is_some() {
		out.unsupported.push(UnsupportedFilter::SavedByUser);
	}

	out
}

fn non_blank(value: Option<&str>) -> Option<&str> {
	value.map(str::trim).filter(|value| !value.is_empty())
}
