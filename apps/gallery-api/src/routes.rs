use axum::{
	Json, Router,
	extract::State,
	http::{HeaderMap, StatusCode},
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gallery_domain::request::{FeedContext, FeedFilters, FeedScope};
use gallery_service::{FeedRequest, Page};

use crate::state::AppState;

/// Caller identity, as resolved by the auth layer in front of this service.
pub const HEADER_USER_ID: &str = "X-Gallery-User-Id";

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/feed/page", post(feed_page))
		.with_state(state)
}

#[derive(Debug, Default, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContextBody {
	#[default]
	Global,
	Saved,
	Collection {
		collection_id: Uuid,
	},
}

#[derive(Debug, Default, Deserialize)]
pub struct FeedPageBody {
	#[serde(default)]
	pub context: ContextBody,
	#[serde(default)]
	pub query: Option<String>,
	#[serde(default)]
	pub filters: FeedFilters,
	#[serde(default)]
	pub cursor: Option<String>,
	#[serde(default)]
	pub limit: Option<u32>,
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn feed_page(
	State(state): State<AppState>,
	headers: HeaderMap,
	Json(body): Json<FeedPageBody>,
) -> Result<Json<Page>, ApiError> {
	let context = match body.context {
		ContextBody::Global => FeedContext::Global,
		ContextBody::Saved => FeedContext::Saved { user_id: caller_id(&headers)? },
		ContextBody::Collection { collection_id } => FeedContext::Collection { collection_id },
	};
	let request = FeedRequest {
		context,
		scope: FeedScope { query: body.query },
		filters: body.filters,
		cursor: body.cursor,
		limit: body.limit,
	};

	Ok(Json(state.service.fetch_page(request).await))
}

fn caller_id(headers: &HeaderMap) -> Result<Uuid, ApiError> {
	let Some(raw) = headers.get(HEADER_USER_ID) else {
		return Err(json_error(
			StatusCode::UNAUTHORIZED,
			"UNAUTHENTICATED",
			"The saved feed requires a signed-in caller.",
			Some(vec![HEADER_USER_ID.to_string()]),
		));
	};

	raw.to_str().ok().and_then(|value| Uuid::parse_str(value.trim()).ok()).ok_or_else(|| {
		json_error(
			StatusCode::UNAUTHORIZED,
			"UNAUTHENTICATED",
			"Caller identity is not a valid user id.",
			Some(vec![HEADER_USER_ID.to_string()]),
		)
	})
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}
impl ApiError {
	fn new(
		status: StatusCode,
		error_code: impl Into<String>,
		message: impl Into<String>,
		fields: Option<Vec<String>>,
	) -> Self {
		Self { status, error_code: error_code.into(), message: message.into(), fields }
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body =
			ErrorBody { error_code: self.error_code, message: self.message, fields: self.fields };

		(self.status, Json(body)).into_response()
	}
}

pub fn json_error(
	status: StatusCode,
	code: &str,
	message: impl Into<String>,
	fields: Option<Vec<String>>,
) -> ApiError {
	ApiError::new(status, code, message, fields)
}
