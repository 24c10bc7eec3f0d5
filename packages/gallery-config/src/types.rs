use serde::Deserialize;

pub const DEFAULT_TEXT_SEARCH_CONFIG: &str = "english";

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	#[serde(default)]
	pub feed: Feed,
	#[serde(default)]
	pub ranking: Ranking,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
	#[serde(default = "default_true")]
	pub bind_localhost_only: bool,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

/// Page sizing for feed and search requests.
#[derive(Debug, Clone, Deserialize)]
pub struct Feed {
	/// Used when a request carries no limit.
	#[serde(default = "default_limit")]
	pub default_limit: u32,
	/// Hard ceiling applied to every request.
	#[serde(default = "default_max_limit")]
	pub max_limit: u32,
	/// Number of ranked ids requested from the scoring provider for a text query.
	#[serde(default = "default_rank_depth_cap")]
	pub rank_depth_cap: u32,
}
impl Default for Feed {
	fn default() -> Self {
		Self {
			default_limit: default_limit(),
			max_limit: default_max_limit(),
			rank_depth_cap: default_rank_depth_cap(),
		}
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ranking {
	/// Postgres text search configuration, e.g. "english" or "simple".
	#[serde(default = "default_text_search_config")]
	pub text_search_config: String,
}
impl Default for Ranking {
	fn default() -> Self {
		Self { text_search_config: default_text_search_config() }
	}
}

fn default_true() -> bool {
	true
}

fn default_limit() -> u32 {
	20
}

fn default_max_limit() -> u32 {
	100
}

fn default_rank_depth_cap() -> u32 {
	100
}

fn default_text_search_config() -> String {
	DEFAULT_TEXT_SEARCH_CONFIG.to_string()
}
