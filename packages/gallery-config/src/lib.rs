mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, DEFAULT_TEXT_SEARCH_CONFIG, Feed, Postgres, Ranking, Service, Storage};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;
	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.dsn.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.postgres.dsn must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}
	if cfg.feed.default_limit == 0 {
		return Err(Error::Validation {
			message: "feed.default_limit must be greater than zero.".to_string(),
		});
	}
	if cfg.feed.max_limit < cfg.feed.default_limit {
		return Err(Error::Validation {
			message: "feed.max_limit must be greater than or equal to feed.default_limit."
				.to_string(),
		});
	}
	if cfg.feed.rank_depth_cap == 0 {
		return Err(Error::Validation {
			message: "feed.rank_depth_cap must be greater than zero.".to_string(),
		});
	}
	if !cfg
		.ranking
		.text_search_config
		.chars()
		.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
	{
		return Err(Error::Validation {
			message: "ranking.text_search_config must be a plain identifier.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	let text_search_config = cfg.ranking.text_search_config.trim();

	cfg.ranking.text_search_config = if text_search_config.is_empty() {
		DEFAULT_TEXT_SEARCH_CONFIG.to_string()
	} else {
		text_search_config.to_ascii_lowercase()
	};
	cfg.service.log_level = cfg.service.log_level.trim().to_string();
}
