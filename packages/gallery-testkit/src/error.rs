pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("{DSN} is not a valid Postgres DSN: {source}", DSN = crate::DSN_ENV)]
	InvalidDsn { source: sqlx::Error },

	#[error("No admin database is reachable: {message}")]
	AdminUnavailable { message: String },

	#[error(transparent)]
	Sqlx(#[from] sqlx::Error),
}
