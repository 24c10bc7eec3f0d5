pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Storage error: {message}")]
	Storage { message: String },
	#[error("Ranking error: {message}")]
	Ranking { message: String },
}
impl From<gallery_storage::Error> for Error {
	fn from(err: gallery_storage::Error) -> Self {
		match err {
			gallery_storage::Error::Sqlx(inner) => Self::Storage { message: inner.to_string() },
			gallery_storage::Error::InvalidArgument(message) => Self::Storage { message },
		}
	}
}
