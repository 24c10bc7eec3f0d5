use std::sync::Arc;

use gallery_service::GalleryService;
use gallery_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<GalleryService>,
}
impl AppState {
	pub async fn new(config: &gallery_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		Ok(Self::from_service(GalleryService::new(config, db)))
	}

	pub fn from_service(service: GalleryService) -> Self {
		Self { service: Arc::new(service) }
	}
}
