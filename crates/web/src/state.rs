use std::sync::Arc;

use storage::Database;

use crate::config::Config;
use crate::flash::FlashSigner;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Arc<Config>,
    pub flash: FlashSigner,
}

impl AppState {
    pub fn new(db: Database, config: Config) -> Self {
        let flash = FlashSigner::new(&config.secret_key);
        Self {
            db,
            config: Arc::new(config),
            flash,
        }
    }
}
