use std::sync::Arc;

use crate::config::Config;
use crate::deepseek::DeepSeekClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub deepseek: Arc<DeepSeekClient>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let deepseek = Arc::new(DeepSeekClient::new(
            config.base_url.clone(),
            config.timeout,
        )?);

        Ok(Self { config, deepseek })
    }
}
