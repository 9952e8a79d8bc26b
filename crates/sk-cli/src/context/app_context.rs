use std::sync::Arc;

use anyhow::Context;
use sk_config::SkConfig;
use sk_core::purge::LogPurge;
use sk_db::service::StoreService;

/// Shared application resources initialized once per invocation.
pub struct AppContext {
    pub service: Arc<StoreService>,
}

impl AppContext {
    /// Open the content store named by `config`.
    pub async fn init(config: &SkConfig) -> anyhow::Result<Self> {
        let service = StoreService::open(config).await.with_context(|| {
            format!(
                "failed to open content store at {}",
                config.database.path
            )
        })?;
        tracing::debug!(
            path = %config.database.path,
            prefix = %config.database.table_prefix,
            "content store ready"
        );
        Ok(Self {
            service: Arc::new(service),
        })
    }

    /// Purge workflow wired to this context's store.
    #[must_use]
    pub fn purge(&self) -> LogPurge {
        LogPurge::new(self.service.clone(), self.service.clone())
    }
}
