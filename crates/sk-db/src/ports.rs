//! `sk-core` storage ports backed by `StoreService`.

use async_trait::async_trait;
use sk_core::entities::{LogId, LogTypeCategory};
use sk_core::errors::StoreError;
use sk_core::ports::{LogQuery, LogRepository, TermRepository};

use crate::service::StoreService;

#[async_trait]
impl LogRepository for StoreService {
    async fn query_log_ids(&self, query: &LogQuery) -> Result<Vec<LogId>, StoreError> {
        Ok(self.select_log_ids(query).await?)
    }

    async fn delete_log(&self, id: LogId) -> Result<(), StoreError> {
        Ok(self.delete_log_rows(id).await?)
    }
}

#[async_trait]
impl TermRepository for StoreService {
    async fn find_log_type(&self, slug: &str) -> Result<Option<LogTypeCategory>, StoreError> {
        Ok(self.find_term_by_slug(slug).await?)
    }

    async fn recount_log_type(&self, log_type: &LogTypeCategory) -> Result<u64, StoreError> {
        Ok(self.recount_term(log_type.term_taxonomy_id).await?)
    }
}
