//! Log type term repository: slug lookup and count recomputation.

use sk_core::entities::LogTypeCategory;

use crate::error::DatabaseError;
use crate::helpers::get_opt_string;
use crate::service::StoreService;

fn row_to_log_type(row: &libsql::Row) -> Result<LogTypeCategory, DatabaseError> {
    let count = row.get::<i64>(4)?;
    Ok(LogTypeCategory {
        term_id: row.get(0)?,
        term_taxonomy_id: row.get(1)?,
        name: get_opt_string(row, 2)?.unwrap_or_default(),
        slug: row.get(3)?,
        count: u64::try_from(count)
            .map_err(|_| DatabaseError::InvalidState(format!("negative term count {count}")))?,
    })
}

impl StoreService {
    /// Look up a term in the log taxonomy by slug.
    pub async fn find_term_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<LogTypeCategory>, DatabaseError> {
        let t = self.tables();
        let sql = format!(
            "SELECT t.term_id, tt.term_taxonomy_id, t.name, t.slug, tt.count
             FROM {terms} t
             INNER JOIN {tt} tt ON tt.term_id = t.term_id
             WHERE t.slug = ?1 AND tt.taxonomy = ?2
             LIMIT 1",
            terms = t.terms,
            tt = t.term_taxonomy,
        );
        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params![slug, self.taxonomy()])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_log_type(&row)?)),
            None => Ok(None),
        }
    }

    /// Recompute `count` for a term taxonomy row from its live relationship
    /// rows, persist it, and return the new value.
    pub async fn recount_term(&self, term_taxonomy_id: i64) -> Result<u64, DatabaseError> {
        let t = self.tables();
        self.db()
            .conn()
            .execute(
                &format!(
                    "UPDATE {tt} SET count = (SELECT COUNT(*) FROM {rel} WHERE term_taxonomy_id = ?1)
                     WHERE term_taxonomy_id = ?1",
                    tt = t.term_taxonomy,
                    rel = t.term_relationships,
                ),
                [term_taxonomy_id],
            )
            .await?;

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT count FROM {} WHERE term_taxonomy_id = ?1",
                    t.term_taxonomy
                ),
                [term_taxonomy_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let count = row.get::<i64>(0)?;
        u64::try_from(count)
            .map_err(|_| DatabaseError::InvalidState(format!("negative term count {count}")))
    }
}
