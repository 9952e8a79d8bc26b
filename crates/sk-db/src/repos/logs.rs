//! Log record repository: filtered id lookup, read, and cascading delete.

use sk_core::entities::{LogId, LogMeta, LogRecord};
use sk_core::ports::LogQuery;

use crate::error::DatabaseError;
use crate::helpers::{format_store_datetime, get_opt_string, parse_datetime};
use crate::service::StoreService;

impl StoreService {
    /// Ids of every log record of `query.log_type` within the exclusive date
    /// bounds, ascending. No limit is applied.
    pub async fn select_log_ids(&self, query: &LogQuery) -> Result<Vec<LogId>, DatabaseError> {
        let t = self.tables();
        let mut sql = format!(
            "SELECT p.ID FROM {posts} p
             INNER JOIN {rel} r ON r.object_id = p.ID
             INNER JOIN {tt} tt ON tt.term_taxonomy_id = r.term_taxonomy_id
             WHERE p.post_type = ?1 AND tt.taxonomy = ?2 AND tt.term_id = ?3",
            posts = t.posts,
            rel = t.term_relationships,
            tt = t.term_taxonomy,
        );
        let mut params: Vec<libsql::Value> = vec![
            self.post_type().into(),
            self.taxonomy().into(),
            query.log_type.term_id.into(),
        ];

        if let Some(before) = query.before {
            params.push(format_store_datetime(before).into());
            sql.push_str(&format!(" AND p.post_date < ?{}", params.len()));
        }
        if let Some(after) = query.after {
            params.push(format_store_datetime(after).into());
            sql.push_str(&format!(" AND p.post_date > ?{}", params.len()));
        }
        sql.push_str(" ORDER BY p.ID");

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let mut ids = Vec::new();
        while let Some(row) = rows.next().await? {
            ids.push(row.get::<i64>(0)?);
        }
        tracing::debug!(
            log_type = %query.log_type.slug,
            matched = ids.len(),
            "selected log ids"
        );
        Ok(ids)
    }

    /// Delete a record's metadata, term relationships and post row in one
    /// transaction. Deleting an id that no longer exists is a no-op.
    pub async fn delete_log_rows(&self, id: LogId) -> Result<(), DatabaseError> {
        let t = self.tables();
        let tx = self.db().conn().transaction().await?;

        tx.execute(
            &format!("DELETE FROM {} WHERE post_id = ?1", t.postmeta),
            [id],
        )
        .await?;
        tx.execute(
            &format!("DELETE FROM {} WHERE object_id = ?1", t.term_relationships),
            [id],
        )
        .await?;
        tx.execute(&format!("DELETE FROM {} WHERE ID = ?1", t.posts), [id])
            .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Load a log record with its metadata and relationships.
    /// Returns `None` when no log record has this id.
    pub async fn get_log(&self, id: LogId) -> Result<Option<LogRecord>, DatabaseError> {
        let t = self.tables();
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT ID, post_title, post_parent, post_date FROM {} WHERE ID = ?1 AND post_type = ?2",
                    t.posts
                ),
                libsql::params![id, self.post_type()],
            )
            .await?;
        let Some(row) = rows.next().await? else {
            return Ok(None);
        };

        let parent = row.get::<Option<i64>>(2)?.filter(|parent| *parent != 0);
        let mut record = LogRecord {
            id: row.get(0)?,
            title: get_opt_string(&row, 1)?.unwrap_or_default(),
            parent_id: parent,
            created_at: parse_datetime(&row.get::<String>(3)?)?,
            meta: Vec::new(),
            term_taxonomy_ids: Vec::new(),
        };

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT meta_key, meta_value FROM {} WHERE post_id = ?1 ORDER BY meta_id",
                    t.postmeta
                ),
                [id],
            )
            .await?;
        while let Some(row) = rows.next().await? {
            record.meta.push(LogMeta {
                key: get_opt_string(&row, 0)?.unwrap_or_default(),
                value: row.get::<Option<String>>(1)?,
            });
        }

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT term_taxonomy_id FROM {} WHERE object_id = ?1 ORDER BY term_taxonomy_id",
                    t.term_relationships
                ),
                [id],
            )
            .await?;
        while let Some(row) = rows.next().await? {
            record.term_taxonomy_ids.push(row.get(0)?);
        }

        Ok(Some(record))
    }
}
