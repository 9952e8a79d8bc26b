//! Shared test utilities for sk-db unit tests.

pub(crate) mod helpers {
    use sk_config::LogsConfig;

    use crate::SkDb;
    use crate::service::StoreService;

    /// In-memory store with the default `wp_` prefix and log taxonomy.
    pub async fn test_service() -> StoreService {
        let db = SkDb::open_local_with_schema(":memory:", "wp_").await.unwrap();
        StoreService::from_db(db, LogsConfig::default())
    }

    /// Insert a log type term whose term id and term taxonomy id are both `id`.
    pub async fn insert_log_type(svc: &StoreService, id: i64, slug: &str) {
        svc.db()
            .conn()
            .execute(
                "INSERT INTO wp_terms (term_id, name, slug) VALUES (?1, ?2, ?2)",
                libsql::params![id, slug],
            )
            .await
            .unwrap();
        svc.db()
            .conn()
            .execute(
                "INSERT INTO wp_term_taxonomy (term_taxonomy_id, term_id, taxonomy, count) VALUES (?1, ?1, 'edd_log_type', 0)",
                [id],
            )
            .await
            .unwrap();
    }

    /// Insert an `edd_log` post related to `term_taxonomy_id`.
    pub async fn insert_log(svc: &StoreService, id: i64, term_taxonomy_id: i64, post_date: &str) {
        svc.db()
            .conn()
            .execute(
                "INSERT INTO wp_posts (ID, post_type, post_title, post_date) VALUES (?1, 'edd_log', 'log', ?2)",
                libsql::params![id, post_date],
            )
            .await
            .unwrap();
        svc.db()
            .conn()
            .execute(
                "INSERT INTO wp_term_relationships (object_id, term_taxonomy_id) VALUES (?1, ?2)",
                libsql::params![id, term_taxonomy_id],
            )
            .await
            .unwrap();
    }

    pub async fn insert_meta(svc: &StoreService, post_id: i64, key: &str, value: Option<&str>) {
        svc.db()
            .conn()
            .execute(
                "INSERT INTO wp_postmeta (post_id, meta_key, meta_value) VALUES (?1, ?2, ?3)",
                libsql::params![post_id, key, value],
            )
            .await
            .unwrap();
    }

    pub async fn row_count(svc: &StoreService, table: &str, filter: &str) -> i64 {
        let mut rows = svc
            .db()
            .conn()
            .query(&format!("SELECT COUNT(*) FROM {table} WHERE {filter}"), ())
            .await
            .unwrap();
        rows.next().await.unwrap().unwrap().get(0).unwrap()
    }
}
