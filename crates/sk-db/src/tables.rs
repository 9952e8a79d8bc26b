//! Prefixed host table names.

use sk_config::is_valid_prefix;

use crate::error::DatabaseError;

/// Fully qualified names of the five content store tables.
///
/// Construction validates the prefix, so every name is safe to splice into
/// SQL with `format!`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNames {
    prefix: String,
    pub posts: String,
    pub postmeta: String,
    pub terms: String,
    pub term_taxonomy: String,
    pub term_relationships: String,
}

impl TableNames {
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidTablePrefix` when `prefix` is empty or
    /// contains anything outside `[A-Za-z0-9_]`.
    pub fn with_prefix(prefix: &str) -> Result<Self, DatabaseError> {
        if !is_valid_prefix(prefix) {
            return Err(DatabaseError::InvalidTablePrefix(prefix.to_string()));
        }
        Ok(Self {
            prefix: prefix.to_string(),
            posts: format!("{prefix}posts"),
            postmeta: format!("{prefix}postmeta"),
            terms: format!("{prefix}terms"),
            term_taxonomy: format!("{prefix}term_taxonomy"),
            term_relationships: format!("{prefix}term_relationships"),
        })
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Every content table name, posts first.
    #[must_use]
    pub fn all(&self) -> [&str; 5] {
        [
            self.posts.as_str(),
            self.postmeta.as_str(),
            self.terms.as_str(),
            self.term_taxonomy.as_str(),
            self.term_relationships.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn names_carry_the_prefix() {
        let tables = TableNames::with_prefix("shop_").unwrap();
        assert_eq!(tables.posts, "shop_posts");
        assert_eq!(tables.term_relationships, "shop_term_relationships");
        assert_eq!(tables.prefix(), "shop_");
    }

    #[test]
    fn rejects_sql_in_prefix() {
        let err = TableNames::with_prefix("wp_; DROP TABLE wp_posts; --").unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidTablePrefix(_)));
    }
}
