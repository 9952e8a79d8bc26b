use figment::Jail;
use pretty_assertions::assert_eq;
use sk_config::SkConfig;

#[test]
fn env_vars_map_to_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("SK_DATABASE__PATH", "/var/lib/shop.db");
        jail.set_env("SK_LOGS__POST_TYPE", "shop_log");

        let config = SkConfig::load().expect("config loads");
        assert_eq!(config.database.path, "/var/lib/shop.db");
        assert_eq!(config.logs.post_type, "shop_log");
        assert_eq!(config.logs.taxonomy, "edd_log_type");
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".shopkeep")?;
        jail.create_file(
            ".shopkeep/config.toml",
            r#"
[database]
table_prefix = "toml_"
"#,
        )?;
        jail.set_env("SK_DATABASE__TABLE_PREFIX", "env_");

        let config = SkConfig::load().expect("config loads");
        assert_eq!(config.database.table_prefix, "env_");
        Ok(())
    });
}
