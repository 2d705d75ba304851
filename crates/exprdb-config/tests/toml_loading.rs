//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and cwd manipulation.

use exprdb_config::{ConfigError, ExprConfig};
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_database_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "/var/lib/exprdb/mouse.db"
foreign_keys = false

[general]
pretty = true
"#,
        )?;

        let config: ExprConfig = Figment::from(Serialized::defaults(ExprConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "/var/lib/exprdb/mouse.db");
        assert!(!config.database.foreign_keys);
        assert!(config.general.pretty);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
pretty = true
"#,
        )?;

        let config: ExprConfig = Figment::from(Serialized::defaults(ExprConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "exprdb.db");
        assert!(config.database.foreign_keys);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".exprdb")?;
        jail.create_file(
            ".exprdb/config.toml",
            r#"
[database]
path = "project.db"
"#,
        )?;

        let config = ExprConfig::load().expect("config loads");
        assert_eq!(config.database.path, "project.db");
        Ok(())
    });
}

#[test]
fn empty_path_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_dir(".exprdb")?;
        jail.create_file(
            ".exprdb/config.toml",
            r#"
[database]
path = ""
"#,
        )?;

        let result = ExprConfig::load();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}
