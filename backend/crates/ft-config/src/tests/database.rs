use crate::DatabaseConfig;

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};

#[test]
fn given_nested_relative_path_when_validate_then_ok() {
    let config = DatabaseConfig {
        path: "data/fintracker.db".to_string(),
        ..DatabaseConfig::default()
    };

    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_absolute_path_when_validate_then_error() {
    let config = DatabaseConfig {
        path: "/var/lib/fintracker.db".to_string(),
        ..DatabaseConfig::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_parent_traversal_when_validate_then_error() {
    let config = DatabaseConfig {
        path: "../outside.db".to_string(),
        ..DatabaseConfig::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_zero_connections_when_validate_then_error() {
    let config = DatabaseConfig {
        max_connections: 0,
        ..DatabaseConfig::default()
    };

    assert_that!(config.validate(), err(anything()));
}
