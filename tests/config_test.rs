// ABOUTME: Integration tests for environment configuration and store selection
// ABOUTME: Validates DOUGHMASTER_* parsing, fallbacks, overrides, and the store factory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::env;
use std::path::PathBuf;

use common::init_test_logging;
use doughmaster::config::environment::{STORE_BACKEND_ENV, STORE_PATH_ENV};
use doughmaster::config::{DoughMasterConfig, Environment, StoreBackend};
use doughmaster::logging::{LogFormat, LoggingConfig};
use doughmaster::store::{RecipeRepository, RecipeStore};
use serial_test::serial;

fn clear_store_env() {
    env::remove_var(STORE_BACKEND_ENV);
    env::remove_var(STORE_PATH_ENV);
}

#[test]
fn test_store_backend_parsing() {
    assert_eq!(StoreBackend::parse("file"), Some(StoreBackend::File));
    assert_eq!(StoreBackend::parse(" MEMORY "), Some(StoreBackend::Memory));
    assert_eq!(StoreBackend::parse("redis"), None);
    assert_eq!(StoreBackend::default(), StoreBackend::File);
}

#[test]
fn test_environment_and_format_fallbacks() {
    assert_eq!(Environment::from_str_or_default("prod"), Environment::Production);
    assert_eq!(Environment::from_str_or_default("???"), Environment::Development);
    assert_eq!(LogFormat::from_str_or_default("json"), LogFormat::Json);
}

#[test]
#[serial]
fn test_from_env_defaults_to_file_store() {
    init_test_logging();
    clear_store_env();

    let config = DoughMasterConfig::from_env().unwrap();

    assert_eq!(config.store.backend, StoreBackend::File);
    assert!(config.store.path.ends_with("doughMasterRecipes.json"));
}

#[test]
#[serial]
fn test_from_env_reads_overrides() {
    init_test_logging();
    env::set_var(STORE_BACKEND_ENV, "memory");
    env::set_var(STORE_PATH_ENV, "/tmp/bakery/recipes.json");

    let config = DoughMasterConfig::from_env().unwrap();
    clear_store_env();

    assert_eq!(config.store.backend, StoreBackend::Memory);
    assert_eq!(config.store.path, PathBuf::from("/tmp/bakery/recipes.json"));
    assert!(config.summary().contains("in-memory"));
}

#[test]
#[serial]
fn test_unknown_backend_falls_back_to_file() {
    init_test_logging();
    env::set_var(STORE_BACKEND_ENV, "cassandra");

    let config = DoughMasterConfig::from_env().unwrap();
    clear_store_env();

    assert_eq!(config.store.backend, StoreBackend::File);
}

#[test]
#[serial]
fn test_store_factory_follows_config() {
    init_test_logging();
    env::set_var(STORE_BACKEND_ENV, "memory");

    let store = RecipeStore::from_env().unwrap();
    clear_store_env();

    assert_eq!(store.backend(), StoreBackend::Memory);
    assert_eq!(store.list().unwrap()[0].name, "Basic Bread");
}

#[test]
fn test_file_store_from_config_override() {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    let config = DoughMasterConfig::default().with_store_path(&path);

    let store = RecipeStore::new(&config);
    assert_eq!(store.backend(), StoreBackend::File);
    store.list().unwrap();

    assert!(path.exists());
}

#[test]
fn test_logging_level_override() {
    let logging = LoggingConfig::default().with_level("debug");
    assert_eq!(logging.level, "debug");
    assert_eq!(logging.format, LogFormat::Compact);
}

#[test]
fn test_production_logging_includes_location() {
    let logging = LoggingConfig::default().with_environment(Environment::Production);
    assert!(logging.include_location);
    assert_eq!(logging.environment, Environment::Production);

    let logging = logging.with_environment(Environment::Testing);
    assert!(!logging.include_location);
}
