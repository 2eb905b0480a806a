//! Tests for effective configuration resolution
//!
//! Precedence: command-line flags > env vars > TOML > defaults.

use std::env;
use std::fs;

use clap::Parser;
use serial_test::serial;

use codepack::cli::{resolve_config, Cli};
use codepack::core::config::PROJECT_CONFIG_FILE;

use crate::common::TestRepo;

fn clear_env_vars() {
    env::remove_var("CODEPACK_CONFIG");
    env::remove_var("CODEPACK_CONFIG_DIR");
    env::remove_var("CODEPACK_OUTPUT_FILE");
    env::remove_var("CODEPACK_SORT_ENTRIES");
    env::remove_var("CODEPACK_MAX_UNIFIED_SIZE");
    env::remove_var("CODEPACK_MAX_CHUNK_SIZE");
}

/// Point the user config dir at an empty location
fn isolate_user_config(repo: &TestRepo) {
    env::set_var("CODEPACK_CONFIG_DIR", repo.path().join(".no-user-config"));
}

#[test]
#[serial]
fn test_no_flags_gives_defaults() {
    clear_env_vars();
    let repo = TestRepo::with_files(&[]);
    isolate_user_config(&repo);

    let cli = Cli::try_parse_from(["codepack"]).unwrap();
    let config = resolve_config(&cli, repo.path()).unwrap();

    assert_eq!(config.consolidation.output_file, "consolidated_code.min.txt");
    assert!(!config.consolidation.sort_entries);
    assert_eq!(config.split.max_unified_size_bytes, 1024 * 1024);

    clear_env_vars();
}

#[test]
#[serial]
fn test_project_file_then_env_then_flags() {
    clear_env_vars();
    let repo = TestRepo::with_files(&[(
        PROJECT_CONFIG_FILE,
        "[consolidation]\noutput_file = \"from-toml.txt\"\n\n[split]\nmax_chunk_size_bytes = 1000\n",
    )]);
    isolate_user_config(&repo);

    let cli = Cli::try_parse_from(["codepack"]).unwrap();
    let config = resolve_config(&cli, repo.path()).unwrap();
    assert_eq!(config.consolidation.output_file, "from-toml.txt");
    assert_eq!(config.split.max_chunk_size_bytes, 1000);

    env::set_var("CODEPACK_OUTPUT_FILE", "from-env.txt");
    let config = resolve_config(&cli, repo.path()).unwrap();
    assert_eq!(config.consolidation.output_file, "from-env.txt");

    let cli = Cli::try_parse_from(["codepack", "--output", "from-flag.txt", "--sort"]).unwrap();
    let config = resolve_config(&cli, repo.path()).unwrap();
    assert_eq!(config.consolidation.output_file, "from-flag.txt");
    assert!(config.consolidation.sort_entries);
    assert_eq!(config.split.max_chunk_size_bytes, 1000);

    clear_env_vars();
}

#[test]
#[serial]
fn test_explicit_config_file() {
    clear_env_vars();
    let repo = TestRepo::with_files(&[("custom.toml", "[consolidation]\nsort_entries = true\n")]);
    let path = repo.path().join("custom.toml");

    let cli = Cli::try_parse_from(["codepack", "--config", path.to_str().unwrap()]).unwrap();
    let config = resolve_config(&cli, repo.path()).unwrap();

    assert!(config.consolidation.sort_entries);

    clear_env_vars();
}

#[test]
#[serial]
fn test_invalid_flag_value_rejected() {
    clear_env_vars();
    let repo = TestRepo::with_files(&[]);
    isolate_user_config(&repo);

    let cli = Cli::try_parse_from(["codepack", "--output", "nested/out.txt"]).unwrap();
    assert!(resolve_config(&cli, repo.path()).is_err());

    clear_env_vars();
}

#[test]
#[serial]
fn test_missing_explicit_config_file_is_error() {
    clear_env_vars();
    let repo = TestRepo::with_files(&[]);
    let missing = repo.path().join("missing.toml");
    assert!(!missing.exists());

    let cli = Cli::try_parse_from(["codepack", "-c", missing.to_str().unwrap()]).unwrap();
    let err = resolve_config(&cli, repo.path()).unwrap_err();
    assert!(err.is_bad_input());

    // Nothing was written
    assert_eq!(fs::read_dir(repo.path()).unwrap().count(), 0);

    clear_env_vars();
}
