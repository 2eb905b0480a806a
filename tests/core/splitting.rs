// Size-bounded splitting tests
//
// Uses the stock 1 MiB / 512 KiB thresholds through the full pipeline,
// plus small thresholds for multi-byte content.

use std::fs;

use codepack::core::config::Config;
use codepack::core::consolidator::splitter::part_path;
use codepack::core::consolidator::ConsolidationPipeline;

use crate::common::{artifact_path, config_with_thresholds, run_default, TestRepo, Utf8TestData};

const MIB: usize = 1024 * 1024;
const HALF_MIB: u64 = 512 * 1024;

/// Body length that makes `>>> big.rs\n<body>\n` exactly `total` bytes
fn body_for_artifact_size(total: usize) -> String {
    let overhead = ">>> big.rs\n".len() + 1;
    "a".repeat(total - overhead)
}

#[test]
fn test_artifact_at_threshold_is_not_split() {
    let repo = TestRepo::with_files(&[("big.rs", &body_for_artifact_size(MIB))]);

    let report = run_default(repo.path());

    assert!(!report.split.is_split());
    assert_eq!(report.split.size_bytes(), MIB as u64);
    assert!(artifact_path(repo.path()).exists());
    assert!(!part_path(&artifact_path(repo.path()), 1).exists());
}

#[test]
fn test_artifact_over_threshold_is_split() {
    let repo = TestRepo::with_files(&[("big.rs", &body_for_artifact_size(MIB + 1))]);
    let expected = format!(">>> big.rs\n{}\n", body_for_artifact_size(MIB + 1));

    let report = run_default(repo.path());
    let artifact = artifact_path(repo.path());

    assert!(report.split.is_split());
    assert!(!artifact.exists());

    let parts = report.split.parts();
    let size = (MIB + 1) as u64;
    assert_eq!(parts.len() as u64, size.div_ceil(HALF_MIB));
    assert_eq!(parts.len(), 3);
    assert!(parts.iter().all(|p| p.size_bytes <= HALF_MIB));
    assert_eq!(parts[2].size_bytes, 1);

    assert_eq!(
        parts[0].path,
        repo.path().join("consolidated_code.min.part0001.txt")
    );
    assert_eq!(
        parts[2].path,
        repo.path().join("consolidated_code.min.part0003.txt")
    );

    let mut rebuilt = Vec::new();
    for part in parts {
        rebuilt.extend(fs::read(&part.path).unwrap());
    }
    assert_eq!(rebuilt, expected.into_bytes());
}

#[test]
fn test_stale_parts_are_replaced() {
    let repo = TestRepo::with_files(&[("big.rs", &body_for_artifact_size(MIB + 1))]);
    run_default(repo.path());
    assert!(part_path(&artifact_path(repo.path()), 3).exists());

    // Shrink the tree below the threshold and rerun
    fs::write(repo.path().join("big.rs"), "fn small() {}").unwrap();
    let report = run_default(repo.path());

    assert!(!report.split.is_split());
    assert!(artifact_path(repo.path()).exists());
    for n in 1..=3 {
        assert!(!part_path(&artifact_path(repo.path()), n).exists());
    }
}

#[test]
fn test_multibyte_split_keeps_parts_valid_utf8() {
    let data = Utf8TestData::new();
    let mut files = Vec::new();
    for (i, text) in data.emoji.iter().chain(data.multibyte.iter()).enumerate() {
        files.push((format!("src/f{i:02}.rs"), format!("// {text}\nfn f{i}() {{}}\n")));
    }
    let specs: Vec<(&str, &str)> = files.iter().map(|(p, c)| (p.as_str(), c.as_str())).collect();
    let repo = TestRepo::with_files(&specs);

    let pipeline = ConsolidationPipeline::new(config_with_thresholds(64, 7)).unwrap();
    let report = pipeline.run(repo.path()).unwrap();

    assert!(report.split.is_split());
    let mut rebuilt = String::new();
    for part in report.split.parts() {
        assert!(part.size_bytes <= 7);
        // read_to_string fails on invalid UTF-8
        rebuilt.push_str(&fs::read_to_string(&part.path).unwrap());
    }
    assert_eq!(rebuilt.len() as u64, report.split.size_bytes());
    assert!(rebuilt.starts_with(">>> src/f00.rs\n// 🦀\n"));
}

#[test]
fn test_custom_output_name_part_naming() {
    let repo = TestRepo::with_files(&[("a.rs", &"x".repeat(300))]);

    let mut config = config_with_thresholds(100, 100);
    config.consolidation.output_file = "bundle.txt".to_string();
    let report = ConsolidationPipeline::new(config)
        .unwrap()
        .run(repo.path())
        .unwrap();

    let names: Vec<String> = report
        .split
        .parts()
        .iter()
        .map(|p| p.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "bundle.part0001.txt",
            "bundle.part0002.txt",
            "bundle.part0003.txt",
            "bundle.part0004.txt",
        ]
    );
}

#[test]
fn test_default_thresholds() {
    let config = Config::default();
    assert_eq!(config.split.max_unified_size_bytes, MIB as u64);
    assert_eq!(config.split.max_chunk_size_bytes, HALF_MIB);
}
