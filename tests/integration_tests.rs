//! Integration tests
//!
//! Tests the full end-to-end flow: YAML config → output-stage setup →
//! block writer → readable cluster partition (summary index plus
//! independently decompressible blocks).

use std::path::Path;
use tempfile::tempdir;
use zipnum_cluster::{
    partition_name, BlockIndexEntry, Error, JobConfig, TaskContext, TaskOutput, WriterStats,
    ZipnumOutput,
};

fn read_entries(path: &Path) -> Vec<BlockIndexEntry> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| BlockIndexEntry::parse(line).unwrap())
        .collect()
}

// ============================================================================
// End-to-End Cluster Tests
// ============================================================================

#[test]
fn test_full_attempt_produces_seekable_cluster() {
    let dir = tempdir().unwrap();
    let config = JobConfig::from_yaml("block_line_count: 100").unwrap();
    let ctx = TaskContext::new(0, 0, dir.path());

    let output = ZipnumOutput::new(config);
    let mut writer = output.create_writer(&ctx).unwrap();
    let codec = writer.codec().clone();

    // sorted SURT-style keys, as the upstream partitioner delivers them
    let records: Vec<(String, String)> = (0..250)
        .map(|i| {
            (
                format!("com,example,{i:04})/"),
                format!("20260830000000 https://{i}.example.com/"),
            )
        })
        .collect();
    for (key, value) in &records {
        writer.write(key, value).unwrap();
    }
    let stats = writer.close().unwrap();
    assert_eq!(
        stats,
        WriterStats {
            blocks: 3,
            records: 250
        }
    );

    let main = std::fs::read(dir.path().join("part-a-00000.gz")).unwrap();
    let entries = read_entries(&dir.path().join("part-a-00000-idx"));
    assert_eq!(entries.len(), 3);

    // seek directly to the block that holds record 150 and decompress
    // nothing else
    let target = &entries[1];
    assert_eq!(target.first_key, "com,example,0100)/");
    let slice = &main[target.offset as usize..(target.offset + target.length) as usize];
    let block = String::from_utf8(codec.decompress(slice).unwrap()).unwrap();

    let lines: Vec<&str> = block.lines().collect();
    assert_eq!(lines.len(), 100);
    assert_eq!(
        lines[50],
        "com,example,0150)/\t20260830000000 https://150.example.com/"
    );
}

#[test]
fn test_zstd_cluster_round_trip() {
    let dir = tempdir().unwrap();
    let config = JobConfig::new().with_codec("zstd").with_block_line_count(10);
    let ctx = TaskContext::new(2, 0, dir.path());

    let output = ZipnumOutput::new(config);
    let mut writer = output.create_writer(&ctx).unwrap();
    let codec = writer.codec().clone();
    for i in 0..25 {
        writer.write(&format!("key-{i:02}"), "v").unwrap();
    }
    writer.close().unwrap();

    let main = std::fs::read(dir.path().join("part-a-00002.zst")).unwrap();
    let entries = read_entries(&dir.path().join("part-a-00002-idx"));
    assert_eq!(entries.len(), 3);

    let mut recovered = 0;
    for entry in &entries {
        let slice = &main[entry.offset as usize..(entry.offset + entry.length) as usize];
        let raw = codec.decompress(slice).unwrap();
        recovered += raw.split(|b| *b == b'\n').filter(|l| !l.is_empty()).count();
    }
    assert_eq!(recovered, 25);
}

#[test]
fn test_yaml_config_drives_naming_and_segmentation() {
    let dir = tempdir().unwrap();
    let yaml = r#"
block_line_count: 4
part_modifier: "b-"
"#;
    let config = JobConfig::from_yaml(yaml).unwrap();
    let ctx = TaskContext::new(41, 0, dir.path());

    assert_eq!(partition_name(&config, 41), "part-b-00041");

    let output = ZipnumOutput::new(config);
    let mut writer = output.create_writer(&ctx).unwrap();
    for i in 0..8 {
        writer.write(&format!("k{i}"), "v").unwrap();
    }
    let stats = writer.close().unwrap();

    assert_eq!(stats.blocks, 2);
    assert!(dir.path().join("part-b-00041.gz").exists());
    assert!(dir.path().join("part-b-00041-idx").exists());
}

// ============================================================================
// Attempt Races and Retries
// ============================================================================

#[test]
fn test_speculative_duplicate_loses_cleanly() {
    let dir = tempdir().unwrap();
    let config = JobConfig::new().with_block_line_count(2);
    let output = ZipnumOutput::new(config);

    // first attempt wins the files and completes
    let winner_ctx = TaskContext::new(0, 0, dir.path());
    let mut winner = output.create_writer(&winner_ctx).unwrap();
    winner.write("a", "1").unwrap();
    winner.write("b", "2").unwrap();
    winner.close().unwrap();

    // speculative duplicate for the same ordinal must fail, not
    // corrupt or duplicate the output
    let loser_ctx = TaskContext::new(0, 1, dir.path());
    let err = output.create_writer(&loser_ctx).unwrap_err();
    assert!(matches!(err, Error::PathCollision { .. }));

    let entries = read_entries(&dir.path().join("part-a-00000-idx"));
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].count, 2);
}

#[test]
fn test_retry_in_fresh_work_dir_succeeds() {
    let base = tempdir().unwrap();
    let attempt0 = base.path().join("attempt-0");
    let attempt1 = base.path().join("attempt-1");
    std::fs::create_dir_all(&attempt0).unwrap();
    std::fs::create_dir_all(&attempt1).unwrap();

    let output = ZipnumOutput::new(JobConfig::default());
    output
        .create_writer(&TaskContext::new(3, 0, &attempt0))
        .unwrap();

    // same ordinal, new attempt, new work dir: no collision
    let writer = output
        .create_writer(&TaskContext::new(3, 1, &attempt1))
        .unwrap();
    assert_eq!(writer.partition(), "part-a-00003");
}
