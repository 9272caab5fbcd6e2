//! Tests for partition naming

use super::*;
use test_case::test_case;

#[test_case(0, "part-a-00000")]
#[test_case(7, "part-a-00007")]
#[test_case(99, "part-a-00099")]
#[test_case(12345, "part-a-12345")]
fn test_default_name(ordinal: u32, expected: &str) {
    let config = JobConfig::default();
    assert_eq!(partition_name(&config, ordinal), expected);
}

#[test]
fn test_wide_ordinal_not_truncated() {
    let config = JobConfig::default();
    assert_eq!(partition_name(&config, 100_000), "part-a-100000");
    assert_eq!(partition_name(&config, 4_000_000), "part-a-4000000");
}

#[test]
fn test_custom_modifier() {
    let config = JobConfig::new().with_part_modifier("b-");
    assert_eq!(partition_name(&config, 7), "part-b-00007");
}

#[test]
fn test_override_used_verbatim() {
    let config = JobConfig::new().with_name_override(7, "cluster.00007");
    assert_eq!(partition_name(&config, 7), "cluster.00007");
    // other ordinals still use the default algorithm
    assert_eq!(partition_name(&config, 8), "part-a-00008");
}

#[test]
fn test_names_unique_per_ordinal() {
    let config = JobConfig::default();
    let names: Vec<String> = (0..100).map(|n| partition_name(&config, n)).collect();
    let mut deduped = names.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), names.len());
}

#[test]
fn test_deterministic() {
    let config = JobConfig::default();
    assert_eq!(partition_name(&config, 42), partition_name(&config, 42));
}
