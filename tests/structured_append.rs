//! Structured-append merge across symbols.

use barqode_rs::structured_append::{merge_parts, StructuredAppendInfo};

#[test]
fn merges_four_parts_in_index_order() {
    let parts = vec![
        (StructuredAppendInfo { index: 2, count: 4, parity: None, file_id: Some(0x55) }, b"CC".to_vec()),
        (StructuredAppendInfo { index: 0, count: 4, parity: None, file_id: Some(0x55) }, b"AA".to_vec()),
        (StructuredAppendInfo { index: 3, count: 4, parity: None, file_id: Some(0x55) }, b"DD".to_vec()),
        (StructuredAppendInfo { index: 1, count: 4, parity: None, file_id: Some(0x55) }, b"BB".to_vec()),
    ];
    let merged = merge_parts(parts).unwrap();
    assert_eq!(merged, b"AABBCCDD");
}

#[test]
fn rejects_inconsistent_part_count() {
    let parts = vec![
        (StructuredAppendInfo { index: 0, count: 2, parity: None, file_id: None }, b"A".to_vec()),
        (StructuredAppendInfo { index: 1, count: 3, parity: None, file_id: None }, b"B".to_vec()),
    ];
    assert!(merge_parts(parts).is_err());
}

/// Scenario: four QR parts of one sequence (id 0x55 = decimal 85), merged
/// in index order regardless of arrival order.
#[test]
fn scenario_merges_four_qr_parts_by_file_id() {
    let parts = vec![
        (StructuredAppendInfo { index: 1, count: 4, parity: None, file_id: Some(0x55) }, b"BB".to_vec()),
        (StructuredAppendInfo { index: 3, count: 4, parity: None, file_id: Some(0x55) }, b"DD".to_vec()),
        (StructuredAppendInfo { index: 0, count: 4, parity: None, file_id: Some(0x55) }, b"AA".to_vec()),
        (StructuredAppendInfo { index: 2, count: 4, parity: None, file_id: Some(0x55) }, b"CC".to_vec()),
    ];
    let file_id = parts[0].0.file_id.unwrap();
    let merged = merge_parts(parts).unwrap();

    assert_eq!(merged, b"AABBCCDD");
    assert_eq!(file_id.to_string(), "85");
}

#[test]
fn rejects_missing_index() {
    let parts = vec![
        (StructuredAppendInfo { index: 0, count: 3, parity: None, file_id: None }, b"A".to_vec()),
        (StructuredAppendInfo { index: 2, count: 3, parity: None, file_id: None }, b"C".to_vec()),
    ];
    assert!(merge_parts(parts).is_err());
}
