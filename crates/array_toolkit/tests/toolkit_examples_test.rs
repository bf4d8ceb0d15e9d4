//! End-to-end checks of the documented examples through the `ArrayToolkit` facade.

use array_toolkit::{ArrayToolkit, Operation, ToolkitConfig, ToolkitError};

fn temp_config_path(name: &str) -> std::path::PathBuf {
    let id = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("array_toolkit_{name}_{id}.toml"))
}

#[test]
fn test_documented_examples() {
    let toolkit = ArrayToolkit::new();

    let mut data = [4, 7, 2, 9, 1];
    toolkit.sort(&mut data);
    assert_eq!(data, [1, 2, 4, 7, 9]);

    let mut data = [1, 2, 3, 4, 5];
    toolkit.rotate(&mut data, 2).unwrap();
    assert_eq!(data, [4, 5, 1, 2, 3]);

    assert_eq!(toolkit.to_string(&[]).unwrap(), "[NULL]");
    assert_eq!(toolkit.to_string(&[1, 2, 3]).unwrap(), "[1, 2, 3]");

    assert!(toolkit.compare(&[1, 2, 3], &[1, 2, 3]));
    assert!(!toolkit.compare(&[1, 2], &[1, 2, 3]));

    assert_eq!(toolkit.sum(&[1, 2, 3, 4]).unwrap(), 10);
    assert_eq!(toolkit.hash_code(&[]), 1);
}

#[test]
fn test_in_place_operations_return_same_buffer() {
    let toolkit = ArrayToolkit::new();
    let mut data = vec![3, 1, 2];
    let ptr = data.as_ptr();

    assert_eq!(toolkit.reverse(&mut data).as_ptr(), ptr);
    assert_eq!(toolkit.rotate(&mut data, 1).unwrap().as_ptr(), ptr);
    assert_eq!(toolkit.sort(&mut data).as_ptr(), ptr);
    assert_eq!(data, vec![1, 2, 3]);
}

#[test]
fn test_copying_operations_leave_input_untouched() {
    let toolkit = ArrayToolkit::new();
    let data = [5, 6, 7, 8];

    let range = toolkit.copy_of_range(&data, 1, 3).unwrap();
    let joined = toolkit.concat(&data, &range);

    assert_eq!(range, vec![6, 7]);
    assert_eq!(joined, vec![5, 6, 7, 8, 6, 7]);
    assert_eq!(data, [5, 6, 7, 8]);
}

#[test]
fn test_search_family() {
    let toolkit = ArrayToolkit::new();
    let data = [2, 8, 2, 5, 2];

    assert_eq!(toolkit.search_lin(&data, 2), Some(0));
    assert_eq!(toolkit.index_of(&data, 5), Some(3));
    assert_eq!(toolkit.search_lin(&data, 4), None);

    let hits = toolkit.search(&data, 2);
    assert_eq!(hits.count(), 3);
    assert_eq!(hits.indices(), &[0, 2, 4]);

    let sorted = [1, 3, 5, 7, 9, 11];
    assert_eq!(toolkit.search_bin(&sorted, 9), Some(4));
    assert_eq!(toolkit.search_bin(&sorted, 2), None);
}

#[test]
fn test_error_reporting() {
    let toolkit = ArrayToolkit::new();

    assert_eq!(
        toolkit.min_value(&[]),
        Err(ToolkitError::EmptyInput { operation: "min_value" })
    );
    assert_eq!(
        toolkit.get_max_occurrence(&[]),
        Err(ToolkitError::EmptyInput { operation: "max_occurrence" })
    );
    assert_eq!(
        toolkit.copy_of_range(&[1, 2], 0, 3),
        Err(ToolkitError::RangeOutOfBounds { start: 0, end: 3, len: 2 })
    );

    let mut empty: Vec<i32> = Vec::new();
    assert_eq!(toolkit.rotate(&mut empty, 1), Err(ToolkitError::ZeroLengthRotate));
}

#[test]
fn test_legacy_text_limit_from_file() {
    let path = temp_config_path("legacy");
    std::fs::write(&path, "max_text_len = 2000\n").unwrap();

    let toolkit = ArrayToolkit::from_config_file(&path).unwrap();
    assert_eq!(toolkit.config().max_text_len, Some(2000));

    // 400 x "1234, " is well past 2000 bytes
    let long = vec![1234; 400];
    assert!(matches!(
        toolkit.to_string(&long),
        Err(ToolkitError::TextOverflow { limit: 2000, .. })
    ));
    assert_eq!(toolkit.to_string(&[1234]).unwrap(), "[1234]");

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_default_config_has_no_text_limit() {
    let toolkit = ArrayToolkit::with_config(ToolkitConfig::default()).unwrap();
    let long = vec![1234; 400];
    let text = toolkit.to_string(&long).unwrap();
    assert_eq!(text.len(), 400 * 6 - 2 + 2);
}

#[test]
fn test_operation_table_covers_facade() {
    assert_eq!(Operation::ALL.len(), 17);
    assert_eq!(Operation::from_name("searchBIN"), Some(Operation::SearchBin));
    assert_eq!(Operation::from_name("hashCode"), Some(Operation::HashCode));
}
