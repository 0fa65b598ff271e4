use proptest::prelude::*;

use fenced_core::{AccessSite, BoundsError, BufferIndex, Diagnostic};

fn locate() -> AccessSite {
    fenced_core::access_site!()
}

proptest! {
    #[test]
    fn signed_offset_iff_non_negative(index in any::<i64>()) {
        prop_assert_eq!(index.to_offset().is_some(), index >= 0);
        prop_assert_eq!(index.to_raw(), index as i128);
    }

    #[test]
    fn unsigned_offset_is_identity(index in any::<u32>()) {
        prop_assert_eq!(index.to_offset(), Some(index as usize));
    }

    #[test]
    fn bounds_message_names_index_and_last_valid(index in any::<i64>(), len in 1usize..4096) {
        let text = BoundsError { index: index as i128, len }.to_string();
        let expected_index = format!("index [{index}]");
        let expected_range = format!("[0-{}]", len - 1);
        prop_assert!(text.contains(&expected_index));
        prop_assert!(text.contains(&expected_range));
    }
}

#[test]
fn access_site_macro_names_integration_test_function() {
    let site = locate();
    assert!(site.file.ends_with("index_properties.rs"));
    assert_eq!(site.function, Some("index_properties::locate"));
}

#[test]
fn diagnostic_lines_share_site_prefix() {
    let site = locate();
    let text = Diagnostic::bounds(&BoundsError { index: 10, len: 3 }, site).to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    let prefix = format!("{site}: ");
    assert!(lines.iter().all(|line| line.starts_with(&prefix)));
    assert_eq!(
        lines[1],
        format!("{prefix}function: index_properties::locate")
    );
}
