//! Utilities for snapshot testing with insta

use insta::{assert_snapshot, Settings};

/// Configure insta settings for consistent snapshots
pub fn with_settings<F>(f: F)
where
    F: FnOnce(),
{
    let mut settings = Settings::clone_current();
    settings.set_snapshot_path("../snapshots");
    settings.set_prepend_module_to_snapshot(false);
    settings.bind(f);
}

/// Snapshot a converted output file together with the format it was made for
pub fn assert_output_snapshot(name: &str, format: &str, output: &str) {
    with_settings(|| {
        assert_snapshot!(name, format!("=== OUTPUT ({}) ===\n{}", format, output));
    });
}

/// Snapshot a rendered batch report
pub fn assert_report_snapshot(name: &str, report: &str) {
    with_settings(|| {
        assert_snapshot!(name, report);
    });
}
