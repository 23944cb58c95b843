//! Assertion macros for generated scenario pages.
//!
//! Failures print what actually landed in the output directory.

use std::path::Path;

/// Sorted file names directly under `dir` (empty when it does not exist)
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .flatten()
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}

/// Assert a page exists, path relative to the project root.
///
/// ```ignore
/// assert_generated!(env, "public/scenarios/SCN_007_H.html");
/// ```
#[macro_export]
macro_rules! assert_generated {
    ($env:expr, $path:expr) => {{
        let full = $env.project_path($path);
        let dir = full.parent().map(|p| p.to_path_buf()).unwrap_or_default();
        assert!(
            full.is_file(),
            "expected page '{}' was not generated; {} has: {:?}",
            $path,
            dir.display(),
            $crate::common::file_names(&dir)
        );
    }};
}

/// Assert a page does not exist, path relative to the project root.
#[macro_export]
macro_rules! assert_not_generated {
    ($env:expr, $path:expr) => {{
        let full = $env.project_path($path);
        assert!(!full.exists(), "page '{}' should not have been generated", $path);
    }};
}

/// Assert a page no longer carries either placeholder spelling.
///
/// The clean spelling is only checked for pages of other scenarios, since
/// scenario 1 legitimately renders as `SCN_001`.
#[macro_export]
macro_rules! assert_no_placeholders {
    ($content:expr, $id:expr) => {{
        let content: &str = &$content;
        let id: &str = &$id;
        assert!(
            !content.contains($crate::common::DIRTY),
            "dirty placeholder left in {}:\n{}",
            id,
            content
        );
        if id != $crate::common::CLEAN {
            assert!(
                !content.contains($crate::common::CLEAN),
                "clean placeholder left in {}:\n{}",
                id,
                content
            );
        }
    }};
}
