//! Heuristic scan for assignments in HLSL that look like they should be constants.
//!
//! A line is reported when, after trimming, it
//! - is not blank, a preprocessor directive (`#`) or a `//` comment,
//! - does not open an `if (` / `for (` block,
//! - contains `=`,
//! - and starts with an uppercase character (type names such as `ConstantBuffer<...>`
//!   or `FbPixelOutput<1>` in local declarations).
//!
//! This is a text filter, not a parser. Comparisons (`==`) and multi-line constructs
//! produce false positives and negatives.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use fbgen_core::error::{FbgenError, Result};

/// Extension of the files scanned by [`scan_tree`].
pub const SHADER_EXTENSION: &str = "hlsl";

/// Every shader file visited, with its flagged lines (possibly none).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanHit {
    pub path: PathBuf,
    pub lines: Vec<String>,
}

/// Apply the heuristic to one file's text. Returned lines are trimmed.
pub fn scan_source(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| is_flagged(line))
        .map(str::to_string)
        .collect()
}

fn is_flagged(line: &str) -> bool {
    if line.is_empty()
        || line.starts_with('#')
        || line.starts_with("//")
        || line.starts_with("if (")
        || line.starts_with("for (")
    {
        return false;
    }
    line.contains('=') && line.chars().next().is_some_and(char::is_uppercase)
}

/// Scan every `.hlsl` file under `root`, sorted by path.
pub fn scan_tree(root: &Path) -> Result<Vec<ScanHit>> {
    if !root.exists() {
        return Err(FbgenError::InputNotFound(root.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == SHADER_EXTENSION))
        .collect();
    files.sort();

    let mut hits = Vec::with_capacity(files.len());
    for path in files {
        let bytes = std::fs::read(&path)?;
        let lines = scan_source(&String::from_utf8_lossy(&bytes));
        tracing::debug!("{}: {} flagged lines", path.display(), lines.len());
        hits.push(ScanHit { path, lines });
    }
    Ok(hits)
}

/// Render hits the way `fbgen scan-shaders` prints them.
pub fn format_report(hits: &[ScanHit]) -> String {
    let mut out = String::new();
    for hit in hits {
        out.push_str(&format!("# {}\n", hit.path.display()));
        for line in &hit.lines {
            out.push_str(&format!("  {line}\n"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHADER: &str = r#"
#include <kitchen/gpu/samplers.hlsli>
// Float x = 1;
ConstantBuffer<Bindings> g_bindings: register(b0);

void todo_cs(FbComputeInput input) {
    ConstantBuffer<Constants> constants = ResourceDescriptorHeap[g_bindings.constants];
    float scale = 2.0f;
    if (Flag == 1) {
    }
    for (Uint i = 0; i < 4; i++) {}
    Texture2D tex = ResourceDescriptorHeap[constants.texture];
}
"#;

    #[test]
    fn test_scan_source_filters() {
        let lines = scan_source(SHADER);
        assert_eq!(
            lines,
            vec![
                "ConstantBuffer<Constants> constants = ResourceDescriptorHeap[g_bindings.constants];",
                "Texture2D tex = ResourceDescriptorHeap[constants.texture];",
            ]
        );
    }

    #[test]
    fn test_uppercase_without_assignment_ignored() {
        assert!(scan_source("ConstantBuffer<Bindings> g_bindings: register(b0);").is_empty());
        assert!(scan_source("   \n\t\n").is_empty());
    }

    #[test]
    fn test_comparison_is_a_known_false_positive() {
        assert_eq!(scan_source("Result == 0;"), vec!["Result == 0;"]);
    }

    #[test]
    fn test_scan_tree_sorted_and_filtered() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("buffet/demos/rain");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("rain.hlsl"), "Float3 v = 0;\n").unwrap();
        std::fs::write(nested.join("rain.hlsli"), "Float3 w = 0;\n").unwrap();
        std::fs::write(root.path().join("a.hlsl"), "float x = 0;\n").unwrap();

        let hits = scan_tree(root.path()).unwrap();

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].path, root.path().join("a.hlsl"));
        assert!(hits[0].lines.is_empty());
        assert_eq!(hits[1].path, nested.join("rain.hlsl"));
        assert_eq!(hits[1].lines, vec!["Float3 v = 0;"]);

        let report = format_report(&hits);
        assert!(report.contains(&format!("# {}\n  Float3 v = 0;\n", nested.join("rain.hlsl").display())));
    }

    #[test]
    fn test_scan_tree_missing_root() {
        let err = scan_tree(Path::new("/tmp/nonexistent_fbgen_shaders")).unwrap_err();
        assert!(matches!(err, FbgenError::InputNotFound(_)));
    }
}
