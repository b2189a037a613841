//! Layout checks: unit tests mirror `src/`, are wired into the `unit` target,
//! and the integration test and benchmark go through the public API

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const CRATE_NAME: &str = "tileilp";

    /// Relative paths of every `.rs` file below `root`
    fn rust_files(root: &Path) -> io::Result<BTreeSet<PathBuf>> {
        let mut files = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    let relative = path
                        .strip_prefix(root)
                        .map_err(|_| io::Error::other("path outside root"))?;
                    files.insert(relative.to_path_buf());
                }
            }
        }

        Ok(files)
    }

    fn is_module_file(path: &Path) -> bool {
        path.file_name().is_some_and(|name| name == "mod.rs")
    }

    /// Source files that need a unit test file of the same relative path
    fn testable_sources() -> BTreeSet<PathBuf> {
        rust_files(Path::new("src"))
            .unwrap_or_default()
            .into_iter()
            .filter(|path| {
                !is_module_file(path) && path != Path::new("lib.rs") && path != Path::new("main.rs")
            })
            .collect()
    }

    fn unit_test_files() -> BTreeSet<PathBuf> {
        rust_files(Path::new("tests/unit"))
            .unwrap_or_default()
            .into_iter()
            .filter(|path| !is_module_file(path))
            .collect()
    }

    fn listing(paths: &BTreeSet<&PathBuf>) -> String {
        paths
            .iter()
            .map(|path| format!("  - {}", path.display()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Tests src and tests/unit hold the same files
    // Verified by adding a source file without a test counterpart
    #[test]
    fn test_unit_tree_mirrors_src() {
        let sources = testable_sources();
        let tests = unit_test_files();
        assert!(!sources.is_empty(), "no source files found under src/");

        let untested: BTreeSet<_> = sources.difference(&tests).collect();
        let orphaned: BTreeSet<_> = tests.difference(&sources).collect();

        assert!(
            untested.is_empty() && orphaned.is_empty(),
            "src/ without tests/unit/ counterpart:\n{}\ntests/unit/ without src/ counterpart:\n{}",
            listing(&untested),
            listing(&orphaned)
        );
    }

    // Tests every unit test file is declared in its directory's mod.rs
    // Verified by removing a module declaration from tests/unit/model/mod.rs
    #[test]
    fn test_unit_files_are_compiled() {
        let root = Path::new("tests/unit");
        let mut undeclared = Vec::new();

        for file in unit_test_files() {
            let Some(stem) = file.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let parent = file.parent().unwrap_or_else(|| Path::new(""));
            let declarations = fs::read_to_string(root.join(parent).join("mod.rs")).unwrap_or_default();

            let declared = declarations
                .lines()
                .map(str::trim)
                .any(|line| line == format!("pub mod {stem};") || line == format!("mod {stem};"));
            if !declared {
                undeclared.push(format!("  - tests/unit/{}", file.display()));
            }
        }

        assert!(
            undeclared.is_empty(),
            "Unit test files missing from their mod.rs:\n{}",
            undeclared.join("\n")
        );
    }

    // Tests every test file outside module declarations defines a test
    // Verified by deleting the #[test] attributes of one file
    #[test]
    fn test_all_test_files_contain_tests() {
        let files = rust_files(Path::new("tests")).unwrap_or_default();
        let empty: Vec<String> = files
            .iter()
            .filter(|path| !is_module_file(path))
            .filter(|path| {
                fs::read_to_string(Path::new("tests").join(path))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .map(|path| format!("  - tests/{}", path.display()))
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            empty.join("\n")
        );
    }

    // Tests the integration test and benchmark import the library crate
    // Verified by replacing the crate imports with a local copy of the types
    #[test]
    fn test_external_targets_use_public_api() {
        let import = format!("use {CRATE_NAME}::");
        for target in ["tests/compilation.rs", "benches/compile.rs"] {
            let content = fs::read_to_string(target).unwrap_or_default();
            assert!(
                content.contains(&import),
                "{target} does not import from the {CRATE_NAME} crate"
            );
            assert!(
                !content.contains("mod tests"),
                "{target} should exercise the crate from outside, not hold a unit test module"
            );
        }
    }
}
