#[cfg(test)]
mod examples {
    use std::fs;
    use std::path::Path;

    use clfmt::formatting::*;
    use clfmt::language::*;
    use clfmt::parsing;

    /// Golden test for the format command
    ///
    /// This test:
    /// 1. Reads all .clle files from tests/golden/
    /// 2. Runs the equivalent of the `format` command on each file
    /// 3. Compares the formatted output with the original input
    /// 4. Shows clear diffs when differences are found
    ///
    /// The test expects files to be in their canonical formatted form. If
    /// files fail this test, either the parser & formatter is wrong (a bug
    /// that needs to be fixed!) or possibly the golden file is wrong
    /// (perhaps because of a deliberate style change, and they thus might
    /// need reformatting)

    /// Simple diff function to show line-by-line differences
    fn show_diff(original: &str, formatted: &str, file_path: &Path) {
        let original_lines: Vec<&str> = original
            .lines()
            .collect();
        let formatted_lines: Vec<&str> = formatted
            .lines()
            .collect();

        let max_lines = original_lines
            .len()
            .max(formatted_lines.len());

        println!("\nDifferences found in file: {:?}", file_path);
        println!("--- Original");
        println!("+++ Formatted");

        for i in 0..max_lines {
            let orig_line = original_lines
                .get(i)
                .unwrap_or(&"");
            let fmt_line = formatted_lines
                .get(i)
                .unwrap_or(&"");

            if orig_line != fmt_line {
                println!("@@ Line {} @@", i + 1);
                println!("- {}", orig_line);
                println!("+ {}", fmt_line);
            }
        }
    }

    #[test]
    fn ensure_identical_output() {
        let dir = Path::new("tests/golden");

        assert!(dir.exists(), "golden directory missing");

        let entries = fs::read_dir(dir).expect("Failed to read golden directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("clle")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .clle files found in golden directory");

        let layout = Layout::default();
        let mut failures = Vec::new();

        for file in &files {
            let original = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let mut formatted = String::new();
            for section in parsing::sections(&original) {
                for line in format_section(&section, &layout) {
                    formatted.push_str(&line);
                    formatted.push('\n');
                }
            }

            if original != formatted {
                show_diff(&original, &formatted, file);
                failures.push(file.clone());
            }
        }

        if !failures.is_empty() {
            panic!(
                "Golden files should be unchanged by formatting, but {} files differ",
                failures.len()
            );
        }
    }
}
