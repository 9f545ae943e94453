//! Integration tests for reading the document from standard input

#[cfg(test)]
mod stdin_listing_tests {
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use std::process::{Command, Output, Stdio};

    fn run_jsonls_stdin(input: &str, args: &[&str]) -> Output {
        let mut child = Command::new(env!("CARGO_BIN_EXE_jsonls"))
            .args(args)
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to start jsonls");

        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes())
            .expect("Failed to write to stdin");

        child.wait_with_output().expect("Failed to wait for jsonls")
    }

    #[test]
    fn test_reads_stdin_without_files() {
        let output = run_jsonls_stdin(r#"{"a": ["x", "y"]}"#, &["a"]);
        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout), "x\ny");
    }

    #[test]
    fn test_relative_level_on_stdin_prints_raw_paths() {
        let output = run_jsonls_stdin(r#"["x", "./y"]"#, &["/"]);
        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout), "x\n./y");
    }

    #[test]
    fn test_no_levels_prints_nothing() {
        let output = run_jsonls_stdin(r#"{"a": "x"}"#, &[]);
        assert!(output.status.success());
        assert!(output.stdout.is_empty());
    }

    #[test]
    fn test_empty_level_matches_root_string() {
        let output = run_jsonls_stdin(r#""only.txt""#, &[""]);
        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout), "only.txt");
    }

    #[test]
    fn test_invalid_json_on_stdin() {
        let output = run_jsonls_stdin("{ not json", &["a"]);
        assert!(!output.status.success());
        assert!(output.stdout.is_empty());

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("JSON parse error in standard input"), "{}", stderr);
    }
}
