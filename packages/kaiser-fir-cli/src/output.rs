use std::io::Write;
use std::path::Path;

/// Write text to stdout or a file, ensuring a single trailing newline.
pub fn write_output(text: &str, output_path: Option<&str>) -> Result<(), String> {
    let text = text.trim_end_matches('\n');
    match output_path {
        Some(path) => std::fs::write(Path::new(path), format!("{}\n", text))
            .map_err(|e| format!("Failed to write output file '{}': {}", path, e)),
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(text.as_bytes())
                .and_then(|_| handle.write_all(b"\n"))
                .map_err(|e| format!("Failed to write to stdout: {}", e))
        }
    }
}

/// Serialize a value to JSON (pretty or compact).
pub fn to_json<T: serde::Serialize>(value: &T, compact: bool) -> Result<String, String> {
    let json = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    json.map_err(|e| format!("JSON serialization failed: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_json_compact_and_pretty() {
        let value = serde_json::json!({ "num_taps": 74 });
        assert_eq!(to_json(&value, true).unwrap(), r#"{"num_taps":74}"#);
        assert!(to_json(&value, false).unwrap().contains("\n"));
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_output("a,b\n1,2\n", path.to_str()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a,b\n1,2\n");
    }
}
