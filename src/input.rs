use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

pub const DEFAULT_INPUT: &str = "responses.json";
pub const DEFAULT_OUTPUT: &str = "vocab-guide-generated.html";

/// Load the saved responses: a JSON array of strings.
pub fn load_responses(path: &Path) -> Result<Vec<String>> {
    info!("Reading {}", path.display());
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let responses: Vec<String> = serde_json::from_str(&json)
        .with_context(|| format!("{} is not a JSON array of strings", path.display()))?;
    info!("Found {} responses to parse", responses.len());
    Ok(responses)
}

/// Write the rendered document, replacing any existing file.
pub fn write_document(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Generated: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_fixture() {
        let responses = load_responses(Path::new("tests/fixtures/responses.json")).unwrap();
        assert_eq!(responses.len(), 4);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_responses(Path::new("tests/fixtures/does-not-exist.json")).unwrap_err();
        assert!(err.to_string().contains("does-not-exist.json"));
    }

    #[test]
    fn wrong_shape_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("responses.json");
        fs::write(&path, r#"{"responses": ["Group 1"]}"#).unwrap();
        assert!(load_responses(&path).is_err());

        fs::write(&path, "[\"Group 1\",").unwrap();
        assert!(load_responses(&path).is_err());
    }

    #[test]
    fn unwritable_output_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.html");
        let err = write_document(&path, "<html></html>").unwrap_err();
        assert!(err.to_string().contains(&path.display().to_string()));
        assert!(!path.exists());
    }

    #[test]
    fn overwrites_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");
        fs::write(&path, "old").unwrap();
        write_document(&path, "<html></html>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<html></html>");
    }
}
