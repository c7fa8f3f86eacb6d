pub mod output;
pub mod writers;

pub use output::{create_writer, OutputFormat, OutputWriter, Report};

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read a JSON file holding one response record or an array of them.
pub fn read_records(path: &Path) -> Result<Vec<Value>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    Ok(match value {
        Value::Array(records) => records,
        record => vec![record],
    })
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_single_record_and_array() {
        let single = NamedTempFile::new().unwrap();
        fs::write(single.path(), r#"{"effort": 20}"#).unwrap();
        assert_eq!(read_records(single.path()).unwrap().len(), 1);

        let many = NamedTempFile::new().unwrap();
        fs::write(many.path(), r#"[{"effort": 20}, {"effort": 30}]"#).unwrap();
        assert_eq!(read_records(many.path()).unwrap().len(), 2);
    }

    #[test]
    fn test_invalid_json_has_context() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "{not json").unwrap();
        let err = read_records(file.path()).unwrap_err();
        assert!(err.to_string().contains("is not valid JSON"));
    }
}
