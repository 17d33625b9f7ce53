use crate::utils::error::{EtlError, Result};
use std::path::{Component, Path};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Rejects an output path that names the input file, which would replace the
/// compose file with its own projection.
pub fn validate_distinct_paths(input: &str, output: &str) -> Result<()> {
    let input_path = Path::new(input);
    let output_path = Path::new(output);

    let same = match (input_path.canonicalize(), output_path.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        // 輸出檔尚未存在時只比較字面路徑
        _ => literal_components(input_path).eq(literal_components(output_path)),
    };

    if same {
        return Err(EtlError::InvalidConfigValueError {
            field: "output".to_string(),
            value: output.to_string(),
            reason: "Output path must differ from the input compose file".to_string(),
        });
    }

    Ok(())
}

fn literal_components(path: &Path) -> impl Iterator<Item = Component<'_>> {
    path.components().filter(|c| !matches!(c, Component::CurDir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input", "./docker-compose.yml").is_ok());
        assert!(validate_path("input", "").is_err());
        assert!(validate_path("input", "   ").is_err());
        assert!(validate_path("input", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_distinct_paths() {
        assert!(validate_distinct_paths("./docker-compose.yml", "./services.json").is_ok());
        assert!(validate_distinct_paths("compose.yml", "compose.yml").is_err());
        assert!(validate_distinct_paths("./compose.yml", "compose.yml").is_err());
    }

    #[test]
    fn test_validate_distinct_paths_resolves_existing_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("compose.yml");
        std::fs::write(&file, "services: {}").unwrap();

        let direct = file.to_str().unwrap().to_string();
        let dotted = dir.path().join(".").join("compose.yml");
        assert!(validate_distinct_paths(&direct, dotted.to_str().unwrap()).is_err());
    }
}
