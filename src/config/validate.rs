//! Startup validation of the library configuration.

use crate::config::Config;
use crate::error_handling::ConfigError;

/// Validates a configuration before any file is touched.
///
/// Configuration problems are fatal and reported up front, so a run never
/// does partial work against a bad setup.
///
/// # Errors
///
/// - `ConfigError::NoInputDirectories` if no input directory was given
/// - `ConfigError::DirectoryNotFound` if a given path does not exist
/// - `ConfigError::NotADirectory` if a given path is not a directory
/// - `ConfigError::InvalidDelimiter` if the delimiter is a comma, a quote,
///   a line break, or not ASCII
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.input_dirs.is_empty() {
        return Err(ConfigError::NoInputDirectories);
    }

    for dir in &config.input_dirs {
        if !dir.exists() {
            return Err(ConfigError::DirectoryNotFound(dir.clone()));
        }
        if !dir.is_dir() {
            return Err(ConfigError::NotADirectory(dir.clone()));
        }
    }

    // Quote and line breaks would corrupt the record framing.
    if matches!(config.delimiter, ',' | '"' | '\n' | '\r') || !config.delimiter.is_ascii() {
        return Err(ConfigError::InvalidDelimiter(config.delimiter));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn config_with(dirs: Vec<PathBuf>) -> Config {
        Config {
            input_dirs: dirs,
            ..Default::default()
        }
    }

    #[test]
    fn test_no_input_directories() {
        let result = validate_config(&config_with(Vec::new()));
        assert!(matches!(result, Err(ConfigError::NoInputDirectories)));
    }

    #[test]
    fn test_missing_directory() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let missing = temp.path().join("does-not-exist");
        let result = validate_config(&config_with(vec![missing.clone()]));
        match result {
            Err(ConfigError::DirectoryNotFound(path)) => assert_eq!(path, missing),
            other => panic!("Expected DirectoryNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_file_instead_of_directory() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let file = temp.path().join("scan.xml");
        std::fs::write(&file, "<nmaprun/>").expect("Failed to write file");
        let result = validate_config(&config_with(vec![file]));
        assert!(matches!(result, Err(ConfigError::NotADirectory(_))));
    }

    #[test]
    fn test_comma_delimiter_rejected() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let config = Config {
            delimiter: ',',
            ..config_with(vec![temp.path().to_path_buf()])
        };
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::InvalidDelimiter(','))
        ));
    }

    #[test]
    fn test_framing_delimiters_rejected() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        for delimiter in ['"', '\n', 'é'] {
            let config = Config {
                delimiter,
                ..config_with(vec![temp.path().to_path_buf()])
            };
            assert!(
                matches!(validate_config(&config), Err(ConfigError::InvalidDelimiter(_))),
                "{:?} should be rejected",
                delimiter
            );
        }
    }

    #[test]
    fn test_valid_config() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let config = config_with(vec![temp.path().to_path_buf()]);
        assert!(validate_config(&config).is_ok());
    }
}
