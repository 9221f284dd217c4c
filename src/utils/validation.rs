use crate::utils::error::{DemoError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DemoError::ConfigError {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DemoError::ConfigError {
            message: format!("{} cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(DemoError::ConfigError {
            message: format!("{} contains null bytes", field_name),
        });
    }

    Ok(())
}

pub fn validate_principle_names(names: &[String], known: &[&str]) -> Result<()> {
    let known_set: HashSet<&str> = known.iter().copied().collect();

    for name in names {
        if !known_set.contains(name.to_ascii_lowercase().as_str()) {
            return Err(DemoError::UnknownPrincipleError { name: name.clone() });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("student_name", "Ana").is_ok());
        assert!(validate_non_empty_string("student_name", "").is_err());
        assert!(validate_non_empty_string("student_name", "   ").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "./output").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_principle_names() {
        let known = ["srp", "ocp", "lsp", "isp", "dip"];
        let names = vec!["srp".to_string(), "DIP".to_string()];
        assert!(validate_principle_names(&names, &known).is_ok());

        let unknown = vec!["grasp".to_string()];
        assert!(validate_principle_names(&unknown, &known).is_err());
    }
}
