//! One module per principle. Each holds a `legacy` anti-pattern rendition
//! and its refactored counterpart, plus the `Demonstration` wiring.

pub mod dip;
pub mod isp;
pub mod lsp;
pub mod ocp;
pub mod srp;

use crate::domain::ports::Demonstration;
use crate::utils::error::{DemoError, Result};

pub const KNOWN_PRINCIPLES: [&str; 5] = ["srp", "ocp", "lsp", "isp", "dip"];

fn demonstration(name: &str, student_name: &str) -> Result<Box<dyn Demonstration>> {
    match name {
        "srp" => Ok(Box::new(srp::SrpDemo)),
        "ocp" => Ok(Box::new(ocp::OcpDemo)),
        "lsp" => Ok(Box::new(lsp::LspDemo::new(student_name))),
        "isp" => Ok(Box::new(isp::IspDemo)),
        "dip" => Ok(Box::new(dip::DipDemo)),
        other => Err(DemoError::UnknownPrincipleError {
            name: other.to_string(),
        }),
    }
}

/// Resolves the requested principle names into demonstrations. An empty
/// selection means all five, in the order they are usually taught.
pub fn build(names: &[String], student_name: &str) -> Result<Vec<Box<dyn Demonstration>>> {
    if names.is_empty() {
        return KNOWN_PRINCIPLES
            .iter()
            .map(|name| demonstration(name, student_name))
            .collect();
    }

    names
        .iter()
        .map(|name| demonstration(name.to_ascii_lowercase().as_str(), student_name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_builds_all_five() {
        let demos = build(&[], "Ana").unwrap();
        let names: Vec<&str> = demos.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["srp", "ocp", "lsp", "isp", "dip"]);
    }

    #[test]
    fn test_selection_is_case_insensitive() {
        let demos = build(&["DIP".to_string()], "Ana").unwrap();
        assert_eq!(demos.len(), 1);
        assert_eq!(demos[0].name(), "dip");
    }

    #[test]
    fn test_unknown_principle_is_rejected() {
        let err = build(&["grasp".to_string()], "Ana").map(|_| ()).unwrap_err();
        assert!(matches!(
            err,
            DemoError::UnknownPrincipleError { ref name } if name == "grasp"
        ));
    }
}
