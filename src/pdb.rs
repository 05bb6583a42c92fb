// PDB identifiers as typed by the user, and the RCSB locations derived from them.

use std::fmt;

use crate::error::{OverlayError, Result};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PdbId(String);

impl PdbId {
    pub const LEN: usize = 4;

    /// Trims and uppercases `input`; it must then be exactly four ASCII
    /// alphanumerics.
    pub fn parse(input: &str) -> Result<PdbId> {
        let id = input.trim().to_ascii_uppercase();
        if id.len() == PdbId::LEN && id.chars().all(|c| c.is_ascii_alphanumeric()) {
            Ok(PdbId(id))
        } else {
            Err(OverlayError::InvalidPdbId(input.trim().to_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn structure_url(&self) -> String {
        format!("https://files.rcsb.org/download/{}.pdb", self.0)
    }

    pub fn entry_url(&self) -> String {
        format!("https://data.rcsb.org/rest/v1/core/entry/{}", self.0)
    }

    pub fn screenshot_file_name(&self) -> String {
        format!("{}_structure.png", self.0)
    }
}

impl fmt::Display for PdbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named structure offered in the viewer's preset list.
#[derive(Clone, Debug, PartialEq)]
pub struct Preset {
    pub id: &'static str,
    pub name: &'static str,
}

pub const DEFAULT_PRESET: Preset = Preset {
    id: "1MBN",
    name: "Myoglobin",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        let id = PdbId::parse("  1mbn \n").unwrap();
        assert_eq!(id.as_str(), "1MBN");
        assert_eq!(id.to_string(), "1MBN");
    }

    #[test]
    fn rejects_wrong_length_and_symbols() {
        assert!(PdbId::parse("").is_err());
        assert!(PdbId::parse("1MB").is_err());
        assert!(PdbId::parse("1MBNX").is_err());
        assert!(PdbId::parse("1M-N").is_err());
        assert!(matches!(
            PdbId::parse(" 4hh ").unwrap_err(),
            OverlayError::InvalidPdbId(ref s) if s == "4hh"
        ));
    }

    #[test]
    fn builds_rcsb_locations() {
        let id = PdbId::parse("4hhb").unwrap();
        assert_eq!(id.structure_url(), "https://files.rcsb.org/download/4HHB.pdb");
        assert_eq!(id.entry_url(), "https://data.rcsb.org/rest/v1/core/entry/4HHB");
        assert_eq!(id.screenshot_file_name(), "4HHB_structure.png");
    }

    #[test]
    fn default_preset_is_a_valid_id() {
        assert!(PdbId::parse(DEFAULT_PRESET.id).is_ok());
    }
}
