// Summary fields pulled out of an RCSB core entry document for the
// viewer's info panel. Missing, empty, or zero fields render as `N/A`.

use serde_json::Value;

use crate::error::{OverlayError, Result};
use crate::pdb::PdbId;

pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Clone, Debug, PartialEq)]
pub struct ProteinInfo {
    pub pdb_id: PdbId,
    pub title: String,
    pub method: String,
    /// Best resolution in angstroms.
    pub resolution: Option<f64>,
    /// Molecular weight in kDa.
    pub weight: Option<f64>,
    pub keywords: String,
    /// Initial release date, `YYYY-MM-DD`.
    pub published: String,
    pub first_author: String,
}

impl ProteinInfo {
    pub fn from_entry_json(pdb_id: PdbId, json: &str) -> Result<ProteinInfo> {
        let entry: Value = serde_json::from_str(json).map_err(OverlayError::ProteinInfoParse)?;
        Ok(ProteinInfo::from_entry(pdb_id, &entry))
    }

    pub fn from_entry(pdb_id: PdbId, entry: &Value) -> ProteinInfo {
        let published = text_at(entry, "/rcsb_accession_info/initial_release_date")
            .and_then(|date| date.split('T').next().map(str::to_owned))
            .filter(|date| !date.is_empty());

        ProteinInfo {
            pdb_id,
            title: or_na(text_at(entry, "/struct/title")),
            method: or_na(text_at(entry, "/exptl/0/method")),
            resolution: number_at(entry, "/rcsb_entry_info/resolution_combined/0"),
            weight: number_at(entry, "/rcsb_entry_info/molecular_weight"),
            keywords: or_na(text_at(entry, "/struct_keywords/pdbx_keywords")),
            published: or_na(published),
            first_author: or_na(text_at(entry, "/rcsb_primary_citation/rcsb_authors/0")),
        }
    }

    pub fn resolution_text(&self) -> String {
        match self.resolution {
            Some(r) => format!("{} Å", r),
            None => NOT_AVAILABLE.to_owned(),
        }
    }

    pub fn weight_text(&self) -> String {
        match self.weight {
            Some(w) => format!("{:.2} kDa", w),
            None => NOT_AVAILABLE.to_owned(),
        }
    }
}

fn text_at(entry: &Value, pointer: &str) -> Option<String> {
    match entry.pointer(pointer)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// RCSB sends numbers, but accept numeric strings as well. Zero means unknown.
fn number_at(entry: &Value, pointer: &str) -> Option<f64> {
    let value = match entry.pointer(pointer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }?;
    if value != 0.0 && value.is_finite() {
        Some(value)
    } else {
        None
    }
}

fn or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_owned())
}
