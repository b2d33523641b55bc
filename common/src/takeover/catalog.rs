//! # Signature Catalog
//!
//! Maps a service hint (a substring expected inside a CNAME target, such as
//! `herokuapp.com`) to the literal error text that service serves for an
//! unclaimed resource.
//!
//! The catalog is loaded from a flat JSON object. Entry order follows the
//! order of the keys in the source file, and [`Catalog::find_match`] returns
//! the first entry whose hint occurs in the target. There is no ranking by
//! specificity.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::CatalogError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub service_hint: String,
    pub error_text: String,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    signatures: Vec<Signature>,
}

impl Catalog {
    /// Reads and parses a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path: &Path = path.as_ref();
        let raw: String = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Parses a catalog from JSON text. The top level must be an object whose
    /// values are all strings.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let Value::Object(map) = serde_json::from_str::<Value>(raw)? else {
            return Err(CatalogError::NotAnObject);
        };

        let signatures = map
            .into_iter()
            .map(|(hint, value)| match value {
                Value::String(error_text) => Ok((hint, error_text)),
                _ => Err(CatalogError::NonStringValue { hint }),
            })
            .collect::<Result<Vec<(String, String)>, CatalogError>>()?;

        Self::from_pairs(signatures)
    }

    /// Builds a catalog from `(service_hint, error_text)` pairs, keeping their order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let signatures: Vec<Signature> = pairs
            .into_iter()
            .map(|(hint, error_text)| Signature {
                service_hint: hint.into(),
                error_text: error_text.into(),
            })
            .collect();

        if signatures.iter().any(|sig| sig.service_hint.is_empty()) {
            return Err(CatalogError::EmptyHint);
        }

        Ok(Self { signatures })
    }

    /// Returns the first signature whose hint is contained in `cname_target`.
    ///
    /// Matching is case-sensitive substring containment.
    pub fn find_match(&self, cname_target: &str) -> Option<&Signature> {
        self.signatures
            .iter()
            .find(|sig| cname_target.contains(sig.service_hint.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Signature> {
        self.signatures.iter()
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
