//! Sentence-structure descriptors
//!
//! A descriptor such as `"dt,adj-1,noun"` declares the grammatical shape a
//! caller expects: comma-separated role names, each optionally suffixed with
//! a `-<digits>` repeat index. Role names must come from a fixed vocabulary;
//! anything else is a configuration error surfaced before any token is read.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Abstract grammatical roles a descriptor may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PosRole {
    Adjective,
    Article,
    Noun,
    Adverb,
    Pronoun,
    Verb,
}

impl PosRole {
    /// Parse a bare role name (repeat suffix already stripped).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "adj" => Some(PosRole::Adjective),
            "dt" => Some(PosRole::Article),
            "noun" => Some(PosRole::Noun),
            "adv" => Some(PosRole::Adverb),
            "pn" => Some(PosRole::Pronoun),
            "vb" => Some(PosRole::Verb),
            _ => None,
        }
    }
}

/// A parsed, validated structure descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureSpec {
    /// Declared roles, in sentence order
    pub roles: Vec<PosRole>,
}

impl StructureSpec {
    /// Parse and validate a descriptor string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRole`] on the first role name outside the
    /// recognized vocabulary.
    pub fn parse(descriptor: &str) -> Result<Self> {
        let mut roles = Vec::new();
        for part in descriptor.split(',') {
            let name = part.trim();
            let base = strip_repeat_suffix(name);
            match PosRole::from_name(base) {
                Some(role) => roles.push(role),
                None => return Err(Error::UnknownRole(name.to_string())),
            }
        }
        Ok(Self { roles })
    }
}

/// Strip a trailing `-<digits>` repeat index: `"adj-1"` becomes `"adj"`.
fn strip_repeat_suffix(name: &str) -> &str {
    match name.rsplit_once('-') {
        Some((base, idx)) if !idx.is_empty() && idx.bytes().all(|b| b.is_ascii_digit()) => base,
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_default_descriptor() {
        let spec = StructureSpec::parse("dt,adj-1,noun").unwrap();
        assert_eq!(
            spec.roles,
            vec![PosRole::Article, PosRole::Adjective, PosRole::Noun]
        );
    }

    #[test]
    fn parses_all_roles() {
        let spec = StructureSpec::parse("adj,dt,noun,adv,pn,vb").unwrap();
        assert_eq!(spec.roles.len(), 6);
    }

    #[test]
    fn rejects_unknown_role() {
        let err = StructureSpec::parse("dt,zz,noun").unwrap_err();
        assert!(matches!(err, Error::UnknownRole(ref name) if name == "zz"));
    }

    #[test]
    fn rejects_empty_descriptor() {
        assert!(StructureSpec::parse("").is_err());
    }

    #[test]
    fn repeat_suffix_is_numeric_only() {
        // "adj-x" is not a repeat index, so the whole name is unknown
        assert!(StructureSpec::parse("adj-x").is_err());
        assert!(StructureSpec::parse("adj-12").is_ok());
    }
}
