//! Tree identifiers: `<species><stage>`, e.g. `mango1`.
//!
//! The stage is kept as a typed integer; the string form only exists at the
//! edges (persistence, texture lookup, labels).
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reasons a string is not a valid tree identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNameError {
    Empty,
    MissingSpecies,
    MissingStage,
    InvalidCharacter(char),
    StageOverflow,
}

impl fmt::Display for TreeNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeNameError::Empty => write!(f, "empty tree name"),
            TreeNameError::MissingSpecies => write!(f, "tree name has no alphabetic species prefix"),
            TreeNameError::MissingStage => write!(f, "tree name has no numeric stage suffix"),
            TreeNameError::InvalidCharacter(c) => write!(f, "unexpected character '{c}' in tree name"),
            TreeNameError::StageOverflow => write!(f, "tree stage does not fit in u32"),
        }
    }
}

impl std::error::Error for TreeNameError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TreeName {
    pub species: String,
    pub stage: u32,
}

impl TreeName {
    pub fn new(species: impl Into<String>, stage: u32) -> Self {
        Self { species: species.into(), stage }
    }

    /// Next growth stage, or `None` when the stage counter would overflow.
    pub fn advanced(&self) -> Option<TreeName> {
        let stage = self.stage.checked_add(1)?;
        Some(TreeName { species: self.species.clone(), stage })
    }

    /// Asset path of the texture for this stage, relative to the asset root.
    pub fn texture_path(&self, textures_dir: &str) -> String {
        let dir = textures_dir.trim_end_matches('/');
        if dir.is_empty() {
            format!("{self}.png")
        } else {
            format!("{dir}/{self}.png")
        }
    }
}

impl fmt::Display for TreeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.species, self.stage)
    }
}

impl FromStr for TreeName {
    type Err = TreeNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(TreeNameError::Empty);
        }
        let split = s
            .char_indices()
            .find(|(_, c)| !c.is_ascii_alphabetic())
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        let (species, digits) = s.split_at(split);
        if species.is_empty() {
            return match s.chars().next() {
                Some(c) if c.is_ascii_digit() => Err(TreeNameError::MissingSpecies),
                Some(c) => Err(TreeNameError::InvalidCharacter(c)),
                None => Err(TreeNameError::Empty),
            };
        }
        if digits.is_empty() {
            return Err(TreeNameError::MissingStage);
        }
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(TreeNameError::InvalidCharacter(bad));
        }
        let stage = digits.parse::<u32>().map_err(|_| TreeNameError::StageOverflow)?;
        Ok(TreeName::new(species, stage))
    }
}

impl TryFrom<String> for TreeName {
    type Error = TreeNameError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TreeName> for String {
    fn from(value: TreeName) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_species_and_stage() {
        let n: TreeName = "mango1".parse().unwrap();
        assert_eq!(n.species, "mango");
        assert_eq!(n.stage, 1);
        assert_eq!(n.to_string(), "mango1");
    }

    #[test]
    fn multi_digit_stage_and_leading_zeros() {
        let n: TreeName = "magyi12".parse().unwrap();
        assert_eq!(n.stage, 12);
        let z: TreeName = "mango007".parse().unwrap();
        assert_eq!(z.stage, 7);
        assert_eq!(z.to_string(), "mango7");
    }

    #[test]
    fn rejects_malformed_names() {
        assert_eq!("".parse::<TreeName>(), Err(TreeNameError::Empty));
        assert_eq!("mango".parse::<TreeName>(), Err(TreeNameError::MissingStage));
        assert_eq!("12".parse::<TreeName>(), Err(TreeNameError::MissingSpecies));
        assert_eq!("man go1".parse::<TreeName>(), Err(TreeNameError::InvalidCharacter(' ')));
        assert_eq!("mango1a".parse::<TreeName>(), Err(TreeNameError::InvalidCharacter('a')));
        assert_eq!("_mango1".parse::<TreeName>(), Err(TreeNameError::InvalidCharacter('_')));
        assert_eq!(
            "mango99999999999".parse::<TreeName>(),
            Err(TreeNameError::StageOverflow)
        );
    }

    #[test]
    fn advance_keeps_species() {
        let n = TreeName::new("magyi", 3);
        let next = n.advanced().unwrap();
        assert_eq!(next.species, "magyi");
        assert_eq!(next.stage, 4);
        assert!(TreeName::new("magyi", u32::MAX).advanced().is_none());
    }

    #[test]
    fn texture_path_joins_dir() {
        let n = TreeName::new("mango", 2);
        assert_eq!(n.texture_path("trees"), "trees/mango2.png");
        assert_eq!(n.texture_path("trees/"), "trees/mango2.png");
        assert_eq!(n.texture_path(""), "mango2.png");
    }

    #[test]
    fn serde_uses_string_form() {
        let names: Vec<TreeName> = ron::from_str(r#"["mango1", "magyi3"]"#).unwrap();
        assert_eq!(names[1], TreeName::new("magyi", 3));
        let out = ron::to_string(&names).unwrap();
        assert_eq!(out, r#"["mango1","magyi3"]"#);
        assert!(ron::from_str::<Vec<TreeName>>(r#"["mango"]"#).is_err());
    }
}
