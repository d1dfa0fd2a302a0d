//! Feature-set selection.

use std::fmt;

use serde::Serialize;

/// Which SDL2 libraries the generated project links against.
///
/// `Base` wires up SDL2 and SDL2_image; `Extended` adds SDL2_ttf and
/// SDL2_mixer on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureSet {
    Base,
    Extended,
}

impl FeatureSet {
    /// Select the feature set from the `--full` CLI flag.
    pub fn from_full_flag(full: bool) -> Self {
        if full {
            FeatureSet::Extended
        } else {
            FeatureSet::Base
        }
    }

    /// Whether the extended libraries (ttf, mixer) are enabled.
    pub fn is_extended(self) -> bool {
        matches!(self, FeatureSet::Extended)
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureSet::Base => write!(f, "base"),
            FeatureSet::Extended => write!(f, "extended"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_full_flag() {
        assert_eq!(FeatureSet::from_full_flag(false), FeatureSet::Base);
        assert_eq!(FeatureSet::from_full_flag(true), FeatureSet::Extended);
    }

    #[test]
    fn test_is_extended() {
        assert!(!FeatureSet::Base.is_extended());
        assert!(FeatureSet::Extended.is_extended());
    }
}
