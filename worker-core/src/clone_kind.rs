use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Flavor of a split clone. Closed set: dispatch sites match on it without a
/// catch-all arm.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CloneKind {
    /// Same tables, rows redistributed across a different set of shards by key range.
    HorizontalResharding,
    /// A subset of tables moved to another keyspace, row placement unchanged.
    VerticalSplit,
}

impl CloneKind {
    pub const ALL: [CloneKind; 2] = [CloneKind::HorizontalResharding, CloneKind::VerticalSplit];

    pub fn label(&self) -> &'static str {
        match self {
            CloneKind::HorizontalResharding => "horizontal-resharding",
            CloneKind::VerticalSplit => "vertical-split",
        }
    }
}

impl Display for CloneKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CloneKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CloneKind::ALL
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| Error::UnknownCloneKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::str::FromStr;

    use crate::clone_kind::CloneKind;
    use crate::error::Error;

    #[test]
    fn test_equality() {
        let k = CloneKind::HorizontalResharding;
        assert_eq!(k, CloneKind::HorizontalResharding);
        assert_ne!(k, CloneKind::VerticalSplit);
        assert_eq!(CloneKind::VerticalSplit, CloneKind::VerticalSplit);
    }

    #[test]
    fn test_label() {
        assert_eq!(CloneKind::HorizontalResharding.label(), "horizontal-resharding");
        assert_eq!(CloneKind::VerticalSplit.label(), "vertical-split");
        assert_eq!(CloneKind::VerticalSplit.to_string(), "vertical-split");
    }

    #[test]
    fn test_all_variants() {
        assert_eq!(CloneKind::ALL.len(), 2);
        let distinct = CloneKind::ALL.iter().collect::<HashSet<_>>();
        assert_eq!(distinct.len(), 2);
        for kind in CloneKind::ALL {
            let expected = match kind {
                CloneKind::HorizontalResharding => "horizontal-resharding",
                CloneKind::VerticalSplit => "vertical-split",
            };
            assert_eq!(kind.label(), expected);
        }
    }

    #[test]
    fn test_parse() -> anyhow::Result<()> {
        for kind in CloneKind::ALL {
            assert_eq!(CloneKind::from_str(kind.label())?, kind);
        }
        assert_eq!(
            "horizontal_resharding".parse::<CloneKind>(),
            Err(Error::UnknownCloneKind("horizontal_resharding".to_string())),
        );
        assert!("".parse::<CloneKind>().is_err());
        assert!("Vertical-Split".parse::<CloneKind>().is_err());
        Ok(())
    }

    #[test]
    fn test_serde_uses_label() -> anyhow::Result<()> {
        for kind in CloneKind::ALL {
            let json = serde_json::to_string(&kind)?;
            assert_eq!(json, format!("\"{}\"", kind.label()));
            assert_eq!(serde_json::from_str::<CloneKind>(&json)?, kind);
        }
        assert!(serde_json::from_str::<CloneKind>("\"unknown\"").is_err());
        Ok(())
    }
}
