//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Level at which a move is learned
pub type Level = u8;

/// Sentinel lower bound meaning "nothing known yet"
pub const LEVEL_UNBOUNDED_LOW: Level = 0;

/// Sentinel upper bound meaning "nothing known yet"
pub const LEVEL_UNBOUNDED_HIGH: Level = 255;

/// One way a creature learns a move
///
/// Serialized as the `[level, "move-name"]` pair used by the catalog data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(Level, String)", into = "(Level, String)")]
pub struct LearnItem {
    pub level: Level,
    pub move_name: String,
}

impl LearnItem {
    pub fn new(level: Level, move_name: impl Into<String>) -> Self {
        Self {
            level,
            move_name: move_name.into(),
        }
    }
}

impl From<(Level, String)> for LearnItem {
    fn from((level, move_name): (Level, String)) -> Self {
        Self { level, move_name }
    }
}

impl From<LearnItem> for (Level, String) {
    fn from(item: LearnItem) -> Self {
        (item.level, item.move_name)
    }
}

impl fmt::Display for LearnItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.move_name, self.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_learn_item_reads_catalog_pair() {
        let item: LearnItem = serde_json::from_str(r#"[12, "ember"]"#).unwrap();
        assert_eq!(item, LearnItem::new(12, "ember"));
    }

    #[test]
    fn test_learn_item_writes_catalog_pair() {
        let json = serde_json::to_string(&LearnItem::new(1, "tackle")).unwrap();
        assert_eq!(json, r#"[1,"tackle"]"#);
    }
}
