use serde::{Deserialize, Serialize};

/// Territory is the color tag held by every grid cell.
/// The playfield is always partitioned between Day and Night.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Territory {
    Day,
    Night,
}

impl Territory {
    /// The territory a ball of this color treats as capturable
    pub const fn opposite(self) -> Self {
        match self {
            Territory::Day => Territory::Night,
            Territory::Night => Territory::Day,
        }
    }

    /// All territories in score display order
    pub const fn all() -> [Territory; 2] {
        [Territory::Day, Territory::Night]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Territory::Day => "day",
            Territory::Night => "night",
        }
    }
}
