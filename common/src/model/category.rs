use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Exam track used to group resources and quizzes.
///
/// Records store the category as plain text, so the database may contain
/// labels outside this set. The enum only drives the selectors in the UI
/// and the validation of admin forms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "Group 1")]
    Group1,
    #[serde(rename = "Group 2")]
    Group2,
    #[serde(rename = "Group 3")]
    Group3,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [Category::Group1, Category::Group2, Category::Group3];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Group1 => "Group 1",
            Category::Group2 => "Group 2",
            Category::Group3 => "Group 3",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category '{}'", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
