use serde::{Deserialize, Serialize};

/// Label shown in place of a missing tag category.
pub const DEFAULT_TAG_CATEGORY: &str = "其他";
/// Label shown in place of a missing tag name.
pub const UNKNOWN_TAG_NAME: &str = "未知";

/// Categorical label under which poems are grouped.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Tag {
    pub id: i32,
    pub name: Option<String>,
    /// Category of the tag, e.g. a theme or a season.
    #[serde(rename = "type")]
    pub tag_type: Option<String>,
    pub introduce: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

impl Tag {
    /// Tag category, or [`DEFAULT_TAG_CATEGORY`] when the tag has none.
    pub fn category_label(&self) -> &str {
        non_empty(self.tag_type.as_deref()).unwrap_or(DEFAULT_TAG_CATEGORY)
    }

    /// Tag name, or [`UNKNOWN_TAG_NAME`] when the tag has none.
    pub fn display_name(&self) -> &str {
        non_empty(self.name.as_deref()).unwrap_or(UNKNOWN_TAG_NAME)
    }

    /// Descriptive text, when the backend provides a non-blank one.
    pub fn introduction(&self) -> Option<&str> {
        non_empty(self.introduce.as_deref())
    }
}
