use serde::{Deserialize, Serialize};

use crate::domain::tag::Tag;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Author {
    pub id: i32,
    pub name: String,
    pub dynasty: Option<String>,
}

/// Display record for a single poem as returned by the backend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Poem {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author: Option<Author>,
}

impl Poem {
    /// Non-empty trimmed lines of the poem body.
    pub fn excerpt_lines(&self) -> Vec<String> {
        self.content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// One page of poems grouped under a tag.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PoemsByTag {
    #[serde(default)]
    pub data: Vec<Poem>,
    #[serde(default)]
    pub tag: Option<Tag>,
    #[serde(default)]
    pub has_next: bool,
}
