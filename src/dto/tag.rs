//! DTOs shaped for the tag page template.

use serde::Serialize;

use crate::pagination::Pagination;

/// Raw route input accepted by the tag page services.
#[derive(Debug, Default, Clone)]
pub struct TagPageQuery {
    /// Tag identifier taken from the path.
    pub id: String,
    /// Page number taken from the `page` query parameter.
    pub page: Option<String>,
}

/// Document-level metadata rendered into `<head>`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// Tag category followed by the tag itself, when known.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Breadcrumb {
    pub category: Link,
    pub tag: Option<Link>,
}

/// A rendered display unit for one poem record.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PoemSection {
    pub id: i32,
    pub title: String,
    pub url: String,
    pub author: Option<String>,
    pub dynasty: Option<String>,
    pub lines: Vec<String>,
}

/// Data required to render the tag page template.
#[derive(Debug, Clone, Serialize)]
pub struct TagPageData {
    pub breadcrumb: Breadcrumb,
    /// Tag name shown as the page heading; empty when the tag is unknown.
    pub heading: String,
    pub introduce: Option<String>,
    pub poems: Vec<PoemSection>,
    pub pagination: Pagination,
}
