use serde::Serialize;

use crate::domain::types::PageNumber;

/// Previous/next controls for a listing whose total size is unknown.
///
/// The backend only reports whether another page follows, so the controls
/// link to direct neighbours instead of a numbered window.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub prev_url: Option<String>,
    pub next_url: Option<String>,
}

fn page_url(prefix_url: &str, page: PageNumber) -> String {
    format!("{prefix_url}?page={page}")
}

impl Pagination {
    pub fn new(prefix_url: &str, page: PageNumber, has_next: bool) -> Self {
        Self {
            page: page.get(),
            prev_url: page.previous().map(|prev| page_url(prefix_url, prev)),
            next_url: has_next.then(|| page_url(prefix_url, page.next())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_has_no_previous_link() {
        let pagination = Pagination::new("/tag/4", PageNumber::FIRST, true);
        assert_eq!(pagination.prev_url, None);
        assert_eq!(pagination.next_url.as_deref(), Some("/tag/4?page=2"));
    }

    #[test]
    fn middle_page_links_both_ways() {
        let page = PageNumber::new(3).unwrap();
        let pagination = Pagination::new("/tag/4", page, true);
        assert_eq!(pagination.page, 3);
        assert_eq!(pagination.prev_url.as_deref(), Some("/tag/4?page=2"));
        assert_eq!(pagination.next_url.as_deref(), Some("/tag/4?page=4"));
    }

    #[test]
    fn last_page_has_no_next_link() {
        let page = PageNumber::new(5).unwrap();
        let pagination = Pagination::new("/tag/4", page, false);
        assert_eq!(pagination.prev_url.as_deref(), Some("/tag/4?page=4"));
        assert_eq!(pagination.next_url, None);
    }
}
