//! Shared fixtures for route tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use actix_web::web;
use async_trait::async_trait;
use poetry_tags::domain::poem::{Author, Poem, PoemsByTag};
use poetry_tags::domain::tag::Tag;
use poetry_tags::repository::errors::{RepositoryError, RepositoryResult};
use poetry_tags::repository::{PoemReader, PoemsByTagQuery};
use tera::Tera;

/// In-memory backend answering from a fixed table of `(tag, page)` entries.
#[derive(Default)]
pub struct TestPoemReader {
    pages: HashMap<(i32, u32), PoemsByTag>,
    unavailable: bool,
    calls: AtomicUsize,
}

impl TestPoemReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose every call fails at the transport level.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn with_page(mut self, tag_id: i32, page: u32, poems: PoemsByTag) -> Self {
        self.pages.insert((tag_id, page), poems);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PoemReader for TestPoemReader {
    async fn find_poems_by_tag(&self, query: PoemsByTagQuery) -> RepositoryResult<PoemsByTag> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable {
            return Err(RepositoryError::Network("connection refused".into()));
        }
        Ok(self
            .pages
            .get(&(query.id, query.page))
            .cloned()
            .unwrap_or_default())
    }
}

pub fn reader_data(reader: Arc<TestPoemReader>) -> web::Data<dyn PoemReader> {
    let reader: Arc<dyn PoemReader> = reader;
    web::Data::from(reader)
}

pub fn templates() -> web::Data<Tera> {
    let tera = Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*"))
        .expect("templates should parse");
    web::Data::new(tera)
}

pub fn homesick_tag() -> Tag {
    Tag {
        id: 7,
        name: Some("思乡".into()),
        tag_type: Some("题材".into()),
        introduce: Some("游子思念故乡之作".into()),
    }
}

pub fn poems(ids: std::ops::RangeInclusive<i32>) -> Vec<Poem> {
    ids.map(|id| Poem {
        id,
        title: format!("Poem Title #{id}"),
        content: format!("Line one of #{id}\nLine two of #{id}"),
        author: Some(Author {
            id: 1,
            name: "杜甫".into(),
            dynasty: Some("唐".into()),
        }),
    })
    .collect()
}
