//! Request-scoped deduplication of backend reads.
//!
//! The page title and the page body are produced separately but must not hit
//! the backend twice for the same input. A [`MemoizedPoemReader`] is created
//! per request and dropped with it.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::domain::poem::PoemsByTag;
use crate::repository::errors::RepositoryResult;
use crate::repository::{PoemReader, PoemsByTagQuery};

pub struct MemoizedPoemReader<'a, R: ?Sized> {
    inner: &'a R,
    entries: Mutex<HashMap<PoemsByTagQuery, PoemsByTag>>,
}

impl<'a, R> MemoizedPoemReader<'a, R>
where
    R: PoemReader + ?Sized,
{
    pub fn new(inner: &'a R) -> Self {
        Self {
            inner,
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn cached(&self, query: &PoemsByTagQuery) -> Option<PoemsByTag> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(query)
            .cloned()
    }

    fn remember(&self, query: PoemsByTagQuery, value: PoemsByTag) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(query, value);
    }
}

#[async_trait]
impl<'a, R> PoemReader for MemoizedPoemReader<'a, R>
where
    R: PoemReader + ?Sized,
{
    async fn find_poems_by_tag(&self, query: PoemsByTagQuery) -> RepositoryResult<PoemsByTag> {
        if let Some(hit) = self.cached(&query) {
            log::debug!("Reusing poems for tag {} page {}", query.id, query.page);
            return Ok(hit);
        }

        // Failures are not remembered.
        let result = self.inner.find_poems_by_tag(query.clone()).await?;
        self.remember(query, result.clone());
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::poem::Poem;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn query(page: u32) -> PoemsByTagQuery {
        PoemsByTagQuery {
            id: 3,
            page,
            page_size: 12,
        }
    }

    fn one_poem() -> PoemsByTag {
        PoemsByTag {
            data: vec![Poem {
                id: 1,
                title: "登鹳雀楼".into(),
                ..Poem::default()
            }],
            tag: None,
            has_next: false,
        }
    }

    #[actix_web::test]
    async fn identical_reads_hit_backend_once() {
        let mut backend = MockRepository::new();
        backend
            .expect_find_poems_by_tag()
            .times(1)
            .returning(|_| Ok(one_poem()));

        let reader = MemoizedPoemReader::new(&backend);
        let first = reader.find_poems_by_tag(query(1)).await.unwrap();
        let second = reader.find_poems_by_tag(query(1)).await.unwrap();
        assert_eq!(first, second);
    }

    #[actix_web::test]
    async fn different_pages_are_fetched_separately() {
        let mut backend = MockRepository::new();
        backend
            .expect_find_poems_by_tag()
            .times(2)
            .returning(|_| Ok(one_poem()));

        let reader = MemoizedPoemReader::new(&backend);
        reader.find_poems_by_tag(query(1)).await.unwrap();
        reader.find_poems_by_tag(query(2)).await.unwrap();
    }

    #[actix_web::test]
    async fn failures_are_retried_on_next_read() {
        let mut backend = MockRepository::new();
        let mut seq = mockall::Sequence::new();
        backend
            .expect_find_poems_by_tag()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(RepositoryError::Network("connection refused".into())));
        backend
            .expect_find_poems_by_tag()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(one_poem()));

        let reader = MemoizedPoemReader::new(&backend);
        assert!(reader.find_poems_by_tag(query(1)).await.is_err());
        assert!(reader.find_poems_by_tag(query(1)).await.is_ok());
    }
}
