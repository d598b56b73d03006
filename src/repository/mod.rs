use async_trait::async_trait;
use serde::Serialize;

use crate::domain::poem::PoemsByTag;
use crate::domain::types::{PageNumber, TagId};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod memo;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod trpc;

pub use memo::MemoizedPoemReader;
pub use trpc::TrpcRepository;

/// Input of the `poem.findByTagId` procedure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoemsByTagQuery {
    pub id: i32,
    pub page: u32,
    pub page_size: u32,
}

impl PoemsByTagQuery {
    pub fn new(id: TagId, page: PageNumber, page_size: u32) -> Self {
        Self {
            id: id.get(),
            page: page.get(),
            page_size,
        }
    }
}

#[async_trait]
pub trait PoemReader: Send + Sync {
    async fn find_poems_by_tag(&self, query: PoemsByTagQuery) -> RepositoryResult<PoemsByTag>;
}
