//! Mock repository implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::poem::PoemsByTag;
use crate::repository::errors::RepositoryResult;
use crate::repository::{PoemReader, PoemsByTagQuery};

mock! {
    pub Repository {}

    #[async_trait]
    impl PoemReader for Repository {
        async fn find_poems_by_tag(&self, query: PoemsByTagQuery) -> RepositoryResult<PoemsByTag>;
    }
}
