use crate::domain::poem::{Poem, PoemsByTag};
use crate::domain::tag::{DEFAULT_TAG_CATEGORY, Tag};
use crate::domain::types::{PageNumber, TagId};
use crate::dto::tag::{Breadcrumb, Link, PageMetadata, PoemSection, TagPageData, TagPageQuery};
use crate::pagination::Pagination;
use crate::repository::{PoemReader, PoemsByTagQuery};
use crate::services::{ServiceError, ServiceResult};

/// Number of poems requested per tag page.
pub const TAG_POEMS_PER_PAGE: u32 = 12;
/// Listing of all tags, target of the breadcrumb category link.
pub const TAG_INDEX_URL: &str = "/tag";

/// Validated tag page input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagPageParams {
    pub id: TagId,
    pub page: PageNumber,
}

pub fn tag_url(id: impl std::fmt::Display) -> String {
    format!("{TAG_INDEX_URL}/{id}")
}

/// Parses the raw route input. A missing or malformed number, or a page
/// below one, is reported as [`ServiceError::NotFound`].
pub fn parse_tag_page_params(query: &TagPageQuery) -> ServiceResult<TagPageParams> {
    let id = query.id.parse::<TagId>()?;
    let page = query.page.as_deref().unwrap_or_default().parse::<PageNumber>()?;
    Ok(TagPageParams { id, page })
}

async fn fetch_tag_poems<R>(reader: &R, params: &TagPageParams) -> ServiceResult<PoemsByTag>
where
    R: PoemReader + ?Sized,
{
    let query = PoemsByTagQuery::new(params.id, params.page, TAG_POEMS_PER_PAGE);
    reader
        .find_poems_by_tag(query)
        .await
        .map_err(ServiceError::from)
}

/// Title of a tag page, e.g. `关于题材“思乡”的诗词 第2页`.
pub fn tag_page_title(tag: Option<&Tag>, page: PageNumber) -> String {
    let category = tag.map_or(DEFAULT_TAG_CATEGORY, Tag::category_label);
    let name = tag.and_then(|t| t.name.as_deref()).unwrap_or_default();
    format!("关于{category}“{name}”的诗词 第{page}页")
}

/// Builds the document metadata for a tag page.
pub async fn load_tag_metadata<R>(reader: &R, query: &TagPageQuery) -> ServiceResult<PageMetadata>
where
    R: PoemReader + ?Sized,
{
    let params = parse_tag_page_params(query)?;
    let poems = fetch_tag_poems(reader, &params).await?;

    Ok(PageMetadata {
        title: tag_page_title(poems.tag.as_ref(), params.page),
    })
}

fn breadcrumb(tag: Option<&Tag>) -> Breadcrumb {
    Breadcrumb {
        category: Link {
            label: tag
                .map_or(DEFAULT_TAG_CATEGORY, Tag::category_label)
                .to_string(),
            url: TAG_INDEX_URL.to_string(),
        },
        tag: tag.map(|tag| Link {
            label: tag.display_name().to_string(),
            url: format!("{}?page={}", tag_url(tag.id), PageNumber::FIRST),
        }),
    }
}

fn poem_section(poem: Poem) -> PoemSection {
    let lines = poem.excerpt_lines();
    let (author, dynasty) = match poem.author {
        Some(author) => (Some(author.name), author.dynasty),
        None => (None, None),
    };

    PoemSection {
        id: poem.id,
        url: format!("/poem/{}", poem.id),
        title: poem.title,
        author: author.filter(|name| !name.is_empty()),
        dynasty: dynasty.filter(|d| !d.is_empty()),
        lines,
    }
}

/// Loads everything the tag page body shows. An empty listing is
/// [`ServiceError::NotFound`].
pub async fn load_tag_page<R>(reader: &R, query: &TagPageQuery) -> ServiceResult<TagPageData>
where
    R: PoemReader + ?Sized,
{
    let params = parse_tag_page_params(query)?;
    let PoemsByTag {
        data,
        tag,
        has_next,
    } = fetch_tag_poems(reader, &params).await?;

    if data.is_empty() {
        return Err(ServiceError::NotFound);
    }

    Ok(TagPageData {
        breadcrumb: breadcrumb(tag.as_ref()),
        heading: tag
            .as_ref()
            .and_then(|t| t.name.clone())
            .unwrap_or_default(),
        introduce: tag
            .as_ref()
            .and_then(Tag::introduction)
            .map(str::to_string),
        poems: data.into_iter().map(poem_section).collect(),
        pagination: Pagination::new(&tag_url(params.id), params.page, has_next),
    })
}
