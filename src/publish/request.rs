use crate::blocks::model::{Block, ExternalUrl};
use crate::course::model::CourseDef;
use crate::foundation::core::{Icon, is_http_url};
use crate::foundation::error::{CourseError, CourseResult};
use crate::publish::sink::PageId;
use crate::text::run::RichText;
use serde::Serialize;

/// Parent of a new page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageParent {
    /// Id of the parent page.
    pub page_id: String,
}

/// Page cover image.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageCover {
    External { external: ExternalUrl },
}

/// `title` property value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleProperty {
    /// Title runs.
    pub title: Vec<RichText>,
}

/// Page properties; only the title is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageProperties {
    /// Page title.
    pub title: TitleProperty,
}

/// Body of the page-creation call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePageRequest {
    /// Where the page is created.
    pub parent: PageParent,
    /// Emoji icon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    /// Cover image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<PageCover>,
    /// Page properties.
    pub properties: PageProperties,
    /// First batch of top-level blocks.
    pub children: Vec<Block>,
}

impl CreatePageRequest {
    /// Request creating the page for `def` with `children` as initial content.
    ///
    /// Fails when the course has no parent page id. A cover that is not an http(s) URL is dropped.
    pub fn from_course(def: &CourseDef, children: Vec<Block>) -> CourseResult<Self> {
        let parent = def
            .parent_id
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .ok_or_else(|| CourseError::validation("parentId is required to create a page"))?;

        let title = match def.title.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => vec![RichText::plain(t)],
            _ => Vec::new(),
        };
        let icon = def
            .icon
            .as_deref()
            .map(str::trim)
            .filter(|i| !i.is_empty())
            .map(Icon::emoji);
        let cover = def.cover.as_deref().and_then(|url| {
            if is_http_url(url) {
                Some(PageCover::External {
                    external: ExternalUrl {
                        url: url.trim().to_owned(),
                    },
                })
            } else {
                tracing::warn!(url, "ignoring page cover that is not an http(s) URL");
                None
            }
        });

        Ok(Self {
            parent: PageParent {
                page_id: parent.to_owned(),
            },
            icon,
            cover,
            properties: PageProperties {
                title: TitleProperty { title },
            },
            children,
        })
    }
}

/// Body of one append call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppendChildrenRequest<'a> {
    /// Page the blocks are appended to.
    pub block_id: &'a PageId,
    /// Blocks in document order.
    pub children: &'a [Block],
}

#[cfg(test)]
#[path = "../../tests/unit/publish/request.rs"]
mod tests;
