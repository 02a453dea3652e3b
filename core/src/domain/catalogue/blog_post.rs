//! Blog post entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::CatalogueValidationError;
use super::validation::{ensure_non_empty, ensure_positive, validate_id};

/// Input payload for [`BlogPost::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct BlogPostDraft {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub author: String,
    pub date: NaiveDate,
    pub image: String,
    pub read_minutes: u32,
}

/// A travel story listed on the blog pages.
///
/// Unlike destinations, blog categories are free editorial labels
/// ("Trekking", "Food", ...) rather than a closed set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub author: String,
    pub date: NaiveDate,
    pub image: String,
    pub read_minutes: u32,
}

impl BlogPost {
    /// Validate and construct a blog post.
    pub fn new(draft: BlogPostDraft) -> Result<Self, CatalogueValidationError> {
        let id = validate_id(draft.id, "blog_post.id")?;
        ensure_non_empty(&draft.title, "blog_post.title")?;
        ensure_non_empty(&draft.excerpt, "blog_post.excerpt")?;
        ensure_non_empty(&draft.content, "blog_post.content")?;
        ensure_non_empty(&draft.category, "blog_post.category")?;
        ensure_non_empty(&draft.author, "blog_post.author")?;
        ensure_positive(draft.read_minutes, "blog_post.read_minutes")?;

        Ok(Self {
            id,
            title: draft.title,
            excerpt: draft.excerpt,
            content: draft.content,
            category: draft.category,
            tags: draft.tags,
            author: draft.author,
            date: draft.date,
            image: draft.image,
            read_minutes: draft.read_minutes,
        })
    }
}
