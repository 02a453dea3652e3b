//! Search and filtering over the content catalogue.
//!
//! Matching is a case-insensitive substring test across a record's
//! designated searchable fields. The engine is pure: results borrow from the
//! catalogue, preserve its load order, and carry no ranking. Query trimming
//! is deliberately left to callers; a whitespace-only query is matched
//! literally.

use super::catalogue::{BlogPost, Catalogue, Destination, TourGuide, TourPlan};

/// A record that exposes searchable text fields.
pub trait Searchable {
    /// The fields substring matching runs over, in display order.
    fn search_haystack(&self) -> Vec<&str>;
}

/// A record filed under a category key.
pub trait Categorised {
    /// Stable category key compared against a [`CategoryFilter`].
    fn category_key(&self) -> &str;
}

/// Category restriction applied alongside a text query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No restriction; the listing pages' "all" chip.
    All,
    /// Records whose category key equals this value exactly. An unknown
    /// value matches nothing; there is no fuzzy fallback.
    Named(String),
}

impl CategoryFilter {
    /// Builds a filter from a raw chip value, folding the "all" sentinel
    /// case-insensitively (the listing pages use both "all" and "All").
    pub fn from_raw(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Named(raw.to_owned())
        }
    }

    /// Whether a record with `key` passes this filter.
    pub fn matches(&self, key: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(named) => named == key,
        }
    }
}

fn matches_query<R: Searchable>(record: &R, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record
        .search_haystack()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Returns the records whose searchable fields contain `query`,
/// case-insensitively, in their original order.
///
/// An empty query matches every record.
pub fn search<'a, R: Searchable>(records: &'a [R], query: &str) -> Vec<&'a R> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches_query(*record, &needle))
        .collect()
}

/// Like [`search`], additionally requiring the record's category key to pass
/// `filter`.
pub fn search_in_category<'a, R>(
    records: &'a [R],
    query: &str,
    filter: &CategoryFilter,
) -> Vec<&'a R>
where
    R: Searchable + Categorised,
{
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| filter.matches(record.category_key()))
        .filter(|record| matches_query(*record, &needle))
        .collect()
}

/// Result of a site-wide search: the two collections the search page spans.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteSearchResults<'a> {
    /// Matching destinations in catalogue order.
    pub destinations: Vec<&'a Destination>,
    /// Matching blog posts in catalogue order.
    pub posts: Vec<&'a BlogPost>,
}

impl SiteSearchResults<'_> {
    /// Total number of hits across both collections.
    pub fn total(&self) -> usize {
        self.destinations.len() + self.posts.len()
    }

    /// Whether the query matched nothing.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Runs the site-wide search across destinations and blog posts.
pub fn search_site<'a>(catalogue: &'a Catalogue, query: &str) -> SiteSearchResults<'a> {
    SiteSearchResults {
        destinations: search(catalogue.destinations(), query),
        posts: search(catalogue.blog_posts(), query),
    }
}

impl Searchable for Destination {
    fn search_haystack(&self) -> Vec<&str> {
        let mut fields = vec![
            self.name.as_str(),
            self.short_description.as_str(),
            self.full_description.as_str(),
            self.category.as_str(),
        ];
        fields.extend(self.things_to_do.iter().map(String::as_str));
        fields.extend(self.local_foods.iter().map(String::as_str));
        fields
    }
}

impl Categorised for Destination {
    fn category_key(&self) -> &str {
        self.category.as_str()
    }
}

impl Searchable for BlogPost {
    fn search_haystack(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.excerpt.as_str(),
            self.content.as_str(),
            self.category.as_str(),
        ];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

impl Categorised for BlogPost {
    fn category_key(&self) -> &str {
        self.category.as_str()
    }
}

impl Searchable for TourGuide {
    fn search_haystack(&self) -> Vec<&str> {
        let mut fields = vec![
            self.name.as_str(),
            self.specialty.as_str(),
            self.description.as_str(),
        ];
        fields.extend(self.languages.iter().map(String::as_str));
        fields
    }
}

impl Searchable for TourPlan {
    fn search_haystack(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.description.as_str(),
            self.plan_type.as_str(),
        ];
        fields.extend(self.highlights.iter().map(String::as_str));
        fields
    }
}

impl Categorised for TourPlan {
    fn category_key(&self) -> &str {
        self.plan_type.as_str()
    }
}
