//! Blog post metadata derived from markdown front matter.

use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize, Clone, Debug)]
/// One entry of the generated blog listing.
///
/// Field fallbacks when front matter is absent or incomplete:
/// - `title`: file stem
/// - `date`: file modification date (ISO `YYYY-MM-DD`)
/// - `description`: empty string
/// - `tags`: empty list
pub struct BlogPostMeta {
    pub path: PathBuf,
    pub filename: String,
    pub title: String,
    pub date: String,
    pub description: String,
    pub tags: Vec<String>,
}
