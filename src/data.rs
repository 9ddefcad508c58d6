//! Document shapes exported by the CMS and the in-memory [`Catalog`].
//!
//! Field names follow the CMS export (camelCase keys, `slug.current`
//! objects, dereferenced category references). A catalog is built once per
//! session and never mutated afterwards.

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{FolioError, Result};

/// Seed export bundled into the binary, used when no catalog file is given.
const SEED_CATALOG: &str = include_str!("../data/seed_catalog.json");

/// Slugs arrive either as `{ "current": "..." }` or, from projections like
/// `"slug": slug.current`, as a bare string.
#[derive(Deserialize)]
#[serde(untagged)]
enum SlugField {
    Plain(String),
    Object { current: String },
}

fn de_slug<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match SlugField::deserialize(deserializer)? {
        SlugField::Plain(s) => s,
        SlugField::Object { current } => current,
    })
}

fn de_opt_slug<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<SlugField>::deserialize(deserializer)?.map(|s| match s {
        SlugField::Plain(s) => s,
        SlugField::Object { current } => current,
    }))
}

/// Entry lists are arrays in current documents, but older documents store
/// them as an object keyed by entry name (`{ "designSystem": {...} }`).
#[derive(Deserialize)]
#[serde(untagged)]
enum EntryList {
    List(Vec<TitledEntry>),
    Keyed(IndexMap<String, TitledEntry>),
}

fn de_entries<'de, D>(deserializer: D) -> std::result::Result<Vec<TitledEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<EntryList>::deserialize(deserializer)? {
        Some(EntryList::List(entries)) => entries,
        Some(EntryList::Keyed(map)) => map.into_values().collect(),
        None => Vec::new(),
    })
}

/// A portfolio category; `slug` is the filter and colour key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Category {
    pub title: String,
    #[serde(deserialize_with = "de_slug")]
    pub slug: String,
}

/// Opaque image reference. Resolving it to a URL is the CMS's job.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImageRef {
    pub asset: AssetRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AssetRef {
    #[serde(rename = "_ref", default)]
    pub reference: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WorkType {
    pub title: String,
    #[serde(default, deserialize_with = "de_opt_slug")]
    pub slug: Option<String>,
}

/// Title plus optional body text, used by most detail sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TitledEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
}

impl TitledEntry {
    fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.description.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreDetails {
    #[serde(default)]
    pub producer_name: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub project_title: Option<String>,
    #[serde(default)]
    pub project_category: Option<String>,
    #[serde(default)]
    pub project_challenge: Option<String>,
    #[serde(default)]
    pub project_tech_stack: Vec<String>,
}

impl CoreDetails {
    /// True when any field carries a non-empty value.
    pub fn has_data(&self) -> bool {
        [
            &self.producer_name,
            &self.client_name,
            &self.project_title,
            &self.project_category,
            &self.project_challenge,
        ]
        .iter()
        .any(|v| v.as_deref().is_some_and(|s| !s.is_empty()))
            || !self.project_tech_stack.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BrandDevelopment {
    #[serde(default)]
    pub purpose: Option<TitledEntry>,
    #[serde(default)]
    pub audience: Option<TitledEntry>,
    #[serde(default)]
    pub archetypes: Vec<TitledEntry>,
    #[serde(default)]
    pub associations: Vec<TitledEntry>,
    #[serde(default)]
    pub mood: Vec<TitledEntry>,
}

impl BrandDevelopment {
    /// Purpose or audience only count when both title and description are set.
    pub fn has_data(&self) -> bool {
        self.purpose.as_ref().is_some_and(TitledEntry::is_complete)
            || self.audience.as_ref().is_some_and(TitledEntry::is_complete)
            || !self.archetypes.is_empty()
            || !self.mood.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub micro_features: Vec<TitledEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct WebDevelopment {
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// One portfolio project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    /// The slug; stable for the lifetime of the catalog.
    #[serde(rename = "slug", deserialize_with = "de_slug")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub cover_image: Option<ImageRef>,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub work_type: Option<WorkType>,
    #[serde(default)]
    pub core: Option<CoreDetails>,
    #[serde(default)]
    pub brand_development: Option<BrandDevelopment>,
    #[serde(default, deserialize_with = "de_entries")]
    pub web_design: Vec<TitledEntry>,
    #[serde(default)]
    pub web_development: Option<WebDevelopment>,
    #[serde(default, deserialize_with = "de_entries")]
    pub media_content: Vec<TitledEntry>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub completion_date: Option<NaiveDate>,
    #[serde(default)]
    pub project_url: Option<String>,
}

impl WorkItem {
    pub fn in_category(&self, slug: &str) -> bool {
        self.categories.iter().any(|c| c.slug == slug)
    }

    /// Slug of the first category, used to colour the detail page.
    pub fn primary_category(&self) -> Option<&str> {
        self.categories.first().map(|c| c.slug.as_str())
    }

    pub fn work_type_label(&self) -> Option<&str> {
        self.work_type.as_ref().map(|t| t.title.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CategoryTitle {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub title: String,
    #[serde(deserialize_with = "de_slug")]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "pubDate")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub categories: Vec<CategoryTitle>,
    /// Post body as plain text.
    #[serde(default)]
    pub content: Option<String>,
}

/// Everything fetched for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Catalog {
    #[serde(default)]
    pub works: Vec<WorkItem>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub posts: Vec<BlogPost>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a catalog export from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| FolioError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| FolioError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The bundled seed catalog.
    pub fn seed() -> Self {
        // The seed is checked by `seed_catalog_parses`; an empty catalog is
        // still a valid state if it ever stops parsing.
        Self::from_json(SEED_CATALOG).unwrap_or_default()
    }

    pub fn work(&self, slug: &str) -> Option<&WorkItem> {
        self.works.iter().find(|w| w.id == slug)
    }

    pub fn category(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn seed_catalog_parses() {
        let catalog = Catalog::from_json(SEED_CATALOG).expect("seed catalog should parse");
        assert!(!catalog.works.is_empty());
        assert!(!catalog.categories.is_empty());
        assert!(!catalog.posts.is_empty());
    }

    #[test]
    fn slug_accepts_object_and_plain_forms() {
        let json = r#"{
            "works": [
                { "title": "A", "slug": { "current": "a" } },
                { "title": "B", "slug": "b" }
            ]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.works[0].id, "a");
        assert_eq!(catalog.works[1].id, "b");
    }

    #[test]
    fn work_item_reads_cms_field_names() {
        let json = r#"{
            "title": "Healthcare Portal",
            "slug": { "current": "healthcare-portal" },
            "order": 4,
            "categories": [{ "title": "Web Design", "slug": { "current": "web-design" } }],
            "coverImage": { "asset": { "_ref": "image-abc-800x600-png" } },
            "workType": { "title": "Client" },
            "completionDate": "2024-03-01"
        }"#;
        let work: WorkItem = serde_json::from_str(json).unwrap();
        assert_eq!(work.order, Some(4));
        assert!(work.in_category("web-design"));
        assert_eq!(work.primary_category(), Some("web-design"));
        assert_eq!(work.work_type_label(), Some("Client"));
        assert_eq!(
            work.cover_image.map(|i| i.asset.reference),
            Some("image-abc-800x600-png".to_string())
        );
        assert_eq!(work.completion_date, NaiveDate::from_ymd_opt(2024, 3, 1));
    }

    #[test]
    fn keyed_entry_lists_are_flattened() {
        let json = r#"{
            "title": "E-commerce",
            "slug": "ecommerce",
            "webDesign": {
                "zeta": { "title": "First", "description": "Tokens" },
                "alpha": { "title": "Second" }
            }
        }"#;
        let work: WorkItem = serde_json::from_str(json).unwrap();
        let titles: Vec<_> = work.web_design.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["First", "Second"]);
    }

    #[test]
    fn brand_purpose_needs_title_and_description() {
        let mut brand = BrandDevelopment {
            purpose: Some(TitledEntry {
                title: "Purpose".into(),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(!brand.has_data());

        brand.mood.push(TitledEntry::default());
        assert!(brand.has_data());
    }

    #[test]
    fn core_has_data_ignores_empty_strings() {
        let core = CoreDetails {
            client_name: Some(String::new()),
            ..Default::default()
        };
        assert!(!core.has_data());

        let core = CoreDetails {
            project_tech_stack: vec!["Rust".into()],
            ..Default::default()
        };
        assert!(core.has_data());
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "categories": [{{ "title": "Media", "slug": {{ "current": "media" }} }}] }}"#
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.category("media").map(|c| c.title.as_str()), Some("Media"));
        assert!(catalog.works.is_empty());
    }

    #[test]
    fn load_reports_path_on_parse_failure() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = Catalog::load(file.path()).unwrap_err();
        assert!(matches!(err, FolioError::Parse { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Catalog::load("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, FolioError::Read { .. }));
    }

    #[test]
    fn post_accepts_pub_date_alias() {
        let json = r#"{ "title": "Hello", "slug": "hello", "pubDate": "2024-05-01T10:00:00Z" }"#;
        let post: BlogPost = serde_json::from_str(json).unwrap();
        assert!(post.published_at.is_some());
        assert!(post.id.is_empty());
        assert!(post.updated_date.is_none());
        assert!(post.content.is_none());
    }

    #[test]
    fn post_reads_updated_date_and_content() {
        let json = r#"{
            "title": "Hello",
            "slug": { "current": "hello" },
            "publishedAt": "2024-05-01T10:00:00Z",
            "updatedDate": "2024-06-02T08:30:00Z",
            "content": "Body text"
        }"#;
        let post: BlogPost = serde_json::from_str(json).unwrap();
        assert_eq!(
            post.updated_date.map(|d| d.date_naive()),
            NaiveDate::from_ymd_opt(2024, 6, 2)
        );
        assert_eq!(post.content.as_deref(), Some("Body text"));
    }

    #[test]
    fn seed_keyed_design_entries_keep_authored_order() {
        let catalog = Catalog::seed();
        let work = catalog.work("ecommerce-platform-redesign").unwrap();
        let titles: Vec<_> = work.web_design.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["Modern E-commerce Design System", "Three-Step Checkout"]);
    }
}
