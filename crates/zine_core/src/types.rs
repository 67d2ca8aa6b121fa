use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One immutable blog post. Field names serialize in camelCase to match the
/// JSON contract consumed by the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: u64,
    pub title: String,
    /// Newline-delimited paragraphs. The first line doubles as the card
    /// preview text.
    pub content: String,
    pub author: String,
    pub author_role: String,
    pub date: NaiveDate,
    pub image_url: String,
    pub category: String,
    /// Display string ("8 min read"), not computed from content length.
    pub read_time: String,
    pub tags: Vec<String>,
    pub related_links: Vec<RelatedLink>,
    #[serde(flatten)]
    pub ext: Extensions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedLink {
    pub title: String,
    pub url: String,
}

/// Fields carried only by some articles. Kept as an explicit extension set
/// rather than duck-typed presence checks; absent fields stay off the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extensions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_examples: Option<Vec<CodeExample>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<Reference>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub academic_citations: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_requirements: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benchmarks: Option<Vec<Benchmark>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_concepts: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeExample {
    pub language: String,
    pub code: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub title: String,
    pub author: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benchmark {
    pub metric: String,
    pub value: String,
    pub conditions: String,
}

impl Article {
    pub fn has_references(&self) -> bool {
        self.ext.references.is_some()
    }
}
