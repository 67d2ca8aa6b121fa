//! Machine-readable schema.org annotations, independent of the visual views.
//! The mapping is total over any store-admitted article: no field access here
//! can fail for a record that passed load validation.

use chrono::NaiveDate;
use serde::Serialize;
use zine_core::Article;

use crate::view::first_line;

const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub job_title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Citation {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub url: String,
}

/// JSON-LD annotation for one article. Articles carrying references are
/// tagged as ScholarlyArticle and describe themselves with the full body;
/// everything else is a plain Article described by its first line.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleStructuredData {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub headline: String,
    pub author: Person,
    pub description: String,
    pub keywords: String,
    pub date_published: NaiveDate,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation: Option<Vec<Citation>>,
}

impl ArticleStructuredData {
    pub fn project(article: &Article) -> Self {
        let scholarly = article.has_references();
        let description = if scholarly {
            article.content.clone()
        } else {
            first_line(&article.content).to_string()
        };
        let citation = article.ext.references.as_ref().map(|references| {
            references
                .iter()
                .map(|r| Citation {
                    kind: "CreativeWork",
                    name: r.title.clone(),
                    url: r.url.clone(),
                })
                .collect()
        });
        Self {
            context: SCHEMA_CONTEXT,
            kind: if scholarly { "ScholarlyArticle" } else { "Article" },
            headline: article.title.clone(),
            author: Person {
                kind: "Person",
                name: article.author.clone(),
                job_title: article.author_role.clone(),
            },
            description,
            keywords: article.tags.join(", "),
            date_published: article.date,
            image: article.image_url.clone(),
            citation,
        }
    }
}

/// Page-level metadata block emitted once per rendered page.
#[derive(Debug, Clone, Serialize)]
pub struct SeoHead {
    pub title: String,
    pub description: String,
    pub keywords: String,
}

impl SeoHead {
    /// The feed page's own metadata, as the frontend ships it.
    pub fn feed() -> Self {
        Self {
            title: "Tech Blog - Latest Articles on Web Development, AI, and Software Architecture"
                .to_string(),
            description: "Discover in-depth articles on web development, AI integration, \
                software architecture, and more. Expert insights from industry leaders."
                .to_string(),
            keywords: "web development, AI, software architecture, React, Node.js, \
                microservices, ChatGPT, technical blog"
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use zine_core::types::{Extensions, Reference};

    fn article(tags: &[&str], references: Option<Vec<Reference>>) -> Article {
        Article {
            id: 1,
            title: "Headline".to_string(),
            content: "First line\nSecond line".to_string(),
            author: "Dr. Emily Rodriguez".to_string(),
            author_role: "AI Research Lead".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 13).unwrap(),
            image_url: "https://picsum.photos/800/402".to_string(),
            category: "AI".to_string(),
            read_time: "10 min read".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            related_links: vec![],
            ext: Extensions {
                references,
                ..Extensions::default()
            },
        }
    }

    fn reference() -> Reference {
        Reference {
            title: "HNSW paper".to_string(),
            author: "Malkov & Yashunin".to_string(),
            url: "https://arxiv.org/abs/1603.09320".to_string(),
        }
    }

    #[test]
    fn standard_article_maps_to_generic_type_with_first_line_description() {
        let data = ArticleStructuredData::project(&article(&["AI", "ChatGPT"], None));
        assert_eq!(data.kind, "Article");
        assert_eq!(data.description, "First line");
        assert!(data.citation.is_none());
    }

    #[test]
    fn references_promote_to_scholarly_with_full_description() {
        let data = ArticleStructuredData::project(&article(&["AI"], Some(vec![reference()])));
        assert_eq!(data.kind, "ScholarlyArticle");
        assert_eq!(data.description, "First line\nSecond line");
        let citation = data.citation.unwrap();
        assert_eq!(citation.len(), 1);
        assert_eq!(citation[0].name, "HNSW paper");
        assert_eq!(citation[0].url, "https://arxiv.org/abs/1603.09320");
    }

    #[test]
    fn keywords_join_and_split_round_trip() {
        let tags = ["AI", "ChatGPT", "Machine Learning"];
        let data = ArticleStructuredData::project(&article(&tags, None));
        assert_eq!(data.keywords, "AI, ChatGPT, Machine Learning");
        let split: Vec<&str> = data.keywords.split(", ").collect();
        assert_eq!(split, tags);
    }

    #[test]
    fn empty_tags_yield_empty_keywords() {
        let data = ArticleStructuredData::project(&article(&[], None));
        assert_eq!(data.keywords, "");
    }

    #[test]
    fn json_ld_uses_schema_org_vocabulary() {
        let json = serde_json::to_value(ArticleStructuredData::project(&article(&["AI"], None)))
            .unwrap();
        assert_eq!(json["@context"], "https://schema.org");
        assert_eq!(json["@type"], "Article");
        assert_eq!(json["author"]["@type"], "Person");
        assert_eq!(json["author"]["jobTitle"], "AI Research Lead");
        assert_eq!(json["datePublished"], "2024-03-13");
    }
}
