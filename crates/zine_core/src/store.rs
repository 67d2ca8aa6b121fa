use std::collections::HashSet;

use url::Url;

use crate::types::Article;
use crate::{Error, Result};

/// Read-only view over the article collection. Built once at process start
/// and never mutated afterwards, so it can be shared across request handlers
/// without locking.
///
/// Malformed articles are rejected here, at load time, rather than skipped
/// during derivation: a record that violates an invariant keeps the process
/// from starting instead of silently disappearing from some views.
#[derive(Debug, Clone)]
pub struct ArticleStore {
    articles: Vec<Article>,
}

impl ArticleStore {
    pub fn new(articles: Vec<Article>) -> Result<Self> {
        let mut seen_ids = HashSet::new();
        for article in &articles {
            validate(article)?;
            if !seen_ids.insert(article.id) {
                return Err(Error::DuplicateId(article.id));
            }
        }
        Ok(Self { articles })
    }

    /// The full collection, in load order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Distinct `category` values, in order of first appearance. Exact
    /// string equality, no case folding or trimming. Recomputed per call.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for article in &self.articles {
            if !categories.iter().any(|c| c == &article.category) {
                categories.push(article.category.clone());
            }
        }
        categories
    }

    /// Distinct tag values from flattening every article's tags, article
    /// order then tag order, each value kept the first time it is seen.
    pub fn tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        for article in &self.articles {
            for tag in &article.tags {
                if !tags.iter().any(|t| t == tag) {
                    tags.push(tag.clone());
                }
            }
        }
        tags
    }

    pub fn get(&self, id: u64) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }
}

fn validate(article: &Article) -> Result<()> {
    if article.id == 0 {
        return Err(Error::InvalidArticle {
            id: article.id,
            reason: "invalid field: id must be positive".to_string(),
        });
    }

    let required = [
        ("title", !article.title.is_empty()),
        ("content", !article.content.is_empty()),
        ("author", !article.author.is_empty()),
        ("category", !article.category.is_empty()),
    ];
    for (field, ok) in required {
        if !ok {
            return Err(Error::InvalidArticle {
                id: article.id,
                reason: format!("missing required field: {}", field),
            });
        }
    }

    check_url(article.id, &article.image_url)?;
    for link in &article.related_links {
        check_url(article.id, &link.url)?;
    }
    if let Some(references) = &article.ext.references {
        for reference in references {
            check_url(article.id, &reference.url)?;
        }
    }
    Ok(())
}

fn check_url(id: u64, url: &str) -> Result<()> {
    Url::parse(url).map_err(|_| Error::InvalidUrl {
        id,
        url: url.to_string(),
    })?;
    Ok(())
}
