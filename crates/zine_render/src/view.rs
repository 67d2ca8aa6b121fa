//! Human-readable projections of an article. Both views are derived from the
//! same record with no side effects: a card is the truncated preview shown in
//! the feed grid, the full view adds the paragraph-segmented body.

use chrono::NaiveDate;
use serde::Serialize;
use zine_core::{Article, CodeExample, RelatedLink};

/// Text up to the first newline, or the whole content when none exists.
/// Empty content yields an empty preview.
pub fn first_line(content: &str) -> &str {
    content.split('\n').next().unwrap_or("")
}

/// One segment per newline, empty segments preserved so that joining with
/// `"\n"` reconstructs the content exactly.
pub fn paragraphs(content: &str) -> Vec<String> {
    content.split('\n').map(str::to_string).collect()
}

/// Long display form, e.g. "March 15, 2024".
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[derive(Debug, Clone, Serialize)]
pub struct Byline {
    pub name: String,
    pub role: String,
}

/// Truncated preview of one article, as shown on the feed grid.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub author: Byline,
    pub preview: String,
    pub read_time: String,
    pub date_display: String,
    pub image_url: String,
    pub tags: Vec<String>,
    /// Always present: an empty list is the renderer's cue to show a
    /// "no related resources" placeholder, not to drop the section.
    pub related_links: Vec<RelatedLink>,
}

impl CardView {
    pub fn project(article: &Article) -> Self {
        Self {
            id: article.id,
            title: article.title.clone(),
            category: article.category.clone(),
            author: Byline {
                name: article.author.clone(),
                role: article.author_role.clone(),
            },
            preview: first_line(&article.content).to_string(),
            read_time: article.read_time.clone(),
            date_display: long_date(article.date),
            image_url: article.image_url.clone(),
            tags: article.tags.clone(),
            related_links: article.related_links.clone(),
        }
    }
}

/// The card fields plus the complete paragraph-segmented body. Optional
/// sections are omitted entirely when the article doesn't carry them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullView {
    #[serde(flatten)]
    pub card: CardView,
    pub paragraphs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_examples: Option<Vec<CodeExample>>,
}

impl FullView {
    pub fn project(article: &Article) -> Self {
        Self {
            card: CardView::project(article),
            paragraphs: paragraphs(&article.content),
            code_examples: article.ext.code_examples.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use zine_core::types::Extensions;

    fn article(content: &str) -> Article {
        Article {
            id: 1,
            title: "Title".to_string(),
            content: content.to_string(),
            author: "Sarah Johnson".to_string(),
            author_role: "Senior Frontend Engineer".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            image_url: "https://picsum.photos/800/400".to_string(),
            category: "React".to_string(),
            read_time: "8 min read".to_string(),
            tags: vec!["React".to_string()],
            related_links: vec![],
            ext: Extensions::default(),
        }
    }

    #[test]
    fn preview_is_content_before_first_newline() {
        let card = CardView::project(&article("Line one\nLine two\n\nLine four"));
        assert_eq!(card.preview, "Line one");
    }

    #[test]
    fn preview_is_whole_content_without_newline() {
        let card = CardView::project(&article("single line only"));
        assert_eq!(card.preview, "single line only");
    }

    #[test]
    fn preview_of_empty_content_is_empty() {
        assert_eq!(first_line(""), "");
    }

    #[test]
    fn paragraphs_preserve_empty_segments() {
        let full = FullView::project(&article("Line one\nLine two\n\nLine four"));
        assert_eq!(
            full.paragraphs,
            vec!["Line one", "Line two", "", "Line four"]
        );
    }

    #[test]
    fn paragraphs_round_trip_to_content() {
        let content = "a\n\nb\nc\n";
        assert_eq!(paragraphs(content).join("\n"), content);
    }

    #[test]
    fn date_renders_in_long_form() {
        assert_eq!(
            long_date(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()),
            "March 15, 2024"
        );
        assert_eq!(
            long_date(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()),
            "March 5, 2024"
        );
    }

    #[test]
    fn card_keeps_empty_related_links_present() {
        let card = CardView::project(&article("x"));
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["relatedLinks"], serde_json::json!([]));
    }

    #[test]
    fn full_view_omits_absent_code_examples() {
        let full = FullView::project(&article("x"));
        let json = serde_json::to_value(&full).unwrap();
        assert!(json.get("codeExamples").is_none());
    }
}
