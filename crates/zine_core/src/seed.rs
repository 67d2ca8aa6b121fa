//! The fixed article collection the process loads at start. The data is
//! deliberately static: there are no write paths anywhere in the system.

use chrono::NaiveDate;

use crate::types::{Article, Benchmark, CodeExample, Extensions, Reference, RelatedLink};

/// Evaluated in const context below, so a bad calendar date is a compile
/// error rather than a startup panic.
const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar date in seed data"),
    }
}

const REACT_GUIDE_DATE: NaiveDate = ymd(2024, 3, 15);
const MICROSERVICES_DATE: NaiveDate = ymd(2024, 3, 14);
const AI_DEVELOPMENT_DATE: NaiveDate = ymd(2024, 3, 13);
const HNSW_BENCHMARKS_DATE: NaiveDate = ymd(2024, 3, 11);

fn link(title: &str, url: &str) -> RelatedLink {
    RelatedLink {
        title: title.to_string(),
        url: url.to_string(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Builds the seed collection. The result is handed to
/// [`crate::ArticleStore::new`] exactly once per process.
pub fn articles() -> Vec<Article> {
    vec![
        Article {
            id: 1,
            title: "Complete Guide to Modern React Development in 2024".to_string(),
            content: "React continues to evolve as the leading JavaScript library for building user interfaces.\n\
                In this comprehensive guide, we'll explore the latest features including React Server Components, Suspense for Data Fetching, and the new React hooks.\n\
                Learn how to build performant, scalable applications using modern React practices and patterns.\n\
                \n\
                Key topics covered:\n\
                • Understanding React 18's concurrent features\n\
                • Working with Server Components\n\
                • Advanced state management techniques\n\
                • Performance optimization strategies"
                .to_string(),
            author: "Sarah Johnson".to_string(),
            author_role: "Senior Frontend Engineer at TechCorp".to_string(),
            date: REACT_GUIDE_DATE,
            image_url: "https://picsum.photos/800/400".to_string(),
            category: "React".to_string(),
            read_time: "8 min read".to_string(),
            tags: strings(&["React", "JavaScript", "Web Development", "Frontend"]),
            related_links: vec![
                link("React Documentation", "https://react.dev"),
                link("React GitHub", "https://github.com/facebook/react"),
            ],
            ext: Extensions::default(),
        },
        Article {
            id: 2,
            title: "Node.js Microservices Architecture: A Production-Ready Approach".to_string(),
            content: "Microservices architecture has become the standard for building scalable backend systems.\n\
                This article deep dives into implementing microservices using Node.js, exploring patterns, best practices, and real-world examples.\n\
                \n\
                We'll cover:\n\
                • Service discovery and registration\n\
                • Inter-service communication\n\
                • Database patterns for microservices\n\
                • Monitoring and logging strategies\n\
                • Deployment considerations"
                .to_string(),
            author: "Michael Chen".to_string(),
            author_role: "Cloud Architecture Consultant".to_string(),
            date: MICROSERVICES_DATE,
            image_url: "https://picsum.photos/800/401".to_string(),
            category: "Backend".to_string(),
            read_time: "12 min read".to_string(),
            tags: strings(&["Node.js", "Microservices", "Backend", "Architecture"]),
            related_links: vec![
                link("Node.js Best Practices", "https://nodejs.org/en/docs/guides"),
                link("Microservices.io", "https://microservices.io"),
            ],
            ext: Extensions::default(),
        },
        Article {
            id: 3,
            title: "AI-Driven Development: Integrating ChatGPT in Modern Applications".to_string(),
            content: "Artificial Intelligence is revolutionizing how we develop software.\n\
                Learn how to leverage ChatGPT and other AI tools to enhance your development workflow, improve code quality, and accelerate project delivery.\n\
                \n\
                Topics covered:\n\
                • AI-assisted code generation\n\
                • Automated code review\n\
                • Natural language processing in apps\n\
                • Best practices for AI integration"
                .to_string(),
            author: "Dr. Emily Rodriguez".to_string(),
            author_role: "AI Research Lead".to_string(),
            date: AI_DEVELOPMENT_DATE,
            image_url: "https://picsum.photos/800/402".to_string(),
            category: "AI".to_string(),
            read_time: "10 min read".to_string(),
            tags: strings(&["AI", "ChatGPT", "Machine Learning", "Development"]),
            related_links: vec![
                link("OpenAI Documentation", "https://openai.com/docs"),
                link("AI Development Guide", "https://ai-patterns.dev"),
            ],
            ext: Extensions::default(),
        },
        Article {
            id: 4,
            title: "Vector Database Internals: Benchmarking HNSW Index Construction".to_string(),
            content: "Approximate nearest neighbor search underpins most production retrieval systems, and HNSW remains the dominant index structure.\n\
                This article examines the construction cost of hierarchical navigable small world graphs and how parameter choices trade recall against build time.\n\
                \n\
                We measure index build throughput across corpus sizes from one hundred thousand to fifty million vectors and report recall at ten under varying ef_construction settings.\n\
                All benchmarks are reproducible with the linked harness."
                .to_string(),
            author: "Dr. Anja Keller".to_string(),
            author_role: "Staff Engineer, Search Infrastructure".to_string(),
            date: HNSW_BENCHMARKS_DATE,
            image_url: "https://picsum.photos/800/403".to_string(),
            category: "Performance".to_string(),
            read_time: "15 min read".to_string(),
            tags: strings(&["Vector Search", "HNSW", "Benchmarks", "Databases"]),
            related_links: vec![
                link("hnswlib", "https://github.com/nmslib/hnswlib"),
                link("ANN Benchmarks", "https://ann-benchmarks.com"),
            ],
            ext: Extensions {
                difficulty: Some("Advanced".to_string()),
                code_examples: Some(vec![CodeExample {
                    language: "python".to_string(),
                    code: "import hnswlib\n\
                        index = hnswlib.Index(space='cosine', dim=768)\n\
                        index.init_index(max_elements=1_000_000, ef_construction=200, M=16)\n\
                        index.add_items(vectors, ids)"
                        .to_string(),
                    description: "Building an HNSW index with the settings used in the benchmark runs".to_string(),
                }]),
                references: Some(vec![
                    Reference {
                        title: "Efficient and robust approximate nearest neighbor search using HNSW graphs".to_string(),
                        author: "Yu. A. Malkov, D. A. Yashunin".to_string(),
                        url: "https://arxiv.org/abs/1603.09320".to_string(),
                    },
                    Reference {
                        title: "ANN-Benchmarks: A benchmarking tool for approximate nearest neighbor algorithms".to_string(),
                        author: "M. Aumüller, E. Bernhardsson, A. Faithfull".to_string(),
                        url: "https://arxiv.org/abs/1807.05614".to_string(),
                    },
                ]),
                academic_citations: Some(strings(&[
                    "Malkov & Yashunin, IEEE TPAMI 42(4), 2020",
                    "Aumüller et al., Information Systems 87, 2020",
                ])),
                system_requirements: Some(
                    "64 GB RAM, AVX2-capable CPU; benchmark corpus requires ~180 GB of disk".to_string(),
                ),
                benchmarks: Some(vec![
                    Benchmark {
                        metric: "build throughput".to_string(),
                        value: "41k vectors/s".to_string(),
                        conditions: "768-dim, M=16, ef_construction=200, 32 threads".to_string(),
                    },
                    Benchmark {
                        metric: "recall@10".to_string(),
                        value: "0.987".to_string(),
                        conditions: "10M corpus, ef_search=128".to_string(),
                    },
                ]),
                related_concepts: Some(strings(&[
                    "product quantization",
                    "IVF indexes",
                    "graph-based ANN",
                ])),
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ArticleStore;

    #[test]
    fn seed_collection_passes_load_validation() {
        let store = ArticleStore::new(articles()).unwrap();
        assert_eq!(store.articles().len(), 4);
    }

    #[test]
    fn seed_categories_and_tags_derive_in_load_order() {
        let store = ArticleStore::new(articles()).unwrap();
        assert_eq!(
            store.categories(),
            vec!["React", "Backend", "AI", "Performance"]
        );
        assert_eq!(store.tags().first().map(String::as_str), Some("React"));
        assert!(store.tags().contains(&"HNSW".to_string()));
    }

    #[test]
    fn seed_dates_are_the_published_dates() {
        let dates: Vec<NaiveDate> = articles().iter().map(|a| a.date).collect();
        let expected: Vec<NaiveDate> = [(2024, 3, 15), (2024, 3, 14), (2024, 3, 13), (2024, 3, 11)]
            .iter()
            .map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
            .collect();
        assert_eq!(dates, expected);
    }

    #[test]
    fn only_the_scholarly_article_carries_references() {
        let seeded = articles();
        let with_refs: Vec<u64> = seeded
            .iter()
            .filter(|a| a.has_references())
            .map(|a| a.id)
            .collect();
        assert_eq!(with_refs, vec![4]);
    }

    #[test]
    fn wire_format_uses_camel_case_and_omits_absent_extensions() {
        let seeded = articles();
        let standard = serde_json::to_value(&seeded[0]).unwrap();
        assert!(standard.get("imageUrl").is_some());
        assert!(standard.get("readTime").is_some());
        assert!(standard.get("relatedLinks").is_some());
        assert!(standard.get("codeExamples").is_none());

        let scholarly = serde_json::to_value(&seeded[3]).unwrap();
        assert!(scholarly.get("codeExamples").is_some());
        assert!(scholarly.get("references").is_some());
        assert!(scholarly.get("systemRequirements").is_some());
    }
}
