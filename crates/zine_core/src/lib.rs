pub mod error;
pub mod seed;
pub mod store;
pub mod types;

pub use error::Error;
pub use store::ArticleStore;
pub use types::{Article, Benchmark, CodeExample, Extensions, Reference, RelatedLink};

pub type Result<T> = std::result::Result<T, Error>;
