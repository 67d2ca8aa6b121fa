pub mod seo;
pub mod view;

pub use seo::{ArticleStructuredData, SeoHead};
pub use view::{first_line, long_date, paragraphs, Byline, CardView, FullView};
