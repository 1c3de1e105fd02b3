pub mod config;
pub mod error;
pub mod extract;
pub mod links;
pub mod page;
pub mod pipeline;
pub mod route;
pub mod sanitize;
pub mod title;

pub use config::ImportConfig;
pub use error::{Result, SitegraftError};
pub use extract::{ArticleExtractor, ExtractConfig, ExtractedArticle, HeuristicExtractor};
pub use links::LinkRewriter;
pub use page::PageRecord;
pub use pipeline::{GeneratedPage, ImportSummary, Pipeline, SkippedDocument};
pub use route::{is_home_duplicate, layout_import_for_route, output_path_for_route, route_from_source_path};
pub use sanitize::sanitize_fragment;
pub use title::extract_title;
