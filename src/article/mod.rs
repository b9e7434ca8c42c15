pub mod models;
pub mod transform;

pub use models::*;
pub use transform::ArticleTransformer;
