pub mod news;
pub mod structs;

pub use news::{EverythingParams, NewsSentinel};
pub use structs::NewsArticle;
