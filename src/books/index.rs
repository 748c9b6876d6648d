pub mod isbn_index;
pub mod title_index;

pub use isbn_index::IsbnIndex;
pub use title_index::TitleIndex;
