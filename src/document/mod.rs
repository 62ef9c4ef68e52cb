pub mod loader;
pub mod splitter;

pub use loader::{load_pdf, Page};
pub use splitter::{Chunk, TextSplitter};
