mod school;

pub use school::{School, SchoolSearch, SearchResult};
