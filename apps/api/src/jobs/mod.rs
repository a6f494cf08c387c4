// Job catalog: shared postings, skill matching, and the sample seed.

pub mod catalog;
pub mod handlers;
pub mod matching;
pub mod seed;
