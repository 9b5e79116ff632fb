pub mod extractor;
pub mod fetcher;
pub mod handlers;
pub mod models;
pub mod scoring;
pub mod skills;
