pub mod config;
pub mod models;
pub mod samples;
pub mod summarize;
