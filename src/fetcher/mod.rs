pub mod client;

pub use client::{Fetch, PageFetcher};
