pub mod dom;
pub mod structured;

#[cfg(test)]
pub(crate) mod fixtures;

pub use dom::DomExtractor;
pub use structured::{AlbumSummary, Mode, PlaylistSummary, Record, StructuredData, StructuredDataExtractor};

use crate::catalog::Album;
use crate::error::{AppError, Result};

/// Outcome of running one extraction strategy against a page.
#[derive(Debug)]
pub enum Extraction<T> {
    Ok(T),
    /// The strategy could not read this page; another one may.
    NeedsFallback(String),
    Fatal(AppError),
}

impl<T> Extraction<T> {
    /// Missing structured data or an unreadable block means "try something else";
    /// every other error is fatal.
    pub fn from_result(result: Result<T>) -> Self {
        match result {
            Ok(value) => Extraction::Ok(value),
            Err(e @ (AppError::NoStructuredDataFound | AppError::Json(_))) => {
                Extraction::NeedsFallback(e.to_string())
            }
            Err(e) => Extraction::Fatal(e),
        }
    }
}

#[cfg(test)]
impl<T: std::fmt::Debug> Extraction<T> {
    pub fn unwrap(self) -> T {
        match self {
            Extraction::Ok(value) => value,
            other => panic!("extraction did not succeed: {:?}", other),
        }
    }
}

/// A way of reading an album out of page markup.
pub trait AlbumExtractor {
    fn name(&self) -> &'static str;
    fn album(&self, html: &str) -> Extraction<Album>;
}
