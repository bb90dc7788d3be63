use serde::{Deserialize, Serialize};

use crate::movie::Movie;
use crate::request::MediaRequest;

/// The whole persisted state: one root object holding every movie and
/// every request. There is no partial persistence; each mutation
/// rewrites this document in full. Both keys are required on
/// deserialization so a file with the wrong shape fails loudly instead
/// of silently losing a collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Document {
    pub movies: Vec<Movie>,
    pub requests: Vec<MediaRequest>,
}

impl Document {
    /// First movie matching the slug. Duplicate slugs resolve to the
    /// earliest entry in document order.
    pub fn movie_by_slug(&self, slug: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.slug == slug)
    }

    pub fn movie_by_slug_mut(&mut self, slug: &str) -> Option<&mut Movie> {
        self.movies.iter_mut().find(|m| m.slug == slug)
    }
}
