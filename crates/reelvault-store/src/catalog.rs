use std::sync::{Mutex, PoisonError};

use reelvault_config::{Config, PathManager};
use reelvault_models::{
    clamp_rating, Comment, Document, MediaRequest, Movie, NewMovie, Rating,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::StoreError;
use crate::store::DocumentStore;

/// Mean and count over one movie's ratings, reported back to the caller
/// after an upsert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingSummary {
    pub average: f64,
    pub count: usize,
}

/// The catalog's mutation and query surface. Every mutation is one
/// load-mutate-save cycle against the document store; by default the
/// whole cycle runs under a process-wide lock so two concurrent
/// mutations cannot overwrite each other's saves (the classic
/// lost-update of the unguarded cycle). Constructing with serialized
/// writes disabled restores the unguarded behavior.
pub struct Catalog {
    store: DocumentStore,
    write_guard: Option<Mutex<()>>,
}

impl Catalog {
    pub fn new(store: DocumentStore) -> Self {
        Self::with_serialized_writes(store, true)
    }

    pub fn with_serialized_writes(store: DocumentStore, serialize_writes: bool) -> Self {
        Self {
            store,
            write_guard: serialize_writes.then(|| Mutex::new(())),
        }
    }

    pub fn from_config(paths: &PathManager, config: &Config) -> Self {
        Self::with_serialized_writes(
            DocumentStore::new(paths.db_file()),
            config.serialize_writes,
        )
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    /// Run one load-mutate-save cycle. The closure's error aborts the
    /// cycle before anything is written.
    fn mutate<T>(
        &self,
        apply: impl FnOnce(&mut Document) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let _guard = self
            .write_guard
            .as_ref()
            .map(|m| m.lock().unwrap_or_else(PoisonError::into_inner));

        let mut document = self.store.load()?;
        let outcome = apply(&mut document)?;
        self.store.save(&document)?;
        Ok(outcome)
    }

    /// Count one view of the movie and return the new total.
    pub fn record_view(&self, slug: &str) -> Result<u64, StoreError> {
        let views = self.mutate(|document| {
            let movie = document
                .movie_by_slug_mut(slug)
                .ok_or_else(|| StoreError::NotFound(slug.to_string()))?;
            movie.views += 1;
            Ok(movie.views)
        })?;
        debug!(slug, views, "recorded view");
        Ok(views)
    }

    /// Store one user's rating, overwriting any rating that user gave
    /// before. The value is clamped into 1-5 before anything is loaded.
    pub fn upsert_rating(
        &self,
        slug: &str,
        user: &str,
        rating: i64,
    ) -> Result<RatingSummary, StoreError> {
        let rating = clamp_rating(rating);
        let summary = self.mutate(|document| {
            let movie = document
                .movie_by_slug_mut(slug)
                .ok_or_else(|| StoreError::NotFound(slug.to_string()))?;
            match movie.ratings.iter_mut().find(|r| r.user == user) {
                Some(existing) => existing.rating = rating,
                None => movie.ratings.push(Rating {
                    user: user.to_string(),
                    rating,
                }),
            }
            let count = movie.ratings.len();
            let sum: u64 = movie.ratings.iter().map(|r| u64::from(r.rating)).sum();
            Ok(RatingSummary {
                average: sum as f64 / count as f64,
                count,
            })
        })?;
        debug!(slug, user, rating, average = summary.average, "upserted rating");
        Ok(summary)
    }

    /// Append a comment. Text is validated before the document is even
    /// loaded; comments are never edited or removed afterwards.
    pub fn append_comment(
        &self,
        slug: &str,
        user: &str,
        text: &str,
    ) -> Result<Comment, StoreError> {
        let comment = Comment::new(user, text)?;
        self.mutate(|document| {
            let movie = document
                .movie_by_slug_mut(slug)
                .ok_or_else(|| StoreError::NotFound(slug.to_string()))?;
            movie.comments.push(comment.clone());
            Ok(())
        })?;
        debug!(slug, comment_id = %comment.id, "appended comment");
        Ok(comment)
    }

    /// Queue a request for a title missing from the catalog.
    pub fn create_request(&self, title: &str, notes: &str) -> Result<MediaRequest, StoreError> {
        let request = MediaRequest::new(title, notes)?;
        self.mutate(|document| {
            document.requests.push(request.clone());
            Ok(())
        })?;
        info!(request_id = %request.id, title = %request.title, "created request");
        Ok(request)
    }

    /// Create a movie and insert it at the front of the collection, so
    /// document order doubles as most-recently-created-first. The
    /// derived slug is not checked against existing movies; when two
    /// movies end up sharing a slug, lookups resolve to the older one.
    pub fn create_movie(&self, fields: NewMovie) -> Result<Movie, StoreError> {
        let movie = Movie::new(fields);
        self.mutate(|document| {
            document.movies.insert(0, movie.clone());
            Ok(())
        })?;
        info!(slug = %movie.slug, title = %movie.title, "created movie");
        Ok(movie)
    }

    /// All movies, most viewed first. Ties keep document order.
    pub fn list_movies(&self) -> Result<Vec<Movie>, StoreError> {
        let document = self.store.load()?;
        let mut movies = document.movies;
        movies.sort_by(|a, b| b.views.cmp(&a.views));
        Ok(movies)
    }

    pub fn movie_by_slug(&self, slug: &str) -> Result<Movie, StoreError> {
        let document = self.store.load()?;
        document
            .movie_by_slug(slug)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(slug.to_string()))
    }

    /// All queued requests in document order.
    pub fn list_requests(&self) -> Result<Vec<MediaRequest>, StoreError> {
        Ok(self.store.load()?.requests)
    }
}
