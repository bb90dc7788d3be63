use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::comment::Comment;
use crate::rating::Rating;
use crate::slug::slugify;

/// Poster path used when a movie is created without artwork.
pub const PLACEHOLDER_POSTER: &str = "/static/placeholder.jpg";

/// A catalog entry. `id` and `slug` are assigned at creation and never
/// change afterwards; `views`, `ratings` and `comments` are the only
/// mutable parts and each has exactly one mutation operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub year: String,
    pub genre: String,
    pub description: String,
    pub poster: String,
    pub source: String,
    #[serde(rename = "sourceType")]
    pub source_type: String,
    pub download: String,
    pub trailer: String,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub ratings: Vec<Rating>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Caller-supplied fields for creating a movie. Everything except the
/// title is optional in practice; blanks get the same fallbacks the
/// admin form applies.
#[derive(Debug, Clone, Default)]
pub struct NewMovie {
    pub title: String,
    pub year: String,
    pub genre: String,
    pub description: String,
    pub poster: String,
    pub source: String,
    pub source_type: String,
    pub download: String,
    pub trailer: String,
}

impl Movie {
    /// Construct a fresh movie: new id, slug derived from title and
    /// year, zero views, no ratings or comments. Slug uniqueness is NOT
    /// checked here; lookups resolve duplicates first-match-wins.
    pub fn new(fields: NewMovie) -> Self {
        let slug = slugify(&format!("{}-{}", fields.title, fields.year));
        let poster = if fields.poster.is_empty() {
            PLACEHOLDER_POSTER.to_string()
        } else {
            fields.poster
        };
        let download = if fields.download.is_empty() {
            fields.source.clone()
        } else {
            fields.download
        };
        let source_type = if fields.source_type.is_empty() {
            "mp4".to_string()
        } else {
            fields.source_type
        };
        Self {
            id: Uuid::new_v4().to_string(),
            slug,
            title: fields.title,
            year: fields.year,
            genre: fields.genre,
            description: fields.description,
            poster,
            source: fields.source,
            source_type,
            download,
            trailer: fields.trailer,
            views: 0,
            ratings: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// The URL a download should resolve to: the explicit download link
    /// if one was set, otherwise the playable source.
    pub fn download_url(&self) -> &str {
        if self.download.is_empty() {
            &self.source
        } else {
            &self.download
        }
    }

    /// Mean rating and number of raters. `None` when nobody has rated.
    pub fn rating_summary(&self) -> Option<(f64, usize)> {
        if self.ratings.is_empty() {
            return None;
        }
        let sum: u64 = self.ratings.iter().map(|r| u64::from(r.rating)).sum();
        Some((sum as f64 / self.ratings.len() as f64, self.ratings.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inception() -> NewMovie {
        NewMovie {
            title: "Inception".to_string(),
            year: "2010".to_string(),
            genre: "Sci-Fi".to_string(),
            description: "A thief who steals corporate secrets.".to_string(),
            source: "/uploads/inception.mp4".to_string(),
            ..NewMovie::default()
        }
    }

    #[test]
    fn test_new_movie_slug() {
        let movie = Movie::new(inception());
        assert_eq!(movie.slug, "inception-2010");
    }

    #[test]
    fn test_new_movie_starts_empty() {
        let movie = Movie::new(inception());
        assert_eq!(movie.views, 0);
        assert!(movie.ratings.is_empty());
        assert!(movie.comments.is_empty());
    }

    #[test]
    fn test_new_movie_fallbacks() {
        let movie = Movie::new(inception());
        assert_eq!(movie.poster, PLACEHOLDER_POSTER);
        assert_eq!(movie.download, "/uploads/inception.mp4");
        assert_eq!(movie.source_type, "mp4");
    }

    #[test]
    fn test_explicit_download_kept() {
        let movie = Movie::new(NewMovie {
            download: "https://cdn.example/inception.mkv".to_string(),
            ..inception()
        });
        assert_eq!(movie.download_url(), "https://cdn.example/inception.mkv");
    }

    #[test]
    fn test_rating_summary() {
        let mut movie = Movie::new(inception());
        assert_eq!(movie.rating_summary(), None);
        movie.ratings.push(Rating {
            user: "u1".to_string(),
            rating: 4,
        });
        movie.ratings.push(Rating {
            user: "u2".to_string(),
            rating: 5,
        });
        assert_eq!(movie.rating_summary(), Some((4.5, 2)));
    }

    #[test]
    fn test_counters_default_when_missing() {
        // Hand-edited files may omit the mutable parts entirely.
        let json = r#"{
            "id": "abc", "slug": "heat-1995", "title": "Heat",
            "year": "1995", "genre": "Crime", "description": "",
            "poster": "/static/placeholder.jpg", "source": "/uploads/heat.mp4",
            "sourceType": "mp4", "download": "/uploads/heat.mp4", "trailer": ""
        }"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.views, 0);
        assert!(movie.ratings.is_empty());
        assert!(movie.comments.is_empty());
    }
}
