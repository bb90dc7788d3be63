pub mod comment;
pub mod document;
pub mod movie;
pub mod rating;
pub mod request;
pub mod slug;
pub mod validation;

pub use comment::Comment;
pub use document::Document;
pub use movie::{Movie, NewMovie};
pub use rating::{clamp_rating, Rating};
pub use request::{MediaRequest, RequestStatus};
pub use slug::slugify;
pub use validation::ValidationError;
