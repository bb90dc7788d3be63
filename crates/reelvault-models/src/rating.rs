use serde::{Deserialize, Serialize};

/// One user's star rating for a movie. At most one per distinct `user`
/// value per movie; resubmission overwrites the stored value in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rating {
    pub user: String,
    pub rating: u8, // 1-5 stars
}

/// Clamp an arbitrary client-supplied integer into the 1-5 star range.
pub fn clamp_rating(value: i64) -> u8 {
    value.clamp(1, 5) as u8
}
