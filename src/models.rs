use serde::Deserialize;

/// A search hit from TMDB, shown on the selection page before anything is
/// persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    pub id: i32,
    pub title: String,
    pub release_date: Option<String>,
    pub overview: Option<String>,
}

/// Full detail record for one movie, already normalized into store fields.
#[derive(Clone, Debug, PartialEq)]
pub struct MovieDetails {
    pub id: i32,
    pub title: String,
    pub release_date: String,
    pub overview: String,
    pub img_url: String,
}

#[derive(Debug, Deserialize)]
pub struct EditForm {
    pub rating: String,
    pub review: String,
}

impl EditForm {
    /// The edit page renders a 0-10 select box, but the posted value is
    /// still untrusted text.
    pub fn parse_rating(&self) -> Result<f64, String> {
        match self.rating.trim().parse::<u8>() {
            Ok(n) if n <= 10 => Ok(f64::from(n)),
            _ => Err("rating must be a whole number from 0 to 10".to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddForm {
    pub title: String,
}

impl AddForm {
    pub fn title(&self) -> Result<&str, String> {
        let title = self.title.trim();
        if title.is_empty() {
            Err("movie title is required".to_string())
        } else {
            Ok(title)
        }
    }
}
