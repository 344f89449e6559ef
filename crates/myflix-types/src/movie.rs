//! Catalog types: movies and their embedded genre and director records.

use serde::{Deserialize, Serialize};

/// A movie genre.
///
/// Embedded in every [`Movie`] and also returned on its own by
/// `GET /genres/{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Genre {
    /// Genre name, e.g. "Thriller".
    pub name: String,
    /// Short description of the genre.
    #[serde(default)]
    pub description: String,
}

/// A movie director.
///
/// Embedded in every [`Movie`] and also returned on its own by
/// `GET /directors/{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Director {
    /// Director's full name.
    pub name: String,
    /// Biography.
    #[serde(default)]
    pub bio: String,
    /// Year (or date) of birth as sent by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth: Option<String>,
    /// Year (or date) of death, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death: Option<String>,
}

/// A movie in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Movie {
    /// Server-assigned identifier, used for favorite matching.
    #[serde(rename = "_id")]
    pub id: String,
    /// Movie title. Also the key for `GET /movies/{title}`.
    pub title: String,
    /// Synopsis.
    #[serde(default)]
    pub description: String,
    /// Genre record.
    pub genre: Genre,
    /// Director record.
    pub director: Director,
    /// Poster image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    /// Whether the movie is featured in the catalog.
    #[serde(default)]
    pub featured: bool,
}
