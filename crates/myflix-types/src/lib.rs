//! Wire types for the MyFlix movie catalog API.
//!
//! Every endpoint the client talks to has an explicit schema here. Field
//! names follow the remote API's JSON (`_id`, `Title`, `FavoriteMovies`, ...)
//! while the Rust side uses ordinary snake_case names.

mod movie;
mod user;

pub use movie::{Director, Genre, Movie};
pub use user::{Credentials, LoginResponse, NewUser, UserProfile, UserUpdate};
