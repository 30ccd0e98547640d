//! Request DTOs with validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use librarium_entity::{MovementKind, UserStatus};

/// Create book request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBookRequest {
    /// Title.
    #[validate(length(min = 1, max = 255, message = "title is required"))]
    pub title: String,
    /// ISBN.
    #[validate(length(min = 10, max = 17, message = "isbn must be between 10 and 17 characters"))]
    pub isbn: String,
    /// Description.
    pub description: Option<String>,
    /// Author id.
    pub author_id: i64,
    /// Genre id.
    pub genre_id: i64,
    /// Publisher id.
    pub publisher_id: i64,
    /// Year of publication.
    pub published_year: Option<i32>,
    /// Copies on hand at cataloguing time (default 0).
    #[validate(range(min = 0, message = "initial_stock must not be negative"))]
    pub initial_stock: Option<i64>,
}

/// Update book request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateBookRequest {
    /// New title.
    #[validate(length(min = 1, max = 255, message = "title must not be empty"))]
    pub title: Option<String>,
    /// New ISBN.
    #[validate(length(min = 10, max = 17, message = "isbn must be between 10 and 17 characters"))]
    pub isbn: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New published year.
    pub published_year: Option<i32>,
}

/// Book search request body (search-as-POST).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookSearchRequest {
    /// Title substring.
    pub title: Option<String>,
    /// Restrict to one author.
    pub author_id: Option<i64>,
    /// Restrict to one genre.
    pub genre_id: Option<i64>,
    /// Restrict to one publisher.
    pub publisher_id: Option<i64>,
    /// Published in or after this year.
    pub published_after: Option<i32>,
    /// Published in or before this year.
    pub published_before: Option<i32>,
    /// Page number.
    pub page: Option<u64>,
    /// Items per page.
    pub limit: Option<u64>,
}

/// Create author request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAuthorRequest {
    /// Full name.
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,
    /// Country of origin.
    pub country: Option<String>,
    /// Year of birth.
    pub birth_year: Option<i32>,
}

/// Update author request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateAuthorRequest {
    /// New name.
    #[validate(length(min = 1, max = 255, message = "name must not be empty"))]
    pub name: Option<String>,
    /// New country.
    pub country: Option<String>,
    /// New birth year.
    pub birth_year: Option<i32>,
}

/// Author filter request body (filter-as-POST).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorFilterRequest {
    /// Name substring.
    pub name: Option<String>,
    /// Exact country match.
    pub country: Option<String>,
    /// Page number.
    pub page: Option<u64>,
    /// Items per page.
    pub limit: Option<u64>,
}

/// Create genre request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateGenreRequest {
    /// Name.
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,
    /// Description.
    pub description: Option<String>,
}

/// Update genre request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateGenreRequest {
    /// New name.
    #[validate(length(min = 1, max = 100, message = "name must not be empty"))]
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
}

/// Create publisher request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePublisherRequest {
    /// Name.
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,
    /// City of the head office.
    pub city: Option<String>,
    /// Year the house was founded.
    pub founded_year: Option<i32>,
}

/// Update publisher request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdatePublisherRequest {
    /// New name.
    #[validate(length(min = 1, max = 255, message = "name must not be empty"))]
    pub name: Option<String>,
    /// New city.
    pub city: Option<String>,
    /// New founded year.
    pub founded_year: Option<i32>,
}

/// Record inventory movement request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordMovementRequest {
    /// The book whose stock moves.
    pub book_id: i64,
    /// Direction of the movement.
    pub kind: MovementKind,
    /// Number of copies.
    pub quantity: i64,
    /// Free-form note.
    pub note: Option<String>,
}

/// Create user request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Login name.
    #[validate(length(min = 3, max = 100, message = "username must be at least 3 characters"))]
    pub username: String,
    /// Email address.
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    /// Assigned role.
    pub role_id: i64,
}

/// Update user request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// New email address.
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    /// New account status.
    pub status: Option<UserStatus>,
}

/// Assign role request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignRoleRequest {
    /// The role to assign.
    pub role_id: i64,
}

/// Create role request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRoleRequest {
    /// Name.
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,
    /// Description.
    pub description: Option<String>,
}

/// Update role request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateRoleRequest {
    /// New name.
    #[validate(length(min = 1, max = 100, message = "name must not be empty"))]
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
}

/// Audit search request body (filter-as-POST).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditFilterRequest {
    /// Only records produced by this actor.
    pub actor_id: Option<i64>,
    /// Only records with this action name.
    pub action: Option<String>,
    /// Only records touching this entity type.
    pub entity_type: Option<String>,
    /// Only records at or after this time.
    pub from: Option<DateTime<Utc>>,
    /// Only records at or before this time.
    pub to: Option<DateTime<Utc>>,
    /// Page number.
    pub page: Option<u64>,
    /// Items per page.
    pub limit: Option<u64>,
}
