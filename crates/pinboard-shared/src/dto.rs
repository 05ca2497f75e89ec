//! Data Transfer Objects - request types for the API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub birth_date: NaiveDate,
}

/// Request to create a post under a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub description: String,
}
