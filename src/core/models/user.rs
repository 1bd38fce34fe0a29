use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
}

/// Body of `POST /users` and `PATCH /user/{id}`. A missing `email` is stored as NULL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Create {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}
