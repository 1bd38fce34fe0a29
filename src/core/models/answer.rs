use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Answer {
    pub id: i32,
    pub selected_option: String,
    pub question_id: Option<i32>,
    pub user_id: Option<i32>,
}

/// Body of `POST /answers` and `PATCH /answers/{id}`.
///
/// On update only `selected_option` and `question_id` are written; the
/// answer keeps the `user_id` it was created with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Create {
    pub selected_option: String,
    pub question_id: i32,
    pub user_id: i32,
}
