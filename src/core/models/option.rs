use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `options` table. `question_id` is NULL for orphaned options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Opt {
    pub id: i32,
    pub question_id: Option<i32>,
    pub option_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Create {
    pub question_id: i32,
    pub option_text: String,
}
