use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i32,
    pub text: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub type_: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Create {
    pub text: String,
    #[serde(rename = "type")]
    pub type_: String,
}
