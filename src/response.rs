use crate::serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

impl DeleteResponse {
    pub fn new(resource: &str) -> Self {
        DeleteResponse {
            message: format!("{} deleted successfully", resource),
        }
    }
}
