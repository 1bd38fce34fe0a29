#[cfg(test)]
pub mod memory;
pub mod schema;
pub mod sqlx;
