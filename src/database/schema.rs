use log::info;
use sqlx::{query, PgPool};

use crate::error::Error;

// Tables first, in foreign-key order, then their indexes.
const STATEMENTS: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS "user" (
        id SERIAL PRIMARY KEY,
        name VARCHAR NOT NULL,
        email VARCHAR
    )"#,
    r#"CREATE TABLE IF NOT EXISTS question (
        id SERIAL PRIMARY KEY,
        text VARCHAR NOT NULL,
        "type" VARCHAR NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS options (
        id SERIAL PRIMARY KEY,
        question_id INTEGER REFERENCES question (id),
        option_text VARCHAR NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS answers (
        id SERIAL PRIMARY KEY,
        selected_option VARCHAR NOT NULL,
        question_id INTEGER REFERENCES question (id),
        user_id INTEGER REFERENCES "user" (id)
    )"#,
    r#"CREATE INDEX IF NOT EXISTS ix_user_name ON "user" (name)"#,
    r#"CREATE INDEX IF NOT EXISTS ix_question_text ON question (text)"#,
    r#"CREATE INDEX IF NOT EXISTS ix_question_type ON question ("type")"#,
    r#"CREATE INDEX IF NOT EXISTS ix_options_option_text ON options (option_text)"#,
    r#"CREATE INDEX IF NOT EXISTS ix_answers_selected_option ON answers (selected_option)"#,
];

pub async fn create_tables(pool: &PgPool) -> Result<(), Error> {
    info!("creating tables....");
    let mut tx = pool.begin().await?;
    for stmt in STATEMENTS {
        query(*stmt).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    info!("tables ready");
    Ok(())
}
