use std::str::FromStr;

use log::debug;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{query, query_as, PgPool, Postgres, Transaction};

use crate::config::Config;
use crate::core::models::{
    answer::{Answer, Create as AnswerCreate},
    option::{Create as OptionCreate, Opt},
    question::{Create as QuestionCreate, Question},
    user::{Create as UserCreate, User},
};
use crate::core::ports::repository::{AnswerCommon, Manager, OptionCommon, QuestionCommon, Store, TxStore, UserCommon};
use crate::error::Error;

pub async fn connect(config: &Config) -> Result<PgPool, Error> {
    let options = PgConnectOptions::from_str(&config.database_url)?.ssl_mode(config.ssl_mode);
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .max_lifetime(config.max_lifetime)
        .connect_with(options)
        .await?;
    Ok(pool)
}

pub struct PgSqlx {
    executor: Transaction<'static, Postgres>,
}

impl PgSqlx {
    pub fn new(executor: Transaction<'static, Postgres>) -> Self {
        Self { executor }
    }
}

impl UserCommon for PgSqlx {
    async fn list(&mut self) -> Result<Vec<User>, Error> {
        let users = query_as(r#"SELECT id, name, email FROM "user""#).fetch_all(&mut *self.executor).await?;
        Ok(users)
    }

    async fn get(&mut self, id: i32) -> Result<Option<User>, Error> {
        let user = query_as(r#"SELECT id, name, email FROM "user" WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&mut *self.executor)
            .await?;
        Ok(user)
    }

    async fn insert(&mut self, user: UserCreate) -> Result<User, Error> {
        let user = query_as(r#"INSERT INTO "user" (name, email) VALUES ($1, $2) RETURNING id, name, email"#)
            .bind(user.name)
            .bind(user.email)
            .fetch_one(&mut *self.executor)
            .await?;
        Ok(user)
    }

    async fn update(&mut self, id: i32, user: UserCreate) -> Result<Option<User>, Error> {
        let user = query_as(r#"UPDATE "user" SET name = $1, email = $2 WHERE id = $3 RETURNING id, name, email"#)
            .bind(user.name)
            .bind(user.email)
            .bind(id)
            .fetch_optional(&mut *self.executor)
            .await?;
        Ok(user)
    }

    async fn delete(&mut self, id: i32) -> Result<bool, Error> {
        debug!("deleting user {}", id);
        let res = query(r#"DELETE FROM "user" WHERE id = $1"#).bind(id).execute(&mut *self.executor).await?;
        Ok(res.rows_affected() > 0)
    }
}

impl QuestionCommon for PgSqlx {
    async fn list(&mut self) -> Result<Vec<Question>, Error> {
        let questions = query_as(r#"SELECT id, text, "type" FROM question"#).fetch_all(&mut *self.executor).await?;
        Ok(questions)
    }

    async fn get(&mut self, id: i32) -> Result<Option<Question>, Error> {
        let question = query_as(r#"SELECT id, text, "type" FROM question WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&mut *self.executor)
            .await?;
        Ok(question)
    }

    async fn insert(&mut self, question: QuestionCreate) -> Result<Question, Error> {
        let question = query_as(r#"INSERT INTO question (text, "type") VALUES ($1, $2) RETURNING id, text, "type""#)
            .bind(question.text)
            .bind(question.type_)
            .fetch_one(&mut *self.executor)
            .await?;
        Ok(question)
    }

    async fn update(&mut self, id: i32, question: QuestionCreate) -> Result<Option<Question>, Error> {
        let question = query_as(r#"UPDATE question SET text = $1, "type" = $2 WHERE id = $3 RETURNING id, text, "type""#)
            .bind(question.text)
            .bind(question.type_)
            .bind(id)
            .fetch_optional(&mut *self.executor)
            .await?;
        Ok(question)
    }

    async fn delete(&mut self, id: i32) -> Result<bool, Error> {
        debug!("deleting question {}", id);
        let detached = query("UPDATE options SET question_id = NULL WHERE question_id = $1")
            .bind(id)
            .execute(&mut *self.executor)
            .await?;
        if detached.rows_affected() > 0 {
            debug!("detached {} options from question {}", detached.rows_affected(), id);
        }
        let res = query("DELETE FROM question WHERE id = $1").bind(id).execute(&mut *self.executor).await?;
        Ok(res.rows_affected() > 0)
    }
}

impl OptionCommon for PgSqlx {
    async fn list(&mut self) -> Result<Vec<Opt>, Error> {
        let opts = query_as("SELECT id, question_id, option_text FROM options").fetch_all(&mut *self.executor).await?;
        Ok(opts)
    }

    async fn get(&mut self, id: i32) -> Result<Option<Opt>, Error> {
        let opt = query_as("SELECT id, question_id, option_text FROM options WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.executor)
            .await?;
        Ok(opt)
    }

    async fn of_question(&mut self, question_id: i32) -> Result<Vec<Opt>, Error> {
        let opts = query_as("SELECT id, question_id, option_text FROM options WHERE question_id = $1")
            .bind(question_id)
            .fetch_all(&mut *self.executor)
            .await?;
        Ok(opts)
    }

    async fn insert(&mut self, option: OptionCreate) -> Result<Opt, Error> {
        let opt = query_as("INSERT INTO options (question_id, option_text) VALUES ($1, $2) RETURNING id, question_id, option_text")
            .bind(option.question_id)
            .bind(option.option_text)
            .fetch_one(&mut *self.executor)
            .await?;
        Ok(opt)
    }

    async fn update(&mut self, id: i32, option: OptionCreate) -> Result<Option<Opt>, Error> {
        let opt = query_as("UPDATE options SET question_id = $1, option_text = $2 WHERE id = $3 RETURNING id, question_id, option_text")
            .bind(option.question_id)
            .bind(option.option_text)
            .bind(id)
            .fetch_optional(&mut *self.executor)
            .await?;
        Ok(opt)
    }

    async fn delete(&mut self, id: i32) -> Result<bool, Error> {
        let res = query("DELETE FROM options WHERE id = $1").bind(id).execute(&mut *self.executor).await?;
        Ok(res.rows_affected() > 0)
    }
}

impl AnswerCommon for PgSqlx {
    async fn list(&mut self) -> Result<Vec<Answer>, Error> {
        let answers = query_as("SELECT id, selected_option, question_id, user_id FROM answers").fetch_all(&mut *self.executor).await?;
        Ok(answers)
    }

    async fn get(&mut self, id: i32) -> Result<Option<Answer>, Error> {
        let answer = query_as("SELECT id, selected_option, question_id, user_id FROM answers WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.executor)
            .await?;
        Ok(answer)
    }

    async fn insert(&mut self, answer: AnswerCreate) -> Result<Answer, Error> {
        let answer = query_as(
            "INSERT INTO answers (selected_option, question_id, user_id) VALUES ($1, $2, $3)
            RETURNING id, selected_option, question_id, user_id",
        )
        .bind(answer.selected_option)
        .bind(answer.question_id)
        .bind(answer.user_id)
        .fetch_one(&mut *self.executor)
        .await?;
        Ok(answer)
    }

    async fn update(&mut self, id: i32, answer: AnswerCreate) -> Result<Option<Answer>, Error> {
        let answer = query_as(
            "UPDATE answers SET selected_option = $1, question_id = $2 WHERE id = $3
            RETURNING id, selected_option, question_id, user_id",
        )
        .bind(answer.selected_option)
        .bind(answer.question_id)
        .bind(id)
        .fetch_optional(&mut *self.executor)
        .await?;
        Ok(answer)
    }

    async fn delete(&mut self, id: i32) -> Result<bool, Error> {
        let res = query("DELETE FROM answers WHERE id = $1").bind(id).execute(&mut *self.executor).await?;
        Ok(res.rows_affected() > 0)
    }
}

impl Store for PgSqlx {}

impl TxStore for PgSqlx {
    async fn commit(self) -> Result<(), Error> {
        self.executor.commit().await?;
        Ok(())
    }
}

pub struct PgSqlxManager {
    pool: PgPool,
}

impl PgSqlxManager {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl Manager for PgSqlxManager {
    type Tx = PgSqlx;

    async fn begin(&self) -> Result<PgSqlx, Error> {
        let tx = self.pool.begin().await?;
        Ok(PgSqlx::new(tx))
    }
}
