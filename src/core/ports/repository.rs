use crate::core::models::{
    answer::{Answer, Create as AnswerCreate},
    option::{Create as OptionCreate, Opt},
    question::{Create as QuestionCreate, Question},
    user::{Create as UserCreate, User},
};
use crate::error::Error;

// Lookups by id return `None`/`false` when the row is absent; turning that
// into `Error::NotFound` is left to the services.

pub trait UserCommon {
    async fn list(&mut self) -> Result<Vec<User>, Error>;
    async fn get(&mut self, id: i32) -> Result<Option<User>, Error>;
    async fn insert(&mut self, user: UserCreate) -> Result<User, Error>;
    async fn update(&mut self, id: i32, user: UserCreate) -> Result<Option<User>, Error>;
    async fn delete(&mut self, id: i32) -> Result<bool, Error>;
}

pub trait QuestionCommon {
    async fn list(&mut self) -> Result<Vec<Question>, Error>;
    async fn get(&mut self, id: i32) -> Result<Option<Question>, Error>;
    async fn insert(&mut self, question: QuestionCreate) -> Result<Question, Error>;
    async fn update(&mut self, id: i32, question: QuestionCreate) -> Result<Option<Question>, Error>;
    /// Options of the deleted question are kept with their `question_id` cleared.
    async fn delete(&mut self, id: i32) -> Result<bool, Error>;
}

pub trait OptionCommon {
    async fn list(&mut self) -> Result<Vec<Opt>, Error>;
    async fn get(&mut self, id: i32) -> Result<Option<Opt>, Error>;
    async fn of_question(&mut self, question_id: i32) -> Result<Vec<Opt>, Error>;
    async fn insert(&mut self, option: OptionCreate) -> Result<Opt, Error>;
    async fn update(&mut self, id: i32, option: OptionCreate) -> Result<Option<Opt>, Error>;
    async fn delete(&mut self, id: i32) -> Result<bool, Error>;
}

pub trait AnswerCommon {
    async fn list(&mut self) -> Result<Vec<Answer>, Error>;
    async fn get(&mut self, id: i32) -> Result<Option<Answer>, Error>;
    async fn insert(&mut self, answer: AnswerCreate) -> Result<Answer, Error>;
    /// Writes `selected_option` and `question_id` only.
    async fn update(&mut self, id: i32, answer: AnswerCreate) -> Result<Option<Answer>, Error>;
    async fn delete(&mut self, id: i32) -> Result<bool, Error>;
}

pub trait Store: UserCommon + QuestionCommon + OptionCommon + AnswerCommon {}

pub trait TxStore: Store {
    async fn commit(self) -> Result<(), Error>;
}

/// Hands out one transaction per request. Dropping the transaction without
/// committing rolls it back.
pub trait Manager {
    type Tx: TxStore + 'static;

    async fn begin(&self) -> Result<Self::Tx, Error>;
}
