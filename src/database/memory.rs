//! In-memory implementation of the repository ports for tests.
//!
//! A transaction holds the lock on the shared tables until it ends and works
//! on a copy of them, publishing the copy on commit. Dropping it leaves the
//! shared state untouched and transactions never interleave. Foreign keys are
//! checked the way the postgres schema declares them.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::core::models::{
    answer::{Answer, Create as AnswerCreate},
    option::{Create as OptionCreate, Opt},
    question::{Create as QuestionCreate, Question},
    user::{Create as UserCreate, User},
};
use crate::core::ports::repository::{AnswerCommon, Manager, OptionCommon, QuestionCommon, Store, TxStore, UserCommon};
use crate::error::Error;

#[derive(Debug, Clone)]
struct Table<T> {
    seq: i32,
    rows: BTreeMap<i32, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self { seq: 0, rows: BTreeMap::new() }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> i32 {
        self.seq += 1;
        self.seq
    }
}

#[derive(Debug, Default, Clone)]
struct Tables {
    users: Table<User>,
    questions: Table<Question>,
    options: Table<Opt>,
    answers: Table<Answer>,
}

fn fk_violation(table: &str, column: &str, id: i32) -> Error {
    Error::DatabaseError(sqlx::Error::Protocol(format!("foreign key violation: {}.{} = {}", table, column, id)))
}

#[derive(Debug, Default, Clone)]
pub struct MemoryManager {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryManager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Manager for MemoryManager {
    type Tx = MemoryTx;

    async fn begin(&self) -> Result<MemoryTx, Error> {
        let shared = self.tables.clone().lock_owned().await;
        let staged = shared.clone();
        Ok(MemoryTx { shared, staged })
    }
}

pub struct MemoryTx {
    shared: OwnedMutexGuard<Tables>,
    staged: Tables,
}

impl MemoryTx {
    fn check_question(&self, column: &str, id: i32) -> Result<(), Error> {
        if !self.staged.questions.rows.contains_key(&id) {
            return Err(fk_violation("question", column, id));
        }
        Ok(())
    }
}

impl UserCommon for MemoryTx {
    async fn list(&mut self) -> Result<Vec<User>, Error> {
        Ok(self.staged.users.rows.values().cloned().collect())
    }

    async fn get(&mut self, id: i32) -> Result<Option<User>, Error> {
        Ok(self.staged.users.rows.get(&id).cloned())
    }

    async fn insert(&mut self, user: UserCreate) -> Result<User, Error> {
        let id = self.staged.users.next_id();
        let user = User {
            id,
            name: user.name,
            email: user.email,
        };
        self.staged.users.rows.insert(id, user.clone());
        Ok(user)
    }

    async fn update(&mut self, id: i32, user: UserCreate) -> Result<Option<User>, Error> {
        Ok(self.staged.users.rows.get_mut(&id).map(|row| {
            row.name = user.name;
            row.email = user.email;
            row.clone()
        }))
    }

    async fn delete(&mut self, id: i32) -> Result<bool, Error> {
        if self.staged.answers.rows.values().any(|a| a.user_id == Some(id)) {
            return Err(fk_violation("answers", "user_id", id));
        }
        Ok(self.staged.users.rows.remove(&id).is_some())
    }
}

impl QuestionCommon for MemoryTx {
    async fn list(&mut self) -> Result<Vec<Question>, Error> {
        Ok(self.staged.questions.rows.values().cloned().collect())
    }

    async fn get(&mut self, id: i32) -> Result<Option<Question>, Error> {
        Ok(self.staged.questions.rows.get(&id).cloned())
    }

    async fn insert(&mut self, question: QuestionCreate) -> Result<Question, Error> {
        let id = self.staged.questions.next_id();
        let question = Question {
            id,
            text: question.text,
            type_: question.type_,
        };
        self.staged.questions.rows.insert(id, question.clone());
        Ok(question)
    }

    async fn update(&mut self, id: i32, question: QuestionCreate) -> Result<Option<Question>, Error> {
        Ok(self.staged.questions.rows.get_mut(&id).map(|row| {
            row.text = question.text;
            row.type_ = question.type_;
            row.clone()
        }))
    }

    async fn delete(&mut self, id: i32) -> Result<bool, Error> {
        for opt in self.staged.options.rows.values_mut().filter(|o| o.question_id == Some(id)) {
            opt.question_id = None;
        }
        if self.staged.answers.rows.values().any(|a| a.question_id == Some(id)) {
            return Err(fk_violation("answers", "question_id", id));
        }
        Ok(self.staged.questions.rows.remove(&id).is_some())
    }
}

impl OptionCommon for MemoryTx {
    async fn list(&mut self) -> Result<Vec<Opt>, Error> {
        Ok(self.staged.options.rows.values().cloned().collect())
    }

    async fn get(&mut self, id: i32) -> Result<Option<Opt>, Error> {
        Ok(self.staged.options.rows.get(&id).cloned())
    }

    async fn of_question(&mut self, question_id: i32) -> Result<Vec<Opt>, Error> {
        Ok(self.staged.options.rows.values().filter(|o| o.question_id == Some(question_id)).cloned().collect())
    }

    async fn insert(&mut self, option: OptionCreate) -> Result<Opt, Error> {
        self.check_question("question_id", option.question_id)?;
        let id = self.staged.options.next_id();
        let opt = Opt {
            id,
            question_id: Some(option.question_id),
            option_text: option.option_text,
        };
        self.staged.options.rows.insert(id, opt.clone());
        Ok(opt)
    }

    async fn update(&mut self, id: i32, option: OptionCreate) -> Result<Option<Opt>, Error> {
        if !self.staged.options.rows.contains_key(&id) {
            return Ok(None);
        }
        self.check_question("question_id", option.question_id)?;
        Ok(self.staged.options.rows.get_mut(&id).map(|row| {
            row.question_id = Some(option.question_id);
            row.option_text = option.option_text;
            row.clone()
        }))
    }

    async fn delete(&mut self, id: i32) -> Result<bool, Error> {
        Ok(self.staged.options.rows.remove(&id).is_some())
    }
}

impl AnswerCommon for MemoryTx {
    async fn list(&mut self) -> Result<Vec<Answer>, Error> {
        Ok(self.staged.answers.rows.values().cloned().collect())
    }

    async fn get(&mut self, id: i32) -> Result<Option<Answer>, Error> {
        Ok(self.staged.answers.rows.get(&id).cloned())
    }

    async fn insert(&mut self, answer: AnswerCreate) -> Result<Answer, Error> {
        self.check_question("question_id", answer.question_id)?;
        if !self.staged.users.rows.contains_key(&answer.user_id) {
            return Err(fk_violation("user", "user_id", answer.user_id));
        }
        let id = self.staged.answers.next_id();
        let answer = Answer {
            id,
            selected_option: answer.selected_option,
            question_id: Some(answer.question_id),
            user_id: Some(answer.user_id),
        };
        self.staged.answers.rows.insert(id, answer.clone());
        Ok(answer)
    }

    async fn update(&mut self, id: i32, answer: AnswerCreate) -> Result<Option<Answer>, Error> {
        if !self.staged.answers.rows.contains_key(&id) {
            return Ok(None);
        }
        self.check_question("question_id", answer.question_id)?;
        Ok(self.staged.answers.rows.get_mut(&id).map(|row| {
            row.selected_option = answer.selected_option;
            row.question_id = Some(answer.question_id);
            row.clone()
        }))
    }

    async fn delete(&mut self, id: i32) -> Result<bool, Error> {
        Ok(self.staged.answers.rows.remove(&id).is_some())
    }
}

impl Store for MemoryTx {}

impl TxStore for MemoryTx {
    async fn commit(self) -> Result<(), Error> {
        let MemoryTx { mut shared, staged } = self;
        *shared = staged;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    async fn add_user(manager: &MemoryManager, name: &str) -> i32 {
        let mut tx = manager.begin().await.unwrap();
        let user = UserCommon::insert(&mut tx, UserCreate { name: name.into(), email: None }).await.unwrap();
        tokio::task::yield_now().await;
        tx.commit().await.unwrap();
        user.id
    }

    #[actix_web::test]
    async fn test_overlapping_transactions_keep_both_rows() {
        let manager = MemoryManager::new();
        let (a, b) = tokio::join!(add_user(&manager, "a"), add_user(&manager, "b"));
        assert_ne!(a, b);
        let mut tx = manager.begin().await.unwrap();
        let mut names: Vec<String> = UserCommon::list(&mut tx).await.unwrap().into_iter().map(|u| u.name).collect();
        names.sort();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[actix_web::test]
    async fn test_dropped_transaction_publishes_nothing() {
        let manager = MemoryManager::new();
        {
            let mut tx = manager.begin().await.unwrap();
            UserCommon::insert(&mut tx, UserCreate { name: "gone".into(), email: None }).await.unwrap();
        }
        let mut tx = manager.begin().await.unwrap();
        assert!(UserCommon::list(&mut tx).await.unwrap().is_empty());
    }
}
