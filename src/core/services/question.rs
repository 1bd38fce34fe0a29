use crate::core::models::question::{Create as QuestionCreate, Question};
use crate::core::ports::repository::{QuestionCommon, Store};
use crate::error::Error;

pub const RESOURCE: &str = "Question";

pub async fn list<S>(store: &mut S) -> Result<Vec<Question>, Error>
where
    S: Store,
{
    QuestionCommon::list(store).await
}

pub async fn get<S>(store: &mut S, id: i32) -> Result<Question, Error>
where
    S: Store,
{
    QuestionCommon::get(store, id).await?.ok_or(Error::NotFound(RESOURCE))
}

pub async fn create<S>(store: &mut S, question: QuestionCreate) -> Result<Question, Error>
where
    S: Store,
{
    QuestionCommon::insert(store, question).await
}

pub async fn update<S>(store: &mut S, id: i32, question: QuestionCreate) -> Result<Question, Error>
where
    S: Store,
{
    QuestionCommon::update(store, id, question).await?.ok_or(Error::NotFound(RESOURCE))
}

pub async fn delete<S>(store: &mut S, id: i32) -> Result<(), Error>
where
    S: Store,
{
    if !QuestionCommon::delete(store, id).await? {
        return Err(Error::NotFound(RESOURCE));
    }
    Ok(())
}
