use crate::core::models::answer::{Answer, Create as AnswerCreate};
use crate::core::ports::repository::{AnswerCommon, Store};
use crate::error::Error;

pub const RESOURCE: &str = "Answers";

pub async fn list<S>(store: &mut S) -> Result<Vec<Answer>, Error>
where
    S: Store,
{
    AnswerCommon::list(store).await
}

pub async fn get<S>(store: &mut S, id: i32) -> Result<Answer, Error>
where
    S: Store,
{
    AnswerCommon::get(store, id).await?.ok_or(Error::NotFound(RESOURCE))
}

pub async fn create<S>(store: &mut S, answer: AnswerCreate) -> Result<Answer, Error>
where
    S: Store,
{
    AnswerCommon::insert(store, answer).await
}

pub async fn update<S>(store: &mut S, id: i32, answer: AnswerCreate) -> Result<Answer, Error>
where
    S: Store,
{
    AnswerCommon::update(store, id, answer).await?.ok_or(Error::NotFound(RESOURCE))
}

pub async fn delete<S>(store: &mut S, id: i32) -> Result<(), Error>
where
    S: Store,
{
    if !AnswerCommon::delete(store, id).await? {
        return Err(Error::NotFound(RESOURCE));
    }
    Ok(())
}
