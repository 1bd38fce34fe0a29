use crate::core::models::option::{Create as OptionCreate, Opt};
use crate::core::ports::repository::{OptionCommon, QuestionCommon, Store};
use crate::core::services::question::RESOURCE as QUESTION;
use crate::error::Error;

pub const RESOURCE: &str = "Options";

pub async fn list<S>(store: &mut S) -> Result<Vec<Opt>, Error>
where
    S: Store,
{
    OptionCommon::list(store).await
}

pub async fn get<S>(store: &mut S, id: i32) -> Result<Opt, Error>
where
    S: Store,
{
    OptionCommon::get(store, id).await?.ok_or(Error::NotFound(RESOURCE))
}

pub async fn options_of_question<S>(store: &mut S, question_id: i32) -> Result<Vec<Opt>, Error>
where
    S: Store,
{
    if QuestionCommon::get(store, question_id).await?.is_none() {
        return Err(Error::NotFound(QUESTION));
    }
    OptionCommon::of_question(store, question_id).await
}

pub async fn create<S>(store: &mut S, option: OptionCreate) -> Result<Opt, Error>
where
    S: Store,
{
    OptionCommon::insert(store, option).await
}

pub async fn update<S>(store: &mut S, id: i32, option: OptionCreate) -> Result<Opt, Error>
where
    S: Store,
{
    OptionCommon::update(store, id, option).await?.ok_or(Error::NotFound(RESOURCE))
}

pub async fn delete<S>(store: &mut S, id: i32) -> Result<(), Error>
where
    S: Store,
{
    if !OptionCommon::delete(store, id).await? {
        return Err(Error::NotFound(RESOURCE));
    }
    Ok(())
}
