use crate::core::models::user::{Create as UserCreate, User};
use crate::core::ports::repository::{Store, UserCommon};
use crate::error::Error;

pub const RESOURCE: &str = "User";

pub async fn list<S>(store: &mut S) -> Result<Vec<User>, Error>
where
    S: Store,
{
    UserCommon::list(store).await
}

pub async fn get<S>(store: &mut S, id: i32) -> Result<User, Error>
where
    S: Store,
{
    UserCommon::get(store, id).await?.ok_or(Error::NotFound(RESOURCE))
}

pub async fn create<S>(store: &mut S, user: UserCreate) -> Result<User, Error>
where
    S: Store,
{
    UserCommon::insert(store, user).await
}

pub async fn update<S>(store: &mut S, id: i32, user: UserCreate) -> Result<User, Error>
where
    S: Store,
{
    UserCommon::update(store, id, user).await?.ok_or(Error::NotFound(RESOURCE))
}

pub async fn delete<S>(store: &mut S, id: i32) -> Result<(), Error>
where
    S: Store,
{
    if !UserCommon::delete(store, id).await? {
        return Err(Error::NotFound(RESOURCE));
    }
    Ok(())
}
