use crate::actix_web::web::{Data, Json, Path};
use crate::core::models::user::{Create as UserCreate, User};
use crate::core::ports::repository::{Manager, TxStore};
use crate::core::services::user as service;
use crate::error::Error;
use crate::response::DeleteResponse;

pub async fn list<M>(manager: Data<M>) -> Result<Json<Vec<User>>, Error>
where
    M: Manager + 'static,
{
    let mut tx = manager.begin().await?;
    let users = service::list(&mut tx).await?;
    tx.commit().await?;
    Ok(Json(users))
}

pub async fn detail<M>(manager: Data<M>, id: Path<(i32,)>) -> Result<Json<User>, Error>
where
    M: Manager + 'static,
{
    let id = id.into_inner().0;
    let mut tx = manager.begin().await?;
    let user = service::get(&mut tx, id).await?;
    tx.commit().await?;
    Ok(Json(user))
}

pub async fn create<M>(manager: Data<M>, Json(user): Json<UserCreate>) -> Result<Json<User>, Error>
where
    M: Manager + 'static,
{
    let mut tx = manager.begin().await?;
    let user = service::create(&mut tx, user).await?;
    tx.commit().await?;
    Ok(Json(user))
}

pub async fn update<M>(manager: Data<M>, id: Path<(i32,)>, Json(user): Json<UserCreate>) -> Result<Json<User>, Error>
where
    M: Manager + 'static,
{
    let id = id.into_inner().0;
    let mut tx = manager.begin().await?;
    let user = service::update(&mut tx, id, user).await?;
    tx.commit().await?;
    Ok(Json(user))
}

pub async fn delete<M>(manager: Data<M>, id: Path<(i32,)>) -> Result<Json<DeleteResponse>, Error>
where
    M: Manager + 'static,
{
    let id = id.into_inner().0;
    let mut tx = manager.begin().await?;
    service::delete(&mut tx, id).await?;
    tx.commit().await?;
    Ok(Json(DeleteResponse::new(service::RESOURCE)))
}
