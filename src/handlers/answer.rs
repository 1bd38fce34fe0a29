use crate::actix_web::web::{Data, Json, Path};
use crate::core::models::answer::{Answer, Create as AnswerCreate};
use crate::core::ports::repository::{Manager, TxStore};
use crate::core::services::answer as service;
use crate::error::Error;
use crate::response::DeleteResponse;

pub async fn list<M>(manager: Data<M>) -> Result<Json<Vec<Answer>>, Error>
where
    M: Manager + 'static,
{
    let mut tx = manager.begin().await?;
    let answers = service::list(&mut tx).await?;
    tx.commit().await?;
    Ok(Json(answers))
}

pub async fn detail<M>(manager: Data<M>, id: Path<(i32,)>) -> Result<Json<Answer>, Error>
where
    M: Manager + 'static,
{
    let id = id.into_inner().0;
    let mut tx = manager.begin().await?;
    let answer = service::get(&mut tx, id).await?;
    tx.commit().await?;
    Ok(Json(answer))
}

pub async fn create<M>(manager: Data<M>, Json(answer): Json<AnswerCreate>) -> Result<Json<Answer>, Error>
where
    M: Manager + 'static,
{
    let mut tx = manager.begin().await?;
    let answer = service::create(&mut tx, answer).await?;
    tx.commit().await?;
    Ok(Json(answer))
}

pub async fn update<M>(manager: Data<M>, id: Path<(i32,)>, Json(answer): Json<AnswerCreate>) -> Result<Json<Answer>, Error>
where
    M: Manager + 'static,
{
    let id = id.into_inner().0;
    let mut tx = manager.begin().await?;
    let answer = service::update(&mut tx, id, answer).await?;
    tx.commit().await?;
    Ok(Json(answer))
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
