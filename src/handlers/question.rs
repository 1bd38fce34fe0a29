use crate::actix_web::web::{Data, Json, Path};
use crate::core::models::question::{Create as QuestionCreate, Question};
use crate::core::ports::repository::{Manager, TxStore};
use crate::core::services::question as service;
use crate::error::Error;
use crate::response::DeleteResponse;

pub async fn list<M>(manager: Data<M>) -> Result<Json<Vec<Question>>, Error>
where
    M: Manager + 'static,
{
    let mut tx = manager.begin().await?;
    let questions = service::list(&mut tx).await?;
    tx.commit().await?;
    Ok(Json(questions))
}

pub async fn detail<M>(manager: Data<M>, id: Path<(i32,)>) -> Result<Json<Question>, Error>
where
    M: Manager + 'static,
{
    let id = id.into_inner().0;
    let mut tx = manager.begin().await?;
    let question = service::get(&mut tx, id).await?;
    tx.commit().await?;
    Ok(Json(question))
}

pub async fn create<M>(manager: Data<M>, Json(question): Json<QuestionCreate>) -> Result<Json<Question>, Error>
where
    M: Manager + 'static,
{
    let mut tx = manager.begin().await?;
    let question = service::create(&mut tx, question).await?;
    tx.commit().await?;
    Ok(Json(question))
}

pub async fn update<M>(manager: Data<M>, id: Path<(i32,)>, Json(question): Json<QuestionCreate>) -> Result<Json<Question>, Error>
where
    M: Manager + 'static,
{
    let id = id.into_inner().0;
    let mut tx = manager.begin().await?;
    let question = service::update(&mut tx, id, question).await?;
    tx.commit().await?;
    Ok(Json(question))
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
