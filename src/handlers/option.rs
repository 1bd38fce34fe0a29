use crate::actix_web::web::{Data, Json, Path};
use crate::core::models::option::{Create as OptionCreate, Opt};
use crate::core::ports::repository::{Manager, TxStore};
use crate::core::services::option as service;
use crate::error::Error;
use crate::response::DeleteResponse;

pub async fn list<M>(manager: Data<M>) -> Result<Json<Vec<Opt>>, Error>
where
    M: Manager + 'static,
{
    let mut tx = manager.begin().await?;
    let opts = service::list(&mut tx).await?;
    tx.commit().await?;
    Ok(Json(opts))
}

pub async fn detail<M>(manager: Data<M>, id: Path<(i32,)>) -> Result<Json<Opt>, Error>
where
    M: Manager + 'static,
{
    let id = id.into_inner().0;
    let mut tx = manager.begin().await?;
    let opt = service::get(&mut tx, id).await?;
    tx.commit().await?;
    Ok(Json(opt))
}

/// `GET /questions/{id}/options`
pub async fn of_question<M>(manager: Data<M>, question_id: Path<(i32,)>) -> Result<Json<Vec<Opt>>, Error>
where
    M: Manager + 'static,
{
    let question_id = question_id.into_inner().0;
    let mut tx = manager.begin().await?;
    let opts = service::options_of_question(&mut tx, question_id).await?;
    tx.commit().await?;
    Ok(Json(opts))
}

pub async fn create<M>(manager: Data<M>, Json(opt): Json<OptionCreate>) -> Result<Json<Opt>, Error>
where
    M: Manager + 'static,
{
    let mut tx = manager.begin().await?;
    let opt = service::create(&mut tx, opt).await?;
    tx.commit().await?;
    Ok(Json(opt))
}

pub async fn update<M>(manager: Data<M>, id: Path<(i32,)>, Json(opt): Json<OptionCreate>) -> Result<Json<Opt>, Error>
where
    M: Manager + 'static,
{
    let id = id.into_inner().0;
    let mut tx = manager.begin().await?;
    let opt = service::update(&mut tx, id, opt).await?;
    tx.commit().await?;
    Ok(Json(opt))
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
