#![allow(async_fn_in_trait)]

extern crate actix_web;
extern crate dotenv;
extern crate env_logger;
extern crate log;
extern crate serde;
extern crate sqlx;
extern crate thiserror;

mod config;
mod core;
mod database;
mod error;
mod handlers;
mod response;

use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use config::Config;
use database::sqlx::PgSqlxManager;
use error::Error;
use log::info;

#[actix_web::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("actix_web=info,quizapi=info")).init();
    let config = Config::from_env()?;
    let pool = database::sqlx::connect(&config).await?;
    database::schema::create_tables(&pool).await?;
    let manager = Data::new(PgSqlxManager::new(pool));
    info!("listening on {}:{}", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(manager.clone())
            .configure(handlers::routes::<PgSqlxManager>)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;
    Ok(())
}
