use crate::db;
use crate::error_handler::CustomError;
use actix_web::{get, web, HttpResponse};

use super::{State, StateStats};

#[get("/states/")]
async fn get_all(pool: web::Data<db::Pool>) -> Result<HttpResponse, CustomError> {
    let mut conn = db::connection(&pool)?;
    let states = State::find_all(&mut conn)?;
    Ok(HttpResponse::Ok().json(states))
}

#[get("/states/{state_id}/")]
async fn get(
    pool: web::Data<db::Pool>,
    state_id: web::Path<i32>,
) -> Result<HttpResponse, CustomError> {
    let mut conn = db::connection(&pool)?;
    match State::find(&mut conn, state_id.into_inner())? {
        Some(state) => Ok(HttpResponse::Ok().json(state)),
        None => Err(CustomError::new(404, String::from("State not found"))),
    }
}

#[get("/states/{state_id}/stats/")]
async fn get_stats(
    pool: web::Data<db::Pool>,
    state_id: web::Path<i32>,
) -> Result<HttpResponse, CustomError> {
    let mut conn = db::connection(&pool)?;
    let stats = StateStats::for_state(&mut conn, state_id.into_inner())?;
    Ok(HttpResponse::Ok().json(stats))
}

pub fn init_routes(config: &mut web::ServiceConfig) {
    config.service(get_all);
    config.service(get);
    config.service(get_stats);
}
