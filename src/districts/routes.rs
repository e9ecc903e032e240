use crate::db;
use crate::error_handler::CustomError;
use actix_web::{delete, get, post, put, web, HttpResponse};

use super::{District, DistrictDetails, InsertableDistrict};

#[post("/districts/")]
async fn create(
    pool: web::Data<db::Pool>,
    district: web::Json<InsertableDistrict>,
) -> Result<HttpResponse, CustomError> {
    let mut conn = db::connection(&pool)?;
    District::create(&mut conn, district.into_inner())?;
    Ok(HttpResponse::Ok().body("District Successfully Added"))
}

#[get("/districts/{district_id}/")]
async fn get(
    pool: web::Data<db::Pool>,
    district_id: web::Path<i32>,
) -> Result<HttpResponse, CustomError> {
    let mut conn = db::connection(&pool)?;
    match District::find(&mut conn, district_id.into_inner())? {
        Some(district) => Ok(HttpResponse::Ok().json(district)),
        None => Err(CustomError::new(404, String::from("District not found"))),
    }
}

#[get("/districts/{district_id}/details/")]
async fn get_details(
    pool: web::Data<db::Pool>,
    district_id: web::Path<i32>,
) -> Result<HttpResponse, CustomError> {
    let mut conn = db::connection(&pool)?;
    match District::state_name(&mut conn, district_id.into_inner())? {
        Some(state_name) => Ok(HttpResponse::Ok().json(DistrictDetails { state_name })),
        None => Err(CustomError::new(404, String::from("District not found"))),
    }
}

#[put("/districts/{district_id}/")]
async fn update(
    pool: web::Data<db::Pool>,
    district_id: web::Path<i32>,
    district: web::Json<InsertableDistrict>,
) -> Result<HttpResponse, CustomError> {
    let mut conn = db::connection(&pool)?;
    District::update(&mut conn, district_id.into_inner(), district.into_inner())?;
    Ok(HttpResponse::Ok().body("District updated successfully"))
}

#[delete("/districts/{district_id}/")]
async fn delete(
    pool: web::Data<db::Pool>,
    district_id: web::Path<i32>,
) -> Result<HttpResponse, CustomError> {
    let mut conn = db::connection(&pool)?;
    District::delete(&mut conn, district_id.into_inner())?;
    Ok(HttpResponse::Ok().body("District deleted successfully"))
}

pub fn init_routes(config: &mut web::ServiceConfig) {
    config.service(create);
    config.service(get);
    config.service(get_details);
    config.service(update);
    config.service(delete);
}
