use actix_web::{HttpResponse, Responder, get, web};

use crate::repository::SupabaseRepository;
use crate::services::api as api_service;

#[get("/v1/restaurants")]
pub async fn api_v1_restaurants(repo: web::Data<SupabaseRepository>) -> impl Responder {
    match api_service::list_public_restaurants(repo.get_ref()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(_) => HttpResponse::BadGateway().finish(),
    }
}
