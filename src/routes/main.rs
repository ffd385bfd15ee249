use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::repository::SupabaseRepository;
use crate::routes::{base_context, render_template};
use crate::services::main as main_service;

#[get("/")]
pub async fn show_index(
    repo: web::Data<SupabaseRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = main_service::load_index_page(repo.get_ref()).await;

    let mut context = base_context(&flash_messages, "index");
    context.insert("company", &data.company);
    context.insert("logo_url", data.company.logo_url());
    context.insert("restaurants", &data.restaurants);
    context.insert("directory_unavailable", &data.directory_unavailable);

    render_template(&tera, "main/index.html", &context)
}
