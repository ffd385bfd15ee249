use actix_session::Session;
use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::contact::ContactForm;
use crate::dto::contact::SubmissionStatus;
use crate::forms::contact::{ContactFormInput, ContactSubmission};
use crate::models::config::ServerConfig;
use crate::repository::SupabaseRepository;
use crate::routes::{CONTACT_PATH, base_context, redirect, render_template};
use crate::services::contact as contact_service;
use crate::submission::InFlightSubmissions;

/// Session key holding the form of the last failed submission.
pub const CONTACT_DRAFT_KEY: &str = "contact_draft";

const SUCCESS_MESSAGE: &str = "Thank you! We received your request and will get back to you soon.";
const FAILURE_MESSAGE: &str = "We could not send your request. Please try again.";

fn load_draft(session: &Session) -> Option<ContactForm> {
    session
        .get::<ContactForm>(CONTACT_DRAFT_KEY)
        .unwrap_or_else(|err| {
            log::warn!("Discarding unreadable contact draft: {err}");
            None
        })
}

fn keep_draft(session: &Session, draft: &ContactForm) {
    if let Err(err) = session.insert(CONTACT_DRAFT_KEY, draft) {
        log::error!("Failed to keep contact draft: {err}");
    }
}

#[get("/contact")]
pub async fn show_contact(
    session: Session,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = contact_service::load_contact_page(load_draft(&session));

    let mut context = base_context(&flash_messages, "contact");
    context.insert("form", &data.form);
    context.insert("form_token", &data.form_token);
    context.insert("budget_options", &data.budget_options);
    context.insert("feature_options", &data.feature_options);
    context.insert("contact_email", &server_config.contact_email);
    context.insert("contact_phone", &server_config.contact_phone);

    render_template(&tera, "contact/index.html", &context)
}

#[post("/contact")]
pub async fn submit_contact(
    session: Session,
    repo: web::Data<SupabaseRepository>,
    in_flight: web::Data<InFlightSubmissions>,
    body: web::Bytes,
) -> impl Responder {
    let input = match ContactFormInput::parse(&body) {
        Ok(input) => input,
        Err(err) => {
            log::error!("Failed to parse contact form: {err}");
            FlashMessage::error(FAILURE_MESSAGE).send();
            return redirect(CONTACT_PATH);
        }
    };

    let draft = input.to_draft();
    let submission = match ContactSubmission::try_from(input) {
        Ok(submission) => submission,
        Err(err) => {
            log::error!("Failed to validate contact form: {err}");
            keep_draft(&session, &draft);
            FlashMessage::error(format!("Please check the form: {err}")).send();
            return redirect(CONTACT_PATH);
        }
    };

    match contact_service::submit_contact(repo.get_ref(), in_flight.get_ref(), &submission).await
    {
        Ok(SubmissionStatus::Sent) => {
            session.remove(CONTACT_DRAFT_KEY);
            FlashMessage::success(SUCCESS_MESSAGE).send();
        }
        Ok(SubmissionStatus::AlreadyInFlight) => {}
        Err(err) => {
            log::error!("Form submission error: {err}");
            keep_draft(&session, &draft);
            FlashMessage::error(FAILURE_MESSAGE).send();
        }
    }

    redirect(CONTACT_PATH)
}
