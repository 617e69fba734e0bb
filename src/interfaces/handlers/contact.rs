use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::message::{ContactFormBody, ContactResponse},
    errors::AppError,
    AppState,
};

#[instrument(skip(state, form))]
pub async fn submit_contact(
    state: web::Data<AppState>,
    form: web::Json<ContactFormBody>,
) -> Result<impl Responder, AppError> {
    state.contact_handler
        .submit_message(form.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(ContactResponse { success: true }))
}
