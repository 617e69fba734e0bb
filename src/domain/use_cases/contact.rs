use crate::{
    entities::message::{ContactForm, ContactFormBody, Message},
    errors::AppError,
    repositories::message::MessageRepository,
};

pub struct ContactHandler<R>
where
    R: MessageRepository,
{
    pub message_repo: R,
}

impl<R> ContactHandler<R>
where
    R: MessageRepository,
{
    pub fn new(message_repo: R) -> Self {
        ContactHandler { message_repo }
    }

    /// Validates and stores a contact message. Only the first invalid field
    /// is reported.
    pub async fn submit_message(&self, body: ContactFormBody) -> Result<Message, AppError> {
        let form = ContactForm::try_from(body)?;

        let message = self.message_repo.create_message(&form).await?;

        tracing::info!(message_id = message.id, "Contact message received");
        Ok(message)
    }
}
