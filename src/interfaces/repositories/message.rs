use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    entities::message::{ContactForm, Message},
    errors::AppError,
    repositories::sqlx_repo::SqlxMessageRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Stores a validated contact message. `created_at` is assigned by the store.
    async fn create_message(&self, msg: &ContactForm) -> Result<Message, AppError>;
}

impl SqlxMessageRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxMessageRepo { pool }
    }
}

#[async_trait]
impl MessageRepository for SqlxMessageRepo {
    async fn create_message(&self, msg: &ContactForm) -> Result<Message, AppError> {
        let message = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (name, email, message)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, message, created_at
            "#,
        )
        .bind(&msg.name)
        .bind(&msg.email)
        .bind(&msg.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }
}

#[async_trait]
impl<T> MessageRepository for Arc<T>
where
    T: MessageRepository + ?Sized,
{
    async fn create_message(&self, msg: &ContactForm) -> Result<Message, AppError> {
        (**self).create_message(msg).await
    }
}
