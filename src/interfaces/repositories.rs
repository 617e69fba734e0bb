pub mod message;
pub mod portfolio;
pub mod sqlx_repo;
