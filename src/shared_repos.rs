use crate::repositories::sqlx_repo::{SqlxMessageRepo, SqlxPortfolioRepo};

/// Postgres-backed repositories sharing one pool.
#[derive(Clone)]
pub struct SharedRepositories {
    pub portfolio_repo: SqlxPortfolioRepo,
    pub message_repo: SqlxMessageRepo,
}

impl SharedRepositories {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let portfolio_repo = SqlxPortfolioRepo::new(pool.clone());
        let message_repo = SqlxMessageRepo::new(pool);

        SharedRepositories {
            portfolio_repo,
            message_repo,
        }
    }
}
