use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxPortfolioRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxMessageRepo {
    pub pool: PgPool,
}
