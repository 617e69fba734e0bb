use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod shared_repos;

pub use domain::{entities, fixtures, use_cases, validation};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, telemetry, web};

use repositories::{message::MessageRepository, portfolio::PortfolioRepository};
use shared_repos::SharedRepositories;
use use_cases::{contact::ContactHandler, portfolio::PortfolioHandler};

pub struct AppState {
    pub portfolio_handler: AppPortfolioHandler,
    pub contact_handler: AppContactHandler,
}

pub type AppPortfolioHandler = PortfolioHandler<Arc<dyn PortfolioRepository>>;
pub type AppContactHandler = ContactHandler<Arc<dyn MessageRepository>>;

impl AppState {
    pub fn new(repos: &SharedRepositories) -> Self {
        Self::with_repositories(
            Arc::new(repos.portfolio_repo.clone()),
            Arc::new(repos.message_repo.clone()),
        )
    }

    pub fn with_repositories(
        portfolio_repo: Arc<dyn PortfolioRepository>,
        message_repo: Arc<dyn MessageRepository>,
    ) -> Self {
        AppState {
            portfolio_handler: PortfolioHandler::new(portfolio_repo),
            contact_handler: ContactHandler::new(message_repo),
        }
    }
}
