use crate::{
    entities::{
        certification::Certification,
        experience::Experience,
        project::Project,
        skill::Skill,
    },
    errors::AppError,
    repositories::portfolio::PortfolioRepository,
};

pub struct PortfolioHandler<R>
where
    R: PortfolioRepository,
{
    pub portfolio_repo: R,
}

impl<R> PortfolioHandler<R>
where
    R: PortfolioRepository,
{
    pub fn new(portfolio_repo: R) -> Self {
        PortfolioHandler { portfolio_repo }
    }

    /// Lists every project in insertion order
    pub async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let projects = self.portfolio_repo.list_projects().await?;
        tracing::debug!(count = projects.len(), "Fetched projects");
        Ok(projects)
    }

    pub async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        let skills = self.portfolio_repo.list_skills().await?;
        tracing::debug!(count = skills.len(), "Fetched skills");
        Ok(skills)
    }

    pub async fn list_experience(&self) -> Result<Vec<Experience>, AppError> {
        let experience = self.portfolio_repo.list_experience().await?;
        tracing::debug!(count = experience.len(), "Fetched experience");
        Ok(experience)
    }

    pub async fn list_certifications(&self) -> Result<Vec<Certification>, AppError> {
        let certifications = self.portfolio_repo.list_certifications().await?;
        tracing::debug!(count = certifications.len(), "Fetched certifications");
        Ok(certifications)
    }
}
