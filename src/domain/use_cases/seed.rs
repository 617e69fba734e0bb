use std::future::Future;

use crate::{
    entities::EntityKind,
    errors::{AppError, SeedError},
    fixtures::FixtureSet,
    repositories::portfolio::PortfolioRepository,
    validation::DeclaredFields,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Projects already existed; nothing was written.
    AlreadySeeded,
    Seeded(SeedSummary),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub projects: usize,
    pub skills: usize,
    pub experience: usize,
    pub certifications: usize,
}

/// Populates the portfolio tables with fixture content when they are empty.
///
/// The projects table is the source of truth for "already seeded". Inserts
/// run one row at a time; the first failure stops the run and rows written
/// before it are kept.
pub struct SeedHandler<R>
where
    R: PortfolioRepository,
{
    pub portfolio_repo: R,
    fixtures: FixtureSet,
}

impl<R> SeedHandler<R>
where
    R: PortfolioRepository,
{
    pub fn new(portfolio_repo: R) -> Self {
        Self::with_fixtures(portfolio_repo, FixtureSet::portfolio())
    }

    pub fn with_fixtures(portfolio_repo: R, fixtures: FixtureSet) -> Self {
        SeedHandler { portfolio_repo, fixtures }
    }

    pub async fn is_seeded(&self) -> Result<bool, AppError> {
        self.portfolio_repo.has_projects().await
    }

    pub async fn seed_if_empty(&self) -> Result<SeedOutcome, SeedError> {
        if self.is_seeded().await.map_err(SeedError::Check)? {
            tracing::info!("Portfolio tables already populated, skipping seed");
            return Ok(SeedOutcome::AlreadySeeded);
        }

        let repo = &self.portfolio_repo;
        let fixtures = &self.fixtures;

        let summary = SeedSummary {
            projects: insert_each(EntityKind::Project, &fixtures.projects, |p| async move {
                repo.create_project(p).await.map(|_| ())
            })
            .await?,
            skills: insert_each(EntityKind::Skill, &fixtures.skills, |s| async move {
                repo.create_skill(s).await.map(|_| ())
            })
            .await?,
            experience: insert_each(EntityKind::Experience, &fixtures.experience, |e| async move {
                repo.create_experience(e).await.map(|_| ())
            })
            .await?,
            certifications: insert_each(EntityKind::Certification, &fixtures.certifications, |c| async move {
                repo.create_certification(c).await.map(|_| ())
            })
            .await?,
        };

        tracing::info!(
            projects = summary.projects,
            skills = summary.skills,
            experience = summary.experience,
            certifications = summary.certifications,
            "Database seeded successfully"
        );

        Ok(SeedOutcome::Seeded(summary))
    }
}

async fn insert_each<'a, T, F, Fut>(
    kind: EntityKind,
    items: &'a [T],
    mut insert: F,
) -> Result<usize, SeedError>
where
    T: DeclaredFields,
    F: FnMut(&'a T) -> Fut,
    Fut: Future<Output = Result<(), AppError>>,
{
    let mut inserted = 0;

    for item in items {
        let result = match item.validate_first() {
            Ok(()) => insert(item).await,
            Err(e) => Err(e),
        };

        if let Err(source) = result {
            return Err(SeedError::PartialFailure { kind, inserted, source });
        }
        inserted += 1;
    }

    Ok(inserted)
}
