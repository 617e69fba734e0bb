use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    entities::{
        certification::{Certification, NewCertification},
        experience::{Experience, NewExperience},
        project::{NewProject, Project},
        skill::{NewSkill, Skill},
    },
    errors::AppError,
    repositories::sqlx_repo::SqlxPortfolioRepo,
};

/// Read-all and insert access to the four portfolio tables.
///
/// Lists come back in insertion order. There is no update or delete.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError>;
    async fn list_experience(&self) -> Result<Vec<Experience>, AppError>;
    async fn list_certifications(&self) -> Result<Vec<Certification>, AppError>;

    async fn create_project(&self, project: &NewProject) -> Result<Project, AppError>;
    async fn create_skill(&self, skill: &NewSkill) -> Result<Skill, AppError>;
    async fn create_experience(&self, exp: &NewExperience) -> Result<Experience, AppError>;
    async fn create_certification(&self, cert: &NewCertification) -> Result<Certification, AppError>;

    /// Whether at least one project row exists
    async fn has_projects(&self) -> Result<bool, AppError>;

    async fn check_connection(&self) -> Result<(), AppError>;
}

impl SqlxPortfolioRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxPortfolioRepo { pool }
    }
}

#[async_trait]
impl PortfolioRepository for SqlxPortfolioRepo {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, title, description, tech_stack, repo_url, demo_url, image_url, highlights
            FROM projects
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        let skills = sqlx::query_as::<_, Skill>(
            r#"SELECT id, name, category, proficiency FROM skills ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(skills)
    }

    async fn list_experience(&self) -> Result<Vec<Experience>, AppError> {
        let experience = sqlx::query_as::<_, Experience>(
            r#"
            SELECT id, company, role, location, period, description
            FROM experience
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(experience)
    }

    async fn list_certifications(&self) -> Result<Vec<Certification>, AppError> {
        let certifications = sqlx::query_as::<_, Certification>(
            r#"SELECT id, name, issuer, verification_url FROM certifications ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(certifications)
    }

    async fn create_project(&self, project: &NewProject) -> Result<Project, AppError> {
        let created = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (title, description, tech_stack, repo_url, demo_url, image_url, highlights)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, title, description, tech_stack, repo_url, demo_url, image_url, highlights
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.tech_stack)
        .bind(&project.repo_url)
        .bind(&project.demo_url)
        .bind(&project.image_url)
        .bind(&project.highlights)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn create_skill(&self, skill: &NewSkill) -> Result<Skill, AppError> {
        let created = sqlx::query_as::<_, Skill>(
            r#"
            INSERT INTO skills (name, category, proficiency)
            VALUES ($1, $2, $3)
            RETURNING id, name, category, proficiency
            "#,
        )
        .bind(&skill.name)
        .bind(&skill.category)
        .bind(skill.proficiency)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn create_experience(&self, exp: &NewExperience) -> Result<Experience, AppError> {
        let created = sqlx::query_as::<_, Experience>(
            r#"
            INSERT INTO experience (company, role, location, period, description)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, company, role, location, period, description
            "#,
        )
        .bind(&exp.company)
        .bind(&exp.role)
        .bind(&exp.location)
        .bind(&exp.period)
        .bind(&exp.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn create_certification(&self, cert: &NewCertification) -> Result<Certification, AppError> {
        let created = sqlx::query_as::<_, Certification>(
            r#"
            INSERT INTO certifications (name, issuer, verification_url)
            VALUES ($1, $2, $3)
            RETURNING id, name, issuer, verification_url
            "#,
        )
        .bind(&cert.name)
        .bind(&cert.issuer)
        .bind(&cert.verification_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn has_projects(&self) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT 1 FROM projects)"#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl<T> PortfolioRepository for Arc<T>
where
    T: PortfolioRepository + ?Sized,
{
    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        (**self).list_projects().await
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        (**self).list_skills().await
    }

    async fn list_experience(&self) -> Result<Vec<Experience>, AppError> {
        (**self).list_experience().await
    }

    async fn list_certifications(&self) -> Result<Vec<Certification>, AppError> {
        (**self).list_certifications().await
    }

    async fn create_project(&self, project: &NewProject) -> Result<Project, AppError> {
        (**self).create_project(project).await
    }

    async fn create_skill(&self, skill: &NewSkill) -> Result<Skill, AppError> {
        (**self).create_skill(skill).await
    }

    async fn create_experience(&self, exp: &NewExperience) -> Result<Experience, AppError> {
        (**self).create_experience(exp).await
    }

    async fn create_certification(&self, cert: &NewCertification) -> Result<Certification, AppError> {
        (**self).create_certification(cert).await
    }

    async fn has_projects(&self) -> Result<bool, AppError> {
        (**self).has_projects().await
    }

    async fn check_connection(&self) -> Result<(), AppError> {
        (**self).check_connection().await
    }
}
