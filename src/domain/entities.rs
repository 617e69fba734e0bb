use derive_more::Display;

pub mod certification;
pub mod experience;
pub mod message;
pub mod project;
pub mod skill;

/// The record kinds the API stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EntityKind {
    #[display("project")]
    Project,
    #[display("skill")]
    Skill,
    #[display("experience")]
    Experience,
    #[display("certification")]
    Certification,
    #[display("message")]
    Message,
}
