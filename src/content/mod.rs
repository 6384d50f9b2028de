// Static site copy: home sections, project cards and case studies
pub mod assets;
pub mod case_studies;
pub mod home;
pub mod projects;

pub use assets::AssetCatalog;
pub use case_studies::{case_study, CaseStudy};
pub use projects::{ImageSide, ProjectCard, PROJECTS};
