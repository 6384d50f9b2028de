// Page view implementations

mod case_study;
mod contact;
mod home;

pub use case_study::CaseStudyPage;
pub use contact::ContactPage;
pub use home::HomePage;
