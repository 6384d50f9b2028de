// Page rendering for the portfolio
//
// Pages are drawn by PageView implementations looked up in a PageRegistry,
// so the application shell only ever asks "draw the current page".

mod handler;
mod handlers;
mod registry;

pub use handler::PageContext;
pub use handlers::*;
pub use registry::PageRegistry;

/// Registry with a view for every page of the site
pub fn create_default_registry() -> PageRegistry {
    let mut registry = PageRegistry::new();
    registry.register(Box::new(HomePage::new()));
    registry.register(Box::new(ContactPage::new()));
    registry.register(Box::new(CaseStudyPage::new()));
    registry
}
