pub mod header;
pub mod markdown;
pub mod page;
pub mod viewport;
pub mod widgets;

pub use page::{create_default_registry, PageContext, PageRegistry};
pub use viewport::{EguiHost, ScrollCommand, Viewport};
