pub mod history;
pub mod host;
pub mod navigation;
pub mod page;
pub mod ui;

pub use history::{HistoryEntry, SessionHistory};
pub use host::{NavigationHost, ScrollBehavior, ScrollBlock, ScrollOptions};
pub use navigation::{NavigationController, NavigationSettings};
pub use page::PageId;
pub use ui::UIState;
