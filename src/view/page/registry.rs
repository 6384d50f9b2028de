// Page registry mapping page identity to the view that draws it

use super::handler::{PageContext, PageView};
use crate::state::PageId;
use eframe::egui;
use tracing::{trace, warn};

/// Registry for page views
pub struct PageRegistry {
    views: Vec<Box<dyn PageView>>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self { views: Vec::new() }
    }

    pub fn register(&mut self, view: Box<dyn PageView>) {
        self.views.push(view);
    }

    pub fn view_for(&self, page: PageId) -> Option<&dyn PageView> {
        self.views
            .iter()
            .find(|v| v.can_render(page))
            .map(|v| v.as_ref())
    }

    /// Render `page` with the first view that claims it.
    ///
    /// Returns false if no view is registered for the page.
    pub fn render(&self, ui: &mut egui::Ui, page: PageId, context: &PageContext) -> bool {
        match self.view_for(page) {
            Some(view) => {
                trace!(view = view.name(), %page, "render");
                view.render(ui, page, context);
                true
            }
            None => {
                warn!(%page, "no view registered");
                false
            }
        }
    }
}

impl Default for PageRegistry {
    fn default() -> Self {
        Self::new()
    }
}
