// Page view trait and the context shared by every page

use crate::config::ContactConfig;
use crate::content::AssetCatalog;
use crate::message::Action;
use crate::state::PageId;
use crate::style::Palette;
use crate::view::viewport::Viewport;
use eframe::egui;
use std::cell::RefCell;

/// Context passed to page views containing shared resources
pub struct PageContext<'a> {
    pub palette: Palette,
    pub assets: &'a AssetCatalog,
    pub contact: &'a ContactConfig,
    pub narrow: bool,
    pub viewport: &'a RefCell<Viewport>,
    pub actions: &'a RefCell<Vec<Action>>,
}

impl PageContext<'_> {
    /// Queue an action for after the frame.
    pub fn emit(&self, action: Action) {
        self.actions.borrow_mut().push(action);
    }

    /// Lay out `add_contents` as the element `id` so it can be scrolled to.
    pub fn anchor<R>(
        &self,
        ui: &mut egui::Ui,
        id: &str,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> R {
        let response = ui.scope(add_contents);
        self.viewport
            .borrow_mut()
            .place(ui, id, response.response.rect);
        response.inner
    }
}

/// Trait for page views
///
/// Each view renders the static content for one or more pages; the
/// registry picks the first view that claims the current page.
pub trait PageView {
    /// Name of this view, used in render traces
    fn name(&self) -> &str;

    fn can_render(&self, page: PageId) -> bool;

    fn render(&self, ui: &mut egui::Ui, page: PageId, context: &PageContext);
}
