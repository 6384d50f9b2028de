// Egui-backed viewport: anchor lookup and scroll commands for the page scroll area
use crate::state::{
    HistoryEntry, NavigationHost, PageId, ScrollBehavior, ScrollBlock, ScrollOptions,
    SessionHistory,
};
use eframe::egui;
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq)]
pub enum ScrollCommand {
    Top(ScrollBehavior),
    /// Jump to a saved offset (history restoration)
    Offset(f32),
    Anchor { id: String, options: ScrollOptions },
}

/// Tracks which anchors the current page laid out and where the page
/// scroll area should move next.
///
/// Anchors recorded during a frame become visible to lookups once the frame
/// ends; switching pages forgets them until the new page has been drawn.
#[derive(Default)]
pub struct Viewport {
    page: Option<PageId>,
    anchors: HashMap<String, egui::Rect>,
    frame_anchors: HashMap<String, egui::Rect>,
    command: Option<ScrollCommand>,
    offset: f32,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_frame(&mut self, page: PageId) {
        if self.page != Some(page) {
            self.anchors.clear();
            self.page = Some(page);
        }
        self.frame_anchors.clear();
    }

    /// `offset` is the scroll area's vertical offset after this frame.
    pub fn end_frame(&mut self, offset: f32) {
        self.anchors = std::mem::take(&mut self.frame_anchors);
        self.offset = offset;
        // An anchor command whose anchor vanished this frame is dropped
        if let Some(ScrollCommand::Anchor { id, .. }) = &self.command {
            if !self.anchors.contains_key(id) {
                self.command = None;
            }
        }
    }

    pub fn has_anchor(&self, id: &str) -> bool {
        self.anchors.contains_key(id)
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn command(&self) -> Option<&ScrollCommand> {
        self.command.as_ref()
    }

    pub fn request(&mut self, command: ScrollCommand) {
        self.command = Some(command);
    }

    /// Offset the scroll area should be forced to this frame, if any.
    pub fn take_forced_offset(&mut self) -> Option<f32> {
        match self.command {
            Some(ScrollCommand::Top(ScrollBehavior::Instant)) => {
                self.command = None;
                Some(0.0)
            }
            Some(ScrollCommand::Offset(offset)) => {
                self.command = None;
                Some(offset)
            }
            _ => None,
        }
    }

    /// Call first thing inside the scroll area.
    pub fn apply_smooth_top(&mut self, ui: &mut egui::Ui) {
        if self.command == Some(ScrollCommand::Top(ScrollBehavior::Smooth)) {
            self.command = None;
            ui.scroll_to_cursor(Some(egui::Align::TOP));
        }
    }

    pub fn record(&mut self, id: &str, rect: egui::Rect) {
        self.frame_anchors.insert(id.to_string(), rect);
    }

    /// Record `rect` as the element `id` laid out this frame, scrolling to it
    /// if a command targets it.
    pub fn place(&mut self, ui: &egui::Ui, id: &str, rect: egui::Rect) {
        self.record(id, rect);

        if let Some(ScrollCommand::Anchor { id: target, options }) = &self.command {
            if target == id {
                let align = match options.block {
                    ScrollBlock::Start => egui::Align::TOP,
                    ScrollBlock::Center => egui::Align::Center,
                };
                let animation = match options.behavior {
                    ScrollBehavior::Smooth => ui.style().scroll_animation,
                    ScrollBehavior::Instant => egui::style::ScrollAnimation::none(),
                };
                ui.scroll_to_rect_animation(rect, Some(align), animation);
                self.command = None;
            }
        }
    }
}

/// The egui application's side of the navigation seam.
pub struct EguiHost<'a> {
    pub history: &'a mut SessionHistory,
    pub viewport: &'a mut Viewport,
}

impl NavigationHost for EguiHost<'_> {
    fn push_state(&mut self, entry: HistoryEntry) {
        self.history.save_scroll_offset(self.viewport.offset());
        self.history.push(entry);
    }

    fn replace_state(&mut self, entry: HistoryEntry) {
        self.history.replace(entry);
    }

    fn add_pop_listener(&mut self) {
        self.history.add_listener();
    }

    fn remove_pop_listener(&mut self) {
        self.history.remove_listener();
    }

    fn scroll_to_top(&mut self, behavior: ScrollBehavior) {
        self.viewport.request(ScrollCommand::Top(behavior));
    }

    fn scroll_into_view(&mut self, anchor: &str, options: ScrollOptions) -> bool {
        if !self.viewport.has_anchor(anchor) {
            return false;
        }
        self.viewport.request(ScrollCommand::Anchor {
            id: anchor.to_string(),
            options,
        });
        true
    }
}
