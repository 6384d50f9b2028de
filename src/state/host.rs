// Host seam for the navigation controller: history stack and viewport
use super::history::HistoryEntry;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// Where the target lands in the viewport
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScrollBlock {
    #[default]
    Start,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ScrollOptions {
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

impl ScrollOptions {
    pub fn smooth() -> Self {
        Self::default()
    }

    pub fn smooth_centered() -> Self {
        Self {
            behavior: ScrollBehavior::Smooth,
            block: ScrollBlock::Center,
        }
    }
}

/// Primitives the controller needs from its environment.
///
/// The controller never reads the history stack back; it only learns about
/// back/forward moves through the pop events it is handed while its listener
/// is registered.
pub trait NavigationHost {
    fn push_state(&mut self, entry: HistoryEntry);

    fn replace_state(&mut self, entry: HistoryEntry);

    fn add_pop_listener(&mut self);

    fn remove_pop_listener(&mut self);

    fn scroll_to_top(&mut self, behavior: ScrollBehavior);

    /// Scroll the element with `anchor` into view.
    ///
    /// Returns false when no such element is currently laid out.
    fn scroll_into_view(&mut self, anchor: &str, options: ScrollOptions) -> bool;
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::HashSet;

    #[derive(Clone, Debug, PartialEq)]
    pub enum HostCall {
        Push(HistoryEntry),
        Replace(HistoryEntry),
        AddListener,
        RemoveListener,
        ScrollTop(ScrollBehavior),
        ScrollIntoView(String, ScrollOptions),
    }

    /// Records every call; anchors listed in `anchors` exist in the layout.
    #[derive(Default)]
    pub struct RecordingHost {
        pub calls: Vec<HostCall>,
        pub anchors: HashSet<String>,
    }

    impl RecordingHost {
        pub fn with_anchors(anchors: &[&str]) -> Self {
            Self {
                calls: Vec::new(),
                anchors: anchors.iter().map(|a| a.to_string()).collect(),
            }
        }

        pub fn pushes(&self) -> Vec<&HistoryEntry> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    HostCall::Push(e) => Some(e),
                    _ => None,
                })
                .collect()
        }

        pub fn scrolls(&self) -> Vec<(&str, ScrollOptions)> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    HostCall::ScrollIntoView(id, opts) => Some((id.as_str(), *opts)),
                    _ => None,
                })
                .collect()
        }
    }

    impl NavigationHost for RecordingHost {
        fn push_state(&mut self, entry: HistoryEntry) {
            self.calls.push(HostCall::Push(entry));
        }

        fn replace_state(&mut self, entry: HistoryEntry) {
            self.calls.push(HostCall::Replace(entry));
        }

        fn add_pop_listener(&mut self) {
            self.calls.push(HostCall::AddListener);
        }

        fn remove_pop_listener(&mut self) {
            self.calls.push(HostCall::RemoveListener);
        }

        fn scroll_to_top(&mut self, behavior: ScrollBehavior) {
            self.calls.push(HostCall::ScrollTop(behavior));
        }

        fn scroll_into_view(&mut self, anchor: &str, options: ScrollOptions) -> bool {
            self.calls
                .push(HostCall::ScrollIntoView(anchor.to_string(), options));
            self.anchors.contains(anchor)
        }
    }
}
