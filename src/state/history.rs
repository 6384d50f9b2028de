// Session history - entries, cursor and back/forward pop events
use super::page::PageId;
use std::collections::VecDeque;

/// A point in session history, optionally tagged with a page.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct HistoryEntry {
    pub tag: Option<String>,
    /// Vertical scroll offset when the entry was left, restored on pop
    pub scroll_offset: f32,
}

impl HistoryEntry {
    pub fn tagged(page: PageId) -> Self {
        Self {
            tag: Some(page.tag().to_string()),
            scroll_offset: 0.0,
        }
    }

    pub fn untagged() -> Self {
        Self::default()
    }

    /// The page this entry carries, if the tag names a known page.
    pub fn page(&self) -> Option<PageId> {
        self.tag.as_deref().and_then(|t| t.parse().ok())
    }
}

pub struct SessionHistory {
    pub entries: Vec<HistoryEntry>,
    pub index: usize,
    listeners: usize,
    pops: VecDeque<HistoryEntry>,
}

impl SessionHistory {
    /// Starts with a single untagged entry, like a fresh page load.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::untagged()],
            index: 0,
            listeners: 0,
            pops: VecDeque::new(),
        }
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        // Remove any forward history when pushing a new entry
        self.entries.truncate(self.index + 1);
        self.entries.push(entry);
        self.index += 1;
    }

    /// Remember where the current entry was scrolled to before leaving it.
    pub fn save_scroll_offset(&mut self, offset: f32) {
        self.entries[self.index].scroll_offset = offset;
    }

    pub fn replace(&mut self, entry: HistoryEntry) {
        self.entries[self.index] = entry;
    }

    #[cfg(test)]
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.index]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn add_listener(&mut self) {
        self.listeners += 1;
    }

    pub fn remove_listener(&mut self) {
        self.listeners = self.listeners.saturating_sub(1);
    }

    pub fn has_listener(&self) -> bool {
        self.listeners > 0
    }

    pub fn go_back(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            self.emit_pop();
            true
        } else {
            false
        }
    }

    pub fn go_forward(&mut self) -> bool {
        if self.index + 1 < self.entries.len() {
            self.index += 1;
            self.emit_pop();
            true
        } else {
            false
        }
    }

    /// Drains pop events queued since the last call.
    pub fn take_pops(&mut self) -> Vec<HistoryEntry> {
        self.pops.drain(..).collect()
    }

    fn emit_pop(&mut self) {
        // Nobody listening: the event is lost, same as a browser popstate
        if self.has_listener() {
            self.pops.push_back(self.entries[self.index].clone());
        }
    }
}

impl Default for SessionHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut history = SessionHistory::new();
        history.push(HistoryEntry::tagged(PageId::CaseStudyA));
        history.push(HistoryEntry::tagged(PageId::CaseStudyB));
        assert!(history.go_back());
        history.push(HistoryEntry::tagged(PageId::Contact));

        assert_eq!(history.len(), 3);
        assert_eq!(history.current().page(), Some(PageId::Contact));
        assert!(!history.go_forward());
    }

    #[test]
    fn test_pops_only_delivered_to_listeners() {
        let mut history = SessionHistory::new();
        history.push(HistoryEntry::tagged(PageId::CaseStudyC));
        assert!(history.go_back());
        assert!(history.take_pops().is_empty());

        history.add_listener();
        assert!(history.go_forward());
        assert_eq!(
            history.take_pops(),
            vec![HistoryEntry::tagged(PageId::CaseStudyC)]
        );

        history.remove_listener();
        assert!(history.go_back());
        assert!(history.take_pops().is_empty());
    }

    #[test]
    fn test_pop_carries_saved_offset() {
        let mut history = SessionHistory::new();
        history.add_listener();
        history.save_scroll_offset(640.0);
        history.push(HistoryEntry::tagged(PageId::CaseStudyA));
        assert!(history.go_back());

        let pops = history.take_pops();
        assert_eq!(pops.len(), 1);
        assert_eq!(pops[0].scroll_offset, 640.0);
    }

    #[test]
    fn test_back_at_start_is_noop() {
        let mut history = SessionHistory::new();
        history.add_listener();
        assert!(!history.go_back());
        assert!(history.take_pops().is_empty());
    }

    #[test]
    fn test_unrecognized_tag_has_no_page() {
        let entry = HistoryEntry {
            tag: Some("blog".to_string()),
            scroll_offset: 0.0,
        };
        assert_eq!(entry.page(), None);
        assert_eq!(HistoryEntry::untagged().page(), None);
    }
}
