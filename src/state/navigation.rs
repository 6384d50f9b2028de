// Navigation state - current page, history integration and deferred scrolls
use super::history::HistoryEntry;
use super::host::{NavigationHost, ScrollBehavior, ScrollOptions};
use super::page::PageId;
use std::time::{Duration, Instant};
use tracing::debug;

/// A request to show a page and optionally bring an anchor on it into view.
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationIntent {
    pub target: PageId,
    pub scroll_target: Option<String>,
    /// Overrides the controller's settle delay for this request.
    pub scroll_delay: Option<Duration>,
    pub scroll: ScrollOptions,
}

impl NavigationIntent {
    pub fn page(target: PageId) -> Self {
        Self {
            target,
            scroll_target: None,
            scroll_delay: None,
            scroll: ScrollOptions::smooth(),
        }
    }

    pub fn with_anchor(mut self, anchor: impl Into<String>, scroll: ScrollOptions) -> Self {
        self.scroll_target = Some(anchor.into());
        self.scroll = scroll;
        self
    }
}

#[derive(Clone, Copy, Debug)]
pub struct NavigationSettings {
    /// How long to wait for the destination to lay out before scrolling
    pub settle_delay: Duration,
    /// Fire as soon as the destination reports it mounted, instead of
    /// always waiting out the full delay
    pub wait_for_mount: bool,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_millis(150),
            wait_for_mount: true,
        }
    }
}

#[derive(Debug)]
struct PendingScroll {
    target: PageId,
    anchor: String,
    options: ScrollOptions,
    sequence: u64,
    deadline: Instant,
    mounted: bool,
}

pub struct NavigationController {
    current_page: PageId,
    pending_scroll: Option<PendingScroll>,
    sequence: u64,
    attached: bool,
    settings: NavigationSettings,
}

impl NavigationController {
    pub fn new(settings: NavigationSettings) -> Self {
        Self {
            current_page: PageId::Home,
            pending_scroll: None,
            sequence: 0,
            attached: false,
            settings,
        }
    }

    pub fn current_page(&self) -> PageId {
        self.current_page
    }

    #[cfg(test)]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn has_pending_scroll(&self) -> bool {
        self.pending_scroll.is_some()
    }

    /// Tag the entry we were loaded on and start listening for pops.
    pub fn initialize(&mut self, host: &mut impl NavigationHost) {
        if self.attached {
            debug!("navigation controller already initialized");
            return;
        }
        host.replace_state(HistoryEntry::tagged(PageId::Home));
        host.add_pop_listener();
        self.attached = true;
    }

    pub fn teardown(&mut self, host: &mut impl NavigationHost) {
        if self.attached {
            host.remove_pop_listener();
            self.attached = false;
            self.pending_scroll = None;
        }
    }

    /// Always pushes, even when `target` is already the current page.
    pub fn navigate_to(&mut self, host: &mut impl NavigationHost, target: PageId) {
        debug!(from = %self.current_page, to = %target, "navigate");
        host.push_state(HistoryEntry::tagged(target));
        self.sequence += 1;
        self.current_page = target;
        host.scroll_to_top(ScrollBehavior::Instant);
    }

    /// Navigate, then bring the intent's anchor into view once the
    /// destination has had time to lay out.
    pub fn navigate(&mut self, host: &mut impl NavigationHost, intent: NavigationIntent, now: Instant) {
        self.navigate_to(host, intent.target);
        if let Some(anchor) = intent.scroll_target {
            let delay = intent.scroll_delay.unwrap_or(self.settings.settle_delay);
            self.pending_scroll = Some(PendingScroll {
                target: intent.target,
                anchor,
                options: intent.scroll,
                sequence: self.sequence,
                deadline: now + delay,
                mounted: false,
            });
        }
    }

    /// "Work" / "About" links: scroll in place on the home page, otherwise
    /// go home first and scroll after it settles.
    pub fn navigate_to_anchor(&mut self, host: &mut impl NavigationHost, anchor: &str, now: Instant) {
        if self.current_page == PageId::Home {
            // The user picked a new spot; older deferred scrolls are stale
            self.sequence += 1;
            if !host.scroll_into_view(anchor, ScrollOptions::smooth()) {
                debug!(anchor, "anchor not laid out, skipping scroll");
            }
            return;
        }
        self.navigate(
            host,
            NavigationIntent::page(PageId::Home).with_anchor(anchor, ScrollOptions::smooth()),
            now,
        );
    }

    /// Return home and center the card for `project_id`.
    pub fn navigate_back_to_project(
        &mut self,
        host: &mut impl NavigationHost,
        project_id: &str,
        now: Instant,
    ) {
        self.navigate(
            host,
            NavigationIntent::page(PageId::Home)
                .with_anchor(project_id, ScrollOptions::smooth_centered()),
            now,
        );
    }

    /// "Next case study" from the current page. Returns false off the ring.
    pub fn go_to_next_study(&mut self, host: &mut impl NavigationHost) -> bool {
        match self.current_page.next_study() {
            Some(next) => {
                self.navigate_to(host, next);
                true
            }
            None => false,
        }
    }

    /// Case study "back" affordance.
    pub fn go_back_from_study(&mut self, host: &mut impl NavigationHost, now: Instant) -> bool {
        match self.current_page.project_anchor() {
            Some(anchor) => {
                self.navigate_back_to_project(host, anchor, now);
                true
            }
            None => false,
        }
    }

    /// Back/forward moved to `entry`. Untagged or unknown entries mean home.
    pub fn on_history_popped(&mut self, entry: Option<&HistoryEntry>) {
        if !self.attached {
            return;
        }
        let page = entry.and_then(HistoryEntry::page).unwrap_or(PageId::Home);
        debug!(from = %self.current_page, to = %page, "history pop");
        self.sequence += 1;
        self.current_page = page;
    }

    /// The page finished laying out a frame; its anchors can now be found.
    pub fn content_mounted(&mut self, page: PageId) {
        if !self.settings.wait_for_mount {
            return;
        }
        if let Some(pending) = self.pending_scroll.as_mut() {
            if pending.target == page && pending.sequence == self.sequence {
                pending.mounted = true;
            }
        }
    }

    /// Fire a due deferred scroll. Returns how long until the pending one is
    /// due, if any remains.
    pub fn poll(&mut self, host: &mut impl NavigationHost, now: Instant) -> Option<Duration> {
        let pending = self.pending_scroll.as_ref()?;

        if pending.sequence != self.sequence {
            debug!(anchor = %pending.anchor, "discarding scroll from superseded navigation");
            self.pending_scroll = None;
            return None;
        }

        if !pending.mounted && now < pending.deadline {
            return Some(pending.deadline - now);
        }

        let pending = self.pending_scroll.take()?;
        if !host.scroll_into_view(&pending.anchor, pending.options) {
            debug!(anchor = %pending.anchor, "anchor not laid out, skipping scroll");
        }
        None
    }
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new(NavigationSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::host::testing::{HostCall, RecordingHost};
    use crate::state::host::ScrollBlock;
    use crate::state::page::{ALL_PAGES, CASE_STUDIES};

    const SETTLE: Duration = Duration::from_millis(150);

    fn timer_only() -> NavigationController {
        NavigationController::new(NavigationSettings {
            settle_delay: SETTLE,
            wait_for_mount: false,
        })
    }

    fn attached(host: &mut RecordingHost) -> NavigationController {
        let mut nav = NavigationController::default();
        nav.initialize(host);
        host.calls.clear();
        nav
    }

    #[test]
    fn test_navigate_to_pushes_one_tagged_entry() {
        for target in ALL_PAGES {
            let mut host = RecordingHost::default();
            let mut nav = attached(&mut host);
            nav.navigate_to(&mut host, target);

            assert_eq!(nav.current_page(), target);
            assert_eq!(host.pushes(), vec![&HistoryEntry::tagged(target)]);
            assert!(host
                .calls
                .contains(&HostCall::ScrollTop(ScrollBehavior::Instant)));
        }
    }

    #[test]
    fn test_navigate_to_current_page_still_pushes() {
        let mut host = RecordingHost::default();
        let mut nav = attached(&mut host);
        nav.navigate_to(&mut host, PageId::Home);
        nav.navigate_to(&mut host, PageId::Home);
        assert_eq!(host.pushes().len(), 2);
    }

    #[test]
    fn test_initialize_replaces_and_listens() {
        let mut host = RecordingHost::default();
        let mut nav = NavigationController::default();
        nav.initialize(&mut host);
        nav.initialize(&mut host);

        assert_eq!(
            host.calls,
            vec![
                HostCall::Replace(HistoryEntry::tagged(PageId::Home)),
                HostCall::AddListener,
            ]
        );
        assert!(nav.is_attached());
    }

    #[test]
    fn test_untagged_pop_after_initialize_goes_home() {
        let mut host = RecordingHost::default();
        let mut nav = attached(&mut host);
        nav.navigate_to(&mut host, PageId::Contact);
        nav.on_history_popped(Some(&HistoryEntry::untagged()));
        assert_eq!(nav.current_page(), PageId::Home);
    }

    #[test]
    fn test_pop_restores_tagged_page() {
        let mut host = RecordingHost::default();
        let mut nav = attached(&mut host);

        nav.on_history_popped(Some(&HistoryEntry::tagged(PageId::CaseStudyB)));
        assert_eq!(nav.current_page(), PageId::CaseStudyB);

        nav.on_history_popped(None);
        assert_eq!(nav.current_page(), PageId::Home);

        nav.on_history_popped(Some(&HistoryEntry::tagged(PageId::CaseStudyD)));
        nav.on_history_popped(Some(&HistoryEntry {
            tag: Some("blog".to_string()),
            scroll_offset: 0.0,
        }));
        assert_eq!(nav.current_page(), PageId::Home);
    }

    #[test]
    fn test_pop_has_no_scroll_side_effect() {
        let mut host = RecordingHost::default();
        let mut nav = attached(&mut host);
        nav.on_history_popped(Some(&HistoryEntry::tagged(PageId::CaseStudyA)));
        assert!(host.calls.is_empty());
    }

    #[test]
    fn test_pops_ignored_after_teardown() {
        let mut host = RecordingHost::default();
        let mut nav = attached(&mut host);
        nav.teardown(&mut host);
        nav.on_history_popped(Some(&HistoryEntry::tagged(PageId::CaseStudyC)));

        assert_eq!(nav.current_page(), PageId::Home);
        assert_eq!(host.calls, vec![HostCall::RemoveListener]);
    }

    #[test]
    fn test_anchor_on_home_scrolls_immediately() {
        let mut host = RecordingHost::with_anchors(&["about"]);
        let mut nav = attached(&mut host);
        nav.navigate_to_anchor(&mut host, "about", Instant::now());

        assert!(host.pushes().is_empty());
        assert_eq!(host.scrolls(), vec![("about", ScrollOptions::smooth())]);
        assert!(!nav.has_pending_scroll());
    }

    #[test]
    fn test_missing_anchor_is_silent() {
        let mut host = RecordingHost::default();
        let mut nav = attached(&mut host);
        nav.navigate_to_anchor(&mut host, "nowhere", Instant::now());
        assert_eq!(nav.current_page(), PageId::Home);
        assert!(host.pushes().is_empty());
    }

    #[test]
    fn test_anchor_from_case_study_defers_one_scroll() {
        let mut host = RecordingHost::with_anchors(&["work"]);
        let mut nav = timer_only();
        nav.initialize(&mut host);
        let start = Instant::now();
        nav.navigate_to(&mut host, PageId::CaseStudyC);
        host.calls.clear();

        nav.navigate_to_anchor(&mut host, "work", start);
        assert_eq!(nav.current_page(), PageId::Home);
        assert_eq!(host.pushes(), vec![&HistoryEntry::tagged(PageId::Home)]);
        assert!(host.scrolls().is_empty());

        assert_eq!(nav.poll(&mut host, start + Duration::from_millis(100)), Some(Duration::from_millis(50)));
        assert!(host.scrolls().is_empty());

        assert_eq!(nav.poll(&mut host, start + SETTLE), None);
        assert_eq!(nav.poll(&mut host, start + SETTLE * 2), None);
        assert_eq!(host.scrolls(), vec![("work", ScrollOptions::smooth())]);
    }

    #[test]
    fn test_back_to_project_centers_card() {
        for study in CASE_STUDIES {
            let mut host = RecordingHost::with_anchors(&["project-fundguard"]);
            let mut nav = attached(&mut host);
            let start = Instant::now();
            nav.navigate_to(&mut host, study);
            host.calls.clear();

            nav.navigate_back_to_project(&mut host, "project-fundguard", start);
            assert_eq!(nav.current_page(), PageId::Home);
            assert_eq!(host.pushes(), vec![&HistoryEntry::tagged(PageId::Home)]);

            nav.poll(&mut host, start + SETTLE);
            let scrolls = host.scrolls();
            assert_eq!(scrolls.len(), 1);
            assert_eq!(scrolls[0].0, "project-fundguard");
            assert_eq!(scrolls[0].1.block, ScrollBlock::Center);
        }
    }

    #[test]
    fn test_mount_signal_fires_before_deadline() {
        let mut host = RecordingHost::with_anchors(&["work"]);
        let mut nav = attached(&mut host);
        let start = Instant::now();
        nav.navigate_to(&mut host, PageId::Contact);
        nav.navigate_to_anchor(&mut host, "work", start);

        // A frame of the old page does not count
        nav.content_mounted(PageId::Contact);
        assert!(nav.poll(&mut host, start).is_some());

        nav.content_mounted(PageId::Home);
        assert_eq!(nav.poll(&mut host, start), None);
        assert_eq!(host.scrolls(), vec![("work", ScrollOptions::smooth())]);
    }

    #[test]
    fn test_mount_signal_ignored_in_timer_mode() {
        let mut host = RecordingHost::with_anchors(&["work"]);
        let mut nav = timer_only();
        nav.initialize(&mut host);
        let start = Instant::now();
        nav.navigate_to(&mut host, PageId::CaseStudyA);
        nav.navigate_to_anchor(&mut host, "work", start);
        nav.content_mounted(PageId::Home);

        assert!(nav.poll(&mut host, start).is_some());
        assert!(host.scrolls().is_empty());
    }

    #[test]
    fn test_superseded_scroll_is_discarded() {
        let mut host = RecordingHost::with_anchors(&["work"]);
        let mut nav = attached(&mut host);
        let start = Instant::now();
        nav.navigate_to(&mut host, PageId::CaseStudyA);
        nav.navigate_to_anchor(&mut host, "work", start);
        nav.navigate_to(&mut host, PageId::CaseStudyB);

        assert_eq!(nav.poll(&mut host, start + SETTLE), None);
        assert!(host.scrolls().is_empty());
        assert!(!nav.has_pending_scroll());
    }

    #[test]
    fn test_pop_discards_pending_scroll() {
        let mut host = RecordingHost::with_anchors(&["project-fundguard"]);
        let mut nav = timer_only();
        nav.initialize(&mut host);
        let start = Instant::now();
        nav.navigate_to(&mut host, PageId::CaseStudyA);
        nav.navigate_back_to_project(&mut host, "project-fundguard", start);

        nav.on_history_popped(Some(&HistoryEntry::tagged(PageId::CaseStudyA)));
        nav.on_history_popped(Some(&HistoryEntry::tagged(PageId::Home)));

        assert_eq!(nav.poll(&mut host, start + SETTLE), None);
        assert!(host.scrolls().is_empty());
        assert!(!nav.has_pending_scroll());
    }

    #[test]
    fn test_in_place_anchor_supersedes_pending_scroll() {
        let mut host = RecordingHost::with_anchors(&["project-fundguard", "about"]);
        let mut nav = timer_only();
        nav.initialize(&mut host);
        let start = Instant::now();
        nav.navigate_to(&mut host, PageId::CaseStudyA);
        nav.navigate_back_to_project(&mut host, "project-fundguard", start);

        nav.navigate_to_anchor(&mut host, "about", start + Duration::from_millis(50));
        assert_eq!(nav.poll(&mut host, start + SETTLE), None);
        assert_eq!(host.scrolls(), vec![("about", ScrollOptions::smooth())]);
    }

    #[test]
    fn test_intent_delay_overrides_settle_delay() {
        let mut host = RecordingHost::with_anchors(&["about"]);
        let mut nav = timer_only();
        nav.initialize(&mut host);
        let start = Instant::now();
        let intent = NavigationIntent {
            scroll_delay: Some(Duration::from_millis(400)),
            ..NavigationIntent::page(PageId::Home).with_anchor("about", ScrollOptions::smooth())
        };
        nav.navigate(&mut host, intent, start);

        assert!(nav.poll(&mut host, start + SETTLE).is_some());
        nav.poll(&mut host, start + Duration::from_millis(400));
        assert_eq!(host.scrolls().len(), 1);
    }

    #[test]
    fn test_back_pop_to_initial_entry_returns_home() {
        use crate::state::history::SessionHistory;

        let mut history = SessionHistory::new();
        let mut host = RecordingHost::default();
        let mut nav = NavigationController::default();
        nav.initialize(&mut host);
        history.replace(HistoryEntry::tagged(PageId::Home));
        history.add_listener();

        nav.navigate_to(&mut host, PageId::CaseStudyA);
        history.push(HistoryEntry::tagged(PageId::CaseStudyA));
        assert!(history.go_back());
        for entry in history.take_pops() {
            nav.on_history_popped(Some(&entry));
        }
        assert_eq!(nav.current_page(), PageId::Home);
    }

    #[test]
    fn test_next_and_back_from_study() {
        let mut host = RecordingHost::default();
        let mut nav = attached(&mut host);
        assert!(!nav.go_to_next_study(&mut host));

        nav.navigate_to(&mut host, PageId::CaseStudyE);
        assert!(nav.go_to_next_study(&mut host));
        assert_eq!(nav.current_page(), PageId::CaseStudyA);

        assert!(nav.go_back_from_study(&mut host, Instant::now()));
        assert_eq!(nav.current_page(), PageId::Home);
        assert!(nav.has_pending_scroll());
        assert!(!nav.go_back_from_study(&mut host, Instant::now()));
    }
}
