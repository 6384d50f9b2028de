use crate::state::PageId;

/// Requests raised while rendering, applied once the frame is laid out
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    Navigate(PageId),
    /// Logo: home, then smooth scroll to the top
    HomeTop,
    /// "Work" / "About" links
    ScrollToAnchor(&'static str),
    /// Case study controls
    NextStudy,
    BackFromStudy,
    HistoryBack,
    HistoryForward,

    // UI
    ToggleMenu,
    CloseMenu,
    OpenLink(String),
}
