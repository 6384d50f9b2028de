// UI state - presentation settings and transient messages
use crate::style::Theme;
use std::time::Instant;

pub struct UIState {
    pub theme: Theme,
    pub menu_open: bool,
    pub error_message: Option<(String, Instant)>,
    pub info_message: Option<(String, Instant)>,
}

impl UIState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            menu_open: false,
            error_message: None,
            info_message: None,
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some((message, Instant::now()));
    }

    pub fn set_info(&mut self, message: String) {
        self.info_message = Some((message, Instant::now()));
    }

    pub fn clear_expired_messages(&mut self, timeout_secs: u64) {
        if let Some((_, time)) = &self.error_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.error_message = None;
            }
        }
        if let Some((_, time)) = &self.info_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.info_message = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_toggle() {
        let mut ui = UIState::new(Theme::Light);
        assert!(!ui.menu_open);
        ui.toggle_menu();
        assert!(ui.menu_open);
        ui.toggle_menu();
        assert!(!ui.menu_open);
    }

    #[test]
    fn test_fresh_messages_survive_clear() {
        let mut ui = UIState::new(Theme::Light);
        ui.set_error("Could not open link".into());
        ui.clear_expired_messages(5);
        assert!(ui.error_message.is_some());
        ui.clear_expired_messages(0);
        assert!(ui.error_message.is_none());
    }
}
