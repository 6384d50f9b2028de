// Application shell: owns navigation state and draws the current page

use crate::config::Config;
use crate::content::{home, AssetCatalog};
use crate::layout;
use crate::message::Action;
use crate::state::{
    NavigationController, NavigationHost, PageId, ScrollBehavior, SessionHistory, UIState,
};
use crate::style::Theme;
use crate::view::{
    create_default_registry, EguiHost, PageContext, PageRegistry, ScrollCommand, Viewport,
};
use eframe::egui;
use std::cell::RefCell;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub struct Portfolio {
    pub config: Config,
    pub ui: UIState,
    pub controller: NavigationController,
    pub history: SessionHistory,
    pub viewport: RefCell<Viewport>,
    pub registry: PageRegistry,
    pub assets: AssetCatalog,
    last_title: String,
}

impl Portfolio {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        let app = Self::with_config(config);
        cc.egui_ctx.set_visuals(app.ui.theme.visuals());
        app
    }

    /// Everything except the egui context setup.
    pub fn with_config(config: Config) -> Self {
        let theme = Theme::from_config(&config.theme.mode);
        let assets = AssetCatalog::new(config.assets.dir.clone());
        info!(assets = %assets.dir().display(), "starting portfolio");

        let mut app = Self {
            controller: NavigationController::new(config.navigation.settings()),
            ui: UIState::new(theme),
            history: SessionHistory::new(),
            viewport: RefCell::new(Viewport::new()),
            registry: create_default_registry(),
            assets,
            config,
            last_title: String::new(),
        };
        app.with_host(|controller, host| controller.initialize(host));
        app
    }

    pub fn current_page(&self) -> PageId {
        self.controller.current_page()
    }

    /// Run `f` with the controller and the host it drives.
    pub fn with_host<R>(
        &mut self,
        f: impl FnOnce(&mut NavigationController, &mut EguiHost<'_>) -> R,
    ) -> R {
        let mut host = EguiHost {
            history: &mut self.history,
            viewport: self.viewport.get_mut(),
        };
        f(&mut self.controller, &mut host)
    }

    fn history_back(&mut self) {
        let offset = self.viewport.get_mut().offset();
        self.history.save_scroll_offset(offset);
        if !self.history.go_back() {
            debug!(entries = self.history.len(), "already at oldest history entry");
        }
    }

    fn history_forward(&mut self) {
        let offset = self.viewport.get_mut().offset();
        self.history.save_scroll_offset(offset);
        if !self.history.go_forward() {
            debug!(entries = self.history.len(), "already at newest history entry");
        }
    }

    /// Deliver back/forward events and restore the entry's scroll offset.
    pub fn drain_history_pops(&mut self) {
        for entry in self.history.take_pops() {
            self.controller.on_history_popped(Some(&entry));
            self.viewport
                .get_mut()
                .request(ScrollCommand::Offset(entry.scroll_offset));
            self.ui.menu_open = false;
        }
    }

    pub fn apply_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Navigate(page) => {
                self.ui.menu_open = false;
                self.with_host(|controller, host| controller.navigate_to(host, page));
            }
            Action::HomeTop => {
                self.ui.menu_open = false;
                self.with_host(|controller, host| {
                    controller.navigate_to(host, PageId::Home);
                    host.scroll_to_top(ScrollBehavior::Smooth);
                });
            }
            Action::ScrollToAnchor(anchor) => {
                self.ui.menu_open = false;
                self.with_host(|controller, host| controller.navigate_to_anchor(host, anchor, now));
            }
            Action::NextStudy => {
                if !self.with_host(|controller, host| controller.go_to_next_study(host)) {
                    debug!(page = %self.current_page(), "no next case study");
                }
            }
            Action::BackFromStudy => {
                if !self.with_host(|controller, host| controller.go_back_from_study(host, now)) {
                    debug!(page = %self.current_page(), "not on a case study");
                }
            }
            Action::HistoryBack => self.history_back(),
            Action::HistoryForward => self.history_forward(),
            Action::ToggleMenu => self.ui.toggle_menu(),
            Action::CloseMenu => self.ui.menu_open = false,
            Action::OpenLink(url) => {
                match open::that(&url) {
                    Ok(()) => self.ui.set_info(format!("Opened {}", url)),
                    Err(e) => {
                        warn!(%url, error = %e, "could not open link");
                        self.ui.set_error(format!("Could not open link: {}", e));
                    }
                }
            }
        }
    }

    fn window_title(&self) -> String {
        match self.current_page() {
            PageId::Home => home::OWNER.to_string(),
            page => format!("{} · {}", page.title(), home::OWNER),
        }
    }

    fn request_follow_up_frame(&mut self, ctx: &egui::Context, next_poll: Option<Duration>) {
        let settings = self.config.navigation.settings();
        if self.controller.has_pending_scroll() {
            if settings.wait_for_mount {
                // The next frame reports the mount, the one after scrolls
                ctx.request_repaint();
            } else {
                ctx.request_repaint_after(next_poll.unwrap_or(settings.settle_delay));
            }
        }
        if self.viewport.get_mut().command().is_some() {
            ctx.request_repaint();
        }
    }
}

impl eframe::App for Portfolio {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.ui.clear_expired_messages(layout::MESSAGE_TIMEOUT_SECS);
        self.handle_input(ctx, now);
        self.drain_history_pops();

        let page = self.current_page();
        self.viewport.get_mut().begin_frame(page);
        let next_poll = self.with_host(|controller, host| controller.poll(host, now));

        let palette = self.ui.theme.palette();
        let narrow = layout::is_narrow(ctx);

        // Deferred actions
        let actions = RefCell::new(Vec::new());

        if page.shows_header() {
            self.render_header(ctx, &palette, narrow, &actions);
        }
        self.render_status(ctx);

        let forced_offset = self.viewport.get_mut().take_forced_offset();
        let context = PageContext {
            palette,
            assets: &self.assets,
            contact: &self.config.contact,
            narrow,
            viewport: &self.viewport,
            actions: &actions,
        };

        let output = egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(palette.surface_primary))
            .show(ctx, |ui| {
                let mut area = egui::ScrollArea::vertical()
                    .id_salt("page_scroll")
                    .auto_shrink([false, false]);
                if let Some(offset) = forced_offset {
                    area = area.vertical_scroll_offset(offset);
                }
                area.show(ui, |ui| {
                    self.viewport.borrow_mut().apply_smooth_top(ui);
                    self.registry.render(ui, page, &context)
                })
            })
            .inner;

        self.viewport.get_mut().end_frame(output.state.offset.y);
        if output.inner {
            self.controller.content_mounted(page);
        }

        for action in actions.into_inner() {
            self.apply_action(action, now);
        }
        self.request_follow_up_frame(ctx, next_poll);

        let title = self.window_title();
        if title != self.last_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.last_title = title;
        }
    }
}

impl Drop for Portfolio {
    fn drop(&mut self) {
        self.with_host(|controller, host| controller.teardown(host));
    }
}
