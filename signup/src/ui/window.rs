//! # Native Window
//!
//! eframe entry point: owns the [`App`] and the toast layer and drives one
//! tick plus one render per frame.

use std::time::Duration;

use crate::app::App;
use crate::config::FormConfig;
use crate::ui::theme::Theme;
use crate::ui::widgets::notifications::NotificationManager;

/// Repaint cadence while a submission is in flight
const IN_FLIGHT_REPAINT: Duration = Duration::from_millis(50);

pub const WINDOW_TITLE: &str = "Sign Up";

pub struct SignupWindow {
    app: App,
    notifications: NotificationManager,
}

impl SignupWindow {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &FormConfig) -> Self {
        Theme::apply(&cc.egui_ctx);

        Self {
            app: App::new(config),
            notifications: NotificationManager::new(),
        }
    }
}

impl eframe::App for SignupWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();
        crate::ui::render(ctx, &mut self.app, &mut self.notifications);

        // Results arrive from the runtime, not from input
        if self.app.is_submitting() {
            ctx.request_repaint_after(IN_FLIGHT_REPAINT);
        }
    }
}

/// Native window options
pub fn native_options() -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([420.0, 640.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    }
}
