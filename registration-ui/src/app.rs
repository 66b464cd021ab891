use std::time::{Duration, Instant};

use eframe::egui;
use registration::wizard::Route;
use registration::RegistrationConfig;

use crate::state_manager::RegistrationStateManager;
use crate::ui::{self, Actions};

/// Registration wizard plus the gallery of registered users
pub struct RegistrationApp {
    state: RegistrationStateManager,
    current_view: AppView,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum AppView {
    Wizard,
    Gallery,
}

impl RegistrationApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &RegistrationConfig) -> Self {
        log::info!("Starting registration wizard");

        Self {
            state: RegistrationStateManager::new(config),
            current_view: AppView::Wizard,
        }
    }

    fn show_gallery(&mut self) {
        self.current_view = AppView::Gallery;
        self.state.load_users();
    }
}

impl eframe::App for RegistrationApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Notification expiry and the post-submit redirect are time driven
        ctx.request_repaint_after(Duration::from_millis(100));

        if let Some(Route::Gallery) = self.state.update_from_async(Instant::now()) {
            self.show_gallery();
        }

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    if ui
                        .selectable_label(self.current_view == AppView::Wizard, "Register")
                        .clicked()
                    {
                        self.current_view = AppView::Wizard;
                        ui.close_menu();
                    }
                    if ui
                        .selectable_label(self.current_view == AppView::Gallery, "Users")
                        .clicked()
                    {
                        self.show_gallery();
                        ui.close_menu();
                    }
                });
            });
        });

        let mut actions = Actions::new();

        egui::CentralPanel::default().show(ctx, |ui| match self.current_view {
            AppView::Wizard => self.render_wizard_view(ui, &mut actions),
            AppView::Gallery => {
                if ui::gallery::render_gallery(ui, &self.state.gallery) {
                    self.state.load_users();
                }
            }
        });

        ui::toast::render_toast(ctx, self.state.snapshot.notification.as_ref(), &mut actions);

        for action in actions {
            self.state.dispatch(action);
        }
        if self.state.is_busy() {
            ctx.request_repaint();
        }
    }
}

impl RegistrationApp {
    fn render_wizard_view(&self, ui: &mut egui::Ui, actions: &mut Actions) {
        let snapshot = &self.state.snapshot;

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(egui::RichText::new("Create Your Account").size(28.0));
            });
            ui.add_space(12.0);

            ui::steps::render_step_indicator(ui, snapshot);
            ui.add_space(16.0);

            ui::steps::render_current_step(ui, snapshot, actions);
            ui.add_space(16.0);

            ui::steps::render_navigation(ui, snapshot, actions);
        });
    }
}
