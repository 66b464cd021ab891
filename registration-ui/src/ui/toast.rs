use eframe::egui;
use registration::{Notification, Severity, WizardAction};

use super::Actions;

/// Floating toast in the top-right corner.
pub fn render_toast(ctx: &egui::Context, notification: Option<&Notification>, actions: &mut Actions) {
    let Some(notification) = notification else {
        return;
    };

    let (fill, icon) = match notification.severity {
        Severity::Success => (egui::Color32::from_rgb(6, 95, 70), "✔"),
        Severity::Error => (egui::Color32::from_rgb(153, 27, 27), "⚠"),
    };

    egui::Area::new(egui::Id::new("toast"))
        .anchor(egui::Align2::RIGHT_TOP, [-16.0, 16.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::none()
                .fill(fill)
                .rounding(8.0)
                .inner_margin(egui::Margin::same(12.0))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(icon).color(egui::Color32::WHITE));
                        ui.label(egui::RichText::new(&notification.message).color(egui::Color32::WHITE));
                        if ui.small_button("✕").clicked() {
                            actions.push(WizardAction::DismissNotification);
                        }
                    });
                });
        });
}
