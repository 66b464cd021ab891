use eframe::egui;
use registration::{UserGallery, UserRecord};

const CARD_WIDTH: f32 = 260.0;

/// Returns true when the user asked for a refresh.
pub fn render_gallery(ui: &mut egui::Ui, gallery: &UserGallery) -> bool {
    let mut refresh = false;

    ui.horizontal(|ui| {
        ui.heading("Registered Users");
        if ui
            .add_enabled(!gallery.is_loading, egui::Button::new("🔄 Refresh"))
            .clicked()
        {
            refresh = true;
        }
        if gallery.is_loading {
            ui.spinner();
            ui.label("Loading users...");
        }
    });

    if let Some(error) = &gallery.error {
        ui.colored_label(egui::Color32::RED, format!("❌ {}", error));
    }
    ui.separator();

    if gallery.users.is_empty() && !gallery.is_loading {
        ui.label("No users registered yet.");
        return refresh;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            for user in &gallery.users {
                render_card(ui, user);
            }
        });
    });

    refresh
}

fn render_card(ui: &mut egui::Ui, user: &UserRecord) {
    ui.group(|ui| {
        ui.set_width(CARD_WIDTH);
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(user.display_name()).strong().size(16.0));
            if let Some(occupation) = user.occupation() {
                ui.label(format!("💼 {}", occupation));
            }
            if let Some(email) = user.email() {
                ui.label(format!("✉ {}", email));
            }
            if user.notifications_enabled() {
                ui.colored_label(egui::Color32::GREEN, "🔔 Notifications: Enabled");
            } else {
                ui.colored_label(egui::Color32::RED, "🔕 Notifications: Disabled");
            }
            ui.label(format!("🎨 Theme: {}", user.theme_label()));
        });
    });
}
