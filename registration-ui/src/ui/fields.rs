use eframe::egui;
use registration::schema::{FieldErrors, FieldKind, FieldSpec, FieldValue, FormSlice, SelectOption};
use registration::wizard::{WizardState, WizardStep};
use registration::WizardAction;

use super::Actions;

/// Renders every visible field of `step` from its schema table.
pub fn render_step_form(ui: &mut egui::Ui, state: &WizardState, step: WizardStep, actions: &mut Actions) {
    let form = state.form(step);
    let enabled = !state.is_submitting;

    for spec in step.schema().fields {
        if !spec.is_visible(form) {
            continue;
        }
        ui.add_enabled_ui(enabled, |ui| {
            render_field(ui, spec, form, &state.field_errors, actions);
        });
        ui.add_space(6.0);
    }
}

fn render_field(
    ui: &mut egui::Ui,
    spec: &FieldSpec,
    form: &dyn FormSlice,
    errors: &FieldErrors,
    actions: &mut Actions,
) {
    let Some(value) = form.field(spec.name) else {
        log::warn!("Schema field {} has no backing value", spec.name);
        return;
    };

    match (spec.kind, value) {
        (FieldKind::Checkbox, FieldValue::Flag(mut checked)) => {
            if ui.checkbox(&mut checked, spec.label).changed() {
                actions.push(WizardAction::set_flag(spec.name, checked));
            }
        }
        (FieldKind::Select(options), FieldValue::Text(current)) => {
            ui.label(spec.label);
            egui::ComboBox::new(spec.name, "")
                .selected_text(option_label(options, &current))
                .width(ui.available_width().min(320.0))
                .show_ui(ui, |ui| {
                    for option in options {
                        if ui.selectable_label(current == option.value, option.label).clicked()
                            && current != option.value
                        {
                            actions.push(WizardAction::set_text(spec.name, option.value));
                        }
                    }
                });
        }
        (kind, FieldValue::Text(mut text)) => {
            ui.label(spec.label);
            let edit = egui::TextEdit::singleline(&mut text)
                .hint_text(spec.placeholder)
                .password(matches!(kind, FieldKind::Password))
                .desired_width(320.0);
            if ui.add(edit).changed() {
                actions.push(WizardAction::set_text(spec.name, text));
            }
        }
        (_, value) => {
            log::warn!("Field {} has unexpected value {:?}", spec.name, value);
            return;
        }
    }

    if let Some(message) = errors.get(spec.name) {
        error_label(ui, message);
    }
}

pub fn error_label(ui: &mut egui::Ui, message: &str) {
    ui.colored_label(egui::Color32::from_rgb(248, 113, 113), message);
}

fn option_label<'a>(options: &'a [SelectOption], value: &'a str) -> &'a str {
    options
        .iter()
        .find(|o| o.value == value)
        .map_or(value, |o| o.label)
}
