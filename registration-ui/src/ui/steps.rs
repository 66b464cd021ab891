use eframe::egui;
use registration::model::{AccountDetails, QuestionPart};
use registration::schema::SECURITY_QUESTION_OPTIONS;
use registration::wizard::{WizardState, WizardStep};
use registration::WizardAction;

use super::fields::render_step_form;
use super::Actions;

const ACTIVE: egui::Color32 = egui::Color32::from_rgb(129, 140, 248);
const COMPLETE: egui::Color32 = egui::Color32::from_rgb(16, 185, 129);
const INACTIVE: egui::Color32 = egui::Color32::from_rgb(100, 116, 139);

pub fn render_step_indicator(ui: &mut egui::Ui, state: &WizardState) {
    ui.horizontal(|ui| {
        for step in WizardStep::ALL {
            let (color, marker) = if step == state.current_step {
                (ACTIVE, step.index().to_string())
            } else if step.index() < state.current_step.index() {
                (COMPLETE, "✔".to_string())
            } else {
                (INACTIVE, step.index().to_string())
            };

            ui.colored_label(color, egui::RichText::new(marker).strong().size(20.0));
            ui.colored_label(color, step.title());
            if step.next().is_some() {
                ui.separator();
            }
        }
    });

    ui.add(egui::ProgressBar::new(state.progress_percentage as f32 / 100.0).desired_height(4.0));
}

/// The current step's form plus its list editors.
pub fn render_current_step(ui: &mut egui::Ui, state: &WizardState, actions: &mut Actions) {
    let step = state.current_step;
    ui.heading(step.schema().title);
    ui.add_space(8.0);

    render_step_form(ui, state, step, actions);

    ui.add_enabled_ui(!state.is_submitting, |ui| match step {
        WizardStep::PersonalInfo => render_additional_emails(ui, state, actions),
        WizardStep::AccountDetails => render_security_questions(ui, state, actions),
        WizardStep::Preferences => {}
    });
}

fn render_additional_emails(ui: &mut egui::Ui, state: &WizardState, actions: &mut Actions) {
    ui.group(|ui| {
        ui.label("Additional Emails");

        for (index, email) in state.personal_info.additional_emails.iter().enumerate() {
            ui.horizontal(|ui| {
                let mut text = email.clone();
                let edit = egui::TextEdit::singleline(&mut text)
                    .hint_text("Enter additional email")
                    .desired_width(280.0);
                if ui.add(edit).changed() {
                    actions.push(WizardAction::UpdateAdditionalEmail { index, value: text });
                }
                if ui.small_button("✕").on_hover_text("Remove").clicked() {
                    actions.push(WizardAction::RemoveAdditionalEmail { index });
                }
            });
        }

        if ui.button("+ Add Email").clicked() {
            actions.push(WizardAction::AddAdditionalEmail);
        }
    });
}

fn render_security_questions(ui: &mut egui::Ui, state: &WizardState, actions: &mut Actions) {
    let questions = &state.account_details.security_questions;

    ui.group(|ui| {
        ui.label("Security Questions");

        for (index, question) in questions.iter().enumerate() {
            ui.horizontal(|ui| {
                let selected = if question.question.is_empty() {
                    "Select a question"
                } else {
                    question.question.as_str()
                };
                egui::ComboBox::new(("security_question", index), "")
                    .selected_text(selected)
                    .width(260.0)
                    .show_ui(ui, |ui| {
                        for option in SECURITY_QUESTION_OPTIONS {
                            if ui.selectable_label(question.question == *option, *option).clicked() {
                                actions.push(WizardAction::UpdateSecurityQuestion {
                                    index,
                                    part: QuestionPart::Question,
                                    value: option.to_string(),
                                });
                            }
                        }
                    });

                let mut answer = question.answer.clone();
                let edit = egui::TextEdit::singleline(&mut answer)
                    .hint_text("Answer")
                    .desired_width(180.0);
                if ui.add(edit).changed() {
                    actions.push(WizardAction::UpdateSecurityQuestion {
                        index,
                        part: QuestionPart::Answer,
                        value: answer,
                    });
                }

                if ui.small_button("✕").on_hover_text("Remove").clicked() {
                    actions.push(WizardAction::RemoveSecurityQuestion { index });
                }
            });
        }

        let can_add = questions.len() < AccountDetails::MAX_SECURITY_QUESTIONS;
        if ui
            .add_enabled(can_add, egui::Button::new("+ Add Security Question"))
            .clicked()
        {
            actions.push(WizardAction::AddSecurityQuestion);
        }
    });
}

pub fn render_navigation(ui: &mut egui::Ui, state: &WizardState, actions: &mut Actions) {
    let idle = !state.is_submitting && !state.completed;

    ui.horizontal(|ui| {
        if state.can_go_back
            && ui
                .add_enabled(idle, egui::Button::new("← Previous"))
                .clicked()
        {
            actions.push(WizardAction::GoBack);
        }

        let label = if state.current_step.is_final() {
            "Submit"
        } else {
            "Next →"
        };
        if ui.add_enabled(idle, egui::Button::new(label)).clicked() {
            actions.push(WizardAction::SubmitStep);
        }

        if state.is_submitting {
            ui.spinner();
            ui.label("Submitting...");
        }
    });
}
