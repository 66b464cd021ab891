use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;

use uuid::Uuid;

use crate::api::{ApiClient, RegistrationBackend};
use crate::config::{NotificationConfig, RegistrationConfig};
use crate::draft::{DraftRepository, FileDraftStore, MemoryDraftStore};
use crate::model::{AccountDetails, QuestionPart, RegistrationDraft, SecurityQuestion};
use crate::notification::NotificationCenter;
use crate::schema::FieldValue;
use crate::submission::SubmissionGateway;

use super::controller::WizardController;
use super::state::{Route, WizardState, WizardStep};
use super::WizardAction;

pub struct WizardManager {
    // Current state - single source of truth for the UI
    state: WizardState,

    controller: WizardController,
    drafts: DraftRepository,
    gateway: SubmissionGateway,
    notifications: NotificationCenter,

    // Action queue for sequential processing
    pending_actions: VecDeque<WizardAction>,

    // Reused across retries while the payload is unchanged
    idempotency_key: Option<(Uuid, RegistrationDraft)>,
}

impl WizardManager {
    /// Builds the HTTP client and draft store described by `config`.
    pub fn new(config: &RegistrationConfig) -> Self {
        let drafts = match &config.draft.session_file {
            Some(path) => {
                log::info!("Keeping drafts in {}", path.display());
                DraftRepository::new(FileDraftStore::new(path))
            }
            None => DraftRepository::new(MemoryDraftStore::new()),
        };

        Self::with_parts(
            Arc::new(ApiClient::new(&config.api)),
            drafts,
            &config.notifications,
        )
    }

    /// Mounts a wizard over an existing draft store; each step form starts
    /// from whatever that store holds.
    pub fn with_parts(
        backend: Arc<dyn RegistrationBackend>,
        drafts: DraftRepository,
        config: &NotificationConfig,
    ) -> Self {
        let mut manager = Self {
            state: WizardState::default(),
            controller: WizardController::new(),
            drafts,
            gateway: SubmissionGateway::new(backend, config.redirect_delay()),
            notifications: NotificationCenter::new(config.timeout()),
            pending_actions: VecDeque::new(),
            idempotency_key: None,
        };
        manager.hydrate();
        manager.sync_state();
        manager
    }

    /// UI calls this - synchronous, just queues the action
    pub fn dispatch(&mut self, action: WizardAction) {
        log::debug!("Dispatching action: {}", action.description());
        self.pending_actions.push_back(action);
    }

    /// Drains every queued action that can be handled without the network.
    /// A final submit is validated and persisted here and then left for
    /// [`update`](Self::update) to send.
    pub fn update_local(&mut self) {
        while let Some(action) = self.pending_actions.pop_front() {
            self.handle_action(action);
        }
    }

    /// Sends a prepared final submission if there is one, otherwise processes
    /// one queued action.
    pub async fn update(&mut self) {
        if self.state.is_submitting {
            self.send_submission().await;
        } else if let Some(action) = self.pending_actions.pop_front() {
            log::debug!("Processing action: {}", action.description());
            self.handle_action(action);
            if self.state.is_submitting {
                self.send_submission().await;
            }
        }
    }

    /// Expires the notification and fires the post-submit redirect once due.
    /// Returns true if the state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = self.notifications.tick(now);

        if let Some(at) = self.state.redirect_at {
            if now >= at {
                log::info!("Redirecting to gallery");
                self.reset_wizard();
                self.state.navigation = Some(Route::Gallery);
                changed = true;
            }
        }

        if changed {
            self.sync_state();
        }
        changed
    }

    /// UI reads this - immutable reference
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn aggregate(&self) -> &RegistrationDraft {
        self.controller.aggregate()
    }

    pub fn backend(&self) -> Arc<dyn RegistrationBackend> {
        self.gateway.backend()
    }

    /// Hands the pending navigation to the host, once.
    pub fn take_navigation(&mut self) -> Option<Route> {
        self.state.navigation.take()
    }

    /// Check if there are pending actions (for UI repaint requests)
    pub fn has_pending_actions(&self) -> bool {
        !self.pending_actions.is_empty() || self.state.is_submitting
    }

    /// True while a validated final submission is waiting to be sent.
    pub fn needs_network(&self) -> bool {
        self.state.is_submitting
    }

    fn handle_action(&mut self, action: WizardAction) {
        match action {
            WizardAction::SetField { field, value } => self.handle_set_field(&field, value),
            WizardAction::AddAdditionalEmail => self.handle_add_email(),
            WizardAction::UpdateAdditionalEmail { index, value } => {
                self.handle_update_email(index, value)
            }
            WizardAction::RemoveAdditionalEmail { index } => self.handle_remove_email(index),
            WizardAction::AddSecurityQuestion => self.handle_add_question(),
            WizardAction::UpdateSecurityQuestion { index, part, value } => {
                self.handle_update_question(index, part, value)
            }
            WizardAction::RemoveSecurityQuestion { index } => self.handle_remove_question(index),
            WizardAction::SubmitStep => self.handle_submit_step(),
            WizardAction::GoBack => self.handle_go_back(),
            WizardAction::DismissNotification => self.notifications.dismiss(),
            WizardAction::Reset => self.handle_reset(),
        }

        self.sync_state();
    }

    fn sync_state(&mut self) {
        self.state.current_step = self.controller.current_step();
        self.state.notification = self.notifications.current().cloned();
        self.state.update_progress();
    }

    fn hydrate(&mut self) {
        self.state.personal_info = self.drafts.load(WizardStep::PersonalInfo.draft_key());
        self.state.account_details = self.drafts.load(WizardStep::AccountDetails.draft_key());
        self.state.preferences = self.drafts.load(WizardStep::Preferences.draft_key());
        log::debug!("Wizard forms hydrated from draft store");
    }

    fn reset_wizard(&mut self) {
        self.controller = WizardController::new();
        self.state = WizardState::default();
        self.idempotency_key = None;
    }

    /// Writes the working copy of `step` to the draft store.
    fn persist(&mut self, step: WizardStep) {
        let key = step.draft_key();
        let result = match step {
            WizardStep::PersonalInfo => self.drafts.save(key, &self.state.personal_info),
            WizardStep::AccountDetails => self.drafts.save(key, &self.state.account_details),
            WizardStep::Preferences => self.drafts.save(key, &self.state.preferences),
        };
        if let Err(e) = result {
            log::error!("Failed to save draft {}: {}", key, e);
        }
    }
}

// Action handler implementations
impl WizardManager {
    fn handle_set_field(&mut self, field: &str, value: FieldValue) {
        let step = self.controller.current_step();
        if self.state.form_mut(step).set_field(field, value) {
            self.state.field_errors.clear_field(field);
        } else {
            log::warn!("Ignoring update of unknown field {} on step {}", field, step.index());
        }
    }

    fn handle_add_email(&mut self) {
        let index = self.state.personal_info.additional_emails.push(String::new());
        log::debug!("Additional email slot {} added", index);
        self.persist(WizardStep::PersonalInfo);
    }

    fn handle_update_email(&mut self, index: usize, value: String) {
        if self
            .state
            .personal_info
            .additional_emails
            .set(index, value)
            .is_none()
        {
            log::warn!("No additional email at index {}", index);
            return;
        }
        self.persist(WizardStep::PersonalInfo);
    }

    fn handle_remove_email(&mut self, index: usize) {
        if self.state.personal_info.additional_emails.remove(index).is_none() {
            log::warn!("No additional email at index {}", index);
            return;
        }
        self.persist(WizardStep::PersonalInfo);
    }

    fn handle_add_question(&mut self) {
        let questions = &mut self.state.account_details.security_questions;
        match questions.try_push(SecurityQuestion::default(), AccountDetails::MAX_SECURITY_QUESTIONS) {
            Ok(index) => {
                log::debug!("Security question slot {} added", index);
                self.persist(WizardStep::AccountDetails);
            }
            Err(e) => log::warn!("Cannot add security question: {}", e),
        }
    }

    fn handle_update_question(&mut self, index: usize, part: QuestionPart, value: String) {
        let updated = self
            .state
            .account_details
            .security_questions
            .update(index, |q| match part {
                QuestionPart::Question => q.question = value,
                QuestionPart::Answer => q.answer = value,
            });
        if !updated {
            log::warn!("No security question at index {}", index);
            return;
        }
        self.persist(WizardStep::AccountDetails);
    }

    fn handle_remove_question(&mut self, index: usize) {
        if self
            .state
            .account_details
            .security_questions
            .remove(index)
            .is_none()
        {
            log::warn!("No security question at index {}", index);
            return;
        }
        self.persist(WizardStep::AccountDetails);
    }

    fn handle_submit_step(&mut self) {
        if self.state.is_submitting || self.state.completed {
            log::warn!("Submit ignored - registration already in flight or complete");
            return;
        }

        let step = self.controller.current_step();
        let errors = step.schema().validate(self.state.form(step));
        if !errors.is_empty() {
            log::info!("Step {} blocked by {} field error(s)", step.index(), errors.len());
            self.state.field_errors = errors;
            return;
        }
        self.state.field_errors.clear();

        self.persist(step);
        self.controller.merge_slice(self.state.slice(step));

        if step.is_final() {
            // Sent by update()
            self.state.is_submitting = true;
        } else {
            let next = self.controller.advance();
            log::info!("Advanced to step: {:?}", next);
        }
    }

    fn handle_go_back(&mut self) {
        if self.state.is_submitting {
            log::warn!("Cannot go back while a submission is in flight");
            return;
        }
        self.state.field_errors.clear();
        let step = self.controller.retreat();
        log::info!("Went back to step: {:?}", step);
    }

    fn handle_reset(&mut self) {
        if self.state.is_submitting {
            log::warn!("Cannot reset while a submission is in flight");
            return;
        }
        if let Err(e) = self.drafts.clear_all() {
            log::error!("Failed to clear drafts on reset: {}", e);
        }
        self.notifications.dismiss();
        self.reset_wizard();
        log::info!("Wizard state reset");
    }

    /// Key for the current aggregate. A retry of an identical payload keeps
    /// its key; any edit since the last attempt gets a fresh one.
    fn idempotency_key(&mut self) -> Uuid {
        let aggregate = self.controller.aggregate();
        if let Some((key, payload)) = &self.idempotency_key {
            if payload == aggregate {
                return *key;
            }
            log::info!("Registration changed since last attempt - new idempotency key");
        }
        let key = Uuid::new_v4();
        self.idempotency_key = Some((key, aggregate.clone()));
        key
    }

    async fn send_submission(&mut self) {
        let key = self.idempotency_key().to_string();

        let result = self
            .controller
            .submit_final(&self.gateway, &key, &mut self.drafts, &mut self.notifications)
            .await;

        self.state.is_submitting = false;
        match result {
            Ok(receipt) => {
                self.idempotency_key = None;
                self.state.completed = true;
                self.state.redirect_at = Some(receipt.redirect_at);
                log::info!("Registration submitted");
            }
            Err(e) => {
                log::error!("Registration submit failed: {}", e);
            }
        }
        self.sync_state();
    }
}
