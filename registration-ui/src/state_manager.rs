use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use registration::wizard::Route;
use registration::{
    RegistrationBackend, RegistrationConfig, UserGallery, UserRecord, WizardAction, WizardManager,
    WizardState,
};

type UsersSlot = Arc<Mutex<Option<registration::Result<Vec<UserRecord>>>>>;

/// Bridges the egui frame loop and the async wizard/gallery work.
///
/// The wizard lives behind a tokio mutex. Each frame the UI takes it with
/// `try_lock`; while a submission holds it the last snapshot is rendered.
pub struct RegistrationStateManager {
    wizard: Arc<tokio::sync::Mutex<WizardManager>>,
    backend: Arc<dyn RegistrationBackend>,

    // Last state read from the wizard
    pub snapshot: WizardState,

    // Actions waiting for the wizard lock
    outbox: VecDeque<WizardAction>,
    submission_running: Arc<AtomicBool>,

    pub gallery: UserGallery,
    gallery_state: Option<UsersSlot>,
}

impl RegistrationStateManager {
    pub fn new(config: &RegistrationConfig) -> Self {
        Self::with_manager(WizardManager::new(config))
    }

    pub fn with_manager(manager: WizardManager) -> Self {
        let snapshot = manager.state().clone();
        let backend = manager.backend();

        Self {
            wizard: Arc::new(tokio::sync::Mutex::new(manager)),
            backend,
            snapshot,
            outbox: VecDeque::new(),
            submission_running: Arc::new(AtomicBool::new(false)),
            gallery: UserGallery::new(),
            gallery_state: None,
        }
    }

    pub fn dispatch(&mut self, action: WizardAction) {
        self.outbox.push_back(action);
    }

    pub fn is_busy(&self) -> bool {
        !self.outbox.is_empty()
            || self.submission_running.load(Ordering::SeqCst)
            || self.gallery.is_loading
    }

    // === Gallery ===

    pub fn load_users(&mut self) {
        if !self.gallery.begin_load() {
            return;
        }

        log::info!("Fetching registered users");
        let slot: UsersSlot = Arc::new(Mutex::new(None));
        self.gallery_state = Some(slot.clone());

        let backend = Arc::clone(&self.backend);
        tokio::spawn(async move {
            let result = backend.list_users().await;
            if let Ok(mut state) = slot.lock() {
                *state = Some(result);
            } else {
                log::error!("Failed to acquire gallery state lock");
            }
        });
    }

    // === Async Result Processing ===

    /// Called once per frame. Feeds queued actions to the wizard, advances its
    /// timers, starts a submission worker when one is due and collects gallery
    /// results. Returns a navigation request raised by the wizard.
    pub fn update_from_async(&mut self, now: Instant) -> Option<Route> {
        self.poll_gallery();

        let wizard = Arc::clone(&self.wizard);
        let Ok(mut manager) = wizard.try_lock() else {
            return None;
        };

        while let Some(action) = self.outbox.pop_front() {
            manager.dispatch(action);
        }
        manager.update_local();
        manager.tick(now);

        if manager.needs_network() && !self.submission_running.swap(true, Ordering::SeqCst) {
            self.spawn_submission();
        }

        self.snapshot = manager.state().clone();
        manager.take_navigation()
    }

    fn spawn_submission(&self) {
        log::info!("Starting registration submit");
        let wizard = Arc::clone(&self.wizard);
        let running = Arc::clone(&self.submission_running);

        tokio::spawn(async move {
            let mut manager = wizard.lock().await;
            manager.update().await;
            running.store(false, Ordering::SeqCst);
        });
    }

    fn poll_gallery(&mut self) {
        let Some(slot) = &self.gallery_state else {
            return;
        };

        let result = match slot.lock() {
            Ok(mut guard) => guard.take(),
            Err(_) => None,
        };

        if let Some(result) = result {
            self.gallery.apply(result);
            self.gallery_state = None;
        }
    }
}
