pub mod api;
pub mod config;
pub mod draft;
pub mod error;
pub mod gallery;
pub mod model;
pub mod notification;
pub mod ordered_list;
pub mod schema;
pub mod submission;
pub mod wizard;

pub use api::{ApiClient, RegistrationBackend};
pub use config::RegistrationConfig;
pub use draft::{DraftKey, DraftRepository, DraftStore, FileDraftStore, MemoryDraftStore};
pub use error::{RegistrationError, Result};
pub use gallery::{UserGallery, UserRecord};
pub use model::{AccountDetails, PersonalInfo, Preferences, RegistrationDraft, Slice};
pub use notification::{Notification, NotificationCenter, Severity};
pub use ordered_list::OrderedList;
pub use submission::{SubmissionGateway, SubmissionReceipt};
pub use wizard::{WizardAction, WizardController, WizardManager, WizardState, WizardStep};
