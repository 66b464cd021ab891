//! The multi-step registration flow.
//!
//! [`WizardManager`] owns everything; the UI reads [`WizardState`] and feeds
//! [`WizardAction`]s back in.

pub mod actions;
pub mod controller;
pub mod manager;
pub mod state;


pub use actions::WizardAction;
pub use controller::WizardController;
pub use manager::WizardManager;
pub use state::{Route, WizardState, WizardStep};
