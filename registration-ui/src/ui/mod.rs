// Pure render functions. Each one:
// 1. Reads WizardState or UserGallery (immutable)
// 2. Renders egui widgets from it
// 3. Pushes WizardActions for the state manager to dispatch
// 4. Makes no backend calls

pub mod fields;
pub mod gallery;
pub mod steps;
pub mod toast;

use registration::WizardAction;

/// Actions collected while rendering one frame.
pub type Actions = Vec<WizardAction>;
