// Classifieds services
// Services build on the managers: shared bookmark access, the saved-items tray, settings.

pub mod bookmark_context;
pub mod bookmark_tray;
pub mod settings_engine;
