// Classifieds state managers
// Managers own mutable application state: saved bookmarks and the signed-in user.

pub mod bookmark_store;
pub mod user_session;
