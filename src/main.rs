//! Classifieds console demo of the client core.
//!
//! Saves listings from each section, simulates a restart against the same
//! backing, and prints the header tray.

use classifieds::app::App;
use classifieds::logging;
use classifieds::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use classifieds::managers::user_session::UserSessionTrait;
use classifieds::services::bookmark_tray::BookmarkTray;
use classifieds::services::settings_engine::SettingsEngine;
use classifieds::storage::{MemoryStorage, StorageBackend};
use classifieds::types::listing::{Bookmarkable, Event, JobPosting, MarketplaceItem, ServiceOffer};
use classifieds::types::settings::DEFAULT_BOOKMARK_KEY;
use classifieds::types::user::User;

fn main() {
    logging::init("classifieds=info");

    println!();
    println!("Classifieds v{} - Demo Mode", env!("CARGO_PKG_VERSION"));
    println!();

    let storage = MemoryStorage::new();
    let settings = SettingsEngine::new(Some(
        std::env::temp_dir()
            .join("classifieds-demo-settings.json")
            .to_string_lossy()
            .to_string(),
    ));
    let mut app = App::with_backend(settings, Box::new(storage.clone()));

    section("User Session");
    app.user_session.login(User::new("Demo User", "demo@example.com"));
    if let Some(user) = app.user_session.current_user() {
        println!("  Logged in as {} <{}>", user.name, user.email);
    }

    section("Saving listings");
    let phone = MarketplaceItem {
        id: "m1".to_string(),
        title: "iPhone 14 Pro Max - Excellent Condition".to_string(),
        price: 899.0,
        location: "Downtown".to_string(),
        image: "https://images.example.com/iphone.jpg".to_string(),
        description: "Barely used, comes with case".to_string(),
        category: "electronics".to_string(),
        posted_date: "2 hours ago".to_string(),
    };
    let job = JobPosting {
        id: "j1".to_string(),
        title: "Senior Software Engineer".to_string(),
        company: "TechCorp Solutions".to_string(),
        location: "Downtown".to_string(),
        salary: "$80,000 - $120,000".to_string(),
        employment_type: "Full-time".to_string(),
        posted_date: "2 days ago".to_string(),
        description: "Backend services in Rust".to_string(),
        requirements: vec!["5+ years experience".to_string()],
    };
    let plumber = ServiceOffer {
        id: "s1".to_string(),
        title: "Licensed Plumber".to_string(),
        provider: "PipeWorks".to_string(),
        price: "$75/hour".to_string(),
        location: "Westside".to_string(),
        image: String::new(),
        description: "Emergency repairs".to_string(),
        category: "home".to_string(),
        posted_date: "1 day ago".to_string(),
    };
    let market = Event {
        id: "e1".to_string(),
        title: "Farmers Market".to_string(),
        description: "Local produce every Saturday".to_string(),
        date: "2024-06-01".to_string(),
        time: "09:00".to_string(),
        location: "Central Park".to_string(),
        category: "community".to_string(),
        organizer: "Parks Dept".to_string(),
        attendees: 120,
        max_attendees: None,
        image: String::new(),
    };

    let listings: [&dyn Bookmarkable; 4] = [&phone, &job, &plumber, &market];
    for listing in listings {
        let saved = app.bookmarks.toggle(listing);
        println!("  {:?} {} -> saved: {}", listing.kind(), listing.bookmark_id(), saved);
    }
    let unsaved = app.bookmarks.toggle(&market);
    println!("  toggled e1 again -> saved: {}", unsaved);

    section("Restart");
    let restored = BookmarkStore::initialize(storage.clone());
    println!("  Hydrated {} bookmarks from storage", restored.len());
    for item in restored.bookmarks() {
        println!("    - [{}] {} ({})", item.id, item.title, item.category);
    }
    match storage.read(DEFAULT_BOOKMARK_KEY) {
        Ok(Some(raw)) => println!("  Stored payload: {} bytes", raw.len()),
        _ => println!("  Stored payload missing"),
    }

    section("Bookmark Tray");
    let tray = BookmarkTray::from_items(&app.bookmarks.bookmarks());
    println!("  {}", tray.heading);
    for entry in &tray.entries {
        println!("    {} | {}", entry.title, entry.subtitle);
    }
    if let Some(message) = &tray.empty_message {
        println!("    {}", message);
    }

    app.user_session.logout();
    println!();
    println!("Demo complete.");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────────────────────");
}
