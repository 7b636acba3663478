//! Listing shapes for each section of the site and their bookmark snapshots.

use serde::{Deserialize, Serialize};

use super::bookmark::{parse_amount, BookmarkedItem};

/// Section of the site a listing belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    Marketplace,
    Job,
    Housing,
    Service,
    Event,
}

/// Capability shared by every listing that can be saved to the bookmark tray.
pub trait Bookmarkable {
    /// Identifier the bookmark store keys on.
    fn bookmark_id(&self) -> &str;

    fn kind(&self) -> ListingKind;

    /// Snapshot of the listing's display fields at save time.
    fn to_bookmark(&self) -> BookmarkedItem;
}

/// A marketplace item for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceItem {
    pub id: String,
    pub title: String,
    pub price: f64,
    pub location: String,
    pub image: String,
    pub description: String,
    pub category: String,
    pub posted_date: String,
}

impl Bookmarkable for MarketplaceItem {
    fn bookmark_id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> ListingKind {
        ListingKind::Marketplace
    }

    fn to_bookmark(&self) -> BookmarkedItem {
        BookmarkedItem {
            id: self.id.clone(),
            title: self.title.clone(),
            price: self.price,
            location: self.location.clone(),
            image: self.image.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            posted_date: self.posted_date.clone(),
        }
    }
}

/// A job posting. Salary is a display range, not a price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub employment_type: String,
    pub posted_date: String,
    pub description: String,
    pub requirements: Vec<String>,
}

impl Bookmarkable for JobPosting {
    fn bookmark_id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> ListingKind {
        ListingKind::Job
    }

    fn to_bookmark(&self) -> BookmarkedItem {
        BookmarkedItem {
            id: self.id.clone(),
            title: self.title.clone(),
            price: 0.0,
            location: self.location.clone(),
            image: String::new(),
            description: self.description.clone(),
            category: "job".to_string(),
            posted_date: self.posted_date.clone(),
        }
    }
}

/// Whether a property is offered for rent or for sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TenureKind {
    Rent,
    Sale,
}

/// A housing listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    pub price: f64,
    pub tenure: TenureKind,
    pub property_type: String,
    pub location: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub sqft: u32,
    pub image: String,
    pub description: String,
    pub posted_date: String,
}

impl Bookmarkable for Property {
    fn bookmark_id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> ListingKind {
        ListingKind::Housing
    }

    fn to_bookmark(&self) -> BookmarkedItem {
        BookmarkedItem {
            id: self.id.clone(),
            title: self.title.clone(),
            price: self.price,
            location: self.location.clone(),
            image: self.image.clone(),
            description: self.description.clone(),
            category: self.property_type.clone(),
            posted_date: self.posted_date.clone(),
        }
    }
}

/// A service offer. The price is free text such as `"$75/hour"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOffer {
    pub id: String,
    pub title: String,
    pub provider: String,
    pub price: String,
    pub location: String,
    pub image: String,
    pub description: String,
    pub category: String,
    pub posted_date: String,
}

impl Bookmarkable for ServiceOffer {
    fn bookmark_id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> ListingKind {
        ListingKind::Service
    }

    fn to_bookmark(&self) -> BookmarkedItem {
        BookmarkedItem {
            id: self.id.clone(),
            title: self.title.clone(),
            price: parse_amount(&self.price),
            location: self.location.clone(),
            image: self.image.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            posted_date: self.posted_date.clone(),
        }
    }
}

/// A community event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub category: String,
    pub organizer: String,
    pub attendees: u32,
    pub max_attendees: Option<u32>,
    pub image: String,
}

impl Bookmarkable for Event {
    fn bookmark_id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> ListingKind {
        ListingKind::Event
    }

    fn to_bookmark(&self) -> BookmarkedItem {
        BookmarkedItem {
            id: self.id.clone(),
            title: self.title.clone(),
            price: 0.0,
            location: self.location.clone(),
            image: self.image.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            posted_date: self.date.clone(),
        }
    }
}
