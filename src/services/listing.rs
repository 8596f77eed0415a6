use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::model::{Listing, ListingPatch, NewListing, SearchFilters};
use crate::domain::ports::Latency;
use crate::store;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_non_negative};

const LIST_DELAY: Duration = Duration::from_millis(500);
const GET_DELAY: Duration = Duration::from_millis(300);
const SEARCH_DELAY: Duration = Duration::from_millis(800);
const CREATE_DELAY: Duration = Duration::from_millis(1000);
const UPDATE_DELAY: Duration = Duration::from_millis(800);
const DELETE_DELAY: Duration = Duration::from_millis(600);

/// Listing catalogue over an in-memory store. Clones share the store, so one
/// seeded service can back every caller for the process lifetime.
#[derive(Clone)]
pub struct ListingService {
    listings: Arc<RwLock<Vec<Listing>>>,
    latency: Arc<dyn Latency>,
}

impl ListingService {
    /// Service backed by the seed fixtures.
    pub fn new(latency: Arc<dyn Latency>) -> Self {
        Self::with_listings(store::seed_listings(), latency)
    }

    pub fn with_listings(listings: Vec<Listing>, latency: Arc<dyn Latency>) -> Self {
        Self {
            listings: Arc::new(RwLock::new(listings)),
            latency,
        }
    }

    pub async fn all(&self) -> Vec<Listing> {
        self.latency.simulate(LIST_DELAY).await;
        self.listings.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Option<Listing> {
        self.latency.simulate(GET_DELAY).await;
        self.listings.read().await.iter().find(|l| l.id == id).cloned()
    }

    pub async fn by_owner(&self, owner: &str) -> Vec<Listing> {
        self.latency.simulate(LIST_DELAY).await;
        self.listings
            .read()
            .await
            .iter()
            .filter(|l| l.owner.eq_ignore_ascii_case(owner))
            .cloned()
            .collect()
    }

    /// Filter the catalogue. Every set filter must match (AND semantics);
    /// unset filters are skipped. The location filter is a case-insensitive
    /// substring match across city, state, and country.
    pub async fn search(&self, filters: &SearchFilters) -> Vec<Listing> {
        self.latency.simulate(SEARCH_DELAY).await;

        let location = filters.location.as_ref().map(|s| s.to_lowercase());
        self.listings
            .read()
            .await
            .iter()
            .filter(|l| {
                if let Some(needle) = &location {
                    let in_city = l.location.city.to_lowercase().contains(needle);
                    let in_country = l.location.country.to_lowercase().contains(needle);
                    let in_state = l
                        .location
                        .state
                        .as_ref()
                        .is_some_and(|s| s.to_lowercase().contains(needle));
                    if !(in_city || in_country || in_state) {
                        return false;
                    }
                }
                if let Some(category) = filters.category {
                    if !l.categories.contains(&category) {
                        return false;
                    }
                }
                if let Some(min) = filters.min_price {
                    if l.price_per_night < min {
                        return false;
                    }
                }
                if let Some(max) = filters.max_price {
                    if l.price_per_night > max {
                        return false;
                    }
                }
                if let Some(guests) = filters.guests {
                    if l.max_guests < guests {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect()
    }

    pub async fn create(&self, new_listing: NewListing) -> Result<Listing> {
        self.latency.simulate(CREATE_DELAY).await;

        validate_non_empty_string("title", &new_listing.title)?;
        validate_non_negative("price_per_night", new_listing.price_per_night)?;

        let mut listings = self.listings.write().await;
        let now = Utc::now();
        let listing = Listing {
            id: (listings.len() + 1).to_string(),
            title: new_listing.title,
            description: new_listing.description,
            owner: new_listing.owner,
            location: new_listing.location,
            images: new_listing.images,
            price_per_night: new_listing.price_per_night,
            currency: new_listing.currency,
            max_guests: new_listing.max_guests,
            bedrooms: new_listing.bedrooms,
            beds: new_listing.beds,
            baths: new_listing.baths,
            amenities: new_listing.amenities,
            categories: new_listing.categories,
            rating: None,
            review_count: None,
            created_at: now,
            updated_at: now,
            available: new_listing.available,
        };

        tracing::debug!("Created listing {} ({})", listing.id, listing.title);
        listings.push(listing.clone());
        Ok(listing)
    }

    /// Partial merge; unset patch fields keep their current value. Returns
    /// None when the id is unknown.
    pub async fn update(&self, id: &str, patch: ListingPatch) -> Result<Option<Listing>> {
        self.latency.simulate(UPDATE_DELAY).await;

        if let Some(price) = patch.price_per_night {
            validate_non_negative("price_per_night", price)?;
        }

        let mut listings = self.listings.write().await;
        let Some(listing) = listings.iter_mut().find(|l| l.id == id) else {
            return Ok(None);
        };

        if let Some(title) = patch.title {
            listing.title = title;
        }
        if let Some(description) = patch.description {
            listing.description = description;
        }
        if let Some(location) = patch.location {
            listing.location = location;
        }
        if let Some(images) = patch.images {
            listing.images = images;
        }
        if let Some(price) = patch.price_per_night {
            listing.price_per_night = price;
        }
        if let Some(currency) = patch.currency {
            listing.currency = currency;
        }
        if let Some(max_guests) = patch.max_guests {
            listing.max_guests = max_guests;
        }
        if let Some(bedrooms) = patch.bedrooms {
            listing.bedrooms = bedrooms;
        }
        if let Some(beds) = patch.beds {
            listing.beds = beds;
        }
        if let Some(baths) = patch.baths {
            listing.baths = baths;
        }
        if let Some(amenities) = patch.amenities {
            listing.amenities = amenities;
        }
        if let Some(categories) = patch.categories {
            listing.categories = categories;
        }
        if let Some(available) = patch.available {
            listing.available = available;
        }
        listing.updated_at = Utc::now();

        Ok(Some(listing.clone()))
    }

    /// Returns whether a listing was removed.
    pub async fn delete(&self, id: &str) -> bool {
        self.latency.simulate(DELETE_DELAY).await;

        let mut listings = self.listings.write().await;
        let before = listings.len();
        listings.retain(|l| l.id != id);
        listings.len() < before
    }
}
