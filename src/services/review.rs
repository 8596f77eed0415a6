use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::model::{NewReview, RatingSummary, Review};
use crate::domain::ports::Latency;
use crate::store;
use crate::utils::error::Result;
use crate::utils::validation::validate_range;

const LIST_DELAY: Duration = Duration::from_millis(500);
const GET_DELAY: Duration = Duration::from_millis(300);
const CREATE_DELAY: Duration = Duration::from_millis(800);
const UPDATE_DELAY: Duration = Duration::from_millis(600);
const DELETE_DELAY: Duration = Duration::from_millis(500);
const AVERAGE_DELAY: Duration = Duration::from_millis(400);

#[derive(Clone)]
pub struct ReviewService {
    reviews: Arc<RwLock<Vec<Review>>>,
    latency: Arc<dyn Latency>,
}

impl ReviewService {
    /// Service backed by the seed fixtures.
    pub fn new(latency: Arc<dyn Latency>) -> Self {
        Self::with_reviews(store::seed_reviews(), latency)
    }

    pub fn with_reviews(reviews: Vec<Review>, latency: Arc<dyn Latency>) -> Self {
        Self {
            reviews: Arc::new(RwLock::new(reviews)),
            latency,
        }
    }

    pub async fn by_listing(&self, listing_id: &str) -> Vec<Review> {
        self.latency.simulate(LIST_DELAY).await;
        self.reviews
            .read()
            .await
            .iter()
            .filter(|r| r.listing_id == listing_id)
            .cloned()
            .collect()
    }

    pub async fn by_reviewer(&self, wallet_address: &str) -> Vec<Review> {
        self.latency.simulate(LIST_DELAY).await;
        self.reviews
            .read()
            .await
            .iter()
            .filter(|r| r.reviewer.eq_ignore_ascii_case(wallet_address))
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: &str) -> Option<Review> {
        self.latency.simulate(GET_DELAY).await;
        self.reviews.read().await.iter().find(|r| r.id == id).cloned()
    }

    pub async fn create(&self, new_review: NewReview) -> Result<Review> {
        self.latency.simulate(CREATE_DELAY).await;

        validate_range("rating", new_review.rating, 1, 5)?;

        let mut reviews = self.reviews.write().await;
        let now = Utc::now();
        let review = Review {
            id: format!("r{}", reviews.len() + 1),
            listing_id: new_review.listing_id,
            booking_id: new_review.booking_id,
            reviewer: new_review.reviewer,
            rating: new_review.rating,
            comment: new_review.comment,
            created_at: now,
            updated_at: now,
        };

        tracing::debug!(
            "Created review {} for listing {} (rating {})",
            review.id,
            review.listing_id,
            review.rating
        );
        reviews.push(review.clone());
        Ok(review)
    }

    pub async fn update(
        &self,
        id: &str,
        rating: Option<u8>,
        comment: Option<String>,
    ) -> Result<Option<Review>> {
        self.latency.simulate(UPDATE_DELAY).await;

        if let Some(rating) = rating {
            validate_range("rating", rating, 1, 5)?;
        }

        let mut reviews = self.reviews.write().await;
        let Some(review) = reviews.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };

        if let Some(rating) = rating {
            review.rating = rating;
        }
        if let Some(comment) = comment {
            review.comment = comment;
        }
        review.updated_at = Utc::now();

        Ok(Some(review.clone()))
    }

    /// Returns whether a review was removed.
    pub async fn delete(&self, id: &str) -> bool {
        self.latency.simulate(DELETE_DELAY).await;

        let mut reviews = self.reviews.write().await;
        let before = reviews.len();
        reviews.retain(|r| r.id != id);
        reviews.len() < before
    }

    /// Mean rating across a listing's reviews, rounded to two decimals.
    /// The result is never written back onto the listing row; callers
    /// recompute on demand.
    pub async fn average_for_listing(&self, listing_id: &str) -> RatingSummary {
        self.latency.simulate(AVERAGE_DELAY).await;

        let reviews = self.reviews.read().await;
        let ratings: Vec<u8> = reviews
            .iter()
            .filter(|r| r.listing_id == listing_id)
            .map(|r| r.rating)
            .collect();

        if ratings.is_empty() {
            return RatingSummary {
                average: 0.0,
                count: 0,
            };
        }

        let sum: u32 = ratings.iter().map(|&r| u32::from(r)).sum();
        let average = (f64::from(sum) / ratings.len() as f64 * 100.0).round() / 100.0;
        RatingSummary {
            average,
            count: ratings.len(),
        }
    }
}
