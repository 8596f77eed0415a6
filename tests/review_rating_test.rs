use std::sync::Arc;

use blockstay::domain::model::{NewReview, RatingSummary};
use blockstay::{NoLatency, ReviewService};

fn empty_service() -> ReviewService {
    ReviewService::with_reviews(vec![], Arc::new(NoLatency))
}

fn review_for(listing_id: &str, rating: u8) -> NewReview {
    NewReview {
        listing_id: listing_id.to_string(),
        booking_id: None,
        reviewer: "0x9965507D1a55bcC2695C58ba16FB37d819B0A4dc".to_string(),
        rating,
        comment: "Lovely stay".to_string(),
    }
}

#[tokio::test]
async fn test_average_with_no_reviews_is_zero() {
    let service = empty_service();

    let summary = service.average_for_listing("1").await;
    assert_eq!(
        summary,
        RatingSummary {
            average: 0.0,
            count: 0
        }
    );
}

#[tokio::test]
async fn test_average_rounds_to_two_decimals() {
    let service = empty_service();
    for rating in [5, 5, 4] {
        service.create(review_for("1", rating)).await.unwrap();
    }

    let summary = service.average_for_listing("1").await;
    assert_eq!(summary.average, 4.67);
    assert_eq!(summary.count, 3);
}

#[tokio::test]
async fn test_average_only_counts_the_requested_listing() {
    let service = empty_service();
    service.create(review_for("1", 5)).await.unwrap();
    service.create(review_for("2", 1)).await.unwrap();

    let summary = service.average_for_listing("1").await;
    assert_eq!(summary.average, 5.0);
    assert_eq!(summary.count, 1);
}

#[tokio::test]
async fn test_create_rejects_out_of_range_ratings() {
    let service = empty_service();
    assert!(service.create(review_for("1", 0)).await.is_err());
    assert!(service.create(review_for("1", 6)).await.is_err());
    assert!(service.create(review_for("1", 5)).await.is_ok());
}

#[tokio::test]
async fn test_update_changes_rating_and_comment() {
    let service = empty_service();
    let review = service.create(review_for("1", 3)).await.unwrap();

    let updated = service
        .update(&review.id, Some(4), Some("Better on reflection".to_string()))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.rating, 4);
    assert_eq!(updated.comment, "Better on reflection");
}

#[tokio::test]
async fn test_update_rejects_invalid_rating() {
    let service = empty_service();
    let review = service.create(review_for("1", 3)).await.unwrap();

    assert!(service.update(&review.id, Some(9), None).await.is_err());
}

#[tokio::test]
async fn test_update_unknown_review_is_none() {
    let service = empty_service();
    let result = service.update("r999", Some(4), None).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_delete_reports_whether_anything_was_removed() {
    let service = empty_service();
    let review = service.create(review_for("1", 5)).await.unwrap();

    assert!(service.delete(&review.id).await);
    assert!(!service.delete(&review.id).await);
}

#[tokio::test]
async fn test_by_reviewer_is_case_insensitive() {
    let service = ReviewService::new(Arc::new(NoLatency));

    let reviews = service
        .by_reviewer("0X9965507D1A55BCC2695C58BA16FB37D819B0A4DC")
        .await;
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].id, "r1");
}

#[tokio::test]
async fn test_seeded_listing_two_has_two_reviews() {
    let service = ReviewService::new(Arc::new(NoLatency));

    let summary = service.average_for_listing("2").await;
    assert_eq!(summary.count, 2);
    assert_eq!(summary.average, 4.5);
}
