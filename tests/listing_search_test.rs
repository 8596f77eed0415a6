use std::sync::Arc;

use blockstay::domain::model::{
    ListingCategory, ListingPatch, Location, NewListing, SearchFilters, Stablecoin,
};
use blockstay::{ListingService, NoLatency};

fn seeded_service() -> ListingService {
    ListingService::new(Arc::new(NoLatency))
}

fn new_listing(title: &str, price: f64) -> NewListing {
    NewListing {
        title: title.to_string(),
        description: "A place to stay".to_string(),
        owner: "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".to_string(),
        location: Location {
            address: "1 Test Street".to_string(),
            city: "Lisbon".to_string(),
            state: None,
            country: "Portugal".to_string(),
            postal_code: None,
            lat: None,
            long: None,
        },
        images: vec![],
        price_per_night: price,
        currency: Stablecoin::Usdc,
        max_guests: 4,
        bedrooms: 2,
        beds: 2,
        baths: 1,
        amenities: vec![],
        categories: vec![ListingCategory::City],
        available: true,
    }
}

fn ids(listings: &[blockstay::domain::model::Listing]) -> Vec<&str> {
    listings.iter().map(|l| l.id.as_str()).collect()
}

#[tokio::test]
async fn test_empty_filters_return_everything() {
    let service = seeded_service();
    let results = service.search(&SearchFilters::default()).await;
    assert_eq!(results.len(), service.all().await.len());
}

#[tokio::test]
async fn test_search_combines_filters_with_and_semantics() {
    let service = seeded_service();

    // Price between 100 and 200 AND room for 4: only the farmhouse (195,
    // sleeps 6). The treehouse is in the price band but only sleeps 2.
    let filters = SearchFilters {
        min_price: Some(100.0),
        max_price: Some(200.0),
        guests: Some(4),
        ..Default::default()
    };

    let results = service.search(&filters).await;
    assert_eq!(ids(&results), vec!["4"]);
}

#[tokio::test]
async fn test_search_location_matches_city_state_and_country() {
    let service = seeded_service();

    let by_city = service
        .search(&SearchFilters {
            location: Some("aspen".to_string()),
            ..Default::default()
        })
        .await;
    assert_eq!(ids(&by_city), vec!["2"]);

    let by_state = service
        .search(&SearchFilters {
            location: Some("tuscany".to_string()),
            ..Default::default()
        })
        .await;
    assert_eq!(ids(&by_state), vec!["4"]);

    let by_country = service
        .search(&SearchFilters {
            location: Some("MEXICO".to_string()),
            ..Default::default()
        })
        .await;
    assert_eq!(ids(&by_country), vec!["6"]);
}

#[tokio::test]
async fn test_search_by_category() {
    let service = seeded_service();

    let beach = service
        .search(&SearchFilters {
            category: Some(ListingCategory::Beach),
            ..Default::default()
        })
        .await;
    assert_eq!(ids(&beach), vec!["1", "6"]);
}

#[tokio::test]
async fn test_search_category_and_price_together() {
    let service = seeded_service();

    let filters = SearchFilters {
        category: Some(ListingCategory::Beach),
        max_price: Some(1000.0),
        ..Default::default()
    };

    let results = service.search(&filters).await;
    assert_eq!(ids(&results), vec!["1"]);
}

#[tokio::test]
async fn test_by_owner_is_case_insensitive() {
    let service = seeded_service();

    let owned = service
        .by_owner("0xF39FD6E51AAD88F6F4CE6AB8827279CFFFB92266")
        .await;
    assert_eq!(ids(&owned), vec!["1", "6"]);
}

#[tokio::test]
async fn test_create_assigns_id_and_timestamps() {
    let service = seeded_service();

    let listing = service.create(new_listing("Tiled Courtyard Flat", 120.0)).await.unwrap();

    assert_eq!(listing.id, "7");
    assert!(listing.rating.is_none());
    assert_eq!(listing.created_at, listing.updated_at);
    assert!(service.get("7").await.is_some());
}

#[tokio::test]
async fn test_create_rejects_negative_price() {
    let service = seeded_service();
    let result = service.create(new_listing("Bad Price", -10.0)).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_update_is_a_partial_merge() {
    let service = seeded_service();

    let updated = service
        .update(
            "2",
            ListingPatch {
                price_per_night: Some(350.0),
                available: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.price_per_night, 350.0);
    assert!(!updated.available);
    // Untouched fields survive the merge.
    assert_eq!(updated.title, "Cozy Mountain Cabin");
    assert_eq!(updated.max_guests, 4);
}

#[tokio::test]
async fn test_update_unknown_listing_is_none() {
    let service = seeded_service();
    let result = service.update("999", ListingPatch::default()).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_update_rejects_negative_price() {
    let service = seeded_service();
    let result = service
        .update(
            "1",
            ListingPatch {
                price_per_night: Some(-5.0),
                ..Default::default()
            },
        )
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_delete_reports_whether_anything_was_removed() {
    let service = seeded_service();

    assert!(service.delete("3").await);
    assert!(service.get("3").await.is_none());
    assert!(!service.delete("3").await);
}
