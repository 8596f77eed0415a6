//! Seed fixtures for every entity store. These stand in for a backend: each
//! service clones its slice into process-lifetime memory at construction and
//! mutates it freely from then on. Cross-references (booking -> listing,
//! escrow -> booking) are consistent across the fixture sets.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::model::{
    Booking, BookingCurrency, BookingStatus, EscrowData, EscrowStatus, Listing, ListingAmenity,
    ListingCategory, ListingImage, Location, PaymentMethod, Review, Stablecoin, User,
};

fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

fn user(address: &str, name: &str, avatar_img: u32, created: DateTime<Utc>) -> User {
    User {
        wallet_address: address.to_string(),
        display_name: Some(name.to_string()),
        avatar: Some(format!("https://i.pravatar.cc/150?img={}", avatar_img)),
        created_at: created,
    }
}

fn amenity(id: &str, name: &str, icon: &str) -> ListingAmenity {
    ListingAmenity {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
    }
}

fn image(id: &str, url: &str, alt: &str) -> ListingImage {
    ListingImage {
        id: id.to_string(),
        url: url.to_string(),
        alt: Some(alt.to_string()),
    }
}

pub fn seed_users() -> Vec<User> {
    vec![
        user(
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
            "Beach Villa Owner",
            1,
            day(2022, 5, 10),
        ),
        user(
            "0x70997970C51812dc3A010C7d01b50e0d17dc79C8",
            "Mountain Retreat Host",
            2,
            day(2022, 6, 15),
        ),
        user(
            "0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC",
            "Urban Loft Provider",
            3,
            day(2022, 7, 20),
        ),
        user(
            "0x90F79bf6EB2c4f870365E785982E1f101E93b906",
            "Countryside Host",
            4,
            day(2022, 8, 25),
        ),
        user(
            "0x15d34AAf54267DB7D7c367839AAf71A00a2C6A65",
            "Treehouse Experience",
            5,
            day(2022, 9, 30),
        ),
        user(
            "0x9965507D1a55bcC2695C58ba16FB37d819B0A4dc",
            "Beach Traveler",
            6,
            day(2022, 10, 5),
        ),
        user(
            "0x976EA74026E726554dB657fA54763abd0C3a0aa9",
            "Mountain Explorer",
            7,
            day(2022, 11, 10),
        ),
        user(
            "0x14dC79964da2C08b23698B3D3cc7Ca32193d9955",
            "City Nomad",
            8,
            day(2022, 12, 15),
        ),
        user(
            "0x23618e81E3f5cdF7f54C3d65f7FBc0aBf5B21E8f",
            "Country Lover",
            9,
            day(2023, 1, 20),
        ),
        user(
            "0xa0Ee7A142d267C1f36714E4a8F75612F20a79720",
            "Adventure Seeker",
            10,
            day(2023, 2, 25),
        ),
        user(
            "0xBcd4042DE499D14e55001CcbB24a551F3b954096",
            "Luxury Traveler",
            11,
            day(2023, 3, 30),
        ),
        user(
            "0x71bE63f3384f5fb98995898A86B02Fb2426c5788",
            "Lightning User",
            12,
            day(2023, 4, 15),
        ),
    ]
}

pub fn seed_listings() -> Vec<Listing> {
    let wifi = amenity("wifi", "WiFi", "wifi");
    let kitchen = amenity("kitchen", "Kitchen", "kitchen");
    let ac = amenity("ac", "Air conditioning", "ac_unit");
    let heating = amenity("heating", "Heating", "whatshot");
    let pool = amenity("pool", "Pool", "pool");

    vec![
        Listing {
            id: "1".to_string(),
            title: "Oceanfront Villa with Infinity Pool".to_string(),
            description: "Wake up to the sound of waves in this stunning villa overlooking the Pacific."
                .to_string(),
            owner: "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".to_string(),
            location: Location {
                address: "12 Shoreline Drive".to_string(),
                city: "Malibu".to_string(),
                state: Some("California".to_string()),
                country: "United States".to_string(),
                postal_code: Some("90265".to_string()),
                lat: Some(34.0259),
                long: Some(-118.7798),
            },
            images: vec![image("1-1", "/images/listings/villa-1.jpg", "Villa exterior")],
            price_per_night: 850.0,
            currency: Stablecoin::Usdc,
            max_guests: 8,
            bedrooms: 4,
            beds: 5,
            baths: 4,
            amenities: vec![wifi.clone(), kitchen.clone(), ac.clone(), pool.clone()],
            categories: vec![ListingCategory::Beach, ListingCategory::Villa],
            rating: Some(4.9),
            review_count: Some(28),
            created_at: day(2023, 1, 15),
            updated_at: day(2023, 8, 1),
            available: true,
        },
        Listing {
            id: "2".to_string(),
            title: "Cozy Mountain Cabin".to_string(),
            description: "A rustic log cabin with a wood stove, minutes from the ski lifts."
                .to_string(),
            owner: "0x70997970C51812dc3A010C7d01b50e0d17dc79C8".to_string(),
            location: Location {
                address: "88 Summit Trail".to_string(),
                city: "Aspen".to_string(),
                state: Some("Colorado".to_string()),
                country: "United States".to_string(),
                postal_code: Some("81611".to_string()),
                lat: Some(39.1911),
                long: Some(-106.8175),
            },
            images: vec![image("2-1", "/images/listings/cabin-1.jpg", "Cabin in winter")],
            price_per_night: 320.0,
            currency: Stablecoin::Usdc,
            max_guests: 4,
            bedrooms: 2,
            beds: 3,
            baths: 1,
            amenities: vec![wifi.clone(), kitchen.clone(), heating.clone()],
            categories: vec![ListingCategory::Cabin, ListingCategory::Mountain],
            rating: Some(4.8),
            review_count: Some(19),
            created_at: day(2023, 2, 10),
            updated_at: day(2023, 9, 12),
            available: true,
        },
        Listing {
            id: "3".to_string(),
            title: "Modern Downtown Loft".to_string(),
            description: "Industrial-chic loft with floor-to-ceiling windows in the heart of the city."
                .to_string(),
            owner: "0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC".to_string(),
            location: Location {
                address: "401 Mercer Street, Apt 7B".to_string(),
                city: "New York".to_string(),
                state: Some("New York".to_string()),
                country: "United States".to_string(),
                postal_code: Some("10012".to_string()),
                lat: Some(40.7259),
                long: Some(-73.9962),
            },
            images: vec![image("3-1", "/images/listings/loft-1.jpg", "Loft living room")],
            price_per_night: 275.0,
            currency: Stablecoin::Dai,
            max_guests: 2,
            bedrooms: 1,
            beds: 1,
            baths: 1,
            amenities: vec![wifi.clone(), kitchen.clone(), ac.clone()],
            categories: vec![ListingCategory::Apartment, ListingCategory::City],
            rating: Some(4.6),
            review_count: Some(42),
            created_at: day(2023, 3, 5),
            updated_at: day(2023, 10, 2),
            available: true,
        },
        Listing {
            id: "4".to_string(),
            title: "Charming Countryside Farmhouse".to_string(),
            description: "Restored stone farmhouse among the vineyards, with a garden terrace."
                .to_string(),
            owner: "0x90F79bf6EB2c4f870365E785982E1f101E93b906".to_string(),
            location: Location {
                address: "Via delle Colline 23".to_string(),
                city: "Siena".to_string(),
                state: Some("Tuscany".to_string()),
                country: "Italy".to_string(),
                postal_code: Some("53100".to_string()),
                lat: Some(43.3188),
                long: Some(11.3308),
            },
            images: vec![image("4-1", "/images/listings/farmhouse-1.jpg", "Farmhouse terrace")],
            price_per_night: 195.0,
            currency: Stablecoin::Usdt,
            max_guests: 6,
            bedrooms: 3,
            beds: 4,
            baths: 2,
            amenities: vec![wifi.clone(), kitchen.clone(), heating.clone()],
            categories: vec![ListingCategory::Countryside, ListingCategory::House],
            rating: Some(4.7),
            review_count: Some(15),
            created_at: day(2023, 4, 18),
            updated_at: day(2023, 11, 20),
            available: true,
        },
        Listing {
            id: "5".to_string(),
            title: "Magical Treehouse Retreat".to_string(),
            description: "A hand-built treehouse in the firs with a suspended walkway and skylight."
                .to_string(),
            owner: "0x15d34AAf54267DB7D7c367839AAf71A00a2C6A65".to_string(),
            location: Location {
                address: "7 Fern Hollow Lane".to_string(),
                city: "Portland".to_string(),
                state: Some("Oregon".to_string()),
                country: "United States".to_string(),
                postal_code: Some("97210".to_string()),
                lat: Some(45.5428),
                long: Some(-122.7245),
            },
            images: vec![image("5-1", "/images/listings/treehouse-1.jpg", "Treehouse at dusk")],
            price_per_night: 150.0,
            currency: Stablecoin::Usdc,
            max_guests: 2,
            bedrooms: 1,
            beds: 1,
            baths: 1,
            amenities: vec![wifi.clone(), heating.clone()],
            categories: vec![ListingCategory::Unique],
            rating: Some(5.0),
            review_count: Some(11),
            created_at: day(2023, 5, 22),
            updated_at: day(2023, 12, 1),
            available: true,
        },
        Listing {
            id: "6".to_string(),
            title: "Luxury Beachfront Estate".to_string(),
            description: "Private estate with direct beach access, chef's kitchen, and staff quarters."
                .to_string(),
            owner: "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".to_string(),
            location: Location {
                address: "Km 14 Carretera Costera".to_string(),
                city: "Tulum".to_string(),
                state: Some("Quintana Roo".to_string()),
                country: "Mexico".to_string(),
                postal_code: None,
                lat: Some(20.1620),
                long: Some(-87.4655),
            },
            images: vec![image("6-1", "/images/listings/estate-1.jpg", "Estate pool deck")],
            price_per_night: 1190.0,
            currency: Stablecoin::Usdc,
            max_guests: 10,
            bedrooms: 5,
            beds: 7,
            baths: 6,
            amenities: vec![wifi, kitchen, ac, heating, pool],
            categories: vec![ListingCategory::Beach, ListingCategory::Villa],
            rating: Some(4.9),
            review_count: Some(8),
            created_at: day(2023, 6, 30),
            updated_at: day(2024, 1, 5),
            available: true,
        },
    ]
}

pub fn seed_bookings() -> Vec<Booking> {
    vec![
        Booking {
            id: "b1".to_string(),
            listing_id: "1".to_string(),
            guest: "0x9965507D1a55bcC2695C58ba16FB37d819B0A4dc".to_string(),
            check_in: day(2023, 10, 15),
            check_out: day(2023, 10, 20),
            guests: 4,
            total_price: 4250.0,
            currency: BookingCurrency::Usdc,
            payment_method: PaymentMethod::Stablecoin,
            status: BookingStatus::Completed,
            transaction_hash: Some("0x123abc456def789ghi".to_string()),
            escrow_id: Some("e1".to_string()),
            created_at: day(2023, 9, 1),
            updated_at: day(2023, 10, 21),
        },
        Booking {
            id: "b2".to_string(),
            listing_id: "2".to_string(),
            guest: "0x976EA74026E726554dB657fA54763abd0C3a0aa9".to_string(),
            check_in: day(2023, 11, 10),
            check_out: day(2023, 11, 15),
            guests: 2,
            total_price: 1600.0,
            currency: BookingCurrency::Usdc,
            payment_method: PaymentMethod::Stablecoin,
            status: BookingStatus::Completed,
            transaction_hash: Some("0x456def789ghi123abc".to_string()),
            escrow_id: Some("e2".to_string()),
            created_at: day(2023, 10, 5),
            updated_at: day(2023, 11, 16),
        },
        Booking {
            id: "b3".to_string(),
            listing_id: "3".to_string(),
            guest: "0x14dC79964da2C08b23698B3D3cc7Ca32193d9955".to_string(),
            check_in: day(2023, 12, 20),
            check_out: day(2023, 12, 27),
            guests: 2,
            total_price: 1925.0,
            currency: BookingCurrency::Dai,
            payment_method: PaymentMethod::Stablecoin,
            status: BookingStatus::Completed,
            transaction_hash: Some("0x789ghi123abc456def".to_string()),
            escrow_id: Some("e3".to_string()),
            created_at: day(2023, 11, 15),
            updated_at: day(2023, 12, 28),
        },
        Booking {
            id: "b4".to_string(),
            listing_id: "4".to_string(),
            guest: "0x23618e81E3f5cdF7f54C3d65f7FBc0aBf5B21E8f".to_string(),
            check_in: day(2024, 1, 5),
            check_out: day(2024, 1, 12),
            guests: 5,
            total_price: 1365.0,
            currency: BookingCurrency::Usdt,
            payment_method: PaymentMethod::Stablecoin,
            status: BookingStatus::Completed,
            transaction_hash: Some("0xabc123def456ghi789".to_string()),
            escrow_id: Some("e4".to_string()),
            created_at: day(2023, 12, 10),
            updated_at: day(2024, 1, 13),
        },
        Booking {
            id: "b5".to_string(),
            listing_id: "5".to_string(),
            guest: "0xa0Ee7A142d267C1f36714E4a8F75612F20a79720".to_string(),
            check_in: day(2024, 2, 13),
            check_out: day(2024, 2, 16),
            guests: 2,
            total_price: 450.0,
            currency: BookingCurrency::Usdc,
            payment_method: PaymentMethod::Stablecoin,
            status: BookingStatus::Completed,
            transaction_hash: Some("0xdef456ghi789abc123".to_string()),
            escrow_id: Some("e5".to_string()),
            created_at: day(2024, 1, 20),
            updated_at: day(2024, 2, 17),
        },
        Booking {
            id: "b6".to_string(),
            listing_id: "6".to_string(),
            guest: "0xBcd4042DE499D14e55001CcbB24a551F3b954096".to_string(),
            check_in: day(2024, 6, 12),
            check_out: day(2024, 6, 17),
            guests: 8,
            total_price: 5950.0,
            currency: BookingCurrency::Usdc,
            payment_method: PaymentMethod::Stablecoin,
            status: BookingStatus::Confirmed,
            transaction_hash: Some("0xghi789abc123def456".to_string()),
            escrow_id: Some("e6".to_string()),
            created_at: day(2024, 4, 15),
            updated_at: day(2024, 4, 16),
        },
        Booking {
            id: "b7".to_string(),
            listing_id: "2".to_string(),
            guest: "0x71bE63f3384f5fb98995898A86B02Fb2426c5788".to_string(),
            check_in: day(2024, 9, 10),
            check_out: day(2024, 9, 13),
            guests: 2,
            total_price: 0.016,
            currency: BookingCurrency::Btc,
            payment_method: PaymentMethod::Lightning,
            status: BookingStatus::Pending,
            transaction_hash: None,
            escrow_id: None,
            created_at: day(2024, 8, 1),
            updated_at: day(2024, 8, 1),
        },
    ]
}

pub fn seed_escrows() -> Vec<EscrowData> {
    let rows = [
        ("e1", "b1", 4250.0, "USDC", "0x123abc456def789ghi"),
        ("e2", "b2", 1600.0, "USDC", "0x456def789ghi123abc"),
        ("e3", "b3", 1925.0, "DAI", "0x789ghi123abc456def"),
        ("e4", "b4", 1365.0, "USDT", "0xabc123def456ghi789"),
        ("e5", "b5", 450.0, "USDC", "0xdef456ghi789abc123"),
        ("e6", "b6", 5950.0, "USDC", "0xghi789abc123def456"),
    ];

    let bookings = seed_bookings();
    let listings = seed_listings();

    rows.iter()
        .enumerate()
        .map(|(idx, (id, booking_id, amount, currency, hash))| {
            let booking = &bookings[idx];
            let listing = &listings[idx];
            EscrowData {
                id: id.to_string(),
                booking_id: booking_id.to_string(),
                amount: *amount,
                currency: currency.to_string(),
                depositor: booking.guest.clone(),
                beneficiary: listing.owner.clone(),
                release_date: booking.check_out,
                status: if *id == "e6" {
                    EscrowStatus::Locked
                } else {
                    EscrowStatus::Released
                },
                transaction_hash: hash.to_string(),
                created_at: booking.created_at,
                updated_at: booking.updated_at,
            }
        })
        .collect()
}

pub fn seed_reviews() -> Vec<Review> {
    let rows: [(&str, &str, &str, usize, u8, &str); 6] = [
        (
            "r1",
            "1",
            "b1",
            5,
            5,
            "Absolutely stunning villa! The views were incredible and the host was very accommodating. Can't wait to come back!",
        ),
        (
            "r2",
            "2",
            "b2",
            6,
            5,
            "This cabin was the perfect mountain getaway. So cozy and the hiking trails nearby were amazing!",
        ),
        (
            "r3",
            "3",
            "b3",
            7,
            4,
            "Great location and stylish apartment. Could use a bit more kitchen supplies but overall a great stay.",
        ),
        (
            "r4",
            "4",
            "b4",
            8,
            5,
            "We loved our stay at this charming farmhouse! The countryside views were breathtaking and it was so peaceful.",
        ),
        (
            "r5",
            "5",
            "b5",
            9,
            5,
            "The treehouse was magical! Such a unique experience and the host thought of everything we might need.",
        ),
        (
            "r6",
            "2",
            "b2",
            6,
            4,
            "Second stay this season. Still great, though the hot water took a while on cold mornings.",
        ),
    ];

    let users = seed_users();
    let bookings = seed_bookings();

    rows.iter()
        .map(|(id, listing_id, booking_id, reviewer_idx, rating, comment)| {
            let written_at = bookings
                .iter()
                .find(|b| b.id == *booking_id)
                .map(|b| b.updated_at)
                .unwrap_or_else(Utc::now);
            Review {
                id: id.to_string(),
                listing_id: listing_id.to_string(),
                booking_id: Some(booking_id.to_string()),
                reviewer: users[*reviewer_idx].wallet_address.clone(),
                rating: *rating,
                comment: comment.to_string(),
                created_at: written_at,
                updated_at: written_at,
            }
        })
        .collect()
}
