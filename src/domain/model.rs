use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hex account identifier; the user identity key across the marketplace.
/// Services compare addresses case-insensitively.
pub type WalletAddress = String;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub wallet_address: WalletAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingCategory {
    Apartment,
    House,
    Cabin,
    Villa,
    Beach,
    Mountain,
    Countryside,
    City,
    Unique,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub address: String,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingImage {
    pub id: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingAmenity {
    pub id: String,
    pub name: String,
    pub icon: String,
}

/// Currencies a listing can be priced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Stablecoin {
    Usdc,
    Usdt,
    Dai,
}

/// Currencies a booking can be paid in; BTC only via Lightning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingCurrency {
    Usdc,
    Usdt,
    Dai,
    Btc,
}

impl Stablecoin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stablecoin::Usdc => "USDC",
            Stablecoin::Usdt => "USDT",
            Stablecoin::Dai => "DAI",
        }
    }
}

impl std::fmt::Display for Stablecoin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Stablecoin> for BookingCurrency {
    fn from(coin: Stablecoin) -> Self {
        match coin {
            Stablecoin::Usdc => BookingCurrency::Usdc,
            Stablecoin::Usdt => BookingCurrency::Usdt,
            Stablecoin::Dai => BookingCurrency::Dai,
        }
    }
}

impl BookingCurrency {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingCurrency::Usdc => "USDC",
            BookingCurrency::Usdt => "USDT",
            BookingCurrency::Dai => "DAI",
            BookingCurrency::Btc => "BTC",
        }
    }
}

impl std::fmt::Display for BookingCurrency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Stablecoin,
    Lightning,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub owner: WalletAddress,
    pub location: Location,
    pub images: Vec<ListingImage>,
    pub price_per_night: f64,
    pub currency: Stablecoin,
    pub max_guests: u32,
    pub bedrooms: u32,
    pub beds: u32,
    pub baths: u32,
    pub amenities: Vec<ListingAmenity>,
    pub categories: Vec<ListingCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub available: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    Refunded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub listing_id: String,
    pub guest: WalletAddress,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub guests: u32,
    pub total_price: f64,
    pub currency: BookingCurrency,
    pub payment_method: PaymentMethod,
    pub status: BookingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escrow_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EscrowStatus {
    Locked,
    Released,
    Refunded,
}

/// Funds-holding record tied 1:1 to a booking once created, conceptually
/// released to the host after stay completion. The lock and transaction hash
/// are fabricated; there is no chain behind this.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscrowData {
    pub id: String,
    pub booking_id: String,
    pub amount: f64,
    pub currency: String,
    pub depositor: WalletAddress,
    pub beneficiary: WalletAddress,
    pub release_date: DateTime<Utc>,
    pub status: EscrowStatus,
    pub transaction_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub listing_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,
    pub reviewer: WalletAddress,
    pub rating: u8,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Refunded,
    Failed,
}

/// Produced by payment processing and handed straight back to the caller;
/// payments are never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub booking_id: String,
    pub amount: f64,
    pub currency: BookingCurrency,
    pub payment_method: PaymentMethod,
    pub status: PaymentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing search criteria. Unset fields are skipped; set fields are
/// AND-combined.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    pub location: Option<String>,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    pub guests: Option<u32>,
    pub category: Option<ListingCategory>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

/// Aggregate rating for a listing, recomputed on demand from its reviews and
/// never written back onto the listing row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    pub average: f64,
    pub count: usize,
}

/// Input for `ListingService::create`; id and timestamps are assigned by the
/// service.
#[derive(Debug, Clone)]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub owner: WalletAddress,
    pub location: Location,
    pub images: Vec<ListingImage>,
    pub price_per_night: f64,
    pub currency: Stablecoin,
    pub max_guests: u32,
    pub bedrooms: u32,
    pub beds: u32,
    pub baths: u32,
    pub amenities: Vec<ListingAmenity>,
    pub categories: Vec<ListingCategory>,
    pub available: bool,
}

/// Partial listing update; unset fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct ListingPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<Location>,
    pub images: Option<Vec<ListingImage>>,
    pub price_per_night: Option<f64>,
    pub currency: Option<Stablecoin>,
    pub max_guests: Option<u32>,
    pub bedrooms: Option<u32>,
    pub beds: Option<u32>,
    pub baths: Option<u32>,
    pub amenities: Option<Vec<ListingAmenity>>,
    pub categories: Option<Vec<ListingCategory>>,
    pub available: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct NewBooking {
    pub listing_id: String,
    pub guest: WalletAddress,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub guests: u32,
    pub total_price: f64,
    pub currency: BookingCurrency,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Clone)]
pub struct NewReview {
    pub listing_id: String,
    pub booking_id: Option<String>,
    pub reviewer: WalletAddress,
    pub rating: u8,
    pub comment: String,
}
