use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::model::{
    Booking, BookingCurrency, BookingStatus, EscrowData, EscrowStatus, NewBooking, Payment,
    PaymentMethod, PaymentStatus,
};
use crate::domain::ports::Latency;
use crate::store;
use crate::utils::error::{MarketError, Result};
use crate::utils::validation::{validate_date_order, validate_positive_number};
use crate::utils::wallet::random_tx_hash;

const LIST_DELAY: Duration = Duration::from_millis(500);
const GET_DELAY: Duration = Duration::from_millis(300);
const CREATE_DELAY: Duration = Duration::from_millis(800);
const STATUS_DELAY: Duration = Duration::from_millis(500);
const ESCROW_DELAY: Duration = Duration::from_millis(1000);
const CANCEL_DELAY: Duration = Duration::from_millis(1200);
const PAYMENT_DELAY: Duration = Duration::from_millis(1500);

/// Bookings and their escrow rows, in one service since every escrow is tied
/// 1:1 to a booking and the transitions touch both.
///
/// Lifecycle: PENDING -> CONFIRMED (escrow created) -> COMPLETED (escrow
/// released), with CANCELLED/REFUNDED reachable through
/// `cancel_and_refund`. Release and cancel do not check the current state
/// first; an already-refunded escrow can still be "released".
#[derive(Clone)]
pub struct BookingService {
    bookings: Arc<RwLock<Vec<Booking>>>,
    escrows: Arc<RwLock<Vec<EscrowData>>>,
    latency: Arc<dyn Latency>,
}

impl BookingService {
    /// Service backed by the seed fixtures.
    pub fn new(latency: Arc<dyn Latency>) -> Self {
        Self::with_data(store::seed_bookings(), store::seed_escrows(), latency)
    }

    pub fn with_data(
        bookings: Vec<Booking>,
        escrows: Vec<EscrowData>,
        latency: Arc<dyn Latency>,
    ) -> Self {
        Self {
            bookings: Arc::new(RwLock::new(bookings)),
            escrows: Arc::new(RwLock::new(escrows)),
            latency,
        }
    }

    pub async fn by_guest(&self, guest: &str) -> Vec<Booking> {
        self.latency.simulate(LIST_DELAY).await;
        self.bookings
            .read()
            .await
            .iter()
            .filter(|b| b.guest.eq_ignore_ascii_case(guest))
            .cloned()
            .collect()
    }

    pub async fn by_listing(&self, listing_id: &str) -> Vec<Booking> {
        self.latency.simulate(LIST_DELAY).await;
        self.bookings
            .read()
            .await
            .iter()
            .filter(|b| b.listing_id == listing_id)
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: &str) -> Option<Booking> {
        self.latency.simulate(GET_DELAY).await;
        self.bookings.read().await.iter().find(|b| b.id == id).cloned()
    }

    pub async fn get_escrow(&self, escrow_id: &str) -> Option<EscrowData> {
        self.latency.simulate(GET_DELAY).await;
        self.escrows
            .read()
            .await
            .iter()
            .find(|e| e.id == escrow_id)
            .cloned()
    }

    /// New booking in PENDING with no escrow attached.
    pub async fn create(&self, request: NewBooking) -> Result<Booking> {
        self.latency.simulate(CREATE_DELAY).await;

        validate_date_order("check_in", request.check_in, request.check_out)?;
        validate_positive_number("guests", request.guests, 1)?;

        let mut bookings = self.bookings.write().await;
        let now = Utc::now();
        let booking = Booking {
            id: format!("b{}", bookings.len() + 1),
            listing_id: request.listing_id,
            guest: request.guest,
            check_in: request.check_in,
            check_out: request.check_out,
            guests: request.guests,
            total_price: request.total_price,
            currency: request.currency,
            payment_method: request.payment_method,
            status: BookingStatus::Pending,
            transaction_hash: None,
            escrow_id: None,
            created_at: now,
            updated_at: now,
        };

        tracing::info!(
            "Created booking {} for listing {} ({} {})",
            booking.id,
            booking.listing_id,
            booking.total_price,
            booking.currency
        );
        bookings.push(booking.clone());
        Ok(booking)
    }

    pub async fn update_status(&self, id: &str, status: BookingStatus) -> Option<Booking> {
        self.latency.simulate(STATUS_DELAY).await;

        let mut bookings = self.bookings.write().await;
        let booking = bookings.iter_mut().find(|b| b.id == id)?;
        booking.status = status;
        booking.updated_at = Utc::now();
        Some(booking.clone())
    }

    /// Simulated payment processing. Produces a COMPLETED payment with a
    /// fabricated transaction hash for stablecoin transfers (Lightning
    /// payments have no on-chain hash). Does not touch the booking, and the
    /// amount is taken at face value rather than checked against the
    /// booking's total.
    pub async fn process_payment(
        &self,
        booking_id: &str,
        amount: f64,
        currency: BookingCurrency,
        payment_method: PaymentMethod,
    ) -> Payment {
        self.latency.simulate(PAYMENT_DELAY).await;

        let transaction_hash = match payment_method {
            PaymentMethod::Stablecoin => Some(random_tx_hash()),
            PaymentMethod::Lightning => None,
        };

        let now = Utc::now();
        let payment = Payment {
            id: Uuid::new_v4().to_string(),
            booking_id: booking_id.to_string(),
            amount,
            currency,
            payment_method,
            status: PaymentStatus::Completed,
            transaction_hash,
            created_at: now,
            updated_at: now,
        };

        tracing::info!(
            "Processed {:?} payment of {} {} for booking {}",
            payment_method,
            amount,
            currency,
            booking_id
        );
        payment
    }

    /// Lock funds for a booking. The escrow's release date is pinned to the
    /// booking's checkout date, and the booking transitions to CONFIRMED
    /// with the escrow id and transaction hash attached.
    ///
    /// This is the one lookup that errors instead of returning None: an
    /// unknown booking id is a hard failure here.
    pub async fn create_escrow(
        &self,
        booking_id: &str,
        amount: f64,
        currency: &str,
        depositor: &str,
        beneficiary: &str,
    ) -> Result<EscrowData> {
        self.latency.simulate(ESCROW_DELAY).await;

        let mut bookings = self.bookings.write().await;
        let mut escrows = self.escrows.write().await;

        let booking = bookings
            .iter_mut()
            .find(|b| b.id == booking_id)
            .ok_or_else(|| MarketError::BookingNotFound {
                id: booking_id.to_string(),
            })?;

        let tx_hash = random_tx_hash();
        let now = Utc::now();
        let escrow = EscrowData {
            id: format!("e{}", escrows.len() + 1),
            booking_id: booking_id.to_string(),
            amount,
            currency: currency.to_string(),
            depositor: depositor.to_string(),
            beneficiary: beneficiary.to_string(),
            release_date: booking.check_out,
            status: EscrowStatus::Locked,
            transaction_hash: tx_hash.clone(),
            created_at: now,
            updated_at: now,
        };

        booking.status = BookingStatus::Confirmed;
        booking.escrow_id = Some(escrow.id.clone());
        booking.transaction_hash = Some(tx_hash);
        booking.updated_at = now;

        tracing::info!(
            "Locked escrow {} ({} {}) for booking {}; release on {}",
            escrow.id,
            amount,
            currency,
            booking_id,
            escrow.release_date
        );
        escrows.push(escrow.clone());
        Ok(escrow)
    }

    /// Release locked funds to the beneficiary: escrow -> RELEASED, linked
    /// booking -> COMPLETED. Unknown ids yield None. Not idempotent-safe: a
    /// second call re-applies both transitions and still reports success.
    pub async fn release_escrow(&self, escrow_id: &str) -> Option<EscrowData> {
        self.latency.simulate(ESCROW_DELAY).await;

        let mut bookings = self.bookings.write().await;
        let mut escrows = self.escrows.write().await;

        let escrow = escrows.iter_mut().find(|e| e.id == escrow_id)?;
        escrow.status = EscrowStatus::Released;
        escrow.updated_at = Utc::now();

        if let Some(booking) = bookings
            .iter_mut()
            .find(|b| b.escrow_id.as_deref() == Some(escrow_id))
        {
            booking.status = BookingStatus::Completed;
            booking.updated_at = Utc::now();
            tracing::info!(
                "Released escrow {}; booking {} completed",
                escrow_id,
                booking.id
            );
        }

        Some(escrow.clone())
    }

    /// Cancel a booking and refund its escrow if one exists. Applies
    /// regardless of the current state; there is no check that cancellation
    /// happens before check-in. Unknown booking ids yield None.
    pub async fn cancel_and_refund(
        &self,
        booking_id: &str,
    ) -> Option<(Booking, Option<EscrowData>)> {
        self.latency.simulate(CANCEL_DELAY).await;

        let mut bookings = self.bookings.write().await;
        let mut escrows = self.escrows.write().await;

        let booking = bookings.iter_mut().find(|b| b.id == booking_id)?;

        let refunded = booking.escrow_id.as_ref().and_then(|escrow_id| {
            let escrow = escrows.iter_mut().find(|e| &e.id == escrow_id)?;
            escrow.status = EscrowStatus::Refunded;
            escrow.updated_at = Utc::now();
            Some(escrow.clone())
        });

        booking.status = BookingStatus::Cancelled;
        booking.updated_at = Utc::now();

        tracing::info!(
            "Cancelled booking {} (escrow refunded: {})",
            booking_id,
            refunded.is_some()
        );
        Some((booking.clone(), refunded))
    }
}
