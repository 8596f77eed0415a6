use serde::Serialize;

use crate::domain::model::{Booking, EscrowData, NewBooking, Payment, WalletAddress};
use crate::services::BookingService;
use crate::utils::error::{MarketError, Result};

/// Everything produced by a completed reservation: the confirmed booking,
/// the payment receipt, and the locked escrow.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationReceipt {
    pub booking: Booking,
    pub payment: Payment,
    pub escrow: EscrowData,
}

/// Drives the reservation sequence across the booking service:
/// create booking -> process payment -> lock escrow. Each stage is logged;
/// the booking leaves the flow CONFIRMED with its escrow attached.
pub struct ReservationFlow {
    bookings: BookingService,
}

impl ReservationFlow {
    pub fn new(bookings: BookingService) -> Self {
        Self { bookings }
    }

    /// Run the happy path end to end. `beneficiary` is the host wallet the
    /// escrow will pay out to after the stay.
    pub async fn reserve(
        &self,
        request: NewBooking,
        beneficiary: WalletAddress,
    ) -> Result<ReservationReceipt> {
        tracing::info!("Starting reservation for listing {}", request.listing_id);

        tracing::info!("Creating booking...");
        let booking = self.bookings.create(request).await?;
        let booking_id = booking.id.clone();

        tracing::info!("Processing payment...");
        let payment = self
            .bookings
            .process_payment(
                &booking_id,
                booking.total_price,
                booking.currency,
                booking.payment_method,
            )
            .await;

        tracing::info!("Locking escrow...");
        let escrow = self
            .bookings
            .create_escrow(
                &booking_id,
                booking.total_price,
                booking.currency.as_str(),
                &booking.guest,
                &beneficiary,
            )
            .await?;

        // Re-read to pick up the CONFIRMED status and escrow linkage.
        let booking = self
            .bookings
            .get(&booking_id)
            .await
            .ok_or_else(|| MarketError::BookingNotFound {
                id: booking_id.clone(),
            })?;

        tracing::info!(
            "Reservation complete: booking {} confirmed with escrow {}",
            booking.id,
            escrow.id
        );
        Ok(ReservationReceipt {
            booking,
            payment,
            escrow,
        })
    }

    /// Post-stay release: escrow -> RELEASED, booking -> COMPLETED.
    pub async fn complete_stay(&self, escrow_id: &str) -> Option<EscrowData> {
        tracing::info!("Releasing escrow {}...", escrow_id);
        self.bookings.release_escrow(escrow_id).await
    }

    /// Cancellation path: escrow (if any) -> REFUNDED, booking -> CANCELLED.
    pub async fn cancel(&self, booking_id: &str) -> Option<(Booking, Option<EscrowData>)> {
        tracing::info!("Cancelling booking {}...", booking_id);
        self.bookings.cancel_and_refund(booking_id).await
    }
}
