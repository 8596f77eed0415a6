use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;

use blockstay::domain::model::{NewBooking, PaymentMethod};
use blockstay::domain::ports::{Latency, NetworkLatency, NoLatency};
use blockstay::utils::{dates, logger, validation::Validate, wallet};
use blockstay::{BookingService, CliConfig, ListingService, ReservationFlow};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting blockstay demo");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let latency: Arc<dyn Latency> = if config.no_delay {
        Arc::new(NoLatency)
    } else {
        Arc::new(NetworkLatency)
    };

    let listings = ListingService::new(latency.clone());
    let bookings = BookingService::new(latency.clone());
    let flow = ReservationFlow::new(bookings.clone());

    let listing = listings
        .get(&config.listing_id)
        .await
        .with_context(|| format!("No listing with id {}", config.listing_id))?;

    let check_in = dates::add_days(Utc::now(), 30);
    let check_out = dates::add_days(check_in, i64::from(config.nights));
    let total_price = listing.price_per_night * f64::from(config.nights);

    println!(
        "Reserving \"{}\" for {} ({} nights, {} {} total)",
        listing.title,
        wallet::format_wallet_address(&config.guest),
        config.nights,
        total_price,
        listing.currency
    );
    println!("Dates: {}", dates::format_date_range(check_in, check_out));

    let receipt = flow
        .reserve(
            NewBooking {
                listing_id: listing.id.clone(),
                guest: config.guest.clone(),
                check_in,
                check_out,
                guests: config.guests,
                total_price,
                currency: listing.currency.into(),
                payment_method: PaymentMethod::Stablecoin,
            },
            listing.owner.clone(),
        )
        .await?;

    println!("✅ Booking {} confirmed", receipt.booking.id);
    println!(
        "   Escrow {} locked until {}",
        receipt.escrow.id,
        dates::format_date(receipt.escrow.release_date)
    );
    println!(
        "   Transaction: {}",
        wallet::transaction_url(&receipt.escrow.transaction_hash, 1)
    );
    if config.verbose {
        println!("{}", serde_json::to_string_pretty(&receipt)?);
    }

    // Fast-forward past the stay and release the funds to the host.
    match flow.complete_stay(&receipt.escrow.id).await {
        Some(escrow) => {
            println!(
                "✅ Escrow {} released to {}",
                escrow.id,
                wallet::format_wallet_address(&escrow.beneficiary)
            );
        }
        None => {
            tracing::warn!("Escrow {} disappeared before release", receipt.escrow.id);
        }
    }

    Ok(())
}
