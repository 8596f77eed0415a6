pub mod config;
pub mod core;
pub mod domain;
pub mod services;
pub mod store;
pub mod utils;

pub use config::CliConfig;
pub use crate::core::flow::{ReservationFlow, ReservationReceipt};
pub use domain::ports::{Latency, NetworkLatency, NoLatency};
pub use services::{BookingService, ListingService, ReviewService, UserService};
pub use utils::error::{MarketError, Result};
