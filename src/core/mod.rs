pub mod flow;

pub use crate::domain::model::{Booking, EscrowData, Payment, SearchFilters};
pub use crate::domain::ports::{Latency, NetworkLatency, NoLatency};
pub use crate::utils::error::Result;
pub use flow::{ReservationFlow, ReservationReceipt};
