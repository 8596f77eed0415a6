pub mod booking;
pub mod listing;
pub mod review;
pub mod user;

pub use booking::BookingService;
pub use listing::ListingService;
pub use review::ReviewService;
pub use user::UserService;
