use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketError {
    #[error("Booking not found: {id}")]
    BookingNotFound { id: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidFieldValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

pub type Result<T> = std::result::Result<T, MarketError>;
