use anchor_lang::prelude::*;

#[error_code]
pub enum RegistryError {
    #[msg("Unauthorized: caller may not modify this property")]
    Unauthorized,

    #[msg("Property already registered under this id")]
    AlreadyRegistered,

    #[msg("Property not found")]
    NotFound,

    #[msg("Invalid parameters: value must be positive and strings within bounds")]
    InvalidParams,

    #[msg("Invalid percentage: revenue share must be between 0 and 100")]
    InvalidPercentage,

    #[msg("Record has expired")]
    Expired,
}
