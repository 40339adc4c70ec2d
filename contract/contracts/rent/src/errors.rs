//! Rent escrow error types.
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum RentError {
    /// Landlord already has a registered property
    AlreadyRegistered = 1,
    /// No property registered for this landlord
    NotRegistered = 2,
    /// Caller is not the assigned tenant
    Unauthorized = 3,
    /// Property already has a tenant
    TenantAlreadyAssigned = 4,
    /// Property has no tenant yet
    NoTenantAssigned = 5,
    /// Negative amount, or rent ledger overflow
    InvalidAmount = 6,
    /// Landlord cannot be their own tenant
    InvalidTenant = 7,
}
