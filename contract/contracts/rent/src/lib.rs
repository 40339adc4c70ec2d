#![no_std]

//! Rent Escrow Contract
//!
//! A landlord registers one property with its rent and deposit terms,
//! assigns a tenant once, and the tenant pays rent against that record.

use soroban_sdk::{contract, contractimpl, Address, Env};

mod errors;
mod events;
mod property;
mod storage;
mod types;


pub use errors::RentError;
pub use events::{MaintenanceUpdated, PropertyRegistered, RentPaid, TenantAssigned};
pub use property::validate_terms;
pub use storage::DataKey;
pub use types::{PropertyRecord, RentLedger};

#[contract]
pub struct RentContract;

#[contractimpl]
impl RentContract {
    /// Registers a property for `landlord`, who becomes the record key.
    ///
    /// Authorization:
    /// - Landlord MUST authorize registration
    ///
    /// # Errors
    /// * `InvalidAmount` - If rent or deposit is negative
    /// * `AlreadyRegistered` - If the landlord already registered a property
    pub fn register_property(
        env: Env,
        landlord: Address,
        rent_amount: i128,
        deposit: i128,
    ) -> Result<bool, RentError> {
        property::register_property(&env, landlord, rent_amount, deposit)
    }

    /// Assigns `tenant` to the landlord's property.
    ///
    /// Authorization:
    /// - Landlord MUST authorize the assignment
    ///
    /// # Errors
    /// * `NotRegistered` - If the landlord has no property
    /// * `InvalidTenant` - If the landlord names themselves
    /// * `TenantAlreadyAssigned` - If a tenant is already set
    pub fn assign_tenant(
        env: Env,
        landlord: Address,
        tenant: Address,
    ) -> Result<bool, RentError> {
        property::assign_tenant(&env, landlord, tenant)
    }

    /// Pays rent on the property owned by `landlord`.
    ///
    /// Authorization:
    /// - Tenant MUST authorize the payment
    ///
    /// # Errors
    /// * `NotRegistered` - If the landlord has no property
    /// * `NoTenantAssigned` - If no tenant has been assigned
    /// * `Unauthorized` - If `tenant` is not the assigned tenant
    pub fn pay_rent(env: Env, tenant: Address, landlord: Address) -> Result<bool, RentError> {
        property::pay_rent(&env, tenant, landlord)
    }

    /// Marks the landlord's property as maintained (or not).
    pub fn set_maintenance(
        env: Env,
        landlord: Address,
        is_maintained: bool,
    ) -> Result<bool, RentError> {
        property::set_maintenance(&env, landlord, is_maintained)
    }

    /// Returns the property registered by `landlord`, if any.
    pub fn get_property_details(env: Env, landlord: Address) -> Option<PropertyRecord> {
        property::get_property_details(&env, landlord)
    }

    /// Checks whether `landlord` has registered a property.
    pub fn has_property(env: Env, landlord: Address) -> bool {
        property::has_property(&env, landlord)
    }

    /// Returns the total number of registered properties.
    pub fn get_property_count(env: Env) -> u32 {
        property::get_property_count(&env)
    }

    /// Returns rent payment bookkeeping for `landlord`'s property.
    pub fn get_rent_ledger(env: Env, landlord: Address) -> Option<RentLedger> {
        property::get_rent_ledger(&env, landlord)
    }
}
