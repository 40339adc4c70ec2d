//! Property registry: registration, tenancy and rent payment.
use soroban_sdk::{log, Address, Env};

use crate::errors::RentError;
use crate::events::{MaintenanceUpdated, PropertyRegistered, RentPaid, TenantAssigned};
use crate::storage;
use crate::types::{PropertyRecord, RentLedger};

fn load(env: &Env, landlord: &Address) -> Result<PropertyRecord, RentError> {
    storage::read_property(env, landlord).ok_or_else(|| {
        log!(env, "no property registered", landlord.clone());
        RentError::NotRegistered
    })
}

/// Validates registration amounts. Both must be non-negative; zero is allowed.
pub fn validate_terms(rent_amount: i128, deposit: i128) -> Result<(), RentError> {
    if rent_amount < 0 || deposit < 0 {
        return Err(RentError::InvalidAmount);
    }
    Ok(())
}

/// Creates the landlord's property record.
///
/// # Errors
/// * `InvalidAmount` - If either amount is negative
/// * `AlreadyRegistered` - If the landlord already has a record
pub fn register_property(
    env: &Env,
    landlord: Address,
    rent_amount: i128,
    deposit: i128,
) -> Result<bool, RentError> {
    landlord.require_auth();

    if let Err(err) = validate_terms(rent_amount, deposit) {
        log!(env, "negative rent or deposit", landlord, rent_amount, deposit);
        return Err(err);
    }

    if storage::has_property(env, &landlord) {
        log!(env, "property already registered", landlord);
        return Err(RentError::AlreadyRegistered);
    }

    let record = PropertyRecord::new(rent_amount, deposit);
    storage::write_property(env, &landlord, &record);
    storage::increment_property_count(env);

    PropertyRegistered {
        landlord,
        rent_amount,
        deposit,
    }
    .publish(env);

    Ok(true)
}

/// Assigns the tenant of the landlord's property. A tenant can be set once.
///
/// # Errors
/// * `NotRegistered` - If the landlord has no record
/// * `InvalidTenant` - If the landlord names themselves
/// * `TenantAlreadyAssigned` - If a tenant is already set
pub fn assign_tenant(env: &Env, landlord: Address, tenant: Address) -> Result<bool, RentError> {
    landlord.require_auth();

    let mut record = load(env, &landlord)?;

    if tenant == landlord {
        log!(env, "landlord cannot be own tenant", landlord);
        return Err(RentError::InvalidTenant);
    }
    if record.tenant.is_some() {
        log!(env, "tenant already assigned", landlord);
        return Err(RentError::TenantAlreadyAssigned);
    }

    record.tenant = Some(tenant.clone());
    storage::write_property(env, &landlord, &record);

    TenantAssigned { landlord, tenant }.publish(env);

    Ok(true)
}

/// Records a rent payment from the assigned tenant.
///
/// The property record is left untouched; the payment is counted in the
/// landlord's `RentLedger`.
///
/// # Errors
/// * `NotRegistered` - If the landlord has no record
/// * `NoTenantAssigned` - If no tenant has been assigned yet
/// * `Unauthorized` - If `tenant` is not the assigned tenant
/// * `InvalidAmount` - If the running total would overflow
pub fn pay_rent(env: &Env, tenant: Address, landlord: Address) -> Result<bool, RentError> {
    tenant.require_auth();

    let record = load(env, &landlord)?;

    if record.tenant.is_none() {
        log!(env, "rent paid before tenant assigned", tenant, landlord);
        return Err(RentError::NoTenantAssigned);
    }
    if !record.is_tenant(&tenant) {
        log!(env, "rent payment from non-tenant", tenant, landlord);
        return Err(RentError::Unauthorized);
    }

    let paid_at = env.ledger().timestamp();
    let previous = storage::read_rent_ledger(env, &landlord).unwrap_or(RentLedger {
        payments: 0,
        total_paid: 0,
        last_paid_at: 0,
    });
    let ledger = match (
        previous.payments.checked_add(1),
        previous.total_paid.checked_add(record.rent_amount),
    ) {
        (Some(payments), Some(total_paid)) => RentLedger {
            payments,
            total_paid,
            last_paid_at: paid_at,
        },
        _ => {
            log!(env, "rent ledger overflow", landlord);
            return Err(RentError::InvalidAmount);
        }
    };
    storage::write_rent_ledger(env, &landlord, &ledger);

    RentPaid {
        landlord,
        tenant,
        amount: record.rent_amount,
        paid_at,
    }
    .publish(env);

    Ok(true)
}

/// Sets the maintenance flag on the landlord's property.
pub fn set_maintenance(
    env: &Env,
    landlord: Address,
    is_maintained: bool,
) -> Result<bool, RentError> {
    landlord.require_auth();

    let mut record = load(env, &landlord)?;
    record.is_maintained = is_maintained;
    storage::write_property(env, &landlord, &record);

    MaintenanceUpdated {
        landlord,
        is_maintained,
    }
    .publish(env);

    Ok(true)
}

pub fn get_property_details(env: &Env, landlord: Address) -> Option<PropertyRecord> {
    storage::read_property(env, &landlord)
}

pub fn has_property(env: &Env, landlord: Address) -> bool {
    storage::has_property(env, &landlord)
}

pub fn get_property_count(env: &Env) -> u32 {
    storage::property_count(env)
}

pub fn get_rent_ledger(env: &Env, landlord: Address) -> Option<RentLedger> {
    storage::read_rent_ledger(env, &landlord)
}
