//! Storage keys and TTL policy for the rent contract.
use soroban_sdk::{contracttype, Address, Env};

use crate::types::{PropertyRecord, RentLedger};

// Ledgers are ~5s apart; thresholds keep live entries from archiving.
pub(crate) const INSTANCE_TTL_THRESHOLD: u32 = 100_000;
pub(crate) const INSTANCE_TTL_EXTEND: u32 = 500_000;
pub(crate) const PERSISTENT_TTL_THRESHOLD: u32 = 100_000;
pub(crate) const PERSISTENT_TTL_EXTEND: u32 = 500_000;

/// Storage key variants.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Property record keyed by landlord
    Property(Address),
    /// Rent payment bookkeeping keyed by landlord
    RentLedger(Address),
    /// Counter for total registered properties
    PropertyCount,
}

pub(crate) fn has_property(env: &Env, landlord: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Property(landlord.clone()))
}

pub(crate) fn read_property(env: &Env, landlord: &Address) -> Option<PropertyRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Property(landlord.clone()))
}

pub(crate) fn write_property(env: &Env, landlord: &Address, record: &PropertyRecord) {
    let key = DataKey::Property(landlord.clone());
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

pub(crate) fn read_rent_ledger(env: &Env, landlord: &Address) -> Option<RentLedger> {
    env.storage()
        .persistent()
        .get(&DataKey::RentLedger(landlord.clone()))
}

pub(crate) fn write_rent_ledger(env: &Env, landlord: &Address, ledger: &RentLedger) {
    let key = DataKey::RentLedger(landlord.clone());
    env.storage().persistent().set(&key, ledger);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

pub(crate) fn property_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::PropertyCount)
        .unwrap_or(0)
}

pub(crate) fn increment_property_count(env: &Env) {
    let count = property_count(env).saturating_add(1);
    env.storage().instance().set(&DataKey::PropertyCount, &count);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}
