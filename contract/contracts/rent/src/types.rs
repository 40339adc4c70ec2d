//! On-ledger data types for the rent contract.
use soroban_sdk::{contracttype, Address};

/// Tenancy and rent terms for a single landlord.
///
/// The landlord is the storage key (`DataKey::Property`) and is not
/// repeated here.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PropertyRecord {
    pub tenant: Option<Address>,
    pub rent_amount: i128,
    pub deposit: i128,
    pub is_maintained: bool,
}

impl PropertyRecord {
    pub fn new(rent_amount: i128, deposit: i128) -> Self {
        Self {
            tenant: None,
            rent_amount,
            deposit,
            is_maintained: false,
        }
    }

    pub fn is_tenant(&self, who: &Address) -> bool {
        self.tenant.as_ref() == Some(who)
    }
}

/// Running record of accepted rent payments. No funds move through it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RentLedger {
    pub payments: u32,
    pub total_paid: i128,
    pub last_paid_at: u64,
}
