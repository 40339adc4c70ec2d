//! Contract events for the rent contract.
use soroban_sdk::{contractevent, Address};

/// Emitted when a landlord registers a property
#[contractevent(topics = ["property_registered"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PropertyRegistered {
    #[topic]
    pub landlord: Address,
    pub rent_amount: i128,
    pub deposit: i128,
}

/// Emitted when a tenant is assigned to a property
#[contractevent(topics = ["tenant_assigned"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TenantAssigned {
    #[topic]
    pub landlord: Address,
    pub tenant: Address,
}

/// Emitted for every accepted rent payment
#[contractevent(topics = ["rent_paid"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RentPaid {
    #[topic]
    pub landlord: Address,
    pub tenant: Address,
    pub amount: i128,
    pub paid_at: u64,
}

#[contractevent(topics = ["maintenance_updated"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MaintenanceUpdated {
    #[topic]
    pub landlord: Address,
    pub is_maintained: bool,
}
