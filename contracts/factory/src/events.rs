use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FactoryInitializedEvent {
    pub admin: Address,
    pub version: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionInstanceCreatedEvent {
    pub instance: Address,
    pub seller: Address,
    pub registry_id: u64,
    pub version: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ImplementationUpdatedEvent {
    pub version: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InstancesUpgradedEvent {
    pub version: u32,
    pub count: u64,
}

pub fn emit_factory_initialized(env: &Env, admin: Address, version: u32) {
    let event = FactoryInitializedEvent { admin: admin.clone(), version };
    env.events().publish(("factory_initialized", admin), event);
}

pub fn emit_auction_instance_created(
    env: &Env,
    instance: Address,
    seller: Address,
    registry_id: u64,
    version: u32,
) {
    let event = AuctionInstanceCreatedEvent {
        instance: instance.clone(),
        seller: seller.clone(),
        registry_id,
        version,
    };
    env.events().publish(("auction_instance_created", instance, seller), event);
}

pub fn emit_implementation_updated(env: &Env, version: u32) {
    let event = ImplementationUpdatedEvent { version };
    env.events().publish(("implementation_updated", version), event);
}

pub fn emit_instances_upgraded(env: &Env, version: u32, count: u64) {
    let event = InstancesUpgradedEvent { version, count };
    env.events().publish(("instances_upgraded", version), event);
}
