use soroban_sdk::{symbol_short, Env, Map, Symbol, Vec};
use crate::types::{License, Patent};

pub fn k_next() -> Symbol { symbol_short!("next") }
pub fn k_patents() -> Symbol { symbol_short!("patents") }
pub fn k_licenses() -> Symbol { symbol_short!("licenses") }

pub fn last_id(e: &Env) -> u64 {
    e.storage().instance().get(&k_next()).unwrap_or(0)
}

pub fn next_id(e: &Env) -> u64 {
    let n = last_id(e) + 1;
    e.storage().instance().set(&k_next(), &n);
    extend_instance(e);
    n
}

/// Keep the registry alive for as long as the host allows. Patents run for
/// `RENEWAL_TERM` sequences, far past the default instance TTL.
pub fn extend_instance(e: &Env) {
    let max = e.storage().max_ttl();
    e.storage().instance().extend_ttl(max, max);
}

pub fn get_patents(e: &Env) -> Map<u64, Patent> {
    e.storage().instance().get(&k_patents()).unwrap_or(Map::new(e))
}

pub fn put_patents(e: &Env, m: &Map<u64, Patent>) {
    e.storage().instance().set(&k_patents(), m);
    extend_instance(e);
}

pub fn get_licenses(e: &Env) -> Vec<License> {
    e.storage().instance().get(&k_licenses()).unwrap_or(Vec::new(e))
}

pub fn put_licenses(e: &Env, v: &Vec<License>) {
    e.storage().instance().set(&k_licenses(), v);
    extend_instance(e);
}

/// Current clock: the ledger sequence stands in for block height.
pub fn now(e: &Env) -> u64 {
    u64::from(e.ledger().sequence())
}
