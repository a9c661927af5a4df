use soroban_sdk::{contracterror, contracttype, Address, String, Vec};

/// Ledger sequences a patent stays in force after submission or renewal
/// (20 years of blocks).
pub const RENEWAL_TERM: u64 = 5_256_000;

/// Distinct reviews needed before a patent can be approved.
pub const REVIEW_QUOTA: u32 = 3;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PatentStatus {
    Pending,
    Approved,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Patent {
    pub id: u64,
    pub inventor: Address,
    pub title: String,
    pub description: String,
    pub status: PatentStatus,
    pub timestamp: u64,      // ledger sequence at submission
    pub expiration: u64,     // renewals rejected from this sequence on
    pub reviews: Vec<Address>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct License {
    pub patent_id: u64,
    pub licensee: Address,
    pub active: bool,
    pub price: i128,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    InvalidReview = 1,
    CannotRenew = 2,
    CannotOfferLicense = 3,
    LicenseNotAvailable = 4,
}
