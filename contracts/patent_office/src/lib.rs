#![no_std]
use soroban_sdk::{contract, contractimpl, log, symbol_short, Address, Env, String, Vec};

mod storage;
mod types;

pub use types::{Error, License, Patent, PatentStatus, RENEWAL_TERM, REVIEW_QUOTA};

#[contract]
pub struct PatentOffice;

#[contractimpl]
impl PatentOffice {
    /// Record a new invention as `Pending` and return its id.
    /// Ids are handed out sequentially from 1.
    pub fn submit_patent(e: Env, inventor: Address, title: String, description: String) -> u64 {
        let id = storage::next_id(&e);
        let now = storage::now(&e);

        let patent = Patent {
            id,
            inventor: inventor.clone(),
            title,
            description,
            status: PatentStatus::Pending,
            timestamp: now,
            expiration: now + RENEWAL_TERM,
            reviews: Vec::new(&e),
        };

        let mut patents = storage::get_patents(&e);
        patents.set(id, patent);
        storage::put_patents(&e, &patents);

        e.events().publish((symbol_short!("submitted"), id), inventor);
        id
    }

    /// Add one reviewer's vote to a pending patent.
    ///
    /// Each reviewer votes once and at most three votes are taken. The patent
    /// is approved only when the third vote is an approval; a rejection in
    /// that slot leaves it pending with no further reviews possible.
    pub fn review_patent(e: Env, reviewer: Address, patent_id: u64, approve: bool) -> Result<(), Error> {
        let mut patents = storage::get_patents(&e);
        let mut patent = patents.get(patent_id).ok_or(Error::InvalidReview)?;

        if patent.status != PatentStatus::Pending
            || patent.reviews.len() >= REVIEW_QUOTA
            || patent.reviews.contains(&reviewer)
        {
            return Err(Error::InvalidReview);
        }

        patent.reviews.push_back(reviewer.clone());
        let approved = approve && patent.reviews.len() == REVIEW_QUOTA;
        if approved {
            patent.status = PatentStatus::Approved;
        }
        patents.set(patent_id, patent);
        storage::put_patents(&e, &patents);

        e.events().publish((symbol_short!("reviewed"), patent_id), (reviewer, approve));
        if approved {
            log!(&e, "patent approved", patent_id);
            e.events().publish((symbol_short!("approved"), patent_id), ());
        }
        Ok(())
    }

    /// Push the expiration of a live patent one full term past the current
    /// ledger sequence. Only the inventor may renew, and only before expiry.
    pub fn renew_patent(e: Env, inventor: Address, patent_id: u64) -> Result<(), Error> {
        let mut patents = storage::get_patents(&e);
        let mut patent = patents.get(patent_id).ok_or(Error::CannotRenew)?;

        let now = storage::now(&e);
        if patent.inventor != inventor || now >= patent.expiration {
            return Err(Error::CannotRenew);
        }

        patent.expiration = now + RENEWAL_TERM;
        let expiration = patent.expiration;
        patents.set(patent_id, patent);
        storage::put_patents(&e, &patents);

        log!(&e, "patent renewed", patent_id, expiration);
        e.events().publish((symbol_short!("renewed"), patent_id), expiration);
        Ok(())
    }

    /// List a license for an approved patent, held by its inventor until sold.
    pub fn offer_license(e: Env, inventor: Address, patent_id: u64, price: i128) -> Result<(), Error> {
        let patent = storage::get_patents(&e)
            .get(patent_id)
            .ok_or(Error::CannotOfferLicense)?;

        if patent.inventor != inventor || patent.status != PatentStatus::Approved {
            return Err(Error::CannotOfferLicense);
        }

        let mut licenses = storage::get_licenses(&e);
        licenses.push_back(License {
            patent_id,
            licensee: inventor.clone(),
            active: true,
            price,
        });
        storage::put_licenses(&e, &licenses);

        e.events().publish((symbol_short!("offered"), patent_id), (inventor, price));
        Ok(())
    }

    /// Transfer the first active license `seller` holds on `patent_id` to
    /// `buyer`. The listed price is consumed: the license is left at 0.
    pub fn purchase_license(e: Env, buyer: Address, patent_id: u64, seller: Address) -> Result<(), Error> {
        let mut licenses = storage::get_licenses(&e);

        for i in 0..licenses.len() {
            let mut license = licenses.get_unchecked(i);
            if license.patent_id != patent_id || license.licensee != seller || !license.active {
                continue;
            }

            license.licensee = buyer.clone();
            license.price = 0;
            licenses.set(i, license);
            storage::put_licenses(&e, &licenses);

            log!(&e, "license transferred", patent_id);
            e.events().publish((symbol_short!("purchased"), patent_id), (seller, buyer));
            return Ok(());
        }

        Err(Error::LicenseNotAvailable)
    }

    pub fn get_patent(e: Env, patent_id: u64) -> Option<Patent> {
        storage::get_patents(&e).get(patent_id)
    }

    /// Number of patents submitted so far, which is also the last id issued.
    pub fn patent_count(e: Env) -> u64 {
        storage::last_id(&e)
    }

    /// Licenses on one patent, in the order they were offered.
    pub fn licenses(e: Env, patent_id: u64) -> Vec<License> {
        let mut out = Vec::new(&e);
        for l in storage::get_licenses(&e).iter() {
            if l.patent_id == patent_id { out.push_back(l) }
        }
        out
    }
}
