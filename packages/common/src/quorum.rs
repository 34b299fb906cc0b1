//! Signature accumulation shared by every authority-gated flow.
//!
//! A `Quorum` counts distinct voters per subject (a 32-byte id) under a
//! topic. The call that lifts the count to the threshold is the only one
//! that sees `Vote::Reached`; the caller performs the finalizing effect
//! exactly then. Repeat votes and votes after finalization are recorded as
//! no-ops and are not errors.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdResult, Storage};
use cw_storage_plus::Map;

/// (topic, subject, voter) => voted
const VOTES: Map<(&str, &[u8], &Addr), bool> = Map::new("quorum_votes");

/// (topic, subject) => tally
const TALLIES: Map<(&str, &[u8]), Tally> = Map::new("quorum_tallies");

#[cw_serde]
#[derive(Default)]
pub struct Tally {
    /// Distinct voters counted before finalization
    pub signed_count: u32,
    /// Whether the threshold has been reached
    pub finalized: bool,
}

/// Outcome of a single vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    /// Counted, threshold not yet reached
    Counted(u32),
    /// Voter had already voted on this subject
    Duplicate(u32),
    /// This vote reached the threshold
    Reached(u32),
    /// Subject was finalized before this vote
    AlreadyFinalized(u32),
}

impl Vote {
    pub fn signed_count(&self) -> u32 {
        match self {
            Vote::Counted(n) | Vote::Duplicate(n) | Vote::Reached(n) | Vote::AlreadyFinalized(n) => {
                *n
            }
        }
    }

    pub fn is_reached(&self) -> bool {
        matches!(self, Vote::Reached(_))
    }

    /// Attribute value describing the outcome.
    pub fn as_str(&self) -> &'static str {
        match self {
            Vote::Counted(_) => "counted",
            Vote::Duplicate(_) => "duplicate",
            Vote::Reached(_) => "reached",
            Vote::AlreadyFinalized(_) => "already_finalized",
        }
    }
}

pub struct Quorum {
    topic: &'static str,
}

impl Quorum {
    pub const fn new(topic: &'static str) -> Self {
        Quorum { topic }
    }

    /// Record `voter`'s signature on `subject`. The voter must already be
    /// known to be an authority.
    pub fn record(
        &self,
        storage: &mut dyn Storage,
        subject: &[u8],
        voter: &Addr,
        threshold: u32,
    ) -> StdResult<Vote> {
        let mut tally = self.tally(storage, subject)?;
        if tally.finalized {
            return Ok(Vote::AlreadyFinalized(tally.signed_count));
        }
        if VOTES.has(storage, (self.topic, subject, voter)) {
            return Ok(Vote::Duplicate(tally.signed_count));
        }

        VOTES.save(storage, (self.topic, subject, voter), &true)?;
        tally.signed_count += 1;
        let vote = if tally.signed_count >= threshold {
            tally.finalized = true;
            Vote::Reached(tally.signed_count)
        } else {
            Vote::Counted(tally.signed_count)
        };
        TALLIES.save(storage, (self.topic, subject), &tally)?;

        Ok(vote)
    }

    pub fn tally(&self, storage: &dyn Storage, subject: &[u8]) -> StdResult<Tally> {
        Ok(TALLIES
            .may_load(storage, (self.topic, subject))?
            .unwrap_or_default())
    }

    pub fn has_voted(&self, storage: &dyn Storage, subject: &[u8], voter: &Addr) -> bool {
        VOTES.has(storage, (self.topic, subject, voter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockStorage;

    const DEPOSITS: Quorum = Quorum::new("deposit");
    const REDEEMS: Quorum = Quorum::new("redeem");

    #[test]
    fn test_threshold_reached_once() {
        let mut storage = MockStorage::new();
        let subject = [1u8; 32];
        let a = Addr::unchecked("a");
        let b = Addr::unchecked("b");
        let c = Addr::unchecked("c");

        assert_eq!(
            DEPOSITS.record(&mut storage, &subject, &a, 2).unwrap(),
            Vote::Counted(1)
        );
        assert_eq!(
            DEPOSITS.record(&mut storage, &subject, &b, 2).unwrap(),
            Vote::Reached(2)
        );
        assert_eq!(
            DEPOSITS.record(&mut storage, &subject, &c, 2).unwrap(),
            Vote::AlreadyFinalized(2)
        );

        let tally = DEPOSITS.tally(&storage, &subject).unwrap();
        assert_eq!(
            tally,
            Tally {
                signed_count: 2,
                finalized: true
            }
        );
        assert!(!DEPOSITS.has_voted(&storage, &subject, &c));
    }

    #[test]
    fn test_duplicate_vote_not_counted() {
        let mut storage = MockStorage::new();
        let subject = [2u8; 32];
        let a = Addr::unchecked("a");

        DEPOSITS.record(&mut storage, &subject, &a, 2).unwrap();
        let vote = DEPOSITS.record(&mut storage, &subject, &a, 2).unwrap();
        assert_eq!(vote, Vote::Duplicate(1));
        assert!(!DEPOSITS.tally(&storage, &subject).unwrap().finalized);
    }

    #[test]
    fn test_topics_are_independent() {
        let mut storage = MockStorage::new();
        let subject = [3u8; 32];
        let a = Addr::unchecked("a");

        DEPOSITS.record(&mut storage, &subject, &a, 2).unwrap();
        assert_eq!(
            REDEEMS.record(&mut storage, &subject, &a, 2).unwrap(),
            Vote::Counted(1)
        );
    }

    #[test]
    fn test_unknown_subject_has_empty_tally() {
        let storage = MockStorage::new();
        assert_eq!(DEPOSITS.tally(&storage, &[9u8; 32]).unwrap(), Tally::default());
    }
}
