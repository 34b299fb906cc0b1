//! N-of-M authority set.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use thiserror::Error;

/// Authority sets hold strictly fewer than 256 members.
pub const MAX_AUTHORITIES: usize = 255;

#[derive(Error, Debug, PartialEq)]
pub enum AuthorityError {
    #[error("Invalid authority set: at most {max} authorities allowed, got {got}")]
    TooManyAuthorities { max: usize, got: usize },

    #[error("Invalid authority set: authority list is empty")]
    NoAuthorities,

    #[error("Invalid authority set: duplicate authority {address}")]
    DuplicateAuthority { address: String },

    #[error("Invalid threshold: required signatures must be greater than zero")]
    ZeroThreshold,

    #[error("Invalid threshold: {required} of {total} is not a majority")]
    ThresholdNotMajority { required: u32, total: usize },

    #[error("Invalid threshold: {required} of {total} leaves no spare authority")]
    ThresholdTooHigh { required: u32, total: usize },

    #[error("Not an authority: {address}")]
    NotAuthority { address: String },

    #[error("Already an authority: {address}")]
    AlreadyAuthority { address: String },
}

/// Ordered authority list with its signature threshold.
///
/// Invariants: `0 < required`, `required > len / 2`, `required < len`,
/// `len <= MAX_AUTHORITIES`, no duplicates.
#[cw_serde]
pub struct AuthoritySet {
    pub authorities: Vec<Addr>,
    pub required_signatures: u32,
}

impl AuthoritySet {
    pub fn new(authorities: Vec<Addr>, required_signatures: u32) -> Result<Self, AuthorityError> {
        let total = authorities.len();
        if total > MAX_AUTHORITIES {
            return Err(AuthorityError::TooManyAuthorities {
                max: MAX_AUTHORITIES,
                got: total,
            });
        }
        if total == 0 {
            return Err(AuthorityError::NoAuthorities);
        }
        if required_signatures == 0 {
            return Err(AuthorityError::ZeroThreshold);
        }
        if (required_signatures as usize) * 2 <= total {
            return Err(AuthorityError::ThresholdNotMajority {
                required: required_signatures,
                total,
            });
        }
        if required_signatures as usize >= total {
            return Err(AuthorityError::ThresholdTooHigh {
                required: required_signatures,
                total,
            });
        }
        for (i, addr) in authorities.iter().enumerate() {
            if authorities[..i].contains(addr) {
                return Err(AuthorityError::DuplicateAuthority {
                    address: addr.to_string(),
                });
            }
        }

        Ok(AuthoritySet {
            authorities,
            required_signatures,
        })
    }

    pub fn contains(&self, addr: &Addr) -> bool {
        self.authorities.contains(addr)
    }

    pub fn len(&self) -> usize {
        self.authorities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.authorities.is_empty()
    }

    /// Substitute `old` with `new` in place. Size and threshold are unchanged.
    pub fn replace(&mut self, old: &Addr, new: Addr) -> Result<(), AuthorityError> {
        if self.contains(&new) {
            return Err(AuthorityError::AlreadyAuthority {
                address: new.to_string(),
            });
        }
        let slot = self
            .authorities
            .iter_mut()
            .find(|a| *a == old)
            .ok_or_else(|| AuthorityError::NotAuthority {
                address: old.to_string(),
            })?;
        *slot = new;
        Ok(())
    }
}
