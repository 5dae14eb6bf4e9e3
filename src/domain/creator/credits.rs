use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Question-posting allowance of a creator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "remaining", rename_all = "lowercase")]
#[ts(export)]
pub enum Credits {
    Limited(u32),
    Unlimited,
}

impl Default for Credits {
    fn default() -> Self {
        Self::Limited(0)
    }
}

impl Credits {
    pub fn has_credit(&self) -> bool {
        match self {
            Self::Limited(n) => *n > 0,
            Self::Unlimited => true,
        }
    }

    /// Consumes one credit and returns the new balance.
    pub fn spend(self) -> Result<Self, DomainError> {
        match self {
            Self::Limited(0) => Err(DomainError::InsufficientCredits),
            Self::Limited(n) => Ok(Self::Limited(n - 1)),
            Self::Unlimited => Ok(Self::Unlimited),
        }
    }

    pub fn grant(self, pack: CreditPack) -> Self {
        match (self, pack.credits()) {
            (Self::Limited(have), Self::Limited(add)) => Self::Limited(have.saturating_add(add)),
            _ => Self::Unlimited,
        }
    }
}

/// In-app purchase packs. Payment happens elsewhere; this only maps a
/// completed purchase to the credits it grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum CreditPack {
    Single,
    Five,
    Pro,
    Lifetime,
}

impl CreditPack {
    pub const ALL: [CreditPack; 4] = [Self::Single, Self::Five, Self::Pro, Self::Lifetime];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Five => "five",
            Self::Pro => "pro",
            Self::Lifetime => "lifetime",
        }
    }

    pub fn credits(&self) -> Credits {
        match self {
            Self::Single => Credits::Limited(1),
            Self::Five => Credits::Limited(5),
            Self::Pro => Credits::Limited(15),
            Self::Lifetime => Credits::Unlimited,
        }
    }

    /// Resolves a store product id such as `com.wouldyourather.pro`.
    pub fn from_product_id(product_id: &str) -> Option<Self> {
        let suffix = product_id.rsplit('.').next()?;
        Self::ALL.into_iter().find(|pack| pack.id() == suffix)
    }
}
