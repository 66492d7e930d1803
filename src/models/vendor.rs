//! Vendor model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::VendorId;
use super::money::Money;

labeled_enum! {
    /// Where the couple stands with a vendor
    pub enum VendorStatus {
        Researching => ("researching", "Researching"),
        Contacted => ("contacted", "Contacted"),
        Quoted => ("quoted", "Quoted"),
        Booked => ("booked", "Booked"),
        Declined => ("declined", "Declined"),
    }
}

impl Default for VendorStatus {
    fn default() -> Self {
        Self::Researching
    }
}

/// A photographer, florist, caterer...
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vendor {
    pub id: VendorId,

    pub name: String,

    pub category: Category,

    #[serde(default)]
    pub contact_name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub website: Option<String>,

    #[serde(default)]
    pub status: VendorStatus,

    #[serde(default)]
    pub quoted_price: Option<Money>,

    #[serde(default)]
    pub final_price: Option<Money>,

    #[serde(default)]
    pub deposit_amount: Option<Money>,

    #[serde(default)]
    pub deposit_paid: bool,

    #[serde(default)]
    pub contract_signed: bool,

    #[serde(default)]
    pub notes: Option<String>,

    /// 1 to 5 stars
    #[serde(default)]
    pub rating: Option<u8>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Vendor {
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        let now = Utc::now();
        Self {
            id: VendorId::new(),
            name: name.into(),
            category,
            contact_name: None,
            email: None,
            phone: None,
            website: None,
            status: VendorStatus::default(),
            quoted_price: None,
            final_price: None,
            deposit_amount: None,
            deposit_paid: false,
            contract_signed: false,
            notes: None,
            rating: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_booked(&self) -> bool {
        self.status == VendorStatus::Booked
    }

    /// Final price when agreed, otherwise the quote
    pub fn committed_price(&self) -> Money {
        self.final_price.or(self.quoted_price).unwrap_or_default()
    }

    /// Deposit amount counted as paid
    pub fn paid_deposit(&self) -> Money {
        if self.deposit_paid {
            self.deposit_amount.unwrap_or_default()
        } else {
            Money::zero()
        }
    }

    pub fn set_status(&mut self, status: VendorStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    pub fn validate(&self) -> Result<(), VendorValidationError> {
        if self.name.trim().is_empty() {
            return Err(VendorValidationError::EmptyName);
        }

        if let Some(rating) = self.rating {
            if !(1..=5).contains(&rating) {
                return Err(VendorValidationError::InvalidRating(rating));
            }
        }

        for (field, amount) in [
            ("quoted price", self.quoted_price),
            ("final price", self.final_price),
            ("deposit amount", self.deposit_amount),
        ] {
            if amount.is_some_and(|a| a.is_negative()) {
                return Err(VendorValidationError::NegativeAmount(field));
            }
        }

        Ok(())
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VendorValidationError {
    EmptyName,
    InvalidRating(u8),
    NegativeAmount(&'static str),
}

impl fmt::Display for VendorValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Vendor name cannot be empty"),
            Self::InvalidRating(r) => write!(f, "Rating must be between 1 and 5, got {}", r),
            Self::NegativeAmount(field) => write!(f, "The {} cannot be negative", field),
        }
    }
}

impl std::error::Error for VendorValidationError {}
