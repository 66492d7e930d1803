//! Vendor service

use tracing::debug;

use crate::audit::EntityType;
use crate::error::{WedplanError, WedplanResult};
use crate::models::{Category, Money, Vendor, VendorId, VendorStatus};
use crate::planning::{query_vendors, VendorFilter, VendorStats};
use crate::storage::Storage;

/// Service for vendor management
pub struct VendorService<'a> {
    storage: &'a Storage,
}

/// Input for adding a vendor
#[derive(Debug, Clone)]
pub struct CreateVendorInput {
    pub name: String,
    pub category: Category,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub quoted_price: Option<Money>,
    pub notes: Option<String>,
}

impl CreateVendorInput {
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            category,
            contact_name: None,
            email: None,
            phone: None,
            website: None,
            quoted_price: None,
            notes: None,
        }
    }
}

/// Fields to change on a vendor; `None` leaves a field as it is
#[derive(Debug, Clone, Default)]
pub struct VendorUpdate {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub quoted_price: Option<Money>,
    pub final_price: Option<Money>,
    pub deposit_amount: Option<Money>,
    pub deposit_paid: Option<bool>,
    pub contract_signed: Option<bool>,
    pub rating: Option<u8>,
    pub notes: Option<String>,
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl<'a> VendorService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Vendors matching a filter and search text, booked first
    pub fn list(&self, filter: VendorFilter, search: &str) -> WedplanResult<Vec<Vendor>> {
        let vendors = self.storage.vendors.get_all()?;
        Ok(query_vendors(&vendors, filter, search)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn stats(&self) -> WedplanResult<VendorStats> {
        Ok(VendorStats::from_vendors(&self.storage.vendors.get_all()?))
    }

    pub fn get(&self, id: VendorId) -> WedplanResult<Option<Vendor>> {
        self.storage.vendors.get(id)
    }

    /// Find a vendor by name or ID string
    pub fn find(&self, identifier: &str) -> WedplanResult<Option<Vendor>> {
        if let Some(vendor) = self.storage.vendors.get_by_name(identifier)? {
            return Ok(Some(vendor));
        }
        self.storage.vendors.find(identifier)
    }

    fn require(&self, identifier: &str) -> WedplanResult<Vendor> {
        self.find(identifier)?
            .ok_or_else(|| WedplanError::vendor_not_found(identifier))
    }

    /// Add a vendor in the researching state
    pub fn add(&self, input: CreateVendorInput) -> WedplanResult<Vendor> {
        let name = input.name.trim();

        if self.storage.vendors.get_by_name(name)?.is_some() {
            return Err(WedplanError::Duplicate {
                entity_type: "Vendor",
                identifier: name.to_string(),
            });
        }

        let mut vendor = Vendor::new(name, input.category);
        vendor.contact_name = optional_text(input.contact_name);
        vendor.email = optional_text(input.email);
        vendor.phone = optional_text(input.phone);
        vendor.website = optional_text(input.website);
        vendor.quoted_price = input.quoted_price;
        vendor.notes = optional_text(input.notes);
        if vendor.quoted_price.is_some() {
            vendor.status = VendorStatus::Quoted;
        }

        vendor
            .validate()
            .map_err(|e| WedplanError::Validation(e.to_string()))?;

        self.storage.vendors.upsert(vendor.clone())?;
        self.storage.vendors.save()?;

        self.storage.log_create(
            EntityType::Vendor,
            vendor.id.to_string(),
            Some(vendor.name.clone()),
            &vendor,
        )?;

        debug!(vendor = %vendor.name, "Vendor added");
        Ok(vendor)
    }

    /// Move a vendor to any status
    pub fn set_status(&self, identifier: &str, status: VendorStatus) -> WedplanResult<Vendor> {
        let mut vendor = self.require(identifier)?;
        let before = vendor.clone();
        vendor.set_status(status);

        self.save_update(&before, &vendor)?;
        debug!(vendor = %vendor.name, status = %status, "Vendor status set");
        Ok(vendor)
    }

    /// Edit a vendor's details
    pub fn update(&self, identifier: &str, update: VendorUpdate) -> WedplanResult<Vendor> {
        let mut vendor = self.require(identifier)?;
        let before = vendor.clone();

        if let Some(name) = update.name {
            let name = name.trim();
            if let Some(existing) = self.storage.vendors.get_by_name(name)? {
                if existing.id != vendor.id {
                    return Err(WedplanError::Duplicate {
                        entity_type: "Vendor",
                        identifier: name.to_string(),
                    });
                }
            }
            vendor.name = name.to_string();
        }
        if let Some(category) = update.category {
            vendor.category = category;
        }
        if update.contact_name.is_some() {
            vendor.contact_name = optional_text(update.contact_name);
        }
        if update.email.is_some() {
            vendor.email = optional_text(update.email);
        }
        if update.phone.is_some() {
            vendor.phone = optional_text(update.phone);
        }
        if update.website.is_some() {
            vendor.website = optional_text(update.website);
        }
        if let Some(price) = update.quoted_price {
            vendor.quoted_price = Some(price);
        }
        if let Some(price) = update.final_price {
            vendor.final_price = Some(price);
        }
        if let Some(deposit) = update.deposit_amount {
            vendor.deposit_amount = Some(deposit);
        }
        if let Some(paid) = update.deposit_paid {
            vendor.deposit_paid = paid;
        }
        if let Some(signed) = update.contract_signed {
            vendor.contract_signed = signed;
        }
        if let Some(rating) = update.rating {
            vendor.rating = Some(rating);
        }
        if update.notes.is_some() {
            vendor.notes = optional_text(update.notes);
        }

        vendor
            .validate()
            .map_err(|e| WedplanError::Validation(e.to_string()))?;
        vendor.updated_at = chrono::Utc::now();

        self.save_update(&before, &vendor)?;
        Ok(vendor)
    }

    /// Remove a vendor; budget items keep their spend but lose the link
    pub fn remove(&self, identifier: &str) -> WedplanResult<Vendor> {
        let vendor = self.require(identifier)?;

        let linked: Vec<_> = self
            .storage
            .budget_items
            .get_all()?
            .into_iter()
            .filter(|i| i.vendor_id == Some(vendor.id))
            .collect();
        for mut item in linked {
            item.vendor_id = None;
            self.storage.budget_items.upsert(item)?;
        }

        self.storage.vendors.remove(vendor.id)?;
        self.storage.vendors.save()?;
        self.storage.budget_items.save()?;

        self.storage.log_delete(
            EntityType::Vendor,
            vendor.id.to_string(),
            Some(vendor.name.clone()),
            &vendor,
        )?;

        Ok(vendor)
    }

    fn save_update(&self, before: &Vendor, after: &Vendor) -> WedplanResult<()> {
        self.storage.vendors.upsert(after.clone())?;
        self.storage.vendors.save()?;
        self.storage.log_update(
            EntityType::Vendor,
            after.id.to_string(),
            Some(after.name.clone()),
            before,
            after,
            None,
        )
    }
}
