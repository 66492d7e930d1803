//! CSV Export functionality
//!
//! Exports the guest list and the budget items to CSV. The guest columns
//! start with the ones the guest import reads, so an exported list can be
//! imported into another plan.

use crate::error::{WedplanError, WedplanResult};
use crate::models::Money;
use crate::storage::Storage;
use std::collections::HashMap;
use std::io::Write;

fn csv_err(e: csv::Error) -> WedplanError {
    WedplanError::Export(e.to_string())
}

/// Plain decimal amount, no symbol or grouping
fn amount(money: Money) -> String {
    format!("{:.2}", money.cents() as f64 / 100.0)
}

/// Export the guest list to CSV
pub fn export_guests_csv<W: Write>(storage: &Storage, writer: W) -> WedplanResult<()> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record([
        "first_name",
        "last_name",
        "email",
        "relation",
        "side",
        "plus_one",
        "phone",
        "plus_one_name",
        "rsvp_status",
        "rsvp_code",
        "meal_choice",
        "dietary_restrictions",
        "notes",
    ])
    .map_err(csv_err)?;

    for guest in storage.guests.get_all()? {
        csv.write_record([
            guest.first_name.as_str(),
            guest.last_name.as_str(),
            guest.email.as_deref().unwrap_or(""),
            guest.relation.as_str(),
            guest.side.as_str(),
            if guest.plus_one_allowed { "yes" } else { "no" },
            guest.phone.as_deref().unwrap_or(""),
            guest.plus_one_name.as_deref().unwrap_or(""),
            guest.rsvp_status.as_str(),
            guest.rsvp_code.as_str(),
            guest.meal_choice.as_deref().unwrap_or(""),
            guest.dietary_restrictions.as_deref().unwrap_or(""),
            guest.notes.as_deref().unwrap_or(""),
        ])
        .map_err(csv_err)?;
    }

    csv.flush()?;
    Ok(())
}

/// Export budget items to CSV, one row per item with its category and vendor
pub fn export_budget_csv<W: Write>(storage: &Storage, writer: W) -> WedplanResult<()> {
    let category_names: HashMap<_, _> = storage
        .budget_categories
        .get_all()?
        .into_iter()
        .map(|c| (c.id, c.name))
        .collect();
    let vendor_names: HashMap<_, _> = storage
        .vendors
        .get_all()?
        .into_iter()
        .map(|v| (v.id, v.name))
        .collect();

    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([
        "id",
        "category",
        "name",
        "vendor",
        "estimated_cost",
        "actual_cost",
        "payment_status",
        "due_date",
        "paid_date",
        "notes",
    ])
    .map_err(csv_err)?;

    for item in storage.budget_items.get_all()? {
        let category = category_names
            .get(&item.category_id)
            .map(String::as_str)
            .unwrap_or("Unknown");
        let vendor = item
            .vendor_id
            .and_then(|id| vendor_names.get(&id))
            .map(String::as_str)
            .unwrap_or("");

        csv.write_record([
            item.id.to_string(),
            category.to_string(),
            item.name.clone(),
            vendor.to_string(),
            amount(item.estimated_cost),
            item.actual_cost.map(amount).unwrap_or_default(),
            item.payment_status.as_str().to_string(),
            item.due_date.map(|d| d.to_string()).unwrap_or_default(),
            item.paid_date.map(|d| d.to_string()).unwrap_or_default(),
            item.notes.clone().unwrap_or_default(),
        ])
        .map_err(csv_err)?;
    }

    csv.flush()?;
    Ok(())
}
