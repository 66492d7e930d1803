//! Vendor display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::settings::Settings;
use crate::models::{Money, Vendor};
use crate::planning::VendorStats;

use super::{money, or_dash};

#[derive(Tabled)]
struct VendorRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Deposit")]
    deposit: String,
    #[tabled(rename = "Contract")]
    contract: &'static str,
    #[tabled(rename = "Rating")]
    rating: String,
}

impl VendorRow {
    fn new(settings: &Settings, vendor: &Vendor) -> Self {
        let price = vendor
            .final_price
            .or(vendor.quoted_price)
            .map(|p| money(settings, p))
            .unwrap_or_default();
        let deposit = match vendor.deposit_amount {
            Some(amount) if vendor.deposit_paid => format!("{} paid", money(settings, amount)),
            Some(amount) => money(settings, amount),
            None => String::new(),
        };
        Self {
            name: vendor.name.clone(),
            category: vendor.category.label(),
            status: vendor.status.label(),
            price,
            deposit,
            contract: if vendor.contract_signed { "signed" } else { "" },
            rating: vendor
                .rating
                .map(|r| "★".repeat(r as usize))
                .unwrap_or_default(),
        }
    }
}

/// Format vendors as a table
pub fn format_vendor_list(settings: &Settings, vendors: &[Vendor]) -> String {
    if vendors.is_empty() {
        return "No vendors found.\n".to_string();
    }

    let mut table = Table::new(vendors.iter().map(|v| VendorRow::new(settings, v)));
    table.with(Style::psql());
    format!("{}\n", table)
}

pub fn format_vendor_stats(settings: &Settings, stats: &VendorStats) -> String {
    let mut output = String::new();
    output.push_str(&format!("Vendors:          {}\n", stats.total));
    output.push_str(&format!("  Booked:         {}\n", stats.booked));
    output.push_str(&format!(
        "Committed spend:  {}\n",
        money(settings, stats.committed_spend)
    ));
    output.push_str(&format!(
        "Deposits paid:    {}\n",
        money(settings, stats.deposits_paid)
    ));
    output
}

/// Format a single vendor
pub fn format_vendor_details(settings: &Settings, vendor: &Vendor) -> String {
    let amount = |m: Option<Money>| {
        m.map(|m| money(settings, m)).unwrap_or_else(|| "-".into())
    };

    let mut output = String::new();
    output.push_str(&format!("Vendor: {}\n", vendor.name));
    output.push_str(&format!("  ID:          {}\n", vendor.id));
    output.push_str(&format!("  Category:    {}\n", vendor.category));
    output.push_str(&format!("  Status:      {}\n", vendor.status));
    output.push_str(&format!("  Contact:     {}\n", or_dash(vendor.contact_name.as_deref())));
    output.push_str(&format!("  Email:       {}\n", or_dash(vendor.email.as_deref())));
    output.push_str(&format!("  Phone:       {}\n", or_dash(vendor.phone.as_deref())));
    output.push_str(&format!("  Website:     {}\n", or_dash(vendor.website.as_deref())));
    output.push_str(&format!("  Quote:       {}\n", amount(vendor.quoted_price)));
    output.push_str(&format!("  Final price: {}\n", amount(vendor.final_price)));
    output.push_str(&format!(
        "  Deposit:     {}{}\n",
        amount(vendor.deposit_amount),
        if vendor.deposit_paid { " (paid)" } else { "" }
    ));
    output.push_str(&format!(
        "  Contract:    {}\n",
        if vendor.contract_signed { "Signed" } else { "Not signed" }
    ));
    output.push_str(&format!(
        "  Rating:      {}\n",
        vendor
            .rating
            .map(|r| format!("{}/5", r))
            .unwrap_or_else(|| "-".into())
    ));
    output.push_str(&format!("  Notes:       {}\n", or_dash(vendor.notes.as_deref())));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, VendorStatus};

    #[test]
    fn test_vendor_table() {
        let mut vendor = Vendor::new("Bloom & Vine", Category::Flowers);
        vendor.status = VendorStatus::Booked;
        vendor.quoted_price = Some(Money::from_dollars(3_400));
        vendor.final_price = Some(Money::from_dollars(3_200));
        vendor.deposit_amount = Some(Money::from_dollars(800));
        vendor.deposit_paid = true;
        vendor.rating = Some(4);

        let output = format_vendor_list(&Settings::default(), &[vendor]);
        assert!(output.contains("Bloom & Vine"));
        assert!(output.contains("$3,200"));
        assert!(!output.contains("$3,400"));
        assert!(output.contains("$800 paid"));
        assert!(output.contains("★★★★"));
    }

    #[test]
    fn test_empty() {
        assert_eq!(
            format_vendor_list(&Settings::default(), &[]),
            "No vendors found.\n"
        );
    }

    #[test]
    fn test_details() {
        let vendor = Vendor::new("Lens & Light", Category::Photography);
        let output = format_vendor_details(&Settings::default(), &vendor);
        assert!(output.contains("Status:      Researching"));
        assert!(output.contains("Contract:    Not signed"));
        assert!(output.contains("Quote:       -"));
    }
}
