//! Vendor CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_vendor_details, format_vendor_list, format_vendor_stats};
use crate::error::{WedplanError, WedplanResult};
use crate::models::{Category, VendorStatus};
use crate::planning::VendorFilter;
use crate::services::{CreateVendorInput, VendorService, VendorUpdate};
use crate::storage::Storage;

use super::parse_money;

/// Vendor subcommands
#[derive(Subcommand)]
pub enum VendorCommands {
    /// List vendors
    List {
        /// Status filter: all, researching, contacted, quoted, booked, declined
        #[arg(short, long, default_value = "all")]
        status: VendorFilter,
        /// Only vendors whose name, category or contact contains this text
        #[arg(long)]
        search: Option<String>,
    },
    /// Show booking and spend totals
    Stats,
    /// Add a vendor
    Add {
        /// Vendor name
        name: String,
        /// Category (e.g. venue, photography, flowers)
        #[arg(short, long)]
        category: Category,
        /// Contact person
        #[arg(long)]
        contact: Option<String>,
        /// Email address
        #[arg(short, long)]
        email: Option<String>,
        /// Phone number
        #[arg(short, long)]
        phone: Option<String>,
        /// Website
        #[arg(short, long)]
        website: Option<String>,
        /// Quoted price (marks the vendor as quoted)
        #[arg(short, long)]
        quote: Option<String>,
        /// Notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Show vendor details
    Show {
        /// Vendor name or ID
        vendor: String,
    },
    /// Set a vendor's status
    Status {
        /// Vendor name or ID
        vendor: String,
        /// New status
        status: VendorStatus,
    },
    /// Update a vendor
    Update {
        /// Vendor name or ID
        vendor: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<Category>,
        /// Contact person (empty to clear)
        #[arg(long)]
        contact: Option<String>,
        /// Email address (empty to clear)
        #[arg(short, long)]
        email: Option<String>,
        /// Phone number (empty to clear)
        #[arg(short, long)]
        phone: Option<String>,
        /// Website (empty to clear)
        #[arg(short, long)]
        website: Option<String>,
        /// Quoted price
        #[arg(short, long)]
        quote: Option<String>,
        /// Final agreed price
        #[arg(long)]
        price: Option<String>,
        /// Deposit amount
        #[arg(long)]
        deposit: Option<String>,
        /// Whether the deposit is paid
        #[arg(long)]
        deposit_paid: Option<bool>,
        /// Whether the contract is signed
        #[arg(long)]
        contract_signed: Option<bool>,
        /// Rating from 1 to 5
        #[arg(short, long)]
        rating: Option<u8>,
        /// Notes (empty to clear)
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Remove a vendor
    Remove {
        /// Vendor name or ID
        vendor: String,
    },
}

/// Handle a vendor command
pub fn handle_vendor_command(
    storage: &Storage,
    settings: &Settings,
    cmd: VendorCommands,
) -> WedplanResult<()> {
    let service = VendorService::new(storage);

    match cmd {
        VendorCommands::List { status, search } => {
            let vendors = service.list(status, search.as_deref().unwrap_or(""))?;
            print!("{}", format_vendor_list(settings, &vendors));
        }

        VendorCommands::Stats => {
            let stats = service.stats()?;
            print!("{}", format_vendor_stats(settings, &stats));
        }

        VendorCommands::Add {
            name,
            category,
            contact,
            email,
            phone,
            website,
            quote,
            notes,
        } => {
            let input = CreateVendorInput {
                contact_name: contact,
                email,
                phone,
                website,
                quoted_price: quote.as_deref().map(parse_money).transpose()?,
                notes,
                ..CreateVendorInput::new(name, category)
            };
            let vendor = service.add(input)?;
            println!("Added vendor: {} ({})", vendor.name, vendor.category);
            println!("  Status: {}", vendor.status);
            println!("  ID:     {}", vendor.id);
        }

        VendorCommands::Show { vendor } => {
            let vendor = service
                .find(&vendor)?
                .ok_or_else(|| WedplanError::vendor_not_found(&vendor))?;
            print!("{}", format_vendor_details(settings, &vendor));
        }

        VendorCommands::Status { vendor, status } => {
            let vendor = service.set_status(&vendor, status)?;
            println!("{}: {}", vendor.name, vendor.status);
        }

        VendorCommands::Update {
            vendor,
            name,
            category,
            contact,
            email,
            phone,
            website,
            quote,
            price,
            deposit,
            deposit_paid,
            contract_signed,
            rating,
            notes,
        } => {
            let update = VendorUpdate {
                name,
                category,
                contact_name: contact,
                email,
                phone,
                website,
                quoted_price: quote.as_deref().map(parse_money).transpose()?,
                final_price: price.as_deref().map(parse_money).transpose()?,
                deposit_amount: deposit.as_deref().map(parse_money).transpose()?,
                deposit_paid,
                contract_signed,
                rating,
                notes,
            };
            let vendor = service.update(&vendor, update)?;
            println!("Updated vendor: {}", vendor.name);
        }

        VendorCommands::Remove { vendor } => {
            let vendor = service.remove(&vendor)?;
            println!("Removed vendor: {}", vendor.name);
        }
    }

    Ok(())
}
