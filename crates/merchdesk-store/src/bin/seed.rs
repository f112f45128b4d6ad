//! # Seed Data Generator
//!
//! Populates the in-memory stores with representative back-office data and
//! prints the resulting statistics. Doubles as a smoke run of the command
//! surface.
//!
//! ## Usage
//! ```bash
//! cargo run -p merchdesk-store --bin seed
//!
//! # With debug logging for every command
//! RUST_LOG=debug cargo run -p merchdesk-store --bin seed
//! ```
//!
//! ## Seeded Data
//! - Three vendors with a short payment/bill history each
//! - Customer returns in pending, approved, and rejected states
//! - Vendor returns walked through the shipment lifecycle

use chrono::Utc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use merchdesk_core::{
    CreditType, CustomerReturnItem, NewCustomerReturn, NewVendorReturn, PaymentTransaction,
    RefundMethod, TransactionKind, Vendor, VendorReturnItem, VendorReturnStatus, VendorStatus,
};
use merchdesk_store::commands::{customer_returns, vendor_returns, vendors};
use merchdesk_store::state::{CustomerReturnState, VendorLedgerState, VendorReturnState};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every command invocation
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,merchdesk_store=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn vendor(id: &str, name: &str, email: &str, status: VendorStatus) -> Vendor {
    Vendor {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: "+1 555 010 0000".to_string(),
        address: "100 Market Street".to_string(),
        logo: "/placeholder.svg?height=40&width=40".to_string(),
        description: None,
        status,
        total_paid_cents: 0,
        amount_payable_cents: 0,
        transactions: Vec::new(),
    }
}

fn posting(amount_cents: i64, kind: TransactionKind, note: &str) -> PaymentTransaction {
    PaymentTransaction {
        id: Uuid::new_v4().to_string(),
        amount_cents,
        date: Utc::now(),
        kind,
        note: Some(note.to_string()),
    }
}

fn main() {
    init_tracing();

    let ledger = VendorLedgerState::new();
    let customer_returns_state = CustomerReturnState::new();
    let vendor_returns_state = VendorReturnState::new();

    // -------------------------------------------------------------------------
    // Vendors and their ledgers
    // -------------------------------------------------------------------------
    for v in [
        vendor(
            "1",
            "Riverside Produce Co.",
            "orders@riversideproduce.example",
            VendorStatus::Active,
        ),
        vendor(
            "2",
            "Apex Electronics",
            "sales@apexelectronics.example",
            VendorStatus::Active,
        ),
        vendor(
            "3",
            "Harbor Imports",
            "info@harborimports.example",
            VendorStatus::Inactive,
        ),
    ] {
        vendors::add_vendor(&ledger, v).expect("seed vendor");
    }

    vendors::add_transaction(
        &ledger,
        "1",
        posting(120_000, TransactionKind::Bill, "January produce invoice"),
    )
    .expect("seed bill");
    vendors::add_transaction(
        &ledger,
        "1",
        posting(500_000, TransactionKind::Payment, "Initial payment"),
    )
    .expect("seed payment");
    vendors::add_transaction(
        &ledger,
        "2",
        posting(450_000, TransactionKind::Bill, "POS hardware order"),
    )
    .expect("seed bill");

    let riverside = vendors::get_vendor(&ledger, "1").expect("vendor seeded");
    info!(
        vendor = %riverside.name,
        total_paid = %riverside.total_paid(),
        amount_payable = %riverside.amount_payable(),
        "vendor ledger seeded"
    );

    // -------------------------------------------------------------------------
    // Customer returns
    // -------------------------------------------------------------------------
    let pending = customer_returns::add_return(
        &customer_returns_state,
        NewCustomerReturn {
            customer_id: "1".to_string(),
            customer_name: "John Doe".to_string(),
            order_id: Some("12342".to_string()),
            order_number: Some("12342".to_string()),
            items: vec![CustomerReturnItem {
                product_id: "1".to_string(),
                product_name: "Premium T-Shirt".to_string(),
                variant_id: Some("v1".to_string()),
                variant_name: Some("Small / Red".to_string()),
                quantity: 1,
                price_cents: 45_000,
                reason: "Wrong size".to_string(),
            }],
            total_amount_cents: 45_000,
            refund_method: RefundMethod::OriginalPayment,
            notes: Some("Customer ordered wrong size".to_string()),
        },
    )
    .expect("seed customer return");

    let approved = customer_returns::add_return(
        &customer_returns_state,
        NewCustomerReturn {
            customer_id: "2".to_string(),
            customer_name: "Jane Smith".to_string(),
            order_id: Some("12336".to_string()),
            order_number: Some("12336".to_string()),
            items: vec![CustomerReturnItem {
                product_id: "2".to_string(),
                product_name: "Herbal Face Powder".to_string(),
                variant_id: None,
                variant_name: None,
                quantity: 2,
                price_cents: 16_000,
                reason: "Defective product".to_string(),
            }],
            total_amount_cents: 32_000,
            refund_method: RefundMethod::Cash,
            notes: None,
        },
    )
    .expect("seed customer return");

    customer_returns::approve_return(&customer_returns_state, &approved.id, "Admin")
        .expect("approve seeded return");
    let _stays_pending = pending;

    // -------------------------------------------------------------------------
    // Vendor returns
    // -------------------------------------------------------------------------
    let completed = vendor_returns::add_return(
        &vendor_returns_state,
        NewVendorReturn {
            vendor_id: "1".to_string(),
            vendor_name: "Riverside Produce Co.".to_string(),
            items: vec![VendorReturnItem {
                product_id: "3".to_string(),
                product_name: "Green Leaf Lettuce".to_string(),
                variant_id: None,
                variant_name: None,
                quantity: 10,
                unit_price_cents: 11_272,
                total_price_cents: 112_720,
                reason: "Damaged during shipping".to_string(),
            }],
            total_amount_cents: 112_720,
            credit_type: CreditType::CreditNote,
            notes: Some("Vendor confirmed receipt and issued credit note".to_string()),
            created_by: "Admin".to_string(),
        },
    )
    .expect("seed vendor return");

    let shipped = vendor_returns::add_return(
        &vendor_returns_state,
        NewVendorReturn {
            vendor_id: "2".to_string(),
            vendor_name: "Apex Electronics".to_string(),
            items: vec![VendorReturnItem {
                product_id: "4".to_string(),
                product_name: "Barcode Scanner".to_string(),
                variant_id: None,
                variant_name: None,
                quantity: 5,
                unit_price_cents: 17_497,
                total_price_cents: 87_485,
                reason: "Dead on arrival".to_string(),
            }],
            total_amount_cents: 87_485,
            credit_type: CreditType::Refund,
            notes: Some("Awaiting vendor confirmation".to_string()),
            created_by: "Admin".to_string(),
        },
    )
    .expect("seed vendor return");

    for status in [
        VendorReturnStatus::Shipped,
        VendorReturnStatus::ReceivedByVendor,
        VendorReturnStatus::Completed,
    ] {
        vendor_returns::update_status(&vendor_returns_state, &completed.id, status)
            .expect("walk seeded return");
    }
    vendor_returns::update_status(&vendor_returns_state, &shipped.id, VendorReturnStatus::Shipped)
        .expect("ship seeded return");

    // -------------------------------------------------------------------------
    // Summary
    // -------------------------------------------------------------------------
    let customer_stats = customer_returns::get_return_stats(&customer_returns_state);
    let vendor_stats = vendor_returns::get_return_stats(&vendor_returns_state);

    info!(
        vendors = vendors::list_vendors(&ledger).len(),
        customer_returns = customer_stats.total,
        refund_cents = customer_stats.total_refund_cents,
        vendor_returns = vendor_stats.total,
        credit_cents = vendor_stats.total_credit_cents,
        "seed complete"
    );
}
