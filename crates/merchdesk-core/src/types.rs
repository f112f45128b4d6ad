//! # Domain Types
//!
//! Core domain types used throughout Merchdesk.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Vendor      │   │ CustomerReturn  │   │  VendorReturn   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  status         │   │  return_number  │   │  return_number  │       │
//! │  │  total_paid     │   │  status         │   │  status         │       │
//! │  │  amount_payable │   │  refund_method  │   │  credit_type    │       │
//! │  │  transactions   │   │  items          │   │  items          │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────────┐   ┌──────────────────┐                        │
//! │  │ PaymentTransaction  │   │ TransactionKind  │                        │
//! │  │  ─────────────────  │   │  ──────────────  │                        │
//! │  │  amount_cents       │   │  Payment         │                        │
//! │  │  kind               │   │  Bill            │                        │
//! │  └─────────────────────┘   └──────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Return entities have:
//! - `id`: UUID v4 - immutable, used for lookups and relations
//! - `return_number`: human-readable sequential code (RET-00001, VRT-00001)
//!   used for display and search
//!
//! Cross-entity relations (a return referencing a vendor or customer) are by
//! identifier only; no entity is shared by reference across components.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Vendor Status
// =============================================================================

/// Lifecycle status of a vendor account.
///
/// Serialized with capitalized names (`"Active"`) to match the dashboard's
/// existing wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum VendorStatus {
    /// Vendor is in good standing and can receive postings.
    Active,
    /// Vendor is dormant but kept for history.
    Inactive,
    /// Vendor is blocked from new business.
    Blocked,
}

impl Default for VendorStatus {
    fn default() -> Self {
        VendorStatus::Active
    }
}

// =============================================================================
// Payment Transaction
// =============================================================================

/// The direction of a ledger posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    /// Money paid out to the vendor. Increases `total_paid` and reduces
    /// `amount_payable` (floored at zero).
    Payment,
    /// An invoice received from the vendor. Increases `amount_payable`.
    Bill,
}

/// A single posting in a vendor's ledger.
///
/// Immutable once created: postings are prepended to the vendor's history
/// and never edited or reordered.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTransaction {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Posting amount in cents. Always positive; the direction comes
    /// from `kind`.
    pub amount_cents: i64,

    /// When the posting was recorded.
    #[ts(as = "String")]
    pub date: DateTime<Utc>,

    /// Payment or bill.
    pub kind: TransactionKind,

    /// Free-form note ("Initial payment", invoice reference, ...).
    pub note: Option<String>,
}

impl PaymentTransaction {
    /// Returns the posting amount as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }
}

// =============================================================================
// Vendor
// =============================================================================

/// A vendor account with its running ledger balances.
///
/// ## The Two-Counter Ledger
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  PAYMENT posting of amount a:                                           │
/// │     total_paid     += a                                                 │
/// │     amount_payable  = max(0, amount_payable - a)                        │
/// │                                                                         │
/// │  BILL posting of amount a:                                              │
/// │     amount_payable += a                                                 │
/// │     total_paid      unchanged                                           │
/// │                                                                         │
/// │  Overpayment is absorbed, not tracked as vendor credit.                 │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Invariants
/// - `amount_payable_cents` never goes negative
/// - `total_paid_cents` only increases, and only via PAYMENT postings
/// - `transactions` is ordered newest first and is append-only (at the front)
///
/// The balances are stored rather than recomputed on demand (the original
/// behavior); [`Vendor::replayed_totals`] is the audit fold that recomputes
/// them from the log so tests can compare.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    /// Caller-supplied identifier, unique by caller discipline.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Contact email.
    pub email: String,

    /// Contact phone.
    pub phone: String,

    /// Postal address.
    pub address: String,

    /// Logo URL or asset path shown in the vendor list.
    pub logo: String,

    /// Optional blurb about the vendor.
    pub description: Option<String>,

    /// Account status.
    pub status: VendorStatus,

    /// Running sum of PAYMENT postings, in cents.
    pub total_paid_cents: i64,

    /// Outstanding balance owed to the vendor, in cents. Never negative.
    pub amount_payable_cents: i64,

    /// Posting history, newest first.
    pub transactions: Vec<PaymentTransaction>,
}

impl Vendor {
    /// Returns the running paid total as Money.
    #[inline]
    pub fn total_paid(&self) -> Money {
        Money::from_cents(self.total_paid_cents)
    }

    /// Returns the outstanding payable balance as Money.
    #[inline]
    pub fn amount_payable(&self) -> Money {
        Money::from_cents(self.amount_payable_cents)
    }

    /// Applies a ledger posting: prepends it to the history (newest first)
    /// and updates the running balances.
    ///
    /// A PAYMENT larger than the outstanding balance clears the balance;
    /// the excess is absorbed rather than carried as credit.
    pub fn apply_transaction(&mut self, transaction: PaymentTransaction) {
        let amount = transaction.amount();

        match transaction.kind {
            TransactionKind::Payment => {
                self.total_paid_cents = (self.total_paid() + amount).cents();
                self.amount_payable_cents = self
                    .amount_payable()
                    .saturating_sub_floor_zero(amount)
                    .cents();
            }
            TransactionKind::Bill => {
                self.amount_payable_cents = (self.amount_payable() + amount).cents();
            }
        }

        self.transactions.insert(0, transaction);
    }

    /// Recomputes `(total_paid, amount_payable)` by folding the posting
    /// history in chronological order, starting from zero balances.
    ///
    /// For a vendor opened with zero balances this must equal the stored
    /// fields after any sequence of postings. A vendor seeded with opening
    /// balances is outside this fold by construction; add the opening
    /// balances to the result before comparing.
    pub fn replayed_totals(&self) -> (Money, Money) {
        let mut total_paid = Money::zero();
        let mut amount_payable = Money::zero();

        // Stored order is newest first; replay oldest first because the
        // payable floor makes the fold order-sensitive.
        for tx in self.transactions.iter().rev() {
            match tx.kind {
                TransactionKind::Payment => {
                    total_paid += tx.amount();
                    amount_payable = amount_payable.saturating_sub_floor_zero(tx.amount());
                }
                TransactionKind::Bill => {
                    amount_payable += tx.amount();
                }
            }
        }

        (total_paid, amount_payable)
    }
}

// =============================================================================
// Customer Returns
// =============================================================================

/// Lifecycle status of a customer return request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CustomerReturnStatus {
    /// Awaiting review.
    Pending,
    /// Accepted; refund liability exists.
    Approved,
    /// Declined.
    Rejected,
    /// Refund settled.
    Completed,
}

/// How a customer refund is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RefundMethod {
    Cash,
    StoreCredit,
    OriginalPayment,
}

/// A line item on a customer return.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CustomerReturnItem {
    pub product_id: String,
    pub product_name: String,
    pub variant_id: Option<String>,
    /// Display name of the variant, e.g. "Small / Red".
    pub variant_name: Option<String>,
    pub quantity: i64,
    /// Unit price in cents.
    pub price_cents: i64,
    /// Why the customer is returning this item.
    pub reason: String,
}

/// A customer return request.
///
/// ## Status Lifecycle
/// ```text
/// pending ──approve(processed_by)──► approved
/// pending ──reject(processed_by)───► rejected
/// approved/pending ──patch────────► completed
/// ```
/// `approved` and `rejected` are terminal for the dedicated transitions; a
/// generic patch can still override any patchable field for administrative
/// correction.
///
/// ## Invariants
/// - `request_date` is assigned once at creation and never changed
/// - `processed_date`/`processed_by` are stamped by the approve/reject
///   transition (re-invoking a transition re-stamps them)
/// - `total_amount_cents` is caller-supplied and not recomputed from items
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CustomerReturn {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Human-readable sequential code, e.g. "RET-00001".
    pub return_number: String,

    pub customer_id: String,
    pub customer_name: String,

    /// Originating order, when known.
    pub order_id: Option<String>,
    pub order_number: Option<String>,

    /// Returned items. Never empty.
    pub items: Vec<CustomerReturnItem>,

    /// Caller-supplied total, in cents.
    pub total_amount_cents: i64,

    pub status: CustomerReturnStatus,

    /// When the request was created. Immutable.
    #[ts(as = "String")]
    pub request_date: DateTime<Utc>,

    /// When the request was approved or rejected.
    #[ts(as = "Option<String>")]
    pub processed_date: Option<DateTime<Utc>>,

    pub refund_method: RefundMethod,

    pub notes: Option<String>,

    /// Who approved or rejected the request.
    pub processed_by: Option<String>,
}

impl CustomerReturn {
    /// Returns the caller-supplied total as Money.
    #[inline]
    pub fn total_amount(&self) -> Money {
        Money::from_cents(self.total_amount_cents)
    }

    /// Marks the return approved and stamps the processing fields.
    ///
    /// All other fields are left untouched. Calling this on an already
    /// approved return is idempotent in the resulting status but re-stamps
    /// `processed_date`.
    pub fn approve(&mut self, processed_by: impl Into<String>) {
        self.status = CustomerReturnStatus::Approved;
        self.processed_date = Some(Utc::now());
        self.processed_by = Some(processed_by.into());
    }

    /// Marks the return rejected and stamps the processing fields.
    ///
    /// `notes` overwrites the stored notes only when supplied; rejecting
    /// without notes preserves whatever the request already carried.
    pub fn reject(&mut self, processed_by: impl Into<String>, notes: Option<String>) {
        self.status = CustomerReturnStatus::Rejected;
        self.processed_date = Some(Utc::now());
        self.processed_by = Some(processed_by.into());
        if let Some(notes) = notes {
            self.notes = Some(notes);
        }
    }

    /// Applies a partial patch, overwriting only the supplied fields.
    ///
    /// `request_date` and `processed_date` are deliberately not patchable:
    /// the former is immutable, the latter is stamped by transitions.
    pub fn apply_patch(&mut self, patch: CustomerReturnPatch) {
        if let Some(customer_id) = patch.customer_id {
            self.customer_id = customer_id;
        }
        if let Some(customer_name) = patch.customer_name {
            self.customer_name = customer_name;
        }
        if let Some(order_id) = patch.order_id {
            self.order_id = Some(order_id);
        }
        if let Some(order_number) = patch.order_number {
            self.order_number = Some(order_number);
        }
        if let Some(items) = patch.items {
            self.items = items;
        }
        if let Some(total_amount_cents) = patch.total_amount_cents {
            self.total_amount_cents = total_amount_cents;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(refund_method) = patch.refund_method {
            self.refund_method = refund_method;
        }
        if let Some(notes) = patch.notes {
            self.notes = Some(notes);
        }
        if let Some(processed_by) = patch.processed_by {
            self.processed_by = Some(processed_by);
        }
    }
}

/// Payload for creating a customer return.
///
/// The store assigns `id`, `return_number`, and `request_date`; new returns
/// always start out pending.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomerReturn {
    pub customer_id: String,
    pub customer_name: String,
    pub order_id: Option<String>,
    pub order_number: Option<String>,
    pub items: Vec<CustomerReturnItem>,
    pub total_amount_cents: i64,
    pub refund_method: RefundMethod,
    pub notes: Option<String>,
}

impl NewCustomerReturn {
    /// Builds the stored entity from this payload plus the store-assigned
    /// identity fields.
    pub fn into_return(self, id: String, return_number: String) -> CustomerReturn {
        CustomerReturn {
            id,
            return_number,
            customer_id: self.customer_id,
            customer_name: self.customer_name,
            order_id: self.order_id,
            order_number: self.order_number,
            items: self.items,
            total_amount_cents: self.total_amount_cents,
            status: CustomerReturnStatus::Pending,
            request_date: Utc::now(),
            processed_date: None,
            refund_method: self.refund_method,
            notes: self.notes,
            processed_by: None,
        }
    }
}

/// Partial update payload for administrative correction of a customer
/// return. Only supplied fields are overwritten.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CustomerReturnPatch {
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub order_id: Option<String>,
    pub order_number: Option<String>,
    pub items: Option<Vec<CustomerReturnItem>>,
    pub total_amount_cents: Option<i64>,
    pub status: Option<CustomerReturnStatus>,
    pub refund_method: Option<RefundMethod>,
    pub notes: Option<String>,
    pub processed_by: Option<String>,
}

// =============================================================================
// Vendor Returns
// =============================================================================

/// Lifecycle status of a vendor return.
///
/// The nominal flow is `pending -> shipped -> received_by_vendor ->
/// completed`, but [`VendorReturn::set_status`] accepts any target status;
/// the permissiveness is a documented contract, not an accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum VendorReturnStatus {
    /// Return created, goods still on hand.
    Pending,
    /// Goods shipped back to the vendor.
    Shipped,
    /// Vendor confirmed receipt.
    ReceivedByVendor,
    /// Credit settled.
    Completed,
}

/// How a vendor settles a return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CreditType {
    Refund,
    CreditNote,
    Replacement,
}

/// A line item on a vendor return.
///
/// Carries both the unit price and the caller-computed line total
/// (`total_price_cents = unit_price_cents × quantity`). The total is not
/// enforced internally; [`VendorReturnItem::computed_total`] is the check
/// a caller or test can apply.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct VendorReturnItem {
    pub product_id: String,
    pub product_name: String,
    pub variant_id: Option<String>,
    pub variant_name: Option<String>,
    pub quantity: i64,
    pub unit_price_cents: i64,
    pub total_price_cents: i64,
    pub reason: String,
}

impl VendorReturnItem {
    /// Recomputes the line total from unit price and quantity.
    #[inline]
    pub fn computed_total(&self) -> Money {
        Money::from_cents(self.unit_price_cents).multiply_quantity(self.quantity)
    }
}

/// A return of goods back to a vendor.
///
/// ## Invariants
/// - `return_date` is assigned once at creation and never changed
/// - `completed_date` is stamped when the status transitions to completed;
///   moving away from completed leaves the old stamp in place
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct VendorReturn {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Human-readable sequential code, e.g. "VRT-00001".
    pub return_number: String,

    pub vendor_id: String,
    pub vendor_name: String,

    /// Returned items. Never empty.
    pub items: Vec<VendorReturnItem>,

    /// Caller-supplied total, in cents.
    pub total_amount_cents: i64,

    pub status: VendorReturnStatus,

    /// When the return was created. Immutable.
    #[ts(as = "String")]
    pub return_date: DateTime<Utc>,

    /// When the return reached completed. Not cleared on later status
    /// changes.
    #[ts(as = "Option<String>")]
    pub completed_date: Option<DateTime<Utc>>,

    pub credit_type: CreditType,

    pub notes: Option<String>,

    /// Who created the return.
    pub created_by: String,
}

impl VendorReturn {
    /// Returns the caller-supplied total as Money.
    #[inline]
    pub fn total_amount(&self) -> Money {
        Money::from_cents(self.total_amount_cents)
    }

    /// Moves the return to `status`, stamping `completed_date` when the
    /// target is completed.
    ///
    /// Any target status is accepted, including backward jumps. Moving away
    /// from completed does not clear the stamp; the last completion time is
    /// kept for audit.
    pub fn set_status(&mut self, status: VendorReturnStatus) {
        self.status = status;
        if status == VendorReturnStatus::Completed {
            self.completed_date = Some(Utc::now());
        }
    }

    /// Applies a partial patch, overwriting only the supplied fields.
    ///
    /// A status change through a patch is a raw field write: it does not
    /// stamp `completed_date`. Use [`VendorReturn::set_status`] for the
    /// stamping transition.
    pub fn apply_patch(&mut self, patch: VendorReturnPatch) {
        if let Some(vendor_id) = patch.vendor_id {
            self.vendor_id = vendor_id;
        }
        if let Some(vendor_name) = patch.vendor_name {
            self.vendor_name = vendor_name;
        }
        if let Some(items) = patch.items {
            self.items = items;
        }
        if let Some(total_amount_cents) = patch.total_amount_cents {
            self.total_amount_cents = total_amount_cents;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(credit_type) = patch.credit_type {
            self.credit_type = credit_type;
        }
        if let Some(notes) = patch.notes {
            self.notes = Some(notes);
        }
        if let Some(created_by) = patch.created_by {
            self.created_by = created_by;
        }
    }
}

/// Payload for creating a vendor return.
///
/// The store assigns `id`, `return_number`, and `return_date`; new returns
/// always start out pending.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewVendorReturn {
    pub vendor_id: String,
    pub vendor_name: String,
    pub items: Vec<VendorReturnItem>,
    pub total_amount_cents: i64,
    pub credit_type: CreditType,
    pub notes: Option<String>,
    pub created_by: String,
}

impl NewVendorReturn {
    /// Builds the stored entity from this payload plus the store-assigned
    /// identity fields.
    pub fn into_return(self, id: String, return_number: String) -> VendorReturn {
        VendorReturn {
            id,
            return_number,
            vendor_id: self.vendor_id,
            vendor_name: self.vendor_name,
            items: self.items,
            total_amount_cents: self.total_amount_cents,
            status: VendorReturnStatus::Pending,
            return_date: Utc::now(),
            completed_date: None,
            credit_type: self.credit_type,
            notes: self.notes,
            created_by: self.created_by,
        }
    }
}

/// Partial update payload for administrative correction of a vendor return.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct VendorReturnPatch {
    pub vendor_id: Option<String>,
    pub vendor_name: Option<String>,
    pub items: Option<Vec<VendorReturnItem>>,
    pub total_amount_cents: Option<i64>,
    pub status: Option<VendorReturnStatus>,
    pub credit_type: Option<CreditType>,
    pub notes: Option<String>,
    pub created_by: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_vendor(id: &str) -> Vendor {
        Vendor {
            id: id.to_string(),
            name: format!("Vendor {}", id),
            email: format!("vendor{}@example.com", id),
            phone: "+1 555 000 0000".to_string(),
            address: "1 Supply Road".to_string(),
            logo: "/placeholder.svg".to_string(),
            description: None,
            status: VendorStatus::Active,
            total_paid_cents: 0,
            amount_payable_cents: 0,
            transactions: Vec::new(),
        }
    }

    fn posting(id: &str, amount_cents: i64, kind: TransactionKind) -> PaymentTransaction {
        PaymentTransaction {
            id: id.to_string(),
            amount_cents,
            date: Utc::now(),
            kind,
            note: None,
        }
    }

    #[test]
    fn test_bill_increases_payable_only() {
        let mut vendor = test_vendor("1");

        vendor.apply_transaction(posting("t1", 120_000, TransactionKind::Bill));

        assert_eq!(vendor.amount_payable_cents, 120_000);
        assert_eq!(vendor.total_paid_cents, 0);
    }

    #[test]
    fn test_payment_moves_both_counters() {
        let mut vendor = test_vendor("1");
        vendor.apply_transaction(posting("t1", 120_000, TransactionKind::Bill));

        vendor.apply_transaction(posting("t2", 20_000, TransactionKind::Payment));

        assert_eq!(vendor.total_paid_cents, 20_000);
        assert_eq!(vendor.amount_payable_cents, 100_000);
    }

    #[test]
    fn test_overpayment_floors_payable_at_zero() {
        let mut vendor = test_vendor("1");
        vendor.apply_transaction(posting("t1", 120_000, TransactionKind::Bill));

        // Pay far more than what is owed
        vendor.apply_transaction(posting("t2", 500_000, TransactionKind::Payment));

        assert_eq!(vendor.amount_payable_cents, 0);
        // The full payment still counts toward total_paid
        assert_eq!(vendor.total_paid_cents, 500_000);
    }

    #[test]
    fn test_payable_never_negative_across_sequences() {
        let mut vendor = test_vendor("1");
        let postings = [
            (50_000, TransactionKind::Payment),
            (30_000, TransactionKind::Bill),
            (100_000, TransactionKind::Payment),
            (25_000, TransactionKind::Bill),
            (5_000, TransactionKind::Payment),
        ];

        for (i, (amount, kind)) in postings.iter().enumerate() {
            vendor.apply_transaction(posting(&format!("t{}", i), *amount, *kind));
            assert!(vendor.amount_payable_cents >= 0);
        }
    }

    #[test]
    fn test_transactions_ordered_newest_first() {
        let mut vendor = test_vendor("1");
        vendor.apply_transaction(posting("first", 100, TransactionKind::Bill));
        vendor.apply_transaction(posting("second", 200, TransactionKind::Bill));

        assert_eq!(vendor.transactions[0].id, "second");
        assert_eq!(vendor.transactions[1].id, "first");
    }

    #[test]
    fn test_replayed_totals_match_stored_fields() {
        let mut vendor = test_vendor("1");
        vendor.apply_transaction(posting("t1", 120_000, TransactionKind::Bill));
        vendor.apply_transaction(posting("t2", 500_000, TransactionKind::Payment));
        vendor.apply_transaction(posting("t3", 45_000, TransactionKind::Bill));
        vendor.apply_transaction(posting("t4", 10_000, TransactionKind::Payment));

        let (total_paid, amount_payable) = vendor.replayed_totals();
        assert_eq!(total_paid, vendor.total_paid());
        assert_eq!(amount_payable, vendor.amount_payable());
    }

    fn test_customer_return() -> CustomerReturn {
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
        }
        .into_return("ret_1".to_string(), "RET-00001".to_string())
    }

    #[test]
    fn test_new_return_starts_pending() {
        let ret = test_customer_return();
        assert_eq!(ret.status, CustomerReturnStatus::Pending);
        assert!(ret.processed_date.is_none());
        assert!(ret.processed_by.is_none());
    }

    #[test]
    fn test_approve_stamps_processing_fields() {
        let mut ret = test_customer_return();

        ret.approve("Admin");

        assert_eq!(ret.status, CustomerReturnStatus::Approved);
        assert!(ret.processed_date.is_some());
        assert_eq!(ret.processed_by.as_deref(), Some("Admin"));
        // Everything else untouched
        assert_eq!(ret.notes.as_deref(), Some("Customer ordered wrong size"));
    }

    #[test]
    fn test_approve_twice_restamps() {
        let mut ret = test_customer_return();
        ret.approve("Admin");
        let first_stamp = ret.processed_date;

        ret.approve("Manager");

        assert_eq!(ret.status, CustomerReturnStatus::Approved);
        assert_eq!(ret.processed_by.as_deref(), Some("Manager"));
        assert!(ret.processed_date >= first_stamp);
    }

    #[test]
    fn test_reject_preserves_notes_when_none_supplied() {
        let mut ret = test_customer_return();

        ret.reject("Admin", None);

        assert_eq!(ret.status, CustomerReturnStatus::Rejected);
        assert_eq!(ret.notes.as_deref(), Some("Customer ordered wrong size"));
    }

    #[test]
    fn test_reject_overwrites_notes_when_supplied() {
        let mut ret = test_customer_return();

        ret.reject("Admin", Some("Outside the return window".to_string()));

        assert_eq!(ret.notes.as_deref(), Some("Outside the return window"));
    }

    #[test]
    fn test_patch_overwrites_only_supplied_fields() {
        let mut ret = test_customer_return();
        let request_date = ret.request_date;

        ret.apply_patch(CustomerReturnPatch {
            status: Some(CustomerReturnStatus::Completed),
            notes: Some("Refund issued".to_string()),
            ..Default::default()
        });

        assert_eq!(ret.status, CustomerReturnStatus::Completed);
        assert_eq!(ret.notes.as_deref(), Some("Refund issued"));
        assert_eq!(ret.customer_name, "John Doe");
        assert_eq!(ret.request_date, request_date);
    }

    fn test_vendor_return() -> VendorReturn {
        NewVendorReturn {
            vendor_id: "1".to_string(),
            vendor_name: "Fresh Foods Ltd".to_string(),
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
            notes: None,
            created_by: "Admin".to_string(),
        }
        .into_return("vret_1".to_string(), "VRT-00001".to_string())
    }

    #[test]
    fn test_item_computed_total() {
        let ret = test_vendor_return();
        assert_eq!(
            ret.items[0].computed_total(),
            Money::from_cents(ret.items[0].total_price_cents)
        );
    }

    #[test]
    fn test_set_status_completed_stamps_date() {
        let mut ret = test_vendor_return();
        assert!(ret.completed_date.is_none());

        ret.set_status(VendorReturnStatus::Completed);

        assert_eq!(ret.status, VendorReturnStatus::Completed);
        assert!(ret.completed_date.is_some());
    }

    #[test]
    fn test_set_status_away_from_completed_keeps_stamp() {
        let mut ret = test_vendor_return();
        ret.set_status(VendorReturnStatus::Completed);
        let stamp = ret.completed_date;

        // Backward jump is accepted; the old stamp survives for audit
        ret.set_status(VendorReturnStatus::Pending);

        assert_eq!(ret.status, VendorReturnStatus::Pending);
        assert_eq!(ret.completed_date, stamp);
    }

    #[test]
    fn test_set_status_accepts_any_jump() {
        let mut ret = test_vendor_return();

        // Skipping shipped/received entirely is allowed
        ret.set_status(VendorReturnStatus::Completed);
        assert_eq!(ret.status, VendorReturnStatus::Completed);

        ret.set_status(VendorReturnStatus::Shipped);
        assert_eq!(ret.status, VendorReturnStatus::Shipped);
    }

    #[test]
    fn test_status_wire_format() {
        let status = VendorReturnStatus::ReceivedByVendor;
        assert_eq!(
            serde_json::to_string(&status).unwrap(),
            "\"received_by_vendor\""
        );

        let kind = TransactionKind::Payment;
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"PAYMENT\"");

        let vendor_status = VendorStatus::Active;
        assert_eq!(serde_json::to_string(&vendor_status).unwrap(), "\"Active\"");
    }

    #[test]
    fn test_camel_case_wire_fields() {
        let ret = test_customer_return();
        let json = serde_json::to_value(&ret).unwrap();

        assert!(json.get("returnNumber").is_some());
        assert!(json.get("requestDate").is_some());
        assert!(json.get("totalAmountCents").is_some());
        assert!(json.get("return_number").is_none());
    }
}
