// ABOUTME: Payment ledger snapshots and payment-processor envelopes
// ABOUTME: PaymentRecord, RefundRecord, Invoice, intent requests/responses and status tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UpCoach

//! Payment records
//!
//! Amounts here are integer minor units (cents). The processor integration that
//! consumes the intent envelopes lives outside this crate; these types only carry
//! what crosses the API boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use upcoach_core::record::JsonMap;
use upcoach_core::wire_tag;

use super::defaults;

wire_tag! {
    /// Settlement state of a payment
    #[derive(Default)]
    pub enum PaymentStatus {
        /// Created, not yet attempted
        #[default]
        Pending => "pending",
        /// Processor is working on it
        Processing => "processing",
        /// Funds captured
        Succeeded => "succeeded",
        /// Declined or errored
        Failed => "failed",
        /// Abandoned before capture
        Cancelled => "cancelled",
        /// Fully returned
        Refunded => "refunded",
        /// Partly returned
        PartiallyRefunded => "partially_refunded",
    }
}

wire_tag! {
    /// Settlement state of a refund
    #[derive(Default)]
    pub enum RefundStatus {
        /// Requested
        #[default]
        Pending => "pending",
        /// Returned to the customer
        Succeeded => "succeeded",
        /// Processor rejected it
        Failed => "failed",
        /// Withdrawn
        Cancelled => "cancelled",
    }
}

wire_tag! {
    /// Invoice lifecycle
    #[derive(Default)]
    pub enum InvoiceStatus {
        /// Being prepared
        #[default]
        Draft => "draft",
        /// Issued, awaiting payment
        Open => "open",
        /// Settled
        Paid => "paid",
        /// Cancelled after issue
        Void => "void",
        /// Written off
        Uncollectible => "uncollectible",
    }
}

/// A refund against a payment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundRecord {
    /// Refund identifier
    pub id: String,
    /// Payment being refunded
    pub payment_id: String,
    /// Amount in minor units
    pub amount: i64,
    /// ISO currency code
    #[serde(default = "defaults::currency")]
    pub currency: String,
    /// Settlement state
    #[serde(default)]
    pub status: RefundStatus,
    /// Reason given
    pub reason: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl RefundRecord {
    /// Create a pending refund
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        payment_id: impl Into<String>,
        amount: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            payment_id: payment_id.into(),
            amount,
            currency: defaults::currency(),
            status: RefundStatus::Pending,
            reason: None,
            created_at,
        }
    }
}

/// A payment as recorded in the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    /// Payment identifier
    pub id: String,
    /// Paying user
    pub user_id: String,
    /// Amount in minor units
    pub amount: i64,
    /// ISO currency code
    #[serde(default = "defaults::currency")]
    pub currency: String,
    /// Settlement state
    #[serde(default)]
    pub status: PaymentStatus,
    /// Method label ("card", "apple_pay", ...)
    pub payment_method: Option<String>,
    /// Processor payment intent
    pub stripe_payment_intent_id: Option<String>,
    /// Processor charge
    pub stripe_charge_id: Option<String>,
    /// Statement description
    pub description: Option<String>,
    /// Free-form processor metadata
    #[serde(default)]
    pub metadata: JsonMap,
    /// Refunds issued against this payment
    #[serde(default)]
    pub refunds: Vec<RefundRecord>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: Option<DateTime<Utc>>,
}

impl PaymentRecord {
    /// Create a pending payment
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        amount: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            amount,
            currency: defaults::currency(),
            status: PaymentStatus::Pending,
            payment_method: None,
            stripe_payment_intent_id: None,
            stripe_charge_id: None,
            description: None,
            metadata: JsonMap::new(),
            refunds: Vec::new(),
            created_at,
            updated_at: None,
        }
    }
}

/// One line on an invoice
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLineItem {
    /// Line description
    pub description: String,
    /// Units billed
    #[serde(default = "defaults::one")]
    pub quantity: i32,
    /// Price per unit in minor units
    pub unit_amount: i64,
    /// Line total in minor units
    pub amount: i64,
}

impl InvoiceLineItem {
    /// Create a single-unit line
    #[must_use]
    pub fn new(description: impl Into<String>, unit_amount: i64, amount: i64) -> Self {
        Self {
            description: description.into(),
            quantity: 1,
            unit_amount,
            amount,
        }
    }
}

/// An issued invoice
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Invoice identifier
    pub id: String,
    /// Billed user
    pub user_id: String,
    /// Human-facing invoice number
    pub number: String,
    /// Lifecycle state
    #[serde(default)]
    pub status: InvoiceStatus,
    /// Sum of lines, minor units
    pub subtotal: i64,
    /// Tax, minor units
    #[serde(default)]
    pub tax: i64,
    /// Amount due, minor units
    pub total: i64,
    /// ISO currency code
    #[serde(default = "defaults::currency")]
    pub currency: String,
    /// Billed lines
    #[serde(default)]
    pub line_items: Vec<InvoiceLineItem>,
    /// Issue timestamp
    pub issued_at: DateTime<Utc>,
    /// Payment due date
    pub due_at: Option<DateTime<Utc>>,
    /// Settlement timestamp
    pub paid_at: Option<DateTime<Utc>>,
    /// Rendered PDF
    pub pdf_url: Option<String>,
}

impl Invoice {
    /// Create a draft invoice with no lines and no tax
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        number: impl Into<String>,
        subtotal: i64,
        total: i64,
        issued_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            number: number.into(),
            status: InvoiceStatus::Draft,
            subtotal,
            tax: 0,
            total,
            currency: defaults::currency(),
            line_items: Vec::new(),
            issued_at,
            due_at: None,
            paid_at: None,
            pdf_url: None,
        }
    }
}

/// Request body asking the backend to create a payment intent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentRequest {
    /// Amount in minor units
    pub amount: i64,
    /// ISO currency code
    #[serde(default = "defaults::currency")]
    pub currency: String,
    /// Statement description
    pub description: Option<String>,
    /// Saved payment method to charge
    pub payment_method_id: Option<String>,
    /// Processor customer
    pub customer_id: Option<String>,
    /// Free-form metadata forwarded to the processor
    #[serde(default)]
    pub metadata: JsonMap,
}

impl CreatePaymentIntentRequest {
    /// Create a request for an amount in the default currency
    #[must_use]
    pub fn new(amount: i64) -> Self {
        Self {
            amount,
            currency: defaults::currency(),
            description: None,
            payment_method_id: None,
            customer_id: None,
            metadata: JsonMap::new(),
        }
    }
}

/// Request body confirming a payment intent
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPaymentRequest {
    /// Intent to confirm
    pub payment_intent_id: String,
    /// Payment method to confirm with
    pub payment_method_id: Option<String>,
}

impl ConfirmPaymentRequest {
    /// Confirm with the intent's attached payment method
    #[must_use]
    pub fn new(payment_intent_id: impl Into<String>) -> Self {
        Self {
            payment_intent_id: payment_intent_id.into(),
            payment_method_id: None,
        }
    }
}

/// Backend response carrying a payment intent client secret
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    /// Secret handed to the client-side payment SDK
    pub client_secret: String,
    /// Intent identifier
    pub payment_intent_id: String,
    /// Amount in minor units
    pub amount: i64,
    /// ISO currency code
    #[serde(default = "defaults::currency")]
    pub currency: String,
    /// Processor-defined intent status, passed through verbatim
    pub status: String,
}

impl PaymentIntentResponse {
    /// Response in the default currency
    #[must_use]
    pub fn new(
        client_secret: impl Into<String>,
        payment_intent_id: impl Into<String>,
        amount: i64,
        status: impl Into<String>,
    ) -> Self {
        Self {
            client_secret: client_secret.into(),
            payment_intent_id: payment_intent_id.into(),
            amount,
            currency: defaults::currency(),
            status: status.into(),
        }
    }
}

/// Backend response carrying a setup intent client secret
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupIntentResponse {
    /// Secret handed to the client-side payment SDK
    pub client_secret: String,
    /// Setup intent identifier
    pub setup_intent_id: String,
    /// Processor customer
    pub customer_id: Option<String>,
}

impl SetupIntentResponse {
    /// Response with no customer attached
    #[must_use]
    pub fn new(client_secret: impl Into<String>, setup_intent_id: impl Into<String>) -> Self {
        Self {
            client_secret: client_secret.into(),
            setup_intent_id: setup_intent_id.into(),
            customer_id: None,
        }
    }
}
