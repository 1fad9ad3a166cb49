//! Deferred tax data models
//!
//! Value records for temporary-difference categories and tax-loss
//! carry-forwards, plus the computed summary structures. These are transient
//! calculation inputs/outputs; persistence lives in the hosted backend.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Money;

/// Classification of a temporary-difference category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    /// Book value exceeds tax base in a way that reverses as taxable income
    TemporaryTaxable,
    /// Difference reverses as a future deduction
    TemporaryDeductible,
    /// Initial-recognition exemption items (no automatic DTA/DTL routing)
    InitialRecognition,
    /// Uncertain tax positions (no automatic DTA/DTL routing)
    UncertainPositions,
}

impl CategoryKind {
    /// Whether this kind has an automatic DTA/DTL routing rule
    ///
    /// Initial-recognition and uncertain-position items are tracked but left
    /// to reviewer judgment; the engine flags them for manual review instead
    /// of guessing a routing.
    pub fn auto_routed(&self) -> bool {
        matches!(self, Self::TemporaryTaxable | Self::TemporaryDeductible)
    }

    /// Stable bucket label used in summaries and CSV exports
    pub fn label(&self) -> &'static str {
        match self {
            Self::TemporaryTaxable => "temporary_taxable",
            Self::TemporaryDeductible => "temporary_deductible",
            Self::InitialRecognition => "initial_recognition",
            Self::UncertainPositions => "uncertain_positions",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single temporary-difference category as captured on the deferred tax form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemporaryDifferenceCategory {
    /// Free-text description (e.g. "Accelerated wear and tear on plant")
    pub description: String,
    /// Category classification
    pub kind: CategoryKind,
    /// Carrying amount per the accounting records
    pub book_value: Money,
    /// Tax base of the same item
    pub tax_value: Money,
    /// Tax rate applicable on reversal, as a fraction in [0, 1]
    pub applicable_tax_rate: f64,
    /// Whether the recognition criteria are met; if false no deferred tax
    /// is raised regardless of kind
    pub recognition_criteria_met: bool,
    /// Owning entity for multi-entity groups; None means the main entity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,
}

impl TemporaryDifferenceCategory {
    /// Signed temporary difference: book value less tax base
    pub fn temporary_difference(&self) -> Money {
        self.book_value - self.tax_value
    }
}

/// Classification of a tax loss being carried forward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossType {
    /// Ordinary assessed loss
    AssessedLoss,
    /// Capital loss (ring-fenced against capital gains)
    CapitalLoss,
    /// Other ring-fenced or special losses
    Other,
}

impl fmt::Display for LossType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::AssessedLoss => "assessed_loss",
            Self::CapitalLoss => "capital_loss",
            Self::Other => "other",
        };
        f.write_str(s)
    }
}

/// A tax loss carried forward from a prior year of assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxLossCarryForward {
    /// Loss classification
    pub loss_type: LossType,
    /// Loss amount (non-negative)
    pub loss_amount: Money,
    /// Year of assessment in which the loss originated
    pub origination_year: u16,
    /// Year in which the loss expires, if it does
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_year: Option<u16>,
    /// Probability of future utilization, as a fraction in [0, 1]
    pub utilization_probability: f64,
    /// Owning entity for multi-entity groups; None means the main entity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,
}

/// Result of computing a single temporary-difference category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryComputation {
    /// Signed temporary difference (book value less tax base)
    pub temporary_difference: Money,
    /// Deferred tax asset raised (zero unless kind is temporary_deductible)
    pub deferred_tax_asset: Money,
    /// Deferred tax liability raised (zero unless kind is temporary_taxable)
    pub deferred_tax_liability: Money,
    /// True for categories the engine does not auto-route
    /// (initial recognition, uncertain positions); the caller must surface
    /// these for manual treatment
    pub needs_manual_review: bool,
}

/// Per-bucket DTA/DTL accumulation within a summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryBucket {
    /// Bucket label: a category kind label, or "tax_losses"
    pub label: String,
    /// Accumulated deferred tax assets in this bucket
    pub deferred_tax_asset: Money,
    /// Accumulated deferred tax liabilities in this bucket
    pub deferred_tax_liability: Money,
    /// Number of line items contributing to this bucket
    pub item_count: usize,
}

/// Aggregated deferred tax position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeferredTaxSummary {
    /// Total deferred tax assets (categories + recognised tax losses)
    pub total_dta: Money,
    /// Total deferred tax liabilities
    pub total_dtl: Money,
    /// Net position: total_dta - total_dtl
    pub net_position: Money,
    /// Accumulation per category kind, with tax losses as a trailing
    /// "tax_losses" bucket
    pub buckets: Vec<SummaryBucket>,
    /// Accumulation per entity; only populated in multi-entity mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by_entity: Option<Vec<SummaryBucket>>,
    /// Line items the engine could not auto-route
    pub manual_review_count: usize,
}

/// Entity key used when a record carries no entity name
pub const MAIN_ENTITY: &str = "Main Entity";
