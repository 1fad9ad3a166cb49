//! Deferred tax engine
//!
//! Turns temporary-difference categories and tax-loss carry-forwards into
//! deferred tax assets/liabilities and an aggregated position. All functions
//! are pure; inputs are assumed range-validated upstream (rates and
//! probabilities in [0, 1]).

use std::collections::BTreeMap;

use crate::models::{
    CategoryComputation, CategoryKind, DeferredTaxSummary, Money, SummaryBucket,
    TaxLossCarryForward, TemporaryDifferenceCategory, MAIN_ENTITY,
};

/// Compute the deferred tax arising from a single category
///
/// The temporary difference is signed (book value less tax base). When the
/// recognition criteria are not met, no deferred tax is raised regardless of
/// kind. Taxable differences route to a liability, deductible differences to
/// an asset; initial-recognition and uncertain-position items are returned
/// with zeros and `needs_manual_review` set.
pub fn compute_category(category: &TemporaryDifferenceCategory) -> CategoryComputation {
    let temporary_difference = category.temporary_difference();
    let needs_manual_review = !category.kind.auto_routed();

    if !category.recognition_criteria_met {
        return CategoryComputation {
            temporary_difference,
            deferred_tax_asset: Money::zero(),
            deferred_tax_liability: Money::zero(),
            needs_manual_review,
        };
    }

    let tax_effect = temporary_difference
        .abs()
        .mul_rate(category.applicable_tax_rate);

    let (deferred_tax_asset, deferred_tax_liability) = match category.kind {
        CategoryKind::TemporaryTaxable => (Money::zero(), tax_effect),
        CategoryKind::TemporaryDeductible => (tax_effect, Money::zero()),
        // No automatic routing rule; left to reviewer judgment
        CategoryKind::InitialRecognition | CategoryKind::UncertainPositions => {
            (Money::zero(), Money::zero())
        }
    };

    CategoryComputation {
        temporary_difference,
        deferred_tax_asset,
        deferred_tax_liability,
        needs_manual_review,
    }
}

/// Deferred tax asset recognised on a tax-loss carry-forward
///
/// `loss_amount * tax_rate * utilization_probability`, rounded to the cent in
/// a single step. The probability factor is the only recognition gate applied
/// here; any "probable utilization" threshold is a business rule enforced
/// upstream.
pub fn compute_tax_loss(loss: &TaxLossCarryForward, tax_rate: f64) -> Money {
    loss.loss_amount
        .mul_rate(tax_rate * loss.utilization_probability)
}

/// Aggregate categories and tax losses into a deferred tax position
///
/// Buckets accumulate per category kind in classification order, followed by
/// a synthetic `tax_losses` bucket. Entity grouping is only populated when
/// `multi_entity` is set; records without an entity name fall under
/// "Main Entity".
pub fn aggregate_summary(
    categories: &[TemporaryDifferenceCategory],
    losses: &[TaxLossCarryForward],
    tax_rate: f64,
    multi_entity: bool,
) -> DeferredTaxSummary {
    let mut total_dta = Money::zero();
    let mut total_dtl = Money::zero();
    let mut manual_review_count = 0;

    let kind_order = [
        CategoryKind::TemporaryTaxable,
        CategoryKind::TemporaryDeductible,
        CategoryKind::InitialRecognition,
        CategoryKind::UncertainPositions,
    ];
    let mut kind_buckets: BTreeMap<usize, SummaryBucket> = BTreeMap::new();
    let mut entity_buckets: BTreeMap<String, SummaryBucket> = BTreeMap::new();

    for category in categories {
        let computed = compute_category(category);
        total_dta += computed.deferred_tax_asset;
        total_dtl += computed.deferred_tax_liability;
        if computed.needs_manual_review {
            manual_review_count += 1;
        }

        let position = kind_order
            .iter()
            .position(|k| *k == category.kind)
            .unwrap_or(kind_order.len());
        let bucket = kind_buckets
            .entry(position)
            .or_insert_with(|| SummaryBucket {
                label: category.kind.label().to_string(),
                deferred_tax_asset: Money::zero(),
                deferred_tax_liability: Money::zero(),
                item_count: 0,
            });
        bucket.deferred_tax_asset += computed.deferred_tax_asset;
        bucket.deferred_tax_liability += computed.deferred_tax_liability;
        bucket.item_count += 1;

        if multi_entity {
            accumulate_entity(
                &mut entity_buckets,
                category.entity_name.as_deref(),
                computed.deferred_tax_asset,
                computed.deferred_tax_liability,
            );
        }
    }

    let mut loss_bucket = SummaryBucket {
        label: "tax_losses".to_string(),
        deferred_tax_asset: Money::zero(),
        deferred_tax_liability: Money::zero(),
        item_count: 0,
    };
    for loss in losses {
        let dta = compute_tax_loss(loss, tax_rate);
        total_dta += dta;
        loss_bucket.deferred_tax_asset += dta;
        loss_bucket.item_count += 1;

        if multi_entity {
            accumulate_entity(
                &mut entity_buckets,
                loss.entity_name.as_deref(),
                dta,
                Money::zero(),
            );
        }
    }

    let mut buckets: Vec<SummaryBucket> = kind_buckets.into_values().collect();
    buckets.push(loss_bucket);

    let by_entity = if multi_entity {
        Some(entity_buckets.into_values().collect())
    } else {
        None
    };

    DeferredTaxSummary {
        total_dta,
        total_dtl,
        net_position: total_dta - total_dtl,
        buckets,
        by_entity,
        manual_review_count,
    }
}

fn accumulate_entity(
    buckets: &mut BTreeMap<String, SummaryBucket>,
    entity_name: Option<&str>,
    dta: Money,
    dtl: Money,
) {
    let key = match entity_name {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => MAIN_ENTITY.to_string(),
    };
    let bucket = buckets.entry(key.clone()).or_insert_with(|| SummaryBucket {
        label: key,
        deferred_tax_asset: Money::zero(),
        deferred_tax_liability: Money::zero(),
        item_count: 0,
    });
    bucket.deferred_tax_asset += dta;
    bucket.deferred_tax_liability += dtl;
    bucket.item_count += 1;
}
