//! Deferred Tax Report
//!
//! Aggregates temporary-difference categories and tax-loss carry-forwards
//! into a grouped DTA/DTL position with per-line detail, for terminal display
//! and CSV export.

use std::io::Write;

use crate::engine::{aggregate_summary, compute_category, compute_tax_loss};
use crate::error::{RigelError, RigelResult};
use crate::models::{
    CategoryComputation, DeferredTaxSummary, Money, TaxLossCarryForward,
    TemporaryDifferenceCategory,
};

/// One category line with its computed figures
#[derive(Debug, Clone)]
pub struct CategoryLine {
    /// The input record
    pub category: TemporaryDifferenceCategory,
    /// The computed result
    pub computed: CategoryComputation,
}

/// One tax-loss line with its recognised asset
#[derive(Debug, Clone)]
pub struct LossLine {
    /// The input record
    pub loss: TaxLossCarryForward,
    /// Deferred tax asset recognised
    pub deferred_tax_asset: Money,
}

/// Deferred Tax Report
#[derive(Debug, Clone)]
pub struct DeferredTaxReport {
    /// Per-category detail
    pub category_lines: Vec<CategoryLine>,
    /// Per-loss detail
    pub loss_lines: Vec<LossLine>,
    /// Aggregated position
    pub summary: DeferredTaxSummary,
    /// Tax rate applied to tax losses
    pub tax_rate: f64,
}

impl DeferredTaxReport {
    /// Generate the report
    pub fn generate(
        categories: &[TemporaryDifferenceCategory],
        losses: &[TaxLossCarryForward],
        tax_rate: f64,
        multi_entity: bool,
    ) -> Self {
        let category_lines = categories
            .iter()
            .map(|category| CategoryLine {
                category: category.clone(),
                computed: compute_category(category),
            })
            .collect();

        let loss_lines = losses
            .iter()
            .map(|loss| LossLine {
                loss: loss.clone(),
                deferred_tax_asset: compute_tax_loss(loss, tax_rate),
            })
            .collect();

        let summary = aggregate_summary(categories, losses, tax_rate, multi_entity);

        Self {
            category_lines,
            loss_lines,
            summary,
            tax_rate,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Deferred Tax Summary\n");
        output.push_str(&"=".repeat(72));
        output.push('\n');

        output.push_str(&format!(
            "{:<44} {:>12} {:>12}\n",
            "Bucket", "DTA", "DTL"
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');
        for bucket in &self.summary.buckets {
            output.push_str(&format!(
                "{:<44} {:>12} {:>12}\n",
                bucket.label,
                bucket.deferred_tax_asset.to_string(),
                bucket.deferred_tax_liability.to_string(),
            ));
        }

        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "Total DTA:    {:>15}\n",
            self.summary.total_dta.to_string()
        ));
        output.push_str(&format!(
            "Total DTL:    {:>15}\n",
            self.summary.total_dtl.to_string()
        ));
        output.push_str(&format!(
            "Net position: {:>15}\n",
            self.summary.net_position.to_string()
        ));

        if let Some(entities) = &self.summary.by_entity {
            output.push('\n');
            output.push_str("By entity:\n");
            for bucket in entities {
                output.push_str(&format!(
                    "  {:<42} {:>12} {:>12}\n",
                    bucket.label,
                    bucket.deferred_tax_asset.to_string(),
                    bucket.deferred_tax_liability.to_string(),
                ));
            }
        }

        if self.summary.manual_review_count > 0 {
            output.push('\n');
            output.push_str(&format!(
                "{} item(s) require manual review (no automatic DTA/DTL routing).\n",
                self.summary.manual_review_count
            ));
        }

        output
    }

    /// Export the report detail to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> RigelResult<()> {
        writeln!(
            writer,
            "Line Type,Description,Kind,Temporary Difference,DTA,DTL,Manual Review"
        )
        .map_err(|e| RigelError::Export(e.to_string()))?;

        for line in &self.category_lines {
            writeln!(
                writer,
                "category,{},{},{:.2},{:.2},{:.2},{}",
                crate::export::escape_csv(&line.category.description),
                line.category.kind,
                line.computed.temporary_difference.to_rands_f64(),
                line.computed.deferred_tax_asset.to_rands_f64(),
                line.computed.deferred_tax_liability.to_rands_f64(),
                line.computed.needs_manual_review,
            )
            .map_err(|e| RigelError::Export(e.to_string()))?;
        }

        for line in &self.loss_lines {
            writeln!(
                writer,
                "tax_loss,{} loss ({}),{},,{:.2},,false",
                line.loss.loss_type,
                line.loss.origination_year,
                "tax_losses",
                line.deferred_tax_asset.to_rands_f64(),
            )
            .map_err(|e| RigelError::Export(e.to_string()))?;
        }

        writeln!(writer).map_err(|e| RigelError::Export(e.to_string()))?;
        writeln!(
            writer,
            "SUMMARY,Total DTA,,,{:.2},,",
            self.summary.total_dta.to_rands_f64()
        )
        .map_err(|e| RigelError::Export(e.to_string()))?;
        writeln!(
            writer,
            "SUMMARY,Total DTL,,,,{:.2},",
            self.summary.total_dtl.to_rands_f64()
        )
        .map_err(|e| RigelError::Export(e.to_string()))?;
        writeln!(
            writer,
            "SUMMARY,Net Position,,,{:.2},,",
            self.summary.net_position.to_rands_f64()
        )
        .map_err(|e| RigelError::Export(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryKind, LossType};

    fn sample_inputs() -> (Vec<TemporaryDifferenceCategory>, Vec<TaxLossCarryForward>) {
        let categories = vec![
            TemporaryDifferenceCategory {
                description: "Accelerated wear and tear".into(),
                kind: CategoryKind::TemporaryTaxable,
                book_value: Money::from_rands(500_000),
                tax_value: Money::from_rands(350_000),
                applicable_tax_rate: 0.27,
                recognition_criteria_met: true,
                entity_name: None,
            },
            TemporaryDifferenceCategory {
                description: "Provision for leave pay".into(),
                kind: CategoryKind::TemporaryDeductible,
                book_value: Money::from_rands(80_000),
                tax_value: Money::from_rands(100_000),
                applicable_tax_rate: 0.27,
                recognition_criteria_met: true,
                entity_name: None,
            },
        ];
        let losses = vec![TaxLossCarryForward {
            loss_type: LossType::AssessedLoss,
            loss_amount: Money::from_rands(100_000),
            origination_year: 2022,
            expiry_year: None,
            utilization_probability: 1.0,
            entity_name: None,
        }];
        (categories, losses)
    }

    #[test]
    fn test_generate_report() {
        let (categories, losses) = sample_inputs();
        let report = DeferredTaxReport::generate(&categories, &losses, 0.27, false);

        assert_eq!(report.category_lines.len(), 2);
        assert_eq!(report.loss_lines.len(), 1);
        assert_eq!(
            report.loss_lines[0].deferred_tax_asset,
            Money::from_rands(27_000)
        );
        assert_eq!(report.summary.total_dtl, Money::from_rands(40_500));
    }

    #[test]
    fn test_format_terminal() {
        let (categories, losses) = sample_inputs();
        let report = DeferredTaxReport::generate(&categories, &losses, 0.27, false);
        let text = report.format_terminal();

        assert!(text.contains("temporary_taxable"));
        assert!(text.contains("tax_losses"));
        assert!(text.contains("Total DTA:"));
        assert!(text.contains("Net position:"));
        assert!(!text.contains("manual review"));
    }

    #[test]
    fn test_format_terminal_flags_manual_review() {
        let categories = vec![TemporaryDifferenceCategory {
            description: "Uncertain position".into(),
            kind: CategoryKind::UncertainPositions,
            book_value: Money::from_rands(10_000),
            tax_value: Money::zero(),
            applicable_tax_rate: 0.27,
            recognition_criteria_met: true,
            entity_name: None,
        }];
        let report = DeferredTaxReport::generate(&categories, &[], 0.27, false);

        assert!(report
            .format_terminal()
            .contains("1 item(s) require manual review"));
    }

    #[test]
    fn test_csv_export() {
        let (categories, losses) = sample_inputs();
        let report = DeferredTaxReport::generate(&categories, &losses, 0.27, false);

        let mut csv_output = Vec::new();
        report.export_csv(&mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        assert!(csv_string.contains("Line Type,Description"));
        assert!(csv_string.contains("Accelerated wear and tear"));
        assert!(csv_string.contains("SUMMARY,Total DTA,,,32400.00,,"));
    }
}
