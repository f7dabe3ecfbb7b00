//! Record → feature row encoding.
//!
//! Encoding is one-hot expansion followed by alignment onto the training
//! column schema. Categories the schema has no indicator column for end up
//! as all-zero indicators. That matches how the training pipeline treated
//! baseline and unseen values, so it is kept, but every occurrence is traced
//! so skew between training and serving can be spotted in the logs.

mod align;
mod one_hot;

pub use align::align;
pub use one_hot::one_hot;

use crate::core::customer::RawCustomerRecord;
use crate::core::features::EncodedFeatureVector;
use crate::core::schema::{TrainingColumnSchema, one_hot_column};
use tracing::{debug, warn};

/// A categorical value whose indicator column is absent from the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnseenCategory {
    pub field: &'static str,
    pub category: &'static str,
    /// `true` when the schema still has other indicator columns for `field`.
    pub field_known: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlignmentReport {
    /// Encoded columns that had no place in the schema.
    pub dropped_columns: Vec<String>,
    pub unseen_categories: Vec<UnseenCategory>,
}

impl AlignmentReport {
    pub fn is_clean(&self) -> bool {
        self.dropped_columns.is_empty() && self.unseen_categories.is_empty()
    }

    /// Dropped columns that are not indicator columns of an unseen category.
    pub fn dropped_numeric(&self) -> impl Iterator<Item = &str> {
        self.dropped_columns.iter().map(String::as_str).filter(|c| {
            !self
                .unseen_categories
                .iter()
                .any(|u| *c == one_hot_column(u.field, u.category))
        })
    }

    fn trace(&self) {
        for u in &self.unseen_categories {
            if u.field_known {
                debug!(
                    field = u.field,
                    category = u.category,
                    "category has no indicator column, zero-filled"
                );
            } else {
                warn!(
                    field = u.field,
                    category = u.category,
                    "schema has no indicator columns for field, zero-filled"
                );
            }
        }
        for column in self.dropped_numeric() {
            warn!(column, "numeric column not in training schema, dropped");
        }
    }
}

/// Encodes `record` onto `schema` and reports what alignment had to discard.
pub fn encode_with_report<'s>(
    record: &RawCustomerRecord,
    schema: &'s TrainingColumnSchema,
) -> (EncodedFeatureVector<'s>, AlignmentReport) {
    let (encoded, dropped_columns) = align(one_hot(record), schema);

    let unseen_categories = record
        .categorical_columns()
        .into_iter()
        .filter(|(field, category)| !schema.contains(&one_hot_column(field, category)))
        .map(|(field, category)| UnseenCategory {
            field,
            category,
            field_known: schema.has_indicators_for(field),
        })
        .collect();

    let report = AlignmentReport {
        dropped_columns,
        unseen_categories,
    };
    (encoded, report)
}

/// Encodes `record` onto `schema`, tracing any zero-filled category.
pub fn encode<'s>(
    record: &RawCustomerRecord,
    schema: &'s TrainingColumnSchema,
) -> EncodedFeatureVector<'s> {
    let (encoded, report) = encode_with_report(record, schema);
    report.trace();
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::customer::{Contract, PaymentMethod, TechSupport};
    use crate::testing::dummies::{churn_schema, sample_customer};

    #[test]
    fn output_matches_schema_for_every_contract_and_payment() {
        let schema = churn_schema();
        for contract in [Contract::MonthToMonth, Contract::OneYear, Contract::TwoYear] {
            for payment in [
                PaymentMethod::ElectronicCheck,
                PaymentMethod::MailedCheck,
                PaymentMethod::BankTransfer,
                PaymentMethod::CreditCard,
            ] {
                let mut r = sample_customer();
                r.contract = contract;
                r.payment_method = payment;
                let v = encode(&r, &schema);
                let names: Vec<&str> = v.iter().map(|(n, _)| n).collect();
                assert_eq!(
                    names,
                    schema.columns().iter().map(String::as_str).collect::<Vec<_>>()
                );
            }
        }
    }

    #[test]
    fn known_categories_are_hot() {
        let schema = churn_schema();
        let (v, report) = encode_with_report(&sample_customer(), &schema);
        assert_eq!(v.get("tenure"), Some(12.0));
        assert_eq!(v.get("MonthlyCharges"), Some(70.0));
        assert_eq!(v.get("InternetService_Fiber optic"), Some(1.0));
        assert_eq!(v.get("InternetService_DSL"), Some(0.0));
        assert_eq!(v.get("PaymentMethod_Electronic check"), Some(1.0));
        assert!(report.is_clean(), "{report:?}");
    }

    #[test]
    fn unseen_category_is_zero_filled_and_reported() {
        let schema = churn_schema();
        let mut r = sample_customer();
        r.tech_support = TechSupport::NoInternetService;

        let (v, report) = encode_with_report(&r, &schema);
        assert_eq!(v.get("TechSupport_Yes"), Some(0.0));
        assert_eq!(v.get("TechSupport_No"), Some(0.0));
        assert_eq!(
            report.unseen_categories,
            vec![UnseenCategory {
                field: "TechSupport",
                category: "No internet service",
                field_known: true,
            }]
        );
        assert_eq!(
            report.dropped_columns,
            vec!["TechSupport_No internet service".to_string()]
        );
        assert_eq!(report.dropped_numeric().count(), 0);
    }

    #[test]
    fn field_without_indicators_and_missing_numeric_are_reported() {
        let schema = TrainingColumnSchema::new(vec![
            "tenure".to_string(),
            "Contract_Month-to-month".to_string(),
        ])
        .unwrap();
        let (v, report) = encode_with_report(&sample_customer(), &schema);
        assert_eq!(v.values(), &[12.0, 1.0]);

        let gender = report
            .unseen_categories
            .iter()
            .find(|u| u.field == "gender")
            .unwrap();
        assert!(!gender.field_known);

        let numeric: Vec<&str> = report.dropped_numeric().collect();
        assert_eq!(numeric, vec!["SeniorCitizen", "MonthlyCharges", "TotalCharges"]);
    }

    #[test]
    fn reencoding_aligned_row_is_noop() {
        let schema = churn_schema();
        let first = encode(&sample_customer(), &schema);
        let (second, dropped) = align(first.iter(), &schema);
        assert_eq!(first, second);
        assert!(dropped.is_empty());
    }
}
