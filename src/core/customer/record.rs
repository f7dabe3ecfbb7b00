use crate::core::customer::fields::{
    Category, Contract, Gender, InternetService, PaymentMethod, SeniorCitizen, TechSupport, YesNo,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const TENURE_MAX: u32 = 72;
pub const MONTHLY_CHARGES_MIN: f64 = 18.0;
pub const MONTHLY_CHARGES_MAX: f64 = 120.0;
pub const TOTAL_CHARGES_MIN: f64 = 18.0;

#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}

/// One customer as collected from the form.
///
/// Serialized names are the attribute names the classifier was trained on.
/// Fields are declared in the order the form asks for them: account details
/// first, then demographics and services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "Customer")]
pub struct RawCustomerRecord {
    #[serde(rename = "tenure")]
    #[schemars(
        title = "Tenure (months)",
        description = "Months the customer has been with the company",
        range(min = 0, max = 72)
    )]
    pub tenure: u32,

    #[serde(rename = "Contract")]
    #[schemars(title = "Contract", description = "Current contract term")]
    pub contract: Contract,

    #[serde(rename = "PaperlessBilling")]
    #[schemars(
        title = "Paperless Billing",
        description = "Whether the customer receives paperless bills"
    )]
    pub paperless_billing: YesNo,

    #[serde(rename = "PaymentMethod")]
    #[schemars(title = "Payment Method", description = "How the customer pays")]
    pub payment_method: PaymentMethod,

    #[serde(rename = "MonthlyCharges")]
    #[schemars(
        title = "Monthly Charges ($)",
        description = "Amount charged each month",
        range(min = 18.0, max = 120.0)
    )]
    pub monthly_charges: f64,

    #[serde(rename = "TotalCharges")]
    #[schemars(
        title = "Total Charges ($)",
        description = "Amount charged over the whole tenure",
        range(min = 18.0)
    )]
    pub total_charges: f64,

    #[serde(rename = "gender")]
    #[schemars(title = "Gender")]
    pub gender: Gender,

    #[serde(rename = "SeniorCitizen")]
    #[schemars(title = "Senior Citizen", description = "1 if the customer is a senior citizen")]
    pub senior_citizen: SeniorCitizen,

    #[serde(rename = "Partner")]
    #[schemars(title = "Partner", description = "Whether the customer has a partner")]
    pub partner: YesNo,

    #[serde(rename = "Dependents")]
    #[schemars(title = "Dependents", description = "Whether the customer has dependents")]
    pub dependents: YesNo,

    #[serde(rename = "InternetService")]
    #[schemars(title = "Internet Service", description = "Internet service provider")]
    pub internet_service: InternetService,

    #[serde(rename = "TechSupport")]
    #[schemars(title = "Tech Support", description = "Whether the customer has tech support")]
    pub tech_support: TechSupport,
}

impl Default for RawCustomerRecord {
    fn default() -> Self {
        Self {
            tenure: 12,
            contract: Contract::default(),
            paperless_billing: YesNo::default(),
            payment_method: PaymentMethod::default(),
            monthly_charges: 70.0,
            total_charges: 1000.0,
            gender: Gender::default(),
            senior_citizen: SeniorCitizen::default(),
            partner: YesNo::default(),
            dependents: YesNo::default(),
            internet_service: InternetService::default(),
            tech_support: TechSupport::default(),
        }
    }
}

impl RawCustomerRecord {
    /// Columns that pass through encoding unchanged, keyed by training name.
    pub fn numeric_columns(&self) -> [(&'static str, f64); 4] {
        [
            ("SeniorCitizen", self.senior_citizen.as_f64()),
            ("tenure", self.tenure as f64),
            ("MonthlyCharges", self.monthly_charges),
            ("TotalCharges", self.total_charges),
        ]
    }

    /// `(field, category)` pairs for every one-hot expanded attribute.
    pub fn categorical_columns(&self) -> [(&'static str, &'static str); 8] {
        [
            ("gender", self.gender.category()),
            ("Partner", self.partner.category()),
            ("Dependents", self.dependents.category()),
            ("InternetService", self.internet_service.category()),
            ("TechSupport", self.tech_support.category()),
            ("Contract", self.contract.category()),
            ("PaperlessBilling", self.paperless_billing.category()),
            ("PaymentMethod", self.payment_method.category()),
        ]
    }

    /// Checks the numeric bounds the form enforces on its inputs.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.tenure > TENURE_MAX {
            return Err(RecordError::OutOfRange {
                field: "tenure",
                value: self.tenure as f64,
                min: 0.0,
                max: TENURE_MAX as f64,
            });
        }
        check_range(
            "MonthlyCharges",
            self.monthly_charges,
            MONTHLY_CHARGES_MIN,
            MONTHLY_CHARGES_MAX,
        )?;
        check_range(
            "TotalCharges",
            self.total_charges,
            TOTAL_CHARGES_MIN,
            f64::INFINITY,
        )?;
        Ok(())
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), RecordError> {
    if !value.is_finite() {
        return Err(RecordError::NotFinite { field });
    }
    if value < min || value > max {
        return Err(RecordError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> RawCustomerRecord {
        RawCustomerRecord {
            tenure: 12,
            contract: Contract::MonthToMonth,
            paperless_billing: YesNo::Yes,
            payment_method: PaymentMethod::ElectronicCheck,
            monthly_charges: 70.0,
            total_charges: 1000.0,
            gender: Gender::Male,
            senior_citizen: SeniorCitizen::No,
            partner: YesNo::No,
            dependents: YesNo::No,
            internet_service: InternetService::FiberOptic,
            tech_support: TechSupport::No,
        }
    }

    #[test]
    fn deserializes_from_training_attribute_names() {
        let record: RawCustomerRecord = serde_json::from_value(json!({
            "gender": "Male",
            "SeniorCitizen": 0,
            "Partner": "No",
            "Dependents": "No",
            "tenure": 12,
            "InternetService": "Fiber optic",
            "TechSupport": "No",
            "Contract": "Month-to-month",
            "PaperlessBilling": "Yes",
            "PaymentMethod": "Electronic check",
            "MonthlyCharges": 70.0,
            "TotalCharges": 1000.0
        }))
        .unwrap();
        assert_eq!(record, sample());
    }

    #[test]
    fn rejects_unknown_category() {
        let mut v = serde_json::to_value(sample()).unwrap();
        v["Contract"] = json!("Three year");
        assert!(serde_json::from_value::<RawCustomerRecord>(v).is_err());
    }

    #[test]
    fn defaults_match_form_defaults() {
        let d = RawCustomerRecord::default();
        assert_eq!(d.tenure, 12);
        assert_eq!(d.monthly_charges, 70.0);
        assert_eq!(d.total_charges, 1000.0);
        assert_eq!(d.contract, Contract::MonthToMonth);
        assert_eq!(d.senior_citizen, SeniorCitizen::No);
        assert!(d.validate().is_ok());
    }

    #[test]
    fn column_views() {
        let r = sample();
        let numeric = r.numeric_columns();
        assert_eq!(numeric[1], ("tenure", 12.0));
        assert_eq!(numeric[0], ("SeniorCitizen", 0.0));
        let cats = r.categorical_columns();
        assert!(cats.contains(&("InternetService", "Fiber optic")));
        assert!(cats.contains(&("PaymentMethod", "Electronic check")));
        assert_eq!(cats.len(), 8);
    }

    #[test]
    fn validate_bounds() {
        let mut r = sample();
        r.tenure = 73;
        assert!(matches!(
            r.validate(),
            Err(RecordError::OutOfRange { field: "tenure", .. })
        ));

        let mut r = sample();
        r.monthly_charges = 17.99;
        assert!(matches!(
            r.validate(),
            Err(RecordError::OutOfRange { field: "MonthlyCharges", .. })
        ));

        let mut r = sample();
        r.monthly_charges = 120.0;
        r.total_charges = 1_000_000.0;
        assert!(r.validate().is_ok());

        let mut r = sample();
        r.total_charges = f64::NAN;
        assert_eq!(
            r.validate(),
            Err(RecordError::NotFinite {
                field: "TotalCharges"
            })
        );
    }
}
