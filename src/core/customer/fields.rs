use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// A categorical customer attribute that is one-hot expanded at encoding time.
///
/// The category string (`Into<&'static str>`) is the exact value used at
/// training time, so `{field}_{category}` reproduces the training column name.
pub trait Category: Copy + Into<&'static str> + IntoEnumIterator {
    fn category(self) -> &'static str {
        self.into()
    }

    fn options() -> Vec<&'static str> {
        Self::iter().map(Into::into).collect()
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Display,
)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Display,
)]
pub enum YesNo {
    #[default]
    Yes,
    No,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Display,
)]
pub enum InternetService {
    #[default]
    #[serde(rename = "DSL")]
    #[strum(serialize = "DSL")]
    Dsl,
    #[serde(rename = "Fiber optic")]
    #[strum(serialize = "Fiber optic")]
    FiberOptic,
    No,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Display,
)]
pub enum TechSupport {
    #[default]
    Yes,
    No,
    #[serde(rename = "No internet service")]
    #[strum(serialize = "No internet service")]
    NoInternetService,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Display,
)]
pub enum Contract {
    #[default]
    #[serde(rename = "Month-to-month")]
    #[strum(serialize = "Month-to-month")]
    MonthToMonth,
    #[serde(rename = "One year")]
    #[strum(serialize = "One year")]
    OneYear,
    #[serde(rename = "Two year")]
    #[strum(serialize = "Two year")]
    TwoYear,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Display,
)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "Electronic check")]
    #[strum(serialize = "Electronic check")]
    ElectronicCheck,
    #[serde(rename = "Mailed check")]
    #[strum(serialize = "Mailed check")]
    MailedCheck,
    #[serde(rename = "Bank transfer (automatic)")]
    #[strum(serialize = "Bank transfer (automatic)")]
    BankTransfer,
    #[serde(rename = "Credit card (automatic)")]
    #[strum(serialize = "Credit card (automatic)")]
    CreditCard,
}

impl Category for Gender {}
impl Category for YesNo {}
impl Category for InternetService {}
impl Category for TechSupport {}
impl Category for Contract {}
impl Category for PaymentMethod {}

/// Senior citizen flag. Travels as the integer `0`/`1` and stays numeric
/// through encoding; it is never one-hot expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum SeniorCitizen {
    #[default]
    No,
    Yes,
}

impl SeniorCitizen {
    pub fn as_f64(self) -> f64 {
        u8::from(self) as f64
    }
}

impl From<SeniorCitizen> for u8 {
    fn from(value: SeniorCitizen) -> Self {
        match value {
            SeniorCitizen::No => 0,
            SeniorCitizen::Yes => 1,
        }
    }
}

impl TryFrom<u8> for SeniorCitizen {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SeniorCitizen::No),
            1 => Ok(SeniorCitizen::Yes),
            other => Err(format!("SeniorCitizen must be 0 or 1, got {other}")),
        }
    }
}

impl JsonSchema for SeniorCitizen {
    fn schema_name() -> Cow<'static, str> {
        "SeniorCitizen".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "integer",
            "enum": [0, 1]
        })
    }
}
