mod fields;
mod record;

pub use fields::{
    Category, Contract, Gender, InternetService, PaymentMethod, SeniorCitizen, TechSupport, YesNo,
};
pub use record::{
    MONTHLY_CHARGES_MAX, MONTHLY_CHARGES_MIN, RawCustomerRecord, RecordError, TENURE_MAX,
    TOTAL_CHARGES_MIN,
};
