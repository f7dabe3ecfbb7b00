use crate::core::customer::{
    Contract, Gender, InternetService, PaymentMethod, RawCustomerRecord, SeniorCitizen,
    TechSupport, YesNo,
};

/// Month-to-month fiber customer a year in, paying by electronic check.
pub fn sample_customer() -> RawCustomerRecord {
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
