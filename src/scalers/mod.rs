mod min_max_scaler;
mod scaler;
mod standard_scaler;

pub use min_max_scaler::MinMaxScaler;
pub use scaler::Scaler;
pub use standard_scaler::StandardScaler;
