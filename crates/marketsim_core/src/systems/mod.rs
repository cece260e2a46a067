pub mod acquisition;
pub mod driver_churn;
pub mod matching;
