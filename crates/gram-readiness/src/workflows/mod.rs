pub mod catalog;
pub mod district;
pub mod readiness;
pub mod survey;
