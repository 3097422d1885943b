pub mod constants;
pub mod notation;
pub mod position;
pub mod reconcile;
pub mod sensor;
pub mod session;
pub mod types;
