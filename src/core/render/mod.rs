pub mod cancellation;
pub mod pass;
pub mod pass_plan;
pub mod ports;
pub mod progress;
pub mod progressive;
