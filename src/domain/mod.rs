pub mod payout;
pub mod ports;
pub mod reel;
pub mod symbol;
