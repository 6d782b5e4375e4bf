pub mod tonconnect;

pub use tonconnect::TonConnect;
