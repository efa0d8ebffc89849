pub mod add;
pub mod percent;
pub mod position;
pub mod remove;

pub use self::{percent::LiquidityPercent, position::Prices};
