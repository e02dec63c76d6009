pub mod common;
pub mod line_item;
pub mod proposal;
pub mod voucher;

pub use common::*;
pub use line_item::*;
pub use proposal::*;
pub use voucher::*;
