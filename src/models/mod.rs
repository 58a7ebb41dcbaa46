//! The people at the table, what they ordered and what they owe
pub use bill::{Bill, Payment, Split, NAME_SEPARATOR};
pub use money::format_money;
pub use participant::Participant;

mod bill;
mod money;
mod participant;
