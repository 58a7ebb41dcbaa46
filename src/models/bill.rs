use std::collections::HashMap;

use num::rational::BigRational;
use num::{BigInt, Zero};

use crate::models::Participant;
use crate::{ParserError, SplitError};

/// Separator for people sharing a record, as in `Alice_Bob,20.00`
pub const NAME_SEPARATOR: &str = "_";

/// What every person ordered, before tax, tip and fees
///
/// Records naming the same person are added together. A record shared by several
/// people is split evenly among them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bill {
    amounts: HashMap<String, BigRational>,
}

/// The final amount owed by a person
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    pub name: String,
    pub amount: BigRational,
}

/// The result of splitting a total proportionally
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    pub subtotal: BigRational,
    pub total: BigRational,
    /// Sorted by name
    pub payments: Vec<Payment>,
}

impl Split {
    /// Tax, tip and everything else shared by the group
    pub fn shared_costs(&self) -> BigRational {
        &self.total - &self.subtotal
    }
}

impl Bill {
    pub fn new() -> Self {
        Bill {
            amounts: HashMap::new(),
        }
    }

    /// Builds a bill out of raw records, skipping blank ones
    ///
    /// Stops at the first record that does not parse.
    pub fn from_records<S: AsRef<str>>(
        records: &[S],
        separator: &str,
    ) -> Result<Self, ParserError> {
        let mut bill = Bill::new();
        for record in records.iter() {
            let record = record.as_ref();
            if record.trim().is_empty() {
                continue;
            }
            bill.add_record(record, separator)?;
        }
        Ok(bill)
    }

    /// Parses a record and shares its total evenly among the joined names
    ///
    /// Errors quote the record as given.
    pub fn add_record(&mut self, record: &str, separator: &str) -> Result<(), ParserError> {
        let participant: Participant = record.parse()?;
        let names: Vec<&str> = if separator.is_empty() {
            vec![participant.name()]
        } else {
            participant.names(separator).collect()
        };
        if names.iter().any(|x| x.is_empty()) {
            return Err(ParserError::EmptyName(record.to_string()));
        }
        let share = participant.total() / BigInt::from(names.len());
        for name in names {
            let amount = self
                .amounts
                .entry(name.to_string())
                .or_insert_with(BigRational::zero);
            *amount += share.clone();
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&BigRational> {
        self.amounts.get(name)
    }

    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    /// The sum of what everybody ordered
    pub fn subtotal(&self) -> BigRational {
        self.amounts
            .values()
            .fold(BigRational::zero(), |acc, x| acc + x)
    }

    /// Splits `total` proportionally to what everybody ordered
    ///
    /// Each person pays `amount / subtotal * total`, so tax, tip and fees are shared in
    /// proportion to the subtotal rather than evenly.
    pub fn allocate(&self, total: &BigRational) -> Result<Split, SplitError> {
        let subtotal = self.subtotal();
        if &subtotal > total {
            return Err(SplitError::SubtotalExceedsTotal {
                subtotal,
                total: total.clone(),
            });
        }
        if subtotal.is_zero() {
            return Err(SplitError::ZeroSubtotal);
        }

        let mut payments = self
            .amounts
            .iter()
            .map(|(name, amount)| Payment {
                name: name.clone(),
                amount: amount / &subtotal * total,
            })
            .collect::<Vec<Payment>>();
        payments.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(Split {
            subtotal,
            total: total.clone(),
            payments,
        })
    }
}
