use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use num::rational::BigRational;
use num::Zero;

use crate::models::format_money;
use crate::parser::parse_record;
use crate::ParserError;

/// Someone at the table: a name and the amounts of what they ordered
///
/// The name may hold several people joined by a separator, such as `Alice_Bob`, in which
/// case the items are shared evenly when building a [`Bill`](crate::models::Bill).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    name: String,
    items: Vec<BigRational>,
}

impl Participant {
    pub fn new(name: String, items: Vec<BigRational>) -> Self {
        Participant { name, items }
    }
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
    pub fn items(&self) -> &[BigRational] {
        self.items.as_slice()
    }
    /// The sum of all the items
    pub fn total(&self) -> BigRational {
        self.items
            .iter()
            .fold(BigRational::zero(), |acc, item| acc + item)
    }
    /// The names of the people sharing this record
    pub fn names<'a>(&'a self, separator: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.name.split(separator).map(|x| x.trim())
    }
}

impl FromStr for Participant {
    type Err = ParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_record(s)
    }
}

impl Display for Participant {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for item in self.items.iter() {
            write!(f, ",{}", &format_money(item)[1..])?;
        }
        Ok(())
    }
}
