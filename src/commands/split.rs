use num::BigRational;
use prettytable::format::{FormatBuilder, TableFormat};
use prettytable::Table;

use crate::models::{format_money, Bill, Split};
use crate::parser::read_records;
use crate::{Error, SplitOpts};

/// Split command
///
/// Splits the total among the people and prints how much everyone owes
pub fn execute(options: &SplitOpts, total: &BigRational) -> Result<(), Error> {
    let split = compute(options, total)?;
    print!("{}", render(&split));
    Ok(())
}

/// Loads the people, either from the command line or from a file, and splits the total
pub fn compute(options: &SplitOpts, total: &BigRational) -> Result<Split, Error> {
    let records = match options.input_file() {
        Some(path) => read_records(&path)?,
        None => options.people.clone(),
    };
    let bill = Bill::from_records(records.as_slice(), &options.separator)?;
    Ok(bill.allocate(total)?)
}

/// Two tables, the subtotal and shared costs first, then the payments sorted by name
pub fn render(split: &Split) -> String {
    let mut summary = Table::new();
    summary.set_format(table_format());
    summary.add_row(row!["Subtotal", format_money(&split.subtotal)]);
    summary.add_row(row!["Tax, tip, etc.", format_money(&split.shared_costs())]);

    let mut payments = Table::new();
    payments.set_format(table_format());
    for payment in split.payments.iter() {
        payments.add_row(row![payment.name, format_money(&payment.amount)]);
    }

    format!("{}\n{}", summary, payments)
}

/// No borders, columns separated by a single space
fn table_format() -> TableFormat {
    FormatBuilder::new()
        .column_separator(' ')
        .padding(0, 0)
        .build()
}
