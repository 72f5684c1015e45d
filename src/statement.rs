use std::io::Write;

use crate::domain::types::Transaction;

/// Writes a transaction log as CSV with a `type,amount` header, one row per
/// record, chronological order.
pub fn write_statement<W: Write>(writer: W, transactions: &[Transaction]) -> csv::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for transaction in transactions {
        csv_writer.serialize(transaction)?;
    }
    csv_writer.flush()?;
    Ok(())
}
