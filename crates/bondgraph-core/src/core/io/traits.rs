use crate::core::models::bond_list::BondList;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for persisting bond lists in a tabular format.
///
/// The bond list itself owns no file format; implementors describe how the
/// caller's exported bond rows are laid out on disk.
pub trait BondFile {
    /// Format-specific switches for writing.
    type Options;

    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads a bond list from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails, the rows violate the bond list
    /// invariants, or the reader fails.
    fn read_from(reader: &mut impl BufRead) -> Result<BondList, Self::Error>;

    /// Writes a bond list to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(
        bond_list: &BondList,
        options: &Self::Options,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error>;

    /// Reads a bond list from a file path.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<BondList, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a bond list to a file path.
    fn write_to_path<P: AsRef<Path>>(
        bond_list: &BondList,
        options: &Self::Options,
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(bond_list, options, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
