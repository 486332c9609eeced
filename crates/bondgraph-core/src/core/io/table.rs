use crate::core::io::traits::BondFile;
use crate::core::models::bond::Bond;
use crate::core::models::bond_list::BondList;
use crate::core::models::error::BondListError;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::debug;

const ATOM_COUNT_KEY: &str = "atom_count=";

#[derive(Debug, Error)]
pub enum BondFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Missing or malformed atom count header, expected '# atom_count=N' (found '{0}')")]
    MissingAtomCount(String),
    #[error("Parse error on line {line}: invalid integer '{value}'")]
    Parse { line: u64, value: String },
    #[error("Invalid bond table: {0}")]
    Graph(#[from] BondListError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvWriteOptions {
    /// Write rows sorted by atom pair instead of storage order.
    pub sort_bonds: bool,
    /// Write the bond order code as a third column.
    pub include_orders: bool,
}

impl Default for CsvWriteOptions {
    fn default() -> Self {
        Self {
            sort_bonds: false,
            include_orders: true,
        }
    }
}

/// Bond rows as comma separated values.
///
/// The first line carries the atom count as `# atom_count=N`; each following
/// record is `atom1,atom2` or `atom1,atom2,order` with the integer order code.
/// Further `#` lines are treated as comments.
pub struct CsvBondFile;

fn parse_atom_count(header: &str) -> Result<usize, BondFileError> {
    header
        .trim()
        .strip_prefix('#')
        .map(str::trim)
        .and_then(|rest| rest.strip_prefix(ATOM_COUNT_KEY))
        .and_then(|count| count.trim().parse().ok())
        .ok_or_else(|| BondFileError::MissingAtomCount(header.trim().to_string()))
}

impl BondFile for CsvBondFile {
    type Options = CsvWriteOptions;
    type Error = BondFileError;

    fn read_from(reader: &mut impl BufRead) -> Result<BondList, Self::Error> {
        let mut header = String::new();
        reader.read_line(&mut header)?;
        let atom_count = parse_atom_count(&header)?;

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut rows: Vec<Vec<i64>> = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            // Line numbers are relative to the CSV body, which starts after the header.
            let line = record.position().map_or(0, |p| p.line() + 1);
            let row = record
                .iter()
                .map(|field| {
                    field.parse::<i64>().map_err(|_| BondFileError::Parse {
                        line,
                        value: field.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }

        debug!(atom_count, rows = rows.len(), "Read bond table");
        Ok(BondList::from_raw_rows(atom_count, &rows)?)
    }

    fn write_to(
        bond_list: &BondList,
        options: &Self::Options,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        writeln!(writer, "# {}{}", ATOM_COUNT_KEY, bond_list.atom_count())?;

        let mut bonds: Vec<Bond> = bond_list.bonds().to_vec();
        if options.sort_bonds {
            bonds.sort_by_key(Bond::pair);
        }

        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        for bond in &bonds {
            if options.include_orders {
                csv_writer.serialize(bond)?;
            } else {
                csv_writer.write_record(&[bond.atom1().to_string(), bond.atom2().to_string()])?;
            }
        }
        csv_writer.flush()?;
        Ok(())
    }
}
