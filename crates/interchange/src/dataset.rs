#![forbid(unsafe_code)]

use crate::Error;
use kernel::degradation::{Column, Dataset};
use std::{fs::File, io, path::Path};
use tracing::debug;

const CYCLE_HEADERS: &[&str] = &["cycles", "cycle"];
const CAPACITY_HEADERS: &[&str] = &["capacity"];

/// Read a headed CSV dataset.
///
/// Columns are matched by name (`cycles` or `cycle`, and `capacity`,
/// ignoring case and surrounding whitespace); other columns are ignored.
/// Either column may be absent, but not both.
pub fn read_dataset<R: io::Read>(reader: R) -> Result<Dataset, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let find = |names: &[&str]| {
        headers
            .iter()
            .position(|header| names.iter().any(|name| header.eq_ignore_ascii_case(name)))
    };
    let cycle_ix = find(CYCLE_HEADERS);
    let capacity_ix = find(CAPACITY_HEADERS);

    if cycle_ix.is_none() && capacity_ix.is_none() {
        return Err(kernel::Error::InvalidInput(format!(
            "dataset needs a `{}` or `{}` column, found: {}",
            Column::Cycles,
            Column::Capacity,
            headers.iter().collect::<Vec<_>>().join(", ")
        ))
        .into());
    }

    let mut cycles = cycle_ix.map(|_| Vec::new());
    let mut capacities = capacity_ix.map(|_| Vec::new());
    let mut len = 0;

    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let row = row + 1;

        if let (Some(ix), Some(values)) = (cycle_ix, cycles.as_mut()) {
            values.push(parse_cell::<i64>(&record, ix, row, Column::Cycles)?);
        }
        if let (Some(ix), Some(values)) = (capacity_ix, capacities.as_mut()) {
            values.push(parse_cell::<f64>(&record, ix, row, Column::Capacity)?);
        }
        len += 1;
    }

    debug!(
        rows = len,
        has_cycles = cycle_ix.is_some(),
        has_capacity = capacity_ix.is_some(),
        "dataset read"
    );
    Ok(Dataset::new(len, cycles, capacities)?)
}

pub fn read_dataset_file(path: impl AsRef<Path>) -> Result<Dataset, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => Error::InvalidPath(path.to_owned()),
        _ => Error::Io(err),
    })?;
    read_dataset(io::BufReader::new(file))
}

fn parse_cell<T: std::str::FromStr>(
    record: &csv::StringRecord,
    ix: usize,
    row: usize,
    column: Column,
) -> Result<T, Error> {
    let cell = record.get(ix).unwrap_or_default();
    cell.parse().map_err(|_| {
        kernel::Error::InvalidInput(format!(
            "row {row}: `{column}` value `{cell}` is not a number"
        ))
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::degradation::ColumnDefaults;
    use pretty_assertions::assert_eq;

    #[test]
    fn reads_both_columns_in_any_order() {
        let csv = "capacity,note,Cycles\n0.98,first,1\n0.97,,2\n";
        let dataset = read_dataset(csv.as_bytes()).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.cycles().unwrap(), &[1, 2]);
        assert_eq!(dataset.capacities().unwrap(), &[0.98, 0.97]);
    }

    #[test]
    fn missing_cycles_column_is_left_for_defaulting() {
        let csv = "capacity\n0.9\n0.8\n";
        let dataset = read_dataset(csv.as_bytes()).unwrap();

        assert!(dataset.cycles().is_err());
        let observations = dataset.resolve(ColumnDefaults::default()).unwrap();
        assert_eq!(observations[1].cycle, 2);
    }

    #[test]
    fn rejects_unrelated_columns() {
        let err = read_dataset("voltage,current\n3.7,1.0\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Model(kernel::Error::InvalidInput(_))));
    }

    #[test]
    fn rejects_non_numeric_cell() {
        let err = read_dataset("cycle,capacity\n1,0.9\ntwo,0.8\n".as_bytes()).unwrap_err();
        match err {
            Error::Model(kernel::Error::InvalidInput(msg)) => {
                assert!(msg.starts_with("row 2"), "{msg}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn header_only_file_is_empty() {
        let dataset = read_dataset("cycles,capacity\n".as_bytes()).unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn missing_file_is_invalid_path() {
        let err = read_dataset_file("/no/such/dataset.csv").unwrap_err();
        assert!(matches!(err, Error::InvalidPath(_)));
    }
}
