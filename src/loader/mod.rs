mod error;


pub use error::LoadError;

use crate::clusterer::{Centroid, DataPoint, Point};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// Load exactly `count` centroids from a header-less `name,x,y` CSV file
pub fn load_centroids(path: &Path, count: usize) -> Result<Vec<Centroid>, LoadError> {
    let file = open(path)?;
    let centroids = read_centroids(file, &path.display().to_string(), count)?;
    info!(path = %path.display(), count = centroids.len(), "loaded centroids");
    Ok(centroids)
}

/// Load exactly `count` data points from a header-less `x,y` CSV file
pub fn load_dataset(path: &Path, count: usize) -> Result<Vec<DataPoint>, LoadError> {
    let file = open(path)?;
    let points = read_dataset(file, &path.display().to_string(), count)?;
    info!(path = %path.display(), count = points.len(), "loaded dataset");
    Ok(points)
}

/// Parse centroid rows from any reader; `source` names the input in errors
pub fn read_centroids<R: Read>(
    reader: R,
    source: &str,
    count: usize,
) -> Result<Vec<Centroid>, LoadError> {
    read_rows(reader, source, count, 3, |record, line| {
        let name = &record[0];
        if name.is_empty() {
            return Err(LoadError::EmptyName {
                path: source.to_string(),
                line,
            });
        }

        let x = parse_coordinate(&record[1], source, line)?;
        let y = parse_coordinate(&record[2], source, line)?;
        Ok(Centroid::new(name, Point::new(x, y)))
    })
}

/// Parse data point rows from any reader; `source` names the input in errors
pub fn read_dataset<R: Read>(
    reader: R,
    source: &str,
    count: usize,
) -> Result<Vec<DataPoint>, LoadError> {
    read_rows(reader, source, count, 2, |record, line| {
        let x = parse_coordinate(&record[0], source, line)?;
        let y = parse_coordinate(&record[1], source, line)?;
        Ok(DataPoint::new(Point::new(x, y)))
    })
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Open {
        path: path.display().to_string(),
        source,
    })
}

/// Read `count` records of `width` fields each, converting them with `parse`.
///
/// Rows past `count` are ignored; fewer than `count` rows is an error.
fn read_rows<R, T, F>(
    reader: R,
    source: &str,
    count: usize,
    width: usize,
    mut parse: F,
) -> Result<Vec<T>, LoadError>
where
    R: Read,
    F: FnMut(&StringRecord, u64) -> Result<T, LoadError>,
{
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut rows = Vec::with_capacity(count);
    let mut records = csv_reader.records();

    while rows.len() < count {
        let record = match records.next() {
            Some(record) => record.map_err(|err| LoadError::Csv {
                path: source.to_string(),
                source: err,
            })?,
            None => break,
        };
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.len() != width {
            return Err(LoadError::FieldCount {
                path: source.to_string(),
                line,
                expected: width,
                found: record.len(),
            });
        }

        rows.push(parse(&record, line)?);
    }

    if rows.len() < count {
        return Err(LoadError::TooFewRows {
            path: source.to_string(),
            expected: count,
            found: rows.len(),
        });
    }

    if records.next().is_some() {
        warn!(source, count, "ignoring rows beyond the declared count");
    }

    Ok(rows)
}

fn parse_coordinate(raw: &str, source: &str, line: u64) -> Result<f64, LoadError> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| LoadError::InvalidCoordinate {
            path: source.to_string(),
            line,
            value: raw.to_string(),
        })
}
