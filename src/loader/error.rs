use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read CSV from {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("{path}:{line}: expected {expected} fields, found {found}")]
    FieldCount {
        path: String,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("{path}:{line}: invalid coordinate {value:?}")]
    InvalidCoordinate {
        path: String,
        line: u64,
        value: String,
    },

    #[error("{path}:{line}: centroid name is empty")]
    EmptyName { path: String, line: u64 },

    #[error("{path}: expected {expected} rows, found {found}")]
    TooFewRows {
        path: String,
        expected: usize,
        found: usize,
    },
}
