//! CSV export of temperature fields
//!
//! Plain `std::io` writing; the format is simple enough that a dedicated
//! CSV crate would only add a dependency. Layout for a full export:
//!
//! ```text
//! time_s,T_inlet,T_node_1,...,T_node_n
//! 0.000000,55.000000,20.500000,...
//! ```
//!
//! Delimiter, float precision and the header row are configurable via
//! [`CsvConfig`], including a semicolon/comma "European" preset.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use super::{sample_indices, Exporter};
use crate::physics::TemperatureField;

// =================================================================================================
// Error Type
// =================================================================================================

/// Errors that can occur during CSV export
#[derive(Debug)]
pub enum CsvError {
    /// Underlying I/O failure (file creation, write, flush)
    Io(io::Error),

    /// The field has no time steps to export
    NoData,
}

impl fmt::Display for CsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvError::Io(err) => write!(f, "CSV I/O error: {}", err),
            CsvError::NoData => write!(f, "temperature field contains no data"),
        }
    }
}

impl std::error::Error for CsvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CsvError::Io(err) => Some(err),
            CsvError::NoData => None,
        }
    }
}

impl From<io::Error> for CsvError {
    fn from(err: io::Error) -> Self {
        CsvError::Io(err)
    }
}

// =================================================================================================
// Configuration
// =================================================================================================

/// Formatting options for CSV output
#[derive(Clone, Debug)]
pub struct CsvConfig {
    /// Field delimiter (default: `,`)
    pub delimiter: char,

    /// Decimal places for every numeric column (default: 6)
    pub precision: usize,

    /// Write a header row (default: true)
    pub headers: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            precision: 6,
            headers: true,
        }
    }
}

impl CsvConfig {
    /// Semicolon-delimited output for locales where `,` is the decimal
    /// separator
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            ..Default::default()
        }
    }

    /// Twelve decimal places, for regression baselines
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the numeric precision
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Enable or disable the header row
    pub fn with_headers(mut self, headers: bool) -> Self {
        self.headers = headers;
        self
    }
}

// =================================================================================================
// CSV Exporter
// =================================================================================================

/// Exports temperature fields to CSV files
///
/// # Example
///
/// ```rust,ignore
/// use radiator_rs::output::export::{CsvConfig, CsvExporter, Exporter};
///
/// let exporter = CsvExporter::with_config(CsvConfig::european());
/// exporter.export_field(&field, "run.csv", Some(500))?;
/// ```
#[derive(Clone, Debug, Default)]
pub struct CsvExporter {
    config: CsvConfig,
}

impl CsvExporter {
    /// Create an exporter with default formatting
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an exporter with custom formatting
    pub fn with_config(config: CsvConfig) -> Self {
        Self { config }
    }

    fn write_rows<W: Write>(
        &self,
        writer: &mut W,
        field: &TemperatureField,
        rows: &[usize],
        indices: &[usize],
    ) -> Result<(), CsvError> {
        let times = field.time_points();
        for &step in indices {
            write!(
                writer,
                "{:.prec$}",
                times[step],
                prec = self.config.precision
            )?;
            for &row in rows {
                write!(
                    writer,
                    "{}{:.prec$}",
                    self.config.delimiter,
                    field.temperature(row, step),
                    prec = self.config.precision
                )?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }
}

impl Exporter for CsvExporter {
    type Error = CsvError;

    fn export_field(
        &self,
        field: &TemperatureField,
        path: &str,
        n_points: Option<usize>,
    ) -> Result<(), Self::Error> {
        if field.steps() == 0 {
            return Err(CsvError::NoData);
        }

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        if self.config.headers {
            write!(writer, "time_s{}T_inlet", self.config.delimiter)?;
            for node in 1..=field.nodes() {
                write!(writer, "{}T_node_{}", self.config.delimiter, node)?;
            }
            writeln!(writer)?;
        }

        let rows: Vec<usize> = (0..=field.nodes()).collect();
        let indices = sample_indices(field.steps(), n_points);
        self.write_rows(&mut writer, field, &rows, &indices)?;

        writer.flush()?;
        Ok(())
    }

    fn export_outlet(
        &self,
        field: &TemperatureField,
        path: &str,
        n_points: Option<usize>,
    ) -> Result<(), Self::Error> {
        if field.steps() == 0 {
            return Err(CsvError::NoData);
        }

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        if self.config.headers {
            writeln!(writer, "time_s{}T_outlet", self.config.delimiter)?;
        }

        let rows = vec![field.nodes()];
        let indices = sample_indices(field.steps(), n_points);
        self.write_rows(&mut writer, field, &rows, &indices)?;

        writer.flush()?;
        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
