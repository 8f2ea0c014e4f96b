//! Signal window persistence
//!
//! Windows are stored as CSV text, one sample per line, columns
//! `acc_x,acc_y,acc_z,gyro_x,gyro_y,gyro_z`, each line ending in `\n`. Values are
//! written with a fixed number of decimals, so a stored window reads back with
//! a small rounding error.

use core::fmt::Write;

use crate::capture::{CHANNEL_COUNT, Channel, SignalWindow};

/// Longest accepted field, excluding the delimiter
pub const MAX_FIELD_LEN: usize = 18;

/// Capacity of a generated file name
pub const NAME_CAPACITY: usize = 20;

/// Storage and parsing failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// The medium or file could not be opened, read or written
    Unavailable,
    /// A field is longer than [`MAX_FIELD_LEN`]
    FieldTooLong,
    /// A field is not a number
    InvalidNumber,
    /// More rows than the window holds
    TooManyRows,
    /// A row has fewer than six columns
    MissingColumns,
    /// Anything else malformed: extra columns, no rows, or a formatter failure
    Format,
}

impl From<core::fmt::Error> for StorageError {
    fn from(_: core::fmt::Error) -> Self {
        Self::Format
    }
}

/// CSV number formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CsvFormat {
    /// Digits after the decimal point
    pub decimals: usize,
}

impl Default for CsvFormat {
    fn default() -> Self {
        Self { decimals: 4 }
    }
}

/// Name of the `n`th stored fall, `FALL<n>.csv`
#[must_use]
pub fn fall_name(n: u32) -> heapless::String<NAME_CAPACITY> {
    let mut name = heapless::String::new();
    // "FALL" + 10 digits + ".csv" always fits
    let _ = write!(name, "FALL{n}.csv");
    name
}

/// Write a window as CSV text
///
/// # Errors
///
/// Returns [`StorageError::Format`] if the writer runs out of space.
pub fn encode_window<const N: usize, W: Write>(
    window: &SignalWindow<N>,
    out: &mut W,
    format: CsvFormat,
) -> Result<(), StorageError> {
    for i in 0..window.len() {
        for (column, channel) in Channel::ALL.into_iter().enumerate() {
            if column > 0 {
                out.write_char(',')?;
            }
            let value = window.channel(channel)[i];
            write!(out, "{value:.prec$}", prec = format.decimals)?;
        }
        out.write_char('\n')?;
    }
    Ok(())
}

/// Parse CSV text written by [`encode_window`]
///
/// Carriage returns and blank lines are ignored.
///
/// # Errors
///
/// Returns the first malformed field or row.
pub fn decode_window<const N: usize>(text: &str) -> Result<SignalWindow<N>, StorageError> {
    let mut channels = [[0.0f32; N]; CHANNEL_COUNT];
    let mut rows = 0;

    for line in text.split('\n') {
        let line = line.trim_matches('\r');
        if line.is_empty() {
            continue;
        }
        if rows == N {
            return Err(StorageError::TooManyRows);
        }

        let mut fields = line.split(',');
        for channel in &mut channels {
            let field = fields.next().ok_or(StorageError::MissingColumns)?;
            channel[rows] = parse_field(field)?;
        }
        if fields.next().is_some() {
            return Err(StorageError::Format);
        }
        rows += 1;
    }

    SignalWindow::from_channels(channels, rows).ok_or(StorageError::Format)
}

fn parse_field(field: &str) -> Result<f32, StorageError> {
    let field = field.trim();
    if field.len() > MAX_FIELD_LEN {
        return Err(StorageError::FieldTooLong);
    }
    field.parse().map_err(|_| StorageError::InvalidNumber)
}

/// Named window storage, such as an SD card
pub trait SignalStore {
    /// Persist a window under `name`
    ///
    /// With `overwrite` any existing file of that name is removed first; otherwise
    /// rows are appended to it.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] if the medium cannot be written.
    fn write<const N: usize>(
        &mut self,
        name: &str,
        window: &SignalWindow<N>,
        overwrite: bool,
    ) -> Result<(), StorageError>;

    /// Load the window stored under `name`
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] if the file cannot be read, or a
    /// parse error.
    fn read<const N: usize>(&mut self, name: &str) -> Result<SignalWindow<N>, StorageError>;
}

#[cfg(feature = "std")]
pub use file_store::FileStore;

#[cfg(feature = "std")]
mod file_store {
    use std::fs::{self, OpenOptions};
    use std::io::Write as _;
    use std::path::PathBuf;
    use std::string::String;

    use super::{CsvFormat, SignalStore, StorageError, decode_window, encode_window};
    use crate::capture::SignalWindow;

    /// [`SignalStore`] writing one file per window into a directory
    #[derive(Debug, Clone)]
    pub struct FileStore {
        root: PathBuf,
        format: CsvFormat,
    }

    impl FileStore {
        /// Store files under `root`, which must exist
        pub fn new(root: impl Into<PathBuf>) -> Self {
            Self {
                root: root.into(),
                format: CsvFormat::default(),
            }
        }

        /// Use a different number format
        #[must_use]
        pub const fn with_format(mut self, format: CsvFormat) -> Self {
            self.format = format;
            self
        }

        /// Path of the file stored under `name`
        #[must_use]
        pub fn path(&self, name: &str) -> PathBuf {
            self.root.join(name)
        }
    }

    impl SignalStore for FileStore {
        fn write<const N: usize>(
            &mut self,
            name: &str,
            window: &SignalWindow<N>,
            overwrite: bool,
        ) -> Result<(), StorageError> {
            let path = self.path(name);
            if overwrite && path.exists() {
                fs::remove_file(&path).map_err(|_| StorageError::Unavailable)?;
            }

            let mut text = String::new();
            encode_window(window, &mut text, self.format)?;

            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|_| StorageError::Unavailable)?;
            file.write_all(text.as_bytes())
                .map_err(|_| StorageError::Unavailable)
        }

        fn read<const N: usize>(&mut self, name: &str) -> Result<SignalWindow<N>, StorageError> {
            let text =
                fs::read_to_string(self.path(name)).map_err(|_| StorageError::Unavailable)?;
            decode_window(&text)
        }
    }

}
