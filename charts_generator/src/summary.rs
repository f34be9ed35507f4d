use std::path::Path;

use polars::prelude::*;

use crate::error::SummaryLoadError;

/// One row of named values, e.g. the 95th percentile response time per configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTable {
    /// Column names, in file order
    pub categories: Vec<String>,
    /// The first data row, one value per category
    pub values: Vec<f64>,
}

impl SummaryTable {
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Load the summary table from a CSV whose header names the categories and whose first data row
/// holds their values. Any further rows are ignored.
pub fn load_summary_table(path: &Path) -> Result<SummaryTable, SummaryLoadError> {
    if !path.is_file() {
        return Err(SummaryLoadError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let frame = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .map_err(|source| SummaryLoadError::Polars {
            path: path.to_path_buf(),
            source,
        })?;

    summary_from_frame(path, &frame)
}

fn summary_from_frame(path: &Path, frame: &DataFrame) -> Result<SummaryTable, SummaryLoadError> {
    if frame.height() == 0 {
        return Err(SummaryLoadError::NoDataRow {
            path: path.to_path_buf(),
        });
    }

    let first_row = frame.head(Some(1));
    let mut categories = Vec::with_capacity(first_row.width());
    let mut values = Vec::with_capacity(first_row.width());
    for column in first_row.get_columns() {
        let Some(value) = first_value(column) else {
            return Err(SummaryLoadError::NotNumeric {
                path: path.to_path_buf(),
                column: column.name().to_string(),
            });
        };

        categories.push(column.name().to_string());
        values.push(value);
    }

    Ok(SummaryTable { categories, values })
}

fn first_value(column: &Column) -> Option<f64> {
    let column = column.strict_cast(&DataType::Float64).ok()?;
    let values = column.f64().ok()?;
    values.get(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn write_summary(dir: &Path, content: &str) -> std::path::PathBuf {
        let path = dir.join(crate::SUMMARY_FILE_NAME);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn header_becomes_categories_and_first_row_values() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = write_summary(
            dir.path(),
            "CTP,native_g1,native_serial\n120.5,98.25,101\n1,2,3\n",
        );

        let table = load_summary_table(&path)?;

        assert_eq!(
            SummaryTable {
                categories: vec![
                    "CTP".to_string(),
                    "native_g1".to_string(),
                    "native_serial".to_string()
                ],
                values: vec![120.5, 98.25, 101.0],
            },
            table
        );
        assert_eq!(3, table.len());
        Ok(())
    }

    #[test]
    fn missing_file_is_reported_as_not_found() {
        let dir = tempfile::tempdir().unwrap();

        let result = load_summary_table(&dir.path().join(crate::SUMMARY_FILE_NAME));

        assert!(matches!(result, Err(SummaryLoadError::NotFound { .. })));
    }

    #[test]
    fn header_without_data_row_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_summary(dir.path(), "CTP,native_g1\n");

        let result = load_summary_table(&path);

        assert!(result.is_err());
    }

    #[test]
    fn text_value_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_summary(dir.path(), "CTP,native_g1\n120.5,fast\n");

        let result = load_summary_table(&path);

        match result {
            Err(SummaryLoadError::NotNumeric { column, .. }) => assert_eq!("native_g1", column),
            other => panic!("Expected a non-numeric error, got {other:?}"),
        }
    }
}
