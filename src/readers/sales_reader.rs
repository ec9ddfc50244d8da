use crate::error::{AnalyticsError, Result};
use crate::models::{Channel, Product, Region, SalesDataset, SalesRecord};
use crate::utils::constants::COLUMN_COUNT;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Loads the sales dataset from its delimited source file.
///
/// The source has a fixed 8-column schema (channel, region, six product
/// quantities). The header row is discarded; column meanings come from
/// position, not from the header text. A malformed row fails the whole
/// load: the caller gets no partial dataset to query.
pub struct SalesReader {
    has_header: bool,
}

impl SalesReader {
    pub fn new() -> Self {
        Self { has_header: true }
    }

    pub fn with_has_header(has_header: bool) -> Self {
        Self { has_header }
    }

    pub fn load(&self, path: &Path) -> Result<SalesDataset> {
        let file = File::open(path)?;
        self.load_from_reader(file)
    }

    pub fn load_from_reader<R: Read>(&self, reader: R) -> Result<SalesDataset> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(self.has_header)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for (i, row_result) in csv_reader.records().enumerate() {
            let row = i + 1; // 1-based data row, header excluded
            let raw = row_result?;
            records.push(self.parse_row(row, &raw)?);
        }

        info!(rows = records.len(), "sales dataset loaded");
        Ok(SalesDataset::new(records))
    }

    fn parse_row(&self, row: usize, raw: &StringRecord) -> Result<SalesRecord> {
        if raw.len() != COLUMN_COUNT {
            return Err(AnalyticsError::ColumnCount {
                row,
                expected: COLUMN_COUNT,
                found: raw.len(),
            });
        }

        // Empty cells are missing values; present cells must parse.
        let channel_field = raw.get(0).unwrap_or("");
        let channel = if channel_field.is_empty() {
            None
        } else {
            Some(Channel::from_label(channel_field).ok_or_else(|| {
                AnalyticsError::UnknownChannel {
                    row,
                    value: channel_field.to_string(),
                }
            })?)
        };

        let region_field = raw.get(1).unwrap_or("");
        let region = if region_field.is_empty() {
            None
        } else {
            Some(Region::from_label(region_field).ok_or_else(|| {
                AnalyticsError::UnknownRegion {
                    row,
                    value: region_field.to_string(),
                }
            })?)
        };

        let mut quantities = [None; 6];
        for (slot, product) in Product::ALL.iter().enumerate() {
            let field = raw.get(slot + 2).unwrap_or("");
            if field.is_empty() {
                continue;
            }
            let value = field
                .parse::<f64>()
                .map_err(|_| AnalyticsError::NumericField {
                    row,
                    column: product.as_label(),
                    value: field.to_string(),
                })?;
            quantities[slot] = Some(value);
        }

        Ok(SalesRecord::new(channel, region, quantities))
    }
}

impl Default for SalesReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "Channel,Region,Robusta,Arabica,Espresso,Lungo,Latte,Cappuccino";

    #[test]
    fn test_load_valid_file() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "{}", HEADER)?;
        writeln!(temp_file, "Store,South,100,200,30,40,50,60")?;
        writeln!(temp_file, "Online,North,1.5,2.5,3,4,5,6")?;

        let reader = SalesReader::new();
        let dataset = reader.load(temp_file.path())?;

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.get(0).unwrap().channel, Some(Channel::Store));
        assert_eq!(dataset.get(0).unwrap().robusta, Some(100.0));
        assert_eq!(dataset.get(1).unwrap().region, Some(Region::North));
        assert_eq!(dataset.get(1).unwrap().arabica, Some(2.5));
        Ok(())
    }

    #[test]
    fn test_header_row_is_discarded() -> Result<()> {
        let data = format!("{}\nStore,South,1,2,3,4,5,6\n", HEADER);
        let dataset = SalesReader::new().load_from_reader(data.as_bytes())?;
        assert_eq!(dataset.len(), 1);
        Ok(())
    }

    #[test]
    fn test_wrong_column_count_fails_load() {
        let data = format!("{}\nStore,South,1,2,3\n", HEADER);
        let err = SalesReader::new()
            .load_from_reader(data.as_bytes())
            .unwrap_err();
        assert!(matches!(
            err,
            AnalyticsError::ColumnCount {
                row: 1,
                expected: 8,
                found: 5
            }
        ));
    }

    #[test]
    fn test_non_numeric_quantity_fails_load() {
        let data = format!("{}\nStore,South,1,2,lots,4,5,6\n", HEADER);
        let err = SalesReader::new()
            .load_from_reader(data.as_bytes())
            .unwrap_err();
        match err {
            AnalyticsError::NumericField { row, column, value } => {
                assert_eq!(row, 1);
                assert_eq!(column, "Espresso");
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_channel_fails_load() {
        let data = format!("{}\nKiosk,South,1,2,3,4,5,6\n", HEADER);
        let err = SalesReader::new()
            .load_from_reader(data.as_bytes())
            .unwrap_err();
        assert!(matches!(err, AnalyticsError::UnknownChannel { row: 1, .. }));
    }

    #[test]
    fn test_empty_cells_become_missing_values() -> Result<()> {
        let data = format!("{}\nStore,,1,,3,4,5,6\n", HEADER);
        let dataset = SalesReader::new().load_from_reader(data.as_bytes())?;

        let record = dataset.get(0).unwrap();
        assert_eq!(record.region, None);
        assert_eq!(record.arabica, None);
        assert_eq!(record.robusta, Some(1.0));
        Ok(())
    }

    #[test]
    fn test_empty_source_yields_empty_dataset() -> Result<()> {
        let data = format!("{}\n", HEADER);
        let dataset = SalesReader::new().load_from_reader(data.as_bytes())?;
        assert!(dataset.is_empty());
        Ok(())
    }
}
