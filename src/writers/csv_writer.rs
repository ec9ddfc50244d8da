use crate::error::Result;
use crate::models::{FilteredView, Product};
use crate::utils::constants::COLUMNS;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Serializes a filtered view back to the 8-column delimited format.
///
/// Rows come out in view order with their values untouched, missing
/// cells as empty fields, so re-loading an export reproduces the
/// filtered sequence exactly. Row labels are positional and synthetic,
/// so they are not written.
pub struct SalesCsvWriter;

impl SalesCsvWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write_view(&self, view: &FilteredView<'_>, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        self.write_to(view, file)?;
        info!(rows = view.len(), path = %path.display(), "filtered view exported");
        Ok(())
    }

    pub fn write_to<W: Write>(&self, view: &FilteredView<'_>, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(COLUMNS)?;

        for record in view.records() {
            let mut fields: Vec<String> = Vec::with_capacity(COLUMNS.len());
            fields.push(record.channel.map(|c| c.as_label().to_string()).unwrap_or_default());
            fields.push(record.region.map(|r| r.as_label().to_string()).unwrap_or_default());
            for product in Product::ALL {
                fields.push(
                    record
                        .quantity(product)
                        .map(|q| q.to_string())
                        .unwrap_or_default(),
                );
            }
            csv_writer.write_record(&fields)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

impl Default for SalesCsvWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Channel, Region, SalesDataset, SalesRecord};
    use crate::query::SalesFilter;
    use crate::readers::SalesReader;

    fn sample_dataset() -> SalesDataset {
        SalesDataset::new(vec![
            SalesRecord::new(
                Some(Channel::Store),
                Some(Region::South),
                [Some(1.0), Some(2.5), Some(3.0), Some(4.0), Some(5.0), Some(6.0)],
            ),
            SalesRecord::new(
                Some(Channel::Online),
                Some(Region::North),
                [Some(10.0), None, Some(30.0), Some(40.0), Some(50.0), Some(60.0)],
            ),
        ])
    }

    #[test]
    fn test_export_layout() -> Result<()> {
        let dataset = sample_dataset();
        let view = dataset.view();

        let mut buffer = Vec::new();
        SalesCsvWriter::new().write_to(&view, &mut buffer)?;
        let text = String::from_utf8(buffer).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "Channel,Region,Robusta,Arabica,Espresso,Lungo,Latte,Cappuccino"
        );
        assert_eq!(lines[1], "Store,South,1,2.5,3,4,5,6");
        // Missing Arabica cell stays empty
        assert_eq!(lines[2], "Online,North,10,,30,40,50,60");
        Ok(())
    }

    #[test]
    fn test_export_round_trips_through_loader() -> Result<()> {
        let dataset = sample_dataset();
        let filter = SalesFilter::new([Channel::Online], Region::ALL);
        let view = filter.apply(&dataset);

        let mut buffer = Vec::new();
        SalesCsvWriter::new().write_to(&view, &mut buffer)?;

        let reloaded = SalesReader::new().load_from_reader(buffer.as_slice())?;
        assert_eq!(reloaded.len(), view.len());

        let original: Vec<_> = view.records().cloned().collect();
        assert_eq!(reloaded.records(), original.as_slice());
        Ok(())
    }
}
