use serde::Serialize;
use validator::Validate;

use crate::analyzers::{ColumnStats, SalesAnalyzer, SalesOverview};
use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::models::{Channel, Product, SalesRecord};
use crate::query::{paginate, SalesFilter};
use crate::readers::SalesReader;
use crate::utils::generate_default_export_filename;
use crate::writers::SalesCsvWriter;

#[derive(Serialize)]
struct StatsReport {
    overview: SalesOverview,
    columns: Vec<ColumnStats>,
    product_totals: Vec<(Product, f64)>,
    channel_totals: Vec<(Channel, [f64; 6])>,
    missing_values: Vec<(&'static str, usize)>,
}

impl StatsReport {
    fn for_view(view: &crate::models::FilteredView<'_>) -> Self {
        let analyzer = SalesAnalyzer::new();
        Self {
            overview: analyzer.overview(view),
            columns: analyzer.describe(view),
            product_totals: analyzer.product_totals(view),
            channel_totals: analyzer.channel_totals(view),
            missing_values: analyzer.missing_value_report(view),
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    match cli.command {
        Commands::Show {
            input,
            channels,
            regions,
            page,
            page_size,
        } => {
            let dataset = SalesReader::new().load(&input)?;
            let filter = SalesFilter::from_labels(&channels, &regions)?;
            let view = filter.apply(&dataset);

            if view.is_empty() {
                println!("No records match the selected filters.");
                return Ok(());
            }

            let page = paginate(&view, page, page_size);
            println!(
                "Page {} of {} ({} records total)\n",
                page.page, page.num_pages, page.total_records
            );
            print_rows(&page.rows);
        }

        Commands::Stats {
            input,
            channels,
            regions,
            json,
        } => {
            let dataset = SalesReader::new().load(&input)?;
            let filter = SalesFilter::from_labels(&channels, &regions)?;
            let view = filter.apply(&dataset);

            let report = StatsReport::for_view(&view);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }

            if view.is_empty() {
                println!("No records match the selected filters.");
                return Ok(());
            }

            println!("{}\n", report.overview.summary());

            println!("Sales per product:");
            for (product, total) in &report.product_totals {
                println!("  {:<12} {:>12.2}", product.as_label(), total);
            }

            println!("\nSales per product by channel:");
            for (channel, totals) in &report.channel_totals {
                let cells: Vec<String> = Product::ALL
                    .iter()
                    .zip(totals.iter())
                    .map(|(product, total)| format!("{}={:.2}", product.as_label(), total))
                    .collect();
                println!("  {:<8} {}", channel.as_label(), cells.join(" "));
            }

            println!("\nDescriptive statistics:");
            println!(
                "  {:<12} {:>6} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
                "", "count", "mean", "std", "min", "25%", "50%", "75%", "max"
            );
            for column in &report.columns {
                println!(
                    "  {:<12} {:>6} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>10.2}",
                    column.product.as_label(),
                    column.count,
                    column.mean,
                    column.std,
                    column.min,
                    column.q25,
                    column.median,
                    column.q75,
                    column.max
                );
            }

            if report.missing_values.is_empty() {
                println!("\nNo missing values detected.");
            } else {
                println!("\nMissing values per column:");
                for (column, count) in &report.missing_values {
                    println!("  {:<12} {:>6}", column, count);
                }
            }
        }

        Commands::Export {
            input,
            channels,
            regions,
            output,
        } => {
            let dataset = SalesReader::new().load(&input)?;
            let filter = SalesFilter::from_labels(&channels, &regions)?;
            let view = filter.apply(&dataset);

            let output_path = output.unwrap_or_else(generate_default_export_filename);
            if let Some(parent) = output_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }

            SalesCsvWriter::new().write_view(&view, &output_path)?;
            println!(
                "Exported {} records to {}",
                view.len(),
                output_path.display()
            );
        }

        Commands::Validate { input } => {
            let dataset = SalesReader::new().load(&input)?;
            println!("Loaded {} records", dataset.len());

            let mut violations = 0;
            for (i, record) in dataset.records().iter().enumerate() {
                if let Err(errors) = record.validate() {
                    violations += 1;
                    println!("  {}: {}", dataset.label(i), errors);
                }
            }

            let view = dataset.view();
            let missing = SalesAnalyzer::new().missing_value_report(&view);
            if missing.is_empty() {
                println!("No missing values detected.");
            } else {
                println!("Missing values per column:");
                for (column, count) in &missing {
                    println!("  {:<12} {:>6}", column, count);
                }
            }

            if violations == 0 {
                println!("All records passed validation checks");
            } else {
                println!("Found {} records with out-of-range quantities", violations);
            }
        }
    }

    Ok(())
}

fn print_rows(rows: &[(String, &SalesRecord)]) {
    println!(
        "{:<10} {:<8} {:<8} {:>9} {:>9} {:>9} {:>9} {:>9} {:>11}",
        "Sale", "Channel", "Region", "Robusta", "Arabica", "Espresso", "Lungo", "Latte", "Cappuccino"
    );
    for (label, record) in rows {
        println!(
            "{:<10} {:<8} {:<8} {:>9} {:>9} {:>9} {:>9} {:>9} {:>11}",
            label,
            record.channel.map(|c| c.as_label()).unwrap_or("-"),
            record.region.map(|r| r.as_label()).unwrap_or("-"),
            cell(record.robusta),
            cell(record.arabica),
            cell(record.espresso),
            cell(record.lungo),
            cell(record.latte),
            cell(record.cappuccino),
        );
    }
}

fn cell(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.2}")).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Region, SalesDataset};
    use crate::query::SalesFilter;

    fn sample_dataset() -> SalesDataset {
        SalesDataset::new(vec![
            SalesRecord::new(
                Some(Channel::Store),
                Some(Region::South),
                [Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0), Some(6.0)],
            ),
            SalesRecord::new(
                Some(Channel::Online),
                Some(Region::North),
                [Some(10.0), None, Some(30.0), Some(40.0), Some(50.0), Some(60.0)],
            ),
        ])
    }

    #[test]
    fn test_stats_report_serializes_to_json() {
        let dataset = sample_dataset();
        let view = SalesFilter::all().apply(&dataset);
        let report = StatsReport::for_view(&view);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["overview"]["total_records"], 2);
        assert_eq!(value["overview"]["top_product"], "Cappuccino");
        assert_eq!(value["overview"]["top_region"], "North");
        assert_eq!(value["columns"][0]["product"], "Robusta");
        assert_eq!(value["columns"][0]["count"], 2);
        assert_eq!(value["product_totals"][0][0], "Robusta");
        assert_eq!(value["product_totals"][0][1], 11.0);
        assert_eq!(value["channel_totals"][0][0], "Store");
        assert_eq!(value["channel_totals"][1][1][2], 30.0);
        assert_eq!(value["missing_values"][0][0], "Arabica");
        assert_eq!(value["missing_values"][0][1], 1);
    }

    #[test]
    fn test_stats_report_empty_view_round_trips_with_null_stats() {
        let dataset = SalesDataset::new(vec![]);
        let view = SalesFilter::all().apply(&dataset);
        let report = StatsReport::for_view(&view);

        // NaN statistics must come out as JSON null, not break emission
        let text = serde_json::to_string_pretty(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["overview"]["total_records"], 0);
        assert!(value["overview"]["top_product"].is_null());
        assert!(value["columns"][0]["mean"].is_null());
        assert!(value["channel_totals"].as_array().unwrap().is_empty());
    }
}
