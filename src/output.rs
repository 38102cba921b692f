//! Writers for projection output.

use std::io::Write;

use clap::ValueEnum;
use longview_core::errors::{LongviewError, LongviewResult};
use longview_core::standard_variables::Indicator;
use longview_core::year_data::YearData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Array of year records with camelCase keys
    #[default]
    Json,
    /// One row per year, one column per indicator
    Csv,
}

/// Write entries in the requested format.
pub fn write_entries<W: Write>(
    writer: &mut W,
    entries: &[&YearData],
    format: OutputFormat,
) -> LongviewResult<()> {
    match format {
        OutputFormat::Json => write_json(writer, entries),
        OutputFormat::Csv => write_csv(writer, entries),
    }
}

pub fn write_json<W: Write>(writer: &mut W, entries: &[&YearData]) -> LongviewResult<()> {
    serde_json::to_writer_pretty(&mut *writer, entries)
        .map_err(|e| LongviewError::Error(e.to_string()))?;
    writeln!(writer)?;
    Ok(())
}

/// CSV header: year, era, every indicator key, then the event label.
pub fn csv_header() -> String {
    let mut columns = vec!["year", "era"];
    columns.extend(Indicator::ALL.iter().map(|i| i.definition().key));
    columns.push("majorEvent");
    columns.join(",")
}

/// Values are printed at the storage precision of each indicator.
pub fn csv_row(entry: &YearData) -> String {
    let mut fields = vec![entry.year.to_string(), entry.era.tag().to_string()];
    for indicator in Indicator::ALL {
        let decimals = indicator.definition().decimals.max(0) as usize;
        fields.push(format!("{:.*}", decimals, entry.value(indicator)));
    }
    fields.push(entry.major_event.as_deref().map(escape_csv).unwrap_or_default());
    fields.join(",")
}

pub fn write_csv<W: Write>(writer: &mut W, entries: &[&YearData]) -> LongviewResult<()> {
    writeln!(writer, "{}", csv_header())?;
    for entry in entries {
        writeln!(writer, "{}", csv_row(entry))?;
    }
    Ok(())
}

fn escape_csv(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use longview_core::era::Era;

    fn sample() -> YearData {
        YearData {
            year: 2025,
            temperature: 1.2,
            gdp: 105.0,
            population: 8.1,
            biodiversity: 72.0,
            earth_health_score: 78.0,
            sea_level: 0.0,
            conflict_index: 17.0,
            ice_coverage_percent: 12.0,
            atmospheric_co2_ppm: 421.0,
            civilization_level: 50.0,
            era: Era::Anthropocene,
            era_label: "Anthropocene".to_string(),
            major_event: None,
        }
    }

    #[test]
    fn test_csv_header() {
        assert_eq!(
            csv_header(),
            "year,era,temperature,gdp,population,biodiversity,earthHealthScore,seaLevel,\
             conflictIndex,iceCoveragePercent,atmosphericCO2ppm,civilizationLevel,majorEvent"
        );
    }

    #[test]
    fn test_csv_row_precision() {
        assert_eq!(
            csv_row(&sample()),
            "2025,anthropocene,1.20,105.0,8.10,72,78,0.00,17,12.0,421,50,"
        );
    }

    #[test]
    fn test_csv_escaping() {
        assert_eq!(escape_csv("Plain"), "Plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_json_is_array() {
        let data = sample();
        let mut buffer = Vec::new();
        write_entries(&mut buffer, &[&data], OutputFormat::Json).unwrap();
        let parsed: Vec<YearData> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, vec![data]);
    }
}
