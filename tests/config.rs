//! Loading run configuration from files.

use std::io::Write;

use approx::assert_relative_eq;
use longview::config::{ParamOverrides, RunConfig};
use longview::{LongviewError, Projector};
use tempfile::NamedTempFile;

fn toml_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_params_file_with_overrides() {
    let params = toml_file("co2EmissionRate = 10\nrenewableAdoption = 90\n");
    let overrides = ParamOverrides {
        renewable_adoption: Some(40),
        ..Default::default()
    };

    let config = RunConfig::load(Some(params.path()), None, &overrides).unwrap();

    assert_eq!(config.params.co2_emission_rate, 10);
    assert_eq!(config.params.renewable_adoption, 40);
    assert_eq!(config.params.population_growth, 50);
}

#[test]
fn test_coefficients_file() {
    let coefficients = toml_file("[warming]\nsensitivity = 2.5\n");
    let config =
        RunConfig::load(None, Some(coefficients.path()), &ParamOverrides::default()).unwrap();

    assert_relative_eq!(config.coefficients.warming.sensitivity, 2.5);
    let projector = Projector::from_coefficients(config.coefficients);
    assert_relative_eq!(projector.coefficients().warming.sensitivity, 2.5);
}

#[test]
fn test_out_of_range_file_is_rejected() {
    let params = toml_file("geoEngineering = 101\n");
    let result = RunConfig::load(Some(params.path()), None, &ParamOverrides::default());
    assert!(matches!(
        result,
        Err(LongviewError::ParameterOutOfRange {
            name: "geoEngineering",
            value: 101
        })
    ));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    let result = RunConfig::load(Some(&missing), None, &ParamOverrides::default());
    assert!(matches!(result, Err(LongviewError::Io(_))));
}

#[test]
fn test_malformed_coefficients() {
    let coefficients = toml_file("[carbon\nfloor_ppm = 1\n");
    let result = RunConfig::load(None, Some(coefficients.path()), &ParamOverrides::default());
    assert!(matches!(result, Err(LongviewError::Config(_))));
}

#[test]
fn test_zero_window_in_coefficients_file_is_rejected() {
    let coefficients = toml_file("[warming]\ngeo_ramp_years = 0.0\n");
    let result = RunConfig::load(None, Some(coefficients.path()), &ParamOverrides::default());
    assert!(matches!(result, Err(LongviewError::Config(_))));
}
