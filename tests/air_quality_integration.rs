//! Integration tests for the air-quality tool
//!
//! Drives the public API and the menu with scripted input; no terminal needed.

use recordkit::{
    air::{AirQualityMenu, AirQualityTool, ChartRenderer, PathResolver},
    cli::Config,
    repl::{run_menu, DisplayManager, ScriptedInput},
    RecordError,
};
use tempfile::TempDir;

const SAMPLE: &str = "City,Date,AQI\n\
Delhi,2024-01-01,10\n\
Mumbai,2024-01-01,20\n\
Delhi,2024-01-02,\n\
Delhi,2024-01-03,30\n";

fn write_csv(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_install_dir_fallback_is_used() {
    let install = TempDir::new().unwrap();
    let name = "integration_install_only_aqi.csv";
    let expected = write_csv(&install, name, SAMPLE);

    let mut tool = AirQualityTool::new(PathResolver::new(Some(install.path().to_path_buf())));
    let resolved = tool.load_data(name).unwrap();

    assert_eq!(resolved, expected);
    assert_eq!(tool.dataset().source(), Some(expected.as_path()));
}

#[test]
fn test_load_then_preview_three_rows() {
    let temp = TempDir::new().unwrap();
    let path = write_csv(&temp, "three.csv", "City,Date,AQI\nA,d1,1\nB,d2,2\nC,d3,3\n");

    let mut tool = AirQualityTool::new(PathResolver::new(None));
    tool.load_data(path.to_str().unwrap()).unwrap();

    let rows = tool.preview(5).unwrap();
    let cities: Vec<&str> = rows.iter().filter_map(|r| r.get_field("City")).collect();
    assert_eq!(cities, vec!["A", "B", "C"]);
}

#[test]
fn test_summary_ignores_blank_aqi() {
    let temp = TempDir::new().unwrap();
    let path = write_csv(&temp, "aqi.csv", SAMPLE);

    let mut tool = AirQualityTool::new(PathResolver::new(None));
    tool.load_data(path.to_str().unwrap()).unwrap();

    let summary = tool.summary().unwrap();
    assert_eq!(summary.max, 30);
    assert_eq!(summary.min, 10);
    assert_eq!(summary.avg, 20.0);
}

#[test]
fn test_filter_is_case_insensitive() {
    let temp = TempDir::new().unwrap();
    let path = write_csv(&temp, "aqi.csv", SAMPLE);

    let mut tool = AirQualityTool::new(PathResolver::new(None));
    tool.load_data(path.to_str().unwrap()).unwrap();

    let rows = tool.filter_by_city("delhi", 10).unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.get_field("City") == Some("Delhi")));
}

#[test]
fn test_plot_requires_integer_aqi_for_city() {
    let temp = TempDir::new().unwrap();
    let path = write_csv(&temp, "aqi.csv", SAMPLE);

    let mut tool = AirQualityTool::new(PathResolver::new(None));
    tool.load_data(path.to_str().unwrap()).unwrap();

    let renderer = ChartRenderer::new(temp.path().join("charts"), false);
    assert!(matches!(
        tool.plot_city("Delhi", &renderer),
        Err(RecordError::InvalidAqi { .. })
    ));

    let chart = tool.plot_city("mumbai", &renderer).unwrap();
    assert!(chart.exists());
}

#[test]
fn test_menu_session() {
    let temp = TempDir::new().unwrap();
    let path = write_csv(&temp, "aqi.csv", SAMPLE);
    let path_str = path.to_str().unwrap().to_string();

    let mut config = Config::default();
    config.air.open_chart = false;
    config.air.chart_dir = Some(temp.path().join("charts"));

    let renderer = ChartRenderer::new(config.chart_dir(), config.air.open_chart);
    let tool = AirQualityTool::new(PathResolver::new(None));
    let mut menu = AirQualityMenu::new(tool, renderer, &config.air);

    let mut input = ScriptedInput::new(vec![
        "2".to_string(),          // preview before load: reported, loop continues
        "1".to_string(),
        "missing.csv".to_string(), // not found: reported
        "1".to_string(),
        path_str,
        "2".to_string(),
        "3".to_string(),
        "DELHI".to_string(),
        "4".to_string(),
        "5".to_string(),
        "Mumbai".to_string(),
        "7".to_string(),          // invalid choice
        "0".to_string(),
        "2".to_string(),          // never read
    ]);

    run_menu(&mut menu, &mut input, &DisplayManager::new(false)).unwrap();

    assert_eq!(input.remaining(), 1);
    assert_eq!(menu.tool().dataset().len(), 4);
    assert!(temp.path().join("charts").join("aqi_trend_mumbai.svg").exists());
}
