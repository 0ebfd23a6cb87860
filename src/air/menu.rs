//! Menu for the air-quality tool (choices 0-5)

use crate::air::{AirQualityTool, AqiSummary, ChartRenderer};
use crate::cli::config::AirConfig;
use crate::errors::{RecordError, Result};
use crate::repl::{ask_field, DisplayManager, LineSource, Menu};

const ENTRIES: &[(&str, &str)] = &[
    ("1", "Load CSV File"),
    ("2", "Preview Data"),
    ("3", "Filter by City"),
    ("4", "AQI Summary"),
    ("5", "Plot AQI Trend"),
    ("0", "Exit"),
];

/// Air-quality menu choices
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AirCommand {
    Load,
    Preview,
    Filter,
    Summary,
    Plot,
    Exit,
    Invalid { input: String },
}

impl AirCommand {
    pub fn parse(choice: &str) -> Self {
        match choice.trim() {
            "1" => AirCommand::Load,
            "2" => AirCommand::Preview,
            "3" => AirCommand::Filter,
            "4" => AirCommand::Summary,
            "5" => AirCommand::Plot,
            "0" => AirCommand::Exit,
            other => AirCommand::Invalid { input: other.to_string() },
        }
    }
}

/// Summary block; the average always carries a decimal point (`20.0`)
fn summary_lines(summary: &AqiSummary) -> [String; 3] {
    [
        format!("Max AQI: {}", summary.max),
        format!("Min AQI: {}", summary.min),
        format!("Avg AQI: {:?}", summary.avg),
    ]
}

/// Interactive front end over an `AirQualityTool`
pub struct AirQualityMenu {
    tool: AirQualityTool,
    renderer: ChartRenderer,
    preview_count: usize,
    filter_limit: usize,
}

impl AirQualityMenu {
    pub fn new(tool: AirQualityTool, renderer: ChartRenderer, config: &AirConfig) -> Self {
        AirQualityMenu {
            tool,
            renderer,
            preview_count: config.preview_count,
            filter_limit: config.filter_limit,
        }
    }

    pub fn tool(&self) -> &AirQualityTool {
        &self.tool
    }

    fn load(&mut self, input: &mut dyn LineSource, display: &DisplayManager) -> Result<()> {
        let file_name = ask_field(input, "Enter CSV file name (or full path): ")?;
        match self.tool.load_data(file_name.trim()) {
            Ok(path) => {
                display.show_success(&format!("Data loaded successfully from: {}", path.display()));
                Ok(())
            }
            Err(RecordError::FileNotFound { attempts }) => {
                display.show_info("Tried these paths (in order):");
                for attempt in &attempts {
                    display.show_bullet(&attempt.display().to_string());
                }
                display.show_error("File not found.");
                Ok(())
            }
            Err(e) => Err(RecordError::Generic(format!("Unexpected error while loading: {}", e))),
        }
    }

    fn preview(&self, display: &DisplayManager) -> Result<()> {
        let rows = self.tool.preview(self.preview_count)?;
        display.show_section(&format!("Showing first {} records:", self.preview_count));
        for row in rows {
            display.show_info(&row.to_string());
        }
        Ok(())
    }

    fn filter(&self, input: &mut dyn LineSource, display: &DisplayManager) -> Result<()> {
        let city = ask_field(input, "Enter city: ")?;
        let city = city.trim();
        let rows = self.tool.filter_by_city(city, self.filter_limit)?;
        display.show_section(&format!("Records for {}:", city));
        for row in rows {
            display.show_info(&row.to_string());
        }
        Ok(())
    }

    fn summary(&self, display: &DisplayManager) -> Result<()> {
        let summary = self.tool.summary()?;
        display.show_section("AQI Summary:");
        for line in summary_lines(&summary) {
            display.show_info(&line);
        }
        Ok(())
    }

    fn plot(&self, input: &mut dyn LineSource, display: &DisplayManager) -> Result<()> {
        let city = ask_field(input, "Enter city: ")?;
        let path = self.tool.plot_city(city.trim(), &self.renderer)?;
        display.show_success(&format!("Chart saved to: {}", path.display()));
        Ok(())
    }
}

impl Menu for AirQualityMenu {
    type Command = AirCommand;

    fn title(&self) -> &str {
        "Air Quality Data Visualizer"
    }

    fn entries(&self) -> &[(&'static str, &'static str)] {
        ENTRIES
    }

    fn parse(&self, choice: &str) -> AirCommand {
        AirCommand::parse(choice)
    }

    fn execute(
        &mut self,
        command: AirCommand,
        input: &mut dyn LineSource,
        display: &DisplayManager,
    ) -> Result<bool> {
        match command {
            AirCommand::Load => self.load(input, display)?,
            AirCommand::Preview => self.preview(display)?,
            AirCommand::Filter => self.filter(input, display)?,
            AirCommand::Summary => self.summary(display)?,
            AirCommand::Plot => self.plot(input, display)?,
            AirCommand::Exit => {
                display.show_info("Program terminated.");
                return Ok(false);
            }
            AirCommand::Invalid { input } => {
                log::debug!("Rejected menu choice {:?}", input);
                display.show_warning("Invalid choice.");
            }
        }
        Ok(true)
    }
}
