//! recordkit - CLI entry point

use anyhow::Result;
use clap::{CommandFactory, Parser};
use recordkit::{
    air::{AirQualityMenu, AirQualityTool, ChartRenderer, PathResolver},
    cli::{Args, Commands, Config},
    hospital::{HospitalMenu, HospitalRegistry, RecordStore},
    repl::{run_menu, DisplayManager, InputHandler},
};

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbosity().level_filter())
        .parse_default_env()
        .init();

    let Some(command) = args.command.clone() else {
        Args::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = Config::load(args.config.clone())?;
    let display = DisplayManager::new(config.display.color_output);
    let mut input = InputHandler::new()?;

    match command {
        Commands::Air => {
            let tool = AirQualityTool::new(PathResolver::from_current_exe());
            let renderer = ChartRenderer::new(config.chart_dir(), config.air.open_chart);
            let mut menu = AirQualityMenu::new(tool, renderer, &config.air);
            run_menu(&mut menu, &mut input, &display)?;
        }
        Commands::Hospital => {
            let store = RecordStore::new(config.hospital.records_file.clone());
            let mut menu = HospitalMenu::new(HospitalRegistry::new(), store);
            run_menu(&mut menu, &mut input, &display)?;
        }
    }

    Ok(())
}
