use clap::Parser;
use std::error::Error;
use tandem::app::App;
use tandem::cli::Args;
use tandem::engine::{Config, SystemClock};
use tandem::input::generator_for;
use tandem::logging::setup_logging;
use tandem::reading::TextStream;
use tandem::ui::TuiManager;
use tracing::info;

fn load_config(args: &Args) -> Result<Config, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    args.apply(&mut config);
    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let log_target = setup_logging(&args.log_level, args.log_file.as_deref())?;
    let config = load_config(&args)?;

    let sides = [
        ("left", config.left_title(), &config.left),
        ("right", config.right_title(), &config.right),
    ];
    let mut streams = Vec::with_capacity(sides.len());
    for (side, title, source) in sides {
        let mut generator = generator_for(side, source)?;

        println!("Running {}...", title);
        let generation = generator.generate(config.target_chars)?;
        println!(
            "  Done in {:.2}s ({} chars)",
            generation.elapsed,
            generation.text.chars().count()
        );
        for line in &generation.diagnostics {
            info!(side, "{}", line);
        }

        streams.push(TextStream::new(title, &generation.text, generation.elapsed));
    }

    let streams: [TextStream; 2] = streams
        .try_into()
        .map_err(|_| "expected exactly two streams")?;
    let mut app = App::new(streams, config.animation.clone(), SystemClock::new());
    // Dropped after the TUI, so stderr logging resumes once the screen is restored
    let _quiet = log_target.quiet();
    let mut tui = TuiManager::new()?;

    tui.run_event_loop(&mut app)?;

    Ok(())
}
