use halftone::config::image::load_config;
use halftone::image::io::{load_rgba_image, save_png, write_json_file};
use halftone::process_frame;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let source = load_rgba_image(&config.input)?;
    let frame = process_frame(&source, &config.params).map_err(|e| e.to_string())?;

    save_png(&frame.surface, &config.output.image)?;
    println!(
        "Saved halftone to {} ({})",
        config.output.image.display(),
        frame.trace.summary()
    );

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &frame.trace)?;
        println!("JSON report written to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: halftone <config.json>".to_string()
}
