use halftone::config::frames::load_config;
use halftone::image::io::write_json_file;
use halftone::playback::{run_frames, ImageSequence, PngSequenceSink};
use halftone::FrameProcessor;
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
    config.params.validate().map_err(|e| e.to_string())?;

    let mut source = ImageSequence::open(&config.input_dir)?;
    let mut sink = PngSequenceSink::new(&config.output_dir, config.frame_prefix.clone());
    let mut processor = FrameProcessor::new(config.params);

    let summary = run_frames(&mut processor, &mut source, &mut sink, config.max_frames)?;
    println!(
        "Rendered {}/{} frames into {} ({} rejected)",
        summary.frames_rendered,
        summary.frames_read,
        config.output_dir.display(),
        summary.frames_rejected
    );

    if let Some(path) = &config.summary_json {
        write_json_file(path, &summary)?;
        println!("Summary written to {}", path.display());
    }
    Ok(())
}

fn usage() -> String {
    "Usage: halftone_frames <config.json>".to_string()
}
