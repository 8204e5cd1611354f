mod common;

use common::synthetic_image::{checkerboard_rgba, horizontal_ramp, solid_rgba};
use halftone::image::ImageView;
use halftone::{
    prepare_frame, process_frame, process_frame_with_rng, DitherMode, FrameProcessor,
    HalftoneError, ParameterSet, PixelBuffer,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn neutral_params_produce_rec601_gray() {
    init_logging();
    let source = solid_rgba(4, 4, [100, 150, 200]);
    let tone = ParameterSet::default().tone().unwrap();
    let gray = tone.adjusted_gray(100, 150, 200);
    assert!((gray - 141.65).abs() < 1e-9, "gray={gray}");

    let prepared = prepare_frame(&source, &ParameterSet::default(), &mut StdRng::seed_from_u64(0))
        .unwrap();
    assert!(prepared
        .buffer
        .pixels()
        .all(|px| px == [142, 142, 142, 255]));
}

#[test]
fn full_brightness_draws_no_dots() {
    init_logging();
    let source = PixelBuffer::gray(8, 8, 128);
    let params = ParameterSet::default()
        .with_grid_size(2)
        .with_brightness(255)
        .with_dither(DitherMode::FloydSteinberg);
    let frame = process_frame(&source, &params).unwrap();
    assert!(frame.dots.is_empty(), "dots={:?}", frame.dots);
    assert!(frame.surface.pixels().all(|px| px == [255, 255, 255, 255]));
}

#[test]
fn black_input_draws_half_cell_radius_everywhere() {
    init_logging();
    let source = PixelBuffer::gray(8, 8, 0);
    let params = ParameterSet::default().with_grid_size(2);
    let frame = process_frame(&source, &params).unwrap();
    assert_eq!(frame.dots.len(), 16);
    assert!(frame.dots.iter().all(|d| d.radius == 1.0));
    assert_eq!(frame.trace.dot_count, 16);
    assert_eq!(frame.trace.input.cell_count(), 16);
}

#[test]
fn mid_gray_without_brightness_still_draws() {
    let source = PixelBuffer::gray(8, 8, 128);
    let frame = process_frame(&source, &ParameterSet::default().with_grid_size(2)).unwrap();
    assert_eq!(frame.dots.len(), 16);
    let expected = 1.0 - 128.0 / 255.0;
    assert!(frame.dots.iter().all(|d| (d.radius - expected).abs() < 1e-6));
}

#[test]
fn invalid_parameters_are_rejected() {
    let source = PixelBuffer::gray(4, 4, 10);
    assert_eq!(
        process_frame(&source, &ParameterSet::default().with_gamma(0.0)).unwrap_err(),
        HalftoneError::InvalidGamma(0.0)
    );
    assert_eq!(
        process_frame(&source, &ParameterSet::default().with_grid_size(0)).unwrap_err(),
        HalftoneError::InvalidGridSize(0)
    );
    assert_eq!(
        process_frame(&source, &ParameterSet::default().with_grid_size(-4)).unwrap_err(),
        HalftoneError::InvalidGridSize(-4)
    );
}

#[test]
fn huge_smoothing_sigma_is_rejected_before_processing() {
    let source = PixelBuffer::gray(4, 4, 10);
    for sigma in [1.0e4f32, 1.0e30, f32::MAX] {
        let params = ParameterSet::default().with_smoothing(sigma);
        assert_eq!(
            process_frame(&source, &params).unwrap_err(),
            HalftoneError::InvalidSmoothing(sigma)
        );
    }
}

#[test]
fn zero_sized_input_is_a_no_op() {
    let source = PixelBuffer::from_raw(0, 0, Vec::new()).unwrap();
    let params = ParameterSet::default()
        .with_smoothing(2.0)
        .with_dither(DitherMode::FloydSteinberg);
    let frame = process_frame(&source, &params).unwrap();
    assert!(frame.surface.is_empty());
    assert!(frame.dots.is_empty());
}

#[test]
fn dithered_frames_only_contain_black_and_white_before_rendering() {
    let source = checkerboard_rgba(40, 30, 5);
    for mode in DitherMode::ALL.into_iter().filter(|m| *m != DitherMode::None) {
        let params = ParameterSet::default()
            .with_smoothing(1.5)
            .with_contrast(30)
            .with_dither(mode);
        let prepared = prepare_frame(&source, &params, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(prepared.kernel_size, Some(9));
        assert!(prepared.buffer.is_grayscale());
        assert!(
            prepared.buffer.pixels().all(|px| px[0] == 0 || px[0] == 255),
            "{mode} left intermediate values"
        );
    }
}

#[test]
fn ordered_pipeline_is_deterministic() {
    let source = horizontal_ramp(64, 16);
    let params = ParameterSet::default()
        .with_grid_size(4)
        .with_dither(DitherMode::Ordered);
    let a = process_frame(&source, &params).unwrap();
    let b = process_frame(&source, &params).unwrap();
    assert_eq!(a.surface, b.surface);
    assert_eq!(a.dots, b.dots);
}

#[test]
fn darker_regions_get_bigger_dots() {
    let source = horizontal_ramp(80, 10);
    let frame = process_frame(&source, &ParameterSet::default().with_grid_size(10)).unwrap();
    let radii: Vec<f32> = frame.dots.iter().map(|d| d.radius).collect();
    assert!(radii.windows(2).all(|w| w[0] >= w[1]), "radii={radii:?}");
    assert!(radii.first().unwrap() > radii.last().unwrap());
}

#[test]
fn surface_is_opaque_and_grayscale() {
    let mut source = checkerboard_rgba(25, 25, 4);
    source.set_pixel(0, 0, [10, 10, 10, 0]);
    let params = ParameterSet::default()
        .with_grid_size(5)
        .with_dither(DitherMode::Noise);
    let frame = process_frame_with_rng(&source, &params, &mut StdRng::seed_from_u64(2)).unwrap();
    assert!(frame.surface.is_grayscale());
    assert!(frame.surface.pixels().all(|px| px[3] == 255));
}

#[test]
fn trace_serializes_to_camel_case_json() {
    let source = solid_rgba(10, 10, [50, 60, 70]);
    let params = ParameterSet::default().with_grid_size(5).with_smoothing(0.5);
    let frame = process_frame(&source, &params).unwrap();
    let json = serde_json::to_value(&frame.trace).unwrap();
    assert_eq!(json["input"]["gridColumns"], 2);
    assert_eq!(json["kernelSize"], 5);
    assert_eq!(json["params"]["smoothingSigma"], 0.5);
    assert_eq!(json["ditherMode"], "None");
    let labels: Vec<&str> = json["timings"]["stages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, ["tone", "smooth", "dither", "render"]);
}

#[test]
fn processor_snapshots_params_per_frame() {
    let source = PixelBuffer::gray(6, 6, 0);
    let mut processor = FrameProcessor::new(ParameterSet::default().with_grid_size(3));
    assert_eq!(processor.process(&source).unwrap().dots.len(), 4);

    processor.set_params(ParameterSet::default().with_grid_size(2));
    assert_eq!(processor.process(&source).unwrap().dots.len(), 9);
    assert_eq!(processor.last_frame().unwrap().trace.params.grid_size, 2);
}
