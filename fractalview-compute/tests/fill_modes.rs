use fractalview_compute::{fill, reset, FillRequest, Fractal, RenderMode};

const WIDTH: u32 = 400;
const HEIGHT: u32 = 300;

fn buffer() -> Vec<u8> {
    let mut pixels = vec![0u8; (WIDTH * HEIGHT * 4) as usize];
    reset(&mut pixels);
    pixels
}

fn request(pixels: &mut [u8], mode: RenderMode) -> FillRequest<'_> {
    FillRequest {
        pixels,
        fractal: Fractal::Mandelbrot,
        mode,
        width: WIDTH,
        height: HEIGHT,
        grid: false,
        noise: false,
        scale: 1.0,
        offset: (0.0, 0.0),
        time_ms: 1000.0,
        frame: 0,
    }
}

#[test]
fn reset_sets_opaque_black() {
    let pixels = buffer();
    for px in pixels.chunks_exact(4) {
        assert_eq!(px, [0, 0, 0, 255]);
    }
}

#[test]
fn frame_mode_writes_every_pixel() {
    // Sentinel pattern distinguishable from anything the painter writes.
    let mut pixels = vec![7u8; (WIDTH * HEIGHT * 4) as usize];

    fill(request(&mut pixels, RenderMode::Frame));

    for (i, px) in pixels.chunks_exact(4).enumerate() {
        assert_ne!(px[3], 7, "pixel {i} was never painted");
        assert_eq!(px[3], 255, "pixel {i} alpha");
    }
}

#[test]
fn frame_mode_matches_known_view() {
    // The default Mandelbrot view: the viewport center maps to the plane
    // origin, which is inside the set and must be black.
    let mut pixels = buffer();
    fill(request(&mut pixels, RenderMode::Frame));

    let center = (((HEIGHT / 2) * WIDTH + WIDTH / 2) * 4) as usize;
    assert_eq!(&pixels[center..center + 4], &[0, 0, 0, 255]);

    // One plane unit right of center, c = 1: escapes on the third
    // iteration, k = 0.02, darkest-exterior band.
    let exterior = (((HEIGHT / 2) * WIDTH + WIDTH / 2 + 100) * 4) as usize;
    assert_eq!(&pixels[exterior..exterior + 4], &[20, 0, 20, 255]);
}

#[test]
fn none_mode_resets_previous_colors() {
    let mut pixels = buffer();
    fill(request(&mut pixels, RenderMode::Frame));
    fill(request(&mut pixels, RenderMode::None));

    for px in pixels.chunks_exact(4) {
        assert_eq!(px, [0, 0, 0, 255]);
    }
}

#[test]
fn pixels_mode_touches_a_bounded_subset() {
    let mut pixels = vec![7u8; (WIDTH * HEIGHT * 4) as usize];
    fill(request(&mut pixels, RenderMode::Pixels));

    let painted = pixels
        .chunks_exact(4)
        .filter(|px| px[3] == 255)
        .count() as u32;

    assert!(painted > 0, "progressive fill painted nothing");
    // At most one sample batch (duplicates can only shrink the count).
    assert!(painted <= WIDTH * HEIGHT / 45);
}

#[test]
fn pixels_mode_is_reproducible_for_a_seed() {
    let mut a = buffer();
    let mut b = buffer();
    fill(request(&mut a, RenderMode::Pixels));
    fill(request(&mut b, RenderMode::Pixels));
    assert_eq!(a, b);
}

#[test]
fn row_sweep_is_sequential_and_deterministic() {
    let mut first = buffer();
    let mut req = request(&mut first, RenderMode::Rows);
    req.frame = 0;
    fill(req);

    // Frame 0 paints rows [0, per_frame); everything below stays black
    // except what the painter wrote there.
    let per_frame = (HEIGHT / 90).max(1);
    for y in 0..per_frame {
        let row = &first[((y * WIDTH * 4) as usize)..(((y + 1) * WIDTH * 4) as usize)];
        assert!(
            row.chunks_exact(4).any(|px| px[0] != 0 || px[2] != 0),
            "row {y} untouched"
        );
    }

    let mut second = buffer();
    let mut req = request(&mut second, RenderMode::Rows);
    req.frame = 0;
    fill(req);
    assert_eq!(first, second);
}

#[test]
fn column_sweep_advances_with_frame_counter() {
    let per_frame = (WIDTH / 90).max(1);

    let mut frame0 = buffer();
    let mut req = request(&mut frame0, RenderMode::Columns);
    req.frame = 0;
    fill(req);

    let mut frame1 = buffer();
    let mut req = request(&mut frame1, RenderMode::Columns);
    req.frame = 1;
    fill(req);

    // Different frames paint different column bands.
    assert_ne!(frame0, frame1);

    // Frame 1 starts at column per_frame.
    let x = per_frame;
    let touched = (0..HEIGHT).any(|y| {
        let i = ((x + y * WIDTH) * 4) as usize;
        frame1[i] != 0 || frame1[i + 2] != 0
    });
    assert!(touched, "column {x} untouched on frame 1");
}

#[test]
fn grid_overlay_blacks_out_grid_lines() {
    let mut pixels = buffer();
    let mut req = request(&mut pixels, RenderMode::Frame);
    req.grid = true;
    fill(req);

    let mut colored_off_grid = false;
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let i = ((x + y * WIDTH) * 4) as usize;
            if x % 3 == 0 || y % 3 == 0 {
                assert_eq!(&pixels[i..i + 3], &[0, 0, 0], "grid pixel ({x}, {y})");
            } else if pixels[i] != 0 || pixels[i + 2] != 0 {
                colored_off_grid = true;
            }
        }
    }
    assert!(colored_off_grid, "overlay blacked out the whole image");
}

#[test]
fn zero_sized_viewport_is_a_no_op() {
    let mut pixels = vec![7u8; 16];
    fill(FillRequest {
        pixels: &mut pixels,
        fractal: Fractal::Mandelbrot,
        mode: RenderMode::Frame,
        width: 0,
        height: 0,
        grid: false,
        noise: false,
        scale: 1.0,
        offset: (0.0, 0.0),
        time_ms: 0.0,
        frame: 0,
    });
    assert_eq!(pixels, vec![7u8; 16]);
}

#[test]
fn undersized_buffer_is_skipped_whole() {
    let mut pixels = vec![7u8; ((WIDTH * HEIGHT * 4) - 4) as usize];
    fill(request(&mut pixels, RenderMode::Frame));
    assert!(pixels.iter().all(|&b| b == 7));
}
