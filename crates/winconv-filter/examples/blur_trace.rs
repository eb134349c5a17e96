use winconv_filter::{convolve_traced, Kernel2d, Trace};
use winconv_image::{Image, ImageSize};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // a small bright square on a dark background
    let size = ImageSize {
        width: 16,
        height: 16,
    };
    let mut data = vec![0u8; 16 * 16];
    for row in 4..12 {
        for col in 4..12 {
            data[row * 16 + col] = 200;
        }
    }
    let img = Image::<u8, 1>::new(size, data)?;

    let kernel = Kernel2d::box_filter(3)?;
    let trace: Trace<u8, 1> = convolve_traced(&img, &kernel, 0, None)?;

    log::info!("recorded {} frames", trace.len());

    // the preview frame, then the first few scan steps
    for frame in trace.frames().iter().take(4) {
        println!(
            "position {:?}: center sample {:?}",
            frame.position,
            frame.output.get([8, 8, 0])
        );
    }

    Ok(())
}
