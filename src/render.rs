// Shading backends: run the locus evaluator over every framebuffer pixel.
// Visual: this is the blue heat-map you see behind the points.

use crate::error::Error;
use crate::locus::shade_pixel;
use crate::types::FrameBuffer;
use crate::uniforms::FrameUniforms;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Anything that can turn a frame's uniforms into pixels.
pub trait LocusBackend {
    fn name(&self) -> &'static str;
    fn render(&mut self, uniforms: &FrameUniforms, target: &mut FrameBuffer) -> Result<(), Error>;
}

/// Software fallback: rows are independent, so they are shaded in parallel.
pub struct CpuBackend {
    pool: ThreadPool,
}

impl CpuBackend {
    /// `threads == 0` lets rayon pick (one per core).
    pub fn new(threads: usize) -> Result<Self, Error> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("locus-shade-{i}"))
            .build()
            .map_err(|e| Error::BackendInit(e.to_string()))?;
        Ok(Self { pool })
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl LocusBackend for CpuBackend {
    fn name(&self) -> &'static str {
        "cpu"
    }

    fn render(&mut self, uniforms: &FrameUniforms, target: &mut FrameBuffer) -> Result<(), Error> {
        check_target(uniforms, target)?;
        let width = target.width;
        if width == 0 || target.height == 0 {
            return Ok(());
        }
        self.pool.install(|| {
            target
                .pixels
                .par_chunks_mut(width)
                .enumerate()
                .for_each(|(y, row)| {
                    for (x, px) in row.iter_mut().enumerate() {
                        *px = shade_pixel(uniforms, x, y);
                    }
                });
        });
        Ok(())
    }
}

fn check_target(uniforms: &FrameUniforms, target: &FrameBuffer) -> Result<(), Error> {
    if target.pixels.len() != target.width * target.height {
        return Err(Error::Render(format!(
            "framebuffer holds {} pixels, expected {}x{}",
            target.pixels.len(),
            target.width,
            target.height
        )));
    }
    let (w, h) = (uniforms.resolution.x as usize, uniforms.resolution.y as usize);
    if (w, h) != (target.width, target.height) {
        return Err(Error::Render(format!(
            "uniforms built for {w}x{h}, target is {}x{}",
            target.width, target.height
        )));
    }
    Ok(())
}
