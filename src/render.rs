//! Drives the camera, scene and shader over a whole frame.

use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use crate::{
    camera::Camera,
    config::RenderConfig,
    error::Result,
    scene::Scene,
    shader::Shader,
    vec3::Color,
};

/// Row-major grid of colors with channels in `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Frame {
    #[inline]
    pub fn get(&self, px: u32, py: u32) -> Color {
        self.pixels[py as usize * self.width as usize + px as usize]
    }
}

pub struct Renderer {
    scene: Scene,
    camera: Camera,
    shader: Shader,
    config: RenderConfig,
}

impl Renderer {
    pub fn new(scene: Scene, camera: Camera, config: RenderConfig) -> Result<Self> {
        config.validate()?;
        let shader = Shader::for_camera(&config, &camera);

        Ok(Self {
            scene,
            camera,
            shader,
            config,
        })
    }

    #[inline]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Color of a single pixel; the background when the primary ray hits nothing.
    pub fn pixel_color(&self, px: u32, py: u32) -> Result<Color> {
        let ray = self.camera.primary_ray(px, py, self.config.width, self.config.height)?;

        match self.scene.nearest_hit(&ray) {
            Some(hit) => self.shader.shade(&hit, &self.scene),
            None => Ok(self.config.background),
        }
    }

    /// Renders every row in parallel.
    pub fn render(&self) -> Result<Frame> {
        let now = Instant::now();
        let mut frame = self.blank_frame();
        let width = frame.width as usize;

        frame
            .pixels
            .par_chunks_mut(width)
            .enumerate()
            .try_for_each(|(py, row)| self.render_row(py as u32, row))?;

        info!("Finished, elapsed: {:.3} ms", now.elapsed().as_secs_f64() * 1000.0);
        Ok(frame)
    }

    /// Renders one pixel at a time in scanline order.
    pub fn render_serial(&self) -> Result<Frame> {
        let now = Instant::now();
        let mut frame = self.blank_frame();
        let width = frame.width as usize;

        for (py, row) in frame.pixels.chunks_mut(width).enumerate() {
            self.render_row(py as u32, row)?;
            debug!("row {}/{} done", py + 1, self.config.height);
        }

        info!("Finished, elapsed: {:.3} ms", now.elapsed().as_secs_f64() * 1000.0);
        Ok(frame)
    }

    fn render_row(&self, py: u32, row: &mut [Color]) -> Result<()> {
        for (px, pixel) in row.iter_mut().enumerate() {
            *pixel = self.pixel_color(px as u32, py)?;
        }
        Ok(())
    }

    fn blank_frame(&self) -> Frame {
        let (width, height) = (self.config.width, self.config.height);
        info!(
            "Rendering {}x{} frame: {} primitives, {} lights",
            width,
            height,
            self.scene.primitives().len(),
            self.scene.lights().len()
        );

        Frame {
            width,
            height,
            pixels: vec![self.config.background; width as usize * height as usize],
        }
    }
}
