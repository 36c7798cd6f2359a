use crate::foundation::core::{BezPath, Point};
use crate::foundation::error::{NeuronalError, NeuronalResult};
use crate::render::backend::{FrameRGBA, RenderBackend, RenderSettings};
use crate::render::scene::{DrawOp, Scene};

/// `vello_cpu` rasterizer. Keeps its pixmap between frames of the same size.
pub struct CpuBackend {
    settings: RenderSettings,
    surface: Option<CpuSurface>,
}

struct CpuSurface {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
}

impl CpuBackend {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            surface: None,
        }
    }

    fn ensure_surface(&mut self, width: u32, height: u32) -> NeuronalResult<&mut CpuSurface> {
        let width_u16: u16 = width
            .try_into()
            .map_err(|_| NeuronalError::render("surface width exceeds u16"))?;
        let height_u16: u16 = height
            .try_into()
            .map_err(|_| NeuronalError::render("surface height exceeds u16"))?;

        let reuse = self
            .surface
            .as_ref()
            .is_some_and(|s| s.width == width_u16 && s.height == height_u16);
        if !reuse {
            self.surface = None;
        }
        Ok(self.surface.get_or_insert_with(|| CpuSurface {
            width: width_u16,
            height: height_u16,
            pixmap: vello_cpu::Pixmap::new(width_u16, height_u16),
        }))
    }
}

impl RenderBackend for CpuBackend {
    #[tracing::instrument(level = "debug", skip_all, fields(ops = scene.ops.len()))]
    fn render_scene(&mut self, scene: &Scene) -> NeuronalResult<FrameRGBA> {
        let [r, g, b, a] = self.settings.clear_rgba.unwrap_or([
            scene.background.r,
            scene.background.g,
            scene.background.b,
            scene.background.a,
        ]);
        let surface = self.ensure_surface(scene.canvas.width, scene.canvas.height)?;
        clear_pixmap(&mut surface.pixmap, [0, 0, 0, 0]);

        let mut ctx = vello_cpu::RenderContext::new(surface.width, surface.height);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(surface.width),
            f64::from(surface.height),
        ));
        for op in &scene.ops {
            draw_op(&mut ctx, op);
        }
        ctx.flush();
        ctx.render_to_pixmap(&mut surface.pixmap);

        Ok(FrameRGBA {
            width: scene.canvas.width,
            height: scene.canvas.height,
            data: surface.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    let data = pixmap.data_as_u8_slice_mut();
    for px in data.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

fn draw_op(ctx: &mut vello_cpu::RenderContext, op: &DrawOp) {
    let color = op.color();
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        color.r, color.g, color.b, color.a,
    ));
    let cpu_path = bezpath_to_cpu(op.path());
    match op {
        DrawOp::Fill { .. } => ctx.fill_path(&cpu_path),
        DrawOp::Stroke { width, round, .. } => {
            let mut stroke = vello_cpu::kurbo::Stroke::new(*width);
            if *round {
                stroke = stroke
                    .with_caps(vello_cpu::kurbo::Cap::Round)
                    .with_join(vello_cpu::kurbo::Join::Round);
            }
            ctx.set_stroke(stroke);
            ctx.stroke_path(&cpu_path);
        }
    }
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
