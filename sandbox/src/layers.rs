//! Example layers
//!
//! Each example drives a small per-frame workload so the process has real
//! work in flight while the harness observes it.

pub const EXAMPLES: [&str; 3] = ["empty", "triangle", "renderer2d"];

/// Quads accumulated per batch before the simulated renderer flushes.
const BATCH_SIZE: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Empty,
    Triangle,
    Renderer2d,
}

impl LayerKind {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "empty" => Some(LayerKind::Empty),
            "triangle" => Some(LayerKind::Triangle),
            "renderer2d" => Some(LayerKind::Renderer2d),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct Layer {
    kind: LayerKind,
    frame: u64,
    angle: f32,
    vertices: [[f32; 2]; 3],
    quads: Vec<[f32; 2]>,
}

impl Layer {
    pub fn new(kind: LayerKind) -> Self {
        Self {
            kind,
            frame: 0,
            angle: 0.0,
            vertices: [[0.0, 0.5], [-0.5, -0.5], [0.5, -0.5]],
            quads: Vec::with_capacity(BATCH_SIZE),
        }
    }

    pub fn on_attach(&self) {
        tracing::debug!("layer {:?} attached", self.kind);
    }

    /// Advance one frame of the example's workload.
    pub fn on_update(&mut self) {
        self.frame += 1;

        match self.kind {
            LayerKind::Empty => {}
            LayerKind::Triangle => self.rotate_triangle(),
            LayerKind::Renderer2d => self.draw_quads(),
        }

        tracing::trace!("layer {:?} frame {}", self.kind, self.frame);
    }

    pub fn on_detach(&self) {
        tracing::debug!("layer {:?} detached after {} frames", self.kind, self.frame);
    }

    pub fn frames(&self) -> u64 {
        self.frame
    }

    fn rotate_triangle(&mut self) {
        self.angle += 0.01;
        let (sin, cos) = self.angle.sin_cos();
        for vertex in &mut self.vertices {
            let [x, y] = *vertex;
            *vertex = [x * cos - y * sin, x * sin + y * cos];
        }
    }

    fn draw_quads(&mut self) {
        let step = self.frame as f32 * 0.05;
        self.quads.push([step.sin(), step.cos()]);
        if self.quads.len() >= BATCH_SIZE {
            tracing::trace!("flushing batch of {} quads", self.quads.len());
            self.quads.clear();
        }
    }
}
