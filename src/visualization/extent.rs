//! Headless drawing surface
//!
//! Keeps no pixels, only what is useful to report after a run: how many
//! segments were drawn, which labels, the bounding box of everything, and
//! how many endpoints fell outside the canvas.

use crate::simulation::states::NVec2;
use crate::visualization::plot::{DrawingSurface, CANVAS_SIZE};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Extent {
    pub segments: u64,
    pub labels: Vec<String>,
    pub min: Option<NVec2>,
    pub max: Option<NVec2>,
    pub clipped: u64, // endpoints off the canvas
}

impl Extent {
    fn include(&mut self, p: NVec2) {
        self.min = Some(self.min.map_or(p, |m| m.inf(&p)));
        self.max = Some(self.max.map_or(p, |m| m.sup(&p)));

        let on_canvas = (0.0..=CANVAS_SIZE).contains(&p.x) && (0.0..=CANVAS_SIZE).contains(&p.y);
        if !on_canvas {
            self.clipped += 1;
        }
    }
}

impl DrawingSurface for Extent {
    fn line(&mut self, from: NVec2, to: NVec2) {
        self.segments += 1;
        self.include(from);
        self.include(to);
    }

    fn text(&mut self, at: NVec2, label: &str) {
        self.include(at);
        self.labels.push(label.to_string());
    }
}
