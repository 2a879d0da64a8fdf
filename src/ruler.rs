//////////////////////////////////////////////////////////////////////
// millimeter rulers along the left and top edges of the page
//
// Each ruler is a baseline inset from the page edge with three tick
// combs: decimeter ticks counting up from the origin on the margin
// side, decimeter ticks counting up from the far edge on the sheet
// side, and unlabeled millimeter ticks straddling the baseline. All
// loops include the extent itself, so the last tick can land exactly
// on the page boundary.

use crate::canvas::{HAlign, VAlign};
use crate::catalog::PaperFormat;
use crate::layout::Layout;
use crate::page::{Instruction, Label};
use crate::Point2d;

const DECIMETER_STEP: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,   // runs down the page at x = inset
    Horizontal  // runs across the page at y = inset
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Major,
    Minor
}

// which side of the baseline a tick is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Margin, // between the page edge and the baseline
    Sheet,  // towards the middle of the page
    Both
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulerTick {
    pub position: u32, // mm along the axis
    pub label: Option<u32>,
    pub tier: Tier,
    pub side: Side
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ruler {
    pub axis: Axis,
    pub extent: u32,
    pub forward: Vec<RulerTick>,
    pub reverse: Vec<RulerTick>,
    pub millimeter: Vec<RulerTick>
}

impl Ruler {

    pub fn new(axis: Axis, extent: u32) -> Self {

        let forward = (0..=extent).step_by(DECIMETER_STEP).map(|i| RulerTick {
            position: i,
            label: Some(i / 10),
            tier: Tier::Major,
            side: Side::Margin
        }).collect();

        // same count, measured back from the far edge
        let reverse = (0..=extent).step_by(DECIMETER_STEP).map(|i| RulerTick {
            position: extent - i,
            label: Some(i / 10),
            tier: Tier::Major,
            side: Side::Sheet
        }).collect();

        let millimeter = (0..=extent).map(|i| RulerTick {
            position: i,
            label: None,
            tier: Tier::Minor,
            side: Side::Both
        }).collect();

        Ruler {
            axis: axis,
            extent: extent,
            forward: forward,
            reverse: reverse,
            millimeter: millimeter
        }

    }

    // spans the printer page height
    pub fn vertical(printer: &PaperFormat) -> Self {
        Self::new(Axis::Vertical, printer.height_mm)
    }

    // spans the printer page width
    pub fn horizontal(printer: &PaperFormat) -> Self {
        Self::new(Axis::Horizontal, printer.width_mm)
    }

    pub fn ticks(&self) -> impl Iterator<Item = &RulerTick> {
        self.forward.iter()
            .chain(self.reverse.iter())
            .chain(self.millimeter.iter())
    }

    // map (along axis, across axis) to page coordinates
    fn point(&self, along: f64, across: f64) -> Point2d {
        match self.axis {
            Axis::Vertical => Point2d::new(across, along),
            Axis::Horizontal => Point2d::new(along, across)
        }
    }

    fn tick_span(&self, tick: &RulerTick, layout: &Layout) -> (f64, f64) {

        let base = layout.ruler_inset;

        let len = match tick.tier {
            Tier::Major => layout.major_tick,
            Tier::Minor => layout.minor_tick
        };

        match tick.side {
            Side::Margin => (base - len, base),
            Side::Sheet => (base, base + len),
            Side::Both => (base - len, base + len)
        }

    }

    fn tick_line(&self, tick: &RulerTick, layout: &Layout) -> Instruction {

        let (a, b) = self.tick_span(tick, layout);
        let along = tick.position as f64;

        let width = match tick.tier {
            Tier::Major => layout.major_line_width,
            Tier::Minor => layout.minor_line_width
        };

        Instruction::Line {
            from: self.point(along, a),
            to: self.point(along, b),
            width: width
        }

    }

    // label sits just past the outer end of its tick; vertical labels
    // are centered on the tick, horizontal ones start just after it
    fn tick_label(&self, tick: &RulerTick, value: u32, layout: &Layout) -> Instruction {

        let (a, b) = self.tick_span(tick, layout);
        let gap = layout.label_gap;
        let along = tick.position as f64;

        let (anchor, halign, valign) = match (self.axis, tick.side) {
            (Axis::Vertical, Side::Sheet) =>
                (self.point(along, b + gap), HAlign::Left, VAlign::Center),
            (Axis::Vertical, _) =>
                (self.point(along, a - gap), HAlign::Right, VAlign::Center),
            (Axis::Horizontal, Side::Sheet) =>
                (self.point(along + gap, b + gap), HAlign::Left, VAlign::Top),
            (Axis::Horizontal, _) =>
                (self.point(along + gap, a - gap), HAlign::Left, VAlign::Bottom)
        };

        Instruction::Text(Label {
            anchor: anchor,
            text: value.to_string(),
            size_pt: layout.ruler_font_size,
            halign: halign,
            valign: valign
        })

    }

    pub fn instructions(&self, layout: &Layout) -> Vec<Instruction> {

        let mut rval = Vec::with_capacity(1 + 2 * (self.forward.len() + self.reverse.len())
                                          + self.millimeter.len());

        let base = layout.ruler_inset;

        rval.push(Instruction::Line {
            from: self.point(0.0, base),
            to: self.point(self.extent as f64, base),
            width: layout.major_line_width
        });

        for tick in self.ticks() {
            rval.push(self.tick_line(tick, layout));
            if let Some(value) = tick.label {
                rval.push(self.tick_label(tick, value, layout));
            }
        }

        rval

    }

}

//////////////////////////////////////////////////////////////////////
