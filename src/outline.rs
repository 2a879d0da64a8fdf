//////////////////////////////////////////////////////////////////////
// paper outlines, all stacked on one shared corner so the far edges
// are what tells the sizes apart

use crate::canvas::{HAlign, VAlign};
use crate::catalog::PaperFormat;
use crate::layout::Layout;
use crate::page::{Instruction, Label};
use crate::{Point2d, Vec2d};

#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub format: PaperFormat,
    pub origin: Point2d,
    pub label: String
}

pub fn label_for(format: &PaperFormat) -> String {
    format!("{:} ({:} x {:})", format.name, format.width_mm, format.height_mm)
}

impl Outline {

    pub fn new(format: PaperFormat, origin: Point2d) -> Self {
        Outline {
            label: label_for(&format),
            format: format,
            origin: origin
        }
    }

    pub fn dims(&self) -> Vec2d {
        Vec2d::new(self.format.width_mm as f64,
                   self.format.height_mm as f64)
    }

    // corner diagonally opposite the shared origin
    pub fn far_corner(&self) -> Point2d {
        self.origin + self.dims()
    }

    // stroke first, then the label right-aligned under the far corner
    pub fn instructions(&self, layout: &Layout) -> Vec<Instruction> {

        vec![
            Instruction::Rect {
                corner: self.origin,
                dims: self.dims(),
                width: layout.outline_line_width
            },
            Instruction::Text(Label {
                anchor: self.far_corner(),
                text: self.label.clone(),
                size_pt: layout.outline_font_size,
                halign: HAlign::Right,
                valign: VAlign::Top
            })
        ]

    }

}

// one outline per format in the order given; duplicates are kept
pub fn place(formats: &[PaperFormat], origin: Point2d) -> Vec<Outline> {
    formats.iter()
        .map(|&f| Outline::new(f, origin))
        .collect()
}

//////////////////////////////////////////////////////////////////////
