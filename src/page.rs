//////////////////////////////////////////////////////////////////////
// a whole comparison page as an ordered list of drawing instructions

use tracing::debug;

use crate::canvas::{Canvas, HAlign, VAlign};
use crate::catalog::{self, CatalogKind, PaperFormat};
use crate::errors::*;
use crate::layout::Layout;
use crate::outline;
use crate::ruler::Ruler;
use crate::{Point2d, Vec2d};

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub anchor: Point2d,
    pub text: String,
    pub size_pt: f64,
    pub halign: HAlign,
    pub valign: VAlign
}

#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {

    Line {
        from: Point2d,
        to: Point2d,
        width: f64
    },

    // unfilled, corner is the top left
    Rect {
        corner: Point2d,
        dims: Vec2d,
        width: f64
    },

    Text(Label)

}

impl Instruction {

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &C) {

        match self {

            Instruction::Line { from, to, width } => {
                canvas.setlinewidth(*width);
                canvas.moveto(from);
                canvas.lineto(to);
                canvas.strokepath();
            }

            Instruction::Rect { corner, dims, width } => {
                canvas.setlinewidth(*width);
                canvas.moveto(corner);
                canvas.lineto(&(corner + Vec2d::new(dims.x, 0.0)));
                canvas.lineto(&(corner + dims));
                canvas.lineto(&(corner + Vec2d::new(0.0, dims.y)));
                canvas.lineto(corner);
                canvas.strokepath();
            }

            Instruction::Text(label) => {
                canvas.setfont(label.size_pt);
                canvas.placetext(&label.anchor, &label.text, label.halign, label.valign);
            }

        }

    }

}

//////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub printer: PaperFormat,
    pub instructions: Vec<Instruction>
}

pub fn notice_text(printer: &PaperFormat) -> String {
    format!("Please print this page without any scaling on {:} paper! (Units are mm)",
            printer.name)
}

impl Page {

    // notice first, then both rulers, then outlines on top of the
    // ruler ink in request order
    pub fn compose(printer: &PaperFormat,
                   formats: &[PaperFormat],
                   layout: &Layout) -> Self {

        let mut instructions = vec![];

        instructions.push(Instruction::Text(Label {
            anchor: layout.notice_anchor,
            text: notice_text(printer),
            size_pt: layout.notice_font_size,
            halign: HAlign::Left,
            valign: VAlign::Top
        }));

        instructions.extend(Ruler::vertical(printer).instructions(layout));
        instructions.extend(Ruler::horizontal(printer).instructions(layout));

        for o in outline::place(formats, layout.outline_origin) {
            instructions.extend(o.instructions(layout));
        }

        debug!("composed {:} page with {:} outline(s), {:} instructions",
               printer.name, formats.len(), instructions.len());

        Page {
            printer: *printer,
            instructions: instructions
        }

    }

    // validates every name before any geometry is computed
    pub fn build<S: AsRef<str>>(printer: &str,
                                names: &[S],
                                layout: &Layout) -> Result<Self> {

        let printer = catalog::lookup(CatalogKind::Printer, printer)?;
        let formats = catalog::validate_comparables(names)?;

        Ok(Self::compose(&printer, &formats, layout))

    }

    pub fn dims_mm(&self) -> Vec2d {
        Vec2d::new(self.printer.width_mm as f64,
                   self.printer.height_mm as f64)
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &C) {
        for instruction in &self.instructions {
            instruction.draw(canvas);
        }
    }

}

//////////////////////////////////////////////////////////////////////
