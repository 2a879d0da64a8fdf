//////////////////////////////////////////////////////////////////////
// the handful of vector drawing operations a page needs, so layout
// code never talks to cairo directly

use crate::{Point2d, Vec2d};

// points per mm
pub const MM: f64 = 72.0 / 25.4;

pub const FONT_FAMILY: &str = "Times";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HAlign {
    Left,
    Right
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VAlign {
    Top,
    Center,
    Bottom
}

impl HAlign {
    fn fraction(self) -> f64 {
        match self {
            HAlign::Left => 0.0,
            HAlign::Right => 1.0
        }
    }
}

impl VAlign {
    fn fraction(self) -> f64 {
        match self {
            VAlign::Top => 0.0,
            VAlign::Center => 0.5,
            VAlign::Bottom => 1.0
        }
    }
}

// where to start show_text so the ink box of the text, given by its
// bearing and size relative to that start point, lines up with anchor
pub fn text_origin(anchor: &Point2d, bearing: Vec2d, size: Vec2d,
                   ha: HAlign, va: VAlign) -> Point2d {

    let xoffs = ha.fraction() * size.x + bearing.x;
    let yoffs = va.fraction() * size.y + bearing.y;

    Point2d::new(anchor.x - xoffs, anchor.y - yoffs)

}

// coordinates are mm with y pointing down the page
pub trait Canvas {

    fn moveto(&self, p: &Point2d);
    fn lineto(&self, p: &Point2d);
    fn strokepath(&self);
    fn setlinewidth(&self, width: f64);
    fn setfont(&self, size_pt: f64);
    fn placetext(&self, anchor: &Point2d, text: &str, ha: HAlign, va: VAlign);

}

// expects a context already scaled so that one user unit is one mm
impl Canvas for cairo::Context {

    fn moveto(&self, p: &Point2d) {
        self.move_to(p.x, p.y);
    }

    fn lineto(&self, p: &Point2d) {
        self.line_to(p.x, p.y);
    }

    fn strokepath(&self) {
        self.stroke();
    }

    fn setlinewidth(&self, width: f64) {
        self.set_line_width(width);
    }

    fn setfont(&self, size_pt: f64) {
        self.select_font_face(FONT_FAMILY,
                              cairo::FontSlant::Normal,
                              cairo::FontWeight::Normal);
        self.set_font_size(size_pt / MM);
    }

    fn placetext(&self, anchor: &Point2d, text: &str, ha: HAlign, va: VAlign) {

        let extents = self.text_extents(text);

        let start = text_origin(anchor,
                                Vec2d::new(extents.x_bearing, extents.y_bearing),
                                Vec2d::new(extents.width, extents.height),
                                ha, va);

        self.moveto(&start);
        self.show_text(text);

    }

}

//////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {

    use super::*;

    // ink starts 0.5 right of the pen and rises 3 above the baseline
    fn bearing() -> Vec2d { Vec2d::new(0.5, -3.0) }
    fn size() -> Vec2d { Vec2d::new(10.0, 4.0) }

    #[test]
    fn right_aligned_ink_ends_at_anchor() {
        let anchor = Point2d::new(26.0, 30.0);
        let start = text_origin(&anchor, bearing(), size(), HAlign::Right, VAlign::Center);

        let ink_right = start.x + bearing().x + size().x;
        assert!((ink_right - anchor.x).abs() < 1e-9);
        assert!((start.x - 15.5).abs() < 1e-9);
    }

    #[test]
    fn left_aligned_ink_starts_at_anchor() {
        let anchor = Point2d::new(34.0, 297.0);
        let start = text_origin(&anchor, bearing(), size(), HAlign::Left, VAlign::Top);

        assert!((start.x + bearing().x - anchor.x).abs() < 1e-9);
        assert!((start.y + bearing().y - anchor.y).abs() < 1e-9);
    }

    #[test]
    fn vertical_alignment_uses_ink_box() {
        let anchor = Point2d::new(0.0, 100.0);

        let bottom = text_origin(&anchor, bearing(), size(), HAlign::Left, VAlign::Bottom);
        assert!((bottom.y + bearing().y + size().y - anchor.y).abs() < 1e-9);

        let center = text_origin(&anchor, bearing(), size(), HAlign::Left, VAlign::Center);
        assert!((center.y + bearing().y + 0.5 * size().y - anchor.y).abs() < 1e-9);
    }

    #[test]
    fn points_per_mm() {
        assert!((210.0 * MM - 595.2756).abs() < 1e-3);
        assert!((297.0 * MM - 841.8898).abs() < 1e-3);
    }

}
