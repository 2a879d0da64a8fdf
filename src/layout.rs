//////////////////////////////////////////////////////////////////////
// fixed dimensions for laying out the comparison page; all lengths
// are in mm, font sizes in points

use crate::Point2d;

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {

    pub ruler_inset: f64,         // distance of each ruler baseline from its page edge
    pub major_tick: f64,          // length of decimeter ticks
    pub minor_tick: f64,          // length of millimeter ticks on either side
    pub label_gap: f64,           // space between a tick end and its label
    pub major_line_width: f64,    // baseline and decimeter ticks
    pub minor_line_width: f64,    // millimeter ticks
    pub ruler_font_size: f64,

    pub outline_origin: Point2d,  // shared corner of all outlines
    pub outline_line_width: f64,
    pub outline_font_size: f64,

    pub notice_anchor: Point2d,
    pub notice_font_size: f64

}

impl Default for Layout {

    fn default() -> Self {

        Layout {
            ruler_inset: 30.0,
            major_tick: 3.0,
            minor_tick: 1.0,
            label_gap: 1.0,
            major_line_width: 0.1,
            minor_line_width: 0.05,
            ruler_font_size: 10.0,
            outline_origin: Point2d::new(50.0, 50.0),
            outline_line_width: 0.3,
            outline_font_size: 12.0,
            notice_anchor: Point2d::new(50.0, 40.0),
            notice_font_size: 14.0
        }

    }

}
