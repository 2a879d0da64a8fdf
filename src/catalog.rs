//////////////////////////////////////////////////////////////////////
// paper formats and the two fixed catalogs they live in
//
// size explanation: https://unsharpen.com/paper-sizes/

use phf::phf_map;

use crate::errors::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Iso,
    Us,
    Other
}

//////////////////////////////////////////////////////////////////////
// bare width/height pair, no rendering attached

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub width: u32,
    pub height: u32
}

impl Shape {

    pub fn new(width: u32, height: u32) -> Self {
        Shape { width: width, height: height }
    }

    // true if and only if both width and height are strictly less;
    // a partial order, two shapes may be incomparable
    pub fn smaller_than(&self, other: &Shape) -> bool {
        self.width < other.width && self.height < other.height
    }

}

//////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaperFormat {
    pub origin: Origin,
    pub name: &'static str,
    pub width_mm: u32,
    pub height_mm: u32
}

impl PaperFormat {

    pub const fn new(origin: Origin, name: &'static str,
                     width_mm: u32, height_mm: u32) -> Self {
        PaperFormat {
            origin: origin,
            name: name,
            width_mm: width_mm,
            height_mm: height_mm
        }
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.width_mm, self.height_mm)
    }

    pub fn smaller_than(&self, other: &PaperFormat) -> bool {
        self.shape().smaller_than(&other.shape())
    }

}

//////////////////////////////////////////////////////////////////////
// statically allocated catalogs; names are unique per catalog but
// the two catalogs are separate namespaces

static COMPARABLE: phf::Map<&'static str, PaperFormat> = phf_map! {
    "A5" => PaperFormat::new(Origin::Iso, "A5", 148, 210),
    "A6" => PaperFormat::new(Origin::Iso, "A6", 105, 148),
    "A7" => PaperFormat::new(Origin::Iso, "A7", 74, 105),
    "A8" => PaperFormat::new(Origin::Iso, "A8", 52, 74),
    "A9" => PaperFormat::new(Origin::Iso, "A9", 37, 52),
    "A10" => PaperFormat::new(Origin::Iso, "A10", 26, 37),
    "B6" => PaperFormat::new(Origin::Iso, "B6", 125, 176),
    "B7" => PaperFormat::new(Origin::Iso, "B7", 88, 125),
    "B8" => PaperFormat::new(Origin::Iso, "B8", 62, 88),
    "B9" => PaperFormat::new(Origin::Iso, "B9", 44, 62),
    "B10" => PaperFormat::new(Origin::Iso, "B10", 31, 44),
    "Invoice" => PaperFormat::new(Origin::Us, "Invoice", 140, 216),
    "Field Notes" => PaperFormat::new(Origin::Other, "Field Notes", 90, 140),
    "Moleskine Extra Small" => PaperFormat::new(Origin::Other, "Moleskine Extra Small", 65, 105),
    "Moleskine Pocket" => PaperFormat::new(Origin::Other, "Moleskine Pocket", 90, 140),
};

static PRINTER: phf::Map<&'static str, PaperFormat> = phf_map! {
    "A4" => PaperFormat::new(Origin::Iso, "A4", 210, 297),
    "Letter" => PaperFormat::new(Origin::Us, "Letter", 216, 279),
    "Legal" => PaperFormat::new(Origin::Us, "Legal", 203, 330),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Comparable,
    Printer
}

impl CatalogKind {

    fn map(self) -> &'static phf::Map<&'static str, PaperFormat> {
        match self {
            CatalogKind::Comparable => &COMPARABLE,
            CatalogKind::Printer => &PRINTER
        }
    }

    fn not_found(self, name: &str) -> ErrorKind {
        match self {
            CatalogKind::Comparable => ErrorKind::UnknownComparableFormat(vec![name.to_string()]),
            CatalogKind::Printer => ErrorKind::UnknownPrinterFormat(name.to_string())
        }
    }

}

pub fn lookup(kind: CatalogKind, name: &str) -> Result<PaperFormat> {

    match kind.map().get(name) {
        Some(&format) => Ok(format),
        None => Err(kind.not_found(name).into())
    }

}

// sorted ascending, for usage text and validation messages
pub fn list_names(kind: CatalogKind) -> Vec<&'static str> {

    let mut names: Vec<&'static str> = kind.map().keys().cloned().collect();
    names.sort();
    names

}

pub fn joined_names(kind: CatalogKind) -> String {
    list_names(kind).join("|")
}

// look up every requested name, reporting all of the unknown ones at
// once so nothing gets drawn from a partially valid request
pub fn validate_comparables<S: AsRef<str>>(names: &[S]) -> Result<Vec<PaperFormat>> {

    let mut formats = Vec::with_capacity(names.len());
    let mut unknown = Vec::new();

    for name in names {
        match COMPARABLE.get(name.as_ref()) {
            Some(&format) => formats.push(format),
            None => unknown.push(name.as_ref().to_string())
        }
    }

    if !unknown.is_empty() {
        bail!(ErrorKind::UnknownComparableFormat(unknown));
    }

    Ok(formats)

}

//////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {

    use super::*;

    fn all_formats() -> Vec<PaperFormat> {
        COMPARABLE.values().chain(PRINTER.values()).cloned().collect()
    }

    #[test]
    fn every_format_has_positive_dimensions() {
        for f in all_formats() {
            assert!(f.width_mm > 0 && f.height_mm > 0, "{:?}", f);
        }
    }

    #[test]
    fn catalog_keys_match_format_names() {
        for kind in &[CatalogKind::Comparable, CatalogKind::Printer] {
            for (key, format) in kind.map().entries() {
                assert_eq!(*key, format.name);
            }
        }
    }

    #[test]
    fn smaller_than_is_irreflexive() {
        for f in all_formats() {
            assert!(!f.smaller_than(&f), "{:}", f.name);
        }
    }

    #[test]
    fn smaller_than_is_not_total() {
        let wide = Shape::new(120, 80);
        let tall = Shape::new(80, 120);
        assert!(!wide.smaller_than(&tall));
        assert!(!tall.smaller_than(&wide));
    }

    #[test]
    fn smaller_than_needs_both_edges_strictly_less() {
        let a6 = lookup(CatalogKind::Comparable, "A6").unwrap();
        let a5 = lookup(CatalogKind::Comparable, "A5").unwrap();
        assert!(a6.smaller_than(&a5));
        assert!(!a5.smaller_than(&a6));

        // same dimensions, different names
        let field_notes = lookup(CatalogKind::Comparable, "Field Notes").unwrap();
        let pocket = lookup(CatalogKind::Comparable, "Moleskine Pocket").unwrap();
        assert!(!field_notes.smaller_than(&pocket));
        assert!(!pocket.smaller_than(&field_notes));

        assert!(!Shape::new(105, 148).smaller_than(&Shape::new(105, 200)));
    }

    #[test]
    fn lookup_finds_known_formats() {
        let a4 = lookup(CatalogKind::Printer, "A4").unwrap();
        assert_eq!(a4, PaperFormat::new(Origin::Iso, "A4", 210, 297));

        let invoice = lookup(CatalogKind::Comparable, "Invoice").unwrap();
        assert_eq!(invoice.origin, Origin::Us);
        assert_eq!(invoice.shape(), Shape::new(140, 216));
    }

    #[test]
    fn catalogs_are_separate_namespaces() {
        assert!(lookup(CatalogKind::Comparable, "A4").is_err());
        assert!(lookup(CatalogKind::Printer, "A5").is_err());
    }

    #[test]
    fn unknown_printer_is_reported_by_name() {
        let err = lookup(CatalogKind::Printer, "A3").unwrap_err();
        match err.kind() {
            ErrorKind::UnknownPrinterFormat(name) => assert_eq!(name, "A3"),
            other => panic!("unexpected error: {:?}", other)
        }
        assert!(err.to_string().contains("A4|Legal|Letter"));
    }

    #[test]
    fn list_names_is_sorted() {
        assert_eq!(list_names(CatalogKind::Printer), vec!["A4", "Legal", "Letter"]);

        let names = list_names(CatalogKind::Comparable);
        assert_eq!(names.len(), 15);
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn validate_keeps_request_order_and_duplicates() {
        let formats = validate_comparables(&["A6", "A5", "A6"]).unwrap();
        let names: Vec<_> = formats.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["A6", "A5", "A6"]);
    }

    #[test]
    fn validate_reports_every_unknown_name() {
        let err = validate_comparables(&["A6", "C5", "A5", "Pocket"]).unwrap_err();
        match err.kind() {
            ErrorKind::UnknownComparableFormat(names) => {
                assert_eq!(names, &vec!["C5".to_string(), "Pocket".to_string()]);
            }
            other => panic!("unexpected error: {:?}", other)
        }
        let msg = err.to_string();
        assert!(msg.contains("\"C5\", \"Pocket\""), "{:}", msg);
    }

    #[test]
    fn validate_accepts_empty_request() {
        let empty: [&str; 0] = [];
        assert!(validate_comparables(&empty).unwrap().is_empty());
    }

}
