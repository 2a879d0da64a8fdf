//////////////////////////////////////////////////////////////////////
// use error chain so we can use Result<> everywhere
// for error handling

use crate::catalog::{joined_names, CatalogKind};

error_chain! {

    foreign_links {
        Io(::std::io::Error);
        Cairo(::cairo::Error);
    }

    errors {

        UnknownPrinterFormat(name: String) {
            description("unknown printer paper size")
            display("paper size \"{}\" chosen for printer is unknown/not allowed (expected one of {})",
                    name, joined_names(CatalogKind::Printer))
        }

        UnknownComparableFormat(names: Vec<String>) {
            description("unknown paper size")
            display("paper size(s) {} unknown/not allowed (expected one of {})",
                    quoted(names), joined_names(CatalogKind::Comparable))
        }

    }

}

fn quoted(names: &[String]) -> String {
    names.iter()
        .map(|n| format!("\"{}\"", n))
        .collect::<Vec<_>>()
        .join(", ")
}
