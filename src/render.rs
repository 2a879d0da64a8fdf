//////////////////////////////////////////////////////////////////////
// write a composed page out as a single-page PDF at 1:1 scale

use std::path::Path;

use tracing::{debug, info};

use crate::canvas::MM;
use crate::errors::*;
use crate::layout::Layout;
use crate::page::Page;

pub const DEFAULT_OUTPUT: &str = "output.pdf";

// the surface is sized in points; the context is scaled so everything
// drawn on it is in mm, with no margins
pub fn write_pdf(page: &Page, path: &Path) -> Result<()> {

    let dims = page.dims_mm();

    debug!("creating {:}x{:} mm surface for {:}",
           dims.x, dims.y, path.display());

    let surface = cairo::PdfSurface::new(dims.x * MM, dims.y * MM, path)
        .chain_err(|| format!("creating {:}", path.display()))?;

    let ctx = cairo::Context::new(&surface);

    ctx.scale(MM, MM);
    ctx.set_source_rgb(0.0, 0.0, 0.0);

    page.draw(&ctx);

    ctx.show_page();

    // cairo keeps drawing errors sticky on the context and surface
    ctx.status().chain_err(|| format!("drawing {:}", path.display()))?;

    surface.finish();
    surface.status().chain_err(|| format!("writing {:}", path.display()))?;

    info!("wrote {:} page to {:}", page.printer.name, path.display());

    Ok(())

}

// validate, compose and write in one go; nothing touches the
// filesystem unless every name is known
pub fn generate<S: AsRef<str>>(printer: &str,
                               names: &[S],
                               layout: &Layout,
                               path: &Path) -> Result<Page> {

    let page = Page::build(printer, names, layout)?;

    write_pdf(&page, path)?;

    Ok(page)

}
