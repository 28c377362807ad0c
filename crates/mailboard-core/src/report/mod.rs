//! Pure pagination planning for captured report content.
//!
//! Computes where a captured image lands on successive pages; rendering the
//! document itself is an external concern.

use serde::Serialize;

use crate::error::{Error, Result};

/// A4 portrait width in millimetres.
pub const A4_WIDTH_MM: f64 = 210.0;
/// A4 portrait height in millimetres.
pub const A4_HEIGHT_MM: f64 = 297.0;

/// Placement plan for a captured content region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagePlan {
    /// Width of the scaled image, equal to the page width.
    pub scaled_width: f64,
    /// Height of the scaled image in page units.
    pub scaled_height: f64,
    /// Vertical offset of the image on each successive page: `0`,
    /// `-page_h`, `-2·page_h`, …
    pub offsets: Vec<f64>,
}

impl PagePlan {
    /// Number of pages the plan spans.
    #[must_use]
    pub fn pages(&self) -> usize {
        self.offsets.len()
    }
}

/// Plans the vertical tiling of a `content_w` × `content_h` capture onto
/// pages of `page_w` × `page_h`.
///
/// The image is scaled to the page width. If the scaled height fits one
/// page the plan is a single placement at offset zero; otherwise the image
/// tiles across pages, each placement shifted up by one page height.
///
/// # Errors
///
/// Returns [`Error::InvalidDimensions`] when either dimension pair is zero
/// or negative.
pub fn plan_pages(content_w: f64, content_h: f64, page_w: f64, page_h: f64) -> Result<PagePlan> {
    if content_w <= 0.0 || content_h <= 0.0 {
        return Err(Error::InvalidDimensions {
            width: content_w,
            height: content_h,
        });
    }
    if page_w <= 0.0 || page_h <= 0.0 {
        return Err(Error::InvalidDimensions {
            width: page_w,
            height: page_h,
        });
    }

    let scaled_height = content_h * page_w / content_w;
    let mut offsets = vec![0.0];
    let mut offset = 0.0;
    let mut remaining = scaled_height - page_h;
    while remaining > 0.0 {
        offset -= page_h;
        offsets.push(offset);
        remaining -= page_h;
    }

    Ok(PagePlan {
        scaled_width: page_w,
        scaled_height,
        offsets,
    })
}

/// Plans tiling onto A4 portrait pages.
///
/// # Errors
///
/// Returns [`Error::InvalidDimensions`] for degenerate content dimensions.
pub fn plan_a4(content_w: f64, content_h: f64) -> Result<PagePlan> {
    plan_pages(content_w, content_h, A4_WIDTH_MM, A4_HEIGHT_MM)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_fit_is_a_single_placement() {
        let plan = plan_a4(210.0, 297.0).unwrap();

        assert_eq!(plan.scaled_width, A4_WIDTH_MM);
        assert_eq!(plan.scaled_height, A4_HEIGHT_MM);
        assert_eq!(plan.offsets, vec![0.0]);
        assert_eq!(plan.pages(), 1);
    }

    #[test]
    fn test_scales_to_page_width() {
        // twice the page width, so the height halves
        let plan = plan_a4(420.0, 594.0).unwrap();

        assert_eq!(plan.scaled_height, 297.0);
        assert_eq!(plan.pages(), 1);
    }

    #[test]
    fn test_tall_content_tiles_by_page_height() {
        let plan = plan_a4(210.0, 594.0).unwrap();

        assert_eq!(plan.offsets, vec![0.0, -297.0]);
    }

    #[test]
    fn test_partial_last_page_still_gets_a_placement() {
        let plan = plan_a4(210.0, 700.0).unwrap();

        assert_eq!(plan.offsets, vec![0.0, -297.0, -594.0]);
        assert_eq!(plan.pages(), 3);
    }

    #[test]
    fn test_rejects_degenerate_content() {
        assert!(matches!(
            plan_a4(0.0, 100.0),
            Err(Error::InvalidDimensions { .. })
        ));
        assert!(matches!(
            plan_a4(100.0, -5.0),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_rejects_degenerate_page() {
        assert!(matches!(
            plan_pages(100.0, 100.0, 210.0, 0.0),
            Err(Error::InvalidDimensions { .. })
        ));
    }
}
