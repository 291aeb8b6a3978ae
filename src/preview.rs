//! Preview
//!
//! Geometry hints for drawing a configuration: a crust, with each topping's overlay stacked on
//! top. The hint for a topping depends only on its placement.

use smallvec::SmallVec;

use crate::{pizza::PizzaConfiguration, placement::ToppingPlacement, toppings::Topping};

/// Overlay reference of the crust, drawn beneath every topping.
pub const CRUST_OVERLAY: &str = "pizza_crust";

/// Which part of the overlay image is kept when it is cropped to its footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Upper left corner
    TopStart,

    /// Upper right corner
    TopEnd,

    /// Centre
    Center,
}

/// Where the footprint sits within the pizza's square frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Vertically centred against the left edge
    CenterStart,

    /// Vertically centred against the right edge
    CenterEnd,

    /// Centred
    Center,
}

/// How much of the pizza an overlay covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Footprint {
    /// One half, split vertically
    Half,

    /// The whole pizza
    Full,
}

impl Footprint {
    /// Width to height ratio of the footprint.
    #[must_use]
    pub fn aspect_ratio(self) -> f32 {
        match self {
            Footprint::Half => 0.5,
            Footprint::Full => 1.0,
        }
    }
}

/// Geometry of one overlay layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayGeometry {
    /// Crop anchor within the overlay image
    pub anchor: Anchor,

    /// Position of the footprint within the frame
    pub alignment: Alignment,

    /// Covered area
    pub footprint: Footprint,
}

impl OverlayGeometry {
    /// Geometry covering the whole pizza.
    pub const FULL: OverlayGeometry = OverlayGeometry {
        anchor: Anchor::Center,
        alignment: Alignment::Center,
        footprint: Footprint::Full,
    };

    /// Geometry for a topping with the given placement.
    #[must_use]
    pub fn for_placement(placement: ToppingPlacement) -> Self {
        match placement {
            ToppingPlacement::Left => OverlayGeometry {
                anchor: Anchor::TopStart,
                alignment: Alignment::CenterStart,
                footprint: Footprint::Half,
            },
            ToppingPlacement::Right => OverlayGeometry {
                anchor: Anchor::TopEnd,
                alignment: Alignment::CenterEnd,
                footprint: Footprint::Half,
            },
            ToppingPlacement::All => Self::FULL,
        }
    }
}

/// One image layer of the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewLayer {
    /// Topping drawn by this layer, `None` for the crust
    pub topping: Option<Topping>,

    /// Overlay reference
    pub overlay: &'static str,

    /// Where and how large to draw the overlay
    pub geometry: OverlayGeometry,
}

/// Layers to draw for a configuration, bottom first.
///
/// The crust always comes first, followed by one layer per topping in [`Topping::ALL`] order.
pub fn preview_layers(pizza: &PizzaConfiguration) -> SmallVec<[PreviewLayer; 7]> {
    let crust = PreviewLayer {
        topping: None,
        overlay: CRUST_OVERLAY,
        geometry: OverlayGeometry::FULL,
    };

    std::iter::once(crust)
        .chain(pizza.placed_toppings().map(|(topping, placement)| PreviewLayer {
            topping: Some(topping),
            overlay: topping.overlay(),
            geometry: OverlayGeometry::for_placement(placement),
        }))
        .collect()
}
