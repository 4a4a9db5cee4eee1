use serde::{Deserialize, Serialize};

/// Half the rendered square's edge, so a dropped square centers on the pointer.
pub const SQUARE_HALF_EXTENT: f64 = 25.0;

/// Pointer position at drop time, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DropPoint {
    pub x: f64,
    pub y: f64,
}

/// Bounding rect of the plot the square was dropped on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub height: f64,
}

/// Square origin inside the plot plus the two preference scores it encodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub top: f64,
    pub left: f64,
    pub likability: f64,
    pub apply_likelihood: f64,
}

impl Placement {
    /// Horizontal position is likability; vertical position, measured up
    /// from the bottom of the plot, is apply likelihood.
    pub fn from_drop(drop: DropPoint, container: ContainerRect) -> Self {
        let left = drop.x - container.left - SQUARE_HALF_EXTENT;
        let top = drop.y - container.top - SQUARE_HALF_EXTENT;

        Self {
            top,
            left,
            likability: left,
            apply_likelihood: container.height - top,
        }
    }
}
