// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/tracker.rs
//
// Circular crop marker state: idle, or active and following the pointer.

use crate::constant::CROP_RADIUS;

/// Circular region marked on the image area, in widget coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRegion {
    pub center_x: i32,
    pub center_y: i32,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum CropState {
    #[default]
    Idle,
    Active {
        center_x: i32,
        center_y: i32,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CropTracker {
    state: CropState,
}

impl CropTracker {
    /// Begin tracking at the press position. Replaces any active region.
    pub fn start(&mut self, x: i32, y: i32) {
        self.state = CropState::Active {
            center_x: x,
            center_y: y,
        };
    }

    /// Move the centre to the pointer. Ignored while idle.
    pub fn update(&mut self, x: i32, y: i32) {
        if let CropState::Active { center_x, center_y } = &mut self.state {
            *center_x = x;
            *center_y = y;
        }
    }

    /// Stop tracking.
    pub fn finish(&mut self) {
        self.state = CropState::Idle;
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, CropState::Active { .. })
    }

    /// The region to draw, present only while active.
    pub fn region(&self) -> Option<CropRegion> {
        match self.state {
            CropState::Active { center_x, center_y } => Some(CropRegion {
                center_x,
                center_y,
                radius: CROP_RADIUS,
            }),
            CropState::Idle => None,
        }
    }
}
