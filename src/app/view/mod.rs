// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/mod.rs
//
// View composition: image canvas and footer controls.

pub mod canvas;
pub mod crop;
pub mod footer;

use cosmic::Element;

use crate::app::{AppMessage, AppModel};

pub fn view(model: &AppModel) -> Element<'_, AppMessage> {
    canvas::view(model)
}
