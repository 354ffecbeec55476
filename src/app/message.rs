// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Application messages: events, user actions, and internal signals.

use std::path::PathBuf;

use cosmic::iced::keyboard::Modifiers;

#[derive(Debug, Clone)]
pub enum AppMessage {
    // File / navigation.
    OpenFolder,
    FolderChosen(Option<PathBuf>),
    NextImage,
    PrevImage,

    // View / zoom.
    ZoomIn,
    ZoomOut,
    ZoomReset,

    // Crop marker.
    CropDragStart { x: i32, y: i32 },
    CropDragMove { x: i32, y: i32 },
    CropDragEnd,

    // Input state.
    ModifiersChanged(Modifiers),
}
