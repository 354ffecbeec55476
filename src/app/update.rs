// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/update.rs
//
// Message handling: applies each message to the model.

use std::path::PathBuf;

use cosmic::{Action, Task};

use super::{AppMessage, AppModel, GlimpseApp};
use crate::fl;

pub enum UpdateResult {
    None,
    Task(Task<Action<AppMessage>>),
}

pub fn update(app: &mut GlimpseApp, message: &AppMessage) -> UpdateResult {
    if let AppMessage::OpenFolder = message {
        let start_dir = app
            .model
            .images
            .directory()
            .map(PathBuf::from)
            .or_else(|| app.config.default_image_dir.clone());
        return UpdateResult::Task(pick_folder(start_dir));
    }

    apply(&mut app.model, message);
    UpdateResult::None
}

/// Apply a message that only touches the model.
pub fn apply(model: &mut AppModel, message: &AppMessage) {
    match message {
        AppMessage::OpenFolder => {}
        AppMessage::FolderChosen(Some(path)) => {
            model.open_directory(path);
        }
        AppMessage::FolderChosen(None) => {
            log::debug!("Folder selection cancelled");
        }
        AppMessage::NextImage => model.next_image(),
        AppMessage::PrevImage => model.prev_image(),

        AppMessage::ZoomIn => model.zoom_in(),
        AppMessage::ZoomOut => model.zoom_out(),
        AppMessage::ZoomReset => model.zoom_reset(),

        AppMessage::CropDragStart { x, y } => model.crop.start(*x, *y),
        AppMessage::CropDragMove { x, y } => model.crop.update(*x, *y),
        AppMessage::CropDragEnd => model.crop.finish(),

        AppMessage::ModifiersChanged(modifiers) => model.modifiers = *modifiers,
    }
}

/// Open the native folder chooser; the answer comes back as `FolderChosen`.
fn pick_folder(start_dir: Option<PathBuf>) -> Task<Action<AppMessage>> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().set_title(fl!("select-folder"));
            if let Some(dir) = start_dir.filter(|dir| dir.is_dir()) {
                dialog = dialog.set_directory(dir);
            }
            dialog
                .pick_folder()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        |path| Action::App(AppMessage::FolderChosen(path)),
    )
}
