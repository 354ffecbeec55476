// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/footer.rs
//
// Bottom bar with navigation buttons and the folder picker.

use cosmic::Element;
use cosmic::iced::{Alignment, Length};
use cosmic::iced_widget::row;
use cosmic::widget::{button, text};

use crate::app::{AppMessage, AppModel};
use crate::constant::FOOTER_SPACING;
use crate::fl;

pub fn view(model: &AppModel) -> Element<'_, AppMessage> {
    let prev = button::standard(fl!("previous"))
        .width(Length::Fill)
        .on_press(AppMessage::PrevImage);
    let next = button::standard(fl!("next"))
        .width(Length::Fill)
        .on_press(AppMessage::NextImage);
    let open = button::suggested(fl!("open-folder"))
        .width(Length::Fill)
        .on_press(AppMessage::OpenFolder);

    let position = match model.position() {
        Some((current, total)) => fl!("position", current = current, total = total),
        None => String::new(),
    };

    row![prev, next, open, text(position)]
        .spacing(FOOTER_SPACING)
        .padding(FOOTER_SPACING)
        .align_y(Alignment::Center)
        .into()
}
