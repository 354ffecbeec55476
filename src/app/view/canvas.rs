// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/canvas.rs
//
// Render the center canvas area with the current image.

use cosmic::Element;
use cosmic::iced::{ContentFit, Length};
use cosmic::iced_widget::scrollable::{Direction, Scrollbar};
use cosmic::iced_widget::{image, scrollable, stack};
use cosmic::widget::{container, text};

use super::crop::canvas_overlay;
use crate::app::{AppMessage, AppModel};
use crate::fl;

/// Render the center canvas area with the current image.
#[allow(clippy::cast_precision_loss)]
pub fn view(model: &AppModel) -> Element<'_, AppMessage> {
    let content: Element<'_, AppMessage> = if let Some(rendered) = &model.rendered {
        let img = image(rendered.handle.clone())
            .content_fit(ContentFit::None)
            .width(Length::Fixed(rendered.width as f32))
            .height(Length::Fixed(rendered.height as f32));

        scrollable(img)
            .direction(Direction::Both {
                vertical: Scrollbar::default(),
                horizontal: Scrollbar::default(),
            })
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    } else {
        let label = model.error.clone().unwrap_or_else(|| fl!("no-image"));
        container(text(label))
            .width(Length::Fill)
            .height(Length::Fill)
            .center(Length::Fill)
            .into()
    };

    stack![content, canvas_overlay(&model.crop, model.modifiers)].into()
}
