// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/overlay.rs
//
// Input layer over the image area: crop marker drag, wheel zoom, marker drawing.

use cosmic::{
    Element, Renderer,
    iced::{
        Border, Length, Point, Rectangle, Size,
        advanced::{
            Clipboard, Layout, Shell, Widget,
            layout::{Limits, Node},
            renderer::{Quad, Renderer as QuadRenderer},
            widget::Tree,
        },
        event::{Event, Status},
        keyboard::Modifiers,
        mouse::{self, Button, Cursor, ScrollDelta},
    },
};

use super::tracker::{CropRegion, CropTracker};
use crate::app::AppMessage;
use crate::constant::CROP_OVERLAY_COLOR;

/// Whether a button press starts a crop marker drag.
pub fn starts_crop(button: Button, modifiers: Modifiers) -> bool {
    button == Button::Left && modifiers.control()
}

/// Map a wheel delta to a zoom message; upward scrolling zooms in.
fn zoom_for_scroll(delta: ScrollDelta) -> Option<AppMessage> {
    let y = match delta {
        ScrollDelta::Lines { y, .. } | ScrollDelta::Pixels { y, .. } => y,
    };

    if y > 0.0 {
        Some(AppMessage::ZoomIn)
    } else if y < 0.0 {
        Some(AppMessage::ZoomOut)
    } else {
        None
    }
}

#[allow(clippy::cast_possible_truncation)]
fn to_widget_coords(bounds: Rectangle, position: Point) -> (i32, i32) {
    ((position.x - bounds.x) as i32, (position.y - bounds.y) as i32)
}

pub struct CanvasOverlay {
    crop: CropTracker,
    modifiers: Modifiers,
}

impl CanvasOverlay {
    pub fn new(crop: &CropTracker, modifiers: Modifiers) -> Self {
        Self {
            crop: *crop,
            modifiers,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn marker_bounds(bounds: Rectangle, region: CropRegion) -> Rectangle {
        let r = region.radius;
        Rectangle::new(
            Point::new(
                bounds.x + region.center_x as f32 - r,
                bounds.y + region.center_y as f32 - r,
            ),
            Size::new(r * 2.0, r * 2.0),
        )
    }

    /// Decide which message, if any, an input event produces.
    fn route(
        &self,
        event: &Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (Status, Option<AppMessage>) {
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(button))
                if starts_crop(*button, self.modifiers) =>
            {
                if let Some(pos) = cursor.position_over(bounds) {
                    let (x, y) = to_widget_coords(bounds, pos);
                    return (Status::Captured, Some(AppMessage::CropDragStart { x, y }));
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                // The marker keeps following the pointer outside the image area.
                if self.crop.is_active() {
                    let (x, y) = to_widget_coords(bounds, *position);
                    return (Status::Captured, Some(AppMessage::CropDragMove { x, y }));
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(Button::Left)) => {
                if self.crop.is_active() {
                    return (Status::Captured, Some(AppMessage::CropDragEnd));
                }
            }
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                if cursor.is_over(bounds) {
                    return (Status::Captured, zoom_for_scroll(*delta));
                }
            }
            _ => {}
        }

        (Status::Ignored, None)
    }
}

impl Widget<AppMessage, cosmic::Theme, Renderer> for CanvasOverlay {
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(&self, _tree: &mut Tree, _renderer: &Renderer, limits: &Limits) -> Node {
        Node::new(limits.max())
    }

    fn draw(
        &self,
        _tree: &Tree,
        renderer: &mut Renderer,
        _theme: &cosmic::Theme,
        _style: &cosmic::iced::advanced::renderer::Style,
        layout: Layout<'_>,
        _cursor: Cursor,
        _viewport: &Rectangle,
    ) {
        let Some(region) = self.crop.region() else {
            return;
        };

        // A quad with full corner radius renders as a filled circle.
        renderer.fill_quad(
            Quad {
                bounds: Self::marker_bounds(layout.bounds(), region),
                border: Border {
                    radius: region.radius.into(),
                    ..Border::default()
                },
                ..Quad::default()
            },
            CROP_OVERLAY_COLOR,
        );
    }

    fn on_event(
        &mut self,
        _tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, AppMessage>,
        _viewport: &Rectangle,
    ) -> Status {
        let (status, message) = self.route(&event, layout.bounds(), cursor);
        if let Some(message) = message {
            shell.publish(message);
        }
        status
    }

    fn mouse_interaction(
        &self,
        _tree: &Tree,
        _layout: Layout<'_>,
        _cursor: Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        if self.crop.is_active() {
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a> From<CanvasOverlay> for Element<'a, AppMessage> {
    fn from(overlay: CanvasOverlay) -> Self {
        Self::new(overlay)
    }
}

pub fn canvas_overlay(crop: &CropTracker, modifiers: Modifiers) -> CanvasOverlay {
    CanvasOverlay::new(crop, modifiers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crop_needs_primary_button_and_control() {
        assert!(starts_crop(Button::Left, Modifiers::CTRL));
        assert!(starts_crop(Button::Left, Modifiers::CTRL | Modifiers::SHIFT));
        assert!(!starts_crop(Button::Left, Modifiers::empty()));
        assert!(!starts_crop(Button::Left, Modifiers::SHIFT));
        assert!(!starts_crop(Button::Right, Modifiers::CTRL));
    }

    #[test]
    fn wheel_direction_maps_to_zoom() {
        assert!(matches!(
            zoom_for_scroll(ScrollDelta::Lines { x: 0.0, y: 1.0 }),
            Some(AppMessage::ZoomIn)
        ));
        assert!(matches!(
            zoom_for_scroll(ScrollDelta::Pixels { x: 0.0, y: -12.0 }),
            Some(AppMessage::ZoomOut)
        ));
        assert!(zoom_for_scroll(ScrollDelta::Lines { x: 3.0, y: 0.0 }).is_none());
    }

    #[test]
    fn marker_is_centred_on_region() {
        let bounds = Rectangle::new(Point::new(10.0, 20.0), Size::new(800.0, 600.0));
        let region = CropRegion {
            center_x: 150,
            center_y: 150,
            radius: 100.0,
        };

        let marker = CanvasOverlay::marker_bounds(bounds, region);
        assert_eq!(marker.x, 60.0);
        assert_eq!(marker.y, 70.0);
        assert_eq!(marker.width, 200.0);
        assert_eq!(marker.height, 200.0);
    }

    fn area() -> Rectangle {
        Rectangle::new(Point::new(0.0, 0.0), Size::new(400.0, 300.0))
    }

    fn press(button: Button) -> Event {
        Event::Mouse(mouse::Event::ButtonPressed(button))
    }

    fn release(button: Button) -> Event {
        Event::Mouse(mouse::Event::ButtonReleased(button))
    }

    fn active_tracker() -> CropTracker {
        let mut crop = CropTracker::default();
        crop.start(50, 50);
        crop
    }

    #[test]
    fn ctrl_press_inside_starts_drag() {
        let overlay = CanvasOverlay::new(&CropTracker::default(), Modifiers::CTRL);
        let cursor = Cursor::Available(Point::new(150.0, 120.0));

        let (status, message) = overlay.route(&press(Button::Left), area(), cursor);
        assert_eq!(status, Status::Captured);
        assert!(matches!(
            message,
            Some(AppMessage::CropDragStart { x: 150, y: 120 })
        ));
    }

    #[test]
    fn ctrl_press_outside_does_not_start_drag() {
        let overlay = CanvasOverlay::new(&CropTracker::default(), Modifiers::CTRL);
        let cursor = Cursor::Available(Point::new(500.0, 120.0));

        let (status, message) = overlay.route(&press(Button::Left), area(), cursor);
        assert_eq!(status, Status::Ignored);
        assert!(message.is_none());

        let (status, message) = overlay.route(&press(Button::Left), area(), Cursor::Unavailable);
        assert_eq!(status, Status::Ignored);
        assert!(message.is_none());
    }

    #[test]
    fn plain_press_is_left_to_the_image() {
        let overlay = CanvasOverlay::new(&CropTracker::default(), Modifiers::empty());
        let cursor = Cursor::Available(Point::new(150.0, 120.0));

        let (status, message) = overlay.route(&press(Button::Left), area(), cursor);
        assert_eq!(status, Status::Ignored);
        assert!(message.is_none());
    }

    #[test]
    fn only_primary_release_ends_drag() {
        let overlay = CanvasOverlay::new(&active_tracker(), Modifiers::empty());
        let cursor = Cursor::Available(Point::new(150.0, 120.0));

        let (status, message) = overlay.route(&release(Button::Right), area(), cursor);
        assert_eq!(status, Status::Ignored);
        assert!(message.is_none());

        let (status, message) = overlay.route(&release(Button::Left), area(), cursor);
        assert_eq!(status, Status::Captured);
        assert!(matches!(message, Some(AppMessage::CropDragEnd)));
    }

    #[test]
    fn motion_is_forwarded_only_while_active() {
        let moved = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(450.0, -5.0),
        });
        let cursor = Cursor::Available(Point::new(450.0, -5.0));

        let idle = CanvasOverlay::new(&CropTracker::default(), Modifiers::empty());
        assert!(idle.route(&moved, area(), cursor).1.is_none());

        let active = CanvasOverlay::new(&active_tracker(), Modifiers::empty());
        assert!(matches!(
            active.route(&moved, area(), cursor).1,
            Some(AppMessage::CropDragMove { x: 450, y: -5 })
        ));
    }

    #[test]
    fn wheel_outside_area_is_ignored() {
        let overlay = CanvasOverlay::new(&CropTracker::default(), Modifiers::empty());
        let wheel = Event::Mouse(mouse::Event::WheelScrolled {
            delta: ScrollDelta::Lines { x: 0.0, y: 1.0 },
        });

        let inside = Cursor::Available(Point::new(10.0, 10.0));
        assert!(matches!(
            overlay.route(&wheel, area(), inside).1,
            Some(AppMessage::ZoomIn)
        ));

        let outside = Cursor::Available(Point::new(-10.0, 10.0));
        assert_eq!(overlay.route(&wheel, area(), outside).0, Status::Ignored);
    }

    #[test]
    fn positions_are_relative_to_bounds() {
        let bounds = Rectangle::new(Point::new(10.0, 20.0), Size::new(800.0, 600.0));
        assert_eq!(to_widget_coords(bounds, Point::new(160.9, 170.2)), (150, 150));
        assert_eq!(to_widget_coords(bounds, Point::new(0.0, 0.0)), (-10, -20));
    }
}
