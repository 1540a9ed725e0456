//! Picker card component
//!
//! Paints a `PickerRender` on a canvas: rounded black card, soft shadow,
//! three labels. The whole card is scaled around its center and the text
//! is blurred by compositing it at a few weighted offsets.
//!
//! Clicks are hit-tested against the left, middle and right third of the
//! card and published as `Message::Activate`. Disabled neighbors swallow
//! nothing and publish nothing.

use iced::widget::canvas::{self, Frame, Geometry, Path, Text};
use iced::widget::{Canvas, container};
use iced::{Element, Fill, Font, Point, Rectangle, Renderer, Size, Theme, Vector, mouse};

use crate::app::Message;
use crate::features::picker::Slot;
use crate::ui::render::{PickerRender, SlotLabel, TripleLayer};
use crate::ui::theme;

pub const CARD_WIDTH: f32 = 240.0;
pub const CARD_HEIGHT: f32 = 100.0;
const CARD_RADIUS: f32 = 20.0;
const CARD_PADDING: f32 = 16.0;

/// Canvas is larger than the card so the shadow and the scale peak fit
const CANVAS_WIDTH: f32 = 300.0;
const CANVAS_HEIGHT: f32 = 170.0;

/// Shadow layers approximating an 8px elevation
const SHADOW_LAYERS: u32 = 4;
const SHADOW_OFFSET_Y: f32 = 4.0;

/// Inset of the hover highlight inside a slot's third of the card
const HIGHLIGHT_INSET: f32 = 10.0;

/// Below this radius text is drawn once, unblurred
const MIN_BLUR: f32 = 0.5;

/// Offsets and weights used to fake a gaussian blur of `radius`
///
/// One center tap plus two rings of eight taps at `radius / 2` and
/// `radius`. Weights sum to 1.
pub fn blur_taps(radius: f32) -> Vec<(Vector, f32)> {
    if radius < MIN_BLUR {
        return vec![(Vector::new(0.0, 0.0), 1.0)];
    }

    let sigma = radius / 2.0;
    let gaussian = |distance: f32| (-(distance * distance) / (2.0 * sigma * sigma)).exp();

    let mut taps = vec![(Vector::new(0.0, 0.0), 1.0)];
    for ring in [radius / 2.0, radius] {
        let weight = gaussian(ring);
        for step in 0..8 {
            let angle = step as f32 * std::f32::consts::FRAC_PI_4;
            taps.push((Vector::new(angle.cos() * ring, angle.sin() * ring), weight));
        }
    }

    let total: f32 = taps.iter().map(|(_, w)| w).sum();
    for (_, weight) in &mut taps {
        *weight /= total;
    }
    taps
}

/// Card rectangle inside canvas bounds of `size`
fn card_rect(size: Size) -> Rectangle {
    Rectangle::new(
        Point::new(
            (size.width - CARD_WIDTH) / 2.0,
            (size.height - CARD_HEIGHT) / 2.0,
        ),
        Size::new(CARD_WIDTH, CARD_HEIGHT),
    )
}

/// Slot under `position` (canvas-relative), `None` outside the card
pub fn slot_at(position: Point, size: Size) -> Option<Slot> {
    let card = card_rect(size);
    if !card.contains(position) {
        return None;
    }
    let third = card.width / 3.0;
    let x = position.x - card.x;
    Some(if x < third {
        Slot::Previous
    } else if x < third * 2.0 {
        Slot::Center
    } else {
        Slot::Next
    })
}

/// Hit region of `slot` relative to the card's top-left corner
fn slot_region(slot: Slot) -> Rectangle {
    let third = CARD_WIDTH / 3.0;
    let index = match slot {
        Slot::Previous => 0.0,
        Slot::Center => 1.0,
        Slot::Next => 2.0,
    };
    Rectangle::new(Point::new(third * index, 0.0), Size::new(third, CARD_HEIGHT))
}

/// Hover bookkeeping kept by the canvas between events
#[derive(Debug, Default)]
pub struct CardState {
    hovered: Option<Slot>,
}

struct PickerCard {
    render: PickerRender,
}

impl PickerCard {
    /// Slot a left click at `position` activates; empty neighbors take no clicks
    fn clicked_slot(&self, position: Option<Point>, size: Size) -> Option<Slot> {
        position
            .and_then(|position| slot_at(position, size))
            .filter(|slot| self.render.accepts(*slot))
    }

    /// Neighbor that shows a highlight and a pointer under `position`
    fn hovered_slot(&self, position: Option<Point>, size: Size) -> Option<Slot> {
        self.clicked_slot(position, size)
            .filter(|slot| *slot != Slot::Center)
    }

    fn draw_shadow(&self, frame: &mut Frame) {
        for layer in 1..=SHADOW_LAYERS {
            let spread = layer as f32 * 2.0;
            let shadow = Path::rounded_rectangle(
                Point::new(-spread, SHADOW_OFFSET_Y - spread),
                Size::new(CARD_WIDTH + spread * 2.0, CARD_HEIGHT + spread * 2.0),
                (CARD_RADIUS + spread).into(),
            );
            frame.fill(
                &shadow,
                theme::with_opacity(theme::SHADOW, 1.0 / SHADOW_LAYERS as f32),
            );
        }
    }

    fn draw_highlight(&self, frame: &mut Frame, label: &SlotLabel) {
        if label.highlight <= 0.0 {
            return;
        }
        let region = slot_region(label.slot);
        let highlight = Path::rounded_rectangle(
            Point::new(region.x + HIGHLIGHT_INSET, region.y + HIGHLIGHT_INSET),
            Size::new(
                region.width - HIGHLIGHT_INSET * 2.0,
                region.height - HIGHLIGHT_INSET * 2.0,
            ),
            (CARD_RADIUS - HIGHLIGHT_INSET).into(),
        );
        frame.fill(
            &highlight,
            theme::with_opacity(theme::HOVER_HIGHLIGHT, label.highlight),
        );
    }

    fn draw_label(&self, frame: &mut Frame, label: &SlotLabel, alpha: f32, taps: &[(Vector, f32)]) {
        if label.text.is_empty() || alpha <= 0.0 {
            return;
        }

        let (x, align_x) = match label.slot {
            Slot::Previous => (CARD_PADDING, iced::alignment::Horizontal::Left),
            Slot::Center => (CARD_WIDTH / 2.0, iced::alignment::Horizontal::Center),
            Slot::Next => (CARD_WIDTH - CARD_PADDING, iced::alignment::Horizontal::Right),
        };
        let font = if label.bold {
            Font {
                weight: theme::BOLD_WEIGHT,
                ..Font::DEFAULT
            }
        } else {
            Font::DEFAULT
        };

        for (offset, weight) in taps {
            frame.fill_text(Text {
                content: label.text.clone(),
                position: Point::new(x + offset.x, CARD_HEIGHT / 2.0 + offset.y),
                color: theme::with_opacity(label.color, label.opacity * alpha * weight),
                size: iced::Pixels(label.size),
                font,
                align_x: align_x.into(),
                align_y: iced::alignment::Vertical::Center,
                ..Text::default()
            });
        }
    }

    fn draw_layer(&self, frame: &mut Frame, layer: &TripleLayer, taps: &[(Vector, f32)]) {
        for label in &layer.labels {
            self.draw_label(frame, label, layer.alpha, taps);
        }
    }
}

impl canvas::Program<Message> for PickerCard {
    type State = CardState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        let position = cursor.position_in(bounds);

        match event {
            iced::Event::Mouse(mouse::Event::CursorMoved { .. })
            | iced::Event::Mouse(mouse::Event::CursorLeft) => {
                let hovered = self.hovered_slot(position, bounds.size());
                if hovered == state.hovered {
                    return None;
                }
                state.hovered = hovered;
                Some(canvas::Action::publish(Message::SlotHovered(hovered)))
            }
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let slot = self.clicked_slot(position, bounds.size())?;
                Some(canvas::Action::publish(Message::Activate(slot)).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let card = card_rect(bounds.size());
        let taps = blur_taps(self.render.blur);

        frame.with_save(|frame| {
            // Scale around the card center, then work in card coordinates
            frame.translate(Vector::new(card.center_x(), card.center_y()));
            frame.scale(self.render.scale);
            frame.translate(Vector::new(-CARD_WIDTH / 2.0, -CARD_HEIGHT / 2.0));

            self.draw_shadow(frame);
            let body = Path::rounded_rectangle(
                Point::ORIGIN,
                Size::new(CARD_WIDTH, CARD_HEIGHT),
                CARD_RADIUS.into(),
            );
            frame.fill(&body, theme::CARD);

            for label in &self.render.current().labels {
                self.draw_highlight(frame, label);
            }
            for layer in &self.render.layers {
                self.draw_layer(frame, layer, &taps);
            }
        });

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        match self.hovered_slot(cursor.position_in(bounds), bounds.size()) {
            Some(_) => mouse::Interaction::Pointer,
            None => mouse::Interaction::default(),
        }
    }
}

/// Build the picker card centered on the page
pub fn view(render: PickerRender) -> Element<'static, Message> {
    let canvas = Canvas::new(PickerCard { render })
        .width(CANVAS_WIDTH)
        .height(CANVAS_HEIGHT);

    container(canvas)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .style(|theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(theme::background(theme))),
            ..Default::default()
        })
        .into()
}
