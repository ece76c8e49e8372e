use eframe::egui;
use egui::{Color32, Id, LayerId, Order, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2, pos2};
use snap_pdf::{DragSignal, HitTest, Point};

use crate::state::{SnapState, Thumbnail};

const THUMB_SIZE: f32 = 140.0;
const THUMB_PADDING: f32 = 4.0;
const REMOVE_BUTTON_SIZE: f32 = 20.0;

/// Thumbnail rectangles from the current frame, in paint order
struct HitMap(Vec<(usize, Rect)>);

impl HitTest for HitMap {
    fn targets_at(&self, point: Point) -> Vec<usize> {
        let pos = pos2(point.x, point.y);
        // Painted last is on top
        self.0
            .iter()
            .rev()
            .filter(|(_, rect)| rect.contains(pos))
            .map(|(index, _)| *index)
            .collect()
    }
}

fn to_point(pos: Pos2) -> Point {
    Point::new(pos.x, pos.y)
}

fn full_uv() -> Rect {
    Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0))
}

/// Largest size with the texture's aspect ratio that fits in `bounds`
fn fit_size(texture: Vec2, bounds: Vec2) -> Vec2 {
    let placement = snap_pdf::fit_to_page(texture.x, texture.y, bounds.x, bounds.y);
    Vec2::new(placement.width, placement.height)
}

pub fn show(ui: &mut egui::Ui, state: &mut SnapState) {
    if state.collection.is_empty() {
        show_empty(ui);
        return;
    }

    let dragging = state.is_dragging();
    let lifted = state.pointer.lifted_index().or(state.touch.lifted_index());
    let floating = state.touch.floating_center().is_some();

    let mut hits = HitMap(Vec::with_capacity(state.collection.len()));
    let mut responses = Vec::with_capacity(state.collection.len());
    let mut remove = None;

    egui::ScrollArea::vertical()
        // Touch scrolling would fight the lifted thumbnail
        .drag_to_scroll(!dragging)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for (index, thumb) in state.collection.iter().enumerate() {
                    let (rect, _) = ui.allocate_exact_size(Vec2::splat(THUMB_SIZE), Sense::hover());
                    let id = Id::new(("thumbnail", thumb.id));
                    let response = ui.interact(rect, id, Sense::click_and_drag());
                    let is_lifted = lifted == Some(index);
                    paint_thumbnail(ui, rect, thumb, is_lifted, is_lifted && floating);

                    let remove_rect = Rect::from_min_size(
                        rect.right_top() + Vec2::new(-REMOVE_BUTTON_SIZE - 2.0, 2.0),
                        Vec2::splat(REMOVE_BUTTON_SIZE),
                    );
                    if ui
                        .put(remove_rect, egui::Button::new("✖").small())
                        .on_hover_text("Remove")
                        .clicked()
                    {
                        remove = Some(index);
                    }

                    hits.0.push((index, rect));
                    responses.push((index, response.on_hover_text(&thumb.item.name)));
                }
            });
        });

    handle_drag(ui, state, &hits, &responses);

    if let Some(index) = remove {
        state.cancel_drag();
        if let Some(thumb) = state.collection.remove_at(index) {
            log::info!("Removed {}", thumb.item.name);
        }
    }

    paint_floating(ui, state);

    if state.is_dragging() {
        ui.ctx().request_repaint();
    }
}

fn handle_drag(
    ui: &egui::Ui,
    state: &mut SnapState,
    hits: &HitMap,
    responses: &[(usize, egui::Response)],
) {
    let touching = ui.input(|i| i.any_touches());

    for (index, response) in responses {
        if !response.drag_started() {
            continue;
        }
        let signal = match response.interact_pointer_pos() {
            Some(pos) if touching => {
                state
                    .touch
                    .touch_start(*index, to_point(pos), &state.collection)
            }
            _ => state.pointer.drag_start(*index, &state.collection),
        };
        // Desktop has no vibration API; the haptic flag is dropped
        if let DragSignal::Lifted { index, .. } = signal {
            log::debug!("Lifted thumbnail {}", index);
        }
    }

    let signal = if state.touch.is_dragging() {
        match ui.input(|i| i.pointer.interact_pos()) {
            Some(pos) => state
                .touch
                .touch_move(to_point(pos), hits, &mut state.collection),
            None => DragSignal::Ignored,
        }
    } else if state.pointer.is_dragging() {
        let target = ui
            .input(|i| i.pointer.hover_pos())
            .and_then(|pos| hits.targets_at(to_point(pos)).first().copied());
        match target {
            Some(target) => state.pointer.drag_enter(target, &mut state.collection),
            None => DragSignal::Ignored,
        }
    } else {
        DragSignal::Ignored
    };

    match signal {
        DragSignal::Moved { from, to } => log::debug!("Moved thumbnail {} -> {}", from, to),
        DragSignal::Cancelled => log::debug!("Drag cancelled"),
        _ => {}
    }

    // Release ends the gesture even if the dragged widget is gone
    if state.is_dragging() && !ui.input(|i| i.pointer.any_down()) {
        let settled = if state.touch.is_dragging() {
            state.touch.touch_end(&state.collection)
        } else {
            state.pointer.drag_end(&state.collection)
        };
        if let DragSignal::Settled { index: Some(index) } = settled {
            log::debug!("Thumbnail settled at {}", index);
        }
    }
}

fn paint_thumbnail(ui: &egui::Ui, rect: Rect, thumb: &Thumbnail, lifted: bool, floating: bool) {
    let visuals = ui.visuals();
    let painter = ui.painter();

    painter.rect_filled(rect, 4.0, visuals.extreme_bg_color);
    let inner = rect.shrink(THUMB_PADDING);

    match &thumb.texture {
        Some(texture) => {
            let size = fit_size(texture.size_vec2(), inner.size());
            let tint = if floating {
                Color32::from_white_alpha(60)
            } else if lifted {
                Color32::from_white_alpha(170)
            } else {
                Color32::WHITE
            };
            painter.image(
                texture.id(),
                Rect::from_center_size(inner.center(), size),
                full_uv(),
                tint,
            );
        }
        None => {
            painter.text(
                inner.center(),
                egui::Align2::CENTER_CENTER,
                &thumb.item.name,
                egui::FontId::proportional(11.0),
                visuals.weak_text_color(),
            );
        }
    }

    if lifted {
        painter.rect_stroke(
            rect,
            4.0,
            Stroke::new(2.0, visuals.selection.stroke.color),
            StrokeKind::Outside,
        );
    }
}

/// The lifted thumbnail follows the finger during a touch drag
fn paint_floating(ui: &egui::Ui, state: &SnapState) {
    let (Some(center), Some(index)) = (state.touch.floating_center(), state.touch.lifted_index())
    else {
        return;
    };
    let Some(texture) = state
        .collection
        .get(index)
        .and_then(|thumb| thumb.texture.as_ref())
    else {
        return;
    };

    let painter = ui
        .ctx()
        .layer_painter(LayerId::new(Order::Tooltip, Id::new("floating_thumbnail")));
    let size = fit_size(texture.size_vec2(), Vec2::splat(THUMB_SIZE));
    painter.image(
        texture.id(),
        Rect::from_center_size(pos2(center.x, center.y), size),
        full_uv(),
        Color32::from_white_alpha(230),
    );
}

fn show_empty(ui: &mut egui::Ui) {
    let hovering_files = ui.input(|i| !i.raw.hovered_files.is_empty());

    ui.centered_and_justified(|ui| {
        ui.vertical_centered(|ui| {
            if hovering_files {
                ui.heading("Drop to add");
            } else {
                ui.heading("No Images");
                ui.label("Drop photos here or use 'Browse files'");
            }
        });
    });
}
