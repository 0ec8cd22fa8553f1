use egui::{Color32, Pos2, Rect, pos2, vec2};

use crate::app::ColorInkApp;
use crate::input::{CanvasAction, PointerSnapshot, TouchPhase};
use crate::render;

/// The coloring surface: zone discs composited beneath the line-art texture,
/// with tap-to-paint and pinch/pan zoom handled by the gesture interpreter.
pub fn canvas_panel(app: &mut ColorInkApp, ctx: &egui::Context, now: f64) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (session, canvas) = match (app.session.as_mut(), app.canvas.as_mut()) {
            (Some(session), Some(canvas)) => (session, canvas),
            _ => {
                ui.centered_and_justified(|ui| {
                    ui.label(app.load_error.as_deref().unwrap_or("Dibujo no encontrado"));
                });
                return;
            }
        };

        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let rect = response.rect;
        let painter = painter.with_clip_rect(rect);

        // Raw pointer events, shifted into canvas-local coordinates. New
        // touches that begin outside the canvas never enter a sequence.
        let mut snapshot = PointerSnapshot::gather(ctx, now);
        snapshot.touches.retain(|touch| {
            touch.phase != TouchPhase::Started || rect.contains(touch.pos)
        });
        for touch in &mut snapshot.touches {
            touch.pos -= rect.min.to_vec2();
        }

        // Zone keys live in texture pixel space; the panel fit is a
        // display-only factor, so painted zones stay put when the panel is
        // resized or the side panel is hidden.
        let fit = fit_scale(canvas.image_width, rect.width());
        for action in canvas.interpreter.handle(&snapshot) {
            match action {
                CanvasAction::Paint(pos) => {
                    if let Some(p) =
                        texture_point(pos, fit, canvas.image_width, canvas.image_height)
                    {
                        session.apply_color(p.x, p.y, &app.selected_color, now);
                    }
                }
                CanvasAction::ViewChanged | CanvasAction::ViewReset => {}
            }
        }

        // Compose: color layer first, line art on top so the ink keeps
        // containing the color visually.
        let transform = canvas.interpreter.transform();
        let origin = rect.min + transform.translation;
        let scale = fit * transform.scale;
        for disc in render::discs(session.engine().zones()) {
            painter.circle_filled(
                origin + disc.center.to_vec2() * scale,
                disc.radius * scale,
                disc.fill,
            );
        }
        let image_rect = Rect::from_min_size(
            origin,
            vec2(canvas.image_width, canvas.image_height) * scale,
        );
        painter.image(
            canvas.texture.id(),
            image_rect,
            Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
            Color32::WHITE,
        );
    });

    if app.zen_mode {
        zen_overlay(app, ctx);
    }
}

/// Texture pixels to on-screen points at identity zoom: the drawing is
/// fitted to the panel width.
fn fit_scale(image_width: f32, rect_width: f32) -> f32 {
    rect_width / image_width.max(1.0)
}

/// Map a tapped point (panel-fitted, zoom already inverted) to texture pixel
/// space, or `None` when it falls outside the drawing.
fn texture_point(pos: Pos2, fit: f32, width: f32, height: f32) -> Option<Pos2> {
    let p = pos2(pos.x / fit, pos.y / fit);
    (p.x >= 0.0 && p.y >= 0.0 && p.x <= width && p.y <= height).then_some(p)
}

/// Minimal chrome while zen mode hides the panels: zone count and an exit
/// button floating over the canvas.
fn zen_overlay(app: &mut ColorInkApp, ctx: &egui::Context) {
    egui::Area::new(egui::Id::new("zen_overlay"))
        .anchor(egui::Align2::RIGHT_TOP, vec2(-12.0, 12.0))
        .show(ctx, |ui| {
            let zones = app
                .session
                .as_ref()
                .map(|s| s.engine().zones().len())
                .unwrap_or(0);
            ui.horizontal(|ui| {
                ui.label(format!("{zones} zonas"));
                if ui.button("Salir zen").clicked() {
                    app.zen_mode = false;
                }
            });
        });
}
