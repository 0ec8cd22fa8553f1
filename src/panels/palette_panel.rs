use egui::{Button, Color32, vec2};

use crate::app::ColorInkApp;
use crate::color;
use crate::palette;

#[derive(Clone, Copy)]
enum HeaderAction {
    Back,
    Complete,
    Reset,
    Undo,
    Redo,
    Zen,
}

/// Header bar for the coloring screen: back, undo/redo, reset, complete.
pub fn coloring_header(app: &mut ColorInkApp, ctx: &egui::Context) {
    let (title, zones, can_undo, can_redo) = match app.session.as_ref() {
        Some(session) => (
            session.drawing().title,
            session.engine().zones().len(),
            session.engine().can_undo(),
            session.engine().can_redo(),
        ),
        None => return,
    };

    let mut action = None;
    egui::TopBottomPanel::top("coloring_header").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("← Volver").clicked() {
                action = Some(HeaderAction::Back);
            }
            ui.label(title);
            ui.weak(format!("{zones} zonas"));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(zones > 0, Button::new("✓ Completar"))
                    .clicked()
                {
                    action = Some(HeaderAction::Complete);
                }
                if ui.button("🗑").clicked() {
                    action = Some(HeaderAction::Reset);
                }
                if ui.add_enabled(can_redo, Button::new("↪")).clicked() {
                    action = Some(HeaderAction::Redo);
                }
                if ui.add_enabled(can_undo, Button::new("↩")).clicked() {
                    action = Some(HeaderAction::Undo);
                }
                if ui.button("🧘").clicked() {
                    action = Some(HeaderAction::Zen);
                }
            });
        });
    });

    let now = crate::util::time::now_secs();
    match action {
        Some(HeaderAction::Back) => app.close_drawing(),
        Some(HeaderAction::Complete) => app.complete_drawing(),
        Some(HeaderAction::Reset) => {
            if let Some(session) = app.session.as_mut() {
                session.reset(now);
            }
        }
        Some(HeaderAction::Undo) => {
            if let Some(session) = app.session.as_mut() {
                session.undo(now);
            }
        }
        Some(HeaderAction::Redo) => {
            if let Some(session) = app.session.as_mut() {
                session.redo(now);
            }
        }
        Some(HeaderAction::Zen) => app.zen_mode = true,
        None => {}
    }
}

/// Side panel: active color, recent colors, palette catalog with the
/// rewarded-ad unlock placeholder, and the active palette's color grid.
pub fn palette_panel(app: &mut ColorInkApp, ctx: &egui::Context) {
    egui::SidePanel::right("palette_panel")
        .resizable(false)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Colores");
            ui.horizontal(|ui| {
                ui.label("Activo:");
                color_swatch(ui, &app.selected_color, true);
            });

            let recents: Vec<String> = app
                .session
                .as_ref()
                .map(|s| s.engine().recent_colors().to_vec())
                .unwrap_or_default();
            if !recents.is_empty() {
                ui.separator();
                ui.label("Recientes");
                ui.horizontal_wrapped(|ui| {
                    for hex in &recents {
                        if color_button(ui, hex, *hex == app.selected_color).clicked() {
                            app.selected_color = hex.clone();
                        }
                    }
                });
            }

            ui.separator();
            let mut unlock_request = None;
            for entry in palette::palettes() {
                let unlocked = !entry.premium || app.state.is_palette_unlocked(entry.id);
                let selected = app.active_palette == entry.id;
                ui.horizontal(|ui| {
                    let label = if unlocked {
                        entry.name.to_owned()
                    } else {
                        format!("🔒 {}", entry.name)
                    };
                    if ui.selectable_label(selected, label).clicked() && unlocked {
                        app.active_palette = entry.id.to_owned();
                    }
                    if !unlocked && ui.small_button("Ver anuncio").clicked() {
                        unlock_request = Some(entry.id);
                    }
                });
            }
            if let Some(id) = unlock_request {
                // Simulated rewarded ad: the unlock is granted immediately.
                app.state.unlock_palette(&app.store, id);
                app.state
                    .update_settings(&app.store, |s| s.ads_count += 1);
            }

            ui.separator();
            let active = palette::palette_by_id(&app.active_palette);
            ui.horizontal_wrapped(|ui| {
                for hex in active.colors {
                    if color_button(ui, hex, *hex == app.selected_color).clicked() {
                        app.selected_color = (*hex).to_owned();
                    }
                }
            });

            ui.separator();
            custom_color_picker(app, ui);
        });
}

/// HSV sliders for colors outside the palette catalog.
fn custom_color_picker(app: &mut ColorInkApp, ui: &mut egui::Ui) {
    ui.label("Color personalizado");
    ui.add(egui::Slider::new(&mut app.custom_hsv.0, 0.0..=1.0).text("Tono"));
    ui.add(egui::Slider::new(&mut app.custom_hsv.1, 0.0..=1.0).text("Saturación"));
    ui.add(egui::Slider::new(&mut app.custom_hsv.2, 0.0..=1.0).text("Brillo"));

    let (h, s, v) = app.custom_hsv;
    let hex = color::hsv_to_hex(h, s, v);
    ui.horizontal(|ui| {
        if color_button(ui, &hex, hex == app.selected_color).clicked() {
            app.selected_color = hex.clone();
        }
        ui.weak(&hex);
    });
}

/// Interstitial placeholder shown after every third completed work.
pub fn interstitial_window(app: &mut ColorInkApp, ctx: &egui::Context) {
    egui::Window::new("Anuncio")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label("Aquí iría un anuncio. ¡Gracias por colorear!");
            if ui.button("Cerrar").clicked() {
                app.show_interstitial = false;
                app.state.update_settings(&app.store, |s| s.ads_count += 1);
            }
        });
}

fn color_button(ui: &mut egui::Ui, hex: &str, selected: bool) -> egui::Response {
    let fill = color::to_color32(hex).unwrap_or(Color32::BLACK);
    let stroke = if selected {
        // Contrast the selection ring against light swatches.
        let ring = if color::is_light_color(hex) {
            Color32::BLACK
        } else {
            Color32::WHITE
        };
        egui::Stroke::new(2.0, ring)
    } else {
        egui::Stroke::NONE
    };
    ui.add(Button::new("").fill(fill).stroke(stroke).min_size(vec2(22.0, 22.0)))
}

fn color_swatch(ui: &mut egui::Ui, hex: &str, large: bool) {
    let fill = color::to_color32(hex).unwrap_or(Color32::BLACK);
    let size = if large { vec2(34.0, 24.0) } else { vec2(22.0, 22.0) };
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    ui.painter().rect_filled(rect, 4.0, fill);
}
