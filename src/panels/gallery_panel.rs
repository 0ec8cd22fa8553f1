use crate::app::{ColorInkApp, gallery_drawings};

/// Home screen: the drawing catalog plus the gallery of completed works.
pub fn gallery_panel(app: &mut ColorInkApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("ColorInk");
        if let Some(error) = app.load_error.clone() {
            ui.colored_label(egui::Color32::RED, error);
        }
        ui.separator();

        ui.strong("Dibujos");
        let mut open_request = None;
        for drawing in gallery_drawings() {
            ui.horizontal(|ui| {
                ui.label(drawing.title);
                ui.weak(drawing.difficulty.label());
                if ui.button("Colorear").clicked() {
                    open_request = Some(drawing);
                }
            });
        }
        if let Some(drawing) = open_request {
            app.open_drawing(drawing, ctx);
        }

        ui.separator();
        ui.strong(format!(
            "Galería ({} obras, {} completadas en total)",
            app.state.colored_works().len(),
            app.state.settings().works_completed
        ));

        let mut delete_request = None;
        egui::ScrollArea::vertical().show(ui, |ui| {
            for work in app.state.colored_works() {
                ui.horizontal(|ui| {
                    ui.label(&work.drawing_title);
                    ui.weak(format!("{} zonas", work.zones.len()));
                    if ui.button("🗑").clicked() {
                        delete_request = Some(work.id.clone());
                    }
                });
            }
        });
        if let Some(id) = delete_request {
            app.state.remove_colored_work(&app.store, &id);
        }
    });
}
