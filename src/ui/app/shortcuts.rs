use super::PlannerApp;

impl PlannerApp {
    pub(super) fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        // Alt+O is checked on release to avoid retoggling while held
        let toggle = ctx.input(|i| i.modifiers.alt && i.key_released(egui::Key::O));
        let export = ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::E));

        if toggle {
            self.toggle_order();
        }

        if export {
            self.export_pdf();
        }
    }
}
