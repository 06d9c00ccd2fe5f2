// Main Planner Application
// egui application showing the plan's pages in their current order

mod shortcuts;

use std::path::PathBuf;

use crate::models::plan::{PageOrder, Plan};
use crate::services::imposition;
use crate::services::pdf::{PdfExportOptions, PdfExportService};
use crate::utils::date;

pub struct PlannerApp {
    /// The open plan document
    plan: Plan,
    /// Where the plan was loaded from; PDF exports land next to it
    plan_path: PathBuf,
    /// Transient message shown in the status bar
    status: Option<String>,
}

impl eframe::App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_shortcuts(ctx);
        self.render_header(ctx);
        self.render_status_bar(ctx);
        self.render_pages(ctx);
    }
}

impl PlannerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, plan: Plan, plan_path: PathBuf) -> Self {
        Self {
            plan,
            plan_path,
            status: None,
        }
    }

    fn toggle_order(&mut self) {
        let order = imposition::toggle_plan(&mut self.plan);
        log::info!("Switched page order to {}", order.label());

        self.status = Some(match order {
            PageOrder::Reading => "Reading order".to_string(),
            PageOrder::Booklet => "Booklet order - print double-sided and fold".to_string(),
        });
    }

    fn export_pdf(&mut self) {
        let output = self.plan_path.with_extension("pdf");
        let options = PdfExportOptions {
            title: self.plan.title.clone(),
            ..Default::default()
        };

        match PdfExportService::export_pages(&self.plan.pages, &output, &options) {
            Ok(()) => {
                self.status = Some(format!("Exported {}", output.display()));
            }
            Err(e) => {
                log::error!("Failed to export plan: {e:#}");
                self.status = Some(format!("Export failed: {e}"));
            }
        }
    }

    fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("plan_header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(&self.plan.title);
                ui.separator();
                ui.label(format!("{} pages", self.plan.page_count()));
                ui.separator();
                ui.label(egui::RichText::new(self.plan.order.label()).strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Export PDF (Ctrl+E)").clicked() {
                        self.export_pdf();
                    }
                    if ui.button("Toggle order (Alt+O)").clicked() {
                        self.toggle_order();
                    }
                });
            });
        });
    }

    fn render_status_bar(&mut self, ctx: &egui::Context) {
        let Some(status) = self.status.clone() else {
            return;
        };

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(status);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("Dismiss").clicked() {
                        self.status = None;
                    }
                });
            });
        });
    }

    fn render_pages(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                for page in &self.plan.pages {
                    ui.group(|ui| {
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(page.position.to_string())
                                    .size(20.0)
                                    .strong(),
                            );
                            ui.vertical(|ui| {
                                ui.label(egui::RichText::new(&page.title).size(15.0).strong());
                                if let Some(day_date) = page.date {
                                    ui.label(
                                        egui::RichText::new(date::short_day_label(day_date))
                                            .size(11.0),
                                    );
                                }
                            });
                        });

                        if !page.entries.is_empty() {
                            ui.separator();
                            for entry in &page.entries {
                                ui.label(entry);
                            }
                        }
                    });
                    ui.add_space(6.0);
                }
            });
        });
    }
}
