use super::core::{Classified, State, UploadState};
use super::main::FreshLens;
use super::view_model::{AdviceView, ChartView, ResultView};
use eframe::egui;
use std::path::PathBuf;

const TITLE: &str = "🥩 FreshLens AI: Quality Assessment for Meat Products";
const SUBTITLE: &str = "Upload an image of meat and the AI will predict its freshness.";

pub struct FreshLensWindow {
    fresh_lens: FreshLens,
    path_input: String,
    preview_texture: Option<(u64, egui::TextureHandle)>,
}

impl FreshLensWindow {
    pub fn new(fresh_lens: FreshLens) -> Self {
        Self {
            fresh_lens,
            path_input: String::new(),
            preview_texture: None,
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped_files = ctx.input(|i| i.raw.dropped_files.clone());

        for file in dropped_files {
            match (file.bytes, file.path) {
                (Some(bytes), _) => self.fresh_lens.upload_bytes(&file.name, bytes),
                (None, Some(path)) => self.fresh_lens.upload_path(&path),
                (None, None) => {}
            }
        }
    }

    fn render(&mut self, ui: &mut egui::Ui) {
        ui.heading(TITLE);
        ui.label(SUBTITLE);
        ui.add_space(10.0);

        match self.fresh_lens.state().clone() {
            State::LoadingModel => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading model...");
                });
            }
            State::ModelLoadFailed { error } => {
                ui.colored_label(
                    egui::Color32::RED,
                    format!("Failed to load model: {}", error),
                );
            }
            State::Ready { upload } => {
                self.render_upload_controls(ui);
                ui.add_space(10.0);
                self.render_upload(ui, upload);
            }
        }
    }

    fn render_upload_controls(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.label("Choose an image...");
            ui.label(
                egui::RichText::new("Drop a JPG or PNG file on the window, or enter its path.")
                    .small(),
            );
            ui.horizontal(|ui| {
                let response = ui.text_edit_singleline(&mut self.path_input);
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                if (ui.button("Classify").clicked() || submitted)
                    && !self.path_input.trim().is_empty()
                {
                    let path = PathBuf::from(self.path_input.trim());
                    self.fresh_lens.upload_path(&path);
                }
            });
        });
    }

    fn render_upload(&mut self, ui: &mut egui::Ui, upload: UploadState) {
        match upload {
            UploadState::AwaitingUpload => {}
            UploadState::Classifying { file_name, .. } => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(format!("Classifying {}...", file_name));
                });
            }
            UploadState::Failed { file_name, error } => {
                ui.colored_label(egui::Color32::RED, format!("{}: {}", file_name, error));
            }
            UploadState::Classified {
                upload_id,
                classified,
                ..
            } => {
                self.render_preview(ui, upload_id, &classified);
                ui.add_space(10.0);
                render_result(ui, &ResultView::new(&classified.result));
            }
        }
    }

    fn render_preview(&mut self, ui: &mut egui::Ui, upload_id: u64, classified: &Classified) {
        let texture = match &self.preview_texture {
            Some((id, texture)) if *id == upload_id => texture.clone(),
            _ => {
                let texture = ui.ctx().load_texture(
                    format!("upload-{}", upload_id),
                    (*classified.preview.image).clone(),
                    egui::TextureOptions::LINEAR,
                );
                self.preview_texture = Some((upload_id, texture.clone()));
                texture
            }
        };

        ui.vertical_centered(|ui| {
            ui.add(
                egui::Image::from_texture(egui::load::SizedTexture::from_handle(&texture))
                    .max_width(ui.available_width())
                    .maintain_aspect_ratio(true),
            );
            ui.label(egui::RichText::new("Uploaded Image").small());
        });
    }
}

fn render_result(ui: &mut egui::Ui, view: &ResultView) {
    ui.heading(&view.heading);
    ui.label(egui::RichText::new(&view.confidence_text).strong());
    ui.add_space(10.0);
    render_chart(ui, &view.chart);
    ui.add_space(10.0);
    render_advice(ui, &view.advice);
}

fn render_chart(ui: &mut egui::Ui, chart: &ChartView) {
    let row_height = 36.0;
    let label_width = 90.0;
    let text_color = ui.visuals().strong_text_color();
    let font = egui::FontId::proportional(14.0);

    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(chart.title).strong());
    });

    let size = egui::vec2(ui.available_width(), row_height * chart.bars.len() as f32);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter_at(rect);

    let plot_left = rect.left() + label_width;
    let plot_width = rect.right() - plot_left;
    let to_x = |value: f32| plot_left + plot_width * (value / chart.x_max).clamp(0.0, 1.0);

    painter.line_segment(
        [
            egui::pos2(plot_left, rect.top()),
            egui::pos2(plot_left, rect.bottom()),
        ],
        egui::Stroke::new(1.0, ui.visuals().weak_text_color()),
    );

    for (i, bar) in chart.bars.iter().enumerate() {
        let row = (chart.bars.len() - 1 - i) as f32;
        let center_y = rect.top() + row_height * (row + 0.5);

        let bar_rect = egui::Rect::from_min_max(
            egui::pos2(plot_left, center_y - row_height * 0.25),
            egui::pos2(to_x(bar.value), center_y + row_height * 0.25),
        );
        painter.rect_filled(bar_rect, 0.0, bar.color);

        painter.text(
            egui::pos2(plot_left - 6.0, center_y),
            egui::Align2::RIGHT_CENTER,
            bar.label,
            font.clone(),
            text_color,
        );
        painter.text(
            egui::pos2(to_x(bar.value + chart.annotation_offset), center_y),
            egui::Align2::LEFT_CENTER,
            &bar.annotation,
            font.clone(),
            text_color,
        );
    }

    if chart.show_x_ticks {
        for tick in [0.0, 0.25, 0.5, 0.75, 1.0] {
            painter.text(
                egui::pos2(to_x(tick), rect.bottom()),
                egui::Align2::CENTER_BOTTOM,
                format!("{:.2}", tick),
                egui::FontId::proportional(10.0),
                text_color,
            );
        }
    }
}

fn render_advice(ui: &mut egui::Ui, advice: &AdviceView) {
    egui::Frame::none()
        .fill(advice.background)
        .rounding(10.0)
        .inner_margin(15.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            for line in advice.lines {
                ui.label(
                    egui::RichText::new(*line)
                        .strong()
                        .color(egui::Color32::BLACK),
                );
            }
        });
}

impl eframe::App for FreshLensWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| self.render(ui));
        });
    }
}

pub fn run_window(fresh_lens: FreshLens) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(fresh_lens.config.window_size)
            .with_drag_and_drop(true),
        ..Default::default()
    };

    let window = FreshLensWindow::new(fresh_lens);

    eframe::run_native("FreshLens AI", options, Box::new(|_cc| Box::new(window)))
}
