use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};

use anyhow::{Context, Result};
use eframe::egui::{self, Color32, RichText};
use image::ImageReader;

use crate::model::{AppState, Tab};
use ph_strip_common::{matcher, palette, sampler, AnalysisResult, Rgb};

const ACCEPTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];
const ADVISORY_TEXT: &str = "Couldn't detect strip color. Try a clearer image.";
const EMPTY_STATE_TEXT: &str = "Drop a pH strip image to analyze";

pub struct DesktopApp {
    state: AppState,
    status: String,
    analyze_rx: Receiver<AnalyzeMessage>,
    analyze_tx: Sender<AnalyzeMessage>,
    preview: Option<egui::TextureHandle>,
}

struct AnalyzeMessage {
    generation: u64,
    payload: Result<AnalyzeData>,
}

struct AnalyzeData {
    result: AnalysisResult,
    preview_size: [usize; 2],
    preview_pixels: Vec<u8>,
}

impl Default for DesktopApp {
    fn default() -> Self {
        let (analyze_tx, analyze_rx) = mpsc::channel();
        Self {
            state: AppState::default(),
            status: String::new(),
            analyze_rx,
            analyze_tx,
            preview: None,
        }
    }
}

fn is_accepted(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            ACCEPTED_EXTENSIONS.iter().any(|&e| e == ext)
        })
        .unwrap_or(false)
}

fn result_from_color(color: Rgb) -> AnalysisResult {
    let matched = matcher::match_color(color);
    AnalysisResult {
        file_name: String::new(),
        file_path: String::new(),
        color: color.to_hex(),
        ph: matched.ph,
        description: matched.description.to_string(),
        example: matched.example.map(|s| s.to_string()),
    }
}

fn to_color32(color: Rgb) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

// Black or white, whichever reads better on the given background
fn contrast_color(color: Rgb) -> Color32 {
    let luminance =
        0.299 * color.r as f32 + 0.587 * color.g as f32 + 0.114 * color.b as f32;
    if luminance > 140.0 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}

impl DesktopApp {
    fn open_image(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", ACCEPTED_EXTENSIONS)
            .pick_file()
        {
            self.start_analysis(path);
        }
    }

    /// Accept the first supported file of a drop; extra files are ignored.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(path) = dropped.into_iter().find_map(|f| f.path) else {
            return;
        };

        if !is_accepted(&path) {
            eprintln!("rejected file: {}", path.display());
            return;
        }

        self.state.tab = Tab::Upload;
        self.start_analysis(path);
    }

    fn start_analysis(&mut self, path: PathBuf) {
        self.state.generation += 1;
        self.state.analyzing = true;
        self.state.image_path = Some(path.clone());
        self.status = format!("Analyzing {}", path.display());

        let generation = self.state.generation;
        let sender = self.analyze_tx.clone();

        std::thread::spawn(move || {
            let payload = analyze_on_worker(&path);
            let _ = sender.send(AnalyzeMessage {
                generation,
                payload,
            });
        });
    }

    fn poll_messages(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.analyze_rx.try_recv() {
            // Last request wins; completions from superseded requests are dropped
            if msg.generation != self.state.generation {
                continue;
            }
            self.state.analyzing = false;

            match msg.payload {
                Ok(data) => {
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(
                        data.preview_size,
                        &data.preview_pixels,
                    );
                    self.preview = Some(ctx.load_texture(
                        "preview",
                        color_image,
                        egui::TextureOptions::default(),
                    ));
                    self.status = format!(
                        "Detected {} → pH {}",
                        data.result.color, data.result.ph
                    );
                    self.state.result = Some(data.result);
                }
                Err(err) => {
                    self.preview = None;
                    self.state.result = None;
                    self.status = format!("{ADVISORY_TEXT} ({err})");
                }
            }
        }
    }

    fn apply_manual_color(&mut self) {
        let [r, g, b] = self.state.manual_color;
        self.state.manual_result = Some(result_from_color(Rgb::new(r, g, b)));
    }

    fn render_upload_tab(&mut self, ui: &mut egui::Ui) {
        ui.columns(2, |columns| {
            columns[0].group(|ui| {
                ui.set_min_height(240.0);
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    if let Some(texture) = &self.preview {
                        ui.add(
                            egui::Image::new(texture)
                                .fit_to_exact_size(egui::vec2(280.0, 200.0)),
                        );
                    } else {
                        ui.add_space(60.0);
                        ui.label(RichText::new(EMPTY_STATE_TEXT).color(Color32::from_gray(170)));
                    }
                    ui.add_space(8.0);
                    if ui.button("Open Image...").clicked() {
                        self.open_image();
                    }
                    if self.state.analyzing {
                        ui.add_space(8.0);
                        ui.spinner();
                        ui.label("Analyzing image...");
                    }
                });
            });

            columns[1].group(|ui| {
                ui.set_min_height(240.0);
                ui.heading("Analysis Results");
                ui.separator();
                if let Some(result) = self.state.result.clone() {
                    render_result(ui, &result);
                } else if !self.state.analyzing {
                    let text = if self.state.image_path.is_some() {
                        ADVISORY_TEXT
                    } else {
                        "Upload an image to analyze"
                    };
                    ui.label(RichText::new(text).italics().color(Color32::from_gray(170)));
                }
            });
        });
    }

    fn render_manual_tab(&mut self, ui: &mut egui::Ui) {
        ui.columns(2, |columns| {
            columns[0].group(|ui| {
                ui.set_min_height(240.0);
                ui.heading("Pick a Color");
                ui.separator();
                let response = egui::color_picker::color_edit_button_srgb(
                    ui,
                    &mut self.state.manual_color,
                );
                if response.changed() {
                    self.apply_manual_color();
                }
                let [r, g, b] = self.state.manual_color;
                ui.add_space(4.0);
                ui.monospace(Rgb::new(r, g, b).to_hex());
            });

            columns[1].group(|ui| {
                ui.set_min_height(240.0);
                ui.heading("Analysis Results");
                ui.separator();
                if let Some(result) = self.state.manual_result.clone() {
                    render_result(ui, &result);
                } else {
                    ui.label(
                        RichText::new("Pick a color to estimate its pH")
                            .italics()
                            .color(Color32::from_gray(170)),
                    );
                }
            });
        });
    }

    fn active_ph(&self) -> Option<u8> {
        match self.state.tab {
            Tab::Upload => self.state.result.as_ref().map(|r| r.ph),
            Tab::Manual => self.state.manual_result.as_ref().map(|r| r.ph),
        }
    }

    fn render_chart(&self, ui: &mut egui::Ui) {
        ui.heading("pH Color Reference");
        ui.add_space(4.0);
        let active = self.active_ph();
        ui.horizontal_wrapped(|ui| {
            for entry in &palette::REFERENCE_PALETTE {
                let selected = active == Some(entry.ph);
                let stroke = if selected {
                    egui::Stroke::new(2.0, Color32::WHITE)
                } else {
                    egui::Stroke::new(1.0, Color32::from_gray(60))
                };
                egui::Frame::none()
                    .fill(to_color32(entry.color))
                    .stroke(stroke)
                    .rounding(egui::Rounding::same(4.0))
                    .inner_margin(egui::Margin::symmetric(12.0, 10.0))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(format!("{}", entry.ph))
                                .strong()
                                .color(contrast_color(entry.color)),
                        );
                    })
                    .response
                    .on_hover_text(format!(
                        "pH {} — {}{}",
                        entry.ph,
                        entry.description,
                        palette::example_for(entry.ph)
                            .map(|e| format!(" (e.g. {e})"))
                            .unwrap_or_default()
                    ));
            }
        });
    }
}

fn render_result(ui: &mut egui::Ui, result: &AnalysisResult) {
    let swatch = Rgb::from_hex(&result.color).unwrap_or_default();
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(48.0, 48.0), egui::Sense::hover());
        ui.painter()
            .rect_filled(rect, egui::Rounding::same(6.0), to_color32(swatch));
        ui.painter().rect_stroke(
            rect,
            egui::Rounding::same(6.0),
            egui::Stroke::new(1.0, Color32::from_gray(60)),
        );
        ui.vertical(|ui| {
            ui.monospace(&result.color);
            ui.label(
                RichText::new(format!("pH: {}", result.ph))
                    .heading()
                    .color(Color32::from_rgb(120, 170, 255)),
            );
            ui.label(&result.description);
            if let Some(example) = &result.example {
                ui.label(
                    RichText::new(format!("Similar to: {example}"))
                        .color(Color32::from_gray(180)),
                );
            }
        });
    });
}

/// Decode, sample and match on a worker thread
fn analyze_on_worker(path: &Path) -> Result<AnalyzeData> {
    let image = ImageReader::open(path)
        .with_context(|| format!("open {}", path.display()))?
        .decode()
        .with_context(|| format!("decode {}", path.display()))?;

    let color = sampler::sample(&image);
    let mut result = result_from_color(color);
    result.file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    result.file_path = path.display().to_string();

    let thumb = image.thumbnail(280, 200);
    let preview_size = [thumb.width() as usize, thumb.height() as usize];
    let preview_pixels = thumb.to_rgba8().into_raw();

    Ok(AnalyzeData {
        result,
        preview_size,
        preview_pixels,
    })
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.analyzing {
            ctx.request_repaint();
        }
        self.poll_messages(ctx);
        self.handle_dropped_files(ctx);

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("pH Strip Analyzer");
                ui.separator();
                ui.selectable_value(&mut self.state.tab, Tab::Upload, "Image Analysis");
                ui.selectable_value(&mut self.state.tab, Tab::Manual, "Manual Color");
                ui.separator();
                if !self.status.is_empty() {
                    ui.label(RichText::new(&self.status).color(Color32::from_gray(170)));
                }
            });
        });

        egui::TopBottomPanel::bottom("chart")
            .min_height(90.0)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                self.render_chart(ui);
                ui.add_space(6.0);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.state.tab {
                Tab::Upload => self.render_upload_tab(ui),
                Tab::Manual => self.render_manual_tab(ui),
            }
            ui.add_space(12.0);
            ui.label(
                RichText::new(
                    "Estimation only. Use a calibrated pH meter for scientific or health applications.",
                )
                .small()
                .color(Color32::from_gray(140)),
            );
        });
    }
}
