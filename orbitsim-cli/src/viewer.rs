//! Animated viewer for orbitsim scenarios
//!
//! Draws the current animation frame and ticks the simulation on a fixed
//! wall-clock cadence. A scenario file given on the command line is watched
//! and reloaded on change.

use eframe::egui;
use notify::{Event, RecommendedWatcher, Watcher};
use orbitsim_core::{
    build_simulation_context, build_simulation_context_from_source, format_config_error, reset,
    step_simulation, ScenarioConfig, SimulationContext,
};
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Instant;

pub fn run_viewer(source_path: Option<PathBuf>) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([640.0, 700.0]),
        ..Default::default()
    };

    eframe::run_native(
        "orbitsim",
        options,
        Box::new(move |cc| Ok(Box::new(ViewerApp::new(source_path, cc)))),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}

pub struct ViewerApp {
    source_path: Option<PathBuf>,
    ctx_opt: Option<SimulationContext>,
    last_load_error: Option<String>,
    warnings: Vec<String>,
    playing: bool,
    speed_multiplier: f32,
    last_tick: Instant,
    #[allow(dead_code)] // Kept alive to maintain file watching
    file_watcher: Option<RecommendedWatcher>,
    file_receiver: mpsc::Receiver<notify::Result<Event>>,
}

impl ViewerApp {
    pub fn new(source_path: Option<PathBuf>, _cc: &eframe::CreationContext<'_>) -> Self {
        let (tx, rx) = mpsc::channel();
        let mut watcher = None;

        if let Some(path) = &source_path {
            watcher = notify::recommended_watcher(move |res| {
                let _ = tx.send(res);
            })
            .ok();

            if let Some(w) = watcher.as_mut() {
                if let Err(e) = w.watch(path, notify::RecursiveMode::NonRecursive) {
                    log::warn!("not watching {}: {}", path.display(), e);
                }
            }
        }

        let mut app = Self {
            source_path,
            ctx_opt: None,
            last_load_error: None,
            warnings: Vec::new(),
            playing: true,
            speed_multiplier: 1.0,
            last_tick: Instant::now(),
            file_watcher: watcher,
            file_receiver: rx,
        };

        app.reload_context();

        app
    }

    fn reload_context(&mut self) {
        self.warnings.clear();

        let loaded = match &self.source_path {
            Some(path) => match std::fs::read_to_string(path) {
                Ok(source) => build_simulation_context_from_source(&source)
                    .map_err(|e| format_config_error(&e, &source)),
                Err(e) => Err(format!("Error reading {}: {}", path.display(), e)),
            },
            None => build_simulation_context(ScenarioConfig::reference())
                .map(|ctx| (ctx, Default::default()))
                .map_err(|e| e.to_string()),
        };

        match loaded {
            Ok((ctx, diagnostics)) => {
                log::info!("loaded scenario with {} particles", ctx.simulator.len());
                self.warnings = diagnostics.iter().map(|d| d.to_string()).collect();
                self.ctx_opt = Some(ctx);
                self.last_load_error = None;
            }
            Err(e) => {
                log::error!("{}", e);
                self.last_load_error = Some(e);
                self.ctx_opt = None;
                self.playing = false;
            }
        }
    }

    fn check_file_changes(&mut self) {
        let mut needs_reload = false;

        while let Ok(event) = self.file_receiver.try_recv() {
            match event {
                Ok(Event {
                    kind: notify::EventKind::Modify(_),
                    paths,
                    ..
                }) => {
                    if let Some(path) = &self.source_path {
                        if paths.iter().any(|p| p.ends_with(path) || path.ends_with(p)) {
                            needs_reload = true;
                        }
                    }
                }
                Ok(_) => {}
                Err(e) => log::warn!("file watcher error: {}", e),
            }
        }

        if needs_reload {
            self.reload_context();
        }
    }

    fn advance(&mut self) {
        let Some(ctx) = self.ctx_opt.as_mut() else {
            return;
        };
        if self.last_tick.elapsed() < ctx.animation.interval() {
            return;
        }

        let ticks = self.speed_multiplier.max(1.0).round() as usize;
        for _ in 0..ticks {
            step_simulation(ctx);
        }
        self.last_tick = Instant::now();
    }

    fn draw_frame(&self, ui: &mut egui::Ui) {
        let Some(ctx) = &self.ctx_opt else {
            return;
        };

        let rect = ui.max_rect();
        let painter = ui.painter();

        // Equal aspect: the plot square spans [-extent, extent] on both axes
        let extent = ctx.animation.extent() as f32;
        let center = rect.center();
        let scale = rect.width().min(rect.height()) / (2.0 * extent) * 0.95;
        let to_screen =
            |x: f64, y: f64| center + egui::vec2(x as f32 * scale, -(y as f32) * scale);

        let side = 2.0 * extent * scale;
        let axis = egui::Stroke::new(1.0, egui::Color32::DARK_GRAY);
        painter.rect_stroke(
            egui::Rect::from_center_size(center, egui::vec2(side, side)),
            0.0,
            axis,
        );
        painter.line_segment(
            [center - egui::vec2(side / 2.0, 0.0), center + egui::vec2(side / 2.0, 0.0)],
            axis,
        );
        painter.line_segment(
            [center - egui::vec2(0.0, side / 2.0), center + egui::vec2(0.0, side / 2.0)],
            axis,
        );

        for pos in &ctx.animation.frame().positions {
            if !pos.is_finite() {
                continue;
            }
            painter.circle_filled(to_screen(pos.x, pos.y), 4.0, egui::Color32::RED);
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_file_changes();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(if self.playing { "⏸ Pause" } else { "▶ Play" }).clicked() {
                    self.playing = !self.playing;
                    self.last_tick = Instant::now();
                }

                if ui.button("⏮ Reset").clicked() {
                    if let Some(ref mut sim_ctx) = self.ctx_opt {
                        reset(sim_ctx);
                    }
                    self.playing = false;
                }

                if ui.button("⏭ Step").clicked() {
                    if let Some(ref mut sim_ctx) = self.ctx_opt {
                        step_simulation(sim_ctx);
                    }
                }

                ui.separator();

                ui.label("Speed:");
                ui.add(egui::Slider::new(&mut self.speed_multiplier, 1.0..=20.0));

                ui.separator();

                if let Some(ref sim_ctx) = self.ctx_opt {
                    let frame = sim_ctx.animation.frame();
                    ui.label(format!(
                        "Frame: {}  t = {:.2}",
                        frame.index,
                        frame.index as f64 * sim_ctx.animation.frame_duration()
                    ));
                }
            });
        });

        if self.last_load_error.is_some() || !self.warnings.is_empty() {
            egui::TopBottomPanel::bottom("diagnostics").show(ctx, |ui| {
                ui.set_max_height(100.0);
                if let Some(ref error) = self.last_load_error {
                    ui.label(egui::RichText::new(error).color(egui::Color32::RED));
                }
                for warning in &self.warnings {
                    ui.label(egui::RichText::new(warning).color(egui::Color32::YELLOW));
                }
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_frame(ui);
        });

        if self.playing {
            self.advance();
            if let Some(ref sim_ctx) = self.ctx_opt {
                ctx.request_repaint_after(sim_ctx.animation.interval());
            }
        }
    }
}
