use crate::fixtures::{self, Assessment, PracticeProblem, ScheduleBadge, ScheduleEntry};
use crate::settings::{save_settings, Settings};
use crate::theme::{
    apply_theme, ensure_theme_files, load_presets, load_theme, parse_color, ThemeConfig,
};
use crate::workspace::{Sender, WorkspaceState};
use eframe::{
    egui::{
        self, menu, scroll_area::ScrollBarVisibility, Align, CentralPanel, Context, Layout,
        RichText, ScrollArea, SidePanel, TopBottomPanel,
    },
    App, CreationContext,
};
use std::path::PathBuf;

pub struct SunlytApp {
    settings: Settings,
    base_path: PathBuf,
    theme: ThemeConfig,
    presets: Vec<ThemeConfig>,
    workspace: WorkspaceState,
    schedule: Vec<ScheduleEntry>,
    assessments: Vec<Assessment>,
    problem: PracticeProblem,
    // Bound to the disabled assistant input; stays empty until real chat lands.
    chat_input: String,
}

impl SunlytApp {
    pub fn new(cc: &CreationContext<'_>, base_path: PathBuf, settings: Settings) -> Self {
        if let Err(e) = ensure_theme_files(&base_path) {
            log::warn!("Could not write theme presets: {e}");
        }
        let presets = load_presets(&base_path);
        let theme = load_theme(&base_path, settings.ui.last_theme.as_deref());
        apply_theme(&theme, &cc.egui_ctx);

        Self {
            settings,
            base_path,
            theme,
            presets,
            workspace: WorkspaceState::new(),
            schedule: fixtures::schedule(),
            assessments: fixtures::assessments(),
            problem: fixtures::practice_problem(),
            chat_input: String::new(),
        }
    }

    fn switch_theme(&mut self, name: &str, ctx: &Context) {
        self.theme = load_theme(&self.base_path, Some(name));
        apply_theme(&self.theme, ctx);
        self.settings.ui.last_theme = Some(self.theme.name.clone());
        if let Err(e) = save_settings(&self.settings, &self.base_path) {
            log::warn!("Could not save theme choice: {e}");
        }
    }

    fn muted(&self) -> egui::Color32 {
        parse_color(&self.theme.muted_text)
    }

    fn accent(&self) -> egui::Color32 {
        parse_color(&self.theme.accent)
    }

    fn render_menu_bar(&mut self, ctx: &Context, ui: &mut egui::Ui) {
        menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                let preset_names: Vec<String> =
                    self.presets.iter().map(|p| p.name.clone()).collect();
                for name in preset_names {
                    let selected = self.theme.name == name;
                    if ui.selectable_label(selected, name.clone()).clicked() {
                        self.switch_theme(&name, ctx);
                        ui.close_menu();
                    }
                }
            });

            ui.menu_button("Help", |ui| {
                ui.label(format!("{} dashboard (egui)", fixtures::APP_NAME));
                ui.label(format!("Base path: {}", self.base_path.display()));
            });
        });
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(fixtures::APP_NAME)
                    .heading()
                    .color(self.accent()),
            );
            ui.label(RichText::new(fixtures::APP_TAGLINE).color(self.muted()));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                egui::Frame::none()
                    .fill(parse_color(&self.theme.accent_soft))
                    .rounding(egui::Rounding::same(self.theme.radius))
                    .inner_margin(egui::vec2(8.0, 3.0))
                    .show(ui, |ui| {
                        ui.label(RichText::new("Active").small().color(self.accent()));
                        ui.label(RichText::new(fixtures::ACTIVE_COURSE).strong());
                    });
            });
        });
    }

    fn render_schedule_card(&self, ui: &mut egui::Ui, entry: &ScheduleEntry) {
        let active = entry.badge == Some(ScheduleBadge::Now);
        let fill = if active {
            parse_color(&self.theme.accent_soft)
        } else {
            parse_color(&self.theme.surface)
        };
        let stroke = if active {
            self.accent()
        } else {
            parse_color(&self.theme.border)
        };

        egui::Frame::none()
            .fill(fill)
            .stroke(egui::Stroke {
                width: 1.0,
                color: stroke,
            })
            .rounding(egui::Rounding::same(self.theme.radius))
            .inner_margin(egui::vec2(10.0, 8.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(entry.time).small().color(self.muted()));
                        ui.label(RichText::new(entry.title).strong());
                        ui.label(RichText::new(entry.room).small().color(self.muted()));
                    });
                    if let Some(badge) = entry.badge {
                        ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                            ui.label(
                                RichText::new(badge.label()).small().color(self.accent()),
                            );
                        });
                    }
                });
            });
    }

    fn render_sidebar(&self, ui: &mut egui::Ui) {
        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.heading("Schedule");
                ui.label(RichText::new("Today's Classes").color(self.muted()));
                ui.add_space(4.0);
                for entry in &self.schedule {
                    self.render_schedule_card(ui, entry);
                    ui.add_space(4.0);
                }

                ui.separator();
                ui.heading("Upcoming Assessments");
                ui.add_space(4.0);
                for assessment in &self.assessments {
                    self.render_assessment_card(ui, assessment);
                }
            });
    }

    fn render_assessment_card(&self, ui: &mut egui::Ui, assessment: &Assessment) {
        egui::Frame::none()
            .fill(parse_color(&self.theme.surface))
            .stroke(egui::Stroke {
                width: 1.0,
                color: parse_color(&self.theme.border),
            })
            .rounding(egui::Rounding::same(self.theme.radius))
            .inner_margin(egui::vec2(10.0, 8.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    RichText::new(assessment.kind.label())
                        .small()
                        .color(self.accent()),
                );
                ui.label(RichText::new(assessment.title).strong());
                ui.label(
                    RichText::new(format!("{} \u{2022} {}", assessment.course, assessment.due))
                        .small()
                        .color(self.muted()),
                );
            });
    }

    fn render_practice(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(self.problem.progress).color(self.muted()));
                ui.label(RichText::new(self.problem.tag).small().color(self.accent()));
            });
            ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                ui.label(RichText::new(self.problem.course).strong());
            });
        });
        ui.separator();

        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .scroll_bar_visibility(ScrollBarVisibility::AlwaysVisible)
            .show(ui, |ui| {
                ui.heading("Question 1");
                ui.label(self.problem.prompt);
                ui.add_space(6.0);

                let hint_label = if self.workspace.hint_visible {
                    "Hide Hint"
                } else {
                    "Show Hint"
                };
                if ui.button(hint_label).clicked() {
                    self.workspace.toggle_hint();
                }
                if self.workspace.hint_visible {
                    egui::Frame::none()
                        .fill(parse_color(&self.theme.accent_soft))
                        .rounding(egui::Rounding::same(self.theme.radius))
                        .inner_margin(egui::vec2(10.0, 8.0))
                        .show(ui, |ui| {
                            ui.label(self.problem.hint);
                        });
                }

                ui.add_space(8.0);
                ui.label(RichText::new("Your Response").strong());
                let mut draft = self.workspace.draft.clone();
                let edited = ui.add(
                    egui::TextEdit::multiline(&mut draft)
                        .hint_text("Type your answer here...")
                        .desired_rows(4)
                        .desired_width(f32::INFINITY),
                );
                if edited.changed() {
                    self.workspace.update_draft(draft);
                }

                ui.horizontal(|ui| {
                    if ui.button("Submit Answer").clicked() {
                        self.workspace.submit_answer();
                    }
                    if ui.button("Next Question").clicked() {
                        self.workspace.next_question();
                    }
                });

                ui.add_space(10.0);
                egui::Frame::none()
                    .fill(parse_color(&self.theme.surface))
                    .stroke(egui::Stroke {
                        width: 1.0,
                        color: parse_color(&self.theme.border),
                    })
                    .rounding(egui::Rounding::same(self.theme.radius))
                    .inner_margin(egui::vec2(10.0, 8.0))
                    .show(ui, |ui| {
                        ui.label(RichText::new("Step-by-Step Solution").strong());
                        for (idx, step) in self.problem.solution_steps.iter().enumerate() {
                            ui.label(format!("{}. {step}", idx + 1));
                        }
                    });
            });
    }

    fn render_assistant(&mut self, ui: &mut egui::Ui) {
        ui.heading(format!("{} Assistant", fixtures::APP_NAME));
        ui.add_space(4.0);

        let log_height = ui.available_height() - 56.0;
        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .stick_to_bottom(true)
            .max_height(log_height)
            .show(ui, |ui| {
                ui.set_min_height(log_height);
                let max_width = ui.available_width() * 0.96;
                ui.set_max_width(max_width);
                for message in self.workspace.transcript() {
                    let is_student = message.from == Sender::Student;
                    let bubble_fill = if is_student {
                        parse_color(&self.theme.accent_soft)
                    } else {
                        parse_color(&self.theme.surface)
                    };
                    let bubble_stroke = if is_student {
                        self.accent()
                    } else {
                        parse_color(&self.theme.border)
                    };

                    ui.add_space(4.0);
                    ui.with_layout(Layout::left_to_right(Align::Min), |ui| {
                        egui::Frame::none()
                            .fill(bubble_fill)
                            .stroke(egui::Stroke {
                                width: 1.0,
                                color: bubble_stroke,
                            })
                            .rounding(egui::Rounding::same(self.theme.radius))
                            .inner_margin(egui::vec2(10.0, 8.0))
                            .show(ui, |ui| {
                                ui.set_max_width(max_width * 0.9);
                                ui.vertical(|ui| {
                                    for paragraph in message.text.split('\n') {
                                        if paragraph.is_empty() {
                                            ui.add_space(4.0);
                                        } else {
                                            ui.add(
                                                egui::Label::new(
                                                    RichText::new(paragraph)
                                                        .color(parse_color(&self.theme.text)),
                                                )
                                                .wrap(true),
                                            );
                                        }
                                    }
                                    ui.label(
                                        RichText::new(message.time.as_str())
                                            .small()
                                            .color(self.muted()),
                                    );
                                });
                            });
                    });
                }
            });

        ui.separator();
        ui.horizontal(|ui| {
            ui.add_enabled(
                false,
                egui::TextEdit::singleline(&mut self.chat_input)
                    .hint_text(format!("Ask {} anything...", fixtures::APP_NAME)),
            );
            ui.add_enabled(false, egui::Button::new("Coming Soon"));
        });
    }
}

impl App for SunlytApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        apply_theme(&self.theme, ctx);

        TopBottomPanel::top("menu_bar").show(ctx, |ui| self.render_menu_bar(ctx, ui));
        TopBottomPanel::top("header").show(ctx, |ui| self.render_header(ui));

        SidePanel::left("schedule")
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| self.render_sidebar(ui));

        SidePanel::right("assistant")
            .resizable(true)
            .default_width(340.0)
            .show(ctx, |ui| self.render_assistant(ui));

        CentralPanel::default().show(ctx, |ui| self.render_practice(ui));
    }
}
