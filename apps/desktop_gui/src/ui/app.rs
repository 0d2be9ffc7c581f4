use std::collections::HashMap;

use client_core::{view::NO_RESULTS_MESSAGE, DirectoryEvent, DirectoryState, LoadStatus};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use egui::TextureHandle;
use shared::{domain::EmployeeRecord, format::birthday_or_raw};

use crate::backend_bridge::{commands::BackendCommand, portrait::PortraitImage};
use crate::controller::events::{UiError, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;

const CARD_WIDTH: f32 = 300.0;
const CARD_PORTRAIT_SIZE: f32 = 72.0;
const DETAIL_PORTRAIT_SIZE: f32 = 160.0;

pub(crate) enum PortraitSlot {
    Loading,
    Failed(String),
    Ready {
        image: PortraitImage,
        texture: Option<TextureHandle>,
    },
}

pub struct DirectoryGuiApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    state: DirectoryState,
    result_count: usize,
    search_input: String,
    status: String,
    banner: Option<UiError>,
    portraits: HashMap<String, PortraitSlot>,
}

impl DirectoryGuiApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        result_count: usize,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            state: DirectoryState::new(),
            result_count,
            search_input: String::new(),
            status: String::new(),
            banner: None,
            portraits: HashMap::new(),
        };
        app.request_employees();
        app
    }

    fn request_employees(&mut self) {
        self.status = format!("Loading {} employees…", self.result_count);
        dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::FetchEmployees {
                count: self.result_count,
            },
            &mut self.status,
        );
    }

    fn apply(&mut self, event: DirectoryEvent) {
        tracing::debug!(event = event.name(), "applying directory event");
        self.state = std::mem::take(&mut self.state).apply(event);
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::EmployeesLoaded(employees) => {
                    self.status = format!("{} employees", employees.len());
                    self.banner = None;
                    self.search_input.clear();
                    let urls: Vec<String> = employees
                        .iter()
                        .map(|employee| employee.picture.large.clone())
                        .collect();
                    self.apply(DirectoryEvent::Loaded(employees));
                    for url in urls {
                        self.request_portrait(url);
                    }
                }
                UiEvent::Error(err) => {
                    tracing::warn!(
                        category = ?err.category(),
                        context = ?err.context(),
                        "backend error: {}",
                        err.message()
                    );
                    self.status.clear();
                    self.apply(DirectoryEvent::LoadFailed(err.message().to_string()));
                    self.banner = Some(err);
                }
                UiEvent::PortraitLoaded { url, image } => {
                    self.portraits.insert(
                        url,
                        PortraitSlot::Ready {
                            image,
                            texture: None,
                        },
                    );
                }
                UiEvent::PortraitFailed { url, reason } => {
                    tracing::warn!(%url, "portrait unavailable: {reason}");
                    self.portraits.insert(url, PortraitSlot::Failed(reason));
                }
            }
        }
    }

    fn request_portrait(&mut self, url: String) {
        if url.is_empty() || self.portraits.contains_key(&url) {
            return;
        }
        let mut reason = String::new();
        let queued = dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::FetchPortrait { url: url.clone() },
            &mut reason,
        );
        let slot = if queued {
            PortraitSlot::Loading
        } else {
            PortraitSlot::Failed(reason)
        };
        self.portraits.insert(url, slot);
    }

    fn submit_search(&mut self) {
        let query = self.search_input.clone();
        self.apply(DirectoryEvent::SearchSubmitted(query));
        self.status = if self.state.is_search_active() {
            format!(
                "{} of {} employees match \"{}\"",
                self.state.active_list().len(),
                self.state.employees.len(),
                self.state.query
            )
        } else {
            format!("{} employees", self.state.employees.len())
        };
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("directory_header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Employee Directory");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let search_clicked = ui.button("🔍 Search").clicked();
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.search_input)
                            .hint_text("Search...")
                            .desired_width(220.0),
                    );
                    let enter_pressed = response.lost_focus()
                        && ui.input(|input| input.key_pressed(egui::Key::Enter));
                    if search_clicked || enter_pressed {
                        self.submit_search();
                    }
                });
            });
            ui.weak(&self.status);
            ui.add_space(4.0);
        });
    }

    fn show_banner(&mut self, ctx: &egui::Context) {
        let Some(err) = &self.banner else {
            return;
        };
        let text = err.banner_text();
        let retryable = err.is_retryable();
        let mut dismiss = false;
        let mut retry = false;
        egui::TopBottomPanel::top("error_banner").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(ui.visuals().error_fg_color, text);
                if retryable && ui.small_button("Retry").clicked() {
                    retry = true;
                }
                if ui.small_button("Dismiss").clicked() {
                    dismiss = true;
                }
            });
        });
        if dismiss {
            self.banner = None;
        }
        if retry {
            self.banner = None;
            self.request_employees();
        }
    }

    fn show_gallery(&mut self, ctx: &egui::Context) {
        let mut clicked = None;
        let Self {
            state, portraits, ..
        } = self;

        egui::CentralPanel::default().show(ctx, |ui| {
            if state.load == LoadStatus::Pending {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading employees…");
                });
                return;
            }
            if state.is_empty_result() {
                ui.add_space(24.0);
                ui.vertical_centered(|ui| ui.heading(NO_RESULTS_MESSAGE));
                return;
            }

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);
                        for (index, employee) in state.active_list().iter().enumerate() {
                            if show_card(ui, portraits, employee).clicked() {
                                clicked = Some(index);
                            }
                        }
                    });
                });
        });

        if let Some(index) = clicked {
            self.apply(DirectoryEvent::CardClicked(index));
        }
    }

    fn show_detail(&mut self, ctx: &egui::Context) {
        let (Some(index), Some(employee)) = (self.state.current_index(), self.state.current())
        else {
            return;
        };
        let employee = employee.clone();
        let total = self.state.active_list().len();
        let mut action = None;

        let modal = egui::Modal::new(egui::Id::new("employee_detail")).show(ctx, |ui| {
            ui.set_width(360.0);
            ui.horizontal(|ui| {
                ui.weak(format!("{} of {total}", index + 1));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("X").on_hover_text("Close").clicked() {
                        action = Some(DirectoryEvent::Close);
                    }
                });
            });
            ui.vertical_centered(|ui| {
                show_portrait(
                    ui,
                    &mut self.portraits,
                    &employee.picture.large,
                    DETAIL_PORTRAIT_SIZE,
                );
                ui.heading(employee.full_name());
                ui.label(&employee.email);
                ui.label(&employee.location.city);
                ui.separator();
                ui.label(&employee.phone);
                ui.label(employee.full_address());
                ui.label(format!("Birthday: {}", birthday_or_raw(&employee.dob.date)));
            });
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Prev").clicked() {
                    action = Some(DirectoryEvent::Prev);
                }
                if ui.button("Next").clicked() {
                    action = Some(DirectoryEvent::Next);
                }
            });
        });

        if action.is_none() {
            if modal.should_close() {
                action = Some(DirectoryEvent::BackdropClicked);
            } else if ctx.input(|input| input.key_pressed(egui::Key::ArrowLeft)) {
                action = Some(DirectoryEvent::Prev);
            } else if ctx.input(|input| input.key_pressed(egui::Key::ArrowRight)) {
                action = Some(DirectoryEvent::Next);
            }
        }
        if let Some(event) = action {
            self.apply(event);
        }
    }
}

fn show_card(
    ui: &mut egui::Ui,
    portraits: &mut HashMap<String, PortraitSlot>,
    employee: &EmployeeRecord,
) -> egui::Response {
    let frame = egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.horizontal(|ui| {
            show_portrait(ui, portraits, &employee.picture.large, CARD_PORTRAIT_SIZE);
            ui.vertical(|ui| {
                ui.strong(employee.full_name());
                ui.label(&employee.email);
                ui.weak(employee.city_state());
            });
        });
    });
    frame
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}

fn show_portrait(
    ui: &mut egui::Ui,
    portraits: &mut HashMap<String, PortraitSlot>,
    url: &str,
    size: f32,
) {
    match portraits.get_mut(url) {
        Some(PortraitSlot::Ready { image, texture }) => {
            let texture = texture.get_or_insert_with(|| {
                let color_image =
                    egui::ColorImage::from_rgba_unmultiplied([image.width, image.height], &image.rgba);
                ui.ctx()
                    .load_texture(format!("portrait:{url}"), color_image, egui::TextureOptions::LINEAR)
            });
            let longest = image.width.max(image.height).max(1) as f32;
            let scale = size / longest;
            let display = egui::vec2(image.width as f32 * scale, image.height as f32 * scale);
            ui.add(egui::Image::new(egui::load::SizedTexture::new(
                texture.id(),
                display,
            )));
        }
        Some(PortraitSlot::Failed(reason)) => {
            ui.add_sized(
                [size, size],
                egui::Label::new(egui::RichText::new("no photo").weak()),
            )
            .on_hover_text(reason.as_str());
        }
        Some(PortraitSlot::Loading) | None => {
            ui.add_sized([size, size], egui::Spinner::new());
        }
    }
}

impl eframe::App for DirectoryGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        self.show_header(ctx);
        self.show_banner(ctx);
        self.show_gallery(ctx);
        self.show_detail(ctx);

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;
    use shared::test_support::employee;

    use super::*;

    #[test]
    fn portraits_that_miss_the_queue_are_marked_failed() {
        let (cmd_tx, cmd_rx) = bounded(2);
        let (ui_tx, ui_rx) = bounded(8);
        let mut app = DirectoryGuiApp::new(cmd_tx, ui_rx, 3);
        assert!(matches!(
            cmd_rx.try_recv(),
            Ok(BackendCommand::FetchEmployees { count: 3 })
        ));

        let staff = vec![
            employee("Jane", "Doe"),
            employee("John", "Roe"),
            employee("Maria", "Johnson"),
        ];
        let urls: Vec<String> = staff.iter().map(|e| e.picture.large.clone()).collect();
        ui_tx
            .try_send(UiEvent::EmployeesLoaded(staff))
            .expect("send");
        app.process_ui_events();

        assert!(matches!(app.portraits.get(&urls[0]), Some(PortraitSlot::Loading)));
        assert!(matches!(app.portraits.get(&urls[1]), Some(PortraitSlot::Loading)));
        match app.portraits.get(&urls[2]) {
            Some(PortraitSlot::Failed(reason)) => assert!(reason.contains("full")),
            _ => panic!("expected the third portrait to be marked failed"),
        }
        assert_eq!(app.status, "3 employees");
        assert_eq!(cmd_rx.len(), 2);
    }

    #[test]
    fn load_failure_shows_one_retryable_banner() {
        let (cmd_tx, _cmd_rx) = bounded(4);
        let (ui_tx, ui_rx) = bounded(4);
        let mut app = DirectoryGuiApp::new(cmd_tx, ui_rx, 12);
        let fetch = client_core::FetchError::Status {
            url: "https://randomuser.me/api/".to_string(),
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
        };
        ui_tx
            .try_send(UiEvent::Error(UiError::from_fetch(
                crate::controller::events::UiErrorContext::LoadEmployees,
                &fetch,
            )))
            .expect("send");
        app.process_ui_events();

        assert!(matches!(app.state.load, LoadStatus::Failed(_)));
        assert!(app.banner.as_ref().is_some_and(UiError::is_retryable));
    }
}
