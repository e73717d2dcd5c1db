//! Header bar with feed status and stats

use eframe::egui;

use super::GlobeApp;
use crate::feed_state::FeedState;
use crate::theme::colors;

impl GlobeApp {
    pub(crate) fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let status_color = match &self.feed_state {
                FeedState::Loaded(_) => colors::STATUS_OK,
                FeedState::Loading => colors::STATUS_PENDING,
                FeedState::Failed(_) => colors::STATUS_ERROR,
            };
            let status = ui.colored_label(
                status_color,
                egui::RichText::new(self.feed_state.label()).size(11.0),
            );
            if let FeedState::Failed(reason) = &self.feed_state {
                status.on_hover_text(reason.as_str());
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new("Earthquakes")
                        .color(colors::TEXT_PRIMARY)
                        .size(12.0),
                );
                ui.add_space(10.0);

                ui.label(
                    egui::RichText::new(format!("{:.0} fps", self.fps_counter.fps()))
                        .color(colors::TEXT_SECONDARY)
                        .monospace()
                        .size(11.0),
                );
                ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED).size(11.0));
                ui.label(
                    egui::RichText::new(format!("{} markers", self.scene.marker_count()))
                        .color(colors::TEXT_MUTED)
                        .monospace()
                        .size(11.0),
                );
            });
        });
    }
}
