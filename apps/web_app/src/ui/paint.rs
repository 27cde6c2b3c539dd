use eframe::egui;

use crate::component::view::{TitleTone, ViewNode};

const HEADER_FILL: egui::Color32 = egui::Color32::from_rgb(0x22, 0x22, 0x22);
const LOGO_SIZE: f32 = 80.0;
const TITLE_SIZE: f32 = 24.0;
const INTRO_SIZE: f32 = 16.0;

fn title_color(tone: TitleTone) -> egui::Color32 {
    match tone {
        TitleTone::Pending => egui::Color32::from_gray(0xAA),
        TitleTone::Normal => egui::Color32::WHITE,
        TitleTone::Error => egui::Color32::from_rgb(0xF2, 0x6D, 0x6D),
    }
}

pub fn paint_node(ui: &mut egui::Ui, node: &ViewNode, logo: Option<&egui::TextureHandle>) {
    match node {
        ViewNode::Page { children, .. } => {
            ui.vertical_centered(|ui| {
                for child in children {
                    paint_node(ui, child, logo);
                }
            });
        }
        ViewNode::Header { children, .. } => {
            egui::Frame::new()
                .fill(HEADER_FILL)
                .inner_margin(egui::Margin::same(20))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        for child in children {
                            paint_node(ui, child, logo);
                        }
                    });
                });
        }
        ViewNode::Image { alt, .. } => match logo {
            Some(texture) => {
                ui.add(
                    egui::Image::new(texture).fit_to_exact_size(egui::vec2(LOGO_SIZE, LOGO_SIZE)),
                )
                .on_hover_text(*alt);
            }
            None => {
                ui.label(*alt);
            }
        },
        ViewNode::Title {
            text, tone, hint, ..
        } => {
            ui.add_space(8.0);
            let response = ui.label(
                egui::RichText::new(text.as_str())
                    .size(TITLE_SIZE)
                    .strong()
                    .color(title_color(*tone)),
            );
            if let Some(hint) = hint {
                response.on_hover_text(hint.as_str());
            }
        }
        ViewNode::Paragraph { text, .. } => {
            ui.add_space(16.0);
            ui.label(egui::RichText::new(*text).size(INTRO_SIZE));
        }
    }
}
