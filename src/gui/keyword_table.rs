use eframe::egui::{
    self,
    RichText,
};
use egui_extras::{
    Column,
    TableBuilder,
};

use crate::{
    cloud::encoding::map_weight_to_color,
    core::WordItem,
    gui::theme::Theme,
};

const ROW_HEIGHT: f32 = 20.0;
const SWATCH_SIZE: f32 = 10.0;

/// Word indices ordered by weight, heaviest first. Ties keep response order.
pub fn rank_by_weight(words: &[WordItem]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..words.len()).collect();
    order.sort_by(|&a, &b| words[b].weight.total_cmp(&words[a].weight));
    order
}

pub fn keyword_table(ui: &mut egui::Ui, words: &[WordItem], theme: &Theme) {
    if words.is_empty() {
        ui.label(RichText::new("The service returned no keywords.").color(theme.comment(ui.ctx())));
        return;
    }

    let order = rank_by_weight(words);
    let heading_ctx = ui.ctx().clone();

    TableBuilder::new(ui)
        .id_salt("keyword_table")
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(SWATCH_SIZE + 8.0))
        .column(Column::remainder().at_least(80.0).clip(true))
        .column(Column::auto().at_least(50.0))
        .header(ROW_HEIGHT, |mut header| {
            header.col(|_ui| {});
            header.col(|ui| {
                ui.label(theme.heading(&heading_ctx, "Keyword"));
            });
            header.col(|ui| {
                ui.label(theme.heading(&heading_ctx, "Weight"));
            });
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, order.len(), |mut row| {
                let item = &words[order[row.index()]];
                row.col(|ui| {
                    let (rect, _) = ui.allocate_exact_size(
                        egui::vec2(SWATCH_SIZE, SWATCH_SIZE),
                        egui::Sense::hover(),
                    );
                    ui.painter().rect_filled(rect, 2.0, map_weight_to_color(item.weight));
                });
                row.col(|ui| {
                    ui.label(&item.word);
                });
                row.col(|ui| {
                    ui.label(format!("{:.2}", item.weight));
                });
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_by_weight() {
        let words = vec![
            WordItem::new("cloud", 0.6),
            WordItem::new("example", 1.0),
            WordItem::new("word", 0.8),
            WordItem::new("again", 0.6),
        ];
        assert_eq!(rank_by_weight(&words), vec![1, 2, 0, 3]);
        assert!(rank_by_weight(&[]).is_empty());
    }
}
