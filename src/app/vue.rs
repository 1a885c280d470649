// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue, Backspace efface (quand le champ a le focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Pavé 5 colonnes, même inventaire que la disposition d'origine
//   (AC DEL ( ) ÷ / sin 7 8 9 × / cos 4 5 6 - / tan 1 2 3 + /
//    log 0 . ! = / √ xʸ π e DR)
//
// Les glyphes × ÷ π e sont insérés tels quels : c'est le lexeur du noyau
// qui les normalise.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::ModeAngle;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité "calc"
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_en_tete(ui);

                ui.add_space(4.0);
                self.ui_historique(ui);

                ui.add_space(6.0);
                self.ui_entree(ui);

                ui.add_space(4.0);
                self.ui_sortie(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_pave(ui);
            });
    }

    /* ------------------------ En-tête : mode + statut ------------------------ */

    fn ui_en_tete(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui
                .selectable_label(self.mode == ModeAngle::Degres, "DEG")
                .clicked()
                && self.mode != ModeAngle::Degres
            {
                self.basculer_mode();
            }
            if ui
                .selectable_label(self.mode == ModeAngle::Radians, "RAD")
                .clicked()
                && self.mode != ModeAngle::Radians
            {
                self.basculer_mode();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if self.erreur.is_some() {
                    ui.colored_label(ui.visuals().error_fg_color, "● Erreur");
                } else {
                    ui.weak("● Prêt");
                }
            });
        });
    }

    /* ------------------------ Historique (bande déroulante) ------------------------ */

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        if self.historique.is_empty() {
            return;
        }

        egui::ScrollArea::vertical()
            .id_source("historique_scroll")
            .max_height(90.0)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for ligne in &self.historique {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.weak(egui::RichText::new(ligne).monospace());
                    });
                }
            });
    }

    /* ------------------------ Entrée ------------------------ */

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: sin(30)+5!, 2^3^2, sqrt(2)×π")
                .id_source("entree_edit")
                .code_editor(),
        );

        // Si on a cliqué un bouton (pavé / DEL / AC / etc.), on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        // On évite les déclenchements "globaux" quand l'utilisateur clique ailleurs.
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.evaluer();
            self.focus_entree = true;
        }

        // --- Clavier : Backspace = DEL (seulement si le champ est focus) ---
        // TextEdit gère déjà Backspace "normal", mais notre effacer() est
        // utile pour retirer des motifs complets ("sin(", "sqrt(", ...) et
        // pour tout effacer quand un résultat ou une erreur est affiché.
        let backspace = ui.input(|i| i.key_pressed(egui::Key::Backspace));
        if resp.has_focus() && backspace {
            self.effacer();
            self.focus_entree = true;
        }
    }

    /* ------------------------ Sortie : résultat ou erreur ------------------------ */

    fn ui_sortie(&mut self, ui: &mut egui::Ui) {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if let Some(msg) = &self.erreur {
                ui.colored_label(
                    ui.visuals().error_fg_color,
                    egui::RichText::new(msg).monospace().size(28.0),
                );
            } else if let Some(r) = &self.resultat {
                ui.label(
                    egui::RichText::new(r)
                        .monospace()
                        .size(36.0)
                        .color(ui.visuals().strong_text_color()),
                );
            } else {
                ui.weak(egui::RichText::new(" ").monospace().size(36.0));
            }
        });
    }

    /* ------------------------ Pavé (5 colonnes) ------------------------ */

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calc_sci")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_action(ui, "AC", "Tout effacer", Action::ResetTotal);
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Effacer);
                self.bouton_insert(ui, "(", "(", false);
                self.bouton_insert(ui, ")", ")", false);
                self.bouton_insert(ui, "÷", "÷", true);
                ui.end_row();

                self.bouton_insert(ui, "sin", "sin(", false);
                self.bouton_insert(ui, "7", "7", false);
                self.bouton_insert(ui, "8", "8", false);
                self.bouton_insert(ui, "9", "9", false);
                self.bouton_insert(ui, "×", "×", true);
                ui.end_row();

                self.bouton_insert(ui, "cos", "cos(", false);
                self.bouton_insert(ui, "4", "4", false);
                self.bouton_insert(ui, "5", "5", false);
                self.bouton_insert(ui, "6", "6", false);
                self.bouton_insert(ui, "-", "-", true);
                ui.end_row();

                self.bouton_insert(ui, "tan", "tan(", false);
                self.bouton_insert(ui, "1", "1", false);
                self.bouton_insert(ui, "2", "2", false);
                self.bouton_insert(ui, "3", "3", false);
                self.bouton_insert(ui, "+", "+", true);
                ui.end_row();

                self.bouton_insert(ui, "log", "log(", false);
                self.bouton_insert(ui, "0", "0", false);
                self.bouton_insert(ui, ".", ".", false);
                self.bouton_insert(ui, "!", "!", true);
                self.bouton_action(ui, "=", "Évalue l'expression", Action::Evaluer);
                ui.end_row();

                self.bouton_insert(ui, "√", "sqrt(", false);
                self.bouton_insert(ui, "xʸ", "^", true);
                self.bouton_insert(ui, "π", "π", false);
                self.bouton_insert(ui, "e", "e", false);
                self.bouton_action(ui, "DR", "Bascule degrés/radians", Action::BasculerMode);
                ui.end_row();
            });

        // ln n'a pas sa touche dans la grille d'origine : on le garde accessible
        ui.horizontal(|ui| {
            self.bouton_insert(ui, "ln", "ln(", false);
        });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 34.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ResetTotal => self.reset_total(),
                Action::Effacer => self.effacer(),
                Action::Evaluer => self.evaluer(),
                Action::BasculerMode => self.basculer_mode(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str, op: bool) {
        let resp = ui.add_sized([56.0, 34.0], egui::Button::new(label));
        if resp.clicked() {
            self.inserer(to_insert, op);
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ResetTotal,
    Effacer,
    Evaluer,
    BasculerMode,
}
