// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Ligne « en attente » (ex. "5 +") au-dessus de l’affichage
// - Affichage : texte de l’état, rendu tel quel (vide => "0")
// - Pavé 4 colonnes : chaque bouton envoie le MÊME événement que sa touche clavier

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::clavier::evenement_pour_touche;
use crate::noyau::format::texte_a_rendre;
use crate::noyau::{Evenement, Operateur};

/// Pavé (case vide = "").
const PAVE: [[&str; 4]; 5] = [
    ["C", "DEL", "", "÷"],
    ["7", "8", "9", "×"],
    ["4", "5", "6", "−"],
    ["1", "2", "3", "+"],
    ["0", "", ".", "="],
];

const TAILLE_BOUTON: [f32; 2] = [60.0, 44.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_affichage(ui);
        ui.add_space(10.0);
        self.ui_pave(ui);
    }

    fn ui_affichage(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    let resume = self.etat().resume_en_attente().unwrap_or_default();
                    ui.label(egui::RichText::new(resume).monospace().weak());

                    let texte = texte_a_rendre(self.etat().affichage());
                    ui.label(egui::RichText::new(texte).monospace().size(32.0).strong());
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for libelle in ligne {
                        self.bouton(ui, libelle);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, libelle: &str) {
        let Some(ev) = evenement_pour_bouton(libelle) else {
            ui.label("");
            return;
        };

        // Opérateur en attente de son second opérande : bouton marqué.
        let actif = matches!(
            ev,
            Evenement::Operateur(op)
                if self.etat().attente_operande() && self.etat().operateur() == Some(op)
        );

        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(libelle).selected(actif));
        if resp.clicked() {
            self.envoyer(ev);
        }
    }
}

/// Libellé du pavé -> événement (les glyphes ÷ × − sont propres aux boutons).
fn evenement_pour_bouton(libelle: &str) -> Option<Evenement> {
    match libelle {
        "C" => Some(Evenement::Effacer),
        "DEL" => Some(Evenement::Retour),
        _ => {
            let mut it = libelle.chars();
            match (it.next(), it.next()) {
                (Some(c), None) => Operateur::depuis_caractere(c)
                    .map(Evenement::Operateur)
                    .or_else(|| evenement_pour_touche(libelle)),
                _ => None,
            }
        }
    }
}
