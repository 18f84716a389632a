// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier : lu au début de chaque frame, tant que la vue est affichée.
// Les événements reconnus sont RETIRÉS de la file egui (consommés),
// donc aucun bouton focus ne les reçoit une seconde fois.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::clavier::{evenement_pour_touche, evenements_pour_texte};
use crate::noyau::Evenement;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(zoom) = self.zoom_a_appliquer.take() {
            ctx.set_zoom_factor(zoom);
        }

        for ev in evenements_clavier(ctx) {
            self.envoyer(ev);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}

/// Prélève (et consomme) les événements clavier qui concernent la calculatrice.
///
/// - Caractères (chiffres, `+ - * /`, `=`, `.`, `,`) : via `Event::Text`
///   (déjà traduits par la disposition clavier de l’OS / du navigateur).
/// - Touches nommées (Enter, Backspace, Delete, Escape) : via `Event::Key`.
fn evenements_clavier(ctx: &egui::Context) -> Vec<Evenement> {
    let mut sortie = Vec::new();

    ctx.input_mut(|i| {
        i.events.retain(|e| {
            let evs: Vec<Evenement> = match e {
                egui::Event::Text(t) => evenements_pour_texte(t),
                egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } if modifiers.is_none() && est_touche_nommee(*key) => {
                    evenement_pour_touche(key.name()).into_iter().collect()
                }
                _ => Vec::new(),
            };

            let consomme = !evs.is_empty();
            sortie.extend(evs);
            !consomme
        });
    });

    sortie
}

fn est_touche_nommee(key: egui::Key) -> bool {
    matches!(
        key,
        egui::Key::Enter | egui::Key::Backspace | egui::Key::Delete | egui::Key::Escape
    )
}
