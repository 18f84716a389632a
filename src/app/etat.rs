//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder LA cellule mutable qui contient l’état de la calculatrice,
//! et la remplacer à chaque événement (clavier ou bouton, même chemin).
//!
//! Contrats :
//! - Aucune arithmétique ici (tout passe par `EtatCalc::appliquer`).
//! - La vue ne fait que lire `etat()`.

use tracing::debug;

use crate::noyau::{EtatCalc, Evenement};
use crate::reglages::Reglages;

#[derive(Clone, Debug)]
pub struct AppCalc {
    etat: EtatCalc,

    // Appliqué une seule fois, à la première frame (le Context n’existe pas avant).
    pub(crate) zoom_a_appliquer: Option<f32>,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(&Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: &Reglages) -> Self {
        Self {
            etat: EtatCalc::default(),
            zoom_a_appliquer: Some(reglages.affichage.zoom),
        }
    }

    pub fn etat(&self) -> &EtatCalc {
        &self.etat
    }

    /// Seule écriture de l’état : remplace la cellule par la transition.
    pub fn envoyer(&mut self, ev: Evenement) {
        let avant = std::mem::take(&mut self.etat);
        self.etat = avant.appliquer(ev);
        debug!(
            evenement = ?ev,
            affichage = self.etat.affichage(),
            operande = ?self.etat.operande(),
            operateur = ?self.etat.operateur(),
            "transition"
        );
    }
}
