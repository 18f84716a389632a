// src/main.rs
//
// Calculatrice — point d’entrée NATIF + WEB (WASM)
// ------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : CLI (clap) + réglages TOML + journal (tracing)
//                                 puis eframe::run_native
// - WEB  (wasm32)              : eframe::WebRunner sur <canvas>, réglages par défaut
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;
mod reglages;

use app::AppCalc;
use reglages::Reglages;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::path::PathBuf;

    use anyhow::Context as _;
    use clap::Parser;
    use tracing_subscriber::EnvFilter;

    use super::{egui, AppCalc, Reglages, TITRE_APP};

    /// Calculatrice quatre opérations (pavé + clavier)
    #[derive(Parser, Debug)]
    #[command(name = "calculatrice", version)]
    pub struct Cli {
        /// Fichier de réglages (défaut : <config>/calculatrice/config.toml)
        #[arg(short, long)]
        pub config: Option<PathBuf>,

        /// Verbosité du journal (-v debug, -vv trace)
        #[arg(short, long, action = clap::ArgAction::Count)]
        pub verbose: u8,
    }

    /// RUST_LOG > -v > réglages.
    fn installer_journal(reglages: &Reglages, verbose: u8) {
        let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
            0 => EnvFilter::new(&reglages.journal.filtre),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        });

        tracing_subscriber::fmt().with_env_filter(filtre).init();
    }

    pub fn lancer() -> anyhow::Result<()> {
        let cli = Cli::parse();

        let reglages = Reglages::charger(cli.config.as_deref())
            .context("chargement des réglages")?;
        installer_journal(&reglages, cli.verbose);

        tracing::info!(
            largeur = reglages.fenetre.largeur,
            hauteur = reglages.fenetre.hauteur,
            zoom = reglages.affichage.zoom,
            "démarrage"
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(TITRE_APP)
                .with_inner_size([reglages.fenetre.largeur, reglages.fenetre.hauteur])
                .with_min_inner_size([280.0, 400.0]),
            ..Default::default()
        };

        eframe::run_native(
            TITRE_APP,
            options,
            Box::new(move |_cc| Ok(Box::new(AppCalc::new(&reglages)))),
        )
        .map_err(|e| anyhow::anyhow!("fenêtre eframe: {e}"))
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    natif::lancer()
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::HtmlCanvasElement;

    use super::{AppCalc, Reglages, TITRE_APP};

    /// `<canvas id="the_canvas_id">` attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Titre de l’onglet + canvas cible.
    fn preparer_page() -> Result<HtmlCanvasElement, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("document indisponible"))?;
        document.set_title(TITRE_APP);

        document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str("canvas introuvable (id dans index.html ?)"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("l’élément cible n’est pas un <canvas>"))
    }

    /// Démarrage automatique au chargement de la page.
    /// Pas de fichier de réglages côté navigateur : valeurs par défaut.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), JsValue> {
        let canvas = preparer_page()?;

        let reglages = Reglages::default();
        let options = eframe::WebOptions::default();
        tracing::info!(zoom = reglages.affichage.zoom, "démarrage (web)");

        eframe::WebRunner::new()
            .start(
                canvas,
                options,
                Box::new(move |_cc| Ok(Box::new(AppCalc::new(&reglages)))),
            )
            .await
    }
}
