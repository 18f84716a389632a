//! src/reglages.rs
//!
//! Réglages utilisateur (fichier TOML, tout est optionnel).
//!
//! ```toml
//! [fenetre]
//! largeur = 340.0
//! hauteur = 500.0
//!
//! [affichage]
//! zoom = 1.25
//!
//! [journal]
//! filtre = "calculatrice_quatre=debug"
//! ```
//!
//! Contrats :
//! - Fichier absent à l’emplacement par défaut => valeurs par défaut.
//! - Fichier donné explicitement (--config) => doit exister et être valide.
//! - Tailles et zoom : nombres finis > 0 (sinon erreur), zoom ensuite borné.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Garde-fous : zoom borné (illisible en dessous, absurde au-dessus).
const ZOOM_MIN: f32 = 0.5;
const ZOOM_MAX: f32 = 3.0;

#[derive(Debug, Error)]
pub enum ErreurReglages {
    #[error("lecture de {} impossible", .chemin.display())]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("réglages invalides dans {}", .chemin.display())]
    Syntaxe {
        chemin: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("{champ} doit être un nombre fini > 0 (lu : {valeur}) dans {}", .chemin.display())]
    Valeur {
        chemin: PathBuf,
        champ: &'static str,
        valeur: f32,
    },
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Reglages {
    pub fenetre: Fenetre,
    pub affichage: Affichage,
    pub journal: Journal,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Fenetre {
    pub largeur: f32,
    pub hauteur: f32,
}

impl Default for Fenetre {
    fn default() -> Self {
        Self {
            largeur: 320.0,
            hauteur: 460.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Affichage {
    pub zoom: f32,
}

impl Default for Affichage {
    fn default() -> Self {
        Self { zoom: 1.0 }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Journal {
    /// Directive `EnvFilter` (RUST_LOG reste prioritaire).
    pub filtre: String,
}

impl Default for Journal {
    fn default() -> Self {
        Self {
            filtre: "info".to_string(),
        }
    }
}

impl Reglages {
    /// Parse un contenu TOML. `chemin` ne sert qu’aux messages d’erreur.
    pub fn depuis_toml(contenu: &str, chemin: &Path) -> Result<Self, ErreurReglages> {
        let mut r: Reglages = toml::from_str(contenu).map_err(|source| ErreurReglages::Syntaxe {
            chemin: chemin.to_path_buf(),
            source,
        })?;
        r.fenetre.largeur = positif_fini(chemin, "fenetre.largeur", r.fenetre.largeur)?;
        r.fenetre.hauteur = positif_fini(chemin, "fenetre.hauteur", r.fenetre.hauteur)?;
        // clamp laisse passer NaN : on vérifie avant de borner.
        r.affichage.zoom =
            positif_fini(chemin, "affichage.zoom", r.affichage.zoom)?.clamp(ZOOM_MIN, ZOOM_MAX);
        Ok(r)
    }

    /// Emplacement par défaut : `<config>/calculatrice/config.toml`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn chemin_par_defaut() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("calculatrice").join("config.toml"))
    }

    /// Charge les réglages (natif seulement).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn charger(explicite: Option<&Path>) -> Result<Self, ErreurReglages> {
        let chemin = match explicite {
            Some(p) => p.to_path_buf(),
            None => match Self::chemin_par_defaut() {
                Some(p) if p.is_file() => p,
                _ => {
                    tracing::debug!("pas de fichier de réglages, valeurs par défaut");
                    return Ok(Self::default());
                }
            },
        };

        let contenu = std::fs::read_to_string(&chemin).map_err(|source| ErreurReglages::Lecture {
            chemin: chemin.clone(),
            source,
        })?;
        let r = Self::depuis_toml(&contenu, &chemin)?;
        tracing::info!(chemin = %chemin.display(), "réglages chargés");
        Ok(r)
    }
}

/// Tailles et zoom : nombre fini strictement positif.
fn positif_fini(chemin: &Path, champ: &'static str, valeur: f32) -> Result<f32, ErreurReglages> {
    if valeur.is_finite() && valeur > 0.0 {
        Ok(valeur)
    } else {
        Err(ErreurReglages::Valeur {
            chemin: chemin.to_path_buf(),
            champ,
            valeur,
        })
    }
}
