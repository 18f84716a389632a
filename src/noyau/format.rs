// src/noyau/format.rs
//
// Texte d’affichage <-> nombre.
// - Résultat -> texte : plus courte écriture décimale qui relit le même f64.
// - Texte -> nombre   : ce que les touches ont construit (chiffres + un point).

use tracing::warn;

/// Au-delà (ou en deçà, hors zéro) : écriture exponentielle.
const SEUIL_EXP_HAUT: f64 = 1e21;
const SEUIL_EXP_BAS: f64 = 1e-6;

/// Texte d’un résultat de calcul.
///
/// - NaN -> `NaN`, ±∞ -> `Infinity` / `-Infinity`
/// - `-0` -> `0`
/// - très grands / très petits : `1e+21`, `1.5e-7`
/// - sinon décimal simple : `16`, `0.30000000000000004`
pub fn nombre_en_texte(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if v == 0.0 {
        return "0".to_string();
    }

    let a = v.abs();
    if a >= SEUIL_EXP_HAUT || a < SEUIL_EXP_BAS {
        // Exposant toujours signé : 1e+21, 1.5e-7.
        let s = format!("{v:e}");
        match s.split_once('e') {
            Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
            _ => s,
        }
    } else {
        format!("{v}")
    }
}

/// Valeur numérique du texte affiché.
///
/// Accepte le transitoire `3.` ainsi que les textes produits par
/// [`nombre_en_texte`]. Un texte illisible vaut 0 (jamais produit par les touches).
pub fn texte_en_nombre(s: &str) -> f64 {
    match s.parse::<f64>() {
        Ok(v) => v,
        Err(e) => {
            warn!(texte = s, erreur = %e, "affichage non numérique, lu comme 0");
            0.0
        }
    }
}

/// Nombre de chiffres (le point ne compte pas).
pub fn compter_chiffres(s: &str) -> usize {
    s.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Contrat de rendu : texte tel quel, vide => "0".
pub fn texte_a_rendre(s: &str) -> &str {
    if s.is_empty() {
        "0"
    } else {
        s
    }
}
