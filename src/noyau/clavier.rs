// src/noyau/clavier.rs
//
// Table clavier -> événement (sans egui).
// Noms de touches : "0".."9", "+", "-", "*", "/", "Enter", "=", ".", ",",
// "Backspace", "Delete", "Escape".

use super::eval::Operateur;
use super::saisie::{Chiffre, Evenement};

/// Événement associé à une touche, `None` si la touche n’est pas gérée.
pub fn evenement_pour_touche(touche: &str) -> Option<Evenement> {
    match touche {
        "Enter" | "=" => Some(Evenement::Egal),
        "." | "," => Some(Evenement::Decimale),
        "Backspace" | "Delete" => Some(Evenement::Retour),
        "Escape" => Some(Evenement::Effacer),
        _ => {
            let mut it = touche.chars();
            match (it.next(), it.next()) {
                (Some(c), None) => evenement_pour_caractere(c),
                _ => None,
            }
        }
    }
}

/// Texte tapé (un ou plusieurs caractères) : un événement par caractère reconnu.
pub fn evenements_pour_texte(texte: &str) -> Vec<Evenement> {
    texte.chars().filter_map(evenement_pour_caractere).collect()
}

fn evenement_pour_caractere(c: char) -> Option<Evenement> {
    if c.is_ascii_digit() {
        return Chiffre::depuis_caractere(c).map(Evenement::Chiffre);
    }
    match c {
        '+' | '-' | '*' | '/' => Operateur::depuis_caractere(c).map(Evenement::Operateur),
        '=' => Some(Evenement::Egal),
        '.' | ',' => Some(Evenement::Decimale),
        _ => None,
    }
}
