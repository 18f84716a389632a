//! Noyau — machine de saisie (réducteur)
//!
//! L’état complet tient dans [`EtatCalc`] :
//! - `affichage`        : texte à l’écran (jamais vide)
//! - `en_attente`       : opérande gauche + opérateur, présents ensemble ou absents ensemble
//! - `attente_operande` : vrai => le prochain chiffre remplace l’affichage
//!
//! Chaque touche est une transition pure `(état, événement) -> état`.
//! L’hôte (UI) garde une seule cellule mutable et la remplace à chaque événement.

use super::eval::{evaluer, Operateur};
use super::format::{compter_chiffres, nombre_en_texte, texte_en_nombre};

/// Garde-fou : chiffres significatifs saisis au plus.
pub const MAX_CHIFFRES: usize = 15;

/// Un chiffre décimal (0..=9).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chiffre(u8);

impl Chiffre {
    pub fn new(d: u8) -> Option<Self> {
        (d <= 9).then_some(Self(d))
    }

    pub fn depuis_caractere(c: char) -> Option<Self> {
        c.to_digit(10).and_then(|d| Self::new(d as u8))
    }

    pub fn caractere(self) -> char {
        char::from(b'0' + self.0)
    }
}

/// Vocabulaire d’entrée commun au clavier et aux boutons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evenement {
    Chiffre(Chiffre),
    Operateur(Operateur),
    Decimale,
    Egal,
    Retour,
    Effacer,
}

/// Opération binaire commencée, en attente de son second opérande.
#[derive(Clone, Copy, Debug, PartialEq)]
struct OperationEnAttente {
    operande: f64,
    operateur: Operateur,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EtatCalc {
    affichage: String,
    en_attente: Option<OperationEnAttente>,
    attente_operande: bool,
}

impl Default for EtatCalc {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            en_attente: None,
            attente_operande: false,
        }
    }
}

impl EtatCalc {
    /* ------------------------ Lecture ------------------------ */

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn operande(&self) -> Option<f64> {
        self.en_attente.map(|o| o.operande)
    }

    pub fn operateur(&self) -> Option<Operateur> {
        self.en_attente.map(|o| o.operateur)
    }

    pub fn attente_operande(&self) -> bool {
        self.attente_operande
    }

    /// Ligne d’aide au-dessus de l’affichage, ex. `5 +`.
    pub fn resume_en_attente(&self) -> Option<String> {
        self.en_attente.map(|o| {
            format!("{} {}", nombre_en_texte(o.operande), o.operateur.symbole())
        })
    }

    /* ------------------------ Transitions ------------------------ */

    /// Point d’entrée unique (clavier ET boutons).
    pub fn appliquer(self, ev: Evenement) -> Self {
        match ev {
            Evenement::Chiffre(d) => self.chiffre(d),
            Evenement::Operateur(op) => self.operateur_choisi(op),
            Evenement::Decimale => self.decimale(),
            Evenement::Egal => self.egal(),
            Evenement::Retour => self.retour(),
            Evenement::Effacer => self.effacer(),
        }
    }

    pub fn chiffre(mut self, d: Chiffre) -> Self {
        if self.attente_operande {
            self.affichage = d.caractere().to_string();
            self.attente_operande = false;
        } else if self.affichage == "0" {
            self.affichage = d.caractere().to_string();
        } else if compter_chiffres(&self.affichage) < MAX_CHIFFRES {
            self.affichage.push(d.caractere());
        }
        self
    }

    pub fn decimale(mut self) -> Self {
        if self.attente_operande {
            self.affichage = "0.".to_string();
            self.attente_operande = false;
        } else if !self.affichage.contains('.') {
            self.affichage.push('.');
        }
        self
    }

    pub fn operateur_choisi(mut self, op: Operateur) -> Self {
        let valeur = texte_en_nombre(&self.affichage);

        self.en_attente = Some(match self.en_attente {
            None => OperationEnAttente {
                operande: valeur,
                operateur: op,
            },
            // Un nouvel opérande a été tapé : on calcule la paire en cours.
            Some(o) if !self.attente_operande => {
                let resultat = evaluer(o.operande, valeur, o.operateur);
                self.affichage = nombre_en_texte(resultat);
                OperationEnAttente {
                    operande: resultat,
                    operateur: op,
                }
            }
            // Opérateur pressé deux fois : substitution, pas de calcul.
            Some(o) => OperationEnAttente {
                operande: o.operande,
                operateur: op,
            },
        });
        self.attente_operande = true;
        self
    }

    pub fn egal(mut self) -> Self {
        let Some(o) = self.en_attente.take() else {
            return self;
        };
        let valeur = texte_en_nombre(&self.affichage);
        self.affichage = nombre_en_texte(evaluer(o.operande, valeur, o.operateur));
        self.attente_operande = true;
        self
    }

    pub fn retour(mut self) -> Self {
        if self.attente_operande {
            return self;
        }
        self.affichage.pop();
        if self.affichage.is_empty() {
            self.affichage.push('0');
        }
        self
    }

    pub fn effacer(self) -> Self {
        Self::default()
    }
}
