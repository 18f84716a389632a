//! Noyau — évaluation binaire (un opérateur, deux opérandes)
//!
//! Fonction totale : pas d’erreur possible. La division par zéro suit la
//! division flottante IEEE-754 (±∞ ou NaN), et ce résultat reste un opérande
//! valide pour la suite.

/// Les quatre opérations du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Addition,
    Soustraction,
    Multiplication,
    Division,
}

impl Operateur {
    /// Glyphe affiché (pavé + ligne « en attente »).
    pub fn symbole(self) -> char {
        match self {
            Operateur::Addition => '+',
            Operateur::Soustraction => '−',
            Operateur::Multiplication => '×',
            Operateur::Division => '÷',
        }
    }

    /// Accepte la forme clavier (`+ - * /`) et les glyphes (`− × ÷`).
    pub fn depuis_caractere(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Addition),
            '-' | '−' => Some(Operateur::Soustraction),
            '*' | '×' => Some(Operateur::Multiplication),
            '/' | '÷' => Some(Operateur::Division),
            _ => None,
        }
    }
}

/// gauche `op` droite, en double précision.
pub fn evaluer(gauche: f64, droite: f64, op: Operateur) -> f64 {
    match op {
        Operateur::Addition => gauche + droite,
        Operateur::Soustraction => gauche - droite,
        Operateur::Multiplication => gauche * droite,
        Operateur::Division => gauche / droite,
    }
}
