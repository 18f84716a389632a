//! Tests scénarios : séquences de touches complètes.
//!
//! Chaque séquence est jouée deux fois :
//! - par le clavier (noms de touches -> événements)
//! - par les boutons (événements construits directement)
//!
//! et les deux chemins doivent donner exactement le même état.

use super::clavier::evenement_pour_touche;
use super::eval::Operateur;
use super::saisie::{Chiffre, EtatCalc, Evenement, MAX_CHIFFRES};

/// Joue une séquence de touches séparées par des espaces, ex. "5 + 3 Enter".
fn taper(seq: &str) -> EtatCalc {
    seq.split_whitespace()
        .fold(EtatCalc::default(), |e, t| match evenement_pour_touche(t) {
            Some(ev) => e.appliquer(ev),
            None => panic!("touche non gérée dans le test: {t:?}"),
        })
}

/// Même séquence, côté boutons.
fn cliquer(evs: &[Evenement]) -> EtatCalc {
    evs.iter()
        .fold(EtatCalc::default(), |e, ev| e.appliquer(*ev))
}

fn c(n: u8) -> Evenement {
    Evenement::Chiffre(Chiffre::new(n).unwrap())
}

fn op(o: Operateur) -> Evenement {
    Evenement::Operateur(o)
}

#[test]
fn scenario_zero_puis_cinq() {
    assert_eq!(taper("0 5").affichage(), "5");
}

#[test]
fn scenario_deux_points() {
    assert_eq!(taper("1 . . 5").affichage(), "1.5");
    assert_eq!(taper("1 , . 5").affichage(), "1.5");
}

#[test]
fn scenario_seize_chiffres() {
    let e = taper("9 8 7 6 5 4 3 2 1 9 8 7 6 5 4 3");
    assert_eq!(e.affichage(), "987654321987654");
    assert_eq!(e.affichage().len(), MAX_CHIFFRES);
}

#[test]
fn scenario_substitution() {
    let e = taper("5 + -");
    assert_eq!(e.operande(), Some(5.0));
    assert_eq!(e.operateur(), Some(Operateur::Soustraction));
    assert_eq!(e.affichage(), "5");
}

#[test]
fn scenario_enchainement_pas_a_pas() {
    let e = taper("5 +");
    assert_eq!(e.operande(), Some(5.0));
    assert_eq!(e.operateur(), Some(Operateur::Addition));

    let e = e.appliquer(c(3));
    assert_eq!(e.affichage(), "3");

    let e = e.appliquer(op(Operateur::Multiplication));
    assert_eq!(e.affichage(), "8");
    assert_eq!(e.operande(), Some(8.0));
    assert_eq!(e.operateur(), Some(Operateur::Multiplication));

    let e = e.appliquer(c(2));
    assert_eq!(e.affichage(), "2");

    let e = e.appliquer(Evenement::Egal);
    assert_eq!(e.affichage(), "16");
    assert_eq!(e.operande(), None);
    assert_eq!(e.operateur(), None);
}

#[test]
fn scenario_effacer_depuis_n_importe_ou() {
    for seq in [
        "",
        "1 2 3",
        "5 +",
        "5 + 3 *",
        "1 / 0 Enter",
        "7 . 2 Backspace",
        "8 * 8 =",
    ] {
        let e = taper(seq).appliquer(Evenement::Effacer);
        assert_eq!(e, EtatCalc::default(), "seq={seq:?}");
        assert_eq!(e.affichage(), "0");
        assert!(!e.attente_operande());
    }
    assert_eq!(taper("4 2 Escape"), EtatCalc::default());
}

#[test]
fn scenario_retour_un_caractere() {
    assert_eq!(taper("7 Backspace").affichage(), "0");
    assert_eq!(taper("7 Delete Delete").affichage(), "0");
}

#[test]
fn scenario_retour_apres_operateur() {
    let avant = taper("1 2 +");
    let apres = taper("1 2 + Backspace");
    assert_eq!(avant, apres);
    assert_eq!(apres.affichage(), "12");
}

#[test]
fn scenario_retour_apres_egal() {
    let e = taper("1 2 + 3 Enter Backspace");
    assert_eq!(e.affichage(), "15");
}

#[test]
fn scenario_division_par_zero() {
    assert_eq!(taper("5 / 0 Enter").affichage(), "Infinity");
    assert_eq!(taper("0 / 0 =").affichage(), "NaN");
    assert_eq!(taper("5 - 8 = / 0 =").affichage(), "-Infinity");
}

#[test]
fn scenario_flottant_standard() {
    assert_eq!(taper(". 1 + . 2 =").affichage(), "0.30000000000000004");
    assert_eq!(taper("1 / 3 =").affichage(), "0.3333333333333333");
}

#[test]
fn scenario_resultat_reutilise() {
    // 2 + 3 = puis * 4 = : le résultat 5 devient l’opérande gauche.
    assert_eq!(taper("2 + 3 = * 4 =").affichage(), "20");
}

#[test]
fn clavier_et_boutons_indiscernables() {
    let cas: &[(&str, Vec<Evenement>)] = &[
        (
            "5 + 3 * 2 Enter",
            vec![
                c(5),
                op(Operateur::Addition),
                c(3),
                op(Operateur::Multiplication),
                c(2),
                Evenement::Egal,
            ],
        ),
        (
            "1 . 5 Backspace 7 / -",
            vec![
                c(1),
                Evenement::Decimale,
                c(5),
                Evenement::Retour,
                c(7),
                op(Operateur::Division),
                op(Operateur::Soustraction),
            ],
        ),
        (
            "9 Escape 0 0 4",
            vec![c(9), Evenement::Effacer, c(0), c(0), c(4)],
        ),
    ];

    for (seq, evs) in cas {
        assert_eq!(taper(seq), cliquer(evs), "seq={seq:?}");
    }
}
