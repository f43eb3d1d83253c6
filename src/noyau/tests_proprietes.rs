//! Tests de propriétés : comportements attendus de la calculatrice de base
//! et du calculateur de temps, vus de l’extérieur (touches -> écran).

use std::rc::Rc;

use super::calculatrice::Calculatrice;
use super::format::formater_nombre;
use super::historique::CAPACITE_HISTORIQUE;
use super::jetons::{lire_numeral, Operateur};
use crate::outils::temps::{calculer_temps, Duree, OperationTemps};
use crate::stockage::StockageMemoire;

fn calc() -> Calculatrice {
    Calculatrice::new(Rc::new(StockageMemoire::default()))
}

fn chiffres(c: &mut Calculatrice, s: &str) {
    for d in s.chars() {
        c.chiffre(d);
    }
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn prop_saisie_concatene_les_chiffres() {
    for s in ["1", "12", "987654", "1000", "40302"] {
        let mut c = calc();
        chiffres(&mut c, s);
        assert_eq!(c.affichage(), s, "saisie {s:?}");
    }
}

#[test]
fn prop_zero_de_tete_absorbe() {
    let mut c = calc();
    chiffres(&mut c, "05");
    assert_eq!(c.affichage(), "5");

    let mut c = calc();
    chiffres(&mut c, "0007");
    assert_eq!(c.affichage(), "7");
}

/* ------------------------ Évaluation ------------------------ */

#[test]
fn prop_six_plus_deux() {
    let mut c = calc();
    c.chiffre('6');
    c.operateur(Operateur::Plus);
    c.chiffre('2');
    c.egal();
    assert_eq!(c.affichage(), "8");
}

#[test]
fn prop_six_divise_zero() {
    let mut c = calc();
    c.chiffre('6');
    c.operateur(Operateur::Divise);
    c.chiffre('0');
    c.egal();
    assert_eq!(c.affichage(), "Error");
}

#[test]
fn prop_chainage_sur_resultat() {
    let mut c = calc();
    chiffres(&mut c, "12");
    c.operateur(Operateur::Fois);
    chiffres(&mut c, "3");
    c.egal();
    let r = c.affichage().to_string();
    assert_eq!(r, "36");

    c.operateur(Operateur::Plus);
    c.chiffre('3');
    assert_eq!(c.expression(), format!("{r} + 3"));
    c.egal();
    assert_eq!(c.affichage(), "39");
}

/* ------------------------ Historique ------------------------ */

#[test]
fn prop_historique_borne_a_dix() {
    let mut c = calc();
    for i in 1..=11 {
        c.effacer();
        chiffres(&mut c, &i.to_string());
        c.operateur(Operateur::Plus);
        c.chiffre('0');
        c.egal();
        assert!(c.historique().len() <= CAPACITE_HISTORIQUE);
    }

    let h = c.historique();
    assert_eq!(h.len(), CAPACITE_HISTORIQUE);
    assert_eq!(h.get(0).unwrap().expression, "11 + 0");
    assert!(h.iter().all(|e| e.expression != "1 + 0"));
}

/* ------------------------ Formatage ------------------------ */

#[test]
fn prop_formatage_aller_retour() {
    for v in [0.0, 1.0, -2.5, 0.125, 42.0, 1234.0, 98765.4, -123456.0] {
        let s = formater_nombre(v);
        assert!(s.len() <= 12, "{s:?}");
        assert_eq!(lire_numeral(&s), Ok(v), "aller-retour de {v}");
    }
}

/* ------------------------ ± et % ------------------------ */

#[test]
fn prop_signe() {
    let mut c = calc();
    c.signe();
    assert_eq!(c.affichage(), "0");

    c.chiffre('7');
    c.signe();
    assert_eq!(c.affichage(), "-7");
    c.signe();
    assert_eq!(c.affichage(), "7");
}

#[test]
fn prop_pourcentage() {
    let mut c = calc();
    chiffres(&mut c, "50");
    c.pourcentage();
    assert_eq!(c.affichage(), "0.5");
}

/* ------------------------ Calculateur de temps ------------------------ */

#[test]
fn prop_temps_addition_et_difference() {
    let t1 = Duree::new(1, 30, 0);
    let t2 = Duree::new(0, 45, 0);
    assert_eq!(calculer_temps(t1, t2, OperationTemps::Ajouter).as_deref(), Some("02:15:00"));
    assert_eq!(calculer_temps(t1, t2, OperationTemps::Soustraire).as_deref(), Some("00:45:00"));
}
