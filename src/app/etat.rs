//! src/app/etat.rs
//!
//! État UI (sans rendu).
//!
//! Rôle : posséder la calculatrice (noyau), le miroir de l’écran reçu par
//! abonnement, les formulaires des outils de conversion, le thème et la
//! visibilité des panneaux ; offrir des actions simples sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici : les touches sont transmises telles quelles au noyau.
//! - Une entrée de conversion illisible ne change rien (pas de message d’erreur).
//! - Le stockage est injecté ; un échec d’écriture du thème est seulement tracé.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{trace, warn};

use crate::noyau::calculatrice::EXPRESSION_VIDE;
use crate::noyau::{Calculatrice, Operateur};
use crate::outils::longueur::UniteLongueur;
use crate::outils::poids::UnitePoids;
use crate::outils::pourcentage::{calculer_pourcentage, formater_pourcentage, OperationPourcentage};
use crate::outils::pret::{calculer_pret, ResultatPret};
use crate::outils::temperature::{convertir_temperature, UniteTemperature};
use crate::outils::temps::{calculer_temps, Duree, OperationTemps};
use crate::outils::{convertir_lineaire, lire_entier, lire_nombre, Unite};
use crate::stockage::Stockage;

/// Clé de stockage du thème ("dark" / "light").
pub const CLE_THEME: &str = "calculator-theme";

/* ------------------------ Outils ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outil {
    Base,
    Poids,
    Pret,
    Pourcentage,
    Longueur,
    Temperature,
    Temps,
}

impl Outil {
    pub const TOUS: [Outil; 7] = [
        Outil::Base,
        Outil::Poids,
        Outil::Pret,
        Outil::Pourcentage,
        Outil::Longueur,
        Outil::Temperature,
        Outil::Temps,
    ];

    pub fn titre(self) -> &'static str {
        match self {
            Outil::Base => "Calculatrice",
            Outil::Poids => "Poids",
            Outil::Pret => "Prêt",
            Outil::Pourcentage => "Pourcentage",
            Outil::Longueur => "Longueurs",
            Outil::Temperature => "Température",
            Outil::Temps => "Durées",
        }
    }
}

/* ------------------------ Touches du pavé ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(char),
    Point,
    Signe,
    Pourcent,
    Op(Operateur),
    Egal,
    Effacer,
}

impl Touche {
    /// Clavier physique -> touche du pavé.
    pub fn depuis_caractere(c: char) -> Option<Touche> {
        match c {
            '0'..='9' => Some(Touche::Chiffre(c)),
            '.' | ',' => Some(Touche::Point),
            '%' => Some(Touche::Pourcent),
            '=' => Some(Touche::Egal),
            _ => Operateur::depuis_symbole(c.encode_utf8(&mut [0; 4])).map(Touche::Op),
        }
    }
}

/* ------------------------ Écran (miroir abonné) ------------------------ */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ecran {
    pub affichage: String,
    pub expression: String,
}

/* ------------------------ Formulaires ------------------------ */

#[derive(Clone, Debug, PartialEq)]
pub struct ResultatOutil {
    pub valeur: String,
    pub unite: &'static str,
}

#[derive(Clone, Debug)]
pub struct FormConversion<U: Unite> {
    pub valeur: String,
    pub de: U,
    pub vers: U,
    pub resultat: Option<ResultatOutil>,
}

impl<U: Unite> FormConversion<U> {
    fn new(de: U, vers: U) -> Self {
        Self {
            valeur: String::new(),
            de,
            vers,
            resultat: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FormPret {
    pub montant: String,
    pub taux: String,
    pub annees: String,
    pub resultat: Option<ResultatPret>,
}

#[derive(Clone, Debug)]
pub struct FormPourcentage {
    pub operation: OperationPourcentage,
    pub v1: String,
    pub v2: String,
    pub resultat: Option<String>,
}

#[derive(Clone, Debug)]
pub struct FormTemps {
    /// [h1, m1, s1, h2, m2, s2]
    pub champs: [String; 6],
    pub operation: OperationTemps,
    pub resultat: Option<String>,
}

/* ------------------------ AppCalc ------------------------ */

pub struct AppCalc {
    pub calc: Calculatrice,
    pub ecran: Rc<RefCell<Ecran>>,
    stockage: Rc<dyn Stockage>,

    // --- navigation / apparence ---
    pub outil: Outil,
    pub menu_ouvert: bool,
    pub historique_visible: bool,
    pub sombre: bool,
    pub(crate) theme_applique: Option<bool>,

    // --- outils ---
    pub poids: FormConversion<UnitePoids>,
    pub longueur: FormConversion<UniteLongueur>,
    pub temperature: FormConversion<UniteTemperature>,
    pub pret: FormPret,
    pub pourcentage: FormPourcentage,
    pub temps: FormTemps,
}

impl AppCalc {
    pub fn nouveau(stockage: Rc<dyn Stockage>) -> Self {
        let mut calc = Calculatrice::new(Rc::clone(&stockage));

        // même forme que ce que l’observateur recevra
        let expression = match calc.expression() {
            "" => EXPRESSION_VIDE,
            e => e,
        };
        let ecran = Rc::new(RefCell::new(Ecran {
            affichage: calc.affichage().to_string(),
            expression: expression.to_string(),
        }));
        let miroir = Rc::clone(&ecran);
        calc.abonner(move |affichage, expression| {
            trace!(affichage, expression, "écran");
            let mut e = miroir.borrow_mut();
            e.affichage = affichage.to_string();
            e.expression = expression.to_string();
        });

        let sombre = match stockage.lire(CLE_THEME) {
            Ok(v) => v.as_deref() == Some("dark"),
            Err(e) => {
                warn!("lecture du thème impossible: {e}");
                false
            }
        };

        Self {
            calc,
            ecran,
            stockage,
            outil: Outil::Base,
            menu_ouvert: false,
            historique_visible: false,
            sombre,
            theme_applique: None,
            poids: FormConversion::new(UnitePoids::Kilogramme, UnitePoids::Livre),
            longueur: FormConversion::new(UniteLongueur::Metre, UniteLongueur::Pied),
            temperature: FormConversion::new(UniteTemperature::Celsius, UniteTemperature::Fahrenheit),
            pret: FormPret::default(),
            pourcentage: FormPourcentage {
                operation: OperationPourcentage::Pourcentage,
                v1: String::new(),
                v2: String::new(),
                resultat: None,
            },
            temps: FormTemps {
                champs: Default::default(),
                operation: OperationTemps::Ajouter,
                resultat: None,
            },
        }
    }

    /* ------------------------ Navigation / thème ------------------------ */

    pub fn changer_outil(&mut self, outil: Outil) {
        self.outil = outil;
        self.menu_ouvert = false;
    }

    pub fn basculer_historique(&mut self) {
        self.historique_visible = !self.historique_visible;
    }

    pub fn basculer_theme(&mut self) {
        self.sombre = !self.sombre;
        let v = if self.sombre { "dark" } else { "light" };
        if let Err(e) = self.stockage.ecrire(CLE_THEME, v) {
            warn!("thème non persisté: {e}");
        }
    }

    /* ------------------------ Calculatrice de base ------------------------ */

    pub fn appuyer(&mut self, t: Touche) {
        match t {
            Touche::Chiffre(d) => self.calc.chiffre(d),
            Touche::Point => self.calc.point_decimal(),
            Touche::Signe => self.calc.signe(),
            Touche::Pourcent => self.calc.pourcentage(),
            Touche::Op(op) => self.calc.operateur(op),
            Touche::Egal => self.calc.egal(),
            Touche::Effacer => self.calc.effacer(),
        }
    }

    /* ------------------------ Outils de conversion ------------------------ */

    pub fn convertir_poids(&mut self) {
        let f = &mut self.poids;
        if let Some(v) = lire_nombre(&f.valeur).filter(|v| *v != 0.0) {
            let r = convertir_lineaire(v, f.de, f.vers);
            f.resultat = Some(ResultatOutil {
                valeur: format!("{r:.4}"),
                unite: f.vers.code(),
            });
        }
    }

    pub fn convertir_longueur(&mut self) {
        let f = &mut self.longueur;
        if let Some(v) = lire_nombre(&f.valeur).filter(|v| *v != 0.0) {
            let r = convertir_lineaire(v, f.de, f.vers);
            f.resultat = Some(ResultatOutil {
                valeur: format!("{r:.6}"),
                unite: f.vers.code(),
            });
        }
    }

    /// 0 est une température valide (contrairement aux autres outils).
    pub fn convertir_temperature(&mut self) {
        let f = &mut self.temperature;
        if let Some(t) = lire_nombre(&f.valeur) {
            let r = convertir_temperature(t, f.de, f.vers);
            f.resultat = Some(ResultatOutil {
                valeur: format!("{r:.2}"),
                unite: f.vers.code(),
            });
        }
    }

    /// Taux nul accepté (mensualité = montant / nb de mois).
    pub fn calculer_pret(&mut self) {
        let f = &mut self.pret;
        let montant = lire_nombre(&f.montant).filter(|v| *v != 0.0);
        let taux = lire_nombre(&f.taux);
        let annees = lire_nombre(&f.annees).filter(|v| *v != 0.0);

        if let (Some(p), Some(t), Some(n)) = (montant, taux, annees) {
            if let Some(r) = calculer_pret(p, t, n) {
                f.resultat = Some(r);
            }
        }
    }

    pub fn calculer_pourcentage(&mut self) {
        let f = &mut self.pourcentage;
        let v1 = lire_nombre(&f.v1).filter(|v| *v != 0.0);
        let v2 = lire_nombre(&f.v2).filter(|v| *v != 0.0);

        if let (Some(a), Some(b)) = (v1, v2) {
            if let Some(r) = calculer_pourcentage(f.operation, a, b) {
                f.resultat = Some(formater_pourcentage(f.operation, r));
            }
        }
    }

    /// Champs vides ou illisibles = 0. Durée démesurée : rien ne change.
    pub fn calculer_temps(&mut self) {
        let f = &mut self.temps;
        let [h1, m1, s1, h2, m2, s2] = f.champs.each_ref().map(|c| lire_entier(c));
        let t1 = Duree::new(h1, m1, s1);
        let t2 = Duree::new(h2, m2, s2);
        if let Some(r) = calculer_temps(t1, t2, f.operation) {
            f.resultat = Some(r);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stockage::StockageMemoire;

    fn app() -> AppCalc {
        AppCalc::nouveau(Rc::new(StockageMemoire::default()))
    }

    #[test]
    fn ecran_suit_la_calculatrice() {
        let mut a = app();
        for c in "12+3=".chars() {
            a.appuyer(Touche::depuis_caractere(c).unwrap());
        }
        let e = a.ecran.borrow();
        assert_eq!(e.affichage, "15");
        assert_eq!(e.expression, "12 + 3");
    }

    #[test]
    fn clavier_vers_touches() {
        assert_eq!(Touche::depuis_caractere('7'), Some(Touche::Chiffre('7')));
        assert_eq!(Touche::depuis_caractere('*'), Some(Touche::Op(Operateur::Fois)));
        assert_eq!(Touche::depuis_caractere('÷'), Some(Touche::Op(Operateur::Divise)));
        assert_eq!(Touche::depuis_caractere(','), Some(Touche::Point));
        assert_eq!(Touche::depuis_caractere('q'), None);
    }

    #[test]
    fn theme_persiste() {
        let stockage: Rc<dyn Stockage> = Rc::new(StockageMemoire::default());
        let mut a = AppCalc::nouveau(Rc::clone(&stockage));
        assert!(!a.sombre);
        a.basculer_theme();
        assert_eq!(stockage.lire(CLE_THEME).unwrap().as_deref(), Some("dark"));

        let b = AppCalc::nouveau(stockage);
        assert!(b.sombre);
    }

    #[test]
    fn changer_outil_ferme_le_menu() {
        let mut a = app();
        a.menu_ouvert = true;
        a.changer_outil(Outil::Temps);
        assert_eq!(a.outil, Outil::Temps);
        assert!(!a.menu_ouvert);
    }

    #[test]
    fn conversion_entree_invalide_sans_effet() {
        let mut a = app();
        a.poids.valeur = "abc".into();
        a.convertir_poids();
        assert!(a.poids.resultat.is_none());

        a.poids.valeur = "0".into();
        a.convertir_poids();
        assert!(a.poids.resultat.is_none());

        a.poids.valeur = "1".into();
        a.poids.de = UnitePoids::Tonne;
        a.poids.vers = UnitePoids::Kilogramme;
        a.convertir_poids();
        assert_eq!(
            a.poids.resultat,
            Some(ResultatOutil {
                valeur: "1000.0000".into(),
                unite: "kg",
            })
        );

        // nouvelle entrée invalide : le résultat précédent reste
        a.poids.valeur = String::new();
        a.convertir_poids();
        assert!(a.poids.resultat.is_some());
    }

    #[test]
    fn temperature_zero_accepte() {
        let mut a = app();
        a.temperature.valeur = "0".into();
        a.convertir_temperature();
        let r = a.temperature.resultat.unwrap();
        assert_eq!((r.valeur.as_str(), r.unite), ("32.00", "°F"));
    }

    #[test]
    fn longueur_six_decimales() {
        let mut a = app();
        a.longueur.valeur = "1".into();
        a.longueur.de = UniteLongueur::Kilometre;
        a.longueur.vers = UniteLongueur::Metre;
        a.convertir_longueur();
        assert_eq!(a.longueur.resultat.unwrap().valeur, "1000.000000");
    }

    #[test]
    fn pret_et_pourcentage() {
        let mut a = app();
        a.pret.montant = "12000".into();
        a.pret.taux = "0".into();
        a.pret.annees = "1".into();
        a.calculer_pret();
        assert_eq!(a.pret.resultat.unwrap().mensualite, 1000.0);

        a.pourcentage.operation = OperationPourcentage::Ajouter;
        a.pourcentage.v1 = "10".into();
        a.pourcentage.v2 = "200".into();
        a.calculer_pourcentage();
        assert_eq!(a.pourcentage.resultat.as_deref(), Some("220.00"));
    }

    #[test]
    fn temps_champs_vides() {
        let mut a = app();
        a.temps.champs[0] = "1".into();
        a.temps.champs[1] = "30".into();
        a.temps.champs[4] = "45".into();
        a.calculer_temps();
        assert_eq!(a.temps.resultat.as_deref(), Some("02:15:00"));

        a.temps.operation = OperationTemps::Soustraire;
        a.calculer_temps();
        assert_eq!(a.temps.resultat.as_deref(), Some("00:45:00"));
    }

    #[test]
    fn temps_heures_demesurees_sans_effet() {
        let mut a = app();
        a.temps.champs[0] = "3000000000000000".into();
        a.calculer_temps();
        assert!(a.temps.resultat.is_none());

        a.temps.champs[0] = "2".into();
        a.calculer_temps();
        assert_eq!(a.temps.resultat.as_deref(), Some("02:00:00"));

        // le résultat précédent reste affiché
        a.temps.champs[3] = "3000000000000000".into();
        a.calculer_temps();
        assert_eq!(a.temps.resultat.as_deref(), Some("02:00:00"));
    }
}
