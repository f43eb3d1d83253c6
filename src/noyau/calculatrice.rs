//! src/noyau/calculatrice.rs
//!
//! Machine à états de la calculatrice de base.
//!
//! Rôle : posséder l’écran (affichage), l’expression en cours, le drapeau
//! "vient de calculer" et l’historique ; consommer les touches une par une.
//!
//! Contrats :
//! - une touche est traitée entièrement avant la suivante (aucune file cachée)
//! - chaque touche se termine par une notification (affichage, expression)
//! - seul `egal()` évalue ; un échec donne l’affichage "Error", jamais de panique
//! - l’historique est persisté après chaque évaluation réussie ; un échec de
//!   stockage est tracé puis oublié (l’état en mémoire fait foi)
//! - aucune référence vers la vue : la vue s’abonne

use std::fmt;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::stockage::Stockage;

use super::eval::evaluer;
use super::format::formater_nombre;
use super::historique::Historique;
use super::jetons::{lire_numeral, Operateur};

/// Affichage après un échec d’évaluation.
pub const AFFICHAGE_ERREUR: &str = "Error";

/// Affichage initial / après effacement.
pub const AFFICHAGE_ZERO: &str = "0";

/// Expression transmise aux abonnés quand elle est vide.
pub const EXPRESSION_VIDE: &str = " ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Etat {
    /// Initial ou après C : comme `Saisie` avec une expression vide.
    Efface,
    /// Construction d’un numéral.
    Saisie,
    /// Un opérateur vient d’être ajouté, l’écran montre "0".
    OperateurEnAttente,
    /// Après "=" : résultat ou "Error" à l’écran.
    Resultat,
}

/// Abonné : reçoit (affichage, expression-ou-espace) après chaque touche.
pub type Observateur = Box<dyn FnMut(&str, &str)>;

pub struct Calculatrice {
    affichage: String,
    expression: String,
    vient_de_calculer: bool,
    etat: Etat,
    historique: Historique,
    stockage: Rc<dyn Stockage>,
    observateurs: Vec<Observateur>,
}

impl fmt::Debug for Calculatrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculatrice")
            .field("affichage", &self.affichage)
            .field("expression", &self.expression)
            .field("vient_de_calculer", &self.vient_de_calculer)
            .field("etat", &self.etat)
            .field("historique", &self.historique.len())
            .field("observateurs", &self.observateurs.len())
            .finish()
    }
}

impl Calculatrice {
    /// Démarre à "0", historique relu depuis le stockage (vide si absent/illisible).
    pub fn new(stockage: Rc<dyn Stockage>) -> Self {
        let historique = Historique::charger(stockage.as_ref());
        debug!(entrees = historique.len(), "historique chargé");

        Self {
            affichage: AFFICHAGE_ZERO.to_string(),
            expression: String::new(),
            vient_de_calculer: false,
            etat: Etat::Efface,
            historique,
            stockage,
            observateurs: Vec::new(),
        }
    }

    pub fn abonner(&mut self, obs: impl FnMut(&str, &str) + 'static) {
        self.observateurs.push(Box::new(obs));
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn etat(&self) -> Etat {
        self.etat
    }

    pub fn historique(&self) -> &Historique {
        &self.historique
    }

    /* ------------------------ Touches ------------------------ */

    /// 0-9. Après un résultat : nouveau numéral ; sinon on ajoute ("0" s’efface).
    pub fn chiffre(&mut self, d: char) {
        if !d.is_ascii_digit() {
            debug!(?d, "chiffre ignoré");
            return;
        }

        if self.vient_de_calculer {
            self.affichage = d.to_string();
            self.expression = d.to_string();
            self.vient_de_calculer = false;
        } else {
            if self.affichage == AFFICHAGE_ZERO {
                self.affichage = d.to_string();
            } else {
                self.affichage.push(d);
            }
            self.expression.push(d);
        }

        self.etat = Etat::Saisie;
        self.notifier();
    }

    /// "." : un seul point par numéral, ajouté à l’écran et à l’expression.
    /// Après un résultat, "8" devient "8." : le résultat reste chaînable.
    pub fn point_decimal(&mut self) {
        if self.affichage != AFFICHAGE_ERREUR && !self.affichage.contains('.') {
            self.affichage.push('.');
            self.expression.push('.');
            if !self.vient_de_calculer {
                self.etat = Etat::Saisie;
            }
        }
        self.notifier();
    }

    /// ± : bascule le "-" de tête de l’affichage seulement (l’expression n’est pas réécrite).
    pub fn signe(&mut self) {
        if self.affichage != AFFICHAGE_ZERO && self.affichage != AFFICHAGE_ERREUR {
            match self.affichage.strip_prefix('-') {
                Some(reste) => self.affichage = reste.to_string(),
                None => self.affichage.insert(0, '-'),
            }
        }
        self.notifier();
    }

    /// % : affichage / 100 ; "%" est seulement noté dans l’expression.
    /// Après un opérateur, "6 + " devient "6 + %" : plus d’opérateur en attente.
    pub fn pourcentage(&mut self) {
        if let Ok(v) = lire_numeral(&self.affichage) {
            self.affichage = formater_nombre(v / 100.0);
            self.expression.push('%');
            if self.etat == Etat::OperateurEnAttente {
                self.etat = Etat::Saisie;
            }
        }
        self.notifier();
    }

    /// + − × ÷ : enchaîne sur le résultat précédent, ou ajoute à l’expression.
    /// Un opérateur déjà en attente est remplacé (jamais deux opérateurs de suite).
    /// Sur une expression vide, l’opérateur reste en tête (" + ") et "=" échouera.
    pub fn operateur(&mut self, op: Operateur) {
        let sym = op.symbole();

        if self.vient_de_calculer {
            self.expression = format!("{} {sym} ", self.affichage);
            self.vient_de_calculer = false;
        } else {
            if self.etat == Etat::OperateurEnAttente {
                self.retirer_operateur_final();
            }
            self.expression.push_str(&format!(" {sym} "));
        }

        self.affichage = AFFICHAGE_ZERO.to_string();
        self.etat = Etat::OperateurEnAttente;
        self.notifier();
    }

    /// = : évalue, formate, historise, persiste. Échec => "Error".
    pub fn egal(&mut self) {
        match evaluer(&self.expression) {
            Ok(v) => {
                let formate = formater_nombre(v);
                debug!(expression = %self.expression, resultat = %formate, "calcul");

                self.historique
                    .enregistrer(self.expression.clone(), formate.clone());
                if let Err(e) = self.historique.persister(self.stockage.as_ref()) {
                    warn!("historique non persisté: {e}");
                }

                self.affichage = formate;
            }
            Err(e) => {
                debug!(expression = %self.expression, "échec d’évaluation: {e}");
                self.affichage = AFFICHAGE_ERREUR.to_string();
            }
        }

        self.vient_de_calculer = true;
        self.etat = Etat::Resultat;
        self.notifier();
    }

    /// C : remise à zéro de l’écran et de l’expression (l’historique reste).
    pub fn effacer(&mut self) {
        self.affichage = AFFICHAGE_ZERO.to_string();
        self.expression.clear();
        self.vient_de_calculer = false;
        self.etat = Etat::Efface;
        self.notifier();
    }

    /// Vide l’historique (mémoire + stockage).
    pub fn effacer_historique(&mut self) {
        self.historique.effacer_tout();
        if let Err(e) = self.historique.persister(self.stockage.as_ref()) {
            warn!("historique vidé en mémoire seulement: {e}");
        }
    }

    /* ------------------------ Interne ------------------------ */

    /// "6 + " -> "6"
    fn retirer_operateur_final(&mut self) {
        let garde = self
            .expression
            .trim_end()
            .trim_end_matches(|c: char| Operateur::depuis_symbole(c.encode_utf8(&mut [0; 4])).is_some())
            .trim_end()
            .len();
        self.expression.truncate(garde);
    }

    fn notifier(&mut self) {
        debug!(
            etat = ?self.etat,
            affichage = %self.affichage,
            expression = %self.expression,
            "transition"
        );

        let affichage = self.affichage.as_str();
        let expression = if self.expression.is_empty() {
            EXPRESSION_VIDE
        } else {
            self.expression.as_str()
        };
        for obs in self.observateurs.iter_mut() {
            obs(affichage, expression);
        }
    }
}
