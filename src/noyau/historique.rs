//! src/noyau/historique.rs
//!
//! Historique des calculs : liste bornée, plus récent en tête.
//!
//! Contrats :
//! - une entrée n’est créée que par une évaluation réussie, puis jamais modifiée
//! - capacité fixe (10) : l’éviction des plus anciennes est la seule suppression
//!   (hors `effacer_tout`)
//! - forme persistée : `[{"expression": "...", "result": "..."}, ...]`
//! - une forme persistée absente ou illisible donne un historique vide

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::stockage::Stockage;

use super::erreur::ErreurPersistance;

/// Nombre maximal d’entrées conservées.
pub const CAPACITE_HISTORIQUE: usize = 10;

/// Clé de stockage (partagée natif / localStorage).
pub const CLE_HISTORIQUE: &str = "calculator-history";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntreeHistorique {
    pub expression: String,
    #[serde(rename = "result")]
    pub resultat: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Historique {
    entrees: VecDeque<EntreeHistorique>,
}

impl Historique {
    /// Ajoute en tête puis tronque aux 10 plus récentes.
    pub fn enregistrer(&mut self, expression: impl Into<String>, resultat: impl Into<String>) {
        self.entrees.push_front(EntreeHistorique {
            expression: expression.into(),
            resultat: resultat.into(),
        });
        self.entrees.truncate(CAPACITE_HISTORIQUE);
    }

    pub fn effacer_tout(&mut self) {
        self.entrees.clear();
    }

    /// 0 = plus récente.
    #[cfg(test)]
    pub fn get(&self, index: usize) -> Option<&EntreeHistorique> {
        self.entrees.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntreeHistorique> {
        self.entrees.iter()
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }

    /* ------------------------ Forme persistée ------------------------ */

    pub fn serialiser(&self) -> Result<String, ErreurPersistance> {
        Ok(serde_json::to_string(&self.entrees)?)
    }

    /// JSON illisible => historique vide (jamais fatal).
    pub fn deserialiser(json: &str) -> Self {
        match serde_json::from_str::<Vec<EntreeHistorique>>(json) {
            Ok(mut v) => {
                v.truncate(CAPACITE_HISTORIQUE);
                Self { entrees: v.into() }
            }
            Err(e) => {
                warn!("historique persisté illisible, ignoré: {e}");
                Self::default()
            }
        }
    }

    /// Lecture au démarrage. Clé absente ou erreur de stockage => vide.
    pub fn charger(stockage: &dyn Stockage) -> Self {
        match stockage.lire(CLE_HISTORIQUE) {
            Ok(Some(json)) => Self::deserialiser(&json),
            Ok(None) => Self::default(),
            Err(e) => {
                warn!("lecture de l’historique impossible: {e}");
                Self::default()
            }
        }
    }

    /// Écrit l’historique complet sous `CLE_HISTORIQUE`.
    pub fn persister(&self, stockage: &dyn Stockage) -> Result<(), ErreurPersistance> {
        stockage.ecrire(CLE_HISTORIQUE, &self.serialiser()?)
    }
}
