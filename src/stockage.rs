//! src/stockage.rs
//!
//! Capacité de stockage clé → texte, injectée au démarrage.
//!
//! Le noyau ne touche jamais un stockage global : il reçoit un `&dyn Stockage`.
//! - natif : un fichier par clé dans le dossier de données utilisateur
//! - web   : window.localStorage ("calculator-history", "calculator-theme")
//! - tests : mémoire

use std::cell::RefCell;
use std::collections::HashMap;

use crate::noyau::erreur::ErreurPersistance;

pub trait Stockage {
    fn lire(&self, cle: &str) -> Result<Option<String>, ErreurPersistance>;
    fn ecrire(&self, cle: &str, valeur: &str) -> Result<(), ErreurPersistance>;
}

/* ------------------------ Mémoire ------------------------ */

/// Stockage volatil (tests, ou repli si le disque est indisponible).
#[derive(Default, Debug)]
pub struct StockageMemoire {
    valeurs: RefCell<HashMap<String, String>>,
}

impl Stockage for StockageMemoire {
    fn lire(&self, cle: &str) -> Result<Option<String>, ErreurPersistance> {
        Ok(self.valeurs.borrow().get(cle).cloned())
    }

    fn ecrire(&self, cle: &str, valeur: &str) -> Result<(), ErreurPersistance> {
        self.valeurs
            .borrow_mut()
            .insert(cle.to_string(), valeur.to_string());
        Ok(())
    }
}

/* ------------------------ Fichiers (natif) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
pub use fichier::StockageFichier;

#[cfg(not(target_arch = "wasm32"))]
mod fichier {
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    use tracing::debug;

    use super::Stockage;
    use crate::noyau::erreur::ErreurPersistance;

    /// Variable d’environnement : dossier de données explicite.
    pub const VAR_DOSSIER: &str = "CALCULATRICE_DONNEES";

    /// Sous-dossier dans `dirs::data_dir()`.
    const NOM_DOSSIER: &str = "calculatrice-multi";

    #[derive(Debug, Clone)]
    pub struct StockageFichier {
        dossier: PathBuf,
    }

    impl StockageFichier {
        pub fn new(dossier: impl Into<PathBuf>) -> Self {
            Self {
                dossier: dossier.into(),
            }
        }

        /// $CALCULATRICE_DONNEES, sinon <data_dir>/calculatrice-multi.
        pub fn depuis_environnement() -> Result<Self, ErreurPersistance> {
            if let Some(d) = std::env::var_os(VAR_DOSSIER) {
                return Ok(Self::new(d));
            }
            let base = dirs::data_dir().ok_or_else(|| {
                ErreurPersistance::Indisponible("dossier de données utilisateur introuvable".into())
            })?;
            Ok(Self::new(base.join(NOM_DOSSIER)))
        }

        pub fn dossier(&self) -> &Path {
            &self.dossier
        }

        fn chemin(&self, cle: &str) -> PathBuf {
            // clés internes uniquement ("calculator-history"...), on neutralise quand même
            let nom: String = cle
                .chars()
                .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
                .collect();
            self.dossier.join(format!("{nom}.json"))
        }
    }

    impl Stockage for StockageFichier {
        fn lire(&self, cle: &str) -> Result<Option<String>, ErreurPersistance> {
            match fs::read_to_string(self.chemin(cle)) {
                Ok(s) => Ok(Some(s)),
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
                Err(e) => Err(e.into()),
            }
        }

        /// Écrit dans un fichier temporaire puis renomme (pas de fichier à moitié écrit).
        fn ecrire(&self, cle: &str, valeur: &str) -> Result<(), ErreurPersistance> {
            fs::create_dir_all(&self.dossier)?;
            let cible = self.chemin(cle);
            let tmp = cible.with_extension("json.tmp");
            fs::write(&tmp, valeur)?;
            fs::rename(&tmp, &cible)?;
            debug!(chemin = %cible.display(), "stockage écrit");
            Ok(())
        }
    }
}

/* ------------------------ localStorage (web) ------------------------ */

#[cfg(target_arch = "wasm32")]
pub use navigateur::StockageNavigateur;

#[cfg(target_arch = "wasm32")]
mod navigateur {
    use super::Stockage;
    use crate::noyau::erreur::ErreurPersistance;

    fn js_err(e: wasm_bindgen::JsValue) -> ErreurPersistance {
        ErreurPersistance::Navigateur(format!("{e:?}"))
    }

    /// window.localStorage, récupéré à chaque accès (rien de global gardé ici).
    #[derive(Debug, Default, Clone, Copy)]
    pub struct StockageNavigateur;

    impl StockageNavigateur {
        fn storage(&self) -> Result<web_sys::Storage, ErreurPersistance> {
            let w = web_sys::window()
                .ok_or_else(|| ErreurPersistance::Indisponible("window() indisponible".into()))?;
            w.local_storage()
                .map_err(js_err)?
                .ok_or_else(|| ErreurPersistance::Indisponible("localStorage désactivé".into()))
        }
    }

    impl Stockage for StockageNavigateur {
        fn lire(&self, cle: &str) -> Result<Option<String>, ErreurPersistance> {
            self.storage()?.get_item(cle).map_err(js_err)
        }

        fn ecrire(&self, cle: &str, valeur: &str) -> Result<(), ErreurPersistance> {
            self.storage()?.set_item(cle, valeur).map_err(js_err)
        }
    }
}
