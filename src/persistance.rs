// src/persistance.rs
//
// Sauvegarde locale (historique + thème)
// --------------------------------------
// Un seul fichier JSON : <data_local_dir>/calculatrice-touches/etat.json
//
//   { "historique": ["2 suma 3 = 5", ...], "theme": "sombre" }
//
// Lecture-modification-écriture : enregistrer l’un garde l’autre.
// Aucune erreur ne remonte au noyau : tout échec est journalisé (warn!).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{Theme, NOM_DOSSIER};
use crate::noyau::historique::HISTORIQUE_MAX;
use crate::noyau::{Historique, PuitsHistorique};

#[derive(Debug, Error)]
pub enum ErreurPersistance {
    #[error("accès fichier: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON invalide: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sauvegarde {
    pub historique: Vec<String>,
    pub theme: Option<Theme>,
}

/// Poignée vers le fichier de sauvegarde ; `None` = persistance coupée.
#[derive(Clone, Debug, Default)]
pub struct Persistance {
    chemin: Option<PathBuf>,
}

impl Persistance {
    pub fn par_defaut() -> Self {
        Self {
            chemin: dirs::data_local_dir().map(|d| d.join(NOM_DOSSIER).join("etat.json")),
        }
    }

    pub fn desactivee() -> Self {
        Self { chemin: None }
    }

    pub fn vers(chemin: impl Into<PathBuf>) -> Self {
        Self {
            chemin: Some(chemin.into()),
        }
    }

    pub fn chemin(&self) -> Option<&Path> {
        self.chemin.as_deref()
    }

    /// Sauvegarde lue au démarrage ; vide si absente ou illisible.
    /// L’historique est ramené aux 10 lignes les plus récentes.
    pub fn charger(&self) -> Sauvegarde {
        let Some(path) = self.chemin.as_deref() else {
            return Sauvegarde::default();
        };
        if !path.exists() {
            return Sauvegarde::default();
        }

        match lire(path) {
            Ok(mut s) => {
                let surplus = s.historique.len().saturating_sub(HISTORIQUE_MAX);
                s.historique.drain(..surplus);
                s
            }
            Err(e) => {
                tracing::warn!("Sauvegarde illisible {:?}: {}", path, e);
                Sauvegarde::default()
            }
        }
    }

    pub fn enregistrer_historique(&self, historique: &Historique) -> Result<(), ErreurPersistance> {
        self.modifier(|s| s.historique = historique.to_vec())
    }

    pub fn enregistrer_theme(&self, theme: Theme) -> Result<(), ErreurPersistance> {
        self.modifier(|s| s.theme = Some(theme))
    }

    fn modifier(&self, f: impl FnOnce(&mut Sauvegarde)) -> Result<(), ErreurPersistance> {
        let Some(path) = self.chemin.as_deref() else {
            return Ok(());
        };

        // Un fichier corrompu est écrasé plutôt que de bloquer la sauvegarde.
        let mut s = if path.exists() {
            lire(path).unwrap_or_default()
        } else {
            Sauvegarde::default()
        };
        f(&mut s);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&s)?;
        fs::write(path, json)?;
        Ok(())
    }
}

fn lire(path: &Path) -> Result<Sauvegarde, ErreurPersistance> {
    let contenu = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contenu)?)
}

impl PuitsHistorique for Persistance {
    fn ajouter(&mut self, _ligne: &str, historique: &Historique) {
        if let Err(e) = self.enregistrer_historique(historique) {
            tracing::warn!("Échec de sauvegarde de l’historique: {e}");
        }
    }
}
