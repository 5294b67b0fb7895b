// src/config.rs
//
// Configuration (TOML, optionnelle)
// ---------------------------------
// <config_dir>/calculatrice-touches/config.toml :
//
//   langue = "fr"          # es | en | fr
//   theme = "sombre"       # clair | sombre
//   [historique]
//   persister = true
//   fichier = "/chemin/etat.json"
//
// Fichier absent => défauts. Fichier illisible => warn! + défauts.

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::noyau::Langue;

/// Dossier de l’application (config + données).
pub const NOM_DOSSIER: &str = "calculatrice-touches";

/// Variable d’environnement prioritaire pour la langue.
pub const VAR_LANGUE: &str = "CALC_LANGUE";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Clair,
    Sombre,
}

impl Theme {
    pub fn bascule(self) -> Self {
        match self {
            Theme::Clair => Theme::Sombre,
            Theme::Sombre => Theme::Clair,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ConfigCalc {
    pub langue: Option<Langue>,
    pub theme: Option<Theme>,
    pub historique: Option<ConfigHistorique>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ConfigHistorique {
    pub persister: Option<bool>,
    pub fichier: Option<PathBuf>,
}

impl ConfigCalc {
    /// Config utilisateur ; défauts si absente ou invalide.
    pub fn charger() -> Self {
        Self::chemin()
            .and_then(|p| Self::depuis_chemin(&p))
            .unwrap_or_default()
    }

    pub fn depuis_chemin(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Lecture de la config impossible {:?}: {}", path, err);
                return None;
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!("Config invalide {:?}: {}", path, err);
                None
            }
        }
    }

    pub fn chemin() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(NOM_DOSSIER).join("config.toml"))
    }

    /// CALC_LANGUE, puis le fichier, puis LANG (espagnol à défaut).
    pub fn langue(&self) -> Langue {
        let code = env::var(VAR_LANGUE).ok();
        self.resoudre_langue(code.as_deref())
    }

    fn resoudre_langue(&self, code_env: Option<&str>) -> Langue {
        code_env
            .and_then(Langue::depuis_code)
            .or(self.langue)
            .unwrap_or_else(Langue::detecter)
    }

    pub fn persister(&self) -> bool {
        self.historique
            .as_ref()
            .and_then(|h| h.persister)
            .unwrap_or(true)
    }

    pub fn fichier(&self) -> Option<&Path> {
        self.historique.as_ref().and_then(|h| h.fichier.as_deref())
    }
}
