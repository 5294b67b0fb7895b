//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder la calculatrice de la fenêtre, le thème et la sauvegarde,
//! et relayer les jetons (clavier ou pavé) vers le noyau.
//!
//! Contrats :
//! - Aucune arithmétique ici : tout passe par `Calculatrice::appliquer`.
//! - Un échec de sauvegarde est journalisé, jamais affiché comme une erreur de calcul.

use crate::config::{ConfigCalc, Theme};
use crate::noyau::{Affichage, Calculatrice, Jeton, Langue};
use crate::persistance::Persistance;

#[derive(Debug)]
pub struct AppCalc {
    pub calc: Calculatrice,
    pub affichage: Affichage,
    pub theme: Theme,
    pub langue: Langue,
    persistance: Persistance,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(&ConfigCalc::default())
    }
}

impl AppCalc {
    pub fn new(config: &ConfigCalc) -> Self {
        let persistance = match (config.persister(), config.fichier()) {
            (false, _) => Persistance::desactivee(),
            (true, Some(f)) => Persistance::vers(f),
            (true, None) => Persistance::par_defaut(),
        };
        Self::avec_persistance(config, persistance)
    }

    pub fn avec_persistance(config: &ConfigCalc, persistance: Persistance) -> Self {
        let langue = config.langue();
        let sauvegarde = persistance.charger();

        // Le fichier de config l’emporte sur le dernier thème choisi.
        let theme = config.theme.or(sauvegarde.theme).unwrap_or_default();

        let mut calc = Calculatrice::new()
            .avec_libelles(langue)
            .avec_puits(persistance.clone());
        calc.restaurer_historique(sauvegarde.historique);

        tracing::info!(
            ?langue,
            ?theme,
            fichier = ?persistance.chemin(),
            historique = calc.historique().len(),
            "calculatrice prête"
        );

        let affichage = calc.affichage();
        Self {
            calc,
            affichage,
            theme,
            langue,
            persistance,
        }
    }

    /* ------------------------ Actions ------------------------ */

    pub fn appliquer(&mut self, jeton: Jeton) {
        self.affichage = self.calc.appliquer(jeton);
    }

    pub fn basculer_theme(&mut self) {
        self.theme = self.theme.bascule();
        if let Err(e) = self.persistance.enregistrer_theme(self.theme) {
            tracing::warn!("Échec de sauvegarde du thème: {e}");
        }
    }

    /// Historique, le plus récent en premier.
    pub fn lignes_historique(&self) -> Vec<&str> {
        let mut v: Vec<&str> = self.calc.historique().lignes().collect();
        v.reverse();
        v
    }
}
