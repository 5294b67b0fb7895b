// src/noyau/libelles.rs
//
// Libellés (traductions) des opérations pour l’historique
// -------------------------------------------------------
// Le noyau ne voit qu’une recherche tag -> nom affiché.
// Sans libellés, il écrit les tags internes ("add", "sqrt", …).

use serde::Deserialize;

/// Recherche exacte d’un libellé ; `None` => le noyau garde le tag.
pub trait Libelles {
    fn nom(&self, tag: &str) -> Option<&str>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Langue {
    #[default]
    Es,
    En,
    Fr,
}

const ES: &[(&str, &str)] = &[
    ("add", "suma"),
    ("subtract", "resta"),
    ("multiply", "multiplica"),
    ("divide", "divide"),
    ("exponent", "exponencial"),
    ("sine", "seno"),
    ("cosine", "coseno"),
    ("tangent", "tangente"),
    ("log10", "logaritmo"),
    ("sqrt", "raíz cuadrada"),
    ("square", "potencia"),
    ("factorial", "factorial"),
    ("percent", "porcentaje"),
    ("error", "Error"),
];

const EN: &[(&str, &str)] = &[
    ("add", "add"),
    ("subtract", "subtract"),
    ("multiply", "multiply"),
    ("divide", "divide"),
    ("exponent", "exponential"),
    ("sine", "sine"),
    ("cosine", "cosine"),
    ("tangent", "tangent"),
    ("log10", "logarithm"),
    ("sqrt", "square root"),
    ("square", "power"),
    ("factorial", "factorial"),
    ("percent", "percent"),
    ("error", "Error"),
];

const FR: &[(&str, &str)] = &[
    ("add", "addition"),
    ("subtract", "soustraction"),
    ("multiply", "multiplication"),
    ("divide", "division"),
    ("exponent", "exponentielle"),
    ("sine", "sinus"),
    ("cosine", "cosinus"),
    ("tangent", "tangente"),
    ("log10", "logarithme"),
    ("sqrt", "racine carrée"),
    ("square", "carré"),
    ("factorial", "factorielle"),
    ("percent", "pourcentage"),
    ("error", "Erreur"),
];

impl Langue {
    /// "fr", "fr_CA.UTF-8", "EN"… -> langue connue.
    pub fn depuis_code(code: &str) -> Option<Self> {
        let prefixe: String = code
            .trim()
            .chars()
            .take(2)
            .collect::<String>()
            .to_ascii_lowercase();
        match prefixe.as_str() {
            "es" => Some(Langue::Es),
            "en" => Some(Langue::En),
            "fr" => Some(Langue::Fr),
            _ => None,
        }
    }

    /// Langue du système (LANG), espagnol à défaut.
    pub fn detecter() -> Self {
        std::env::var("LANG")
            .ok()
            .and_then(|l| Self::depuis_code(&l))
            .unwrap_or_default()
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Langue::Es => ES,
            Langue::En => EN,
            Langue::Fr => FR,
        }
    }
}

impl Libelles for Langue {
    fn nom(&self, tag: &str) -> Option<&str> {
        self.table()
            .iter()
            .find(|(cle, _)| *cle == tag)
            .map(|(_, nom)| *nom)
    }
}
