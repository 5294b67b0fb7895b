// src/noyau/historique.rs
//
// Historique borné : les 10 dernières opérations, la plus ancienne sort la première.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

pub const HISTORIQUE_MAX: usize = 10;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Historique {
    lignes: VecDeque<String>,
}

impl Historique {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstruit depuis une liste (ex: sauvegarde) en gardant les plus récentes.
    pub fn depuis<I>(lignes: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut h = Self::new();
        for l in lignes {
            h.ajouter(l);
        }
        h
    }

    pub fn ajouter(&mut self, ligne: impl Into<String>) {
        self.lignes.push_back(ligne.into());
        while self.lignes.len() > HISTORIQUE_MAX {
            self.lignes.pop_front();
        }
    }

    /// Ordre chronologique (la plus ancienne d’abord).
    pub fn lignes(&self) -> impl Iterator<Item = &str> + '_ {
        self.lignes.iter().map(String::as_str)
    }

    pub fn derniere(&self) -> Option<&str> {
        self.lignes.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lignes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lignes.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.lignes.iter().cloned().collect()
    }
}
