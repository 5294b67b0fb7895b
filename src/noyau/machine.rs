// src/noyau/machine.rs
//
// Machine à états des touches (calculatrice à exécution immédiate)
// ----------------------------------------------------------------
// Deux modes :
// - saisie du 1er opérande  (operation == None)
// - saisie du 2e opérande   (operation == Some(..))
// `attend_operande` décide si le prochain chiffre remplace ou s’ajoute.
//
// Une seule opération binaire en attente : 2 + 3 + 4 = vaut (2+3)+4.
// Toute erreur de la bibliothèque arithmétique est absorbée ici :
// l’entrée passe à la sentinelle ERREUR, la dernière réponse à 0.

use std::f64::consts::PI;
use std::fmt;

use tracing::{debug, warn};

use super::arith::{evaluer_binaire, evaluer_unaire, ErreurCalc};
use super::format::{lire_operande, normaliser, reparer_entree, texte_nombre, ERREUR};
use super::historique::Historique;
use super::libelles::Libelles;
use super::operation::{Binaire, Jeton, Unaire};

/// Reçoit chaque nouvelle ligne d’historique (déjà bornée par le noyau).
/// Un échec côté puits ne doit jamais remonter au noyau.
pub trait PuitsHistorique {
    fn ajouter(&mut self, ligne: &str, historique: &Historique);
}

/// Données de la calculatrice (aucune persistance ici).
#[derive(Clone, Debug, PartialEq)]
pub struct EtatCalc {
    /// Valeur en cours de saisie ou dernier résultat ; lisible sauf si == ERREUR.
    pub entree: String,
    /// Opérande gauche ; vide si aucune opération en attente.
    pub operande_precedente: String,
    pub operation: Option<Binaire>,
    /// Vrai juste après un opérateur / une fonction : le prochain chiffre remplace l’entrée.
    pub attend_operande: bool,
    /// Vrai si l’entrée vient d’une fonction unaire : elle compte comme 2e opérande saisi.
    pub operande_fourni: bool,
    pub derniere_reponse: f64,
    pub historique: Historique,
}

impl Default for EtatCalc {
    fn default() -> Self {
        Self {
            entree: "0".to_string(),
            operande_precedente: String::new(),
            operation: None,
            attend_operande: false,
            operande_fourni: false,
            derniere_reponse: 0.0,
            historique: Historique::new(),
        }
    }
}

/// Ce que l’affichage reçoit après chaque jeton.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Affichage {
    pub texte: String,
    pub operande_precedente: String,
    pub operation: Option<Binaire>,
    pub entree: String,
}

/// Une instance par session utilisateur ; un hôte multi-thread la garde derrière un seul Mutex.
pub struct Calculatrice {
    etat: EtatCalc,
    libelles: Option<Box<dyn Libelles>>,
    puits: Option<Box<dyn PuitsHistorique>>,
}

impl fmt::Debug for Calculatrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculatrice")
            .field("etat", &self.etat)
            .field("libelles", &self.libelles.is_some())
            .field("puits", &self.puits.is_some())
            .finish()
    }
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculatrice {
    pub fn new() -> Self {
        Self {
            etat: EtatCalc::default(),
            libelles: None,
            puits: None,
        }
    }

    pub fn avec_libelles(mut self, libelles: impl Libelles + 'static) -> Self {
        self.libelles = Some(Box::new(libelles));
        self
    }

    pub fn avec_puits(mut self, puits: impl PuitsHistorique + 'static) -> Self {
        self.puits = Some(Box::new(puits));
        self
    }

    /// Recharge un historique sauvegardé (sans le renvoyer au puits).
    pub fn restaurer_historique<I>(&mut self, lignes: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.etat.historique = Historique::depuis(lignes);
    }

    pub fn etat(&self) -> &EtatCalc {
        &self.etat
    }

    pub fn entree(&self) -> &str {
        &self.etat.entree
    }

    pub fn historique(&self) -> &Historique {
        &self.etat.historique
    }

    pub fn en_erreur(&self) -> bool {
        self.etat.entree == ERREUR
    }

    /* ------------------------ Point d’entrée unique (sources de jetons) ------------------------ */

    pub fn appliquer(&mut self, jeton: Jeton) -> Affichage {
        debug!(?jeton, "jeton reçu");

        match jeton {
            Jeton::Chiffre(c) => self.chiffre(c),
            Jeton::Point => self.point(),
            Jeton::Operateur(op) => self.operateur(op),
            Jeton::Fonction(f) => self.fonction(f),
            Jeton::Exposant => self.exposant(),
            Jeton::Pi => self.pi(),
            Jeton::Rappel => self.rappel(),
            Jeton::Egal => self.egal(),
            Jeton::Retour => self.retour(),
            Jeton::Effacer => self.effacer(),
        }

        let affichage = self.affichage();
        debug!(texte = %affichage.texte, "affichage");
        affichage
    }

    /* ------------------------ Une entrée par classe de jeton ------------------------ */

    /// Chiffre : remplace (opérande neuf, erreur, "0") ou s’ajoute.
    pub fn chiffre(&mut self, c: char) {
        if !c.is_ascii_digit() {
            warn!(%c, "chiffre invalide ignoré");
            return;
        }

        let e = &mut self.etat;
        if e.attend_operande || e.entree == ERREUR {
            e.entree = c.to_string();
            e.attend_operande = false;
            e.operande_fourni = false;
            return;
        }

        let candidat = if e.entree == "0" {
            c.to_string()
        } else {
            format!("{}{c}", e.entree)
        };

        // Refus silencieux si la saisie déborde (ex: 400 chiffres => inf)
        if lire_operande(&candidat).is_ok() {
            e.entree = candidat;
        } else {
            debug!(entree = %e.entree, "chiffre refusé (débordement)");
        }
    }

    /// Point décimal : un seul par nombre ; sur opérande neuf => "0.".
    pub fn point(&mut self) {
        let e = &mut self.etat;
        if e.attend_operande || e.entree == ERREUR {
            e.entree = "0.".to_string();
            e.attend_operande = false;
            e.operande_fourni = false;
            return;
        }

        if e.entree.contains('.') {
            debug!("point en double ignoré");
            return;
        }

        let candidat = format!("{}.", e.entree);
        if lire_operande(&candidat).is_ok() {
            e.entree = candidat;
        }
    }

    /// Opérateur binaire : résout l’opération en attente si un 2e opérande a été saisi.
    pub fn operateur(&mut self, op: Binaire) {
        let a_resoudre = self.etat.operation.filter(|_| self.second_operande_saisi());

        match a_resoudre {
            Some(en_cours) => {
                let texte = match self.resoudre(en_cours, Phrase::Libelle) {
                    Ok(t) => t,
                    Err(_) => {
                        self.etat.derniere_reponse = 0.0;
                        ERREUR.to_string()
                    }
                };
                self.etat.entree = texte.clone();
                self.etat.operande_precedente = texte;
            }
            None => {
                self.etat.operande_precedente = self.etat.entree.clone();
            }
        }

        self.etat.operation = Some(op);
        self.etat.attend_operande = true;
        self.etat.operande_fourni = false;
    }

    /// Fonction unaire : évaluée tout de suite ; l’opération en attente reste intacte.
    pub fn fonction(&mut self, f: Unaire) {
        let a = match lire_operande(&self.etat.entree) {
            Ok(a) => a,
            Err(e) => {
                warn!(fonction = f.tag(), erreur = %e, "opérande illisible");
                self.tomber_en_erreur();
                self.etat.attend_operande = true;
                self.etat.operande_fourni = true;
                return;
            }
        };

        let resultat = evaluer_unaire(f, a).map(normaliser);
        let ligne = format!(
            "{}({}) = {}",
            self.libelle(f.tag()),
            texte_nombre(a),
            self.texte_resultat(&resultat)
        );
        self.journaliser(ligne);

        match resultat {
            Ok(t) => self.etat.entree = t,
            Err(e) => {
                warn!(fonction = f.tag(), erreur = %e, "évaluation en erreur");
                self.tomber_en_erreur();
            }
        }

        self.etat.attend_operande = true;
        self.etat.operande_fourni = true;
    }

    /// Touche EXP : 1er appui = prépare base^x ; 2e appui (exposant en attente) = évalue.
    pub fn exposant(&mut self) {
        if self.etat.operation != Some(Binaire::Exponent) {
            self.etat.operande_precedente = self.etat.entree.clone();
            self.etat.operation = Some(Binaire::Exponent);
            self.etat.attend_operande = true;
            self.etat.operande_fourni = false;
            return;
        }

        match self.resoudre(Binaire::Exponent, Phrase::Puissance) {
            Ok(t) => self.etat.entree = t,
            Err(_) => self.tomber_en_erreur(),
        }

        self.etat.operation = None;
        self.etat.operande_precedente.clear();
        self.etat.attend_operande = true;
        self.etat.operande_fourni = false;
    }

    /// π et rappel : l’entrée est remplacée, mais = et les opérateurs attendent encore un 2e opérande.
    pub fn pi(&mut self) {
        self.etat.entree = texte_nombre(PI);
        self.etat.attend_operande = true;
        self.etat.operande_fourni = false;
    }

    pub fn rappel(&mut self) {
        self.etat.entree = normaliser(self.etat.derniere_reponse);
        self.etat.attend_operande = true;
        self.etat.operande_fourni = false;
    }

    /// C : remet le calcul à zéro ; l’historique est conservé.
    pub fn effacer(&mut self) {
        let e = &mut self.etat;
        e.entree = "0".to_string();
        e.operande_precedente.clear();
        e.operation = None;
        e.attend_operande = true;
        e.operande_fourni = false;
    }

    /// Retour arrière, par ordre de priorité :
    /// a) opérande attendu + opération en attente => on annule l’opération (entrée intacte)
    /// b) plus d’un caractère => on retire le dernier
    /// c) opération en attente => on l’annule et on revient à l’opérande gauche
    /// d) sinon => "0"
    pub fn retour(&mut self) {
        let e = &mut self.etat;

        if e.attend_operande && e.operation.is_some() {
            e.operation = None;
            e.operande_precedente.clear();
            e.attend_operande = false;
            e.operande_fourni = false;
            return;
        }

        if e.entree == ERREUR {
            e.entree = "0".to_string();
            return;
        }

        if e.entree.chars().count() > 1 {
            let mut t = std::mem::take(&mut e.entree);
            t.pop();
            e.entree = reparer_entree(t);
        } else if e.operation.is_some() {
            e.operation = None;
            e.entree = reparer_entree(std::mem::take(&mut e.operande_precedente));
            e.attend_operande = false;
            e.operande_fourni = false;
        } else {
            e.entree = "0".to_string();
        }
    }

    /// = : résout l’opération en attente (rien si aucun 2e opérande saisi).
    pub fn egal(&mut self) {
        let op = match self.etat.operation {
            Some(op) if self.second_operande_saisi() => op,
            _ => {
                debug!("rien à résoudre");
                return;
            }
        };

        match self.resoudre(op, Phrase::selon(op)) {
            Ok(t) => {
                self.etat.derniere_reponse = lire_operande(&t).unwrap_or(0.0);
                self.etat.entree = t;
            }
            Err(_) => self.tomber_en_erreur(),
        }

        self.etat.operande_precedente.clear();
        self.etat.operation = None;
        self.etat.attend_operande = true;
        self.etat.operande_fourni = false;
    }

    /* ------------------------ Affichage ------------------------ */

    pub fn affichage(&self) -> Affichage {
        let e = &self.etat;
        let courant = self.texte_visible(&e.entree);

        let texte = match e.operation {
            Some(op) if !e.operande_precedente.is_empty() => {
                let gauche = self.texte_visible(&e.operande_precedente);
                if self.second_operande_saisi() {
                    format!("{gauche} {} {courant}", op.symbole())
                } else {
                    format!("{gauche} {}", op.symbole())
                }
            }
            _ => courant,
        };

        Affichage {
            texte,
            operande_precedente: e.operande_precedente.clone(),
            operation: e.operation,
            entree: e.entree.clone(),
        }
    }

    /* ------------------------ Outils internes ------------------------ */

    fn second_operande_saisi(&self) -> bool {
        !self.etat.attend_operande || self.etat.operande_fourni
    }

    /// Évalue `precedente op entree`, journalise, rend le texte normalisé.
    fn resoudre(&mut self, op: Binaire, phrase: Phrase) -> Result<String, ErreurCalc> {
        let gauche = lire_operande(&self.etat.operande_precedente);
        let droite = lire_operande(&self.etat.entree);

        let (g, d) = match (gauche, droite) {
            (Ok(g), Ok(d)) => (g, d),
            _ => {
                warn!(
                    op = op.tag(),
                    gauche = %self.etat.operande_precedente,
                    droite = %self.etat.entree,
                    "opérande illisible"
                );
                return Err(ErreurCalc::Illisible);
            }
        };

        let resultat = evaluer_binaire(op, g, d).map(normaliser);
        let affiche = self.texte_resultat(&resultat);

        let ligne = match phrase {
            Phrase::Puissance => format!("{}^{} = {affiche}", texte_nombre(g), texte_nombre(d)),
            Phrase::Libelle => format!(
                "{} {} {} = {affiche}",
                texte_nombre(g),
                self.libelle(op.tag()),
                texte_nombre(d)
            ),
        };
        self.journaliser(ligne);

        if let Err(e) = &resultat {
            warn!(op = op.tag(), erreur = %e, "évaluation en erreur");
        }
        resultat
    }

    fn tomber_en_erreur(&mut self) {
        self.etat.entree = ERREUR.to_string();
        self.etat.derniere_reponse = 0.0;
    }

    fn journaliser(&mut self, ligne: String) {
        debug!(%ligne, "historique");
        self.etat.historique.ajouter(ligne.clone());
        if let Some(puits) = self.puits.as_mut() {
            puits.ajouter(&ligne, &self.etat.historique);
        }
    }

    fn libelle<'a>(&'a self, tag: &'a str) -> &'a str {
        self.libelles
            .as_deref()
            .and_then(|l| l.nom(tag))
            .unwrap_or(tag)
    }

    /// Sans libellés : la sentinelle elle-même.
    fn libelle_erreur(&self) -> &str {
        self.libelles
            .as_deref()
            .and_then(|l| l.nom("error"))
            .unwrap_or(ERREUR)
    }

    fn texte_resultat(&self, resultat: &Result<String, ErreurCalc>) -> String {
        match resultat {
            Ok(t) => t.clone(),
            Err(_) => self.libelle_erreur().to_string(),
        }
    }

    fn texte_visible(&self, brut: &str) -> String {
        if brut == ERREUR {
            self.libelle_erreur().to_string()
        } else {
            brut.to_string()
        }
    }
}

/// Forme d’une ligne d’historique binaire.
#[derive(Clone, Copy)]
enum Phrase {
    /// "2 add 3 = 5" (chaînage par opérateur, et = hors exposant)
    Libelle,
    /// "2^10 = 1024" (touche EXP, et = sur un exposant)
    Puissance,
}

impl Phrase {
    fn selon(op: Binaire) -> Self {
        match op {
            Binaire::Exponent => Phrase::Puissance,
            _ => Phrase::Libelle,
        }
    }
}
