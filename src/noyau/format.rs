// src/noyau/format.rs
//
// Texte <-> nombre pour l’entrée courante
// ---------------------------------------
// - lecture d’un opérande (fini, sinon Illisible)
// - écriture “à la JS” : entier sans “.0”, exposant hors de [1e-6, 1e21)
// - normalisation des résultats : notation scientifique >= 1e15,
//   12 décimales au plus, bruit < 1e-14 ramené à 0

use super::arith::{ErreurCalc, SEUIL_ZERO};

/// Sentinelle d’erreur : jamais lisible comme nombre.
pub const ERREUR: &str = "Error";

/// Au-delà : notation scientifique.
pub const SEUIL_SCIENTIFIQUE: f64 = 1e15;

/// Décimales gardées pour un résultat non entier.
pub const DECIMALES_MAX: usize = 12;

/// Chiffres de mantisse en notation scientifique.
const DECIMALES_SCIENTIFIQUE: usize = 6;

/// Lit un opérande : le texte doit donner un nombre fini.
pub fn lire_operande(texte: &str) -> Result<f64, ErreurCalc> {
    match texte.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ErreurCalc::Illisible),
    }
}

/// Écriture la plus courte qui relit la même valeur.
pub fn texte_nombre(v: f64) -> String {
    if v == 0.0 {
        // -0 compris
        return "0".to_string();
    }
    let abs = v.abs();
    if !(1e-6..1e21).contains(&abs) {
        return avec_signe_exposant(format!("{v:e}"));
    }
    format!("{v}")
}

/// Normalise un résultat fini avant affichage / stockage.
pub fn normaliser(v: f64) -> String {
    if v.abs() >= SEUIL_SCIENTIFIQUE {
        return avec_signe_exposant(format!("{:.*e}", DECIMALES_SCIENTIFIQUE, v));
    }

    let mut v = v;
    if v.fract() != 0.0 {
        let arrondi = format!("{:.*}", DECIMALES_MAX, v);
        if let Ok(r) = arrondi.parse::<f64>() {
            v = r;
        }
    }
    if v.abs() < SEUIL_ZERO {
        v = 0.0;
    }
    texte_nombre(v)
}

/// "1.5e15" -> "1.5e+15" (le “-” reste tel quel).
fn avec_signe_exposant(s: String) -> String {
    match s.split_once('e') {
        Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
        _ => s,
    }
}

/// Retire la fin d’un texte jusqu’à ce qu’il redevienne lisible ("1e-" -> "1").
/// Vide ou "-" => "0".
pub fn reparer_entree(mut texte: String) -> String {
    while !texte.is_empty() && lire_operande(&texte).is_err() {
        texte.pop();
    }
    if texte.is_empty() {
        "0".to_string()
    } else {
        texte
    }
}
