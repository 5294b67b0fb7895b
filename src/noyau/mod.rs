//! Noyau de la calculatrice à touches
//!
//! Organisation interne :
//! - operation.rs  : vocabulaire fermé des jetons (binaires, unaires, commandes)
//! - arith.rs      : bibliothèque arithmétique f64 (résultat fini ou ErreurCalc)
//! - format.rs     : lecture des opérandes + normalisation des résultats
//! - historique.rs : 10 dernières opérations (FIFO)
//! - libelles.rs   : noms affichés des opérations (es / en / fr)
//! - machine.rs    : machine à états (jeton -> état -> affichage)

pub mod arith;
pub mod format;
pub mod historique;
pub mod libelles;
pub mod machine;
pub mod operation;

#[cfg(test)]
mod tests_scientifiques;



// API publique minimale
pub use historique::Historique;
pub use libelles::Langue;
pub use machine::{Affichage, Calculatrice, PuitsHistorique};
pub use operation::{Binaire, Jeton, Unaire};
