// src/noyau/operation.rs
//
// Vocabulaire fermé des jetons (touches logiques)
// -----------------------------------------------
// - Binaire : opérations à deux opérandes (une seule en attente à la fois)
// - Unaire  : fonctions appliquées immédiatement à l’entrée courante
// - Jeton   : tout ce qu’une source (clavier, pavé) peut envoyer au noyau

/// Opérations binaires (calculatrice “à exécution immédiate”).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Binaire {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponent,
}

/// Fonctions unaires (angles en degrés pour sin/cos/tan).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Unaire {
    Sine,
    Cosine,
    Tangent,
    Log10,
    Sqrt,
    Square,
    Factorial,
    Percent,
}

/// Jeton logique : une touche, sans rien savoir de l’événement brut.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Jeton {
    /// Chiffre '0'..='9'.
    Chiffre(char),
    Point,
    Operateur(Binaire),
    Fonction(Unaire),
    /// Touche EXP du pavé : démarre un exposant, ou l’évalue s’il est déjà en attente.
    Exposant,
    Pi,
    Rappel,
    Egal,
    Retour,
    Effacer,
}

impl Binaire {
    pub const TOUTES: [Binaire; 5] = [
        Binaire::Add,
        Binaire::Subtract,
        Binaire::Multiply,
        Binaire::Divide,
        Binaire::Exponent,
    ];

    /// Nom interne (clé de traduction + repli si aucun libellé).
    pub fn tag(self) -> &'static str {
        match self {
            Binaire::Add => "add",
            Binaire::Subtract => "subtract",
            Binaire::Multiply => "multiply",
            Binaire::Divide => "divide",
            Binaire::Exponent => "exponent",
        }
    }

    /// Symbole affiché entre les opérandes.
    pub fn symbole(self) -> &'static str {
        match self {
            Binaire::Add => "+",
            Binaire::Subtract => "-",
            Binaire::Multiply => "×",
            Binaire::Divide => "÷",
            Binaire::Exponent => "^",
        }
    }
}

impl Unaire {
    pub const TOUTES: [Unaire; 8] = [
        Unaire::Sine,
        Unaire::Cosine,
        Unaire::Tangent,
        Unaire::Log10,
        Unaire::Sqrt,
        Unaire::Square,
        Unaire::Factorial,
        Unaire::Percent,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Unaire::Sine => "sine",
            Unaire::Cosine => "cosine",
            Unaire::Tangent => "tangent",
            Unaire::Log10 => "log10",
            Unaire::Sqrt => "sqrt",
            Unaire::Square => "square",
            Unaire::Factorial => "factorial",
            Unaire::Percent => "percent",
        }
    }
}
