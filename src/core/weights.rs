//! Baryzentrische Gewichte und die Summe-gleich-1-Korrektur.

use anyhow::{bail, Result};

/// Toleranz für die Prüfung `alpha + beta + gamma == 1`.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Standardgewichte beim Start eines Modus.
pub const DEFAULT_WEIGHTS: [f64; 3] = [0.33, 0.33, 0.34];

/// Welches der drei Gewichte bearbeitet wurde.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightKind {
    Alpha,
    Beta,
    Gamma,
}

impl WeightKind {
    /// Alle Gewichte in Anzeige-Reihenfolge.
    pub const ALL: [WeightKind; 3] = [WeightKind::Alpha, WeightKind::Beta, WeightKind::Gamma];

    /// Name wie im Control-Panel angezeigt.
    pub fn label(self) -> &'static str {
        match self {
            WeightKind::Alpha => "alpha",
            WeightKind::Beta => "beta",
            WeightKind::Gamma => "gamma",
        }
    }
}

/// Ergebnis von [`clamp_difference`]: bearbeitetes Gewicht plus die beiden Nachbarn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampedWeights {
    pub edited: f64,
    pub other1: f64,
    pub other2: f64,
}

/// Korrigiert `other1`/`other2` so, dass die Summe aller drei Gewichte 1 ergibt.
///
/// `edited` bleibt unverändert. Ist `other1 == 0`, nimmt `other2` die gesamte
/// Differenz auf (diese Prüfung hat Vorrang), ist `other2 == 0`, nimmt `other1`
/// sie auf. Sonst wird die Differenz halbiert; ein dabei negativ werdender
/// Nachbar wird auf 0 gesetzt und sein Rest dem anderen abgezogen.
///
/// `edited` außerhalb von [0, 1] wird nicht korrigiert.
pub fn clamp_difference(edited: f64, other1: f64, other2: f64) -> ClampedWeights {
    let mut b = other1;
    let mut c = other2;
    let diff = edited + b + c - 1.0;

    if diff != 0.0 {
        if b == 0.0 {
            c -= diff;
        } else if c == 0.0 {
            b -= diff;
        } else {
            b -= diff / 2.0;
            c -= diff / 2.0;
            if b < 0.0 {
                c += b;
                b = 0.0;
            } else if c < 0.0 {
                b += c;
                c = 0.0;
            }
        }
    }

    ClampedWeights {
        edited,
        other1: b,
        other2: c,
    }
}

/// Drei baryzentrische Gewichte mit der Invariante `alpha + beta + gamma == 1`.
///
/// Änderungen laufen ausschließlich über [`WeightTriple::with_edit`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightTriple {
    alpha: f64,
    beta: f64,
    gamma: f64,
}

impl Default for WeightTriple {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_WEIGHTS[0],
            beta: DEFAULT_WEIGHTS[1],
            gamma: DEFAULT_WEIGHTS[2],
        }
    }
}

impl WeightTriple {
    /// Erstellt ein Gewichts-Tripel aus bereits normalisierten Werten.
    ///
    /// Schlägt fehl, wenn eine Komponente außerhalb von [0, 1] liegt oder die
    /// Summe nicht 1 ergibt.
    pub fn try_new(alpha: f64, beta: f64, gamma: f64) -> Result<Self> {
        for (kind, value) in WeightKind::ALL.iter().zip([alpha, beta, gamma]) {
            if !(0.0..=1.0).contains(&value) {
                bail!("Gewicht {} = {} liegt nicht in [0, 1]", kind.label(), value);
            }
        }
        let sum = alpha + beta + gamma;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            bail!("Gewichte summieren sich zu {} statt 1", sum);
        }
        Ok(Self { alpha, beta, gamma })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Liefert das Gewicht der angegebenen Art.
    pub fn get(&self, kind: WeightKind) -> f64 {
        match kind {
            WeightKind::Alpha => self.alpha,
            WeightKind::Beta => self.beta,
            WeightKind::Gamma => self.gamma,
        }
    }

    pub fn sum(&self) -> f64 {
        self.alpha + self.beta + self.gamma
    }

    /// Als Array `[alpha, beta, gamma]`.
    pub fn to_array(&self) -> [f64; 3] {
        [self.alpha, self.beta, self.gamma]
    }

    /// Setzt ein Gewicht auf `value` und gleicht die beiden anderen per
    /// [`clamp_difference`] aus.
    ///
    /// Nachbar-Reihenfolge: alpha → (beta, gamma), beta → (alpha, gamma),
    /// gamma → (beta, alpha).
    pub fn with_edit(self, kind: WeightKind, value: f64) -> Self {
        match kind {
            WeightKind::Alpha => {
                let res = clamp_difference(value, self.beta, self.gamma);
                Self {
                    alpha: res.edited,
                    beta: res.other1,
                    gamma: res.other2,
                }
            }
            WeightKind::Beta => {
                let res = clamp_difference(value, self.alpha, self.gamma);
                Self {
                    alpha: res.other1,
                    beta: res.edited,
                    gamma: res.other2,
                }
            }
            WeightKind::Gamma => {
                let res = clamp_difference(value, self.beta, self.alpha);
                Self {
                    alpha: res.other2,
                    beta: res.other1,
                    gamma: res.edited,
                }
            }
        }
    }
}
