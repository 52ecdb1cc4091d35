// Chart domain models
use serde::{Deserialize, Serialize};

/// One named data trace: index-aligned x and y vectors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    #[serde(rename = "type")]
    pub kind: TraceKind,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Scatter,
}

impl Trace {
    pub fn scatter(name: impl Into<String>) -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
            kind: TraceKind::Scatter,
            name: name.into(),
        }
    }

    pub fn push(&mut self, x: f64, y: f64) {
        self.x.push(x);
        self.y.push(y);
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Remote write options for a named chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub filename: String,
    pub fileopt: WriteMode,
}

impl ChartOptions {
    pub fn new(filename: impl Into<String>, fileopt: WriteMode) -> Self {
        Self {
            filename: filename.into(),
            fileopt,
        }
    }
}

/// Whether an existing remote chart of the same name is replaced or kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    #[default]
    Overwrite,
    New,
}

/// What the charting service reported back for a successful write.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfirmation {
    pub url: Option<String>,
    pub message: String,
    pub filename: Option<String>,
    pub warning: Option<String>,
}
