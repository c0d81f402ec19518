use super::types::Element;

#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub element: Element,
    pub position: [f64; 3],
    /// Force-field or Sybyl-style type label such as `C.ar`; falls back to the
    /// element symbol when absent.
    pub atom_type: Option<String>,
}

impl Atom {
    pub fn new(element: Element, position: [f64; 3]) -> Self {
        Self {
            element,
            position,
            atom_type: None,
        }
    }

    pub fn with_type(mut self, atom_type: impl Into<String>) -> Self {
        self.atom_type = Some(atom_type.into());
        self
    }

    /// The label used to derive bond-half pigments.
    pub fn type_label(&self) -> &str {
        self.atom_type
            .as_deref()
            .unwrap_or_else(|| self.element.symbol())
    }
}
