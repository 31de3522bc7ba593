use career_core::Arrangement;

/// Which scene the page asked for via `data-variant` / `data-layout` on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Variant {
    CareerGraph,
    ModelCloud(Arrangement),
}

impl Variant {
    pub fn from_attributes(variant: Option<&str>, layout: Option<&str>) -> Self {
        match variant.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("cloud") | Some("model-cloud") => {
                let arrangement = layout
                    .and_then(Arrangement::from_name)
                    .unwrap_or_default();
                Variant::ModelCloud(arrangement)
            }
            _ => Variant::CareerGraph,
        }
    }

    /// Click-to-focus only makes sense when several models share the scene.
    pub fn focus_on_click(&self) -> bool {
        matches!(self, Variant::ModelCloud(_))
    }

    pub fn shows_axes(&self) -> bool {
        matches!(self, Variant::CareerGraph)
    }
}
