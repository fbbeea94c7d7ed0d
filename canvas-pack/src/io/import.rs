use std::collections::HashSet;

use crate::entities::{Canvas, Element, Instance};
use crate::fsize;
use crate::geometry::primitives::Rect;
use crate::io::ext_repr::{CanvasUnit, ExtInstance};
use crate::util::LayoutOptions;
use anyhow::{Context, Result, bail, ensure};
use log::debug;

/// Converts external representations into validated internal ones.
#[derive(Debug, Clone, Copy)]
pub struct Importer {
    /// Used to convert canvases given in centimeters to pixels
    pub pixels_per_cm: fsize,
    /// Options used when the instance does not carry its own
    pub default_options: LayoutOptions,
}

impl Importer {
    pub fn new(pixels_per_cm: fsize, default_options: LayoutOptions) -> Self {
        Importer {
            pixels_per_cm,
            default_options,
        }
    }

    pub fn import_instance(&self, ext_instance: &ExtInstance) -> Result<Instance> {
        let options = ext_instance.layout_options.unwrap_or(self.default_options);
        ensure!(
            options.element_gap >= 0.0
                && options.canvas_margin >= 0.0
                && options.canvas_margin_v >= 0.0,
            "gap and margins must be non-negative: {options:?}"
        );

        let canvas = self
            .import_canvas(ext_instance, &options)
            .with_context(|| format!("invalid canvas in instance {}", ext_instance.name))?;

        let mut seen_ids = HashSet::new();
        let elements = ext_instance
            .elements
            .iter()
            .map(|e| {
                ensure!(
                    seen_ids.insert(e.id.as_str()),
                    "duplicate element id: {}",
                    e.id
                );
                import_element(e).with_context(|| format!("invalid element {}", e.id))
            })
            .collect::<Result<Vec<Element>>>()?;

        debug!(
            "[IMPORT] instance {}: {} elements on a {}x{}px canvas",
            ext_instance.name,
            elements.len(),
            canvas.width,
            canvas.height
        );

        Ok(Instance {
            name: ext_instance.name.clone(),
            canvas,
            elements,
            options,
        })
    }

    fn import_canvas(&self, ext_instance: &ExtInstance, options: &LayoutOptions) -> Result<Canvas> {
        let ext_canvas = ext_instance.canvas;
        let (width, height) = match ext_canvas.unit {
            CanvasUnit::Px => (ext_canvas.width, ext_canvas.height),
            CanvasUnit::Cm => {
                ensure!(
                    self.pixels_per_cm > 0.0,
                    "pixels per cm must be positive, got {}",
                    self.pixels_per_cm
                );
                (
                    cm_to_px(ext_canvas.width, self.pixels_per_cm),
                    cm_to_px(ext_canvas.height, self.pixels_per_cm),
                )
            }
        };
        Canvas::try_new(width, height, options)
    }
}

fn import_element(element: &Element) -> Result<Element> {
    // validates finiteness and non-negative dimensions
    Rect::try_new(
        element.position.x,
        element.position.y,
        element.width(),
        element.height(),
    )?;
    match element.rotation {
        0 | 90 | 180 | 270 => {}
        r => bail!("rotation must be a multiple of 90 degrees below 360, got {r}"),
    }
    Ok(element.clone())
}

pub fn cm_to_px(cm: fsize, pixels_per_cm: fsize) -> fsize {
    cm * pixels_per_cm
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ExtInstance {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn imports_cm_canvas() {
        let ext = parse(
            r#"{"name": "a4", "canvas": {"width": 21.0, "height": 30.0, "unit": "cm"},
                "elements": [{"id": "a", "dimensions": {"width": 100, "height": 50}}]}"#,
        );
        let instance = Importer::new(10.0, LayoutOptions::default())
            .import_instance(&ext)
            .unwrap();
        assert_eq!(instance.canvas, Canvas::new(210.0, 300.0));
        assert_eq!(instance.elements.len(), 1);
        assert_eq!(instance.options, LayoutOptions::default());
    }

    #[test]
    fn instance_options_take_precedence() {
        let ext = parse(
            r#"{"name": "x", "canvas": {"width": 100, "height": 100},
                "elements": [], "layoutOptions": {"heuristic": "BL", "allowRotation": true}}"#,
        );
        let instance = Importer::new(1.0, LayoutOptions::default())
            .import_instance(&ext)
            .unwrap();
        assert!(instance.options.allow_rotation);
        assert_eq!(instance.options.heuristic, crate::util::Heuristic::BL);
    }

    #[test]
    fn rejects_invalid_input() {
        let importer = Importer::new(1.0, LayoutOptions::default());
        let too_small = parse(
            r#"{"name": "x", "canvas": {"width": 20, "height": 100}, "elements": []}"#,
        );
        assert!(importer.import_instance(&too_small).is_err());

        let bad_rotation = parse(
            r#"{"name": "x", "canvas": {"width": 100, "height": 100},
                "elements": [{"id": "a", "dimensions": {"width": 1, "height": 1}, "rotation": 45}]}"#,
        );
        assert!(importer.import_instance(&bad_rotation).is_err());

        let negative = parse(
            r#"{"name": "x", "canvas": {"width": 100, "height": 100},
                "elements": [{"id": "a", "dimensions": {"width": -1, "height": 1}}]}"#,
        );
        assert!(importer.import_instance(&negative).is_err());

        let duplicate = parse(
            r#"{"name": "x", "canvas": {"width": 100, "height": 100},
                "elements": [{"id": "a", "dimensions": {"width": 1, "height": 1}},
                             {"id": "a", "dimensions": {"width": 2, "height": 2}}]}"#,
        );
        assert!(importer.import_instance(&duplicate).is_err());
    }
}
