use crate::entities::{Canvas, Element};
use crate::fsize;
use crate::util::LayoutOptions;

/// Everything needed for a packing run: the elements, the page size (in pixels) and the options.
#[derive(Debug, Clone)]
pub struct Instance {
    pub name: String,
    pub canvas: Canvas,
    pub elements: Vec<Element>,
    pub options: LayoutOptions,
}

impl Instance {
    pub fn total_element_area(&self) -> fsize {
        self.elements.iter().map(|e| e.area()).sum()
    }
}
