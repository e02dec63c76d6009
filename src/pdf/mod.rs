pub mod builder;
pub mod generator;
pub mod layout;
pub mod table;

pub use builder::PdfBuilder;
pub use generator::PdfGenerator;
pub use layout::{Card, Color, Document, Element, LayoutEngine, Page, TextAlign, TextStyle};
pub use table::{TableRenderer, TableStyle};
