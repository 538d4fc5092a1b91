use crate::domain::{AppError, ClassifiedRoute, MapDocument};

/// Port turning a classified route into a standalone map page.
pub trait MapRenderer {
    fn render(&self, route: &ClassifiedRoute) -> Result<MapDocument, AppError>;
}
