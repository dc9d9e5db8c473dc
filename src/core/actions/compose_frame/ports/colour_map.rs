use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::data::escape::Escape;

/// Turns an escape result into a packed ARGB colour. Total over all inputs.
pub trait ColourMap {
    fn map(&self, alpha: u8, escape: Escape) -> u32;

    fn kind(&self) -> ColourMapKinds;

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl ColourMap for Box<dyn ColourMap + Send + Sync> {
    fn map(&self, alpha: u8, escape: Escape) -> u32 {
        (**self).map(alpha, escape)
    }

    fn kind(&self) -> ColourMapKinds {
        (**self).kind()
    }
}
