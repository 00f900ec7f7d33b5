//! Wear model trait.

/// Micrograms to kilograms.
const MICROGRAM: f64 = 1.0e-9;

/// Maps frictional power density to a wear rate.
///
/// Rates are in μg per metre rolled per mm² of contact; Tγ is in N/mm².
pub trait WearModel: Send + Sync {
    /// Wear rate for a frictional power density.
    fn wear_rate(&self, t_gamma: f64) -> f64;

    /// Returns the model name.
    fn name(&self) -> &str;

    /// Wear depth (mm) after `sliding_distance` metres for a material of
    /// `density` kg/m³.
    fn wear_depth(&self, t_gamma: f64, sliding_distance: f64, density: f64) -> f64 {
        self.wear_rate(t_gamma) / (density * MICROGRAM) * sliding_distance / 1000.0
    }

    /// Worn volume (mm³) over a contact area in mm².
    fn wear_volume(&self, t_gamma: f64, sliding_distance: f64, area_mm2: f64, density: f64) -> f64 {
        self.wear_depth(t_gamma, sliding_distance, density) * area_mm2
    }
}
