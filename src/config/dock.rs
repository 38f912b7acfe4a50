use super::serde_default_funcs::*;
use serde::{Deserialize, Serialize};

/// Sizes are measured in columns, the lift in rows.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct DockSettings {
    #[serde(default = "serde_default_dock_base_size")]
    base_size: f32,
    #[serde(default = "serde_default_dock_max_size")]
    max_size: f32,
    #[serde(default = "serde_default_dock_influence_radius")]
    influence_radius: f32,
    #[serde(default = "serde_default_dock_max_lift")]
    max_lift: f32,
    #[serde(default = "serde_default_dock_stiffness")]
    stiffness: f32,
    #[serde(default = "serde_default_dock_mass")]
    mass: f32,
    /// Critical damping is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    damping: Option<f32>,
    #[serde(default = "serde_default_dock_compact_below_cols")]
    compact_below_cols: u16,
    #[serde(default = "serde_default_dock_compact_size")]
    compact_size: f32,
}

impl DockSettings {
    pub fn base_size(&self) -> f32 {
        return self.base_size.max(1.0);
    }

    pub fn max_size(&self) -> f32 {
        return self.max_size.max(self.base_size());
    }

    pub fn influence_radius(&self) -> f32 {
        return self.influence_radius;
    }

    pub fn max_lift(&self) -> f32 {
        return self.max_lift.max(0.0);
    }

    pub fn stiffness(&self) -> f32 {
        return self.stiffness;
    }

    pub fn mass(&self) -> f32 {
        return self.mass;
    }

    /// The configured damping or `2 * sqrt(stiffness * mass)`.
    pub fn damping(&self) -> f32 {
        return self
            .damping
            .unwrap_or_else(|| 2.0 * (self.stiffness * self.mass).max(0.0).sqrt());
    }

    pub fn compact_below_cols(&self) -> u16 {
        return self.compact_below_cols;
    }

    pub fn compact_size(&self) -> f32 {
        return self.compact_size.max(1.0);
    }
}

impl Default for DockSettings {
    fn default() -> Self {
        return Self {
            base_size: serde_default_dock_base_size(),
            max_size: serde_default_dock_max_size(),
            influence_radius: serde_default_dock_influence_radius(),
            max_lift: serde_default_dock_max_lift(),
            stiffness: serde_default_dock_stiffness(),
            mass: serde_default_dock_mass(),
            damping: None,
            compact_below_cols: serde_default_dock_compact_below_cols(),
            compact_size: serde_default_dock_compact_size(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::DockSettings;

    #[test]
    fn default_damping_is_critical() {
        let settings = DockSettings::default();
        let critical = 2.0 * (350.0f32 * 0.5).sqrt();

        assert!((settings.damping() - critical).abs() < 1e-4);
    }

    #[test]
    fn negative_lift_reads_as_zero() {
        let config = crate::Config::from_toml_string("[dock]\nmax_lift = -2.0").unwrap();

        assert_eq!(config.get_dock_ref().max_lift(), 0.0);
    }
}
