//! Table parameter files (RON)

use std::path::Path;

use glam::Vec3;

use crate::table::TableParams;

impl TableParams {
    /// Save parameters to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = self.to_bytes()?;
        std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))?;
        tracing::info!("Saved table parameters to {:?}", path);
        Ok(())
    }

    /// Serialize parameters to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        Ok(content.into_bytes())
    }

    /// Load parameters from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_ron(&content)
    }

    /// Load parameters from bytes
    pub fn load_from_bytes(data: &[u8]) -> Result<Self, ConfigError> {
        let content =
            std::str::from_utf8(data).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        Self::from_ron(content)
    }

    fn from_ron(content: &str) -> Result<Self, ConfigError> {
        let params: TableParams =
            ron::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    /// Reject non-finite dimensions
    ///
    /// Zero or negative extents are allowed; they only yield degenerate faces.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_finite("size", self.size)?;
        check_finite("leg_size", self.leg_size)
    }
}

fn check_finite(field: &'static str, value: Vec3) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidDimension {
            field,
            value: value.to_array(),
        })
    }
}

/// Parameter file errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    #[error("Invalid {field}: {value:?} is not finite")]
    InvalidDimension {
        field: &'static str,
        value: [f32; 3],
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::MaterialHandle;

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.ron");
        let params = TableParams::new(Vec3::new(120.0, 80.0, 4.0), Vec3::new(6.0, 6.0, 70.0))
            .with_material(MaterialHandle::new());

        params.save(&path).unwrap();
        let loaded = TableParams::load(&path).unwrap();
        assert_eq!(loaded, params);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let params = TableParams::load_from_bytes(b"(size: (80.0, 60.0, 4.0))").unwrap();
        assert_eq!(params.size, Vec3::new(80.0, 60.0, 4.0));
        assert_eq!(params.leg_size, TableParams::default().leg_size);
        assert!(params.material.is_none());
    }

    #[test]
    fn test_bytes_roundtrip_without_material() {
        let params = TableParams::default();
        let bytes = params.to_bytes().unwrap();
        assert_eq!(TableParams::load_from_bytes(&bytes).unwrap(), params);
    }

    #[test]
    fn test_validate_rejects_nan() {
        let params = TableParams::new(Vec3::new(f32::NAN, 1.0, 1.0), Vec3::ONE);
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvalidDimension { field: "size", .. })
        ));
        let params = TableParams::new(Vec3::ONE, Vec3::new(1.0, f32::INFINITY, 1.0));
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvalidDimension {
                field: "leg_size",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_allows_degenerate_sizes() {
        let params = TableParams::new(Vec3::ZERO, Vec3::new(-1.0, 2.0, 3.0));
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = TableParams::load(dir.path().join("absent.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_garbage() {
        let err = TableParams::load_from_bytes(b"not ron at all {").unwrap_err();
        assert!(matches!(err, ConfigError::Deserialize(_)));
    }
}
