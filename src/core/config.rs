//! Validated invocation configuration.
//!
//! A [`RifeConfig`] can only be obtained through [`RifeConfig::new`], which runs
//! every check, and it is read-only afterwards. Holding one is proof the
//! settings were valid when it was built.
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use super::locate::executable_exists;
use super::params::RifeSettings;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct RifeConfig {
    binary: PathBuf,
    model: Option<String>,
    scale: f64,
    tta: bool,
    uhd: bool,
    gpu_id: Option<u32>,
    threads: Option<NonZeroU32>,
}

impl RifeConfig {
    /// Validate `settings` and freeze them into a configuration.
    pub fn new(settings: RifeSettings) -> Result<Self> {
        // An absent binary becomes an empty path, reported by `validate`
        // after the scale check.
        let config = Self {
            binary: settings.binary.unwrap_or_default(),
            model: settings.model,
            scale: settings.scale,
            tta: settings.tta,
            uhd: settings.uhd,
            gpu_id: settings.gpu_id,
            threads: settings.threads,
        };
        config.validate()?;
        Ok(config)
    }

    /// Re-run the checks against the current environment.
    ///
    /// Fails with `InvalidScale`, `MissingExecutable` or `ExecutableNotFound`,
    /// checked in that order. Repeated calls give the same answer as long as
    /// the executable is not removed in between.
    pub fn validate(&self) -> Result<()> {
        check_scale(self.scale)?;
        if self.binary.as_os_str().is_empty() {
            return Err(Error::MissingExecutable);
        }
        if !executable_exists(&self.binary) {
            return Err(Error::ExecutableNotFound {
                path: self.binary.clone(),
            });
        }
        Ok(())
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn tta(&self) -> bool {
        self.tta
    }

    pub fn uhd(&self) -> bool {
        self.uhd
    }

    pub fn gpu_id(&self) -> Option<u32> {
        self.gpu_id
    }

    pub fn threads(&self) -> Option<NonZeroU32> {
        self.threads
    }

    /// Back to the raw, serializable form.
    pub fn to_settings(&self) -> RifeSettings {
        RifeSettings {
            binary: Some(self.binary.clone()),
            model: self.model.clone(),
            scale: self.scale,
            tta: self.tta,
            uhd: self.uhd,
            gpu_id: self.gpu_id,
            threads: self.threads,
        }
    }
}

impl TryFrom<RifeSettings> for RifeConfig {
    type Error = Error;

    fn try_from(settings: RifeSettings) -> Result<Self> {
        Self::new(settings)
    }
}

// Written so that NaN fails too.
fn check_scale(scale: f64) -> Result<()> {
    if scale > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidScale { scale })
    }
}
