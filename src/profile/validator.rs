use super::ServerProfile;
use crate::{Error, Result};

/// PHP runtime versions the generated configuration targets.
pub const SUPPORTED_PHP_VERSIONS: &[&str] = &["8.0", "8.1", "8.2", "8.3"];

pub struct ProfileValidator;

impl ProfileValidator {
    /// Check every field of the profile against its declared domain.
    ///
    /// Each field is validated independently; the first violation is
    /// reported with the field name so the caller can surface it without
    /// invoking derivation.
    pub fn validate(profile: &ServerProfile) -> Result<()> {
        Self::validate_cpu_cores(profile.cpu_cores)?;
        Self::validate_ram_gb(profile.ram_gb)?;
        Self::validate_expected_traffic(profile.expected_traffic)?;
        Self::validate_php_version(&profile.php_version)?;
        Self::validate_avg_product_count(profile.avg_product_count)?;
        Self::validate_avg_orders_per_day(profile.avg_orders_per_day)?;
        Ok(())
    }

    pub fn validate_cpu_cores(cpu_cores: u32) -> Result<()> {
        if !(1..=128).contains(&cpu_cores) {
            return Err(Error::Validation(format!(
                "cpu_cores must be between 1 and 128, got {cpu_cores}"
            )));
        }
        Ok(())
    }

    pub fn validate_ram_gb(ram_gb: u32) -> Result<()> {
        if !(2..=512).contains(&ram_gb) {
            return Err(Error::Validation(format!(
                "ram_gb must be between 2 and 512, got {ram_gb}"
            )));
        }
        Ok(())
    }

    pub fn validate_expected_traffic(expected_traffic: u64) -> Result<()> {
        if expected_traffic < 100 {
            return Err(Error::Validation(format!(
                "expected_traffic must be at least 100 daily visitors, got {expected_traffic}"
            )));
        }
        Ok(())
    }

    pub fn validate_php_version(php_version: &str) -> Result<()> {
        if !SUPPORTED_PHP_VERSIONS.contains(&php_version) {
            return Err(Error::Validation(format!(
                "php_version must be one of {SUPPORTED_PHP_VERSIONS:?}, got {php_version}"
            )));
        }
        Ok(())
    }

    pub fn validate_avg_product_count(avg_product_count: u64) -> Result<()> {
        if avg_product_count < 10 {
            return Err(Error::Validation(format!(
                "avg_product_count must be at least 10, got {avg_product_count}"
            )));
        }
        Ok(())
    }

    pub fn validate_avg_orders_per_day(avg_orders_per_day: u64) -> Result<()> {
        if avg_orders_per_day < 1 {
            return Err(Error::Validation(format!(
                "avg_orders_per_day must be at least 1, got {avg_orders_per_day}"
            )));
        }
        Ok(())
    }
}
