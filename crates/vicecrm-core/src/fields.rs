//! The fixed binding table between wire field paths and the record.
//!
//! Every editable leaf of the configuration has a wire path of the form
//! `section.fieldName`, matching the keys of the stored JSON document. The
//! table is enumerable so front ends can render or list it without knowing
//! the record shape.

use std::str::FromStr;

use crate::error::SettingsError;
use vicecrm_storage::{CrmSettings, is_valid_hex_color};

/// One leaf field of the configuration, addressed by its wire path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingField {
    SystemName,
    SystemVersion,
    SystemDescription,
    DefaultLanguage,
    Timezone,
    DateFormat,
    CompanyName,
    SystemBadge,
    PrimaryColor,
    SecondaryColor,
    BackgroundColor,
    LogoUrl,
    RequireStrongPassword,
    MinPasswordLength,
    PasswordExpiry,
    SessionTimeout,
    EnableTwoFactor,
    LogLoginAttempts,
    AutoBackupFrequency,
}

impl SettingField {
    /// All fields, in display order.
    pub const ALL: [Self; 19] = [
        Self::SystemName,
        Self::SystemVersion,
        Self::SystemDescription,
        Self::DefaultLanguage,
        Self::Timezone,
        Self::DateFormat,
        Self::CompanyName,
        Self::SystemBadge,
        Self::PrimaryColor,
        Self::SecondaryColor,
        Self::BackgroundColor,
        Self::LogoUrl,
        Self::RequireStrongPassword,
        Self::MinPasswordLength,
        Self::PasswordExpiry,
        Self::SessionTimeout,
        Self::EnableTwoFactor,
        Self::LogLoginAttempts,
        Self::AutoBackupFrequency,
    ];

    pub fn wire_path(self) -> &'static str {
        match self {
            Self::SystemName => "general.systemName",
            Self::SystemVersion => "general.systemVersion",
            Self::SystemDescription => "general.systemDescription",
            Self::DefaultLanguage => "general.defaultLanguage",
            Self::Timezone => "general.timezone",
            Self::DateFormat => "general.dateFormat",
            Self::CompanyName => "branding.companyName",
            Self::SystemBadge => "branding.systemBadge",
            Self::PrimaryColor => "branding.primaryColor",
            Self::SecondaryColor => "branding.secondaryColor",
            Self::BackgroundColor => "branding.backgroundColor",
            Self::LogoUrl => "branding.logoUrl",
            Self::RequireStrongPassword => "security.requireStrongPassword",
            Self::MinPasswordLength => "security.minPasswordLength",
            Self::PasswordExpiry => "security.passwordExpiry",
            Self::SessionTimeout => "security.sessionTimeout",
            Self::EnableTwoFactor => "security.enableTwoFactor",
            Self::LogLoginAttempts => "security.logLoginAttempts",
            Self::AutoBackupFrequency => "backup.autoBackupFrequency",
        }
    }

    /// Parse and validate a raw value, then write it into the record.
    ///
    /// Rejection happens before any mutation, so the prior value survives a
    /// bad input untouched.
    pub fn apply(self, settings: &mut CrmSettings, raw: &str) -> Result<(), SettingsError> {
        match self {
            Self::SystemName => settings.general.system_name = raw.to_string(),
            Self::SystemVersion => settings.general.system_version = raw.to_string(),
            Self::SystemDescription => settings.general.system_description = raw.to_string(),
            Self::DefaultLanguage => settings.general.default_language = raw.to_string(),
            Self::Timezone => settings.general.timezone = raw.to_string(),
            Self::DateFormat => settings.general.date_format = raw.to_string(),
            Self::CompanyName => settings.branding.company_name = raw.to_string(),
            Self::SystemBadge => settings.branding.system_badge = raw.to_string(),
            Self::PrimaryColor => settings.branding.primary_color = parse_color(self, raw)?,
            Self::SecondaryColor => settings.branding.secondary_color = parse_color(self, raw)?,
            Self::BackgroundColor => settings.branding.background_color = parse_color(self, raw)?,
            Self::LogoUrl => {
                return Err(SettingsError::Validation(
                    "branding.logoUrl is managed through the logo commands".to_string(),
                ));
            }
            Self::RequireStrongPassword => {
                settings.security.require_strong_password = parse_bool(self, raw)?;
            }
            Self::MinPasswordLength => {
                settings.security.min_password_length = parse_positive(self, raw)?;
            }
            Self::PasswordExpiry => settings.security.password_expiry = parse_integer(self, raw)?,
            Self::SessionTimeout => settings.security.session_timeout = parse_integer(self, raw)?,
            Self::EnableTwoFactor => settings.security.enable_two_factor = parse_bool(self, raw)?,
            Self::LogLoginAttempts => settings.security.log_login_attempts = parse_bool(self, raw)?,
            Self::AutoBackupFrequency => {
                settings.backup.auto_backup_frequency = raw
                    .parse()
                    .map_err(|err: anyhow::Error| SettingsError::Validation(err.to_string()))?;
            }
        }
        Ok(())
    }

    /// Read the field as its wire string.
    pub fn read(self, settings: &CrmSettings) -> String {
        match self {
            Self::SystemName => settings.general.system_name.clone(),
            Self::SystemVersion => settings.general.system_version.clone(),
            Self::SystemDescription => settings.general.system_description.clone(),
            Self::DefaultLanguage => settings.general.default_language.clone(),
            Self::Timezone => settings.general.timezone.clone(),
            Self::DateFormat => settings.general.date_format.clone(),
            Self::CompanyName => settings.branding.company_name.clone(),
            Self::SystemBadge => settings.branding.system_badge.clone(),
            Self::PrimaryColor => settings.branding.primary_color.clone(),
            Self::SecondaryColor => settings.branding.secondary_color.clone(),
            Self::BackgroundColor => settings.branding.background_color.clone(),
            Self::LogoUrl => settings.branding.logo_url.clone().unwrap_or_default(),
            Self::RequireStrongPassword => settings.security.require_strong_password.to_string(),
            Self::MinPasswordLength => settings.security.min_password_length.to_string(),
            Self::PasswordExpiry => settings.security.password_expiry.to_string(),
            Self::SessionTimeout => settings.security.session_timeout.to_string(),
            Self::EnableTwoFactor => settings.security.enable_two_factor.to_string(),
            Self::LogLoginAttempts => settings.security.log_login_attempts.to_string(),
            Self::AutoBackupFrequency => {
                settings.backup.auto_backup_frequency.as_str().to_string()
            }
        }
    }
}

impl FromStr for SettingField {
    type Err = SettingsError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.wire_path() == path)
            .ok_or_else(|| SettingsError::Validation(format!("Unknown settings field: {path}")))
    }
}

fn parse_color(field: SettingField, raw: &str) -> Result<String, SettingsError> {
    if is_valid_hex_color(raw) {
        Ok(raw.to_string())
    } else {
        Err(SettingsError::Validation(format!(
            "{} is not a valid hex color: {raw}",
            field.wire_path()
        )))
    }
}

fn parse_bool(field: SettingField, raw: &str) -> Result<bool, SettingsError> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(SettingsError::Validation(format!(
            "{} expects true or false, got: {other}",
            field.wire_path()
        ))),
    }
}

fn parse_integer(field: SettingField, raw: &str) -> Result<u32, SettingsError> {
    raw.trim().parse().map_err(|_| {
        SettingsError::Validation(format!(
            "{} expects a non-negative integer, got: {raw}",
            field.wire_path()
        ))
    })
}

fn parse_positive(field: SettingField, raw: &str) -> Result<u32, SettingsError> {
    let value = parse_integer(field, raw)?;
    if value == 0 {
        return Err(SettingsError::Validation(format!(
            "{} must be at least 1",
            field.wire_path()
        )));
    }
    Ok(value)
}
