//! Sanity rules for templates coming from data files.

use arena_core::{CoreError, ErrorSeverity, ShieldTemplate, UnitClassTemplate, WeaponTemplate};

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ContentError {
    #[error("weapon '{slug}': dmg_min {min} is greater than dmg_max {max}")]
    DamageRange { slug: String, min: u32, max: u32 },

    #[error("{kind} '{slug}': {field} {value} is outside [0, 1]")]
    Probability {
        kind: &'static str,
        slug: String,
        field: &'static str,
        value: f64,
    },

    #[error("unit class '{slug}': {field} must be greater than zero")]
    EmptyPool { slug: String, field: &'static str },

    #[error("unit class '{slug}': {field} {value} must be positive")]
    Modifier {
        slug: String,
        field: &'static str,
        value: f64,
    },
}

impl CoreError for ContentError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DamageRange { .. } => "CONTENT_DAMAGE_RANGE",
            Self::Probability { .. } => "CONTENT_PROBABILITY",
            Self::EmptyPool { .. } => "CONTENT_EMPTY_POOL",
            Self::Modifier { .. } => "CONTENT_MODIFIER",
        }
    }
}

fn probability(
    kind: &'static str,
    slug: &str,
    field: &'static str,
    value: f64,
) -> Result<(), ContentError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ContentError::Probability {
            kind,
            slug: slug.to_owned(),
            field,
            value,
        })
    }
}

pub fn validate_weapon(weapon: &WeaponTemplate) -> Result<(), ContentError> {
    if weapon.dmg_min > weapon.dmg_max {
        return Err(ContentError::DamageRange {
            slug: weapon.slug.clone(),
            min: weapon.dmg_min,
            max: weapon.dmg_max,
        });
    }
    probability("weapon", &weapon.slug, "shield_ignore", weapon.shield_ignore)?;
    probability("weapon", &weapon.slug, "accuracy", weapon.accuracy)
}

pub fn validate_shield(shield: &ShieldTemplate) -> Result<(), ContentError> {
    probability("shield", &shield.slug, "efficiency", shield.efficiency)
}

pub fn validate_class(class: &UnitClassTemplate) -> Result<(), ContentError> {
    for (field, value) in [("hull_max", class.hull_max), ("energy_max", class.energy_max)] {
        if value == 0 {
            return Err(ContentError::EmptyPool {
                slug: class.slug.clone(),
                field,
            });
        }
    }
    for (field, value) in [
        ("shield_mod", class.shield_mod),
        ("attack_mod", class.attack_mod),
    ] {
        if value.is_nan() || value <= 0.0 {
            return Err(ContentError::Modifier {
                slug: class.slug.clone(),
                field,
                value,
            });
        }
    }
    Ok(())
}
