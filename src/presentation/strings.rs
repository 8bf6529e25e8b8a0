//! User-facing text resources.
//!
//! Templates use `%d` for numbers and `%s` for text, filled in by
//! [`format_template`].

use crate::infrastructure::Config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strings {
    pub app_name: String,
    pub years_old: &'static str,
    pub age: &'static str,
    pub age_value: &'static str,
    pub weight: &'static str,
    pub weight_value: &'static str,
    pub location: &'static str,
    pub owner_name: String,
    pub owner: &'static str,
    pub reason: &'static str,
    pub adoption: &'static str,
    pub no_pet: &'static str,
}

impl Default for Strings {
    fn default() -> Self {
        Self {
            app_name: "Puppy Adoption".to_string(),
            years_old: "%d years old",
            age: "Age",
            age_value: "%d years",
            weight: "Weight",
            weight_value: "%d kg",
            location: "Location",
            owner_name: "Shelter volunteer".to_string(),
            owner: "Pet owner",
            reason: "Every dog here is vaccinated, house trained and waiting for a family. \
                     Meet them first, then decide if you are the right match.",
            adoption: "Adopt me",
            no_pet: "No pet selected",
        }
    }
}

impl Strings {
    pub fn from_config(config: &Config) -> Self {
        let mut strings = Self::default();
        if let Some(title) = &config.ui.title {
            strings.app_name = title.clone();
        }
        strings.owner_name = config.ui.owner_name.clone();
        strings
    }
}

/// Replaces the first `%d` or `%s` placeholder in `template` with `value`.
///
/// # Examples
///
/// ```
/// use pawlist::presentation::format_template;
///
/// assert_eq!(format_template("%d years old", 3), "3 years old");
/// ```
pub fn format_template(template: &str, value: impl std::fmt::Display) -> String {
    let position = [template.find("%d"), template.find("%s")]
        .into_iter()
        .flatten()
        .min();

    match position {
        Some(pos) => format!("{}{}{}", &template[..pos], value, &template[pos + 2..]),
        None => template.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_template() {
        assert_eq!(format_template("%d kg", 11), "11 kg");
        assert_eq!(format_template("From %s", "Pune"), "From Pune");
        assert_eq!(format_template("Age", 4), "Age");
        assert_eq!(format_template("%s then %d", "x"), "x then %d");
    }

    #[test]
    fn test_from_config_overrides() {
        let mut config = Config::default();
        config.ui.title = Some("Dogs".to_string());
        config.ui.owner_name = "Asha".to_string();

        let strings = Strings::from_config(&config);
        assert_eq!(strings.app_name, "Dogs");
        assert_eq!(strings.owner_name, "Asha");
        assert_eq!(strings.years_old, Strings::default().years_old);
    }

    #[test]
    fn test_default_config_keeps_app_name() {
        let strings = Strings::from_config(&Config::default());
        assert_eq!(strings, Strings::default());
    }
}
