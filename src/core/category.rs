//! Badge category definitions.

use std::fmt;

use clap::ValueEnum;

/// Kind of badge being imported, determines paths, prefix and naming.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Category {
    /// Country badges - file names are mapped to ISO codes
    #[default]
    Country,
    /// Province badges - file names are used as-is
    Province,
}

/// How a category turns a file stem into an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMode {
    /// Look the stem up in the country name table
    Mapped,
    /// Use the stem unchanged
    Direct,
}

impl Category {
    /// All categories, in CLI order.
    pub const ALL: [Self; 2] = [Self::Country, Self::Province];

    /// Name used on the command line and in config sections.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Country => "country",
            Self::Province => "province",
        }
    }

    /// Naming mode for this category.
    pub const fn name_mode(self) -> NameMode {
        match self {
            Self::Country => NameMode::Mapped,
            Self::Province => NameMode::Direct,
        }
    }

    /// Built-in profile, used when the config file does not override it.
    pub fn default_profile(self) -> CategoryProfile {
        match self {
            Self::Country => CategoryProfile {
                source: "Countries".to_string(),
                target: "CountryBadges".to_string(),
                prefix: "CountryBadge_".to_string(),
            },
            Self::Province => CategoryProfile {
                source: "Provinces".to_string(),
                target: "ProvinceBadges".to_string(),
                prefix: "ProvinceBadge_".to_string(),
            },
        }
    }

    /// Example file names shown when the source directory is missing.
    pub const fn sample_files(self) -> &'static [&'static str] {
        match self {
            Self::Country => &["CN.png", "US.png"],
            Self::Province => &["北京.png", "上海.png"],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-category directory names and imageset prefix.
///
/// `source` is relative to the source root, `target` to the asset catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryProfile {
    pub source: String,
    pub target: String,
    pub prefix: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_country() {
        assert_eq!(Category::default(), Category::Country);
    }

    #[test]
    fn test_name_modes() {
        assert_eq!(Category::Country.name_mode(), NameMode::Mapped);
        assert_eq!(Category::Province.name_mode(), NameMode::Direct);
    }

    #[test]
    fn test_default_profiles() {
        let country = Category::Country.default_profile();
        assert_eq!(country.source, "Countries");
        assert_eq!(country.target, "CountryBadges");
        assert_eq!(country.prefix, "CountryBadge_");

        let province = Category::Province.default_profile();
        assert_eq!(province.source, "Provinces");
        assert_eq!(province.target, "ProvinceBadges");
        assert_eq!(province.prefix, "ProvinceBadge_");
    }

    #[test]
    fn test_value_enum_names_match() {
        for category in Category::ALL {
            let parsed = Category::from_str(category.name(), false).unwrap();
            assert_eq!(parsed, category);
        }
        assert!(Category::from_str("city", false).is_err());
    }
}
