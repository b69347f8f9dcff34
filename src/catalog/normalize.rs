//! Badge name normalization.
//!
//! Turns a source file stem into the identifier used in the imageset name.
//! Country badges may be named after the Chinese country name (`中国.png`)
//! or the ISO code (`CN.png`); both end up as `CountryBadge_CN`.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::core::NameMode;

/// Chinese country name to ISO 3166-1 alpha-2 code.
#[rustfmt::skip]
const COUNTRY_CODES: &[(&str, &str)] = &[
    ("中国", "CN"), ("美国", "US"), ("日本", "JP"), ("韩国", "KR"), ("新加坡", "SG"),
    ("泰国", "TH"), ("马来西亚", "MY"), ("印度尼西亚", "ID"), ("菲律宾", "PH"), ("越南", "VN"),
    ("印度", "IN"), ("澳大利亚", "AU"), ("新西兰", "NZ"), ("加拿大", "CA"), ("英国", "GB"),
    ("法国", "FR"), ("德国", "DE"), ("意大利", "IT"), ("西班牙", "ES"), ("荷兰", "NL"),
    ("瑞士", "CH"), ("奥地利", "AT"), ("比利时", "BE"), ("丹麦", "DK"), ("芬兰", "FI"),
    ("挪威", "NO"), ("瑞典", "SE"), ("波兰", "PL"), ("捷克", "CZ"), ("匈牙利", "HU"),
    ("希腊", "GR"), ("葡萄牙", "PT"), ("爱尔兰", "IE"), ("卢森堡", "LU"), ("俄罗斯", "RU"),
    ("乌克兰", "UA"), ("土耳其", "TR"), ("以色列", "IL"), ("阿联酋", "AE"), ("沙特阿拉伯", "SA"),
    ("卡塔尔", "QA"), ("科威特", "KW"), ("巴林", "BH"), ("阿曼", "OM"), ("约旦", "JO"),
    ("黎巴嫩", "LB"), ("埃及", "EG"), ("南非", "ZA"), ("尼日利亚", "NG"), ("肯尼亚", "KE"),
    ("摩洛哥", "MA"), ("突尼斯", "TN"), ("阿尔及利亚", "DZ"), ("埃塞俄比亚", "ET"), ("加纳", "GH"),
    ("乌干达", "UG"), ("坦桑尼亚", "TZ"), ("津巴布韦", "ZW"), ("博茨瓦纳", "BW"), ("纳米比亚", "NA"),
    ("赞比亚", "ZM"), ("马拉维", "MW"), ("莫桑比克", "MZ"), ("马达加斯加", "MG"), ("毛里求斯", "MU"),
    ("塞舌尔", "SC"), ("巴西", "BR"), ("阿根廷", "AR"), ("智利", "CL"), ("哥伦比亚", "CO"),
    ("秘鲁", "PE"), ("委内瑞拉", "VE"), ("乌拉圭", "UY"), ("巴拉圭", "PY"), ("玻利维亚", "BO"),
    ("厄瓜多尔", "EC"), ("圭亚那", "GY"), ("苏里南", "SR"), ("法属圭亚那", "GF"), ("墨西哥", "MX"),
    ("危地马拉", "GT"), ("伯利兹", "BZ"), ("萨尔瓦多", "SV"), ("洪都拉斯", "HN"), ("尼加拉瓜", "NI"),
    ("哥斯达黎加", "CR"), ("巴拿马", "PA"), ("古巴", "CU"), ("牙买加", "JM"), ("海地", "HT"),
    ("多米尼加", "DO"), ("波多黎各", "PR"), ("特立尼达和多巴哥", "TT"), ("巴巴多斯", "BB"), ("巴哈马", "BS"),
    ("百慕大", "BM"), ("开曼群岛", "KY"), ("维尔京群岛", "VI"), ("阿鲁巴", "AW"), ("荷属安的列斯", "AN"),
    ("安提瓜和巴布达", "AG"), ("多米尼克", "DM"), ("格林纳达", "GD"), ("圣基茨和尼维斯", "KN"), ("圣卢西亚", "LC"),
    ("圣文森特和格林纳丁斯", "VC"), ("安圭拉", "AI"), ("蒙特塞拉特", "MS"), ("特克斯和凯科斯群岛", "TC"),
    ("英属维尔京群岛", "VG"), ("圣巴泰勒米", "BL"), ("圣马丁", "MF"), ("瓜德罗普", "GP"), ("马提尼克", "MQ"),
    ("圣皮埃尔和密克隆", "PM"), ("格陵兰", "GL"), ("法罗群岛", "FO"), ("冰岛", "IS"),
];

static COUNTRY_NAME_MAP: LazyLock<FxHashMap<&'static str, &'static str>> =
    LazyLock::new(|| COUNTRY_CODES.iter().copied().collect());

/// Look up the ISO code for a Chinese country name.
pub fn country_code(name: &str) -> Option<&'static str> {
    COUNTRY_NAME_MAP.get(name).copied()
}

/// Check whether a stem already has the shape of a country code.
///
/// Two or three characters, no lowercase letters, at least one uppercase.
pub fn is_canonical_code(name: &str) -> bool {
    let len = name.chars().count();
    (2..=3).contains(&len)
        && !name.chars().any(char::is_lowercase)
        && name.chars().any(char::is_uppercase)
}

/// Remove the imageset prefix from a file stem, if present.
///
/// Lets `CountryBadge_CN.png` import as `CountryBadge_CN` rather than
/// `CountryBadge_CountryBadge_CN`.
#[inline]
pub fn strip_badge_prefix<'a>(stem: &'a str, prefix: &str) -> &'a str {
    stem.strip_prefix(prefix).unwrap_or(stem)
}

/// Normalize a (prefix-stripped) file stem into a badge identifier.
///
/// Never fails: names that are neither in the table nor code-shaped are
/// passed through unchanged.
///
/// # Examples
///
/// ```ignore
/// normalize_name("中国", NameMode::Mapped)   // "CN"
/// normalize_name("US", NameMode::Mapped)     // "US"
/// normalize_name("Unknown", NameMode::Mapped) // "Unknown"
/// normalize_name("北京", NameMode::Direct)   // "北京"
/// ```
pub fn normalize_name(stem: &str, mode: NameMode) -> String {
    match mode {
        NameMode::Mapped => match country_code(stem) {
            Some(code) => code.to_string(),
            None => stem.to_string(),
        },
        NameMode::Direct => stem.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_table_hit() {
        assert_eq!(normalize_name("中国", NameMode::Mapped), "CN");
        assert_eq!(normalize_name("冰岛", NameMode::Mapped), "IS");
        assert_eq!(normalize_name("特立尼达和多巴哥", NameMode::Mapped), "TT");
    }

    #[test]
    fn test_every_table_entry_maps_to_its_code() {
        for (name, code) in COUNTRY_CODES {
            assert_eq!(normalize_name(name, NameMode::Mapped), *code, "{name}");
        }
    }

    #[test]
    fn test_table_keys_are_unique_and_codes_canonical() {
        assert_eq!(COUNTRY_NAME_MAP.len(), COUNTRY_CODES.len());
        for (_, code) in COUNTRY_CODES {
            assert!(is_canonical_code(code), "{code}");
        }
    }

    #[test]
    fn test_mapped_code_passthrough() {
        assert_eq!(normalize_name("US", NameMode::Mapped), "US");
        assert_eq!(normalize_name("GBR", NameMode::Mapped), "GBR");
    }

    #[test]
    fn test_mapped_unknown_passthrough() {
        assert_eq!(normalize_name("Unknown", NameMode::Mapped), "Unknown");
        assert_eq!(normalize_name("火星", NameMode::Mapped), "火星");
        assert_eq!(normalize_name("", NameMode::Mapped), "");
    }

    #[test]
    fn test_direct_is_identity() {
        assert_eq!(normalize_name("北京", NameMode::Direct), "北京");
        // Table keys are not mapped in direct mode
        assert_eq!(normalize_name("中国", NameMode::Direct), "中国");
    }

    #[test]
    fn test_is_canonical_code() {
        assert!(is_canonical_code("CN"));
        assert!(is_canonical_code("USA"));
        assert!(is_canonical_code("U1"));
        assert!(!is_canonical_code("C"));
        assert!(!is_canonical_code("ABCD"));
        assert!(!is_canonical_code("Cn"));
        assert!(!is_canonical_code("12"));
        assert!(!is_canonical_code("中国"));
    }

    #[test]
    fn test_strip_badge_prefix() {
        assert_eq!(strip_badge_prefix("CountryBadge_CN", "CountryBadge_"), "CN");
        assert_eq!(strip_badge_prefix("CN", "CountryBadge_"), "CN");
        assert_eq!(strip_badge_prefix("北京", "ProvinceBadge_"), "北京");
    }
}
