//! Province names.
//!
//! City tables spell provinces as upper-case English names ("GUANGDONG").
//! Maps and reports use the Chinese administrative name ("广东省").

/// English province code to Chinese name.
///
/// Inner Mongolia and Tibet appear under two spellings each.
const PROVINCE_NAMES: &[(&str, &str)] = &[
    ("BEIJING", "北京市"),
    ("TIANJIN", "天津市"),
    ("HEBEI", "河北省"),
    ("SHANXI", "山西省"),
    ("INNER MONGOLIA", "内蒙古自治区"),
    ("NEIMENGGU", "内蒙古自治区"),
    ("LIAONING", "辽宁省"),
    ("JILIN", "吉林省"),
    ("HEILONGJIANG", "黑龙江省"),
    ("SHANGHAI", "上海市"),
    ("JIANGSU", "江苏省"),
    ("ZHEJIANG", "浙江省"),
    ("ANHUI", "安徽省"),
    ("FUJIAN", "福建省"),
    ("JIANGXI", "江西省"),
    ("SHANDONG", "山东省"),
    ("HENAN", "河南省"),
    ("HUBEI", "湖北省"),
    ("HUNAN", "湖南省"),
    ("GUANGDONG", "广东省"),
    ("GUANGXI", "广西壮族自治区"),
    ("HAINAN", "海南省"),
    ("CHONGQING", "重庆市"),
    ("SICHUAN", "四川省"),
    ("GUIZHOU", "贵州省"),
    ("YUNNAN", "云南省"),
    ("TIBET", "西藏自治区"),
    ("XIZANG", "西藏自治区"),
    ("SHAANXI", "陕西省"),
    ("GANSU", "甘肃省"),
    ("QINGHAI", "青海省"),
    ("NINGXIA", "宁夏回族自治区"),
    ("XINJIANG", "新疆维吾尔自治区"),
];

/// Look up the Chinese name for an English province code (exact match).
pub fn chinese_name(code: &str) -> Option<&'static str> {
    PROVINCE_NAMES
        .iter()
        .find(|(en, _)| *en == code)
        .map(|(_, cn)| *cn)
}

/// Chinese name for a province code, or the code itself when unknown.
pub fn display_name(code: &str) -> String {
    chinese_name(code).map_or_else(|| code.to_string(), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chinese_name_known() {
        assert_eq!(chinese_name("GUANGDONG"), Some("广东省"));
        assert_eq!(chinese_name("XINJIANG"), Some("新疆维吾尔自治区"));
    }

    #[test]
    fn test_chinese_name_aliases() {
        assert_eq!(chinese_name("INNER MONGOLIA"), chinese_name("NEIMENGGU"));
        assert_eq!(chinese_name("TIBET"), chinese_name("XIZANG"));
    }

    #[test]
    fn test_chinese_name_is_case_sensitive() {
        assert_eq!(chinese_name("guangdong"), None);
    }

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(display_name("HONG KONG"), "HONG KONG");
        assert_eq!(display_name("SHAANXI"), "陕西省");
    }

    #[test]
    fn test_table_has_no_duplicate_codes() {
        let mut codes: Vec<&str> = PROVINCE_NAMES.iter().map(|(en, _)| *en).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), PROVINCE_NAMES.len());
    }
}
