use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

use crate::format::NumberLocale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_TITLE: &str = "general.app_title";

    pub const STATUS_LOADING: &str = "status.loading";
    pub const STATUS_OK: &str = "status.ok";
    pub const STATUS_FAILED: &str = "status.failed";
    pub const ERROR_LOAD_DETAIL: &str = "error.load_detail";
    pub const ERROR_LOAD_HINT: &str = "error.load_hint";

    pub const COLUMN_FIELD: &str = "column.field";
    pub const COLUMN_VALUE: &str = "column.value";
    pub const COLUMN_UNIT: &str = "column.unit";

    pub const UNIT_MONTH: &str = "unit.month";

    pub const GUI_SOURCE: &str = "gui.source";
    pub const GUI_OPEN: &str = "gui.open";
    pub const GUI_RELOAD: &str = "gui.reload";
    pub const GUI_INPUTS: &str = "gui.inputs";

    /// 결과 필드 설명 키의 접두어. `field.<key>` 형태로 쓴다.
    pub const FIELD_PREFIX: &str = "field.";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Fr,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Fr
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }

    /// 언어에 맞는 숫자 표기 관례.
    pub fn number_locale(&self) -> NumberLocale {
        match self {
            Language::Fr => NumberLocale::Fr,
            Language::En => NumberLocale::En,
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(fr/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 fr로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 언어팩 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 프랑스어 문자열로 폴백한다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        let builtin = match self.lang {
            Language::En => en(key).or_else(|| fr(key)),
            Language::Fr => fr(key),
        };
        builtin.unwrap_or("[missing translation]").to_string()
    }

    /// 결과 필드의 설명을 가져온다.
    pub fn field_description(&self, field_key: &str) -> String {
        self.t(&format!("{}{field_key}", keys::FIELD_PREFIX))
    }
}

/// `{name}` 자리표시를 값으로 채운다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "fr".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("fr") => Some("fr".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "fr" => Some("fr".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|value| normalize_locale_string(&value))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵 또는 중첩 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{}.toml", Language::from_code(lang).as_code()));
    let content = fs::read_to_string(&path).ok()?;
    let map = parse_toml_to_map(&content);
    if map.is_none() {
        tracing::warn!(path = %path.display(), "language pack ignored: no string entries");
    }
    map
}

/// 언어팩 TOML을 `section.key` 형태의 평탄한 맵으로 만든다. 문자열이 아닌 값은 무시한다.
fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let root: toml::Table = toml::from_str(src).ok()?;
    let mut map = HashMap::new();
    let mut pending: Vec<(String, &toml::Value)> =
        root.iter().map(|(k, v)| (k.clone(), v)).collect();
    while let Some((key, value)) = pending.pop() {
        match value {
            toml::Value::String(text) => {
                map.insert(key, text.clone());
            }
            toml::Value::Table(section) => {
                pending.extend(section.iter().map(|(k, v)| (format!("{key}.{k}"), v)));
            }
            _ => {}
        }
    }
    (!map.is_empty()).then_some(map)
}

fn fr(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Erreur",
        APP_TITLE => "Simulateur d'économies photovoltaïques",
        STATUS_LOADING => "Chargement…",
        STATUS_OK => "Données calculées.",
        STATUS_FAILED => "Échec du chargement.",
        ERROR_LOAD_DETAIL => "Erreur lors du chargement de {source} : {message}",
        ERROR_LOAD_HINT => "Vérifiez que le fichier d'entrée existe et contient un objet JSON.",
        COLUMN_FIELD => "Champ",
        COLUMN_VALUE => "Valeur",
        COLUMN_UNIT => "Unité",
        UNIT_MONTH => "mois",
        GUI_SOURCE => "Source :",
        GUI_OPEN => "Ouvrir…",
        GUI_RELOAD => "Recharger",
        GUI_INPUTS => "Entrées",
        _ => return fr_field(key),
    })
}

fn fr_field(key: &str) -> Option<&'static str> {
    let field = key.strip_prefix(keys::FIELD_PREFIX)?;
    Some(match field {
        "facturean" => "Facture annuelle",
        "consokwh" => "Consommation annuelle",
        "rationuit" => "Part de consommation nocturne",
        "consoankwhdiurne" => "Consommation annuelle de jour",
        "consoankwhnocturne" => "Consommation annuelle de nuit",
        "prodan" => "Production annuelle",
        "prodconsomme" => "Production autoconsommée",
        "prodrevendue" => "Production revendue",
        "valprodconsomme" => "Valeur de l'autoconsommation",
        "valprodrevendue" => "Valeur de la revente",
        "totalecoan" => "Économie annuelle totale",
        "ecomoisan1" => "Économie mensuelle, année 1",
        "ecomoismoy20ans" => "Économie mensuelle moyenne sur la période",
        "tarifdans20ans" => "Tarif projeté en fin de période",
        "facturedans10ans" => "Facture annuelle dans 10 ans",
        "totalfacs20anssanspv" => "Total des factures sans photovoltaïque",
        "economies20ans" => "Économies cumulées",
        "revente20ans" => "Revente cumulée",
        "totalfacs20ansavecpv" => "Total des factures avec photovoltaïque",
        "ecomoisan1avecbatt" => "Économie mensuelle avec batterie, année 1",
        "valprodan1avecbatt" => "Valeur de la production avec batterie, année 1",
        "economies20ansavecbatt" => "Économies cumulées avec batterie",
        "ecomoismoy20ansavecbatt" => "Économie mensuelle moyenne avec batterie (240 mois)",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_TITLE => "Solar Savings Calculator",
        STATUS_LOADING => "Loading…",
        STATUS_OK => "Results computed.",
        STATUS_FAILED => "Loading failed.",
        ERROR_LOAD_DETAIL => "Error while loading {source}: {message}",
        ERROR_LOAD_HINT => "Check that the input file exists and holds a JSON object.",
        COLUMN_FIELD => "Field",
        COLUMN_VALUE => "Value",
        COLUMN_UNIT => "Unit",
        UNIT_MONTH => "month",
        GUI_SOURCE => "Source:",
        GUI_OPEN => "Open…",
        GUI_RELOAD => "Reload",
        GUI_INPUTS => "Inputs",
        _ => return en_field(key),
    })
}

fn en_field(key: &str) -> Option<&'static str> {
    let field = key.strip_prefix(keys::FIELD_PREFIX)?;
    Some(match field {
        "facturean" => "Annual bill",
        "consokwh" => "Annual consumption",
        "rationuit" => "Night-time consumption share",
        "consoankwhdiurne" => "Annual daytime consumption",
        "consoankwhnocturne" => "Annual night-time consumption",
        "prodan" => "Annual production",
        "prodconsomme" => "Self-consumed production",
        "prodrevendue" => "Resold production",
        "valprodconsomme" => "Self-consumption value",
        "valprodrevendue" => "Resale value",
        "totalecoan" => "Total annual benefit",
        "ecomoisan1" => "Monthly saving, year 1",
        "ecomoismoy20ans" => "Average monthly saving over the horizon",
        "tarifdans20ans" => "Projected tariff at end of horizon",
        "facturedans10ans" => "Annual bill in 10 years",
        "totalfacs20anssanspv" => "Cumulative bills without solar",
        "economies20ans" => "Cumulative savings",
        "revente20ans" => "Cumulative resale income",
        "totalfacs20ansavecpv" => "Cumulative bills with solar",
        "ecomoisan1avecbatt" => "Monthly saving with battery, year 1",
        "valprodan1avecbatt" => "Production value with battery, year 1",
        "economies20ansavecbatt" => "Cumulative savings with battery",
        "ecomoismoy20ansavecbatt" => "Average monthly saving with battery (240 months)",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_language_falls_back_to_french() {
        let tr = Translator::new("de");
        assert_eq!(tr.language(), Language::Fr);
        assert_eq!(tr.t(keys::UNIT_MONTH), "mois");
    }

    #[test]
    fn cli_flag_beats_config() {
        assert_eq!(resolve_language("en-GB", Some("fr")), "en");
        assert_eq!(resolve_language("auto", Some("fr_FR")), "fr");
    }

    #[test]
    fn every_field_has_a_description_in_both_languages() {
        for spec in crate::solar::DEFAULT_LAYOUT.iter() {
            let key = spec.field.key();
            assert!(fr_field(&format!("field.{key}")).is_some(), "fr {key}");
            assert!(en_field(&format!("field.{key}")).is_some(), "en {key}");
        }
    }

    #[test]
    fn nested_pack_tables_flatten_to_dotted_keys() {
        let map = parse_toml_to_map("[status]\nok = \"Fini\"\n").expect("pack");
        assert_eq!(map.get("status.ok").map(String::as_str), Some("Fini"));
    }

    #[test]
    fn language_pack_replaces_only_listed_strings() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("fr.toml"),
            "[status]\nok = \"Calcul terminé\"\n\n[field]\nfacturean = \"Facture sur un an\"\n",
        )
        .unwrap();
        let pack = dir.path().to_str().unwrap();

        let tr = Translator::new_with_pack("fr", Some(pack));
        assert_eq!(tr.t(keys::STATUS_OK), "Calcul terminé");
        assert_eq!(tr.field_description("facturean"), "Facture sur un an");
        assert_eq!(tr.t(keys::COLUMN_VALUE), "Valeur");
        assert_eq!(tr.field_description("prodan"), "Production annuelle");

        // en.toml이 없으면 내장 문자열 그대로
        let en = Translator::new_with_pack("en", Some(pack));
        assert_eq!(en.t(keys::STATUS_OK), "Results computed.");
        assert_eq!(en.lookup(keys::STATUS_OK), None);
    }

    #[test]
    fn pack_without_strings_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("fr.toml"), "version = 2\n").unwrap();
        let tr = Translator::new_with_pack("fr", dir.path().to_str());
        assert_eq!(tr.lookup(keys::STATUS_OK), None);
        assert_eq!(tr.t(keys::STATUS_OK), "Données calculées.");
    }

    #[test]
    fn template_fills_named_slots() {
        let out = fill_template("{a}-{b}", &[("a", "1".into()), ("b", "2".into())]);
        assert_eq!(out, "1-2");
    }
}
