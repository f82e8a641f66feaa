use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

use crate::fields::FieldSpec;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const TITLE: &str = "general.title";
    pub const ALTITUDE: &str = "input.altitude";
    pub const AIRSPEED: &str = "input.airspeed";
    pub const LENGTH: &str = "input.length";
    pub const UNIT_SYSTEM: &str = "option.unit_system";
    pub const FULL_OUTPUT: &str = "option.full_output";
    pub const TEXT_OUTPUT: &str = "option.text_output";

    /// UI 호스트가 화면 문구로 쓰는 키 전체.
    pub const ALL: [&str; 7] = [
        TITLE,
        ALTITUDE,
        AIRSPEED,
        LENGTH,
        UNIT_SYSTEM,
        FULL_OUTPUT,
        TEXT_OUTPUT,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
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
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    /// TOML 문자열을 언어팩으로 쓰는 번역기를 생성한다.
    pub fn from_toml_pack(lang_code: &str, src: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: parse_toml_to_map(src),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }

    fn builtin(&self, key: &str) -> Option<&'static str> {
        match self.lang {
            Language::En => en(key),
            Language::Ko => ko(key).or_else(|| en(key)),
        }
    }

    /// 번역을 가져온다. 한국어 번역이 없으면 영어 문자열로 폴백한다.
    pub fn t(&self, key: &str) -> &str {
        self.lookup(key)
            .or_else(|| self.builtin(key))
            .unwrap_or("[missing translation]")
    }

    /// 출력 항목의 표시 이름. 번역이 없으면 항목 표의 영문 이름을 쓴다.
    pub fn field_label(&self, spec: &FieldSpec) -> &str {
        let key = format!("field.{}", spec.key);
        self.lookup(&key)
            .or_else(|| self.builtin(&key))
            .unwrap_or(spec.label)
    }

    /// 모드 선택지의 표시 이름. `english`는 모드의 호스트 표시 문자열이다.
    pub fn mode_label(&self, english: &'static str) -> &str {
        let key = format!("mode.{}", english.to_lowercase().replace(' ', "_"));
        self.lookup(&key)
            .or_else(|| self.builtin(&key))
            .unwrap_or(english)
    }
}

/// 설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(config_lang: Option<&str>) -> String {
    config_lang
        .and_then(normalize_lang)
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
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
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LC_ALL", "LANG"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [field] 같은 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // en-us -> en
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        TITLE => "비행 조건 계산기",
        ALTITUDE => "고도",
        AIRSPEED => "대기속도",
        LENGTH => "길이",
        UNIT_SYSTEM => "단위계",
        FULL_OUTPUT => "전체 출력",
        TEXT_OUTPUT => "텍스트 출력",

        "mode.geometric_altitude" => "기하고도",
        "mode.geopotential_altitude" => "지오퍼텐셜 고도",
        "mode.pressure_altitude" => "기압고도",
        "mode.mach_number" => "마하수",
        "mode.true_airspeed" => "진대기속도",
        "mode.calibrated_airspeed" => "교정대기속도",
        "mode.equivalent_airspeed" => "등가대기속도",
        "mode.length" => "길이",
        "mode.reynolds_number" => "레이놀즈 수",

        "field.h" => "기하고도",
        "field.H" => "지오퍼텐셜 고도",
        "field.p" => "압력",
        "field.T" => "온도",
        "field.rho" => "밀도",
        "field.a" => "음속",
        "field.mu" => "점성계수",
        "field.nu" => "동점성계수",
        "field.k" => "열전도율",
        "field.g" => "중력가속도",
        "field.MFP" => "평균 자유 행로",
        "field.layer_name" => "대기층",
        "field.M" => "마하수",
        "field.TAS" => "진대기속도",
        "field.CAS" => "교정대기속도",
        "field.EAS" => "등가대기속도",
        "field.q_inf" => "동압",
        "field.q_c" => "충격압",
        "field.p0" => "정체 압력",
        "field.T0" => "정체 온도",
        "field.Tr_lamr" => "회복 온도(층류)",
        "field.Tr_turb" => "회복 온도(난류)",
        "field.Re_by_L" => "단위 길이당 레이놀즈 수",
        "field.L" => "길이",
        "field.Re" => "레이놀즈 수",
        "field.h_BL_lamr" => "경계층 두께(층류)",
        "field.h_BL_turb" => "경계층 두께(난류)",
        "field.Cf_lamr" => "표면 마찰계수(층류)",
        "field.Cf_turb" => "표면 마찰계수(난류)",
        "field.h_yplus1" => "y+ = 1 벽면 거리",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        TITLE => "Flight Condition Calculator",
        ALTITUDE => "Altitude",
        AIRSPEED => "Airspeed",
        LENGTH => "Length",
        UNIT_SYSTEM => "Unit System",
        FULL_OUTPUT => "Full Output",
        TEXT_OUTPUT => "Text Output",
        _ => return None,
    })
}
