use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::i18n::{self, Translator};
use crate::session::Selection;

/// 출력 기본 단위를 고르는 단위 시스템.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnitSystem {
    /// 미국 관용 단위(ft, knots, slug 등)
    #[default]
    US,
    /// 국제 단위계
    SI,
}

impl UnitSystem {
    pub fn as_str(self) -> &'static str {
        match self {
            UnitSystem::US => "US",
            UnitSystem::SI => "SI",
        }
    }

    /// 세션에 저장된 문자열을 해석한다. 대소문자는 구분하지 않는다.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "US" => Some(UnitSystem::US),
            "SI" => Some(UnitSystem::SI),
            _ => None,
        }
    }
}

/// 애플리케이션 설정을 표현한다. 세션의 초기값으로만 쓰인다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub unit_system: UnitSystem,
    /// 부가 출력 항목(경계층, 정체 조건 등) 표시 여부
    pub full_output: bool,
    /// 항목별 투영 대신 계산기의 텍스트 출력을 그대로 표시
    pub text_output: bool,
    /// 라벨 언어 코드. 없으면 시스템 로케일을 따른다.
    pub language: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::US,
            full_output: false,
            text_output: false,
            language: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 설정 파일을 읽는다. 파일이 없으면 기본 설정을 반환하고 파일은 만들지 않는다.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        let content = fs::read_to_string(path)?;
        Config::from_toml_str(&content)
    } else {
        log::warn!("{} 없음, 기본 설정 사용", path.display());
        Ok(Config::default())
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Config, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// 설정을 지정한 경로에 저장한다.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 설정 언어(없거나 `auto`면 시스템 로케일)로 번역기를 만든다.
    ///
    /// `pack_dir`에 `<lang>.toml` 언어팩이 있으면 내장 문자열보다 우선한다.
    pub fn translator(&self, pack_dir: Option<&str>) -> Translator {
        let lang = i18n::resolve_language(self.language.as_deref());
        log::debug!("라벨 언어: {lang}");
        Translator::new_with_pack(&lang, pack_dir)
    }

    /// 설정된 단위 시스템에 맞춘 초기 선택값.
    pub fn default_selection(&self) -> Selection {
        Selection {
            full_output: self.full_output,
            text_output: self.text_output,
            ..Selection::defaults(self.unit_system)
        }
    }
}
