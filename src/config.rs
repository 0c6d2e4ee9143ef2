//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// 타자 연습 설정
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PracticeConfig {
    /// 사용자 단어장 파일 경로 (빈 문자열이면 내장 단어장)
    #[serde(default = "default_wordlist_path")]
    pub wordlist_path: String,
    /// 단어마다 자모 키 시퀀스 힌트 표시 여부
    #[serde(default = "default_show_hint")]
    pub show_hint: bool,
    /// 한 판에 연습할 단어 수 (0 = 전체)
    #[serde(default = "default_word_limit")]
    pub word_limit: usize,
}

fn default_wordlist_path() -> String {
    String::new()
}

fn default_show_hint() -> bool {
    true
}

fn default_word_limit() -> usize {
    0
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            wordlist_path: default_wordlist_path(),
            show_hint: default_show_hint(),
            word_limit: default_word_limit(),
        }
    }
}

/// 설정 파일 경로: ~/.config/tajagi/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백 (쓰기 가능, /tmp보다 안전)
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("tajagi").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> PracticeConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|_| {
            log::warn!("설정 파일 파싱 실패, 기본값 사용: {}", path.display());
            PracticeConfig::default()
        }),
        Err(_) => PracticeConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &PracticeConfig) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PracticeConfig::default();
        assert_eq!(config.wordlist_path, "");
        assert!(config.show_hint);
        assert_eq!(config.word_limit, 0);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = PracticeConfig {
            wordlist_path: "/tmp/words.json".to_string(),
            show_hint: false,
            word_limit: 10,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: PracticeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.wordlist_path, "/tmp/words.json");
        assert!(!parsed.show_hint);
        assert_eq!(parsed.word_limit, 10);
    }

    #[test]
    fn test_backward_compat_missing_field() {
        // 이전 설정 파일에 word_limit이 없는 경우 기본값 사용
        let json = r#"{"show_hint": false}"#;
        let config: PracticeConfig = serde_json::from_str(json).unwrap();
        assert!(!config.show_hint);
        assert_eq!(config.wordlist_path, "");
        assert_eq!(config.word_limit, 0);
    }
}
