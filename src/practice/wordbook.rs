//! 연습 단어장 로드
//!
//! JSON 형식의 단어 목록 파일을 읽거나 내장 기본 단어장을 제공합니다.

use std::fs::File;
use std::io::BufReader;

use serde::{Deserialize, Serialize};

/// 단어장 로드/파싱 에러
#[derive(Debug)]
pub enum WordbookError {
    /// 파일 읽기 실패
    IoError(std::io::Error),
    /// JSON 파싱 실패
    ParseError(String),
    /// 단어장 형식 오류
    FormatError(String),
}

impl std::fmt::Display for WordbookError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WordbookError::IoError(e) => write!(f, "파일 읽기 오류: {}", e),
            WordbookError::ParseError(s) => write!(f, "JSON 파싱 오류: {}", s),
            WordbookError::FormatError(s) => write!(f, "단어장 형식 오류: {}", s),
        }
    }
}

impl std::error::Error for WordbookError {}

impl From<std::io::Error> for WordbookError {
    fn from(e: std::io::Error) -> Self {
        WordbookError::IoError(e)
    }
}

/// 연습 대상 단어 하나
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// 입력할 단어
    pub text: String,
    /// 뜻풀이 (없어도 됨)
    #[serde(default)]
    pub meaning: Option<String>,
}

/// 연습 단어장
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wordbook {
    /// 단어 목록
    words: Vec<Word>,
}

impl Wordbook {
    /// JSON 파일에서 단어장 로드
    ///
    /// # 파일 형식
    /// ```json
    /// {
    ///   "words": [
    ///     { "text": "사과", "meaning": "apple" },
    ///     { "text": "나무" }
    ///   ]
    /// }
    /// ```
    pub fn load(path: &str) -> Result<Self, WordbookError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let book: Wordbook = serde_json::from_reader(reader)
            .map_err(|e| WordbookError::ParseError(e.to_string()))?;
        book.validate()
    }

    /// JSON 문자열에서 단어장 로드
    pub fn from_json(json_str: &str) -> Result<Self, WordbookError> {
        let book: Wordbook =
            serde_json::from_str(json_str).map_err(|e| WordbookError::ParseError(e.to_string()))?;
        book.validate()
    }

    /// 단어장 내용 검증
    fn validate(self) -> Result<Self, WordbookError> {
        if self.words.is_empty() {
            return Err(WordbookError::FormatError(
                "단어 목록이 비어 있습니다".into(),
            ));
        }
        if self.words.iter().any(|w| w.text.is_empty()) {
            return Err(WordbookError::FormatError("빈 단어가 있습니다".into()));
        }
        Ok(self)
    }

    /// 내장 기본 단어장
    pub fn builtin() -> Self {
        // 복합 모음, 겹받침, 도깨비불 경계가 고루 섞인 기본 목록
        #[rustfmt::skip]
        const DEFAULT_WORDS: [(&str, &str); 22] = [
            ("가다", "to go"),
            ("나무", "tree"),
            ("물", "water"),
            ("사과", "apple"),
            ("학교", "school"),
            ("친구", "friend"),
            ("사랑", "love"),
            ("김치", "kimchi"),
            ("서울", "Seoul"),
            ("한글", "Hangul"),
            ("바다", "sea"),
            ("하늘", "sky"),
            ("구름", "cloud"),
            ("책상", "desk"),
            ("의자", "chair"),
            ("과일", "fruit"),
            ("없다", "to not exist"),
            ("읽다", "to read"),
            ("닭", "chicken"),
            ("타자", "typing"),
            ("연습", "practice"),
            ("안녕하세요", "hello"),
        ];

        Self {
            words: DEFAULT_WORDS
                .iter()
                .map(|&(text, meaning)| Word {
                    text: text.to_string(),
                    meaning: Some(meaning.to_string()),
                })
                .collect(),
        }
    }

    /// 단어 목록
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}
