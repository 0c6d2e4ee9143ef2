//! 호환용 한글 자모 분류와 인덱스 테이블

/// 초성 19자 (유니코드 인덱스 순서)
#[rustfmt::skip]
const CHOSEONG_CHARS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 21자 (유니코드 인덱스 순서)
#[rustfmt::skip]
const JUNGSEONG_CHARS: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ',
    'ㅣ',
];

/// 종성 27자 (인덱스 1~27에 대응, 0 = 종성 없음)
#[rustfmt::skip]
const JONGSEONG_CHARS: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ',
    'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ',
    'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 자모 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JamoKind {
    /// 초성으로 쓸 수 있는 자음 (종성 겸용 포함)
    Choseong,
    /// 중성 모음
    Jungseong,
    /// 종성으로만 쓰이는 겹받침 자모 (ㄳ, ㄵ 등)
    Jongseong,
    /// 한글 자모 외 문자
    Other,
}

/// 문자 하나를 자모 유형으로 분류
/// 초성/종성 겸용 자음(ㄱ, ㄴ 등)은 Choseong으로 분류됩니다
pub fn classify(c: char) -> JamoKind {
    if is_choseong(c) {
        JamoKind::Choseong
    } else if is_jungseong(c) {
        JamoKind::Jungseong
    } else if is_jongseong(c) {
        JamoKind::Jongseong
    } else {
        JamoKind::Other
    }
}

/// 초성으로 쓸 수 있는 자모인지 확인
pub fn is_choseong(c: char) -> bool {
    CHOSEONG_CHARS.contains(&c)
}

/// 중성 모음 자모인지 확인
pub fn is_jungseong(c: char) -> bool {
    JUNGSEONG_CHARS.contains(&c)
}

/// 종성으로 쓸 수 있는 자모인지 확인 (겹받침 포함)
pub fn is_jongseong(c: char) -> bool {
    JONGSEONG_CHARS.contains(&c)
}

/// 초성 자모의 인덱스 (0~18)
pub fn choseong_index(c: char) -> Option<u32> {
    CHOSEONG_CHARS.iter().position(|&j| j == c).map(|i| i as u32)
}

/// 중성 자모의 인덱스 (0~20)
pub fn jungseong_index(c: char) -> Option<u32> {
    JUNGSEONG_CHARS
        .iter()
        .position(|&j| j == c)
        .map(|i| i as u32)
}

/// 종성 자모의 인덱스 (1~27)
/// 종성 없음(0)에 해당하는 자모 문자는 없습니다
pub fn jongseong_index(c: char) -> Option<u32> {
    JONGSEONG_CHARS
        .iter()
        .position(|&j| j == c)
        .map(|i| i as u32 + 1)
}

/// 초성 인덱스에 해당하는 자모 문자
pub fn choseong_char(index: u32) -> Option<char> {
    CHOSEONG_CHARS.get(index as usize).copied()
}

/// 중성 인덱스에 해당하는 자모 문자
pub fn jungseong_char(index: u32) -> Option<char> {
    JUNGSEONG_CHARS.get(index as usize).copied()
}

/// 종성 인덱스(1~27)에 해당하는 자모 문자
/// 0(종성 없음)은 None 반환
pub fn jongseong_char(index: u32) -> Option<char> {
    if index == 0 {
        return None;
    }
    JONGSEONG_CHARS.get(index as usize - 1).copied()
}
