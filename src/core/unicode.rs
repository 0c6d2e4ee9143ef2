//! 유니코드 한글 음절 조합/분해와 복합 자모 테이블

use crate::core::jamo::{
    choseong_char, choseong_index, jongseong_char, jongseong_index, jungseong_char,
    jungseong_index,
};

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;

/// 완성형 음절 개수 (가 ~ 힣)
const SYLLABLE_COUNT: u32 = 11172;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 완성형 한글 음절인지 확인 (가 ~ 힣)
pub fn is_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..HANGUL_SYLLABLE_BASE + SYLLABLE_COUNT).contains(&(c as u32))
}

/// 자모 문자로 완성된 한글 음절 생성
/// - cho: 초성 자모
/// - jung: 중성 자모
/// - jong: 종성 자모 (None = 종성 없음)
pub fn compose_syllable(cho: char, jung: char, jong: Option<char>) -> Option<char> {
    let cho_index = choseong_index(cho)?;
    let jung_index = jungseong_index(jung)?;
    let jong_index = match jong {
        Some(j) => jongseong_index(j)?,
        None => 0,
    };
    let code = HANGUL_SYLLABLE_BASE
        + (cho_index * JUNGSEONG_COUNT + jung_index) * JONGSEONG_COUNT
        + jong_index;
    char::from_u32(code)
}

/// 완성형 한글 음절을 자모 문자로 분해
/// 반환: (초성, 중성, 종성)   종성 없는 글자는 종성 자리가 None
pub fn decompose_syllable(c: char) -> Option<(char, char, Option<char>)> {
    if !is_syllable(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let jong_index = offset % JONGSEONG_COUNT;
    let jung_index = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let cho_index = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    let cho = choseong_char(cho_index)?;
    let jung = jungseong_char(jung_index)?;
    let jong = if jong_index == 0 {
        None
    } else {
        Some(jongseong_char(jong_index)?)
    };
    Some((cho, jung, jong))
}

/// 두 중성을 복합 모음으로 조합
/// 순서가 있는 부분 함수로, 역순 입력(ㅏ+ㅗ 등)은 None
pub fn combine_jungseong(first: char, second: char) -> Option<char> {
    // 복합 모음 조합 테이블
    match (first, second) {
        ('ㅗ', 'ㅏ') => Some('ㅘ'),
        ('ㅗ', 'ㅐ') => Some('ㅙ'),
        ('ㅗ', 'ㅣ') => Some('ㅚ'),
        ('ㅜ', 'ㅓ') => Some('ㅝ'),
        ('ㅜ', 'ㅔ') => Some('ㅞ'),
        ('ㅜ', 'ㅣ') => Some('ㅟ'),
        ('ㅡ', 'ㅣ') => Some('ㅢ'),
        _ => None,
    }
}

/// 두 종성을 복합 종성으로 조합
/// 홑받침끼리만 결합하며 겹받침은 다시 조합되지 않습니다
pub fn combine_jongseong(first: char, second: char) -> Option<char> {
    // 복합 종성 조합 테이블
    match (first, second) {
        ('ㄱ', 'ㅅ') => Some('ㄳ'),
        ('ㄴ', 'ㅈ') => Some('ㄵ'),
        ('ㄴ', 'ㅎ') => Some('ㄶ'),
        ('ㄹ', 'ㄱ') => Some('ㄺ'),
        ('ㄹ', 'ㅁ') => Some('ㄻ'),
        ('ㄹ', 'ㅂ') => Some('ㄼ'),
        ('ㄹ', 'ㅅ') => Some('ㄽ'),
        ('ㄹ', 'ㅌ') => Some('ㄾ'),
        ('ㄹ', 'ㅍ') => Some('ㄿ'),
        ('ㄹ', 'ㅎ') => Some('ㅀ'),
        ('ㅂ', 'ㅅ') => Some('ㅄ'),
        _ => None,
    }
}

/// 복합 종성을 분리
/// 반환: (남는 종성, 다음 글자의 초성으로 이동하는 자음)
pub fn split_jongseong(jong: char) -> Option<(char, char)> {
    // combine_jongseong의 역방향 테이블
    match jong {
        'ㄳ' => Some(('ㄱ', 'ㅅ')),
        'ㄵ' => Some(('ㄴ', 'ㅈ')),
        'ㄶ' => Some(('ㄴ', 'ㅎ')),
        'ㄺ' => Some(('ㄹ', 'ㄱ')),
        'ㄻ' => Some(('ㄹ', 'ㅁ')),
        'ㄼ' => Some(('ㄹ', 'ㅂ')),
        'ㄽ' => Some(('ㄹ', 'ㅅ')),
        'ㄾ' => Some(('ㄹ', 'ㅌ')),
        'ㄿ' => Some(('ㄹ', 'ㅍ')),
        'ㅀ' => Some(('ㄹ', 'ㅎ')),
        'ㅄ' => Some(('ㅂ', 'ㅅ')),
        _ => None,
    }
}
