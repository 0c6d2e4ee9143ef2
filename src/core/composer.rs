//! 자모 단위 입력의 조합/삭제 전이
//!
//! 별도의 조합 상태 객체를 두지 않고 화면에 보이는 문자열 자체를
//! 유일한 상태로 사용합니다. 매 입력마다 버퍼 끝 1~2글자를 검사해
//! 현재 조합 단계를 복원하므로, 호출 쪽은 문자열 값 하나만 들고
//! 있으면 됩니다.
//!
//! # 사용 예
//! ```
//! use tajagi::{add_jamo, handle_backspace};
//!
//! let mut text = String::new();
//! for key in ['ㄱ', 'ㅏ', 'ㅁ'] {
//!     text = add_jamo(&text, key);
//! }
//! assert_eq!(text, "감");
//! assert_eq!(handle_backspace(&text), "가");
//! ```

use crate::core::jamo::{classify, is_choseong, is_jongseong, JamoKind};
use crate::core::unicode::{
    combine_jongseong, combine_jungseong, compose_syllable, decompose_syllable, split_jongseong,
};

/// 버퍼에 자모 하나를 입력한 다음 버퍼 계산
/// 자모가 아닌 문자는 그대로 뒤에 붙습니다
pub fn add_jamo(buffer: &str, key: char) -> String {
    match classify(key) {
        JamoKind::Jungseong => add_vowel(buffer, key),
        JamoKind::Choseong | JamoKind::Jongseong => add_consonant(buffer, key),
        JamoKind::Other => {
            let mut out = buffer.to_string();
            out.push(key);
            out
        }
    }
}

/// 자모 열을 빈 버퍼에서부터 순서대로 입력한 결과
pub fn compose_all(keys: &str) -> String {
    keys.chars().fold(String::new(), |buf, k| add_jamo(&buf, k))
}

/// 자음 입력 처리
fn add_consonant(buffer: &str, key: char) -> String {
    let mut out = buffer.to_string();
    let last = match out.pop() {
        Some(c) => c,
        None => {
            out.push(key);
            return out;
        }
    };

    if let Some((cho, jung, jong)) = decompose_syllable(last) {
        match jong {
            Some(j) => {
                // 받침 있는 음절: 복합 종성 조합을 새 초성보다 먼저 시도
                if let Some(combined) = combine_jongseong(j, key) {
                    match compose_syllable(cho, jung, Some(combined)) {
                        Some(s) => out.push(s),
                        None => {
                            // 이론상 발생하지 않음
                            out.push(last);
                            out.push(key);
                        }
                    }
                } else if is_choseong(key) {
                    // 조합 불가 -> 새 글자의 초성으로
                    out.push(last);
                    out.push(key);
                } else {
                    // 겹받침 전용 자모는 기존 종성을 통째로 교체
                    match compose_syllable(cho, jung, Some(key)) {
                        Some(s) => out.push(s),
                        None => {
                            out.push(last);
                            out.push(key);
                        }
                    }
                }
            }
            None => {
                // 받침 없는 음절: 종성으로 붙이기 시도
                if is_jongseong(key) {
                    match compose_syllable(cho, jung, Some(key)) {
                        Some(s) => out.push(s),
                        None => {
                            out.push(last);
                            out.push(key);
                        }
                    }
                } else {
                    // 종성 불가 자음 (ㄸ, ㅃ, ㅉ) -> 새 글자의 초성으로
                    out.push(last);
                    out.push(key);
                }
            }
        }
    } else if is_choseong(last) && is_choseong(key) {
        // 단독 초성이 연달아 오면 마지막 입력으로 교체
        out.push(key);
    } else {
        out.push(last);
        out.push(key);
    }
    out
}

/// 모음 입력 처리
fn add_vowel(buffer: &str, key: char) -> String {
    let mut out = buffer.to_string();
    let last = match out.pop() {
        Some(c) => c,
        None => {
            // 모음 단독으로는 음절을 만들 수 없음
            out.push(key);
            return out;
        }
    };

    if let Some((cho, jung, jong)) = decompose_syllable(last) {
        match jong {
            Some(j) => {
                // 종성이 다음 글자의 초성으로 이동 (도깨비불 현상)
                if let Some((remaining, moved)) = split_jongseong(j) {
                    // 겹받침: 첫 자음은 종성으로 남고 둘째 자음만 이동
                    match (
                        compose_syllable(cho, jung, Some(remaining)),
                        compose_syllable(moved, key, None),
                    ) {
                        (Some(prev), Some(new)) => {
                            out.push(prev);
                            out.push(new);
                        }
                        _ => {
                            // 이론상 발생하지 않음
                            out.push(last);
                            out.push(key);
                        }
                    }
                } else if is_choseong(j) {
                    // 홑받침: 통째로 다음 글자의 초성으로
                    match (
                        compose_syllable(cho, jung, None),
                        compose_syllable(j, key, None),
                    ) {
                        (Some(prev), Some(new)) => {
                            out.push(prev);
                            out.push(new);
                        }
                        _ => {
                            out.push(last);
                            out.push(key);
                        }
                    }
                } else {
                    // 초성이 될 수 없는 종성 (이론상 발생하지 않음)
                    out.push(last);
                    out.push(key);
                }
            }
            None => {
                // 복합 모음 조합 시도
                if let Some(combined) = combine_jungseong(jung, key) {
                    match compose_syllable(cho, combined, None) {
                        Some(s) => out.push(s),
                        None => {
                            out.push(last);
                            out.push(key);
                        }
                    }
                } else {
                    // 조합 불가 -> 모음 자모를 그대로 추가
                    out.push(last);
                    out.push(key);
                }
            }
        }
    } else if is_choseong(last) {
        // 단독 초성 + 모음 -> 새 음절
        match compose_syllable(last, key, None) {
            Some(s) => {
                // 직전 글자가 받침 있는 음절이면 제자리에서 다시 그리기
                rerender_trailing_final(&mut out);
                out.push(s);
            }
            None => {
                // 이론상 발생하지 않음 (단독 초성은 항상 유효한 초성)
                out.push(last);
                out.push(key);
            }
        }
    } else {
        // 단독 모음/겹받침/기타 문자 뒤에는 그대로 추가
        out.push(last);
        out.push(key);
    }
    out
}

/// 버퍼 끝 글자가 받침 있는 음절이면 분해 후 재조합해 다시 그립니다
/// 단독 초성과 모음이 결합하는 경우에만 거치는 경로이며,
/// 글자 내용 자체는 달라지지 않습니다 (받침 유실 방지 확인용 재조합)
fn rerender_trailing_final(out: &mut String) {
    if let Some(prev) = out.chars().last() {
        if let Some((cho, jung, Some(jong))) = decompose_syllable(prev) {
            if let Some(re) = compose_syllable(cho, jung, Some(jong)) {
                out.pop();
                out.push(re);
            }
        }
    }
}

/// 버퍼에 백스페이스 한 번을 적용한 다음 버퍼 계산
/// 글자 단위가 아니라 조합 단위로 지워집니다
pub fn handle_backspace(buffer: &str) -> String {
    let mut out = buffer.to_string();
    let last = match out.pop() {
        Some(c) => c,
        None => return out,
    };

    if let Some((cho, jung, jong)) = decompose_syllable(last) {
        match jong {
            Some(_) => {
                // 종성만 제거 (겹받침도 한 번에)
                if let Some(s) = compose_syllable(cho, jung, None) {
                    out.push(s);
                }
            }
            None => {
                // 초성/중성 자모 두 글자로 풀어서 남김
                out.push(cho);
                out.push(jung);
            }
        }
    }
    // 음절이 아닌 글자는 그대로 지워진 상태로 반환
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_composition() {
        let mut text = String::new();
        text = add_jamo(&text, 'ㄱ');
        assert_eq!(text, "ㄱ");
        text = add_jamo(&text, 'ㅏ');
        assert_eq!(text, "가");
        text = add_jamo(&text, 'ㅁ');
        assert_eq!(text, "감");
    }

    #[test]
    fn test_jongseong_moves_to_next_syllable() {
        // 감 + ㅅ -> 감ㅅ (ㅁ+ㅅ 겹받침 없음), + ㅏ -> 감사
        let text = add_jamo("감", 'ㅅ');
        assert_eq!(text, "감ㅅ");
        let text = add_jamo(&text, 'ㅏ');
        assert_eq!(text, "감사");
    }

    #[test]
    fn test_complex_jungseong() {
        // ㅇ + ㅜ + ㅓ -> 워
        assert_eq!(compose_all("ㅇㅜㅓ"), "워");
        // ㅇ + ㅗ + ㅏ -> 와
        assert_eq!(compose_all("ㅇㅗㅏ"), "와");
        // 조합 불가 모음은 그대로 추가
        assert_eq!(compose_all("ㄱㅏㅗ"), "가ㅗ");
    }

    #[test]
    fn test_complex_jongseong() {
        // 달 + ㄱ -> 닭
        assert_eq!(add_jamo("달", 'ㄱ'), "닭");
        // 학 + ㅅ -> 핛 (새 초성보다 겹받침 조합이 우선)
        assert_eq!(add_jamo("학", 'ㅅ'), "핛");
    }

    #[test]
    fn test_complex_jongseong_split_on_vowel() {
        // 핛 + ㅐ -> 학새 (겹받침의 둘째 자음만 이동)
        assert_eq!(add_jamo("핛", 'ㅐ'), "학새");
        // 닭 + ㅣ -> 달기
        assert_eq!(add_jamo("닭", 'ㅣ'), "달기");
        // 학생 전체 입력
        assert_eq!(compose_all("ㅎㅏㄱㅅㅐㅇ"), "학생");
    }

    #[test]
    fn test_simple_jongseong_moves_whole() {
        // 간 + ㅏ -> 가나 (홑받침은 통째로 이동)
        assert_eq!(add_jamo("간", 'ㅏ'), "가나");
        // 했 + ㅓ -> 해써 (쌍자음 받침도 통째로)
        assert_eq!(add_jamo("했", 'ㅓ'), "해써");
    }

    #[test]
    fn test_choseong_replace() {
        // 단독 초성은 마지막 입력으로 교체
        assert_eq!(add_jamo("ㄱ", 'ㄴ'), "ㄴ");
        assert_eq!(compose_all("ㄱㄴㄷㅏ"), "다");
    }

    #[test]
    fn test_standalone_jamo() {
        // 빈 버퍼에 모음만
        assert_eq!(add_jamo("", 'ㅏ'), "ㅏ");
        // 단독 모음끼리는 결합하지 않음
        assert_eq!(add_jamo("ㅏ", 'ㅗ'), "ㅏㅗ");
        // 단독 모음 뒤 자음은 새 글자 시작
        assert_eq!(add_jamo("ㅏ", 'ㄱ'), "ㅏㄱ");
        // 겹받침 자모 단독 입력
        assert_eq!(add_jamo("", 'ㄳ'), "ㄳ");
        assert_eq!(add_jamo("ㄳ", 'ㅏ'), "ㄳㅏ");
    }

    #[test]
    fn test_jongseong_only_jamo() {
        // 받침 없는 음절 + 겹받침 자모 -> 종성으로
        assert_eq!(add_jamo("가", 'ㄳ'), "갃");
        // 받침 있는 음절 + 겹받침 자모 -> 종성 통째로 교체
        assert_eq!(add_jamo("감", 'ㄳ'), "갃");
    }

    #[test]
    fn test_choseong_only_consonant() {
        // ㄸ/ㅃ/ㅉ은 종성이 될 수 없어 새 글자의 초성으로
        assert_eq!(add_jamo("가", 'ㄸ'), "가ㄸ");
        assert_eq!(add_jamo("감", 'ㅉ'), "감ㅉ");
        assert_eq!(compose_all("ㄱㅏㄸㅗ"), "가또");
    }

    #[test]
    fn test_passthrough() {
        // 자모 외 문자는 언제나 그대로 추가
        assert_eq!(add_jamo("", 'a'), "a");
        assert_eq!(add_jamo("가", '!'), "가!");
        assert_eq!(add_jamo("가!", 'ㄱ'), "가!ㄱ");
        let s = add_jamo(&add_jamo("감", 'x'), 'y');
        assert_eq!(s, "감xy");
    }

    #[test]
    fn test_full_word() {
        // 안녕하세요 = 12자모, 중간 단계의 도깨비불 포함
        assert_eq!(compose_all("ㅇㅏㄴㄴㅕㅇㅎㅏㅅㅔㅇㅛ"), "안녕하세요");
        assert_eq!(compose_all("ㅇㅡㅣㅅㅏ"), "의사");
        assert_eq!(compose_all("ㅂㅏㄹㄱㅕㄴ"), "발견");
        assert_eq!(compose_all("ㅇㅓㅂㅅㅇㅓ"), "없어");
    }

    #[test]
    fn test_backspace_decomposition_chain() {
        // 감 -> 가 -> ㄱㅏ -> ㄱ -> 빈 버퍼
        let text = "감".to_string();
        let text = handle_backspace(&text);
        assert_eq!(text, "가");
        let text = handle_backspace(&text);
        assert_eq!(text, "ㄱㅏ");
        let text = handle_backspace(&text);
        assert_eq!(text, "ㄱ");
        let text = handle_backspace(&text);
        assert_eq!(text, "");
        // 빈 버퍼는 그대로
        assert_eq!(handle_backspace(""), "");
    }

    #[test]
    fn test_backspace_complex_jamo() {
        // 겹받침은 한 번에 삭제
        assert_eq!(handle_backspace("닭"), "다");
        assert_eq!(handle_backspace("핛"), "하");
        // 복합 모음은 한 글자로 유지
        assert_eq!(handle_backspace("과"), "ㄱㅘ");
        assert_eq!(handle_backspace("워"), "ㅇㅝ");
    }

    #[test]
    fn test_backspace_non_syllable() {
        assert_eq!(handle_backspace("가a"), "가");
        assert_eq!(handle_backspace("ㄱㅏ"), "ㄱ");
        assert_eq!(handle_backspace("ㄳ"), "");
    }

    #[test]
    fn test_backspace_terminates() {
        // 어떤 버퍼든 음운 단위 수의 2배 안에 빈 문자열 도달
        for text in ["안녕하세요", "닭갈비", "ㄱㅏㅗ!", "abc가", "핛의"] {
            let units: usize = text
                .chars()
                .map(|c| match decompose_syllable(c) {
                    Some((_, _, Some(_))) => 3,
                    Some((_, _, None)) => 2,
                    None => 1,
                })
                .sum();
            let mut buf = text.to_string();
            let mut steps = 0;
            while !buf.is_empty() {
                buf = handle_backspace(&buf);
                steps += 1;
                assert!(steps <= units * 2, "{}에서 백스페이스가 수렴하지 않음", text);
            }
        }
    }

    #[test]
    fn test_compose_all_empty() {
        assert_eq!(compose_all(""), "");
    }
}
