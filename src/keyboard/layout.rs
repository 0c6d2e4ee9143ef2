//! 두벌식 자판 영문 키 <-> 한글 자모 매핑

/// 영문 키 하나를 두벌식 자모로 변환
/// 매핑에 없는 문자(숫자, 특수문자, 나머지 대문자)는 None 반환
pub fn key_to_jamo(key: char) -> Option<char> {
    match key {
        // 자음
        'r' => Some('ㄱ'),
        'R' => Some('ㄲ'),
        's' => Some('ㄴ'),
        'e' => Some('ㄷ'),
        'E' => Some('ㄸ'),
        'f' => Some('ㄹ'),
        'a' => Some('ㅁ'),
        'q' => Some('ㅂ'),
        'Q' => Some('ㅃ'),
        't' => Some('ㅅ'),
        'T' => Some('ㅆ'),
        'd' => Some('ㅇ'),
        'w' => Some('ㅈ'),
        'W' => Some('ㅉ'),
        'c' => Some('ㅊ'),
        'z' => Some('ㅋ'),
        'x' => Some('ㅌ'),
        'v' => Some('ㅍ'),
        'g' => Some('ㅎ'),

        // 모음
        'k' => Some('ㅏ'),
        'o' => Some('ㅐ'),
        'i' => Some('ㅑ'),
        'O' => Some('ㅒ'),
        'j' => Some('ㅓ'),
        'p' => Some('ㅔ'),
        'u' => Some('ㅕ'),
        'P' => Some('ㅖ'),
        'h' => Some('ㅗ'),
        'y' => Some('ㅛ'),
        'n' => Some('ㅜ'),
        'b' => Some('ㅠ'),
        'm' => Some('ㅡ'),
        'l' => Some('ㅣ'),

        _ => None,
    }
}

/// 자모를 두벌식 영문 키로 변환 (key_to_jamo의 역방향)
/// 한 키로 입력할 수 없는 복합 자모(ㅘ, ㄳ 등)는 None 반환
pub fn jamo_to_key(jamo: char) -> Option<char> {
    match jamo {
        // 자음
        'ㄱ' => Some('r'),
        'ㄲ' => Some('R'),
        'ㄴ' => Some('s'),
        'ㄷ' => Some('e'),
        'ㄸ' => Some('E'),
        'ㄹ' => Some('f'),
        'ㅁ' => Some('a'),
        'ㅂ' => Some('q'),
        'ㅃ' => Some('Q'),
        'ㅅ' => Some('t'),
        'ㅆ' => Some('T'),
        'ㅇ' => Some('d'),
        'ㅈ' => Some('w'),
        'ㅉ' => Some('W'),
        'ㅊ' => Some('c'),
        'ㅋ' => Some('z'),
        'ㅌ' => Some('x'),
        'ㅍ' => Some('v'),
        'ㅎ' => Some('g'),

        // 모음
        'ㅏ' => Some('k'),
        'ㅐ' => Some('o'),
        'ㅑ' => Some('i'),
        'ㅒ' => Some('O'),
        'ㅓ' => Some('j'),
        'ㅔ' => Some('p'),
        'ㅕ' => Some('u'),
        'ㅖ' => Some('P'),
        'ㅗ' => Some('h'),
        'ㅛ' => Some('y'),
        'ㅜ' => Some('n'),
        'ㅠ' => Some('b'),
        'ㅡ' => Some('m'),
        'ㅣ' => Some('l'),

        _ => None,
    }
}

/// 시프트 상태에서의 자모 변환
/// 시프트 짝은 쌍자음 다섯 개와 ㅒ/ㅖ뿐입니다
pub fn shift_jamo(jamo: char) -> Option<char> {
    match jamo {
        'ㄱ' => Some('ㄲ'),
        'ㄷ' => Some('ㄸ'),
        'ㅂ' => Some('ㅃ'),
        'ㅅ' => Some('ㅆ'),
        'ㅈ' => Some('ㅉ'),
        'ㅐ' => Some('ㅒ'),
        'ㅔ' => Some('ㅖ'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consonant_mapping() {
        assert_eq!(key_to_jamo('r'), Some('ㄱ'));
        assert_eq!(key_to_jamo('s'), Some('ㄴ'));
        assert_eq!(key_to_jamo('g'), Some('ㅎ'));
        // 쌍자음은 시프트 키
        assert_eq!(key_to_jamo('R'), Some('ㄲ'));
        assert_eq!(key_to_jamo('E'), Some('ㄸ'));
        assert_eq!(key_to_jamo('T'), Some('ㅆ'));
    }

    #[test]
    fn test_vowel_mapping() {
        assert_eq!(key_to_jamo('k'), Some('ㅏ'));
        assert_eq!(key_to_jamo('h'), Some('ㅗ'));
        assert_eq!(key_to_jamo('l'), Some('ㅣ'));
        assert_eq!(key_to_jamo('O'), Some('ㅒ'));
        assert_eq!(key_to_jamo('P'), Some('ㅖ'));
    }

    #[test]
    fn test_unmapped_characters() {
        assert_eq!(key_to_jamo('1'), None);
        assert_eq!(key_to_jamo('!'), None);
        assert_eq!(key_to_jamo(' '), None);
        assert_eq!(key_to_jamo('X'), None); // 대문자 X는 매핑 없음
        assert_eq!(key_to_jamo('A'), None);
    }

    #[test]
    fn test_key_roundtrip() {
        // 매핑된 모든 키가 역방향과 맞물리는지 확인
        let keys = "rRseEfaqQtTdwWczxvgkoiOjpuPhynbml";
        for key in keys.chars() {
            let jamo = key_to_jamo(key).unwrap();
            assert_eq!(jamo_to_key(jamo), Some(key));
        }
    }

    #[test]
    fn test_jamo_to_key_compound() {
        // 복합 자모는 한 키로 입력 불가
        assert_eq!(jamo_to_key('ㅘ'), None);
        assert_eq!(jamo_to_key('ㅢ'), None);
        assert_eq!(jamo_to_key('ㄳ'), None);
    }

    #[test]
    fn test_shift_jamo() {
        assert_eq!(shift_jamo('ㄱ'), Some('ㄲ'));
        assert_eq!(shift_jamo('ㄷ'), Some('ㄸ'));
        assert_eq!(shift_jamo('ㅂ'), Some('ㅃ'));
        assert_eq!(shift_jamo('ㅅ'), Some('ㅆ'));
        assert_eq!(shift_jamo('ㅈ'), Some('ㅉ'));
        assert_eq!(shift_jamo('ㅐ'), Some('ㅒ'));
        assert_eq!(shift_jamo('ㅔ'), Some('ㅖ'));
        // 시프트 짝이 없는 자모
        assert_eq!(shift_jamo('ㄴ'), None);
        assert_eq!(shift_jamo('ㅏ'), None);
    }
}
