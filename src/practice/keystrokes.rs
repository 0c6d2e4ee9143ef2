//! 한글 단어 -> 자모 키 시퀀스 역변환
//!
//! 완성형 한글을 두벌식 가상 자판에서 눌러야 할 자모 키 순서로
//! 풀어냅니다. 복합 모음과 겹받침은 실제 타자 순서대로 두 키로
//! 펼쳐집니다.

use crate::core::unicode::{decompose_syllable, split_jongseong};

/// 단어를 입력 순서대로의 자모 키 시퀀스로 변환
///
/// # Examples
/// ```
/// use tajagi::keystrokes_for;
/// assert_eq!(keystrokes_for("감"), vec!['ㄱ', 'ㅏ', 'ㅁ']);
/// assert_eq!(keystrokes_for("워"), vec!['ㅇ', 'ㅜ', 'ㅓ']);
/// ```
pub fn keystrokes_for(word: &str) -> Vec<char> {
    let mut keys = Vec::with_capacity(word.chars().count() * 3);
    for c in word.chars() {
        if let Some((cho, jung, jong)) = decompose_syllable(c) {
            keys.push(cho);
            push_jungseong_keys(jung, &mut keys);
            if let Some(j) = jong {
                push_jongseong_keys(j, &mut keys);
            }
        } else {
            // 한글 음절이 아닌 문자는 키 하나로 취급
            keys.push(c);
        }
    }
    keys
}

/// 중성 키 추가 (복합 모음은 구성 모음 두 키로)
fn push_jungseong_keys(jung: char, keys: &mut Vec<char>) {
    match jung {
        'ㅘ' => {
            keys.push('ㅗ');
            keys.push('ㅏ');
        }
        'ㅙ' => {
            keys.push('ㅗ');
            keys.push('ㅐ');
        }
        'ㅚ' => {
            keys.push('ㅗ');
            keys.push('ㅣ');
        }
        'ㅝ' => {
            keys.push('ㅜ');
            keys.push('ㅓ');
        }
        'ㅞ' => {
            keys.push('ㅜ');
            keys.push('ㅔ');
        }
        'ㅟ' => {
            keys.push('ㅜ');
            keys.push('ㅣ');
        }
        'ㅢ' => {
            keys.push('ㅡ');
            keys.push('ㅣ');
        }
        _ => keys.push(jung),
    }
}

/// 종성 키 추가 (겹받침은 구성 자음 두 키로)
fn push_jongseong_keys(jong: char, keys: &mut Vec<char>) {
    if let Some((first, second)) = split_jongseong(jong) {
        keys.push(first);
        keys.push(second);
    } else {
        keys.push(jong);
    }
}
