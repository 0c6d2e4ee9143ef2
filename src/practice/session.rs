//! 타자 연습 세션 상태

use crate::core::composer::{add_jamo, handle_backspace};

use super::keystrokes::keystrokes_for;

/// 단어 하나에 대한 타자 연습 세션
///
/// 조합 엔진은 순수 함수이므로 버퍼 값과 목표 단어, 입력 통계는
/// 세션이 대신 들고 있습니다. 목표 단어의 자모 키 시퀀스와 그 중간
/// 버퍼들을 미리 계산해 두고 진행 상황 판정에 사용합니다.
pub struct PracticeSession {
    /// 목표 단어
    target: String,
    /// 현재 입력 버퍼
    buffer: String,
    /// 목표 단어의 자모 키 시퀀스
    key_seq: Vec<char>,
    /// 키 시퀀스를 따라갈 때 거치는 중간 버퍼 (states[0] = 빈 버퍼)
    states: Vec<String>,
    /// 전체 자모 입력 수
    presses: usize,
    /// 정상 경로를 벗어난 입력 수
    errors: usize,
    /// 백스페이스 입력 수
    backspaces: usize,
}

impl PracticeSession {
    /// 목표 단어로 새 세션 생성
    pub fn new(target: &str) -> Self {
        let key_seq = keystrokes_for(target);
        let mut states = Vec::with_capacity(key_seq.len() + 1);
        let mut buf = String::new();
        states.push(buf.clone());
        for &key in &key_seq {
            buf = add_jamo(&buf, key);
            states.push(buf.clone());
        }
        Self {
            target: target.to_string(),
            buffer: String::new(),
            key_seq,
            states,
            presses: 0,
            errors: 0,
            backspaces: 0,
        }
    }

    /// 자모 키 하나 입력
    /// 입력 후 버퍼가 정상 경로를 벗어나 있으면 오타로 집계됩니다
    pub fn press(&mut self, key: char) {
        self.buffer = add_jamo(&self.buffer, key);
        self.presses += 1;
        if !self.on_track() {
            self.errors += 1;
        }
    }

    /// 백스페이스 입력
    pub fn backspace(&mut self) {
        self.buffer = handle_backspace(&self.buffer);
        self.backspaces += 1;
    }

    /// 현재 입력 버퍼
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// 목표 단어
    pub fn target(&self) -> &str {
        &self.target
    }

    /// 목표 단어의 전체 자모 키 시퀀스
    pub fn key_sequence(&self) -> &[char] {
        &self.key_seq
    }

    /// 목표 단어 완성 여부
    pub fn is_complete(&self) -> bool {
        self.buffer == self.target
    }

    /// 현재 버퍼가 정상 입력 경로 위의 상태인지 확인
    pub fn on_track(&self) -> bool {
        self.states.iter().any(|s| s == &self.buffer)
    }

    /// 입력 경로에서의 진행 위치
    /// 반환: (지금까지 맞게 입력한 키 수, 전체 키 수)   경로 이탈 시 None
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.states
            .iter()
            .position(|s| s == &self.buffer)
            .map(|done| (done, self.key_seq.len()))
    }

    /// 다음에 눌러야 할 자모 키
    /// 완성됐거나 경로를 벗어난 상태면 None
    pub fn next_key(&self) -> Option<char> {
        let done = self.states.iter().position(|s| s == &self.buffer)?;
        self.key_seq.get(done).copied()
    }

    /// 전체 자모 입력 수
    pub fn presses(&self) -> usize {
        self.presses
    }

    /// 오타로 집계된 입력 수
    pub fn errors(&self) -> usize {
        self.errors
    }

    /// 백스페이스 입력 수
    pub fn backspaces(&self) -> usize {
        self.backspaces
    }

    /// 버퍼와 통계를 비우고 같은 단어를 처음부터 다시 연습
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.presses = 0;
        self.errors = 0;
        self.backspaces = 0;
    }
}
