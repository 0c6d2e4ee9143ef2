//! 타자 연습 지원 모듈
//!
//! 조합 엔진 위에서 단어 단위 타자 연습을 돌리기 위한 부속입니다.
//!
//! # 개요
//!
//! 연습 한 판은 다음 세 부품으로 구성됩니다:
//!
//! 1. **단어장**: 연습할 단어 목록 (JSON 파일 또는 내장 목록)
//! 2. **키 시퀀스 역변환**: 단어를 눌러야 할 자모 키 순서로 풀기
//! 3. **세션**: 목표 단어, 입력 버퍼, 타수/오타 통계 관리
//!
//! # 사용 예시
//!
//! ```
//! use tajagi::practice::{PracticeSession, Wordbook};
//!
//! let book = Wordbook::builtin();
//! let word = &book.words()[0];
//!
//! let mut session = PracticeSession::new(&word.text);
//! while let Some(key) = session.next_key() {
//!     session.press(key);
//! }
//! assert!(session.is_complete());
//! assert_eq!(session.errors(), 0);
//! ```

mod keystrokes;
mod session;
mod wordbook;

// 공개 인터페이스
pub use keystrokes::keystrokes_for;
pub use session::PracticeSession;
pub use wordbook::{Word, Wordbook, WordbookError};
