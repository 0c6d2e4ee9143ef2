//! Tajagi - 한글 자모 타자 연습 프로그램

use std::io::{self, BufRead, Write};

use tajagi::config::load_config;
use tajagi::keyboard::{jamo_to_key, key_to_jamo};
use tajagi::practice::{PracticeSession, Word, Wordbook};

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // 설정 로드
    let config = load_config();

    // 단어장 선택 (사용자 단어장 로드 실패 시 내장 단어장 폴백)
    let book = if config.wordlist_path.is_empty() {
        Wordbook::builtin()
    } else {
        match Wordbook::load(&config.wordlist_path) {
            Ok(book) => book,
            Err(e) => {
                log::warn!(
                    "단어장 로드 실패 ({}), 내장 단어장 사용: {}",
                    config.wordlist_path,
                    e
                );
                Wordbook::builtin()
            }
        }
    };

    let words: Vec<Word> = if config.word_limit > 0 {
        book.words().iter().take(config.word_limit).cloned().collect()
    } else {
        book.words().to_vec()
    };

    println!("tajagi - 한글 자모 타자 연습");
    println!("두벌식 영문 키 또는 자모를 입력하고 Enter를 누르세요.");
    println!("'<' = 백스페이스, 빈 줄 = 단어 건너뛰기, q = 종료");
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut total_presses = 0usize;
    let mut total_errors = 0usize;
    let mut completed = 0usize;

    'words: for word in &words {
        let mut session = PracticeSession::new(&word.text);

        match &word.meaning {
            Some(meaning) => println!("목표: {} ({})", word.text, meaning),
            None => println!("목표: {}", word.text),
        }
        if config.show_hint {
            let jamo_keys: String = session.key_sequence().iter().collect();
            let eng_keys: String = session
                .key_sequence()
                .iter()
                .map(|&j| jamo_to_key(j).unwrap_or(j))
                .collect();
            println!("자모: {} ({})", jamo_keys, eng_keys);
        }

        loop {
            print!("> ");
            let _ = io::stdout().flush();

            let line = match lines.next() {
                Some(Ok(line)) => line,
                // EOF나 읽기 실패 시 연습 종료
                _ => break 'words,
            };
            let line = line.trim();

            if line == "q" {
                break 'words;
            }
            if line.is_empty() {
                println!("건너뜀: {}", word.text);
                println!();
                continue 'words;
            }

            for c in line.chars() {
                if c == '<' {
                    session.backspace();
                } else {
                    // 영문 키는 자모로 바꾸고, 자모나 그 외 문자는 그대로 전달
                    let key = key_to_jamo(c).unwrap_or(c);
                    session.press(key);
                }
            }

            println!("입력: {}", session.buffer());

            if session.is_complete() {
                println!(
                    "통과! (타수 {}, 오타 {})",
                    session.presses(),
                    session.errors()
                );
                println!();
                total_presses += session.presses();
                total_errors += session.errors();
                completed += 1;
                continue 'words;
            }

            if !session.on_track() {
                println!("오타입니다. '<'로 지우고 다시 입력하세요.");
            } else if config.show_hint {
                if let Some(next) = session.next_key() {
                    println!("다음 키: {}", next);
                }
            }
        }
    }

    // 연습 요약
    println!();
    println!("연습 종료: {}개 단어 완성", completed);
    if total_presses > 0 {
        let accuracy = 100.0 * (total_presses - total_errors) as f64 / total_presses as f64;
        println!(
            "총 타수 {}, 오타 {}, 정확도 {:.1}%",
            total_presses, total_errors, accuracy
        );
    }
}
