//! 통계 및 유틸리티 모듈
//!
//! 변환 통계 수집 및 포맷팅을 담당합니다.

use colored::Colorize;
use std::time::{Duration, Instant};

/// 변환 통계 구조체
#[derive(Debug, Default)]
pub struct Statistics {
    /// 읽은 총 바이트
    bytes_read: u64,
    /// 쓴 총 바이트
    bytes_written: u64,
    /// 생성한 아티팩트 수
    artifacts_written: usize,
    /// 처리 시작 시간
    start_time: Option<Instant>,
}

impl Statistics {
    /// 새 통계 인스턴스 생성
    pub fn new() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// 읽은 바이트 기록
    pub fn record_read(&mut self, bytes: u64) {
        self.bytes_read += bytes;
    }

    /// 생성한 아티팩트 기록
    pub fn record_artifact(&mut self, bytes: u64) {
        self.bytes_written += bytes;
        self.artifacts_written += 1;
    }

    /// 읽은 바이트 반환
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// 쓴 바이트 반환
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// 생성한 아티팩트 수 반환
    pub fn artifacts_written(&self) -> usize {
        self.artifacts_written
    }

    /// 경과 시간 반환
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// 변환 통계 요약 출력
    pub fn print_summary(&self) {
        println!("\n{}", "═".repeat(50).bright_blue());
        println!("{}", " 📊 변환 통계".bright_white().bold());
        println!("{}", "═".repeat(50).bright_blue());

        println!(
            "  {} 입력 용량:    {}",
            "📥".bright_yellow(),
            format_bytes(self.bytes_read)
        );
        println!(
            "  {} 출력 용량:    {}",
            "📤".bright_magenta(),
            format_bytes(self.bytes_written)
        );
        println!(
            "  {} 생성 파일:    {}",
            "📦".bright_cyan(),
            self.artifacts_written.to_string().bright_green()
        );
        println!(
            "  {} 처리 시간:    {}",
            "⏱️".bright_cyan(),
            format_duration(self.elapsed())
        );

        println!("{}", "═".repeat(50).bright_blue());
    }
}

/// 바이트를 읽기 쉬운 형식으로 변환
///
/// # Arguments
/// * `bytes` - 바이트 수
///
/// # Returns
/// 형식화된 문자열 (예: "1.25 MB")
///
/// # Examples
/// ```
/// use yconvert::stats::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1048576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// 경과 시간을 읽기 쉬운 형식으로 변환
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs >= 60 {
        let mins = secs / 60;
        let remaining_secs = secs % 60;
        format!("{}분 {}초", mins, remaining_secs)
    } else if secs > 0 {
        format!("{}.{:03}초", secs, millis)
    } else {
        format!("{}ms", millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(500), "500 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1024), "1.00 KB");
        assert_eq!(format_bytes(1536), "1.50 KB");
        assert_eq!(format_bytes(1048576), "1.00 MB");
        assert_eq!(format_bytes(1073741824), "1.00 GB");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
        assert_eq!(format_duration(Duration::from_secs(5)), "5.000초");
        assert_eq!(format_duration(Duration::from_secs(65)), "1분 5초");
    }

    #[test]
    fn test_statistics_counters() {
        let mut stats = Statistics::new();

        stats.record_read(2048);
        stats.record_artifact(1024);
        stats.record_artifact(512);

        assert_eq!(stats.bytes_read(), 2048);
        assert_eq!(stats.bytes_written(), 1536);
        assert_eq!(stats.artifacts_written(), 2);
    }
}
