//! yconvert - YAML TO JSON CONVERTER
//!
//! YAML 콘텐츠 파일을 Pretty JSON과 압축(minified) JSON으로 변환하는 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 🔁 **한 번 파싱, 두 번 직렬화**: 두 출력이 항상 동일한 값을 표현
//! - ✨ **Pretty 출력**: 2칸 들여쓰기, 키 입력 순서 유지
//! - 📦 **압축 출력**: 공백 없는 최소 크기 JSON
//! - 🌍 **비ASCII 보존**: 악센트 문자 등을 이스케이프 없이 그대로 출력
//! - 📊 **상세 통계**: 입출력 용량, 생성 파일 수, 처리 시간 표시
//! - 🎨 **컬러 출력**: 가독성 높은 컬러 터미널 출력
//!
//! # 예제
//!
//! ```bash
//! # 기본 사용법 (Pretty + 압축 모두 생성)
//! yconvert -i content/pocket_operations.yaml
//!
//! # Pretty 출력만
//! yconvert -i content/pocket_operations.yaml --no-minify
//!
//! # 압축 출력만
//! yconvert -i content/pocket_operations.yaml --minify-only
//! ```

pub mod cli;
pub mod converter;
pub mod error;
pub mod stats;

// Re-exports for convenient access
pub use cli::Args;
pub use converter::{
    convert, minified_output_path, pretty_output_path, ConvertOptions, ConvertOutcome,
    WrittenArtifact,
};
pub use error::{ConvertError, Result};
pub use stats::{format_bytes, Statistics};
