//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::Parser;
use std::path::PathBuf;

use crate::converter::ConvertOptions;

/// yconvert CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "yconvert",
    author = "YourName <your@email.com>",
    version,
    about = "YAML TO JSON CONVERTER - YAML 콘텐츠 파일을 Pretty/압축 JSON으로 변환하는 CLI 도구",
    long_about = r#"
YAML TO JSON CONVERTER
======================

YAML 콘텐츠 파일을 한 번만 파싱하여
Pretty JSON과 압축(minified) JSON 파일로 변환합니다.

특징:
  • 한 번 파싱, 두 번 직렬화 - 두 출력이 항상 동일한 값 표현
  • 키 입력 순서 유지 및 비ASCII 문자 그대로 보존
  • 출력 경로 자동 유도 (.json / .min.json)
  • 상세 통계 및 컬러 출력

예제:
  yconvert -i content/pocket_operations.yaml
  yconvert -i content/pocket_operations.yaml --no-minify
  yconvert -i content/pocket_operations.yaml --minify-only
  yconvert -i data.yaml -o build/data.json --verbose
"#
)]
pub struct Args {
    /// 변환할 YAML 파일 경로
    #[arg(short, long)]
    pub input: PathBuf,

    /// Pretty JSON 출력 경로 (기본값: 입력과 같은 위치의 .json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 압축 JSON 파일을 생성하지 않음 (Pretty만 출력)
    #[arg(long, conflicts_with = "minify_only")]
    pub no_minify: bool,

    /// 압축 JSON 파일만 생성 (Pretty 출력 생략)
    #[arg(long)]
    pub minify_only: bool,

    /// 상세 출력 모드
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// CLI 인자를 변환 옵션으로 매핑
    pub fn to_options(&self) -> ConvertOptions {
        ConvertOptions::new()
            .with_pretty(!self.minify_only)
            .with_minify(!self.no_minify)
            .with_output(self.output.clone())
    }
}
