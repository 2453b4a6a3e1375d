//! yconvert - YAML TO JSON CONVERTER
//!
//! 메인 엔트리포인트

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use yconvert::{
    cli::Args,
    converter::{convert, pretty_output_path, ConvertOutcome},
    stats::{format_bytes, Statistics},
};

fn main() -> Result<()> {
    let args = Args::parse();

    // 입력 파일 확인
    validate_input(&args)?;

    // 헤더 출력
    print_header(&args);

    // 통계 초기화
    let mut stats = Statistics::new();

    // 변환 실행
    println!("\n{}", "⚡ 변환 중...".bright_cyan());

    let options = args.to_options();
    let outcome = convert(&args.input, &options)?;

    // 결과 기록 및 출력
    stats.record_read(outcome.source_bytes);
    print_outcome(&args, &outcome, &mut stats);

    // 통계 출력
    stats.print_summary();

    println!("\n{} 변환 완료\n", "✅".bright_green());

    Ok(())
}

/// 입력 경로 유효성 검사
fn validate_input(args: &Args) -> Result<()> {
    if !args.input.exists() {
        anyhow::bail!("YAML 파일을 찾을 수 없습니다: {:?}", args.input);
    }

    if !args.input.is_file() {
        anyhow::bail!("입력 경로가 파일이 아닙니다: {:?}", args.input);
    }

    Ok(())
}

/// 헤더 출력
fn print_header(args: &Args) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!("{}", " 🚀 YAML TO JSON CONVERTER".bright_white().bold());
    println!("{}", "═".repeat(50).bright_blue());
    println!("  {} 입력 파일: {:?}", "📂".bright_cyan(), args.input);

    let pretty_path = args
        .output
        .clone()
        .unwrap_or_else(|| pretty_output_path(&args.input));

    if !args.minify_only {
        println!("  {} Pretty 출력: {:?}", "📄".bright_green(), pretty_path);
    }

    if !args.no_minify {
        println!(
            "  {} 압축 출력: {:?}",
            "📦".bright_magenta(),
            yconvert::converter::minified_output_path(&pretty_path)
        );
    }

    if args.minify_only {
        println!(
            "  {} {}",
            "⚙️".bright_yellow(),
            "압축 전용 모드 (Pretty 출력 생략)".yellow()
        );
    }

    if args.no_minify {
        println!(
            "  {} {}",
            "⚙️".bright_yellow(),
            "Pretty 전용 모드 (압축 출력 생략)".yellow()
        );
    }

    println!("{}", "═".repeat(50).bright_blue());
}

/// 생성된 아티팩트 경로 및 크기 출력
fn print_outcome(args: &Args, outcome: &ConvertOutcome, stats: &mut Statistics) {
    if let Some(ref artifact) = outcome.pretty {
        stats.record_artifact(artifact.bytes);
        println!(
            "  {} Pretty JSON 저장: {:?}",
            "✓".green(),
            artifact.path
        );
        if args.verbose {
            println!("    {}", format_bytes(artifact.bytes).dimmed());
        }
    }

    if let Some(ref artifact) = outcome.minified {
        stats.record_artifact(artifact.bytes);
        println!(
            "  {} 압축 JSON 저장: {:?}",
            "✓".green(),
            artifact.path
        );
        if args.verbose {
            println!("    {}", format_bytes(artifact.bytes).dimmed());
        }
    }

    if outcome.pretty.is_none() && outcome.minified.is_none() {
        println!("{}", "⚠️ 생성할 출력이 없습니다.".yellow());
    }
}
