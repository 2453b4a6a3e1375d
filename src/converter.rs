//! YAML 변환 모듈
//!
//! 단일 YAML 파일의 읽기, 파싱, JSON 직렬화 및 쓰기를 담당합니다.

use memmap2::Mmap;
use serde_json::{Map, Number, Value};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};

/// 변환 옵션
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Pretty JSON 출력 여부
    pub pretty: bool,
    /// 압축 JSON 출력 여부
    pub minify: bool,
    /// Pretty 출력 경로 재정의 (None이면 입력 경로에서 유도)
    pub output: Option<PathBuf>,
    /// 대용량 파일 임계값 (이상이면 메모리 매핑 사용)
    pub mmap_threshold: u64,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            minify: true,
            output: None,
            mmap_threshold: 10 * 1024 * 1024, // 10MB
        }
    }
}

impl ConvertOptions {
    /// 기본 옵션 생성 (Pretty + 압축 모두 출력)
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretty 출력 설정
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// 압축 출력 설정
    pub fn with_minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    /// Pretty 출력 경로 재정의
    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }
}

/// 생성된 출력 아티팩트 정보
#[derive(Debug, Clone)]
pub struct WrittenArtifact {
    /// 출력 파일 경로
    pub path: PathBuf,
    /// 쓴 바이트 수
    pub bytes: u64,
}

/// 변환 결과
#[derive(Debug)]
pub struct ConvertOutcome {
    /// 입력 파일 경로
    pub source: PathBuf,
    /// 입력 파일 크기
    pub source_bytes: u64,
    /// Pretty JSON 아티팩트 (생성 시)
    pub pretty: Option<WrittenArtifact>,
    /// 압축 JSON 아티팩트 (생성 시)
    pub minified: Option<WrittenArtifact>,
}

/// 입력 경로에서 Pretty JSON 출력 경로 유도 (같은 위치, `.json` 확장자)
///
/// # Examples
/// ```
/// use std::path::{Path, PathBuf};
/// use yconvert::converter::pretty_output_path;
///
/// let out = pretty_output_path(Path::new("content/patterns.yaml"));
/// assert_eq!(out, PathBuf::from("content/patterns.json"));
/// ```
pub fn pretty_output_path(source: &Path) -> PathBuf {
    source.with_extension("json")
}

/// Pretty 출력 경로에서 압축 JSON 출력 경로 유도 (같은 stem + `.min.json`)
///
/// # Examples
/// ```
/// use std::path::{Path, PathBuf};
/// use yconvert::converter::minified_output_path;
///
/// let out = minified_output_path(Path::new("content/patterns.json"));
/// assert_eq!(out, PathBuf::from("content/patterns.min.json"));
/// ```
pub fn minified_output_path(pretty: &Path) -> PathBuf {
    let stem = pretty
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    pretty.with_file_name(format!("{}.min.json", stem))
}

/// 단일 YAML 파일을 JSON으로 변환
///
/// 입력을 정확히 한 번만 파싱하고, 같은 파싱 결과로부터 요청된 출력을
/// 모두 직렬화합니다. 두 출력이 항상 동일한 값을 표현하도록 입력을
/// 다시 읽지 않습니다.
///
/// # Arguments
/// * `source` - 변환할 YAML 파일 경로
/// * `options` - 변환 옵션
///
/// # Returns
/// 생성된 아티팩트 정보를 담은 `ConvertOutcome`
pub fn convert(source: &Path, options: &ConvertOptions) -> Result<ConvertOutcome> {
    let meta = fs::metadata(source).map_err(|_| ConvertError::InputNotFound {
        path: source.to_path_buf(),
    })?;

    if !meta.is_file() {
        return Err(ConvertError::NotAFile {
            path: source.to_path_buf(),
        });
    }

    let source_bytes = meta.len();

    let document: serde_yaml::Value = if source_bytes >= options.mmap_threshold {
        // 대용량 파일: 메모리 매핑 사용
        parse_with_mmap(source)?
    } else {
        // 일반 파일: 버퍼 리더 사용
        parse_with_reader(source)?
    };

    let document = yaml_to_json(document);

    let mut outcome = ConvertOutcome {
        source: source.to_path_buf(),
        source_bytes,
        pretty: None,
        minified: None,
    };

    let pretty_path = match &options.output {
        Some(path) => path.clone(),
        None => pretty_output_path(source),
    };

    if options.pretty {
        let text = serde_json::to_string_pretty(&document).map_err(|e| {
            ConvertError::SerializeError {
                file: source.to_path_buf(),
                reason: e.to_string(),
            }
        })?;
        let bytes = write_artifact(&pretty_path, &text)?;
        outcome.pretty = Some(WrittenArtifact {
            path: pretty_path.clone(),
            bytes,
        });
    }

    if options.minify {
        let min_path = minified_output_path(&pretty_path);
        let text =
            serde_json::to_string(&document).map_err(|e| ConvertError::SerializeError {
                file: source.to_path_buf(),
                reason: e.to_string(),
            })?;
        let bytes = write_artifact(&min_path, &text)?;
        outcome.minified = Some(WrittenArtifact {
            path: min_path,
            bytes,
        });
    }

    Ok(outcome)
}

/// 출력 아티팩트 쓰기 (기존 파일은 전체 덮어쓰기)
fn write_artifact(path: &Path, text: &str) -> Result<u64> {
    fs::write(path, text).map_err(|e| ConvertError::WriteError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(text.len() as u64)
}

/// 버퍼 리더를 사용한 YAML 파싱
fn parse_with_reader(path: &Path) -> Result<serde_yaml::Value> {
    let file = File::open(path).map_err(|e| ConvertError::FileOpenError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let reader = BufReader::new(file);
    serde_yaml::from_reader(reader).map_err(|e| ConvertError::ParseError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// 메모리 매핑을 사용한 YAML 파싱 (대용량 파일용)
fn parse_with_mmap(path: &Path) -> Result<serde_yaml::Value> {
    let file = File::open(path).map_err(|e| ConvertError::FileOpenError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mmap = unsafe {
        Mmap::map(&file).map_err(|e| ConvertError::FileOpenError {
            file: path.to_path_buf(),
            reason: format!("메모리 매핑 실패: {}", e),
        })?
    };

    serde_yaml::from_slice(&mmap).map_err(|e| ConvertError::ParseError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// `serde_yaml::Value`를 `serde_json::Value`로 변환
///
/// 스키마 검증이나 키 변경 없이 구조를 그대로 옮깁니다. 문자열이 아닌
/// 매핑 키는 문자열화하고, 태그된 값은 내부 값으로 풀어냅니다.
/// 유한하지 않은 실수는 null이 됩니다.
pub fn yaml_to_json(value: serde_yaml::Value) -> Value {
    match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(num) => {
            if let Some(i) = num.as_i64() {
                Value::Number(Number::from(i))
            } else if let Some(u) = num.as_u64() {
                Value::Number(Number::from(u))
            } else if let Some(f) = num.as_f64() {
                Number::from_f64(f)
                    .map(Value::Number)
                    .unwrap_or(Value::Null)
            } else {
                Value::Null
            }
        }
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(seq) => {
            Value::Array(seq.into_iter().map(yaml_to_json).collect())
        }
        serde_yaml::Value::Mapping(map) => {
            let mut obj = Map::new();
            for (k, v) in map.into_iter() {
                let key = match k {
                    serde_yaml::Value::String(s) => s,
                    other => serde_yaml::to_string(&other)
                        .unwrap_or_default()
                        .trim()
                        .to_string(),
                };
                obj.insert(key, yaml_to_json(v));
            }
            Value::Object(obj)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}
