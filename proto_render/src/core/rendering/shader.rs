use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// One shader compilation unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

/// Where the source text of one shader stage comes from
#[derive(Debug, Clone)]
pub enum ShaderSrc {
    Code(String),
    File(PathBuf),
}

impl ShaderSrc {
    /// Resolve this source to shader text, reading from disk when needed
    pub fn resolve(&self, stage: ShaderStage) -> Result<String, ShaderError> {
        match self {
            ShaderSrc::Code(code) => Ok(code.clone()),
            ShaderSrc::File(path) => load_shader_source(path, stage),
        }
    }
}

/// Possible uniform data types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderDataType {
    None,
    Float,
    Float2,
    Float3,
    Float4,
    Mat3,
    Mat4,
    Int,
    Int2,
    Int3,
    Int4,
    Bool,
}

impl ShaderDataType {
    /// Size in bytes for this data type
    pub fn get_size(&self) -> u32 {
        match self {
            ShaderDataType::None => 0,
            ShaderDataType::Float | ShaderDataType::Int => 4,
            ShaderDataType::Float2 | ShaderDataType::Int2 => 2 * 4,
            ShaderDataType::Float3 | ShaderDataType::Int3 => 3 * 4,
            ShaderDataType::Float4 | ShaderDataType::Int4 => 4 * 4,
            ShaderDataType::Mat3 => 3 * 3 * 4,
            ShaderDataType::Mat4 => 4 * 4 * 4,
            ShaderDataType::Bool => 1,
        }
    }
}

/// A dynamically typed value assignable to a shader uniform.
/// Materials store these per parameter name
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShaderDataTypeValue {
    Float(f32),
    Float2(glam::Vec2),
    Float3(glam::Vec3),
    Float4(glam::Vec4),
    Mat3(glam::Mat3),
    Mat4(glam::Mat4),
    Int(i32),
}

impl ShaderDataTypeValue {
    pub fn data_type(&self) -> ShaderDataType {
        match self {
            ShaderDataTypeValue::Float(_) => ShaderDataType::Float,
            ShaderDataTypeValue::Float2(_) => ShaderDataType::Float2,
            ShaderDataTypeValue::Float3(_) => ShaderDataType::Float3,
            ShaderDataTypeValue::Float4(_) => ShaderDataType::Float4,
            ShaderDataTypeValue::Mat3(_) => ShaderDataType::Mat3,
            ShaderDataTypeValue::Mat4(_) => ShaderDataType::Mat4,
            ShaderDataTypeValue::Int(_) => ShaderDataType::Int,
        }
    }
}

/// Errors produced by the shader build pipeline. Every failure is terminal
/// for the build attempt: there is no retry and no fallback shader
#[derive(Debug, Error)]
pub enum ShaderError {
    /// The stage's source file could not be opened
    #[error("could not open {stage} shader file '{}': {source}", .path.display())]
    FileNotFound {
        stage: ShaderStage,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The stage's source file was opened but reading it failed
    #[error("could not read {stage} shader file '{}': {source}", .path.display())]
    ReadFailed {
        stage: ShaderStage,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Fewer bytes than the file holds were read, so the source text can't
    /// be trusted
    #[error(
        "incomplete read of {stage} shader file '{}': expected {expected} bytes, read {actual}",
        .path.display()
    )]
    FileReadIncomplete {
        stage: ShaderStage,
        path: PathBuf,
        expected: u64,
        actual: u64,
    },
    /// The device rejected the stage's source. The log is the compiler
    /// diagnostic text, verbatim
    #[error("{stage} shader failed to compile: {log}")]
    CompilationFailed { stage: ShaderStage, log: String },
    /// Both stages compiled but the program failed to link
    #[error("shader program failed to link: {log}")]
    LinkFailed { log: String },
    /// Colliding name of the uniform, and already registered type
    #[error("uniform '{uniform_name}' already registered with type {prev_type:?}")]
    UniformAlreadyExists {
        uniform_name: String,
        prev_type: ShaderDataType,
    },
}

/// Resolve the pair of sources for a program build.
///
/// The vertex source is resolved first and a failure aborts the whole build:
/// the fragment source is never touched in that case
pub fn resolve_program_sources(
    vertex_src: &ShaderSrc,
    fragment_src: &ShaderSrc,
) -> Result<(String, String), ShaderError> {
    let vertex_code = vertex_src.resolve(ShaderStage::Vertex)?;
    let fragment_code = fragment_src.resolve(ShaderStage::Fragment)?;
    Ok((vertex_code, fragment_code))
}

/// Load the source text of one shader stage from a file.
///
/// The file content is kept byte-for-byte: a file without a trailing newline
/// keeps its final character. The read is confirmed complete by comparing the
/// number of bytes read against the file size; a mismatch is reported as
/// [ShaderError::FileReadIncomplete] instead of being silently accepted.
pub fn load_shader_source(path: &Path, stage: ShaderStage) -> Result<String, ShaderError> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(source) => {
            log::warn!(
                "Could not open {} shader from file '{}': {}",
                stage,
                path.display(),
                source
            );
            return Err(ShaderError::FileNotFound {
                stage,
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let expected = match file.metadata() {
        Ok(metadata) => metadata.len(),
        Err(source) => {
            log::warn!(
                "Could not read {} shader from file '{}': {}",
                stage,
                path.display(),
                source
            );
            return Err(ShaderError::ReadFailed {
                stage,
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let mut source_text = String::new();
    let actual = match file.read_to_string(&mut source_text) {
        Ok(bytes_read) => bytes_read as u64,
        Err(source) => {
            log::warn!(
                "Could not read {} shader from file '{}': {}",
                stage,
                path.display(),
                source
            );
            return Err(ShaderError::ReadFailed {
                stage,
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if actual != expected {
        log::warn!(
            "Incomplete read of {} shader from file '{}' ({} of {} bytes)",
            stage,
            path.display(),
            actual,
            expected
        );
        return Err(ShaderError::FileReadIncomplete {
            stage,
            path: path.to_path_buf(),
            expected,
            actual,
        });
    }

    Ok(source_text)
}
