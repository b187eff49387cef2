use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::core::rendering::shader::{
    load_shader_source, resolve_program_sources, ShaderError, ShaderSrc, ShaderStage,
};

static NEXT_FILE_ID: AtomicU32 = AtomicU32::new(0);

/// A scratch file that removes itself when dropped
struct ScratchFile {
    path: PathBuf,
}

impl ScratchFile {
    fn new(content: &str) -> Self {
        let id = NEXT_FILE_ID.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "proto_render_shader_test_{}_{}.txt",
            std::process::id(),
            id
        ));
        fs::write(&path, content).expect("Should be able to write scratch shader file");
        ScratchFile { path }
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

fn missing_path() -> PathBuf {
    std::env::temp_dir().join("proto_render_shader_test_does_not_exist.txt")
}

#[test]
fn test_missing_file_is_reported_with_its_path() {
    let path = missing_path();
    let result = load_shader_source(&path, ShaderStage::Vertex);

    match result {
        Err(ShaderError::FileNotFound {
            stage,
            path: reported,
            ..
        }) => {
            assert_eq!(stage, ShaderStage::Vertex);
            assert_eq!(reported, path);
        }
        other => panic!("Expected FileNotFound, got {:?}", other),
    }
}

#[test]
fn test_loaded_source_is_byte_exact() {
    let content = "#version 430 core\nvoid main() {}\n";
    let file = ScratchFile::new(content);

    let loaded = load_shader_source(&file.path, ShaderStage::Fragment)
        .expect("Should load an existing file");
    assert_eq!(loaded, content);
}

#[test]
fn test_file_without_trailing_newline_keeps_its_final_character() {
    // The final '}' must survive loading even with no newline after it
    let content = "void main() {}";
    let file = ScratchFile::new(content);

    let loaded =
        load_shader_source(&file.path, ShaderStage::Vertex).expect("Should load an existing file");
    assert_eq!(loaded, content);
    assert!(loaded.ends_with('}'));
}

#[test]
fn test_loading_twice_is_deterministic() {
    let content = "uniform mat4 modelMat;\nvoid main() {}\n";
    let file = ScratchFile::new(content);

    let first =
        load_shader_source(&file.path, ShaderStage::Vertex).expect("Should load an existing file");
    let second =
        load_shader_source(&file.path, ShaderStage::Vertex).expect("Should load an existing file");
    assert_eq!(first, second);
}

#[test]
fn test_unreadable_path_is_an_error() {
    // A directory can't be read as shader text. Depending on the platform
    // this surfaces at open time or at read time
    let path = std::env::temp_dir();
    let result = load_shader_source(&path, ShaderStage::Fragment);

    match result {
        Err(ShaderError::FileNotFound { .. }) | Err(ShaderError::ReadFailed { .. }) => {}
        other => panic!("Expected an open or read error, got {:?}", other),
    }
}

#[test]
fn test_vertex_source_failure_aborts_before_fragment() {
    // Both paths are invalid. The reported failure must be about the vertex
    // stage, which proves the fragment source was never attempted
    let vertex_src = ShaderSrc::File(missing_path());
    let fragment_src = ShaderSrc::File(missing_path());

    let result = resolve_program_sources(&vertex_src, &fragment_src);
    match result {
        Err(ShaderError::FileNotFound { stage, .. }) => assert_eq!(stage, ShaderStage::Vertex),
        other => panic!("Expected FileNotFound for the vertex stage, got {:?}", other),
    }
}

#[test]
fn test_fragment_source_failure_is_reported_when_vertex_loads() {
    let vertex = ScratchFile::new("void main() {}\n");
    let vertex_src = ShaderSrc::File(vertex.path.clone());
    let fragment_src = ShaderSrc::File(missing_path());

    let result = resolve_program_sources(&vertex_src, &fragment_src);
    match result {
        Err(ShaderError::FileNotFound { stage, .. }) => assert_eq!(stage, ShaderStage::Fragment),
        other => panic!("Expected FileNotFound for the fragment stage, got {:?}", other),
    }
}

#[test]
fn test_inline_code_resolves_without_touching_disk() {
    let code = "void main() {}".to_owned();
    let resolved = ShaderSrc::Code(code.clone())
        .resolve(ShaderStage::Vertex)
        .expect("Inline code always resolves");
    assert_eq!(resolved, code);
}

#[test]
fn test_error_messages_carry_the_diagnostic_log_verbatim() {
    let log = "0:12(3): error: syntax error, unexpected IDENTIFIER".to_owned();

    let compile_error = ShaderError::CompilationFailed {
        stage: ShaderStage::Vertex,
        log: log.clone(),
    };
    let message = compile_error.to_string();
    assert!(message.contains("vertex"));
    assert!(message.contains(&log));

    let link_error = ShaderError::LinkFailed { log: log.clone() };
    let message = link_error.to_string();
    assert!(message.contains("link"));
    assert!(message.contains(&log));
}

#[test]
fn test_file_errors_name_the_failing_file() {
    let path = missing_path();
    let error = load_shader_source(&path, ShaderStage::Vertex).unwrap_err();
    let message = error.to_string();

    assert!(message.contains("vertex"));
    assert!(message.contains(path.to_str().unwrap()));
}
