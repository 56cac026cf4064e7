use std::fs;
use std::path::{Path, PathBuf};
use crate::error::StoreError;

/// 분석 대상 소스 문서
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub content: String,
}

/// 문서 저장소 계약. 파이프라인은 조회만 소비한다.
pub trait DocumentStore {
    fn load(&self, name: &str) -> Result<Document, StoreError>;
    fn save(&self, name: &str, content: &str) -> Result<(), StoreError>;
}

/// 디렉토리 하나를 루트로 하는 파일 기반 저장소
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl DocumentStore for FileStore {
    fn load(&self, name: &str) -> Result<Document, StoreError> {
        let path = self.resolve(name);

        if !path.is_file() {
            return Err(StoreError::NotFound(name.to_string()));
        }

        let content = fs::read_to_string(&path)?;
        Ok(Document {
            name: name.to_string(),
            content,
        })
    }

    fn save(&self, name: &str, content: &str) -> Result<(), StoreError> {
        let path = self.resolve(name);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&path, content)?;
        Ok(())
    }
}

/// 경로 인자를 저장소 조회로 해석한다. 현재 디렉토리 기준 상대 경로도 허용.
pub fn load_source(path: &str) -> Result<Document, StoreError> {
    let path_ref = Path::new(path);
    let root = path_ref.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let name = path_ref
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| StoreError::NotFound(path.to_string()))?;

    FileStore::new(root).load(&name)
}
