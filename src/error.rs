use thiserror::Error;

/// 추론 백엔드 호출 단계에서 발생하는 오류
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("추론 백엔드 호출 실패: {0}")]
    Request(String),

    #[error("추론 백엔드 응답이 비어 있습니다")]
    EmptyResponse,
}

/// 백엔드 응답을 구조화된 레코드로 디코딩하는 단계에서 발생하는 오류
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("응답에서 JSON 페이로드를 찾을 수 없습니다")]
    MissingPayload,

    #[error("응답 구조가 올바르지 않습니다: {0}")]
    InvalidShape(#[from] serde_json::Error),
}

/// 분석 엔진의 공개 연산이 반환하는 오류.
/// 백엔드/디코딩 오류는 변형 없이 그대로 전파한다 - 재시도나 부분 결과 없음.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// 문서 저장소 오류
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("문서를 찾을 수 없습니다: {0}")]
    NotFound(String),

    #[error("문서 저장소 입출력 실패: {0}")]
    Io(#[from] std::io::Error),
}
